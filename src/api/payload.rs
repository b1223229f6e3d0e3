//! Request payload assembly: optional-field stripping, JSON vs. multipart.

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::error::{ApiError, ApiResult};

/// Fixed multipart field name for contract attachments.
pub const DOCUMENT_FIELD: &str = "document";

/// Maximum accepted attachment size (5 MB), matching the backend limit.
pub const MAX_ATTACHMENT_BYTES: usize = 5 * 1024 * 1024;

/// Mutable-field mapping for a create/update request.
///
/// Applies one optional-field policy at assembly time, regardless of the
/// transport the payload ends up on: inserting `null` or an empty string
/// drops the field instead of sending it. The backend rejects `""` as a
/// value for optional date/enum fields, so an unset `end_date` must be
/// absent from the body, not empty.
///
/// ```rust,ignore
/// let payload = Payload::new()
///     .field("contract_type", "indeterminato")
///     .field("ral", 35000)
///     .field("start_date", "2024-01-15")
///     .field("end_date", ""); // dropped
/// ```
#[derive(Debug, Clone, Default)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a payload from a JSON object, stripping empty fields.
    ///
    /// Non-object values yield an empty payload.
    pub fn from_value(value: Value) -> Self {
        let mut payload = Self::new();
        if let Value::Object(map) = value {
            for (name, value) in map {
                payload.insert(name, value);
            }
        }
        payload
    }

    /// Set a field, applying the optional-field policy.
    ///
    /// Values that serialize to `null` or `""` are dropped.
    pub fn field(mut self, name: impl Into<String>, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.insert(name.into(), value);
        self
    }

    /// Remove a field by name, if present.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    /// True when a field survived the policy and will be sent.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields that will be sent.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field will be sent.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn insert(&mut self, name: impl Into<String>, value: Value) {
        if Self::is_empty_value(&value) {
            return;
        }
        self.fields.insert(name.into(), value);
    }

    fn is_empty_value(value: &Value) -> bool {
        value.is_null() || value.as_str() == Some("")
    }

    /// Serialize to the JSON body sent on the non-multipart path.
    pub fn into_json(self) -> Value {
        Value::Object(self.fields)
    }

    /// Build the multipart form for file-bearing requests.
    ///
    /// Every surviving field becomes a text part; the attachment is appended
    /// last under [`DOCUMENT_FIELD`].
    pub fn into_multipart(self, document: Attachment) -> ApiResult<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            let text = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            form = form.text(name, text);
        }
        Ok(form.part(DOCUMENT_FIELD, document.into_part()?))
    }
}

/// A PDF file to attach to a contract request.
///
/// Absent means "no change to any existing attachment" — updates without a
/// file leave the stored document untouched.
#[derive(Debug, Clone)]
pub struct Attachment {
    file_name: String,
    bytes: Vec<u8>,
}

impl Attachment {
    /// Create a PDF attachment, enforcing the backend's acceptance rules
    /// up front: `.pdf` extension and at most [`MAX_ATTACHMENT_BYTES`].
    pub fn pdf(file_name: impl Into<String>, bytes: Vec<u8>) -> ApiResult<Self> {
        let file_name = file_name.into();
        if !file_name.to_lowercase().ends_with(".pdf") {
            return Err(ApiError::InvalidParameter(format!(
                "only PDF attachments are accepted, got '{}'",
                file_name
            )));
        }
        if bytes.len() > MAX_ATTACHMENT_BYTES {
            return Err(ApiError::InvalidParameter(format!(
                "attachment exceeds 5 MB limit ({} bytes)",
                bytes.len()
            )));
        }
        Ok(Self { file_name, bytes })
    }

    /// The file name sent in the multipart part headers.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Size of the file in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a zero-byte file.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn into_part(self) -> ApiResult<Part> {
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str("application/pdf")
            .map_err(ApiError::Http)?;
        Ok(part)
    }
}

/// Body of a mutating request, decided by the caller rather than inspected
/// at the transport boundary.
///
/// The transport cannot mix a file and a content-type-declared JSON body in
/// one request, so file-bearing calls take the multipart branch and the
/// client leaves the content-type header to reqwest (the boundary is part
/// of the generated header; overriding it breaks parsing server-side).
#[derive(Debug)]
pub enum RequestBody {
    /// Plain JSON object body.
    Json(Payload),
    /// Multipart body: payload fields as text parts plus one PDF part.
    Multipart {
        /// Non-file fields
        payload: Payload,
        /// The PDF attachment, sent under [`DOCUMENT_FIELD`]
        document: Attachment,
    },
}

impl RequestBody {
    /// Pick the branch for a contract request: JSON when there is no file,
    /// multipart otherwise.
    pub fn with_document(payload: Payload, document: Option<Attachment>) -> Self {
        match document {
            Some(document) => RequestBody::Multipart { payload, document },
            None => RequestBody::Json(payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contract_payload() -> Payload {
        Payload::new()
            .field("contract_type", "indeterminato")
            .field("ccnl", "metalmeccanico")
            .field("ral", 35000)
            .field("start_date", "2024-01-15")
            .field("end_date", "")
    }

    #[test]
    fn empty_string_fields_are_stripped() {
        let payload = contract_payload();
        assert!(!payload.contains("end_date"));
        assert_eq!(payload.len(), 4);

        let body = payload.into_json();
        assert_eq!(
            body,
            json!({
                "contract_type": "indeterminato",
                "ccnl": "metalmeccanico",
                "ral": 35000,
                "start_date": "2024-01-15",
            })
        );
    }

    #[test]
    fn null_fields_are_stripped() {
        let payload = Payload::new()
            .field("department", Option::<String>::None)
            .field("role", "manager");
        assert!(!payload.contains("department"));
        assert!(payload.contains("role"));
    }

    #[test]
    fn from_value_applies_same_policy() {
        let payload = Payload::from_value(json!({
            "name": "Firma contratto",
            "description": "",
            "order": 1,
        }));
        assert!(payload.contains("name"));
        assert!(payload.contains("order"));
        assert!(!payload.contains("description"));
    }

    #[test]
    fn from_value_ignores_non_objects() {
        let payload = Payload::from_value(json!([1, 2, 3]));
        assert!(payload.is_empty());
    }

    #[test]
    fn stripped_fields_never_reappear() {
        let mut payload = contract_payload();
        payload.remove("ccnl");
        let body = payload.into_json();
        assert!(body.get("end_date").is_none());
        assert!(body.get("ccnl").is_none());
    }

    #[test]
    fn attachment_rejects_non_pdf() {
        let err = Attachment::pdf("contratto.docx", vec![1, 2, 3]).unwrap_err();
        assert!(err.to_string().contains("PDF"));
    }

    #[test]
    fn attachment_accepts_uppercase_extension() {
        let attachment = Attachment::pdf("CONTRATTO.PDF", vec![1, 2, 3]).unwrap();
        assert_eq!(attachment.file_name(), "CONTRATTO.PDF");
        assert_eq!(attachment.len(), 3);
    }

    #[test]
    fn attachment_rejects_oversized_file() {
        let err = Attachment::pdf("big.pdf", vec![0u8; MAX_ATTACHMENT_BYTES + 1]).unwrap_err();
        assert!(err.to_string().contains("5 MB"));
    }

    #[test]
    fn request_body_branches_on_file_presence() {
        let body = RequestBody::with_document(contract_payload(), None);
        assert!(matches!(body, RequestBody::Json(_)));

        let file = Attachment::pdf("contratto.pdf", vec![1]).unwrap();
        let body = RequestBody::with_document(contract_payload(), Some(file));
        assert!(matches!(body, RequestBody::Multipart { .. }));
    }
}
