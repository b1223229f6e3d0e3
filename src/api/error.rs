//! API error types for the Mini Jet HR REST API client.

use std::collections::HashMap;

use thiserror::Error;

/// API-specific error type for the Mini Jet HR REST API client.
///
/// Validation failures (HTTP 400) are NOT errors — they come back inside
/// [`ApiOutcome::Invalid`](crate::api::ApiOutcome) so forms can render them
/// inline. Everything here is fatal from the caller's point of view.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource conflict (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Server-side error (5xx)
    #[error("Server error: {0}")]
    ServerError(String),

    /// JSON deserialization error
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Invalid parameter provided (e.g. a missing path identifier)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unexpected HTTP status code
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Validation error body returned by the backend on HTTP 400.
///
/// DRF renders serializer failures as a mapping from field name to an
/// ordered list of human-readable messages; non-field failures land under
/// the `non_field_errors` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(pub HashMap<String, Vec<String>>);

impl FieldErrors {
    /// Messages for a single field, if the field failed validation.
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Names of all fields that failed validation.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// True when the body carried no field entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Error response body for fatal (non-400) statuses.
///
/// DRF emits `{"detail": "..."}` for most of these; plain-text or empty
/// bodies are wrapped via [`ErrorBody::from_text`].
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    #[serde(alias = "error", alias = "message")]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Wrap a non-JSON error body.
    pub fn from_text(text: String) -> Self {
        Self { detail: Some(text) }
    }

    /// Get the error message, or a placeholder when the body was empty.
    pub fn get_message(&self) -> String {
        self.detail
            .clone()
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}
