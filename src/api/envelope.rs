//! Tri-state response envelope for entity operations.

use reqwest::StatusCode;

use crate::api::error::FieldErrors;

/// Outcome of an entity operation.
///
/// Exactly one of three cases, each tied to the HTTP status that produced it:
///
/// - [`Data`](ApiOutcome::Data): any 2xx with a body — carries the parsed
///   payload and the real status code.
/// - [`NoContent`](ApiOutcome::NoContent): 204 — the body is never parsed.
///   Used by deletions.
/// - [`Invalid`](ApiOutcome::Invalid): 400 — the validation-error channel.
///   Carries the field→messages mapping verbatim for inline form display.
///
/// Every other status is fatal and surfaces as
/// [`ApiError`](crate::api::ApiError) instead.
#[derive(Debug, Clone)]
pub enum ApiOutcome<T> {
    /// Successful response with a parsed body.
    Data {
        /// Parsed response body
        data: T,
        /// Real HTTP status code (200, 201, ...)
        status: StatusCode,
    },
    /// 204 No Content success (deletions).
    NoContent,
    /// 400 validation failure with per-field messages.
    Invalid(FieldErrors),
}

impl<T> ApiOutcome<T> {
    /// The HTTP status this outcome was built from.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiOutcome::Data { status, .. } => *status,
            ApiOutcome::NoContent => StatusCode::NO_CONTENT,
            ApiOutcome::Invalid(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// True for [`Data`](ApiOutcome::Data) and [`NoContent`](ApiOutcome::NoContent).
    pub fn is_success(&self) -> bool {
        !matches!(self, ApiOutcome::Invalid(_))
    }

    /// Borrow the payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiOutcome::Data { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Take the payload, if any.
    pub fn into_data(self) -> Option<T> {
        match self {
            ApiOutcome::Data { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Borrow the validation errors, if any.
    pub fn invalid(&self) -> Option<&FieldErrors> {
        match self {
            ApiOutcome::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}
