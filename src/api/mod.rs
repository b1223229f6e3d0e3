//! REST API client module for Mini Jet HR.
//!
//! This module provides a type-safe HTTP client for the HR backend:
//! employees, contracts, onboarding templates, onboarding steps and the
//! statistics dashboard.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use minijet_sdk::api::MinijetApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MinijetApiClient::new("http://localhost:8000/api")?;
//!
//!     let page = client.list_employees(Default::default()).await?;
//!     println!("Found {} employees", page.count);
//!
//!     let stats = client.dashboard_stats().await?;
//!     println!("Active: {}", stats.employees.active);
//!
//!     Ok(())
//! }
//! ```
//!
//! # The envelope
//!
//! Entity operations return `ApiResult<ApiOutcome<T>>`. The outer `Result`
//! is the fatal channel (network failures, 401/403/404/409/5xx); the inner
//! [`ApiOutcome`] is the tri-state envelope forms care about:
//!
//! ```rust,ignore
//! match client.create_employee(payload).await? {
//!     ApiOutcome::Data { data, .. } => println!("created #{}", data.id),
//!     ApiOutcome::Invalid(errors) => {
//!         for field in errors.fields() {
//!             println!("{}: {:?}", field, errors.messages(field));
//!         }
//!     }
//!     ApiOutcome::NoContent => unreachable!("creates always return a body"),
//! }
//! ```
//!
//! # File uploads
//!
//! Contract create/update take an optional [`Attachment`]. Without one the
//! payload goes out as JSON; with one the request switches to multipart and
//! the PDF travels under the `document` field:
//!
//! ```rust,ignore
//! use minijet_sdk::api::{Attachment, Payload};
//!
//! let payload = Payload::new()
//!     .field("contract_type", "indeterminato")
//!     .field("ccnl", "metalmeccanico")
//!     .field("ral", 35000)
//!     .field("start_date", "2024-01-15");
//! let pdf = Attachment::pdf("contratto.pdf", std::fs::read("contratto.pdf")?)?;
//! client.create_contract(1, payload, Some(pdf)).await?;
//! ```

pub mod client;
pub mod envelope;
pub mod error;
pub mod payload;
pub mod types;

// Re-export main types for convenience
pub use client::{MinijetApiClient, MinijetApiClientBuilder};
pub use envelope::ApiOutcome;
pub use error::{ApiError, ApiResult, ErrorBody, FieldErrors};
pub use payload::{Attachment, Payload, RequestBody, DOCUMENT_FIELD, MAX_ATTACHMENT_BYTES};
pub use types::*;
