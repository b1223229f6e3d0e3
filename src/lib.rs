//! # Mini Jet HR Rust SDK
//!
//! A Rust client for the Mini Jet HR REST backend: employee records,
//! employment contracts (with PDF attachments), onboarding templates, an
//! onboarding checklist workflow and a statistics dashboard.
//!
//! ## Modules
//!
//! - [`api`]: the REST client, request/response types and the tri-state
//!   response envelope
//! - [`network`]: base-URL configuration (environment override + default)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use minijet_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads MINIJET_API_URL, defaults to http://localhost:8000/api
//!     let client = MinijetApiClient::from_env()?;
//!
//!     let employees = client
//!         .list_employees(EmployeeListParams::new().with_role(Role::Manager))
//!         .await?;
//!     println!("{} managers", employees.count);
//!
//!     match client.get_employee(1).await? {
//!         ApiOutcome::Data { data, .. } => println!("{} {}", data.first_name, data.last_name),
//!         other => println!("unexpected outcome: {:?}", other.status()),
//!     }
//!
//!     Ok(())
//! }
//! ```

/// REST API client for employees, contracts, onboarding and the dashboard.
pub mod api;

/// Base-URL configuration (environment override + default).
pub mod network;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use minijet_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, ApiOutcome, ApiResult, Attachment, ErrorBody, FieldErrors, MinijetApiClient,
        MinijetApiClientBuilder, Payload, RequestBody, DOCUMENT_FIELD, MAX_ATTACHMENT_BYTES,
        // Entity types
        Contract, DashboardCharts, DashboardStats, DepartmentCount, Employee, EmployeeListParams,
        EmployeeStats, MonthCount, OnboardingStats, OnboardingStep, OnboardingTemplate, Page, Role,
        ContractStats,
    };

    pub use crate::network::{api_url_from_env, DEFAULT_API_URL};
}
