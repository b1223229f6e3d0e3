//! Mini Jet HR REST API client implementation.
//!
//! The [`MinijetApiClient`] provides a type-safe interface for the HR
//! backend: employees, contracts (with PDF attachments), onboarding
//! templates, onboarding steps and dashboard statistics.
//!
//! # Example
//!
//! ```rust,ignore
//! use minijet_sdk::api::{MinijetApiClient, Payload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MinijetApiClient::from_env()?;
//!
//!     let employees = client.list_employees(Default::default()).await?;
//!     println!("{} active employees", employees.count);
//!
//!     let payload = Payload::new()
//!         .field("first_name", "Mario")
//!         .field("last_name", "Rossi")
//!         .field("email", "mario@test.com")
//!         .field("role", "employee")
//!         .field("hire_date", "2024-01-15");
//!     match client.create_employee(payload).await? {
//!         outcome if outcome.is_success() => println!("created"),
//!         outcome => println!("validation failed: {:?}", outcome.invalid()),
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};

use crate::api::envelope::ApiOutcome;
use crate::api::error::{ApiError, ApiResult, ErrorBody, FieldErrors};
use crate::api::payload::{Attachment, Payload, RequestBody};
use crate::api::types::*;
use crate::network::api_url_from_env;

/// Builder for configuring [`MinijetApiClient`].
#[derive(Debug, Clone)]
pub struct MinijetApiClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl MinijetApiClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
            default_headers: Vec::new(),
        }
    }

    /// Impose a request timeout.
    ///
    /// The layer itself never times out a request; a hung request blocks
    /// the calling workflow until the caller-configured timeout (if any)
    /// fires.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Impose a timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Add a default header to all requests.
    ///
    /// Content-Type is never set here: the JSON path sets it per request and
    /// the multipart path must leave it to reqwest so the boundary survives.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<MinijetApiClient> {
        let mut builder = Client::builder().pool_max_idle_per_host(10);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        for (name, value) in self.default_headers {
            let header_name = reqwest::header::HeaderName::try_from(name.as_str())
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = reqwest::header::HeaderValue::from_str(&value)
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        builder = builder.default_headers(headers);

        let http_client = builder.build()?;

        Ok(MinijetApiClient {
            http_client,
            base_url: self.base_url,
        })
    }
}

/// Mini Jet HR REST API client.
///
/// One network request per call: no retry, no cache, no queue, no
/// cancellation. Calls may run concurrently; if ordering matters (refresh a
/// list after a delete, say) the caller sequences them by awaiting.
#[derive(Debug, Clone)]
pub struct MinijetApiClient {
    http_client: Client,
    base_url: String,
}

impl MinijetApiClient {
    /// Create a new client with the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        MinijetApiClientBuilder::new(base_url).build()
    }

    /// Create a client using the `MINIJET_API_URL` environment variable,
    /// falling back to the local development backend.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(api_url_from_env())
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(base_url: impl Into<String>) -> MinijetApiClientBuilder {
        MinijetApiClientBuilder::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Base request primitive: dispatch one request and normalize the
    /// response into the tri-state envelope.
    ///
    /// - 204 → [`ApiOutcome::NoContent`], body never parsed
    /// - 2xx → [`ApiOutcome::Data`] with the parsed body and real status
    /// - 400 → [`ApiOutcome::Invalid`] with the field→messages body
    /// - anything else → `Err`, mapped by status
    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> ApiResult<ApiOutcome<T>> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, path, "dispatching API request");

        let mut request = self.http_client.request(method, &url);
        match body {
            Some(RequestBody::Json(payload)) => {
                request = request.json(&payload.into_json());
            }
            Some(RequestBody::Multipart { payload, document }) => {
                // reqwest sets the multipart content-type with the boundary
                request = request.multipart(payload.into_multipart(document)?);
            }
            None => {}
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(path, status = %status, "API response");

        if status == StatusCode::NO_CONTENT {
            return Ok(ApiOutcome::NoContent);
        }

        if status.is_success() {
            let data = response.json::<T>().await.map_err(|e| {
                ApiError::Deserialize(format!("Failed to deserialize response: {}", e))
            })?;
            return Ok(ApiOutcome::Data { data, status });
        }

        if status == StatusCode::BAD_REQUEST {
            let errors = response.json::<FieldErrors>().await.map_err(|e| {
                ApiError::Deserialize(format!("Failed to deserialize validation errors: {}", e))
            })?;
            return Ok(ApiOutcome::Invalid(errors));
        }

        Err(Self::parse_error_response(response).await)
    }

    /// List-fetch primitive: plain GET that returns the parsed body
    /// directly and fails outright on any non-success status.
    ///
    /// A deliberate second code path — read-only callers never need the
    /// 400/field-error channel.
    async fn get_plain<T: serde::de::DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(path, "dispatching plain GET");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!(path, status = %status, "API response");

        if !status.is_success() {
            return Err(Self::parse_error_response(response).await);
        }
        response.json::<T>().await.map_err(|e| {
            ApiError::Deserialize(format!("Failed to deserialize response: {}", e))
        })
    }

    /// Parse a fatal error response into an ApiError.
    async fn parse_error_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let error_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read error response body: {}", e);
                return Self::map_status_error(
                    status,
                    ErrorBody::from_text(format!("HTTP {} (body unreadable: {})", status, e)),
                );
            }
        };

        let body = serde_json::from_str::<ErrorBody>(&error_text)
            .unwrap_or_else(|_| ErrorBody::from_text(error_text));

        Self::map_status_error(status, body)
    }

    /// Map a fatal HTTP status code to an ApiError.
    fn map_status_error(status: StatusCode, body: ErrorBody) -> ApiError {
        let message = body.get_message();
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
            StatusCode::FORBIDDEN => ApiError::Forbidden(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::CONFLICT => ApiError::Conflict(message),
            _ if status.is_server_error() => ApiError::ServerError(message),
            _ => ApiError::UnexpectedStatus(status.as_u16(), message),
        }
    }

    /// Validate a required path identifier before building any request.
    ///
    /// A zero id is a programmer error (database ids start at 1) and fails
    /// immediately instead of being sent as a malformed URL.
    fn validate_id(id: u64, field_name: &str) -> ApiResult<()> {
        if id == 0 {
            return Err(ApiError::InvalidParameter(format!(
                "{} is required",
                field_name
            )));
        }
        Ok(())
    }

    // =========================================================================
    // Employee endpoints
    // =========================================================================

    /// List active employees, paginated.
    ///
    /// Uses the plain list path: any non-success status fails outright.
    pub async fn list_employees(&self, params: EmployeeListParams) -> ApiResult<Page<Employee>> {
        let mut query = Vec::new();
        if let Some(role) = params.role {
            query.push(format!("role={}", role));
        }
        if let Some(ordering) = params.ordering {
            query.push(format!("ordering={}", urlencoding::encode(&ordering)));
        }
        if let Some(page) = params.page {
            query.push(format!("page={}", page));
        }

        let path = if query.is_empty() {
            "/employees/".to_string()
        } else {
            format!("/employees/?{}", query.join("&"))
        };
        self.get_plain(&path).await
    }

    /// Get a single employee by id.
    pub async fn get_employee(&self, id: u64) -> ApiResult<ApiOutcome<Employee>> {
        Self::validate_id(id, "employee id")?;
        self.request(Method::GET, &format!("/employees/{}/", id), None)
            .await
    }

    /// Create an employee.
    pub async fn create_employee(&self, payload: Payload) -> ApiResult<ApiOutcome<Employee>> {
        self.request(Method::POST, "/employees/", Some(RequestBody::Json(payload)))
            .await
    }

    /// Partially update an employee. Only the sent fields are altered.
    ///
    /// Email is immutable after creation: any `email` key is stripped from
    /// the outgoing payload.
    pub async fn update_employee(
        &self,
        id: u64,
        mut payload: Payload,
    ) -> ApiResult<ApiOutcome<Employee>> {
        Self::validate_id(id, "employee id")?;
        payload.remove("email");
        self.request(
            Method::PATCH,
            &format!("/employees/{}/", id),
            Some(RequestBody::Json(payload)),
        )
        .await
    }

    /// Delete an employee (soft delete: the record is flagged inactive).
    pub async fn delete_employee(&self, id: u64) -> ApiResult<ApiOutcome<Employee>> {
        Self::validate_id(id, "employee id")?;
        self.request(Method::DELETE, &format!("/employees/{}/", id), None)
            .await
    }

    // =========================================================================
    // Contract endpoints (nested under an employee)
    // =========================================================================

    /// List an employee's contracts, newest first.
    pub async fn list_contracts(&self, employee_id: u64) -> ApiResult<ApiOutcome<Page<Contract>>> {
        Self::validate_id(employee_id, "employee id")?;
        self.request(
            Method::GET,
            &format!("/employees/{}/contracts/", employee_id),
            None,
        )
        .await
    }

    /// Get a single contract.
    pub async fn get_contract(
        &self,
        employee_id: u64,
        contract_id: u64,
    ) -> ApiResult<ApiOutcome<Contract>> {
        Self::validate_id(employee_id, "employee id")?;
        Self::validate_id(contract_id, "contract id")?;
        self.request(
            Method::GET,
            &format!("/employees/{}/contracts/{}/", employee_id, contract_id),
            None,
        )
        .await
    }

    /// Create a contract, optionally attaching a PDF.
    ///
    /// With no attachment the body is plain JSON; with one it is multipart
    /// (fields as text parts plus a `document` part).
    pub async fn create_contract(
        &self,
        employee_id: u64,
        payload: Payload,
        document: Option<Attachment>,
    ) -> ApiResult<ApiOutcome<Contract>> {
        Self::validate_id(employee_id, "employee id")?;
        self.request(
            Method::POST,
            &format!("/employees/{}/contracts/", employee_id),
            Some(RequestBody::with_document(payload, document)),
        )
        .await
    }

    /// Partially update a contract, optionally replacing its PDF.
    ///
    /// No attachment means "no change to any existing attachment".
    pub async fn update_contract(
        &self,
        employee_id: u64,
        contract_id: u64,
        payload: Payload,
        document: Option<Attachment>,
    ) -> ApiResult<ApiOutcome<Contract>> {
        Self::validate_id(employee_id, "employee id")?;
        Self::validate_id(contract_id, "contract id")?;
        self.request(
            Method::PATCH,
            &format!("/employees/{}/contracts/{}/", employee_id, contract_id),
            Some(RequestBody::with_document(payload, document)),
        )
        .await
    }

    /// Delete a contract (hard delete).
    pub async fn delete_contract(
        &self,
        employee_id: u64,
        contract_id: u64,
    ) -> ApiResult<ApiOutcome<Contract>> {
        Self::validate_id(employee_id, "employee id")?;
        Self::validate_id(contract_id, "contract id")?;
        self.request(
            Method::DELETE,
            &format!("/employees/{}/contracts/{}/", employee_id, contract_id),
            None,
        )
        .await
    }

    // =========================================================================
    // Onboarding template endpoints
    // =========================================================================

    /// List active onboarding templates.
    pub async fn list_onboarding_templates(
        &self,
    ) -> ApiResult<ApiOutcome<Page<OnboardingTemplate>>> {
        self.request(Method::GET, "/onboarding-templates/", None).await
    }

    /// Get a single onboarding template.
    pub async fn get_onboarding_template(
        &self,
        id: u64,
    ) -> ApiResult<ApiOutcome<OnboardingTemplate>> {
        Self::validate_id(id, "template id")?;
        self.request(Method::GET, &format!("/onboarding-templates/{}/", id), None)
            .await
    }

    /// Create an onboarding template.
    pub async fn create_onboarding_template(
        &self,
        payload: Payload,
    ) -> ApiResult<ApiOutcome<OnboardingTemplate>> {
        self.request(
            Method::POST,
            "/onboarding-templates/",
            Some(RequestBody::Json(payload)),
        )
        .await
    }

    /// Partially update an onboarding template.
    pub async fn update_onboarding_template(
        &self,
        id: u64,
        payload: Payload,
    ) -> ApiResult<ApiOutcome<OnboardingTemplate>> {
        Self::validate_id(id, "template id")?;
        self.request(
            Method::PATCH,
            &format!("/onboarding-templates/{}/", id),
            Some(RequestBody::Json(payload)),
        )
        .await
    }

    /// Delete an onboarding template (soft delete).
    pub async fn delete_onboarding_template(
        &self,
        id: u64,
    ) -> ApiResult<ApiOutcome<OnboardingTemplate>> {
        Self::validate_id(id, "template id")?;
        self.request(
            Method::DELETE,
            &format!("/onboarding-templates/{}/", id),
            None,
        )
        .await
    }

    // =========================================================================
    // Onboarding step endpoints (nested under an employee)
    // =========================================================================

    /// List an employee's onboarding steps, in template order.
    pub async fn list_onboarding_steps(
        &self,
        employee_id: u64,
    ) -> ApiResult<ApiOutcome<Page<OnboardingStep>>> {
        Self::validate_id(employee_id, "employee id")?;
        self.request(
            Method::GET,
            &format!("/employees/{}/onboarding/", employee_id),
            None,
        )
        .await
    }

    /// Start (or sync) onboarding for an employee.
    ///
    /// POST with an empty body; the backend creates one step per active
    /// template that the employee is missing and returns the full list
    /// (201), new and pre-existing steps alike.
    pub async fn start_onboarding(
        &self,
        employee_id: u64,
    ) -> ApiResult<ApiOutcome<Vec<OnboardingStep>>> {
        Self::validate_id(employee_id, "employee id")?;
        self.request(
            Method::POST,
            &format!("/employees/{}/onboarding/", employee_id),
            None,
        )
        .await
    }

    /// Partially update an onboarding step.
    ///
    /// Used to toggle `is_completed`; the backend manages `completed_at`.
    pub async fn update_onboarding_step(
        &self,
        employee_id: u64,
        step_id: u64,
        payload: Payload,
    ) -> ApiResult<ApiOutcome<OnboardingStep>> {
        Self::validate_id(employee_id, "employee id")?;
        Self::validate_id(step_id, "step id")?;
        self.request(
            Method::PATCH,
            &format!("/employees/{}/onboarding/{}/", employee_id, step_id),
            Some(RequestBody::Json(payload)),
        )
        .await
    }

    // =========================================================================
    // Dashboard endpoint
    // =========================================================================

    /// Fetch aggregated dashboard statistics.
    ///
    /// Consumed as a plain object, not enveloped.
    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.get_plain("/dashboard/stats/").await
    }
}
