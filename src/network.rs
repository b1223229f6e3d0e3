//! Base URL configuration for the Mini Jet HR API.

/// Default REST API base URL (local development backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "MINIJET_API_URL";

/// Resolve the API base URL from the environment.
///
/// Reads [`API_URL_ENV`]; falls back to [`DEFAULT_API_URL`] when unset
/// or not valid UTF-8.
pub fn api_url_from_env() -> String {
    std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
