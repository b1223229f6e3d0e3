//! Paginated list envelope used by collection endpoints.

use serde::{Deserialize, Serialize};

/// One page of a paginated collection.
///
/// The backend paginates every list endpoint with the same shape:
/// `count` is the total across all pages, `next`/`previous` are absolute
/// URLs or null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of records across all pages
    pub count: u64,
    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,
    /// Records on this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// True when this page carries no records.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
