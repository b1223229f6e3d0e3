//! Response types for the Mini Jet HR REST API.
//!
//! Shapes mirror the backend serializers; the client never transforms them
//! beyond deserialization.

pub mod contract;
pub mod dashboard;
pub mod employee;
pub mod onboarding;
pub mod page;

// Re-export all types for convenience
pub use contract::*;
pub use dashboard::*;
pub use employee::*;
pub use onboarding::*;
pub use page::*;
