//! Employee types for the Mini Jet HR REST API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Employee role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular employee
    Employee,
    /// People manager
    Manager,
    /// HR administrator
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Employee => "employee",
            Role::Manager => "manager",
            Role::Admin => "admin",
        };
        f.write_str(s)
    }
}

/// An employee record.
///
/// Deletion is soft: the backend flips `is_active` and list endpoints stop
/// returning the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Database ID
    pub id: u64,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email, unique and immutable after creation
    pub email: String,
    /// Role
    pub role: Role,
    /// Department, empty when unassigned
    #[serde(default)]
    pub department: String,
    /// Hire date
    pub hire_date: NaiveDate,
    /// False once soft-deleted
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Query parameters for the employee list endpoint.
///
/// ```rust,ignore
/// let params = EmployeeListParams::new()
///     .with_role(Role::Manager)
///     .with_ordering("-hire_date")
///     .with_page(2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeListParams {
    /// Filter by role
    pub role: Option<Role>,
    /// Ordering field: `last_name`, `first_name` or `hire_date`,
    /// `-` prefix for descending
    pub ordering: Option<String>,
    /// Page number (1-based)
    pub page: Option<u32>,
}

impl EmployeeListParams {
    /// Create empty params (first page, default ordering, all roles).
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the list by role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Order by a backend-supported field.
    pub fn with_ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    /// Request a specific page.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}
