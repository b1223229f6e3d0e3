//! Dashboard statistics types for the Mini Jet HR REST API.

use serde::{Deserialize, Serialize};

/// Aggregated HR statistics, consumed read-only by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Employee headcounts
    pub employees: EmployeeStats,
    /// Contract counters
    pub contracts: ContractStats,
    /// Onboarding counters
    pub onboarding: OnboardingStats,
    /// Chart series
    pub charts: DashboardCharts,
}

/// Employee headcounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeStats {
    /// Active employees
    pub active: u64,
    /// Soft-deleted employees
    pub inactive: u64,
    /// Active employees hired since the first of the current month
    pub new_hires: u64,
}

/// Contract counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractStats {
    /// Contracts ending within the next 30 days
    pub expiring: u64,
}

/// Onboarding counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingStats {
    /// Employees with at least one incomplete step
    pub in_progress: u64,
}

/// Chart series for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardCharts {
    /// Hires per month among active employees
    pub headcount_trend: Vec<MonthCount>,
    /// Active employees per department, descending
    pub department_distribution: Vec<DepartmentCount>,
}

/// One month of the headcount trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCount {
    /// Month in `YYYY-MM` form
    pub month: String,
    /// Hires in that month
    pub count: u64,
}

/// One slice of the department distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCount {
    /// Department name
    pub department: String,
    /// Active employees in the department
    pub count: u64,
}
