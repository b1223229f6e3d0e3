//! Onboarding template and step types for the Mini Jet HR REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reusable onboarding task definition.
///
/// HR maintains these; starting onboarding for an employee instantiates one
/// step per active template. Deletion is soft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingTemplate {
    /// Database ID
    pub id: u64,
    /// Task name
    pub name: String,
    /// Longer task description, may be empty
    #[serde(default)]
    pub description: String,
    /// Display/checklist position
    pub order: i32,
}

/// One employee's progress on one onboarding task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingStep {
    /// Database ID
    pub id: u64,
    /// Source template ID
    pub template: u64,
    /// Denormalized template name
    pub template_name: String,
    /// Denormalized template description
    #[serde(default)]
    pub template_description: String,
    /// Whether the step is done
    pub is_completed: bool,
    /// Completion timestamp, managed server-side from `is_completed` flips
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}
