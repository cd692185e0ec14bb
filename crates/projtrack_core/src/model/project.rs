//! Project domain model.
//!
//! # Responsibility
//! - Define the root aggregate every other entity hangs off.
//! - Provide label codecs for the project status enumeration.
//!
//! # Invariants
//! - `id` is store-assigned and stable for the project lifetime.
//! - Date fields are uninterpreted ISO-format text; the store never parses
//!   them (malformed dates are the timeline engine's concern).
//! - `created_at` is stamped at insert and preserved across updates.

use super::{ensure_amount, ensure_required, Priority, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned project identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = i64;

/// Project lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Scoped but not started.
    Planning,
    /// Actively worked on; counts as "active" on the dashboard.
    InProgress,
    /// Waiting on something external.
    Blocked,
    /// Delivered.
    Completed,
}

impl ProjectStatus {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::InProgress => "in_progress",
            Self::Blocked => "blocked",
            Self::Completed => "completed",
        }
    }

    /// Unknown labels degrade to `Planning` instead of failing the read.
    pub fn from_label(label: &str) -> Self {
        match label {
            "planning" => Self::Planning,
            "in_progress" => Self::InProgress,
            "blocked" => Self::Blocked,
            "completed" => Self::Completed,
            _ => Self::Planning,
        }
    }
}

/// Full project row as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    /// ISO `YYYY-MM-DD` by convention, stored verbatim.
    pub start_date: String,
    /// Not validated to be >= `start_date`.
    pub end_date: String,
    /// Non-negative; enforced on write.
    pub budget: f64,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub manager: String,
    /// Free text; the methodology catalog is a presentation concern.
    pub methodology: String,
    /// `YYYY-MM-DD HH:MM:SS`, local time, stamped by the store.
    pub created_at: String,
}

/// Caller-supplied fields for project create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub manager: String,
    pub methodology: String,
}

impl NewProject {
    /// Write-path guard: a rejected draft must leave the store unchanged.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_required("project", "name", &self.name)?;
        ensure_amount("project", "budget", self.budget)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewProject {
        NewProject {
            name: "Website relaunch".to_string(),
            description: String::new(),
            start_date: "2024-03-01".to_string(),
            end_date: "2024-06-30".to_string(),
            budget: 25_000.0,
            status: ProjectStatus::Planning,
            priority: Priority::High,
            manager: "Dana".to_string(),
            methodology: "agile".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(draft().validate(), Ok(()));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut project = draft();
        project.name = "   ".to_string();
        assert_eq!(
            project.validate(),
            Err(ValidationError::MissingField {
                entity: "project",
                field: "name",
            })
        );
    }

    #[test]
    fn negative_and_non_finite_budgets_are_rejected() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let mut project = draft();
            project.budget = bad;
            assert!(project.validate().is_err(), "budget {bad} must be rejected");
        }
    }

    #[test]
    fn status_labels_round_trip_and_default() {
        for status in [
            ProjectStatus::Planning,
            ProjectStatus::InProgress,
            ProjectStatus::Blocked,
            ProjectStatus::Completed,
        ] {
            assert_eq!(ProjectStatus::from_label(status.as_label()), status);
        }
        assert_eq!(
            ProjectStatus::from_label("archived"),
            ProjectStatus::Planning
        );
    }
}
