//! Task domain model.
//!
//! # Responsibility
//! - Define the task rows consumed by the timeline layout engine.
//!
//! # Invariants
//! - Date fields are uninterpreted text; end is not required to be >= start.
//! - `progress` is an integer percentage within 0..=100, enforced on write.
//! - `dependencies` is reserved: stored and returned verbatim, never
//!   interpreted by scheduling logic.

use super::project::ProjectId;
use super::{ensure_required, Priority, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned task identifier.
pub type TaskId = i64;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not started.
    NotStarted,
    /// Work is in progress.
    InProgress,
    /// Waiting on something external.
    Blocked,
    /// Completed successfully.
    Completed,
}

impl TaskStatus {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Blocked => "blocked",
            Self::Completed => "completed",
        }
    }

    /// Unknown labels degrade to `NotStarted` instead of failing the read.
    /// That variant maps to the default timeline bar color.
    pub fn from_label(label: &str) -> Self {
        match label {
            "not_started" => Self::NotStarted,
            "in_progress" => Self::InProgress,
            "blocked" => Self::Blocked,
            "completed" => Self::Completed,
            _ => Self::NotStarted,
        }
    }
}

/// Full task row as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub name: String,
    pub description: String,
    /// ISO `YYYY-MM-DD` by convention, stored verbatim.
    pub start_date: String,
    pub end_date: String,
    /// Planned duration in days; independent of the date pair.
    pub duration_days: i64,
    pub assignee: String,
    pub status: TaskStatus,
    pub priority: Priority,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    /// Reserved field, persisted as a JSON id array.
    pub dependencies: Vec<TaskId>,
}

/// Caller-supplied fields for task create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub project_id: ProjectId,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub duration_days: i64,
    pub assignee: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub progress: u8,
    pub dependencies: Vec<TaskId>,
}

impl NewTask {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_required("task", "name", &self.name)?;
        if self.progress > 100 {
            return Err(ValidationError::ProgressOutOfRange(self.progress));
        }
        Ok(())
    }
}
