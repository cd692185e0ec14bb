//! Status-to-color mapping tables for timeline bars and dashboard charts.
//!
//! # Responsibility
//! - Keep each status enumeration's color table in one place.
//!
//! # Invariants
//! - Task status and project status are distinct enumerations with distinct
//!   tables; they must not be merged.
//! - Each table has exactly one default branch for unmapped input.

use crate::model::project::ProjectStatus;
use crate::model::task::TaskStatus;
use serde::{Deserialize, Serialize};

/// Display color vocabulary shared by both tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Green,
    Blue,
    Red,
    Orange,
    Gray,
}

impl Color {
    /// Canonical hex code for chart/bar rendering.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Green => "#2ecc71",
            Self::Blue => "#3498db",
            Self::Red => "#e74c3c",
            Self::Orange => "#f39c12",
            Self::Gray => "#95a5a6",
        }
    }
}

/// Timeline bar color table. Total over `TaskStatus`; `NotStarted` is the
/// default branch unknown stored labels land in (they parse to `NotStarted`).
pub fn task_bar_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Completed => Color::Green,
        TaskStatus::InProgress => Color::Blue,
        TaskStatus::Blocked => Color::Red,
        TaskStatus::NotStarted => Color::Orange,
    }
}

/// Dashboard chart color table. Total over `ProjectStatus`; intentionally
/// different from the task table (completed projects chart gray, not green).
pub fn project_chart_color(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::InProgress => Color::Green,
        ProjectStatus::Planning => Color::Blue,
        ProjectStatus::Blocked => Color::Red,
        ProjectStatus::Completed => Color::Gray,
    }
}

/// Chart color straight from a stored status label. Labels that are not in
/// the project status enumeration take the gray default branch rather than
/// borrowing `from_label`'s planning fallback.
pub fn project_chart_color_for_label(label: &str) -> Color {
    match label {
        "in_progress" => Color::Green,
        "planning" => Color::Blue,
        "blocked" => Color::Red,
        _ => Color::Gray,
    }
}
