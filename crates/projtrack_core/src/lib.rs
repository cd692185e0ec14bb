//! Core domain logic for ProjTrack.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod palette;
pub mod repo;
pub mod stats;
pub mod timeline;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{NewProject, Project, ProjectId, ProjectStatus};
pub use model::resource::{Availability, NewResource, Resource, ResourceId, ResourceKind};
pub use model::risk::{Impact, NewRisk, Probability, Risk, RiskId, RiskLevel, RiskStatus};
pub use model::stakeholder::{NewStakeholder, Stakeholder, StakeholderId};
pub use model::task::{NewTask, Task, TaskId, TaskStatus};
pub use model::{Priority, ValidationError};
pub use palette::{project_chart_color, task_bar_color, Color};
pub use repo::project_repo::{ProjectRepository, SqliteProjectRepository};
pub use repo::resource_repo::{ResourceRepository, SqliteResourceRepository};
pub use repo::risk_repo::{RiskRepository, SqliteRiskRepository};
pub use repo::stakeholder_repo::{SqliteStakeholderRepository, StakeholderRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use stats::portfolio::{
    portfolio_summary, project_status_breakdown, PortfolioSummary, StatusSlice,
};
pub use stats::risk_register::{summarize_risk_register, RiskRegisterSummary};
pub use timeline::layout::{layout_tasks, layout_tasks_at, ProgressLabel, TaskBar};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
