//! Dashboard aggregation queries over the project collection.
//!
//! # Responsibility
//! - Produce headline portfolio numbers and the per-status chart breakdown.
//!
//! # Invariants
//! - Plain aggregate reads; nothing here mutates the store.
//! - Chart colors are resolved from the stored label, so a label outside the
//!   status enumeration lands in the gray default branch instead of being
//!   coerced to a known status first.

use crate::db::DbError;
use crate::model::project::ProjectStatus;
use crate::palette::{project_chart_color_for_label, Color};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StatsResult<T> = Result<T, StatsError>;

/// Aggregation-layer error.
#[derive(Debug)]
pub enum StatsError {
    Db(DbError),
}

impl Display for StatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StatsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StatsError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StatsError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Headline portfolio numbers for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    pub total_projects: i64,
    /// Projects currently in progress.
    pub active_projects: i64,
    pub completed_projects: i64,
    /// Sum over all project budgets; 0.0 for an empty portfolio.
    pub total_budget: f64,
}

/// One chart slice: stored status label, row count, chart color.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSlice {
    pub label: String,
    pub count: i64,
    pub color: Color,
}

/// Computes the dashboard's headline numbers in one pass per figure.
pub fn portfolio_summary(conn: &Connection) -> StatsResult<PortfolioSummary> {
    let total_projects: i64 =
        conn.query_row("SELECT COUNT(*) FROM projects;", [], |row| row.get(0))?;
    let active_projects = count_by_status(conn, ProjectStatus::InProgress)?;
    let completed_projects = count_by_status(conn, ProjectStatus::Completed)?;
    let total_budget: f64 = conn.query_row(
        "SELECT COALESCE(SUM(budget), 0.0) FROM projects;",
        [],
        |row| row.get(0),
    )?;

    Ok(PortfolioSummary {
        total_projects,
        active_projects,
        completed_projects,
        total_budget,
    })
}

/// Grouped project counts by stored status label, ordered by label, each
/// carrying its chart color.
pub fn project_status_breakdown(conn: &Connection) -> StatsResult<Vec<StatusSlice>> {
    let mut stmt = conn.prepare(
        "SELECT status, COUNT(*)
         FROM projects
         GROUP BY status
         ORDER BY status ASC;",
    )?;

    let mut rows = stmt.query([])?;
    let mut slices = Vec::new();
    while let Some(row) = rows.next()? {
        let label: String = row.get(0)?;
        let count: i64 = row.get(1)?;
        let color = project_chart_color_for_label(&label);
        slices.push(StatusSlice {
            label,
            count,
            color,
        });
    }

    Ok(slices)
}

fn count_by_status(conn: &Connection, status: ProjectStatus) -> StatsResult<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM projects WHERE status = ?1;",
        [status.as_label()],
        |row| row.get(0),
    )?;
    Ok(count)
}
