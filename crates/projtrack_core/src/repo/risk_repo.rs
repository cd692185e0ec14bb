//! Risk repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `risks` table.
//!
//! # Invariants
//! - `risk_level` is classified from the draft's probability/impact inside
//!   every write statement; drafts cannot carry a level.
//! - A stored level that no longer parses is re-derived at read time, so the
//!   read model can never disagree with its inputs.

use super::{ensure_connection_ready, ensure_project_exists, RepoError, RepoResult};
use crate::model::project::ProjectId;
use crate::model::risk::{Impact, NewRisk, Probability, Risk, RiskId, RiskLevel, RiskStatus};
use rusqlite::{params, Connection, Row};

const RISK_SELECT_SQL: &str = "SELECT
    id,
    project_id,
    description,
    probability,
    impact,
    risk_level,
    mitigation,
    status
FROM risks";

const RISK_COLUMNS: &[&str] = &[
    "id",
    "project_id",
    "description",
    "probability",
    "impact",
    "risk_level",
    "mitigation",
    "status",
];

/// Repository interface for risk CRUD operations.
pub trait RiskRepository {
    fn create_risk(&self, draft: &NewRisk) -> RepoResult<RiskId>;
    fn get_risk(&self, id: RiskId) -> RepoResult<Option<Risk>>;
    /// A project's risk register in insertion order.
    fn list_risks_for_project(&self, project_id: ProjectId) -> RepoResult<Vec<Risk>>;
    fn update_risk(&self, id: RiskId, draft: &NewRisk) -> RepoResult<()>;
    fn delete_risk(&self, id: RiskId) -> RepoResult<()>;
}

/// SQLite-backed risk repository.
#[derive(Debug)]
pub struct SqliteRiskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRiskRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "risks", RISK_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl RiskRepository for SqliteRiskRepository<'_> {
    fn create_risk(&self, draft: &NewRisk) -> RepoResult<RiskId> {
        draft.validate()?;
        ensure_project_exists(self.conn, draft.project_id)?;

        let level = RiskLevel::classify(draft.probability, draft.impact);
        self.conn.execute(
            "INSERT INTO risks (
                project_id,
                description,
                probability,
                impact,
                risk_level,
                mitigation,
                status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                draft.project_id,
                draft.description.as_str(),
                draft.probability.as_label(),
                draft.impact.as_label(),
                level.as_label(),
                draft.mitigation.as_str(),
                draft.status.as_label(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_risk(&self, id: RiskId) -> RepoResult<Option<Risk>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RISK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_risk_row(row)?));
        }

        Ok(None)
    }

    fn list_risks_for_project(&self, project_id: ProjectId) -> RepoResult<Vec<Risk>> {
        ensure_project_exists(self.conn, project_id)?;

        let mut stmt = self.conn.prepare(&format!(
            "{RISK_SELECT_SQL}
             WHERE project_id = ?1
             ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query([project_id])?;
        let mut risks = Vec::new();
        while let Some(row) = rows.next()? {
            risks.push(parse_risk_row(row)?);
        }

        Ok(risks)
    }

    fn update_risk(&self, id: RiskId, draft: &NewRisk) -> RepoResult<()> {
        draft.validate()?;
        ensure_project_exists(self.conn, draft.project_id)?;

        let level = RiskLevel::classify(draft.probability, draft.impact);
        let changed = self.conn.execute(
            "UPDATE risks
             SET
                project_id = ?1,
                description = ?2,
                probability = ?3,
                impact = ?4,
                risk_level = ?5,
                mitigation = ?6,
                status = ?7
             WHERE id = ?8;",
            params![
                draft.project_id,
                draft.description.as_str(),
                draft.probability.as_label(),
                draft.impact.as_label(),
                level.as_label(),
                draft.mitigation.as_str(),
                draft.status.as_label(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound { entity: "risk", id });
        }

        Ok(())
    }

    fn delete_risk(&self, id: RiskId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM risks WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { entity: "risk", id });
        }

        Ok(())
    }
}

fn parse_risk_row(row: &Row<'_>) -> RepoResult<Risk> {
    let probability_label: String = row.get("probability")?;
    let impact_label: String = row.get("impact")?;
    let level_label: String = row.get("risk_level")?;
    let status_label: String = row.get("status")?;

    let probability = Probability::from_label(&probability_label);
    let impact = Impact::from_label(&impact_label);
    let level = RiskLevel::from_label(&level_label)
        .unwrap_or_else(|| RiskLevel::classify(probability, impact));

    Ok(Risk {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        description: row.get("description")?,
        probability,
        impact,
        level,
        mitigation: row.get("mitigation")?,
        status: RiskStatus::from_label(&status_label),
    })
}
