//! Stakeholder repository contracts and SQLite implementation.

use super::{ensure_connection_ready, ensure_project_exists, RepoError, RepoResult};
use crate::model::project::ProjectId;
use crate::model::stakeholder::{NewStakeholder, Stakeholder, StakeholderId};
use rusqlite::{params, Connection, Row};

const STAKEHOLDER_SELECT_SQL: &str = "SELECT
    id,
    project_id,
    name,
    role,
    influence,
    interest,
    communication_plan
FROM stakeholders";

const STAKEHOLDER_COLUMNS: &[&str] = &[
    "id",
    "project_id",
    "name",
    "role",
    "influence",
    "interest",
    "communication_plan",
];

/// Repository interface for stakeholder CRUD operations.
pub trait StakeholderRepository {
    fn create_stakeholder(&self, draft: &NewStakeholder) -> RepoResult<StakeholderId>;
    fn get_stakeholder(&self, id: StakeholderId) -> RepoResult<Option<Stakeholder>>;
    /// A project's stakeholders ordered by name.
    fn list_stakeholders_for_project(
        &self,
        project_id: ProjectId,
    ) -> RepoResult<Vec<Stakeholder>>;
    fn update_stakeholder(&self, id: StakeholderId, draft: &NewStakeholder) -> RepoResult<()>;
    fn delete_stakeholder(&self, id: StakeholderId) -> RepoResult<()>;
}

/// SQLite-backed stakeholder repository.
#[derive(Debug)]
pub struct SqliteStakeholderRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStakeholderRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "stakeholders", STAKEHOLDER_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl StakeholderRepository for SqliteStakeholderRepository<'_> {
    fn create_stakeholder(&self, draft: &NewStakeholder) -> RepoResult<StakeholderId> {
        draft.validate()?;
        ensure_project_exists(self.conn, draft.project_id)?;

        self.conn.execute(
            "INSERT INTO stakeholders (
                project_id,
                name,
                role,
                influence,
                interest,
                communication_plan
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                draft.project_id,
                draft.name.as_str(),
                draft.role.as_str(),
                draft.influence.as_str(),
                draft.interest.as_str(),
                draft.communication_plan.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_stakeholder(&self, id: StakeholderId) -> RepoResult<Option<Stakeholder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STAKEHOLDER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_stakeholder_row(row)?));
        }

        Ok(None)
    }

    fn list_stakeholders_for_project(
        &self,
        project_id: ProjectId,
    ) -> RepoResult<Vec<Stakeholder>> {
        ensure_project_exists(self.conn, project_id)?;

        let mut stmt = self.conn.prepare(&format!(
            "{STAKEHOLDER_SELECT_SQL}
             WHERE project_id = ?1
             ORDER BY name ASC, id ASC;"
        ))?;

        let mut rows = stmt.query([project_id])?;
        let mut stakeholders = Vec::new();
        while let Some(row) = rows.next()? {
            stakeholders.push(parse_stakeholder_row(row)?);
        }

        Ok(stakeholders)
    }

    fn update_stakeholder(&self, id: StakeholderId, draft: &NewStakeholder) -> RepoResult<()> {
        draft.validate()?;
        ensure_project_exists(self.conn, draft.project_id)?;

        let changed = self.conn.execute(
            "UPDATE stakeholders
             SET
                project_id = ?1,
                name = ?2,
                role = ?3,
                influence = ?4,
                interest = ?5,
                communication_plan = ?6
             WHERE id = ?7;",
            params![
                draft.project_id,
                draft.name.as_str(),
                draft.role.as_str(),
                draft.influence.as_str(),
                draft.interest.as_str(),
                draft.communication_plan.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "stakeholder",
                id,
            });
        }

        Ok(())
    }

    fn delete_stakeholder(&self, id: StakeholderId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM stakeholders WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "stakeholder",
                id,
            });
        }

        Ok(())
    }
}

fn parse_stakeholder_row(row: &Row<'_>) -> RepoResult<Stakeholder> {
    Ok(Stakeholder {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        name: row.get("name")?,
        role: row.get("role")?,
        influence: row.get("influence")?,
        interest: row.get("interest")?,
        communication_plan: row.get("communication_plan")?,
    })
}
