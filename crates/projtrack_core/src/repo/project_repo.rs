//! Project repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `projects` table.
//! - Own the cascade-delete entry point for a project and its dependents.
//!
//! # Invariants
//! - `created_at` is stamped at insert and never touched by updates.
//! - Delete relies on `ON DELETE CASCADE` (the connection is opened with
//!   `foreign_keys=ON`); no per-child sweep happens here.

use super::{ensure_connection_ready, RepoError, RepoResult};
use crate::model::project::{NewProject, Project, ProjectId, ProjectStatus};
use crate::model::Priority;
use chrono::Local;
use log::info;
use rusqlite::{params, Connection, Row};

const PROJECT_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    start_date,
    end_date,
    budget,
    status,
    priority,
    manager,
    methodology,
    created_at
FROM projects";

const PROJECT_COLUMNS: &[&str] = &[
    "id",
    "name",
    "description",
    "start_date",
    "end_date",
    "budget",
    "status",
    "priority",
    "manager",
    "methodology",
    "created_at",
];

/// Repository interface for project CRUD operations.
pub trait ProjectRepository {
    fn create_project(&self, draft: &NewProject) -> RepoResult<ProjectId>;
    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>>;
    /// All projects, ordered by name.
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
    /// Most recently created projects first, at most `limit` rows.
    fn list_recent_projects(&self, limit: u32) -> RepoResult<Vec<Project>>;
    /// Replaces every caller-supplied field; `created_at` is preserved.
    fn update_project(&self, id: ProjectId, draft: &NewProject) -> RepoResult<()>;
    /// Updates the methodology column alone.
    fn set_methodology(&self, id: ProjectId, methodology: &str) -> RepoResult<()>;
    /// Removes the project and, via FK cascade, all of its dependents.
    fn delete_project(&self, id: ProjectId) -> RepoResult<()>;
}

/// SQLite-backed project repository.
#[derive(Debug)]
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "projects", PROJECT_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create_project(&self, draft: &NewProject) -> RepoResult<ProjectId> {
        draft.validate()?;

        let created_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.conn.execute(
            "INSERT INTO projects (
                name,
                description,
                start_date,
                end_date,
                budget,
                status,
                priority,
                manager,
                methodology,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                draft.name.as_str(),
                draft.description.as_str(),
                draft.start_date.as_str(),
                draft.end_date.as_str(),
                draft.budget,
                draft.status.as_label(),
                draft.priority.as_label(),
                draft.manager.as_str(),
                draft.methodology.as_str(),
                created_at,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(row)?));
        }

        Ok(None)
    }

    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY name ASC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }

    fn list_recent_projects(&self, limit: u32) -> RepoResult<Vec<Project>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PROJECT_SELECT_SQL} ORDER BY created_at DESC, id DESC LIMIT ?1;"
        ))?;

        let mut rows = stmt.query([i64::from(limit)])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }

    fn update_project(&self, id: ProjectId, draft: &NewProject) -> RepoResult<()> {
        draft.validate()?;

        let changed = self.conn.execute(
            "UPDATE projects
             SET
                name = ?1,
                description = ?2,
                start_date = ?3,
                end_date = ?4,
                budget = ?5,
                status = ?6,
                priority = ?7,
                manager = ?8,
                methodology = ?9
             WHERE id = ?10;",
            params![
                draft.name.as_str(),
                draft.description.as_str(),
                draft.start_date.as_str(),
                draft.end_date.as_str(),
                draft.budget,
                draft.status.as_label(),
                draft.priority.as_label(),
                draft.manager.as_str(),
                draft.methodology.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "project",
                id,
            });
        }

        Ok(())
    }

    fn set_methodology(&self, id: ProjectId, methodology: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE projects SET methodology = ?1 WHERE id = ?2;",
            params![methodology, id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "project",
                id,
            });
        }

        Ok(())
    }

    fn delete_project(&self, id: ProjectId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM projects WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "project",
                id,
            });
        }

        info!("event=project_delete module=repo status=ok project_id={id} cascade=dependents");
        Ok(())
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    let status_label: String = row.get("status")?;
    let priority_label: String = row.get("priority")?;

    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
        budget: row.get("budget")?,
        status: ProjectStatus::from_label(&status_label),
        priority: Priority::from_label(&priority_label),
        manager: row.get("manager")?,
        methodology: row.get("methodology")?,
        created_at: row.get("created_at")?,
    })
}
