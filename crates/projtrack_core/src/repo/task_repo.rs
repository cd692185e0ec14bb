//! Task repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `tasks` table.
//! - Return a project's tasks in the order the timeline engine expects.
//!
//! # Invariants
//! - `dependencies` is persisted as a JSON id array and round-trips
//!   verbatim; nothing here interprets it.
//! - Child writes pre-check the owning project so a missing project surfaces
//!   as `NotFound`, not an FK violation.

use super::{ensure_connection_ready, ensure_project_exists, RepoError, RepoResult};
use crate::model::project::ProjectId;
use crate::model::task::{NewTask, Task, TaskId, TaskStatus};
use crate::model::Priority;
use rusqlite::{params, Connection, Row};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    project_id,
    name,
    description,
    start_date,
    end_date,
    duration_days,
    assignee,
    status,
    priority,
    progress,
    dependencies
FROM tasks";

const TASK_COLUMNS: &[&str] = &[
    "id",
    "project_id",
    "name",
    "description",
    "start_date",
    "end_date",
    "duration_days",
    "assignee",
    "status",
    "priority",
    "progress",
    "dependencies",
];

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    fn create_task(&self, draft: &NewTask) -> RepoResult<TaskId>;
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// A project's tasks ordered by start date, the layout engine's input
    /// order.
    fn list_tasks_for_project(&self, project_id: ProjectId) -> RepoResult<Vec<Task>>;
    fn update_task(&self, id: TaskId, draft: &NewTask) -> RepoResult<()>;
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
}

/// SQLite-backed task repository.
#[derive(Debug)]
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "tasks", TASK_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, draft: &NewTask) -> RepoResult<TaskId> {
        draft.validate()?;
        ensure_project_exists(self.conn, draft.project_id)?;

        self.conn.execute(
            "INSERT INTO tasks (
                project_id,
                name,
                description,
                start_date,
                end_date,
                duration_days,
                assignee,
                status,
                priority,
                progress,
                dependencies
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11);",
            params![
                draft.project_id,
                draft.name.as_str(),
                draft.description.as_str(),
                draft.start_date.as_str(),
                draft.end_date.as_str(),
                draft.duration_days,
                draft.assignee.as_str(),
                draft.status.as_label(),
                draft.priority.as_label(),
                i64::from(draft.progress),
                dependencies_to_db(&draft.dependencies)?,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_tasks_for_project(&self, project_id: ProjectId) -> RepoResult<Vec<Task>> {
        ensure_project_exists(self.conn, project_id)?;

        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL}
             WHERE project_id = ?1
             ORDER BY start_date ASC, id ASC;"
        ))?;

        let mut rows = stmt.query([project_id])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn update_task(&self, id: TaskId, draft: &NewTask) -> RepoResult<()> {
        draft.validate()?;
        ensure_project_exists(self.conn, draft.project_id)?;

        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                project_id = ?1,
                name = ?2,
                description = ?3,
                start_date = ?4,
                end_date = ?5,
                duration_days = ?6,
                assignee = ?7,
                status = ?8,
                priority = ?9,
                progress = ?10,
                dependencies = ?11
             WHERE id = ?12;",
            params![
                draft.project_id,
                draft.name.as_str(),
                draft.description.as_str(),
                draft.start_date.as_str(),
                draft.end_date.as_str(),
                draft.duration_days,
                draft.assignee.as_str(),
                draft.status.as_label(),
                draft.priority.as_label(),
                i64::from(draft.progress),
                dependencies_to_db(&draft.dependencies)?,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound { entity: "task", id });
        }

        Ok(())
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM tasks WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { entity: "task", id });
        }

        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let status_label: String = row.get("status")?;
    let priority_label: String = row.get("priority")?;
    let dependencies_text: String = row.get("dependencies")?;

    Ok(Task {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
        duration_days: row.get("duration_days")?,
        assignee: row.get("assignee")?,
        status: TaskStatus::from_label(&status_label),
        priority: Priority::from_label(&priority_label),
        progress: row.get("progress")?,
        dependencies: parse_dependencies(&dependencies_text)?,
    })
}

fn dependencies_to_db(dependencies: &[TaskId]) -> RepoResult<String> {
    serde_json::to_string(dependencies)
        .map_err(|err| RepoError::InvalidData(format!("dependencies not serializable: {err}")))
}

fn parse_dependencies(value: &str) -> RepoResult<Vec<TaskId>> {
    serde_json::from_str(value).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid dependencies value `{value}` in tasks.dependencies"
        ))
    })
}
