//! Resource repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `resources` table.
//!
//! # Invariants
//! - `total_cost` is derived from the draft inside every write statement;
//!   there is no code path that stores a caller-supplied total.

use super::{ensure_connection_ready, ensure_project_exists, RepoError, RepoResult};
use crate::model::project::ProjectId;
use crate::model::resource::{
    total_cost_of, Availability, NewResource, Resource, ResourceId, ResourceKind,
};
use rusqlite::{params, Connection, Row};

const RESOURCE_SELECT_SQL: &str = "SELECT
    id,
    project_id,
    name,
    kind,
    unit_cost,
    quantity,
    total_cost,
    availability
FROM resources";

const RESOURCE_COLUMNS: &[&str] = &[
    "id",
    "project_id",
    "name",
    "kind",
    "unit_cost",
    "quantity",
    "total_cost",
    "availability",
];

/// Repository interface for resource CRUD operations.
pub trait ResourceRepository {
    fn create_resource(&self, draft: &NewResource) -> RepoResult<ResourceId>;
    fn get_resource(&self, id: ResourceId) -> RepoResult<Option<Resource>>;
    /// A project's resources ordered by name.
    fn list_resources_for_project(&self, project_id: ProjectId) -> RepoResult<Vec<Resource>>;
    fn update_resource(&self, id: ResourceId, draft: &NewResource) -> RepoResult<()>;
    fn delete_resource(&self, id: ResourceId) -> RepoResult<()>;
}

/// SQLite-backed resource repository.
#[derive(Debug)]
pub struct SqliteResourceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteResourceRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "resources", RESOURCE_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ResourceRepository for SqliteResourceRepository<'_> {
    fn create_resource(&self, draft: &NewResource) -> RepoResult<ResourceId> {
        draft.validate()?;
        ensure_project_exists(self.conn, draft.project_id)?;

        self.conn.execute(
            "INSERT INTO resources (
                project_id,
                name,
                kind,
                unit_cost,
                quantity,
                total_cost,
                availability
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                draft.project_id,
                draft.name.as_str(),
                draft.kind.as_label(),
                draft.unit_cost,
                draft.quantity,
                total_cost_of(draft.unit_cost, draft.quantity),
                draft.availability.as_label(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_resource(&self, id: ResourceId) -> RepoResult<Option<Resource>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RESOURCE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_resource_row(row)?));
        }

        Ok(None)
    }

    fn list_resources_for_project(&self, project_id: ProjectId) -> RepoResult<Vec<Resource>> {
        ensure_project_exists(self.conn, project_id)?;

        let mut stmt = self.conn.prepare(&format!(
            "{RESOURCE_SELECT_SQL}
             WHERE project_id = ?1
             ORDER BY name ASC, id ASC;"
        ))?;

        let mut rows = stmt.query([project_id])?;
        let mut resources = Vec::new();
        while let Some(row) = rows.next()? {
            resources.push(parse_resource_row(row)?);
        }

        Ok(resources)
    }

    fn update_resource(&self, id: ResourceId, draft: &NewResource) -> RepoResult<()> {
        draft.validate()?;
        ensure_project_exists(self.conn, draft.project_id)?;

        let changed = self.conn.execute(
            "UPDATE resources
             SET
                project_id = ?1,
                name = ?2,
                kind = ?3,
                unit_cost = ?4,
                quantity = ?5,
                total_cost = ?6,
                availability = ?7
             WHERE id = ?8;",
            params![
                draft.project_id,
                draft.name.as_str(),
                draft.kind.as_label(),
                draft.unit_cost,
                draft.quantity,
                total_cost_of(draft.unit_cost, draft.quantity),
                draft.availability.as_label(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "resource",
                id,
            });
        }

        Ok(())
    }

    fn delete_resource(&self, id: ResourceId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM resources WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "resource",
                id,
            });
        }

        Ok(())
    }
}

fn parse_resource_row(row: &Row<'_>) -> RepoResult<Resource> {
    let kind_label: String = row.get("kind")?;
    let availability_label: String = row.get("availability")?;

    Ok(Resource {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        name: row.get("name")?,
        kind: ResourceKind::from_label(&kind_label),
        unit_cost: row.get("unit_cost")?,
        quantity: row.get("quantity")?,
        total_cost: row.get("total_cost")?,
        availability: Availability::from_label(&availability_label),
    })
}
