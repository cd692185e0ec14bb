use projtrack_core::db::open_db_in_memory;
use projtrack_core::{
    NewProject, NewStakeholder, Priority, ProjectId, ProjectRepository, ProjectStatus, RepoError,
    SqliteProjectRepository, SqliteStakeholderRepository, StakeholderRepository,
};
use rusqlite::Connection;

fn seed_project(conn: &Connection) -> ProjectId {
    let repo = SqliteProjectRepository::try_new(conn).unwrap();
    repo.create_project(&NewProject {
        name: "Host project".to_string(),
        description: String::new(),
        start_date: String::new(),
        end_date: String::new(),
        budget: 0.0,
        status: ProjectStatus::Planning,
        priority: Priority::Medium,
        manager: String::new(),
        methodology: String::new(),
    })
    .unwrap()
}

fn stakeholder_draft(project_id: ProjectId, name: &str) -> NewStakeholder {
    NewStakeholder {
        project_id,
        name: name.to_string(),
        role: "reviewer".to_string(),
        influence: "medium".to_string(),
        interest: "high".to_string(),
        communication_plan: "monthly digest".to_string(),
    }
}

#[test]
fn create_get_update_delete_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let project_id = seed_project(&conn);
    let repo = SqliteStakeholderRepository::try_new(&conn).unwrap();

    let id = repo
        .create_stakeholder(&stakeholder_draft(project_id, "Quinn"))
        .unwrap();

    let loaded = repo.get_stakeholder(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Quinn");
    assert_eq!(loaded.role, "reviewer");
    assert_eq!(loaded.communication_plan, "monthly digest");

    let mut draft = stakeholder_draft(project_id, "Quinn");
    draft.role = "sponsor".to_string();
    repo.update_stakeholder(id, &draft).unwrap();
    assert_eq!(repo.get_stakeholder(id).unwrap().unwrap().role, "sponsor");

    repo.delete_stakeholder(id).unwrap();
    assert!(repo.get_stakeholder(id).unwrap().is_none());
}

#[test]
fn list_stakeholders_orders_by_name() {
    let conn = open_db_in_memory().unwrap();
    let project_id = seed_project(&conn);
    let repo = SqliteStakeholderRepository::try_new(&conn).unwrap();

    repo.create_stakeholder(&stakeholder_draft(project_id, "Zoe"))
        .unwrap();
    repo.create_stakeholder(&stakeholder_draft(project_id, "Ada"))
        .unwrap();

    let names: Vec<String> = repo
        .list_stakeholders_for_project(project_id)
        .unwrap()
        .into_iter()
        .map(|stakeholder| stakeholder.name)
        .collect();
    assert_eq!(names, ["Ada", "Zoe"]);
}

#[test]
fn blank_name_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let project_id = seed_project(&conn);
    let repo = SqliteStakeholderRepository::try_new(&conn).unwrap();

    let mut draft = stakeholder_draft(project_id, "");
    draft.name = "  ".to_string();
    let err = repo.create_stakeholder(&draft).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn create_stakeholder_requires_existing_project() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStakeholderRepository::try_new(&conn).unwrap();

    let err = repo
        .create_stakeholder(&stakeholder_draft(400, "Orphan"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "project",
            id: 400,
        }
    ));
}
