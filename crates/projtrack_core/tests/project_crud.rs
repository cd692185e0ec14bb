use projtrack_core::db::open_db_in_memory;
use projtrack_core::{
    Availability, Impact, NewProject, NewResource, NewRisk, NewStakeholder, NewTask, Priority,
    Probability, ProjectId, ProjectRepository, ProjectStatus, RepoError, ResourceKind,
    ResourceRepository, RiskRepository, RiskStatus, SqliteProjectRepository,
    SqliteResourceRepository, SqliteRiskRepository, SqliteStakeholderRepository,
    SqliteTaskRepository, StakeholderRepository, TaskRepository, TaskStatus,
};
use rusqlite::Connection;

fn project_draft(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: "shared fixture".to_string(),
        start_date: "2024-02-01".to_string(),
        end_date: "2024-05-31".to_string(),
        budget: 12_000.0,
        status: ProjectStatus::Planning,
        priority: Priority::Medium,
        manager: "Iris".to_string(),
        methodology: "kanban".to_string(),
    }
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let id = repo.create_project(&project_draft("Data platform")).unwrap();
    let loaded = repo.get_project(id).unwrap().unwrap();

    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "Data platform");
    assert_eq!(loaded.description, "shared fixture");
    assert_eq!(loaded.start_date, "2024-02-01");
    assert_eq!(loaded.end_date, "2024-05-31");
    assert_eq!(loaded.budget, 12_000.0);
    assert_eq!(loaded.status, ProjectStatus::Planning);
    assert_eq!(loaded.priority, Priority::Medium);
    assert_eq!(loaded.manager, "Iris");
    assert_eq!(loaded.methodology, "kanban");
    // Stamped as local `YYYY-MM-DD HH:MM:SS`.
    assert_eq!(loaded.created_at.len(), 19);
}

#[test]
fn get_missing_project_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    assert!(repo.get_project(77).unwrap().is_none());
}

#[test]
fn list_projects_orders_by_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    repo.create_project(&project_draft("Gamma")).unwrap();
    repo.create_project(&project_draft("Alpha")).unwrap();
    repo.create_project(&project_draft("Beta")).unwrap();

    let names: Vec<String> = repo
        .list_projects()
        .unwrap()
        .into_iter()
        .map(|project| project.name)
        .collect();
    assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
}

#[test]
fn list_recent_projects_returns_newest_first_with_limit() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let first = repo.create_project(&project_draft("First")).unwrap();
    let second = repo.create_project(&project_draft("Second")).unwrap();
    let third = repo.create_project(&project_draft("Third")).unwrap();

    // Same-second creation stamps tie; newest id wins.
    let recent: Vec<ProjectId> = repo
        .list_recent_projects(2)
        .unwrap()
        .into_iter()
        .map(|project| project.id)
        .collect();
    assert_eq!(recent, [third, second]);

    let all: Vec<ProjectId> = repo
        .list_recent_projects(10)
        .unwrap()
        .into_iter()
        .map(|project| project.id)
        .collect();
    assert_eq!(all, [third, second, first]);
}

#[test]
fn update_project_rewrites_fields_and_preserves_created_at() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let id = repo.create_project(&project_draft("Rebrand")).unwrap();
    let created_at = repo.get_project(id).unwrap().unwrap().created_at;

    let mut draft = project_draft("Rebrand v2");
    draft.status = ProjectStatus::InProgress;
    draft.budget = 20_000.0;
    repo.update_project(id, &draft).unwrap();

    let loaded = repo.get_project(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Rebrand v2");
    assert_eq!(loaded.status, ProjectStatus::InProgress);
    assert_eq!(loaded.budget, 20_000.0);
    assert_eq!(loaded.created_at, created_at);
}

#[test]
fn update_missing_project_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let err = repo.update_project(4242, &project_draft("Ghost")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "project",
            id: 4242,
        }
    ));
}

#[test]
fn set_methodology_changes_only_that_field() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let id = repo.create_project(&project_draft("Migration")).unwrap();
    repo.set_methodology(id, "waterfall").unwrap();

    let loaded = repo.get_project(id).unwrap().unwrap();
    assert_eq!(loaded.methodology, "waterfall");
    assert_eq!(loaded.name, "Migration");
    assert_eq!(loaded.status, ProjectStatus::Planning);
}

#[test]
fn delete_project_cascades_to_all_child_tables() {
    let conn = open_db_in_memory().unwrap();
    let projects = SqliteProjectRepository::try_new(&conn).unwrap();
    let tasks = SqliteTaskRepository::try_new(&conn).unwrap();
    let resources = SqliteResourceRepository::try_new(&conn).unwrap();
    let risks = SqliteRiskRepository::try_new(&conn).unwrap();
    let stakeholders = SqliteStakeholderRepository::try_new(&conn).unwrap();

    let project_id = projects.create_project(&project_draft("Doomed")).unwrap();
    tasks
        .create_task(&NewTask {
            project_id,
            name: "Kickoff".to_string(),
            description: String::new(),
            start_date: "2024-02-01".to_string(),
            end_date: "2024-02-02".to_string(),
            duration_days: 1,
            assignee: String::new(),
            status: TaskStatus::NotStarted,
            priority: Priority::Medium,
            progress: 0,
            dependencies: Vec::new(),
        })
        .unwrap();
    resources
        .create_resource(&NewResource {
            project_id,
            name: "Workstation".to_string(),
            kind: ResourceKind::Technical,
            unit_cost: 900.0,
            quantity: 2,
            availability: Availability::Available,
        })
        .unwrap();
    risks
        .create_risk(&NewRisk {
            project_id,
            description: "Vendor slip".to_string(),
            probability: Probability::Medium,
            impact: Impact::High,
            mitigation: String::new(),
            status: RiskStatus::Identified,
        })
        .unwrap();
    stakeholders
        .create_stakeholder(&NewStakeholder {
            project_id,
            name: "Sponsor".to_string(),
            role: "exec".to_string(),
            influence: "high".to_string(),
            interest: "high".to_string(),
            communication_plan: "weekly".to_string(),
        })
        .unwrap();

    projects.delete_project(project_id).unwrap();

    assert!(projects.get_project(project_id).unwrap().is_none());
    for table in ["tasks", "resources", "risks", "stakeholders"] {
        assert_eq!(count_rows(&conn, table), 0, "{table} rows must cascade");
    }
}

#[test]
fn delete_missing_project_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let err = repo.delete_project(9).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "project", id: 9 }));
}

#[test]
fn validation_failure_blocks_create_and_update() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let mut blank = project_draft("");
    blank.name = "   ".to_string();
    let create_err = repo.create_project(&blank).unwrap_err();
    assert!(matches!(create_err, RepoError::Validation(_)));
    assert_eq!(count_rows(&conn, "projects"), 0);

    let id = repo.create_project(&project_draft("Valid")).unwrap();
    let mut negative = project_draft("Valid");
    negative.budget = -5.0;
    let update_err = repo.update_project(id, &negative).unwrap_err();
    assert!(matches!(update_err, RepoError::Validation(_)));

    let loaded = repo.get_project(id).unwrap().unwrap();
    assert_eq!(loaded.budget, 12_000.0);
}

fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}
