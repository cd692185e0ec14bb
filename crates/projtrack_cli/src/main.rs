//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `projtrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use projtrack_core::db::migrations::latest_version;
use projtrack_core::{
    layout_tasks, open_db_in_memory, NewProject, NewTask, Priority, ProjectRepository,
    ProjectStatus, SqliteProjectRepository, SqliteTaskRepository, TaskRepository, TaskStatus,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("projtrack smoke probe failed: {err}");
        std::process::exit(1);
    }
}

// Walks the store and the layout engine end to end against an in-memory
// database. Dates are fixed and well-formed so the output never varies.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("projtrack_core version={}", projtrack_core::core_version());

    let conn = open_db_in_memory()?;
    println!("store schema_version={}", latest_version());

    let projects = SqliteProjectRepository::try_new(&conn)?;
    let tasks = SqliteTaskRepository::try_new(&conn)?;

    let project_id = projects.create_project(&NewProject {
        name: "Smoke project".to_string(),
        description: "Probe fixture".to_string(),
        start_date: "2024-01-01".to_string(),
        end_date: "2024-01-31".to_string(),
        budget: 1_000.0,
        status: ProjectStatus::InProgress,
        priority: Priority::Medium,
        manager: "probe".to_string(),
        methodology: "agile".to_string(),
    })?;
    tasks.create_task(&NewTask {
        project_id,
        name: "Design".to_string(),
        description: String::new(),
        start_date: "2024-01-01".to_string(),
        end_date: "2024-01-10".to_string(),
        duration_days: 9,
        assignee: "probe".to_string(),
        status: TaskStatus::InProgress,
        priority: Priority::High,
        progress: 50,
        dependencies: Vec::new(),
    })?;

    let rows = tasks.list_tasks_for_project(project_id)?;
    for bar in layout_tasks(&rows) {
        let label = bar
            .label
            .map(|label| label.text)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "bar row={} name={} start_day={} span_days={} color={} label={}",
            bar.row,
            bar.name,
            bar.start_day,
            bar.span_days,
            bar.color.hex(),
            label
        );
    }

    Ok(())
}
