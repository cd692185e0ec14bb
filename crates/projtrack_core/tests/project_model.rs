use projtrack_core::{
    Availability, Impact, Priority, Probability, Project, ProjectStatus, ResourceKind, RiskLevel,
    RiskStatus, Task, TaskStatus,
};

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let project = Project {
        id: 12,
        name: "Atlas".to_string(),
        description: "Logistics overhaul".to_string(),
        start_date: "2024-04-01".to_string(),
        end_date: "2024-09-30".to_string(),
        budget: 48_000.0,
        status: ProjectStatus::InProgress,
        priority: Priority::High,
        manager: "Sam".to_string(),
        methodology: "scrum".to_string(),
        created_at: "2024-03-28 14:02:11".to_string(),
    };

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], 12);
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["budget"], 48_000.0);
    assert_eq!(json["created_at"], "2024-03-28 14:02:11");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn task_serialization_round_trips_with_dependencies() {
    let task = Task {
        id: 3,
        project_id: 12,
        name: "Pack stations".to_string(),
        description: String::new(),
        start_date: "2024-04-08".to_string(),
        end_date: "2024-04-19".to_string(),
        duration_days: 11,
        assignee: "Kim".to_string(),
        status: TaskStatus::Blocked,
        priority: Priority::Low,
        progress: 25,
        dependencies: vec![1, 2],
    };

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["status"], "blocked");
    assert_eq!(json["dependencies"], serde_json::json!([1, 2]));

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

// Serde wire labels and store column labels come from separate codecs;
// they must never drift apart.
#[test]
fn serde_labels_match_store_labels() {
    fn wire_label<T: serde::Serialize>(value: T) -> String {
        serde_json::to_value(value)
            .unwrap()
            .as_str()
            .unwrap()
            .to_string()
    }

    for status in [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Blocked,
        ProjectStatus::Completed,
    ] {
        assert_eq!(wire_label(status), status.as_label());
    }
    for status in [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Blocked,
        TaskStatus::Completed,
    ] {
        assert_eq!(wire_label(status), status.as_label());
    }
    for priority in [Priority::High, Priority::Medium, Priority::Low] {
        assert_eq!(wire_label(priority), priority.as_label());
    }
    for probability in [Probability::Low, Probability::Medium, Probability::High] {
        assert_eq!(wire_label(probability), probability.as_label());
    }
    for impact in [Impact::Low, Impact::Medium, Impact::High] {
        assert_eq!(wire_label(impact), impact.as_label());
    }
    for level in [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High] {
        assert_eq!(wire_label(level), level.as_label());
    }
    for status in [
        RiskStatus::Identified,
        RiskStatus::Monitored,
        RiskStatus::Mitigated,
        RiskStatus::Realized,
    ] {
        assert_eq!(wire_label(status), status.as_label());
    }
    for kind in [
        ResourceKind::Human,
        ResourceKind::Material,
        ResourceKind::Financial,
        ResourceKind::Technical,
        ResourceKind::Informational,
    ] {
        assert_eq!(wire_label(kind), kind.as_label());
    }
    for availability in [
        Availability::Available,
        Availability::Partial,
        Availability::Unavailable,
    ] {
        assert_eq!(wire_label(availability), availability.as_label());
    }
}
