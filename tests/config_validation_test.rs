//! Integration test: static config validation
//!
//! The shipped tables must validate, and the checks must actually catch
//! the defect classes they exist for: broken prerequisite graphs and
//! dangling references.

use chrono::Utc;
use flingers_hub::tasks::{
    all_tasks, validate_quest_graph, validate_task_graph, GraphError, Quest, Task,
};
use flingers_hub::validate_tables;

#[test]
fn test_shipped_config_validates() {
    assert!(validate_tables(Utc::now()).is_ok());
}

#[test]
fn test_task_cycle_rejected() {
    let mut tasks = all_tasks();
    // Close a loop: create-profile now requires its own dependent.
    if let Some(task) = tasks.iter_mut().find(|t| t.id == "create-profile") {
        task.prerequisite_task_ids.push("create-clan");
    }

    match validate_task_graph(&tasks) {
        Err(GraphError::Cycle { ids }) => {
            assert!(ids.contains(&"create-profile".to_string()));
            assert!(ids.contains(&"create-clan".to_string()));
        }
        other => panic!("expected cycle, got {other:?}"),
    }
}

#[test]
fn test_dangling_prerequisite_rejected() {
    let mut tasks = all_tasks();
    if let Some(task) = tasks.iter_mut().find(|t| t.id == "join-discord") {
        task.prerequisite_task_ids.push("task-that-never-shipped");
    }

    assert_eq!(
        validate_task_graph(&tasks),
        Err(GraphError::UnknownPrerequisite {
            id: "join-discord".to_string(),
            prerequisite: "task-that-never-shipped".to_string(),
        })
    );
}

#[test]
fn test_duplicate_task_id_rejected() {
    let mut tasks = all_tasks();
    let duplicate = tasks[0].clone();
    tasks.push(duplicate);

    assert!(matches!(
        validate_task_graph(&tasks),
        Err(GraphError::DuplicateId { .. })
    ));
}

#[test]
fn test_quest_graph_checked_independently_of_tasks() {
    let quests: Vec<Quest> = flingers_hub::tasks::all_quests(Utc::now());
    assert!(validate_quest_graph(&quests).is_ok());

    // A quest chain that loops through two entries.
    let mut looped = quests;
    for quest in looped.iter_mut() {
        if quest.id == "story-introduction" {
            quest.prerequisite_quest_ids.push("story-chapter1");
        }
    }
    assert!(matches!(
        validate_quest_graph(&looped),
        Err(GraphError::Cycle { .. })
    ));
}

#[test]
fn test_graph_errors_are_displayable() {
    // Errors surface at startup; they need readable messages.
    let tasks: Vec<Task> = Vec::new();
    assert!(validate_task_graph(&tasks).is_ok());

    let err = GraphError::UnknownPrerequisite {
        id: "a".to_string(),
        prerequisite: "b".to_string(),
    };
    assert_eq!(err.to_string(), "a requires unknown id b");
}
