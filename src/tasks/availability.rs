//! Availability resolution.
//!
//! Availability is a pure function of the completed-id sets and `now`;
//! callers recompute after every state change.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::types::{Quest, Task};

/// A task is available iff it is not yet completed and every
/// prerequisite id is in the completed set.
pub fn is_task_available(task: &Task, completed: &HashSet<String>) -> bool {
    if completed.contains(task.id) {
        return false;
    }
    task.prerequisite_task_ids
        .iter()
        .all(|id| completed.contains(*id))
}

/// A quest additionally requires `now` inside its period, if it has one.
pub fn is_quest_available(quest: &Quest, completed: &HashSet<String>, now: DateTime<Utc>) -> bool {
    if completed.contains(quest.id) {
        return false;
    }
    if !quest
        .prerequisite_quest_ids
        .iter()
        .all(|id| completed.contains(*id))
    {
        return false;
    }
    match quest.period {
        Some(period) => period.contains(now),
        None => true,
    }
}

/// Filters `tasks` to those currently startable.
pub fn available_tasks<'a>(tasks: &'a [Task], completed: &HashSet<String>) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| is_task_available(task, completed))
        .collect()
}

/// Filters `quests` to those currently startable at `now`.
pub fn available_quests<'a>(
    quests: &'a [Quest],
    completed: &HashSet<String>,
    now: DateTime<Utc>,
) -> Vec<&'a Quest> {
    quests
        .iter()
        .filter(|quest| is_quest_available(quest, completed, now))
        .collect()
}
