//! Prerequisite graph validation.
//!
//! Prerequisite lists must form a DAG over known ids; a cycle would make
//! every task on it permanently unavailable. Checked once at load via
//! `validate::validate_tables`, not on every availability pass.

use std::collections::HashMap;

use super::types::{Quest, Task};

/// A defect in a prerequisite graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// `id` names `prerequisite`, which is not in the catalog.
    UnknownPrerequisite { id: String, prerequisite: String },
    /// `id` appears twice in the catalog.
    DuplicateId { id: String },
    /// These ids form (or feed) a prerequisite cycle.
    Cycle { ids: Vec<String> },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::UnknownPrerequisite { id, prerequisite } => {
                write!(f, "{id} requires unknown id {prerequisite}")
            }
            GraphError::DuplicateId { id } => write!(f, "duplicate id {id}"),
            GraphError::Cycle { ids } => {
                write!(f, "prerequisite cycle involving {}", ids.join(", "))
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Checks that `(id, prerequisites)` pairs form a DAG over known ids,
/// by Kahn's algorithm: repeatedly remove nodes with no unmet
/// prerequisite; whatever remains is cyclic.
pub(crate) fn check_dag(nodes: &[(&str, Vec<&str>)]) -> Result<(), GraphError> {
    let mut remaining_prereqs: HashMap<&str, usize> = HashMap::new();
    let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();

    for (id, _) in nodes {
        if remaining_prereqs.insert(*id, 0).is_some() {
            return Err(GraphError::DuplicateId { id: id.to_string() });
        }
    }
    for (id, prereqs) in nodes {
        for prereq in prereqs {
            if !remaining_prereqs.contains_key(prereq) {
                return Err(GraphError::UnknownPrerequisite {
                    id: id.to_string(),
                    prerequisite: prereq.to_string(),
                });
            }
            if let Some(count) = remaining_prereqs.get_mut(id) {
                *count += 1;
            }
            dependents.entry(*prereq).or_default().push(*id);
        }
    }

    let mut ready: Vec<&str> = remaining_prereqs
        .iter()
        .filter(|(_, &count)| count == 0)
        .map(|(&id, _)| id)
        .collect();
    let mut resolved = 0;

    while let Some(id) = ready.pop() {
        resolved += 1;
        for &dependent in dependents.get(id).into_iter().flatten() {
            if let Some(count) = remaining_prereqs.get_mut(dependent) {
                *count -= 1;
                if *count == 0 {
                    ready.push(dependent);
                }
            }
        }
    }

    if resolved < nodes.len() {
        let mut stuck: Vec<String> = remaining_prereqs
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(&id, _)| id.to_string())
            .collect();
        stuck.sort();
        return Err(GraphError::Cycle { ids: stuck });
    }
    Ok(())
}

/// Validates the task prerequisite graph.
pub fn validate_task_graph(tasks: &[Task]) -> Result<(), GraphError> {
    let nodes: Vec<(&str, Vec<&str>)> = tasks
        .iter()
        .map(|t| (t.id, t.prerequisite_task_ids.clone()))
        .collect();
    check_dag(&nodes)
}

/// Validates the quest prerequisite graph.
pub fn validate_quest_graph(quests: &[Quest]) -> Result<(), GraphError> {
    let nodes: Vec<(&str, Vec<&str>)> = quests
        .iter()
        .map(|q| (q.id, q.prerequisite_quest_ids.clone()))
        .collect();
    check_dag(&nodes)
}
