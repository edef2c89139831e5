//! Tasks and quests.
//!
//! Tasks form a prerequisite DAG; quests add time windows and multi-step
//! structure. Availability is re-derived from completed-id sets and an
//! injected `now` on every state change - nothing here is cached.

mod availability;
mod data;
mod graph;
mod types;

pub use availability::{available_quests, available_tasks, is_quest_available, is_task_available};
pub use data::{
    all_quests, all_tasks, community_tasks, daily_quests, monthly_quests, onboarding_tasks,
    progression_tasks, side_quests, story_quests, weekly_quests,
};
pub(crate) use graph::check_dag;
pub use graph::{validate_quest_graph, validate_task_graph, GraphError};
pub use types::{
    Difficulty, Quest, QuestKind, QuestPeriod, QuestStep, Task, TaskKind, TaskReward,
};
