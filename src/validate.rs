//! Config validation.
//!
//! Static tables are code, but their cross-references (prerequisite ids,
//! slot requirement ids, XP totals) are still data that can drift as
//! entries are added. `validate_tables` checks all of it in one pass so
//! a bad edit fails at startup instead of surfacing as a permanently
//! locked slot or unreachable task.

use chrono::{DateTime, Utc};

use crate::classes::{all_classes, CharacterClass};
use crate::games::all_games;
use crate::progression::{character_levels, clan_levels, player_levels, CharacterLevel};
use crate::slots::{character_slots, clan_slots, Requirement};
use crate::tasks::{
    all_quests, all_tasks, check_dag, validate_quest_graph, validate_task_graph, GraphError,
};

/// A defect found in the static configuration tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A level table does not start at level 1 with zero total XP.
    MissingBaseRow { table: &'static str },
    /// Level rows are not strictly ascending.
    UnorderedLevels { table: &'static str, level: u32 },
    /// A row's cumulative XP is not the previous total plus its delta.
    XpTotalMismatch { table: &'static str, level: u32 },
    /// A character row's stat milestones fall below the previous row's.
    StatMilestoneRegression { level: u32 },
    /// A class skill tree has a bad prerequisite graph.
    SkillTree {
        class: CharacterClass,
        error: GraphError,
    },
    /// The task prerequisite graph is broken.
    TaskGraph(GraphError),
    /// The quest prerequisite graph is broken.
    QuestGraph(GraphError),
    /// A slot requirement carries an empty id.
    EmptyRequirementId { slot: &'static str },
    /// A slot requirement references a task or quest that does not exist.
    UnknownRequirementId { slot: &'static str, id: String },
    /// A quest period ends before it starts.
    InvalidPeriod { quest: &'static str },
    /// A quest references a game missing from the roster.
    UnknownGameReference {
        quest: &'static str,
        game_id: &'static str,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingBaseRow { table } => {
                write!(f, "{table} level table must start at level 1 with 0 XP")
            }
            ConfigError::UnorderedLevels { table, level } => {
                write!(f, "{table} level table out of order at level {level}")
            }
            ConfigError::XpTotalMismatch { table, level } => {
                write!(f, "{table} level table XP totals inconsistent at level {level}")
            }
            ConfigError::StatMilestoneRegression { level } => {
                write!(f, "character level table stat milestones regress at level {level}")
            }
            ConfigError::SkillTree { class, error } => {
                write!(f, "{} skill tree: {error}", class.name())
            }
            ConfigError::TaskGraph(error) => write!(f, "task graph: {error}"),
            ConfigError::QuestGraph(error) => write!(f, "quest graph: {error}"),
            ConfigError::EmptyRequirementId { slot } => {
                write!(f, "slot {slot} has a requirement with an empty id")
            }
            ConfigError::UnknownRequirementId { slot, id } => {
                write!(f, "slot {slot} requires unknown id {id}")
            }
            ConfigError::InvalidPeriod { quest } => {
                write!(f, "quest {quest} has a period ending before it starts")
            }
            ConfigError::UnknownGameReference { quest, game_id } => {
                write!(f, "quest {quest} references unknown game {game_id}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validates every static table. `now` anchors the periodic quest
/// windows being checked. Call once at startup.
pub fn validate_tables(now: DateTime<Utc>) -> Result<(), ConfigError> {
    let players = player_levels();
    check_level_table(
        "player",
        &players
            .iter()
            .map(|r| (r.level, r.xp_required, r.total_xp_required))
            .collect::<Vec<_>>(),
    )?;
    let clans = clan_levels();
    check_level_table(
        "clan",
        &clans
            .iter()
            .map(|r| (r.level, r.xp_required, r.total_xp_required))
            .collect::<Vec<_>>(),
    )?;
    let characters = character_levels();
    check_level_table(
        "character",
        &characters
            .iter()
            .map(|r| (r.level, r.xp_required, r.total_xp_required))
            .collect::<Vec<_>>(),
    )?;
    check_stat_milestones(&characters)?;

    for definition in all_classes() {
        let nodes: Vec<(&str, Vec<&str>)> = definition
            .skill_tree
            .iter()
            .map(|node| (node.id, node.prerequisite_skill_ids.clone()))
            .collect();
        check_dag(&nodes).map_err(|error| ConfigError::SkillTree {
            class: definition.class,
            error,
        })?;
    }

    let tasks = all_tasks();
    let quests = all_quests(now);
    validate_task_graph(&tasks).map_err(ConfigError::TaskGraph)?;
    validate_quest_graph(&quests).map_err(ConfigError::QuestGraph)?;

    let task_ids: Vec<&str> = tasks.iter().map(|t| t.id).collect();
    let quest_ids: Vec<&str> = quests.iter().map(|q| q.id).collect();
    for slot in character_slots() {
        check_requirements(slot.id, &slot.unlock_requirements, &task_ids, &quest_ids)?;
    }
    for slot in clan_slots() {
        check_requirements(slot.id, &slot.unlock_requirements, &task_ids, &quest_ids)?;
    }

    let game_ids: Vec<&str> = all_games().iter().map(|g| g.id).collect();
    for quest in &quests {
        if let Some(period) = quest.period {
            if period.end < period.start {
                return Err(ConfigError::InvalidPeriod { quest: quest.id });
            }
        }
        if let Some(game_id) = quest.game_id {
            if !game_ids.contains(&game_id) {
                return Err(ConfigError::UnknownGameReference {
                    quest: quest.id,
                    game_id,
                });
            }
        }
    }

    Ok(())
}

/// Checks one level table's `(level, xp_required, total_xp_required)`
/// rows: a level-1 base row at zero XP, strictly ascending levels, and
/// each total equal to the previous total plus the row's delta. Rows
/// may skip levels (milestone tables); the delta then spans the gap.
fn check_level_table(
    table: &'static str,
    rows: &[(u32, u64, u64)],
) -> Result<(), ConfigError> {
    let first = match rows.first() {
        Some(first) => first,
        None => return Err(ConfigError::MissingBaseRow { table }),
    };
    if first.0 != 1 || first.2 != 0 {
        return Err(ConfigError::MissingBaseRow { table });
    }

    for pair in rows.windows(2) {
        let (prev_level, _, prev_total) = pair[0];
        let (level, xp_required, total) = pair[1];
        if level <= prev_level {
            return Err(ConfigError::UnorderedLevels { table, level });
        }
        if total != prev_total + xp_required {
            return Err(ConfigError::XpTotalMismatch { table, level });
        }
    }
    Ok(())
}

/// Checks that the character table's stat milestone curve never drops
/// between rows.
fn check_stat_milestones(rows: &[CharacterLevel]) -> Result<(), ConfigError> {
    for pair in rows.windows(2) {
        let (prev, row) = (&pair[0].stats, &pair[1]);
        let regressed = row.stats.strength < prev.strength
            || row.stats.intelligence < prev.intelligence
            || row.stats.dexterity < prev.dexterity
            || row.stats.constitution < prev.constitution
            || row.stats.luck < prev.luck;
        if regressed {
            return Err(ConfigError::StatMilestoneRegression { level: row.level });
        }
    }
    Ok(())
}

fn check_requirements(
    slot: &'static str,
    requirements: &[Requirement],
    task_ids: &[&str],
    quest_ids: &[&str],
) -> Result<(), ConfigError> {
    for requirement in requirements {
        let (id, known) = match requirement {
            Requirement::TaskCompletion { id } => (id, task_ids),
            Requirement::QuestCompletion { id } => (id, quest_ids),
            _ => continue,
        };
        if id.is_empty() {
            return Err(ConfigError::EmptyRequirementId { slot });
        }
        if !known.contains(&id.as_str()) {
            return Err(ConfigError::UnknownRequirementId {
                slot,
                id: id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_tables_validate() {
        assert_eq!(validate_tables(Utc::now()), Ok(()));
    }

    #[test]
    fn test_level_table_must_start_at_one() {
        let rows = [(2, 0, 0), (3, 100, 100)];
        assert_eq!(
            check_level_table("player", &rows),
            Err(ConfigError::MissingBaseRow { table: "player" })
        );
    }

    #[test]
    fn test_level_table_ordering_enforced() {
        let rows = [(1, 0, 0), (3, 100, 100), (2, 50, 150)];
        assert_eq!(
            check_level_table("clan", &rows),
            Err(ConfigError::UnorderedLevels { table: "clan", level: 2 })
        );
    }

    #[test]
    fn test_xp_totals_must_be_cumulative() {
        let rows = [(1, 0, 0), (2, 100, 100), (3, 150, 300)];
        assert_eq!(
            check_level_table("character", &rows),
            Err(ConfigError::XpTotalMismatch {
                table: "character",
                level: 3,
            })
        );
    }

    #[test]
    fn test_stat_milestones_must_not_regress() {
        use crate::progression::StatBlock;

        let flat = |value| StatBlock {
            strength: value,
            intelligence: value,
            dexterity: value,
            constitution: value,
            luck: value,
        };
        let row = |level, total, stats| CharacterLevel {
            level,
            xp_required: total,
            total_xp_required: total,
            stats,
            skill_points: 1,
        };

        let rows = vec![row(1, 0, flat(10)), row(2, 100, flat(8))];
        assert_eq!(
            check_stat_milestones(&rows),
            Err(ConfigError::StatMilestoneRegression { level: 2 })
        );
        let rows = vec![row(1, 0, flat(10)), row(2, 100, flat(10))];
        assert_eq!(check_stat_milestones(&rows), Ok(()));
    }

    #[test]
    fn test_sparse_rows_allowed() {
        // Milestone tables skip levels; the delta spans the gap.
        let rows = [(1, 0, 0), (2, 100, 100), (10, 900, 1000)];
        assert_eq!(check_level_table("player", &rows), Ok(()));
    }
}
