//! Requirement evaluation and slot unlock resolution.

use std::collections::HashMap;

use super::types::{CharacterSlot, ClanSlot, Requirement};
use crate::player::PlayerState;

/// Snapshot of everything requirements can reference. Entity level arrays
/// come from the caller's owned clans/characters; the resolver never
/// reorders or mutates them.
#[derive(Debug, Clone, Copy)]
pub struct RequirementContext<'a> {
    pub player: &'a PlayerState,
    pub clan_levels: &'a [u32],
    pub character_levels: &'a [u32],
}

fn count_at_or_above(levels: &[u32], threshold: u32) -> usize {
    levels.iter().filter(|&&l| l >= threshold).count()
}

/// Evaluates a single requirement against the snapshot. Pure, no side
/// effects. Malformed entries (an empty id) fail closed so one bad config
/// row degrades that slot instead of crashing the whole resolution.
pub fn evaluate(req: &Requirement, ctx: &RequirementContext) -> bool {
    match req {
        Requirement::PlayerLevel { level } => ctx.player.level >= *level,
        Requirement::ClanLevel { level, count } => {
            count_at_or_above(ctx.clan_levels, *level) >= *count as usize
        }
        Requirement::CharacterLevel { level, count } => {
            count_at_or_above(ctx.character_levels, *level) >= *count as usize
        }
        Requirement::TaskCompletion { id } => {
            !id.is_empty() && ctx.player.completed_task_ids.contains(id)
        }
        Requirement::QuestCompletion { id } => {
            !id.is_empty() && ctx.player.completed_quest_ids.contains(id)
        }
    }
}

fn resolve<'a>(
    slots: impl Iterator<Item = (&'a str, &'a [Requirement])>,
    ctx: &RequirementContext,
) -> HashMap<String, bool> {
    // Slots are independent; evaluation order cannot affect the result.
    slots
        .map(|(id, reqs)| {
            let unlocked = reqs.iter().all(|r| evaluate(r, ctx));
            (id.to_string(), unlocked)
        })
        .collect()
}

/// Resolves every character slot to its unlocked state.
pub fn character_slot_unlocks(
    slots: &[CharacterSlot],
    ctx: &RequirementContext,
) -> HashMap<String, bool> {
    resolve(
        slots.iter().map(|s| (s.id, s.unlock_requirements.as_slice())),
        ctx,
    )
}

/// Resolves every clan slot to its unlocked state.
pub fn clan_slot_unlocks(slots: &[ClanSlot], ctx: &RequirementContext) -> HashMap<String, bool> {
    resolve(
        slots.iter().map(|s| (s.id, s.unlock_requirements.as_slice())),
        ctx,
    )
}
