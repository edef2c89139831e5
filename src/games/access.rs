//! Game and mode gating.

use std::collections::HashSet;

use super::data::{all_games, progression_requirement};
use super::types::{Game, GameMode};

/// Whether `game_id` is unlocked for the given levels and completed-game
/// set. Games without a requirements entry are always unlocked.
pub fn is_game_unlocked(
    game_id: &str,
    player_level: u32,
    character_level: u32,
    completed_games: &HashSet<String>,
) -> bool {
    let requirement = match progression_requirement(game_id) {
        Some(requirement) => requirement,
        None => return true,
    };

    if !requirement.entry.is_met(player_level, character_level, 0) {
        return false;
    }
    requirement
        .previous_game_completion
        .iter()
        .all(|id| completed_games.contains(*id))
}

/// Filters the roster to games unlocked at the given levels.
pub fn available_games(
    player_level: u32,
    character_level: u32,
    completed_games: &HashSet<String>,
) -> Vec<Game> {
    all_games()
        .into_iter()
        .filter(|game| is_game_unlocked(game.id, player_level, character_level, completed_games))
        .collect()
}

/// Modes playable in `game_id` at the given levels. A game without a
/// requirements entry defaults to casual only.
pub fn available_game_modes(
    game_id: &str,
    player_level: u32,
    character_level: u32,
    clan_level: u32,
) -> Vec<GameMode> {
    let requirement = match progression_requirement(game_id) {
        Some(requirement) => requirement,
        None => return vec![GameMode::Casual],
    };

    requirement
        .modes
        .iter()
        .filter(|(_, reqs)| reqs.is_met(player_level, character_level, clan_level))
        .map(|(mode, _)| *mode)
        .collect()
}
