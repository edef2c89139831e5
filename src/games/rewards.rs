//! Reward calculation for a finished game session.

use rand::Rng;

use super::data::{game_reward, mode_multiplier};
use super::types::GameMode;

/// Why a reward computation produced zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardFault {
    /// The game id has no reward table entry.
    UnknownGame,
}

impl std::fmt::Display for RewardFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("no reward table entry for game")
    }
}

/// The computed reward for one session. `fault` is set when the
/// computation failed closed; the caller decides whether to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardOutcome {
    pub xp: u64,
    pub currency: u64,
    /// Item drop percentage, 0-100.
    pub drop_chance: u32,
    pub fault: Option<RewardFault>,
}

impl RewardOutcome {
    fn zeroed(fault: RewardFault) -> Self {
        Self {
            xp: 0,
            currency: 0,
            drop_chance: 0,
            fault: Some(fault),
        }
    }
}

/// Computes the reward for one session of `game_id` played in `mode`.
///
/// Pipeline: base values, mode multipliers, win bonus (if `won`), then
/// streak bonus capped at the game's maximum. XP and currency round to
/// the nearest integer; drop chance rounds and clamps to 100. A game
/// with no reward table yields zeros rather than an error, so one
/// unconfigured roster entry cannot break callers iterating the roster.
pub fn calculate_rewards(game_id: &str, mode: GameMode, won: bool, streak: u32) -> RewardOutcome {
    let reward = match game_reward(game_id) {
        Some(reward) => reward,
        None => return RewardOutcome::zeroed(RewardFault::UnknownGame),
    };
    let multiplier = mode_multiplier(mode);

    let mut xp = reward.base_xp as f64 * multiplier.xp;
    let mut currency = reward.base_currency as f64 * multiplier.currency;
    let mut drop_chance = reward.base_drop_chance * multiplier.item_drop;

    if won {
        xp *= reward.win_bonus_multiplier;
        currency *= reward.win_bonus_multiplier;
        drop_chance *= reward.win_bonus_multiplier;
    }

    let streak_bonus =
        (streak as f64 * reward.streak_bonus_per_win).min(reward.max_streak_bonus);
    xp *= 1.0 + streak_bonus;
    currency *= 1.0 + streak_bonus;
    drop_chance *= 1.0 + streak_bonus;

    RewardOutcome {
        xp: xp.round() as u64,
        currency: currency.round() as u64,
        drop_chance: (drop_chance.round() as u32).min(100),
        fault: None,
    }
}

/// Rolls the item drop for a computed reward.
pub fn roll_item_drop(drop_chance: u32, rng: &mut impl Rng) -> bool {
    rng.gen_range(0..100) < drop_chance
}
