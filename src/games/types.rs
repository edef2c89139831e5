//! Game catalog types.

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a game in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Development,
    Alpha,
    Beta,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameCategory {
    Staking,
    Minigame,
    Online,
    Release,
}

/// One entry in the game roster.
#[derive(Debug, Clone)]
pub struct Game {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: GameStatus,
    pub category: GameCategory,
    /// Leaderboard points awarded for top play.
    pub points: u32,
    pub coming_soon: bool,
}

/// How a game session is entered. Closed set; every mode has a
/// multiplier row in the mode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Casual,
    Ranked,
    Tournament,
    ClanWar,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Casual,
        GameMode::Ranked,
        GameMode::Tournament,
        GameMode::ClanWar,
    ];
}

/// Reward multipliers applied by a game mode.
#[derive(Debug, Clone, Copy)]
pub struct ModeMultiplier {
    pub mode: GameMode,
    pub xp: f64,
    pub currency: f64,
    pub item_drop: f64,
}

/// Per-game reward table entry.
#[derive(Debug, Clone, Copy)]
pub struct GameReward {
    pub game_id: &'static str,
    pub base_xp: u64,
    pub base_currency: u64,
    /// Percentage, 0-100.
    pub base_drop_chance: f64,
    pub win_bonus_multiplier: f64,
    /// Additional fraction per consecutive win.
    pub streak_bonus_per_win: f64,
    /// Cap on the accumulated streak fraction.
    pub max_streak_bonus: f64,
}

/// Level thresholds gating a game or a mode. `None` means no threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeRequirement {
    pub player_level: Option<u32>,
    pub character_level: Option<u32>,
    pub clan_level: Option<u32>,
}

impl ModeRequirement {
    /// True iff every set threshold is met.
    pub fn is_met(&self, player_level: u32, character_level: u32, clan_level: u32) -> bool {
        self.player_level.map_or(true, |min| player_level >= min)
            && self
                .character_level
                .map_or(true, |min| character_level >= min)
            && self.clan_level.map_or(true, |min| clan_level >= min)
    }
}

/// Entry and per-mode requirements for one game.
#[derive(Debug, Clone)]
pub struct ProgressionRequirement {
    pub game_id: &'static str,
    pub entry: ModeRequirement,
    /// Game ids that must be completed before this one unlocks.
    pub previous_game_completion: Vec<&'static str>,
    pub modes: Vec<(GameMode, ModeRequirement)>,
}
