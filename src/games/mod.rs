//! Game roster, access gating, and reward calculation.

mod access;
mod data;
mod rewards;
mod types;

pub use access::{available_game_modes, available_games, is_game_unlocked};
pub use data::{all_games, game_reward, mode_multiplier, progression_requirement};
pub use rewards::{calculate_rewards, roll_item_drop, RewardFault, RewardOutcome};
pub use types::{
    Game, GameCategory, GameMode, GameReward, GameStatus, ModeMultiplier, ModeRequirement,
    ProgressionRequirement,
};
