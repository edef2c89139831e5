//! Level progression system.
//!
//! Static level tables for players, clans, and characters, plus the XP
//! resolver that walks a table when XP is granted. Tables are sparse above
//! level 10 (milestone levels only); a level field always names a row that
//! exists in its table.

mod data;
mod levels;
mod types;

pub use data::{character_levels, clan_levels, player_levels};
pub use levels::{apply_xp, xp_to_next_level, XpOutcome};
pub use types::{
    BonusKind, CharacterLevel, ClanBonus, ClanLevel, LevelRow, PlayerLevel, StatBlock, Unlock,
};
