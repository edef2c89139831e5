//! Character aggregate and creation rules.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classes::{class_definition, CharacterClass, SkillState};
use crate::progression::{apply_xp, CharacterLevel, StatBlock};

/// A playable character. Either NFT-backed or a "base" character with
/// reduced capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: Uuid,
    pub name: String,
    pub class: CharacterClass,
    /// `None` for base characters.
    pub nft_token_id: Option<u64>,
    pub level: u32,
    /// Lifetime XP against the character level table.
    pub xp: u64,
    pub stats: StatBlock,
    pub skills: SkillState,
    pub created_at: DateTime<Utc>,
}

impl Character {
    /// Creates a level-1 character with its class base stats.
    pub fn new(
        name: impl Into<String>,
        class: CharacterClass,
        base_stats: StatBlock,
        nft_token_id: Option<u64>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            class,
            nft_token_id,
            level: 1,
            xp: 0,
            stats: base_stats,
            skills: SkillState::default(),
            created_at: now,
        }
    }

    /// True for characters not backed by an NFT.
    pub fn is_base(&self) -> bool {
        self.nft_token_id.is_none()
    }

    /// Grants XP against the character level table. Each crossed row
    /// awards its skill points; stats advance by the class growth rates.
    pub fn grant_xp(&mut self, amount: u64, table: &[CharacterLevel]) {
        let outcome = apply_xp(self.level, self.xp, amount, table);
        self.level = outcome.new_level;
        self.xp = outcome.new_xp;
        let growth = class_definition(self.class).growth_rates;
        for row in outcome.crossed {
            self.skills.unspent_points += row.skill_points;
            self.stats = growth.apply(self.stats);
        }
    }
}

/// Why a character cannot be created right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterCreateError {
    /// Every unlocked character slot is occupied.
    NoFreeSlot,
    /// The base-character cap for this player level is reached.
    BaseCharacterLimitReached,
    /// No unlocked slot permits a base character.
    NoBaseSlotAvailable,
}

impl std::fmt::Display for CharacterCreateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            CharacterCreateError::NoFreeSlot => "no free character slot",
            CharacterCreateError::BaseCharacterLimitReached => {
                "base character limit reached for this player level"
            }
            CharacterCreateError::NoBaseSlotAvailable => {
                "no unlocked slot allows base characters"
            }
        };
        f.write_str(msg)
    }
}

impl std::error::Error for CharacterCreateError {}

/// Maximum base (non-NFT) characters allowed at a player level:
/// 1 from the start, then 2/3/4 at levels 10/20/30.
pub fn max_base_characters(player_level: u32) -> u32 {
    match player_level {
        0..=9 => 1,
        10..=19 => 2,
        20..=29 => 3,
        _ => 4,
    }
}

/// Checks whether another character may be created.
///
/// `slot_unlocks` is the map produced by `slots::character_slot_unlocks`;
/// `base_allowed_unlocked` is the count of unlocked base-allowed slots
/// (the caller derives it from the same slot definitions).
pub fn can_create_character(
    existing: &[Character],
    slot_unlocks: &HashMap<String, bool>,
    base_allowed_unlocked: usize,
    player_level: u32,
    is_base: bool,
) -> Result<(), CharacterCreateError> {
    let unlocked = slot_unlocks.values().filter(|&&v| v).count();
    if existing.len() >= unlocked {
        return Err(CharacterCreateError::NoFreeSlot);
    }

    if is_base {
        let base_count = existing.iter().filter(|c| c.is_base()).count();
        if base_count >= max_base_characters(player_level) as usize {
            return Err(CharacterCreateError::BaseCharacterLimitReached);
        }
        if base_count >= base_allowed_unlocked {
            return Err(CharacterCreateError::NoBaseSlotAvailable);
        }
    }

    Ok(())
}
