//! Level table row types shared by the player, clan, and character tables.

use serde::{Deserialize, Serialize};

/// Something a player level grants on being reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Unlock {
    /// Permission to create another clan.
    ClanSlot { description: &'static str },
    /// Permission to create another character.
    CharacterSlot { description: &'static str },
    /// A named feature (daily quests, skill tree, tournaments, ...).
    Feature { description: &'static str },
    /// A numeric stat boost, e.g. a reward multiplier.
    Stat {
        description: &'static str,
        value: f64,
    },
}

/// One row of the player level table.
#[derive(Debug, Clone)]
pub struct PlayerLevel {
    pub level: u32,
    /// XP needed to go from the previous row to this one.
    pub xp_required: u64,
    /// Cumulative XP from level 1. Invariant: previous row's total plus
    /// this row's `xp_required` (checked by `validate::validate_tables`).
    pub total_xp_required: u64,
    pub unlocks: Vec<Unlock>,
}

/// Category of a clan level bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    Stat,
    Resource,
    Reward,
}

/// A bonus granted to clan members at a clan level.
#[derive(Debug, Clone)]
pub struct ClanBonus {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: BonusKind,
    /// Percentage or absolute value depending on `kind`.
    pub value: f64,
}

/// One row of the clan level table.
#[derive(Debug, Clone)]
pub struct ClanLevel {
    pub level: u32,
    pub xp_required: u64,
    pub total_xp_required: u64,
    /// Characters that can join a clan of this level.
    pub member_slots: u32,
    pub bonuses: Vec<ClanBonus>,
}

/// Attribute block awarded by a character level row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub strength: u32,
    pub intelligence: u32,
    pub dexterity: u32,
    pub constitution: u32,
    pub luck: u32,
}

/// One row of the character level table.
#[derive(Debug, Clone)]
pub struct CharacterLevel {
    pub level: u32,
    pub xp_required: u64,
    pub total_xp_required: u64,
    /// Class-agnostic stat milestones for this level. Live character
    /// stats advance by `classes::GrowthRates` instead; these rows are
    /// the reference curve and must never regress (checked at load).
    pub stats: StatBlock,
    /// Skill points awarded on reaching this level.
    pub skill_points: u32,
}

/// Common view over a level table row, so the XP resolver works on all
/// three tables.
pub trait LevelRow {
    fn level(&self) -> u32;
    fn total_xp_required(&self) -> u64;
}

impl LevelRow for PlayerLevel {
    fn level(&self) -> u32 {
        self.level
    }
    fn total_xp_required(&self) -> u64 {
        self.total_xp_required
    }
}

impl LevelRow for ClanLevel {
    fn level(&self) -> u32 {
        self.level
    }
    fn total_xp_required(&self) -> u64 {
        self.total_xp_required
    }
}

impl LevelRow for CharacterLevel {
    fn level(&self) -> u32 {
        self.level
    }
    fn total_xp_required(&self) -> u64 {
        self.total_xp_required
    }
}
