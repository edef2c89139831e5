//! Slot definitions and unlock requirements.

use serde::{Deserialize, Serialize};

/// A single unlock requirement. All requirements on a slot must hold
/// (logical AND).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    /// Player profile level at or above `level`.
    PlayerLevel { level: u32 },
    /// At least `count` owned clans at or above `level`.
    ClanLevel { level: u32, count: u32 },
    /// At least `count` owned characters at or above `level`.
    CharacterLevel { level: u32, count: u32 },
    /// The task with this id has been completed.
    TaskCompletion { id: String },
    /// The quest with this id has been completed.
    QuestCompletion { id: String },
}

/// A character slot definition.
#[derive(Debug, Clone)]
pub struct CharacterSlot {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unlock_requirements: Vec<Requirement>,
    /// Whether a base (non-NFT) character may occupy this slot.
    pub is_base_allowed: bool,
    /// Whether this slot requires an NFT-backed character.
    pub is_nft_required: bool,
}

/// A clan slot definition. Member capacity is not a slot property; it
/// comes from the clan level table (`entities::Clan::member_capacity`).
#[derive(Debug, Clone)]
pub struct ClanSlot {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unlock_requirements: Vec<Requirement>,
}
