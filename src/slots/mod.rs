//! Character and clan slot unlocking.
//!
//! A slot is a unit of capacity that becomes available once all of its
//! requirements are met. Requirements are a closed tagged enum evaluated
//! against a snapshot of player state and owned entity levels; a slot with
//! no requirements is unlocked.

mod data;
mod resolver;
mod types;

pub use data::{character_slots, clan_slots};
pub use resolver::{
    character_slot_unlocks, clan_slot_unlocks, evaluate, RequirementContext,
};
pub use types::{CharacterSlot, ClanSlot, Requirement};
