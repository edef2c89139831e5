//! Character and clan aggregates.
//!
//! Entities are created by explicit user action once a slot is unlocked
//! and capacity remains. Lifetimes are append-only: no deletion flow
//! exists, so a slot is never freed.

mod character;
mod clan;

pub use character::{
    can_create_character, max_base_characters, Character, CharacterCreateError,
};
pub use clan::{
    can_create_clan, can_join_clan, clan_specializations, Clan, ClanCreateError,
    ClanSpecialization,
};
