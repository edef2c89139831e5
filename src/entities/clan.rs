//! Clan aggregate, creation rules, and specializations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::progression::{apply_xp, ClanLevel};

/// A clan owned by the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clan {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub symbol: String,
    /// Chosen specialization id, available from clan level 5.
    pub specialization: Option<String>,
    pub level: u32,
    /// Lifetime XP against the clan level table.
    pub xp: u64,
    /// Member character ids.
    pub member_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Clan {
    /// Creates a level-1 clan with no members.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        symbol: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            symbol: symbol.into(),
            specialization: None,
            level: 1,
            xp: 0,
            member_ids: Vec::new(),
            created_at: now,
        }
    }

    /// Grants XP against the clan level table.
    pub fn grant_xp(&mut self, amount: u64, table: &[ClanLevel]) {
        let outcome = apply_xp(self.level, self.xp, amount, table);
        self.level = outcome.new_level;
        self.xp = outcome.new_xp;
    }

    /// Member capacity at the clan's current level.
    pub fn member_capacity(&self, table: &[ClanLevel]) -> u32 {
        table
            .iter()
            .filter(|row| row.level <= self.level)
            .last()
            .map(|row| row.member_slots)
            .unwrap_or(0)
    }
}

/// Why a clan cannot be created right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClanCreateError {
    /// Every unlocked clan slot is occupied.
    NoFreeSlot,
}

impl std::fmt::Display for ClanCreateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("no free clan slot")
    }
}

impl std::error::Error for ClanCreateError {}

/// Checks whether another clan may be created. `slot_unlocks` is the map
/// from `slots::clan_slot_unlocks`.
pub fn can_create_clan(
    existing: &[Clan],
    slot_unlocks: &HashMap<String, bool>,
) -> Result<(), ClanCreateError> {
    let unlocked = slot_unlocks.values().filter(|&&v| v).count();
    if existing.len() >= unlocked {
        return Err(ClanCreateError::NoFreeSlot);
    }
    Ok(())
}

/// Checks whether a character may join `clan` given the clan level table.
pub fn can_join_clan(clan: &Clan, table: &[ClanLevel]) -> bool {
    (clan.member_ids.len() as u32) < clan.member_capacity(table)
}

/// A clan specialization choice.
#[derive(Debug, Clone)]
pub struct ClanSpecialization {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub required_level: u32,
    /// (stat, percentage value) pairs.
    pub bonuses: Vec<(&'static str, f64)>,
}

/// Returns the clan specialization table. All unlock at clan level 5.
pub fn clan_specializations() -> Vec<ClanSpecialization> {
    vec![
        ClanSpecialization {
            id: "spec-combat",
            name: "Combat Focus",
            description:
                "Specialize your clan in combat prowess, boosting damage and survivability.",
            required_level: 5,
            bonuses: vec![("damage", 10.0), ("health", 5.0)],
        },
        ClanSpecialization {
            id: "spec-arcane",
            name: "Arcane Focus",
            description:
                "Specialize your clan in magical abilities, boosting spell power and mana.",
            required_level: 5,
            bonuses: vec![("spellPower", 10.0), ("mana", 10.0)],
        },
        ClanSpecialization {
            id: "spec-exploration",
            name: "Exploration Focus",
            description:
                "Specialize your clan in exploration, improving resource gathering and discovery.",
            required_level: 5,
            bonuses: vec![("resourceGathering", 15.0), ("discoveryChance", 10.0)],
        },
        ClanSpecialization {
            id: "spec-trade",
            name: "Trade Focus",
            description:
                "Specialize your clan in trade and commerce, improving currency gains and market access.",
            required_level: 5,
            bonuses: vec![("currencyGain", 15.0), ("marketDiscount", 10.0)],
        },
        ClanSpecialization {
            id: "spec-defense",
            name: "Defensive Focus",
            description:
                "Specialize your clan in defensive tactics, improving survivability in combat.",
            required_level: 5,
            bonuses: vec![("damageReduction", 10.0), ("blockChance", 5.0)],
        },
        ClanSpecialization {
            id: "spec-tactical",
            name: "Tactical Focus",
            description:
                "Specialize your clan in tactical combat, improving critical strikes and precision.",
            required_level: 5,
            bonuses: vec![("critChance", 8.0), ("critDamage", 15.0)],
        },
        ClanSpecialization {
            id: "spec-support",
            name: "Support Focus",
            description:
                "Specialize your clan in supporting abilities, improving healing and buffs.",
            required_level: 5,
            bonuses: vec![("healingPower", 15.0), ("buffDuration", 20.0)],
        },
    ]
}
