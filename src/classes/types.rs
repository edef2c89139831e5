//! Class and skill tree types.

use serde::{Deserialize, Serialize};

use crate::progression::StatBlock;

/// Character class. Closed set; see `data::class_definition` for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Warrior,
    Mage,
    Archer,
    Rogue,
}

impl CharacterClass {
    /// All classes in display order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Warrior,
        CharacterClass::Mage,
        CharacterClass::Archer,
        CharacterClass::Rogue,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Archer => "Archer",
            CharacterClass::Rogue => "Rogue",
        }
    }
}

/// Per-level additive attribute growth. Fractional rates round to the
/// nearest whole point at each level.
#[derive(Debug, Clone, Copy)]
pub struct GrowthRates {
    pub strength: f64,
    pub intelligence: f64,
    pub dexterity: f64,
    pub constitution: f64,
    pub luck: f64,
}

impl GrowthRates {
    /// One level's worth of growth applied to a stat block.
    pub fn apply(&self, stats: StatBlock) -> StatBlock {
        fn grow(stat: u32, rate: f64) -> u32 {
            (stat as f64 + rate).round() as u32
        }
        StatBlock {
            strength: grow(stats.strength, self.strength),
            intelligence: grow(stats.intelligence, self.intelligence),
            dexterity: grow(stats.dexterity, self.dexterity),
            constitution: grow(stats.constitution, self.constitution),
            luck: grow(stats.luck, self.luck),
        }
    }
}

/// An active ability unlocked at a character level.
#[derive(Debug, Clone)]
pub struct Ability {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unlock_level: u32,
    /// Seconds. `None` for passive or untimed effects.
    pub cooldown: Option<u32>,
    pub effect: &'static str,
}

/// A stat bonus granted by a skill tree node.
#[derive(Debug, Clone)]
pub struct SkillBonus {
    pub stat: &'static str,
    pub value: f64,
    pub is_percentage: bool,
}

/// A node in a class skill tree.
#[derive(Debug, Clone)]
pub struct SkillTreeNode {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub level_required: u32,
    pub point_cost: u32,
    pub bonuses: Vec<SkillBonus>,
    /// Skill ids that must already be unlocked. Within-tree only.
    pub prerequisite_skill_ids: Vec<&'static str>,
    pub max_rank: u32,
}

/// Full definition of a character class.
#[derive(Debug, Clone)]
pub struct ClassDefinition {
    pub class: CharacterClass,
    pub description: &'static str,
    pub base_stats: StatBlock,
    pub growth_rates: GrowthRates,
    pub abilities: Vec<Ability>,
    pub skill_tree: Vec<SkillTreeNode>,
}
