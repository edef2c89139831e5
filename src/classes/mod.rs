//! Character classes, abilities, and skill trees.
//!
//! Classes are a closed enum rather than string keys, so an unrecognized
//! class is unrepresentable and table lookups cannot silently miss.

mod data;
mod skills;
mod types;

pub use data::{all_classes, class_definition};
pub use skills::{can_unlock_skill, unlock_skill, SkillState, SkillUnlockError};
pub use types::{
    Ability, CharacterClass, ClassDefinition, GrowthRates, SkillBonus, SkillTreeNode,
};
