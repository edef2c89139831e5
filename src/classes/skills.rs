//! Skill tree unlock rules.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::types::SkillTreeNode;

/// Per-character skill tree state: which nodes are unlocked and how many
/// points remain unspent. Earned points come from the character level
/// table; this struct only tracks spending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillState {
    pub unlocked_skill_ids: HashSet<String>,
    pub unspent_points: u32,
}

/// Why a skill node cannot be unlocked right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillUnlockError {
    AlreadyUnlocked,
    LevelTooLow,
    NotEnoughPoints,
    MissingPrerequisite,
}

impl std::fmt::Display for SkillUnlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            SkillUnlockError::AlreadyUnlocked => "skill is already unlocked",
            SkillUnlockError::LevelTooLow => "character level too low",
            SkillUnlockError::NotEnoughPoints => "not enough unspent skill points",
            SkillUnlockError::MissingPrerequisite => "prerequisite skill not unlocked",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for SkillUnlockError {}

/// Checks whether `node` can be unlocked at the given character level.
pub fn can_unlock_skill(
    node: &SkillTreeNode,
    state: &SkillState,
    character_level: u32,
) -> Result<(), SkillUnlockError> {
    if state.unlocked_skill_ids.contains(node.id) {
        return Err(SkillUnlockError::AlreadyUnlocked);
    }
    if character_level < node.level_required {
        return Err(SkillUnlockError::LevelTooLow);
    }
    if state.unspent_points < node.point_cost {
        return Err(SkillUnlockError::NotEnoughPoints);
    }
    for prereq in &node.prerequisite_skill_ids {
        if !state.unlocked_skill_ids.contains(*prereq) {
            return Err(SkillUnlockError::MissingPrerequisite);
        }
    }
    Ok(())
}

/// Unlocks `node`, spending its point cost. Fails without mutating state
/// if any unlock rule is not met.
pub fn unlock_skill(
    node: &SkillTreeNode,
    state: &mut SkillState,
    character_level: u32,
) -> Result<(), SkillUnlockError> {
    can_unlock_skill(node, state, character_level)?;
    state.unspent_points -= node.point_cost;
    state.unlocked_skill_ids.insert(node.id.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::data::class_definition;
    use crate::classes::types::CharacterClass;

    fn node<'a>(tree: &'a [SkillTreeNode], id: &str) -> &'a SkillTreeNode {
        tree.iter().find(|n| n.id == id).unwrap()
    }

    #[test]
    fn test_unlock_root_skill() {
        let def = class_definition(CharacterClass::Warrior);
        let mastery = node(&def.skill_tree, "war-weapon-mastery");
        let mut state = SkillState {
            unspent_points: 1,
            ..Default::default()
        };

        assert!(unlock_skill(mastery, &mut state, 3).is_ok());
        assert_eq!(state.unspent_points, 0);
        assert!(state.unlocked_skill_ids.contains("war-weapon-mastery"));
    }

    #[test]
    fn test_level_gate() {
        let def = class_definition(CharacterClass::Warrior);
        let mastery = node(&def.skill_tree, "war-weapon-mastery");
        let mut state = SkillState {
            unspent_points: 5,
            ..Default::default()
        };

        assert_eq!(
            unlock_skill(mastery, &mut state, 2),
            Err(SkillUnlockError::LevelTooLow)
        );
        assert_eq!(state.unspent_points, 5);
    }

    #[test]
    fn test_point_gate() {
        let def = class_definition(CharacterClass::Mage);
        let arcane = node(&def.skill_tree, "mage-arcane-power");
        let mut state = SkillState::default();

        assert_eq!(
            unlock_skill(arcane, &mut state, 10),
            Err(SkillUnlockError::NotEnoughPoints)
        );
    }

    #[test]
    fn test_prerequisite_gate() {
        let def = class_definition(CharacterClass::Warrior);
        let crit = node(&def.skill_tree, "war-critical-strike");
        let mut state = SkillState {
            unspent_points: 10,
            ..Default::default()
        };

        // Prerequisite war-weapon-mastery not unlocked yet.
        assert_eq!(
            unlock_skill(crit, &mut state, 10),
            Err(SkillUnlockError::MissingPrerequisite)
        );

        let mastery = node(&def.skill_tree, "war-weapon-mastery");
        unlock_skill(mastery, &mut state, 10).unwrap();
        assert!(unlock_skill(crit, &mut state, 10).is_ok());
        assert_eq!(state.unspent_points, 10 - 1 - 2);
    }

    #[test]
    fn test_double_unlock_rejected() {
        let def = class_definition(CharacterClass::Rogue);
        let lethality = node(&def.skill_tree, "rogue-lethality");
        let mut state = SkillState {
            unspent_points: 2,
            ..Default::default()
        };

        unlock_skill(lethality, &mut state, 3).unwrap();
        assert_eq!(
            unlock_skill(lethality, &mut state, 3),
            Err(SkillUnlockError::AlreadyUnlocked)
        );
        assert_eq!(state.unspent_points, 1);
    }
}
