//! Static class definitions.

use super::types::{
    Ability, CharacterClass, ClassDefinition, GrowthRates, SkillBonus, SkillTreeNode,
};
use crate::progression::StatBlock;

/// Returns the definition for a class.
pub fn class_definition(class: CharacterClass) -> ClassDefinition {
    match class {
        CharacterClass::Warrior => warrior(),
        CharacterClass::Mage => mage(),
        CharacterClass::Archer => archer(),
        CharacterClass::Rogue => rogue(),
    }
}

/// Returns all class definitions in display order.
pub fn all_classes() -> Vec<ClassDefinition> {
    CharacterClass::ALL.iter().map(|c| class_definition(*c)).collect()
}

fn bonus(stat: &'static str, value: f64) -> Vec<SkillBonus> {
    vec![SkillBonus {
        stat,
        value,
        is_percentage: true,
    }]
}

fn warrior() -> ClassDefinition {
    ClassDefinition {
        class: CharacterClass::Warrior,
        description:
            "Masters of close combat who rely on strength and durability to overcome their foes.",
        base_stats: StatBlock {
            strength: 15,
            intelligence: 8,
            dexterity: 10,
            constitution: 14,
            luck: 8,
        },
        growth_rates: GrowthRates {
            strength: 1.5,
            intelligence: 0.7,
            dexterity: 1.0,
            constitution: 1.3,
            luck: 0.8,
        },
        abilities: vec![
            Ability {
                id: "war-charge",
                name: "Battle Charge",
                description: "Rush toward enemies, dealing damage and stunning them briefly.",
                unlock_level: 1,
                cooldown: Some(30),
                effect: "Damage and stun enemies in a straight line",
            },
            Ability {
                id: "war-shout",
                name: "Battle Shout",
                description: "Boost the morale and strength of all nearby allies.",
                unlock_level: 3,
                cooldown: Some(60),
                effect: "+15% Strength for nearby allies for 30 seconds",
            },
            Ability {
                id: "war-cleave",
                name: "Cleaving Strike",
                description: "A powerful swing that hits multiple enemies.",
                unlock_level: 5,
                cooldown: Some(25),
                effect: "Deal damage to all enemies in a wide arc",
            },
            Ability {
                id: "war-berserk",
                name: "Berserker Rage",
                description: "Enter a frenzied state, increasing damage but reducing defense.",
                unlock_level: 10,
                cooldown: Some(120),
                effect: "+30% Damage, -15% Defense for 20 seconds",
            },
        ],
        skill_tree: vec![
            SkillTreeNode {
                id: "war-weapon-mastery",
                name: "Weapon Mastery",
                description: "Increases damage with all weapons.",
                level_required: 3,
                point_cost: 1,
                bonuses: bonus("damage", 5.0),
                prerequisite_skill_ids: vec![],
                max_rank: 5,
            },
            SkillTreeNode {
                id: "war-toughness",
                name: "Toughness",
                description: "Increases maximum health.",
                level_required: 3,
                point_cost: 1,
                bonuses: bonus("health", 10.0),
                prerequisite_skill_ids: vec![],
                max_rank: 5,
            },
            SkillTreeNode {
                id: "war-critical-strike",
                name: "Critical Strike",
                description: "Increases chance of landing critical hits.",
                level_required: 5,
                point_cost: 2,
                bonuses: bonus("critChance", 3.0),
                prerequisite_skill_ids: vec!["war-weapon-mastery"],
                max_rank: 3,
            },
            SkillTreeNode {
                id: "war-defender",
                name: "Defender",
                description: "Reduces damage taken from all sources.",
                level_required: 5,
                point_cost: 2,
                bonuses: bonus("damageReduction", 5.0),
                prerequisite_skill_ids: vec!["war-toughness"],
                max_rank: 3,
            },
            SkillTreeNode {
                id: "war-berserker",
                name: "Berserker",
                description: "Gain increased damage the lower your health gets.",
                level_required: 10,
                point_cost: 3,
                bonuses: bonus("lowHealthDamage", 10.0),
                prerequisite_skill_ids: vec!["war-critical-strike"],
                max_rank: 2,
            },
        ],
    }
}

fn mage() -> ClassDefinition {
    ClassDefinition {
        class: CharacterClass::Mage,
        description:
            "Masters of arcane magic who can control the elements and cast powerful spells.",
        base_stats: StatBlock {
            strength: 6,
            intelligence: 15,
            dexterity: 9,
            constitution: 8,
            luck: 12,
        },
        growth_rates: GrowthRates {
            strength: 0.6,
            intelligence: 1.7,
            dexterity: 0.9,
            constitution: 0.8,
            luck: 1.2,
        },
        abilities: vec![
            Ability {
                id: "mage-fireball",
                name: "Fireball",
                description: "Launch a ball of fire that explodes on impact.",
                unlock_level: 1,
                cooldown: Some(15),
                effect: "Fire damage + area effect",
            },
            Ability {
                id: "mage-frostbolt",
                name: "Frost Bolt",
                description: "Fire a bolt of ice that slows enemies.",
                unlock_level: 3,
                cooldown: Some(18),
                effect: "Ice damage + slow effect",
            },
            Ability {
                id: "mage-teleport",
                name: "Teleport",
                description: "Instantly teleport a short distance.",
                unlock_level: 5,
                cooldown: Some(45),
                effect: "Teleport up to 20 meters",
            },
            Ability {
                id: "mage-meteor",
                name: "Meteor Storm",
                description: "Call down a shower of meteors on your enemies.",
                unlock_level: 10,
                cooldown: Some(180),
                effect: "Massive area damage over 5 seconds",
            },
        ],
        skill_tree: vec![
            SkillTreeNode {
                id: "mage-arcane-power",
                name: "Arcane Power",
                description: "Increases spell damage.",
                level_required: 3,
                point_cost: 1,
                bonuses: bonus("spellDamage", 5.0),
                prerequisite_skill_ids: vec![],
                max_rank: 5,
            },
            SkillTreeNode {
                id: "mage-mana-pool",
                name: "Mana Pool",
                description: "Increases maximum mana.",
                level_required: 3,
                point_cost: 1,
                bonuses: bonus("mana", 10.0),
                prerequisite_skill_ids: vec![],
                max_rank: 5,
            },
            SkillTreeNode {
                id: "mage-elemental-mastery",
                name: "Elemental Mastery",
                description: "Increases damage with elemental spells.",
                level_required: 5,
                point_cost: 2,
                bonuses: bonus("elementalDamage", 8.0),
                prerequisite_skill_ids: vec!["mage-arcane-power"],
                max_rank: 3,
            },
            SkillTreeNode {
                id: "mage-mana-efficiency",
                name: "Mana Efficiency",
                description: "Reduces mana cost of all spells.",
                level_required: 5,
                point_cost: 2,
                bonuses: bonus("manaCost", -5.0),
                prerequisite_skill_ids: vec!["mage-mana-pool"],
                max_rank: 3,
            },
            SkillTreeNode {
                id: "mage-archmage",
                name: "Archmage",
                description: "Powerful spells have a chance to cost no mana.",
                level_required: 10,
                point_cost: 3,
                bonuses: bonus("freeSpellChance", 10.0),
                prerequisite_skill_ids: vec!["mage-elemental-mastery"],
                max_rank: 2,
            },
        ],
    }
}

fn archer() -> ClassDefinition {
    ClassDefinition {
        class: CharacterClass::Archer,
        description:
            "Masters of ranged combat who excel at precision attacks from a distance.",
        base_stats: StatBlock {
            strength: 9,
            intelligence: 10,
            dexterity: 15,
            constitution: 9,
            luck: 12,
        },
        growth_rates: GrowthRates {
            strength: 0.9,
            intelligence: 1.0,
            dexterity: 1.6,
            constitution: 0.9,
            luck: 1.2,
        },
        abilities: vec![
            Ability {
                id: "arch-aimed-shot",
                name: "Aimed Shot",
                description: "A carefully aimed shot that deals increased damage.",
                unlock_level: 1,
                cooldown: Some(20),
                effect: "Deal 50% more damage with a single shot",
            },
            Ability {
                id: "arch-multi-shot",
                name: "Multi-Shot",
                description: "Fire multiple arrows at once in a cone.",
                unlock_level: 3,
                cooldown: Some(30),
                effect: "Fire 3 arrows in a cone pattern",
            },
            Ability {
                id: "arch-trap",
                name: "Hunter's Trap",
                description: "Place a trap that snares enemies who step on it.",
                unlock_level: 5,
                cooldown: Some(45),
                effect: "Immobilize enemies for 4 seconds",
            },
            Ability {
                id: "arch-rain",
                name: "Arrow Rain",
                description: "Call down a rain of arrows on an area.",
                unlock_level: 10,
                cooldown: Some(150),
                effect: "Area damage over 8 seconds",
            },
        ],
        skill_tree: vec![
            SkillTreeNode {
                id: "arch-marksmanship",
                name: "Marksmanship",
                description: "Increases ranged damage.",
                level_required: 3,
                point_cost: 1,
                bonuses: bonus("rangedDamage", 5.0),
                prerequisite_skill_ids: vec![],
                max_rank: 5,
            },
            SkillTreeNode {
                id: "arch-agility",
                name: "Agility",
                description: "Increases movement speed.",
                level_required: 3,
                point_cost: 1,
                bonuses: bonus("movementSpeed", 5.0),
                prerequisite_skill_ids: vec![],
                max_rank: 5,
            },
            SkillTreeNode {
                id: "arch-deadly-aim",
                name: "Deadly Aim",
                description: "Increases critical hit chance with ranged attacks.",
                level_required: 5,
                point_cost: 2,
                bonuses: bonus("rangedCritChance", 5.0),
                prerequisite_skill_ids: vec!["arch-marksmanship"],
                max_rank: 3,
            },
            SkillTreeNode {
                id: "arch-evasion",
                name: "Evasion",
                description: "Chance to dodge incoming attacks.",
                level_required: 5,
                point_cost: 2,
                bonuses: bonus("dodgeChance", 3.0),
                prerequisite_skill_ids: vec!["arch-agility"],
                max_rank: 3,
            },
            SkillTreeNode {
                id: "arch-sniper",
                name: "Sniper",
                description: "Increases damage done the further you are from your target.",
                level_required: 10,
                point_cost: 3,
                bonuses: bonus("rangeDamageBonus", 2.0),
                prerequisite_skill_ids: vec!["arch-deadly-aim"],
                max_rank: 2,
            },
        ],
    }
}

fn rogue() -> ClassDefinition {
    ClassDefinition {
        class: CharacterClass::Rogue,
        description:
            "Masters of stealth and subterfuge who excel at quick, precise attacks.",
        base_stats: StatBlock {
            strength: 10,
            intelligence: 10,
            dexterity: 14,
            constitution: 8,
            luck: 13,
        },
        growth_rates: GrowthRates {
            strength: 1.0,
            intelligence: 1.0,
            dexterity: 1.5,
            constitution: 0.8,
            luck: 1.4,
        },
        abilities: vec![
            Ability {
                id: "rogue-backstab",
                name: "Backstab",
                description: "A devastating attack from behind that deals bonus damage.",
                unlock_level: 1,
                cooldown: Some(25),
                effect: "Deal 100% more damage from behind",
            },
            Ability {
                id: "rogue-stealth",
                name: "Stealth",
                description: "Become invisible to enemies until you attack.",
                unlock_level: 3,
                cooldown: Some(60),
                effect: "Enter stealth mode for up to 30 seconds",
            },
            Ability {
                id: "rogue-poison",
                name: "Deadly Poison",
                description: "Coat your weapons with poison that damages over time.",
                unlock_level: 5,
                cooldown: Some(45),
                effect: "Add poison damage to attacks for 20 seconds",
            },
            Ability {
                id: "rogue-vanish",
                name: "Vanish",
                description: "Instantly break combat and enter stealth, dropping all threat.",
                unlock_level: 10,
                cooldown: Some(180),
                effect: "Instant stealth and combat reset",
            },
        ],
        skill_tree: vec![
            SkillTreeNode {
                id: "rogue-lethality",
                name: "Lethality",
                description: "Increases damage from stealth and critical strikes.",
                level_required: 3,
                point_cost: 1,
                bonuses: bonus("critDamage", 5.0),
                prerequisite_skill_ids: vec![],
                max_rank: 5,
            },
            SkillTreeNode {
                id: "rogue-shadow-arts",
                name: "Shadow Arts",
                description: "Improves stealth and stealth recovery.",
                level_required: 3,
                point_cost: 1,
                bonuses: bonus("stealthDuration", 10.0),
                prerequisite_skill_ids: vec![],
                max_rank: 5,
            },
            SkillTreeNode {
                id: "rogue-deadly-brew",
                name: "Deadly Brew",
                description: "Improves poison damage and duration.",
                level_required: 5,
                point_cost: 2,
                bonuses: bonus("poisonDamage", 10.0),
                prerequisite_skill_ids: vec!["rogue-lethality"],
                max_rank: 3,
            },
            SkillTreeNode {
                id: "rogue-fleet-foot",
                name: "Fleet of Foot",
                description: "Increases movement speed and reduces fall damage.",
                level_required: 5,
                point_cost: 2,
                bonuses: bonus("movementSpeed", 7.0),
                prerequisite_skill_ids: vec!["rogue-shadow-arts"],
                max_rank: 3,
            },
            SkillTreeNode {
                id: "rogue-assassin",
                name: "Assassin",
                description: "Your first attack from stealth always critically hits.",
                level_required: 10,
                point_cost: 3,
                bonuses: bonus("stealthCritChance", 100.0),
                prerequisite_skill_ids: vec!["rogue-deadly-brew"],
                max_rank: 1,
            },
        ],
    }
}
