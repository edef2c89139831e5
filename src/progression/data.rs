//! Static level table definitions.

use super::types::{BonusKind, CharacterLevel, ClanBonus, ClanLevel, PlayerLevel, StatBlock, Unlock};

/// Returns the player level table. Milestone-only above level 10.
pub fn player_levels() -> Vec<PlayerLevel> {
    vec![
        PlayerLevel {
            level: 1,
            xp_required: 0,
            total_xp_required: 0,
            unlocks: vec![
                Unlock::ClanSlot {
                    description: "Create your first clan",
                },
                Unlock::CharacterSlot {
                    description: "Create base character",
                },
            ],
        },
        PlayerLevel {
            level: 2,
            xp_required: 100,
            total_xp_required: 100,
            unlocks: vec![Unlock::Feature {
                description: "Daily quests",
            }],
        },
        PlayerLevel {
            level: 3,
            xp_required: 250,
            total_xp_required: 350,
            unlocks: vec![Unlock::Stat {
                description: "Reward multiplier",
                value: 1.05,
            }],
        },
        PlayerLevel {
            level: 4,
            xp_required: 400,
            total_xp_required: 750,
            unlocks: vec![Unlock::Feature {
                description: "Weekly quests",
            }],
        },
        PlayerLevel {
            level: 5,
            xp_required: 750,
            total_xp_required: 1500,
            unlocks: vec![
                Unlock::CharacterSlot {
                    description: "Additional character slot",
                },
                Unlock::Feature {
                    description: "Player skill tree",
                },
            ],
        },
        PlayerLevel {
            level: 6,
            xp_required: 1100,
            total_xp_required: 2600,
            unlocks: vec![Unlock::Stat {
                description: "XP gain boost",
                value: 1.05,
            }],
        },
        PlayerLevel {
            level: 7,
            xp_required: 1600,
            total_xp_required: 4200,
            unlocks: vec![Unlock::Feature {
                description: "Monthly quests",
            }],
        },
        PlayerLevel {
            level: 8,
            xp_required: 2200,
            total_xp_required: 6400,
            unlocks: vec![Unlock::CharacterSlot {
                description: "Additional character slot",
            }],
        },
        PlayerLevel {
            level: 9,
            xp_required: 3000,
            total_xp_required: 9400,
            unlocks: vec![Unlock::Stat {
                description: "Reward multiplier increase",
                value: 1.1,
            }],
        },
        PlayerLevel {
            level: 10,
            xp_required: 4000,
            total_xp_required: 13400,
            unlocks: vec![
                Unlock::ClanSlot {
                    description: "Create second clan",
                },
                Unlock::Feature {
                    description: "Clan war participation",
                },
            ],
        },
        PlayerLevel {
            level: 15,
            xp_required: 26600,
            total_xp_required: 40000,
            unlocks: vec![
                Unlock::CharacterSlot {
                    description: "Additional character slot",
                },
                Unlock::Stat {
                    description: "Reward multiplier increase",
                    value: 1.15,
                },
            ],
        },
        PlayerLevel {
            level: 20,
            xp_required: 60000,
            total_xp_required: 100000,
            unlocks: vec![
                Unlock::ClanSlot {
                    description: "Create third clan",
                },
                Unlock::Feature {
                    description: "Special tournament access",
                },
            ],
        },
        PlayerLevel {
            level: 25,
            xp_required: 100000,
            total_xp_required: 200000,
            unlocks: vec![
                Unlock::Feature {
                    description: "Masterclass characters",
                },
                Unlock::Stat {
                    description: "Reward multiplier increase",
                    value: 1.2,
                },
            ],
        },
        PlayerLevel {
            level: 30,
            xp_required: 200000,
            total_xp_required: 400000,
            unlocks: vec![
                Unlock::ClanSlot {
                    description: "Create fourth clan",
                },
                Unlock::Feature {
                    description: "Legendary quests",
                },
            ],
        },
    ]
}

/// Returns the clan level table (levels 1-10).
pub fn clan_levels() -> Vec<ClanLevel> {
    vec![
        ClanLevel {
            level: 1,
            xp_required: 0,
            total_xp_required: 0,
            member_slots: 5,
            bonuses: vec![ClanBonus {
                name: "Base Bonus",
                description: "Basic clan formation bonus",
                kind: BonusKind::Stat,
                value: 2.0,
            }],
        },
        ClanLevel {
            level: 2,
            xp_required: 500,
            total_xp_required: 500,
            member_slots: 8,
            bonuses: vec![ClanBonus {
                name: "Enhanced Stats",
                description: "Improved stat boost for all members",
                kind: BonusKind::Stat,
                value: 5.0,
            }],
        },
        ClanLevel {
            level: 3,
            xp_required: 1200,
            total_xp_required: 1700,
            member_slots: 12,
            bonuses: vec![
                ClanBonus {
                    name: "XP Bonus",
                    description: "Clan members earn additional XP",
                    kind: BonusKind::Reward,
                    value: 5.0,
                },
                ClanBonus {
                    name: "Resource Bonus",
                    description: "Increased resource gathering",
                    kind: BonusKind::Resource,
                    value: 10.0,
                },
            ],
        },
        ClanLevel {
            level: 4,
            xp_required: 2500,
            total_xp_required: 4200,
            member_slots: 15,
            bonuses: vec![ClanBonus {
                name: "Enhanced Stats II",
                description: "Further stat improvements",
                kind: BonusKind::Stat,
                value: 8.0,
            }],
        },
        ClanLevel {
            level: 5,
            xp_required: 5000,
            total_xp_required: 9200,
            member_slots: 20,
            bonuses: vec![
                ClanBonus {
                    name: "Clan Specialization",
                    description: "Unlocks clan specialization choices",
                    kind: BonusKind::Reward,
                    value: 1.0,
                },
                ClanBonus {
                    name: "XP Bonus II",
                    description: "Enhanced XP gain for members",
                    kind: BonusKind::Reward,
                    value: 10.0,
                },
            ],
        },
        ClanLevel {
            level: 6,
            xp_required: 8000,
            total_xp_required: 17200,
            member_slots: 25,
            bonuses: vec![ClanBonus {
                name: "Enhanced Stats III",
                description: "Major stat improvements",
                kind: BonusKind::Stat,
                value: 12.0,
            }],
        },
        ClanLevel {
            level: 7,
            xp_required: 12000,
            total_xp_required: 29200,
            member_slots: 30,
            bonuses: vec![ClanBonus {
                name: "Resource Bonus II",
                description: "Greatly increased resource gathering",
                kind: BonusKind::Resource,
                value: 25.0,
            }],
        },
        ClanLevel {
            level: 8,
            xp_required: 18000,
            total_xp_required: 47200,
            member_slots: 35,
            bonuses: vec![ClanBonus {
                name: "Clan War Advantage",
                description: "Bonus during clan wars",
                kind: BonusKind::Stat,
                value: 15.0,
            }],
        },
        ClanLevel {
            level: 9,
            xp_required: 25000,
            total_xp_required: 72200,
            member_slots: 40,
            bonuses: vec![ClanBonus {
                name: "XP Bonus III",
                description: "Major XP gain for members",
                kind: BonusKind::Reward,
                value: 15.0,
            }],
        },
        ClanLevel {
            level: 10,
            xp_required: 35000,
            total_xp_required: 107200,
            member_slots: 50,
            bonuses: vec![
                ClanBonus {
                    name: "Clan Headquarters",
                    description: "Unlocks customizable clan HQ",
                    kind: BonusKind::Reward,
                    value: 1.0,
                },
                ClanBonus {
                    name: "Enhanced Stats IV",
                    description: "Maximum stat improvements",
                    kind: BonusKind::Stat,
                    value: 20.0,
                },
            ],
        },
    ]
}

fn flat_stats(value: u32, luck: u32) -> StatBlock {
    StatBlock {
        strength: value,
        intelligence: value,
        dexterity: value,
        constitution: value,
        luck,
    }
}

/// Returns the character level table (base values, modified by class).
pub fn character_levels() -> Vec<CharacterLevel> {
    vec![
        CharacterLevel {
            level: 1,
            xp_required: 0,
            total_xp_required: 0,
            stats: flat_stats(10, 10),
            skill_points: 0,
        },
        CharacterLevel {
            level: 2,
            xp_required: 100,
            total_xp_required: 100,
            stats: flat_stats(12, 11),
            skill_points: 1,
        },
        CharacterLevel {
            level: 3,
            xp_required: 250,
            total_xp_required: 350,
            stats: flat_stats(14, 12),
            skill_points: 1,
        },
        CharacterLevel {
            level: 4,
            xp_required: 400,
            total_xp_required: 750,
            stats: flat_stats(16, 13),
            skill_points: 1,
        },
        CharacterLevel {
            level: 5,
            xp_required: 700,
            total_xp_required: 1450,
            stats: flat_stats(18, 14),
            skill_points: 2,
        },
        CharacterLevel {
            level: 6,
            xp_required: 1000,
            total_xp_required: 2450,
            stats: flat_stats(20, 15),
            skill_points: 1,
        },
        CharacterLevel {
            level: 7,
            xp_required: 1500,
            total_xp_required: 3950,
            stats: flat_stats(22, 16),
            skill_points: 1,
        },
        CharacterLevel {
            level: 8,
            xp_required: 2000,
            total_xp_required: 5950,
            stats: flat_stats(24, 17),
            skill_points: 1,
        },
        CharacterLevel {
            level: 9,
            xp_required: 2700,
            total_xp_required: 8650,
            stats: flat_stats(26, 18),
            skill_points: 1,
        },
        CharacterLevel {
            level: 10,
            xp_required: 3500,
            total_xp_required: 12150,
            stats: flat_stats(30, 20),
            skill_points: 3,
        },
        CharacterLevel {
            level: 15,
            xp_required: 27850,
            total_xp_required: 40000,
            stats: flat_stats(45, 25),
            skill_points: 5,
        },
        CharacterLevel {
            level: 20,
            xp_required: 60000,
            total_xp_required: 100000,
            stats: flat_stats(60, 30),
            skill_points: 5,
        },
    ]
}
