//! Static slot definitions.

use super::types::{CharacterSlot, ClanSlot, Requirement};

/// Returns the five character slot definitions.
pub fn character_slots() -> Vec<CharacterSlot> {
    vec![
        CharacterSlot {
            id: "char-slot-1",
            name: "Primary Character",
            description: "Your first character slot.",
            unlock_requirements: vec![Requirement::PlayerLevel { level: 1 }],
            is_base_allowed: true,
            is_nft_required: false,
        },
        CharacterSlot {
            id: "char-slot-2",
            name: "Secondary Character",
            description: "Your second character slot.",
            unlock_requirements: vec![Requirement::PlayerLevel { level: 5 }],
            is_base_allowed: true,
            is_nft_required: false,
        },
        CharacterSlot {
            id: "char-slot-3",
            name: "Tertiary Character",
            description: "Your third character slot.",
            unlock_requirements: vec![Requirement::PlayerLevel { level: 8 }],
            is_base_allowed: false,
            is_nft_required: true,
        },
        CharacterSlot {
            id: "char-slot-4",
            name: "Elite Character",
            description: "Elite character slot for specialized roles.",
            unlock_requirements: vec![
                Requirement::PlayerLevel { level: 15 },
                Requirement::QuestCompletion {
                    id: "story-chapter1".to_string(),
                },
            ],
            is_base_allowed: false,
            is_nft_required: true,
        },
        CharacterSlot {
            id: "char-slot-5",
            name: "Master Character",
            description: "Master character slot for legendary warriors.",
            unlock_requirements: vec![
                Requirement::PlayerLevel { level: 25 },
                Requirement::CharacterLevel {
                    level: 15,
                    count: 1,
                },
            ],
            is_base_allowed: false,
            is_nft_required: true,
        },
    ]
}

/// Returns the four clan slot definitions.
pub fn clan_slots() -> Vec<ClanSlot> {
    vec![
        ClanSlot {
            id: "clan-slot-1",
            name: "Primary Clan",
            description: "Your first clan.",
            unlock_requirements: vec![Requirement::PlayerLevel { level: 1 }],
        },
        ClanSlot {
            id: "clan-slot-2",
            name: "Secondary Clan",
            description: "Your second clan.",
            unlock_requirements: vec![Requirement::PlayerLevel { level: 10 }],
        },
        ClanSlot {
            id: "clan-slot-3",
            name: "Tertiary Clan",
            description: "Your third clan.",
            unlock_requirements: vec![
                Requirement::PlayerLevel { level: 20 },
                Requirement::ClanLevel { level: 5, count: 1 },
            ],
        },
        ClanSlot {
            id: "clan-slot-4",
            name: "Alliance Clan",
            description: "Your fourth clan for forming grand alliances.",
            unlock_requirements: vec![
                Requirement::PlayerLevel { level: 30 },
                Requirement::ClanLevel { level: 8, count: 1 },
            ],
        },
    ]
}
