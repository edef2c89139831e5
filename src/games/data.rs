//! Game roster, reward tables, and progression requirements.
//!
//! Not every rostered game has a reward entry; games still in
//! development (Shit Head, NFT Poker, RPG) produce zeroed rewards until
//! their tables ship.

use super::types::{
    Game, GameCategory, GameMode, GameReward, GameStatus, ModeMultiplier, ModeRequirement,
    ProgressionRequirement,
};

/// The full game roster.
pub fn all_games() -> Vec<Game> {
    vec![
        Game {
            id: "hordes",
            title: "Minigame: Hordes",
            description:
                "Roll the dice and multiply your points. Risk it all for the highest rewards!",
            status: GameStatus::Beta,
            category: GameCategory::Minigame,
            points: 500,
            coming_soon: false,
        },
        Game {
            id: "lucky-spinner",
            title: "Minigame: Lucky Spinner",
            description:
                "Spin the wheel for a chance to win big rewards! Different segments offer different point multipliers.",
            status: GameStatus::Alpha,
            category: GameCategory::Minigame,
            points: 750,
            coming_soon: false,
        },
        Game {
            id: "shithead",
            title: "Shit Head",
            description:
                "Play the classic card game against other players. Be the first to empty your hand to win points!",
            status: GameStatus::Development,
            category: GameCategory::Staking,
            points: 750,
            coming_soon: false,
        },
        Game {
            id: "nft-poker",
            title: "Staking Game: NFT Poker",
            description: "Use your NFTs as poker chips in this high-stakes card game!",
            status: GameStatus::Development,
            category: GameCategory::Staking,
            points: 1200,
            coming_soon: false,
        },
        Game {
            id: "fling-off",
            title: "Multiplayer: Fling-Off",
            description:
                "Compete against other players in this fast-paced action game. Last player standing wins!",
            status: GameStatus::Alpha,
            category: GameCategory::Online,
            points: 1350,
            coming_soon: false,
        },
        Game {
            id: "rpg",
            title: "Flingers: RPG",
            description:
                "Embark on a full RPG adventure. Complete quests, battle monsters, and level up your Flinger.",
            status: GameStatus::Development,
            category: GameCategory::Release,
            points: 2000,
            coming_soon: true,
        },
    ]
}

/// Multipliers for a game mode. Total over the closed mode set.
pub fn mode_multiplier(mode: GameMode) -> ModeMultiplier {
    match mode {
        GameMode::Casual => ModeMultiplier {
            mode,
            xp: 1.0,
            currency: 1.0,
            item_drop: 1.0,
        },
        GameMode::Ranked => ModeMultiplier {
            mode,
            xp: 1.25,
            currency: 1.5,
            item_drop: 1.25,
        },
        GameMode::Tournament => ModeMultiplier {
            mode,
            xp: 2.0,
            currency: 3.0,
            item_drop: 2.0,
        },
        GameMode::ClanWar => ModeMultiplier {
            mode,
            xp: 1.75,
            currency: 2.0,
            item_drop: 1.5,
        },
    }
}

/// Reward table entry for `game_id`, if the game has shipped one.
pub fn game_reward(game_id: &str) -> Option<GameReward> {
    let rewards = [
        GameReward {
            game_id: "hordes",
            base_xp: 50,
            base_currency: 25,
            base_drop_chance: 10.0,
            win_bonus_multiplier: 1.5,
            streak_bonus_per_win: 0.1,
            max_streak_bonus: 1.0,
        },
        GameReward {
            game_id: "lucky-spinner",
            base_xp: 30,
            base_currency: 40,
            base_drop_chance: 15.0,
            win_bonus_multiplier: 1.3,
            streak_bonus_per_win: 0.05,
            max_streak_bonus: 0.5,
        },
        GameReward {
            game_id: "fling-off",
            base_xp: 100,
            base_currency: 50,
            base_drop_chance: 20.0,
            win_bonus_multiplier: 2.0,
            streak_bonus_per_win: 0.15,
            max_streak_bonus: 1.5,
        },
    ];
    rewards.into_iter().find(|r| r.game_id == game_id)
}

/// Progression requirements for `game_id`, if any are defined. Games
/// with no entry are unrestricted and playable in casual mode only.
pub fn progression_requirement(game_id: &str) -> Option<ProgressionRequirement> {
    let reqs = |player, character| ModeRequirement {
        player_level: Some(player),
        character_level: Some(character),
        clan_level: None,
    };

    let all = vec![
        ProgressionRequirement {
            game_id: "hordes",
            entry: reqs(1, 1),
            previous_game_completion: vec![],
            modes: vec![
                (GameMode::Casual, reqs(1, 1)),
                (GameMode::Ranked, reqs(5, 5)),
                (GameMode::Tournament, reqs(10, 8)),
            ],
        },
        ProgressionRequirement {
            game_id: "lucky-spinner",
            entry: reqs(1, 1),
            previous_game_completion: vec![],
            modes: vec![
                (GameMode::Casual, reqs(1, 1)),
                (GameMode::Ranked, reqs(5, 5)),
            ],
        },
        ProgressionRequirement {
            game_id: "fling-off",
            entry: reqs(3, 3),
            previous_game_completion: vec![],
            modes: vec![
                (GameMode::Casual, reqs(3, 3)),
                (GameMode::Ranked, reqs(8, 8)),
                (GameMode::Tournament, reqs(15, 12)),
                (
                    GameMode::ClanWar,
                    ModeRequirement {
                        player_level: Some(15),
                        character_level: Some(10),
                        clan_level: Some(5),
                    },
                ),
            ],
        },
        ProgressionRequirement {
            game_id: "nft-poker",
            entry: reqs(5, 5),
            previous_game_completion: vec![],
            modes: vec![
                (GameMode::Casual, reqs(5, 5)),
                (GameMode::Ranked, reqs(10, 8)),
                (GameMode::Tournament, reqs(15, 10)),
            ],
        },
        ProgressionRequirement {
            game_id: "rpg",
            entry: reqs(10, 10),
            previous_game_completion: vec!["hordes", "fling-off"],
            modes: vec![
                (GameMode::Casual, reqs(10, 10)),
                (
                    GameMode::ClanWar,
                    ModeRequirement {
                        player_level: Some(20),
                        character_level: Some(15),
                        clan_level: Some(8),
                    },
                ),
            ],
        },
    ];
    all.into_iter().find(|r| r.game_id == game_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_game_ids_unique() {
        let games = all_games();
        let ids: HashSet<_> = games.iter().map(|g| g.id).collect();
        assert_eq!(ids.len(), games.len());
    }

    #[test]
    fn test_reward_tables_reference_rostered_games() {
        let ids: HashSet<_> = all_games().iter().map(|g| g.id).collect();
        for game in &["hordes", "lucky-spinner", "fling-off"] {
            assert!(game_reward(game).is_some());
            assert!(ids.contains(game));
        }
        assert!(game_reward("shithead").is_none());
    }

    #[test]
    fn test_casual_mode_is_identity() {
        let m = mode_multiplier(GameMode::Casual);
        assert_eq!(m.xp, 1.0);
        assert_eq!(m.currency, 1.0);
        assert_eq!(m.item_drop, 1.0);
    }
}
