//! Task and quest catalogs.
//!
//! Periodic quest windows are derived from the injected `now` so the
//! same catalog call is reproducible in tests.

use chrono::{DateTime, Utc};

use super::types::{
    Difficulty, Quest, QuestKind, QuestPeriod, QuestStep, Task, TaskKind, TaskReward,
};

/// Account-setup tasks.
pub fn onboarding_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "create-profile",
            title: "Create a Player Profile",
            description: "Set up your player profile to start your journey",
            reward: TaskReward::xp(100),
            kind: TaskKind::Onboarding,
            prerequisite_task_ids: vec![],
        },
        Task {
            id: "create-clan",
            title: "Create a Clan",
            description: "Form a clan to unite warriors under your banner",
            reward: TaskReward::xp(200),
            kind: TaskKind::Onboarding,
            prerequisite_task_ids: vec!["create-profile"],
        },
        Task {
            id: "create-character",
            title: "Create your first Character",
            description: "Transform one of your NFTs into a playable character",
            reward: TaskReward::xp(150),
            kind: TaskKind::Onboarding,
            prerequisite_task_ids: vec!["create-profile"],
        },
        Task {
            id: "play-first-game",
            title: "Play your first Game",
            description: "Enter one of the games with your character",
            reward: TaskReward::xp(250),
            kind: TaskKind::Onboarding,
            prerequisite_task_ids: vec!["create-character"],
        },
    ]
}

/// Milestone tasks that track long-term growth.
pub fn progression_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "reach-level-5",
            title: "Reach Player Level 5",
            description: "Level up your player profile to unlock more features",
            reward: TaskReward {
                xp: 300,
                currency: None,
                items: vec!["Basic Loot Box"],
            },
            kind: TaskKind::Progression,
            prerequisite_task_ids: vec!["create-profile"],
        },
        Task {
            id: "reach-clan-level-3",
            title: "Reach Clan Level 3",
            description: "Grow your clan to unlock clan perks",
            reward: TaskReward {
                xp: 350,
                currency: None,
                items: vec!["Clan Banner Customization"],
            },
            kind: TaskKind::Progression,
            prerequisite_task_ids: vec!["create-clan"],
        },
        Task {
            id: "character-level-10",
            title: "Level up a Character to 10",
            description: "Advance a character to unlock specialized skills",
            reward: TaskReward {
                xp: 400,
                currency: None,
                items: vec!["Character Cosmetic"],
            },
            kind: TaskKind::Progression,
            prerequisite_task_ids: vec!["create-character"],
        },
        Task {
            id: "create-second-clan",
            title: "Create a Second Clan",
            description: "Expand your influence by creating an additional clan",
            reward: TaskReward {
                xp: 500,
                currency: None,
                items: vec!["Clan Emblem"],
            },
            kind: TaskKind::Progression,
            prerequisite_task_ids: vec!["reach-level-5"],
        },
    ]
}

/// Social tasks.
pub fn community_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "invite-friend",
            title: "Invite a Friend",
            description: "Invite a friend to join the game",
            reward: TaskReward {
                xp: 150,
                currency: Some(100),
                items: vec![],
            },
            kind: TaskKind::Community,
            prerequisite_task_ids: vec!["create-profile"],
        },
        Task {
            id: "join-discord",
            title: "Join our Discord",
            description: "Connect with the community on Discord",
            reward: TaskReward {
                xp: 100,
                currency: None,
                items: vec!["Discord Badge"],
            },
            kind: TaskKind::Community,
            prerequisite_task_ids: vec!["create-profile"],
        },
    ]
}

/// Every task, across all categories.
pub fn all_tasks() -> Vec<Task> {
    let mut tasks = onboarding_tasks();
    tasks.extend(progression_tasks());
    tasks.extend(community_tasks());
    tasks
}

/// Quests that reset with the UTC calendar day containing `now`.
pub fn daily_quests(now: DateTime<Utc>) -> Vec<Quest> {
    let period = Some(QuestPeriod::daily(now));
    vec![
        Quest {
            id: "daily-login",
            title: "Daily Login",
            description: "Log in to the game today",
            game_id: None,
            reward: TaskReward {
                xp: 50,
                currency: Some(25),
                items: vec![],
            },
            kind: QuestKind::Daily,
            difficulty: Difficulty::Easy,
            period,
            steps: vec![],
            prerequisite_quest_ids: vec![],
        },
        Quest {
            id: "daily-hordes",
            title: "Daily Dice Roll",
            description: "Play a round of Hordes today",
            game_id: Some("hordes"),
            reward: TaskReward {
                xp: 75,
                currency: Some(40),
                items: vec![],
            },
            kind: QuestKind::Daily,
            difficulty: Difficulty::Easy,
            period,
            steps: vec![],
            prerequisite_quest_ids: vec![],
        },
        Quest {
            id: "daily-spinner",
            title: "Try Your Luck",
            description: "Spin the Lucky Spinner at least once",
            game_id: Some("lucky-spinner"),
            reward: TaskReward {
                xp: 60,
                currency: Some(30),
                items: vec![],
            },
            kind: QuestKind::Daily,
            difficulty: Difficulty::Easy,
            period,
            steps: vec![],
            prerequisite_quest_ids: vec![],
        },
        Quest {
            id: "daily-fling-off",
            title: "Battle Ready",
            description: "Play a match of Fling-Off",
            game_id: Some("fling-off"),
            reward: TaskReward {
                xp: 100,
                currency: Some(50),
                items: vec![],
            },
            kind: QuestKind::Daily,
            difficulty: Difficulty::Medium,
            period,
            steps: vec![],
            prerequisite_quest_ids: vec![],
        },
    ]
}

/// Quests that reset with the Monday-start UTC week containing `now`.
pub fn weekly_quests(now: DateTime<Utc>) -> Vec<Quest> {
    let period = Some(QuestPeriod::weekly(now));
    vec![
        Quest {
            id: "weekly-win-5",
            title: "Weekly Champion",
            description: "Win 5 games in any mode this week",
            game_id: None,
            reward: TaskReward {
                xp: 300,
                currency: Some(150),
                items: vec!["Rare Loot Box"],
            },
            kind: QuestKind::Weekly,
            difficulty: Difficulty::Medium,
            period,
            steps: vec![],
            prerequisite_quest_ids: vec![],
        },
        Quest {
            id: "weekly-fling-off-tournament",
            title: "Tournament Contender",
            description: "Participate in this week's Fling-Off tournament",
            game_id: Some("fling-off"),
            reward: TaskReward {
                xp: 500,
                currency: Some(250),
                items: vec!["Tournament Badge"],
            },
            kind: QuestKind::Weekly,
            difficulty: Difficulty::Hard,
            period,
            steps: vec![],
            prerequisite_quest_ids: vec![],
        },
        Quest {
            id: "weekly-clan-contribution",
            title: "Clan Contributor",
            description: "Contribute 500 points to your clan this week",
            game_id: None,
            reward: TaskReward {
                xp: 400,
                currency: Some(200),
                items: vec!["Clan XP Boost"],
            },
            kind: QuestKind::Weekly,
            difficulty: Difficulty::Medium,
            period,
            steps: vec![],
            prerequisite_quest_ids: vec![],
        },
    ]
}

/// Quests that reset with the UTC calendar month containing `now`.
pub fn monthly_quests(now: DateTime<Utc>) -> Vec<Quest> {
    let period = Some(QuestPeriod::monthly(now));
    vec![
        Quest {
            id: "monthly-character-advancement",
            title: "Character Growth",
            description: "Level up a character at least 5 times this month",
            game_id: None,
            reward: TaskReward {
                xp: 1000,
                currency: Some(500),
                items: vec!["Epic Loot Box", "Character XP Boost"],
            },
            kind: QuestKind::Monthly,
            difficulty: Difficulty::Hard,
            period,
            steps: vec![],
            prerequisite_quest_ids: vec![],
        },
        Quest {
            id: "monthly-clan-war",
            title: "Clan War Veteran",
            description: "Participate in 10 clan war battles this month",
            game_id: None,
            reward: TaskReward {
                xp: 1500,
                currency: Some(750),
                items: vec!["Clan Banner", "Clan War Badge"],
            },
            kind: QuestKind::Monthly,
            difficulty: Difficulty::Epic,
            period,
            steps: vec![],
            prerequisite_quest_ids: vec![],
        },
    ]
}

/// The story campaign. No time windows; ordered by prerequisite chain.
pub fn story_quests() -> Vec<Quest> {
    vec![
        Quest {
            id: "story-introduction",
            title: "The Flinger's Awakening",
            description: "Begin your journey in the world of Flingers",
            game_id: None,
            reward: TaskReward {
                xp: 300,
                currency: Some(150),
                items: vec!["Novice Flinger's Handbook"],
            },
            kind: QuestKind::Story,
            difficulty: Difficulty::Easy,
            period: None,
            steps: vec![
                QuestStep {
                    id: "step1",
                    description: "Create your first character",
                },
                QuestStep {
                    id: "step2",
                    description: "Complete the tutorial in any game",
                },
                QuestStep {
                    id: "step3",
                    description: "Talk to the Elder in the main hub",
                },
            ],
            prerequisite_quest_ids: vec![],
        },
        Quest {
            id: "story-chapter1",
            title: "Chapter 1: The Lost Artifact",
            description: "Recover a powerful artifact that was stolen from the Elders",
            game_id: None,
            reward: TaskReward {
                xp: 600,
                currency: Some(300),
                items: vec!["Artifact Fragment", "Lore Book: Chapter 1"],
            },
            kind: QuestKind::Story,
            difficulty: Difficulty::Medium,
            period: None,
            steps: vec![
                QuestStep {
                    id: "step1",
                    description: "Investigate the ruins in Fling-Off game",
                },
                QuestStep {
                    id: "step2",
                    description: "Defeat the guardian in Hordes game (reach wave 10)",
                },
                QuestStep {
                    id: "step3",
                    description: "Decipher the ancient code using the Lucky Spinner",
                },
                QuestStep {
                    id: "step4",
                    description: "Return the artifact to the Elder",
                },
            ],
            prerequisite_quest_ids: vec!["story-introduction"],
        },
    ]
}

/// Optional per-game challenges with no time window.
pub fn side_quests() -> Vec<Quest> {
    vec![
        Quest {
            id: "side-hordes-master",
            title: "Dice Master",
            description: "Prove your skill at the Hordes minigame",
            game_id: Some("hordes"),
            reward: TaskReward {
                xp: 250,
                currency: Some(125),
                items: vec!["Lucky Dice Charm"],
            },
            kind: QuestKind::Side,
            difficulty: Difficulty::Medium,
            period: None,
            steps: vec![
                QuestStep {
                    id: "step1",
                    description: "Reach wave 15 in Hordes",
                },
                QuestStep {
                    id: "step2",
                    description: "Defeat the boss monster at wave 20",
                },
                QuestStep {
                    id: "step3",
                    description: "Earn a high score of at least 10,000 points",
                },
            ],
            prerequisite_quest_ids: vec![],
        },
        Quest {
            id: "side-spinner-jackpot",
            title: "Jackpot Hunter",
            description: "Seek your fortune with the Lucky Spinner",
            game_id: Some("lucky-spinner"),
            reward: TaskReward {
                xp: 200,
                currency: Some(100),
                items: vec!["Fortune Booster"],
            },
            kind: QuestKind::Side,
            difficulty: Difficulty::Easy,
            period: None,
            steps: vec![
                QuestStep {
                    id: "step1",
                    description: "Spin the Lucky Spinner 5 times",
                },
                QuestStep {
                    id: "step2",
                    description: "Hit the jackpot at least once",
                },
            ],
            prerequisite_quest_ids: vec![],
        },
        Quest {
            id: "side-fling-off-virtuoso",
            title: "Battle Virtuoso",
            description: "Master the art of combat in Fling-Off",
            game_id: Some("fling-off"),
            reward: TaskReward {
                xp: 400,
                currency: Some(200),
                items: vec!["Combat Specialist Badge", "Rare Weapon Skin"],
            },
            kind: QuestKind::Side,
            difficulty: Difficulty::Hard,
            period: None,
            steps: vec![
                QuestStep {
                    id: "step1",
                    description: "Win 3 consecutive matches",
                },
                QuestStep {
                    id: "step2",
                    description: "Defeat 50 opponents",
                },
                QuestStep {
                    id: "step3",
                    description: "Finish in the top 3 positions 5 times",
                },
            ],
            prerequisite_quest_ids: vec![],
        },
    ]
}

/// Every quest, with periodic windows anchored to `now`.
pub fn all_quests(now: DateTime<Utc>) -> Vec<Quest> {
    let mut quests = daily_quests(now);
    quests.extend(weekly_quests(now));
    quests.extend(monthly_quests(now));
    quests.extend(story_quests());
    quests.extend(side_quests());
    quests
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_task_ids_unique() {
        let tasks = all_tasks();
        let ids: HashSet<_> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), tasks.len());
    }

    #[test]
    fn test_quest_ids_unique() {
        let quests = all_quests(Utc::now());
        let ids: HashSet<_> = quests.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), quests.len());
    }

    #[test]
    fn test_task_prerequisites_resolve() {
        let tasks = all_tasks();
        let ids: HashSet<_> = tasks.iter().map(|t| t.id).collect();
        for task in &tasks {
            for prereq in &task.prerequisite_task_ids {
                assert!(ids.contains(prereq), "{} -> {}", task.id, prereq);
            }
        }
    }

    #[test]
    fn test_periodic_quests_carry_windows() {
        let now = Utc::now();
        for quest in all_quests(now) {
            match quest.kind {
                QuestKind::Daily | QuestKind::Weekly | QuestKind::Monthly => {
                    let period = quest.period.expect("periodic quest without window");
                    assert!(period.contains(now), "{}", quest.id);
                }
                QuestKind::Story | QuestKind::Side => assert!(quest.period.is_none()),
            }
        }
    }
}
