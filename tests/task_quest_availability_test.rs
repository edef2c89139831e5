//! Integration test: task and quest availability
//!
//! Drives availability through PlayerState completions: prerequisite
//! chains open up as tasks complete, periodic quests respect their
//! windows at the millisecond boundaries, and rewards land exactly once.

use chrono::{DateTime, Duration, Utc};
use flingers_hub::progression::player_levels;
use flingers_hub::tasks::{
    all_quests, all_tasks, available_quests, available_tasks, is_quest_available,
    is_task_available,
};
use flingers_hub::PlayerState;

fn at(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

#[test]
fn test_onboarding_chain_opens_step_by_step() {
    let table = player_levels();
    let tasks = all_tasks();
    let mut player = PlayerState::new();

    let ids = |player: &PlayerState| -> Vec<&str> {
        available_tasks(&tasks, &player.completed_task_ids)
            .iter()
            .map(|t| t.id)
            .collect()
    };

    let open = ids(&player);
    assert!(open.contains(&"create-profile"));
    assert!(!open.contains(&"create-clan"));
    assert!(!open.contains(&"play-first-game"));

    let create_profile = tasks.iter().find(|t| t.id == "create-profile").unwrap();
    player.complete_task(create_profile, &table);

    let open = ids(&player);
    assert!(!open.contains(&"create-profile")); // done, no longer listed
    assert!(open.contains(&"create-clan"));
    assert!(open.contains(&"create-character"));
    assert!(!open.contains(&"play-first-game")); // still needs create-character
}

#[test]
fn test_prerequisites_round_trip() {
    // A task with prerequisites [A, B] is available iff both are in the
    // completed set, and removing either closes it again.
    let tasks = all_tasks();
    let second_clan = tasks.iter().find(|t| t.id == "create-second-clan").unwrap();

    let mut completed: std::collections::HashSet<String> =
        ["create-profile", "reach-level-5"].iter().map(|s| s.to_string()).collect();
    assert!(is_task_available(second_clan, &completed));

    completed.remove("reach-level-5");
    assert!(!is_task_available(second_clan, &completed));
}

#[test]
fn test_quest_window_boundaries_to_the_millisecond() {
    let now = at("2026-08-25T10:00:00Z");
    let quests = all_quests(now);
    let login = quests.iter().find(|q| q.id == "daily-login").unwrap();
    let period = login.period.unwrap();
    let none = std::collections::HashSet::new();

    assert_eq!(period.start, at("2026-08-25T00:00:00Z"));
    assert_eq!(period.end, at("2026-08-25T23:59:59.999Z"));

    assert!(is_quest_available(login, &none, period.start));
    assert!(is_quest_available(login, &none, period.end));
    assert!(!is_quest_available(login, &none, period.start - Duration::milliseconds(1)));
    assert!(!is_quest_available(login, &none, period.end + Duration::milliseconds(1)));
}

#[test]
fn test_story_quests_ignore_time_but_not_prerequisites() {
    let now = at("2026-08-25T10:00:00Z");
    let quests = all_quests(now);
    let none = std::collections::HashSet::new();

    let open = available_quests(&quests, &none, now + Duration::days(400));
    let ids: Vec<&str> = open.iter().map(|q| q.id).collect();
    // Far outside every periodic window only untimed quests remain.
    assert!(ids.contains(&"story-introduction"));
    assert!(ids.contains(&"side-hordes-master"));
    assert!(!ids.contains(&"daily-login"));
    assert!(!ids.contains(&"story-chapter1"));
}

#[test]
fn test_completing_quest_grants_reward_once() {
    let table = player_levels();
    let now = Utc::now();
    let quests = all_quests(now);
    let intro = quests.iter().find(|q| q.id == "story-introduction").unwrap();
    let mut player = PlayerState::new();
    let starting_currency = player.currency;

    let crossed = player.complete_quest(intro, &table).unwrap();
    assert_eq!(player.xp, 300);
    assert_eq!(player.level, 2);
    assert_eq!(player.currency, starting_currency + 150);
    assert!(!crossed.is_empty());

    // Replaying the same quest is a no-op.
    assert!(player.complete_quest(intro, &table).is_none());
    assert_eq!(player.xp, 300);
    assert_eq!(player.currency, starting_currency + 150);
}

#[test]
fn test_completed_quest_unblocks_dependents() {
    let now = Utc::now();
    let quests = all_quests(now);
    let chapter1 = quests.iter().find(|q| q.id == "story-chapter1").unwrap();
    let mut player = PlayerState::new();

    assert!(!is_quest_available(chapter1, &player.completed_quest_ids, now));
    player
        .completed_quest_ids
        .insert("story-introduction".to_string());
    assert!(is_quest_available(chapter1, &player.completed_quest_ids, now));
}
