//! Integration test: XP grants and level resolution
//!
//! Exercises the shared level resolver across the player, clan, and
//! character tables: single-step and multi-level jumps, the sparse
//! milestone rows above level 10, and the aggregates that sit on top
//! (PlayerState, Character, Clan).

use flingers_hub::entities::Character;
use flingers_hub::classes::{class_definition, CharacterClass};
use flingers_hub::progression::{
    apply_xp, character_levels, clan_levels, player_levels, xp_to_next_level,
};
use flingers_hub::PlayerState;

#[test]
fn test_single_grant_crosses_multiple_levels() {
    let table = player_levels();

    // 1500 XP from scratch lands exactly on the level 5 threshold,
    // crossing 2, 3, 4, and 5 in one grant.
    let outcome = apply_xp(1, 0, 1500, &table);
    assert_eq!(outcome.new_level, 5);
    assert_eq!(outcome.new_xp, 1500);
    let crossed: Vec<u32> = outcome.crossed.iter().map(|r| r.level).collect();
    assert_eq!(crossed, vec![2, 3, 4, 5]);
}

#[test]
fn test_xp_is_lifetime_cumulative() {
    let table = player_levels();

    let first = apply_xp(1, 0, 300, &table);
    assert_eq!(first.new_level, 2);
    assert_eq!(first.new_xp, 300);

    // A later grant continues from the running total; 50 more reaches
    // the level 3 threshold at 350.
    let second = apply_xp(first.new_level, first.new_xp, 50, &table);
    assert_eq!(second.new_level, 3);
    assert_eq!(second.new_xp, 350);
}

#[test]
fn test_sparse_milestone_rows_walked() {
    let table = player_levels();

    // From level 10 the next row is 15; one huge grant can cross
    // several milestones.
    let outcome = apply_xp(10, 13400, 186600, &table);
    assert_eq!(outcome.new_level, 25);
    let crossed: Vec<u32> = outcome.crossed.iter().map(|r| r.level).collect();
    assert_eq!(crossed, vec![15, 20, 25]);
}

#[test]
fn test_top_of_table_absorbs_xp_without_leveling() {
    let table = player_levels();
    let outcome = apply_xp(30, 400_000, 1_000_000, &table);
    assert_eq!(outcome.new_level, 30);
    assert_eq!(outcome.new_xp, 1_400_000);
    assert!(outcome.crossed.is_empty());
}

#[test]
fn test_zero_grant_is_identity() {
    let table = player_levels();
    let outcome = apply_xp(4, 800, 0, &table);
    assert_eq!(outcome.new_level, 4);
    assert_eq!(outcome.new_xp, 800);
    assert!(outcome.crossed.is_empty());
}

#[test]
fn test_xp_to_next_level_tracks_thresholds() {
    let table = player_levels();
    assert_eq!(xp_to_next_level(1, 0, &table), Some(100));
    assert_eq!(xp_to_next_level(2, 150, &table), Some(200));
    // Top of the table: no next level.
    assert_eq!(xp_to_next_level(30, 400_000, &table), None);
}

#[test]
fn test_player_state_grant_reports_unlock_rows() {
    let table = player_levels();
    let mut player = PlayerState::new();

    let crossed = player.grant_xp(13400, &table);
    assert_eq!(player.level, 10);
    assert_eq!(player.xp, 13400);
    assert_eq!(crossed.last().map(|r| r.level), Some(10));
    // Level 10 grants the second clan slot among its unlocks.
    assert!(!crossed.last().unwrap().unlocks.is_empty());
}

#[test]
fn test_character_levels_accumulate_skill_points() {
    let table = character_levels();
    let def = class_definition(CharacterClass::Mage);
    let mut character = Character::new(
        "Vex",
        CharacterClass::Mage,
        def.base_stats,
        Some(42),
        chrono::Utc::now(),
    );

    // To level 10: 1+1+1+2+1+1+1+1+3 points across levels 2-10. Nine
    // level-ups of mage growth from 15/6 intelligence/strength.
    character.grant_xp(12150, &table);
    assert_eq!(character.level, 10);
    assert_eq!(character.skills.unspent_points, 12);
    assert_eq!(character.stats.intelligence, 33);
    assert_eq!(character.stats.strength, 15);
}

#[test]
fn test_clan_capacity_rises_with_level() {
    let table = clan_levels();
    let mut clan = flingers_hub::entities::Clan::new("Ash", "#aa2222", "flame", chrono::Utc::now());

    clan.grant_xp(9200, &table);
    assert_eq!(clan.level, 5);
    assert_eq!(clan.member_capacity(&table), 20);
}
