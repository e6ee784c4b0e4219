//! Unit tests for achievement evaluation against student records.

use halloffame::catalog::definitions::default_catalog;
use halloffame::{
    AchievementCatalog, AchievementDef, AchievementEvaluator, AchievementIcon, StudentRecord,
    TierRank,
};
use uuid::Uuid;

fn record_named(name: &str) -> StudentRecord {
    StudentRecord::new(Uuid::new_v4(), name)
}

#[test]
fn test_partway_to_silver() {
    let catalog = default_catalog();
    let evaluator = AchievementEvaluator::new(&catalog);

    let mut record = record_named("Mei");
    record.set_counter("tests_taken", 30);
    record.record_unlocked("tests_taken", TierRank::Bronze);

    let status = evaluator.evaluate("tests_taken", &record).unwrap();
    let goal = status.goal.as_ref().unwrap();

    assert_eq!(goal.rank, TierRank::Silver);
    assert_eq!(goal.target_value, 50);
    assert!(!goal.is_complete);
    assert_eq!(status.percent, 60.0);
    assert_eq!(status.display_counts(), (30, 50));
    assert_eq!(status.progress_label(), "30/50");
    assert_eq!(status.caption(), "Goal: Silver");
    assert_eq!(status.stars_earned, 5);
    assert!(!status.is_complete());
}

#[test]
fn test_fully_unlocked_achievement() {
    let catalog = default_catalog();
    let evaluator = AchievementEvaluator::new(&catalog);

    let mut record = record_named("Mei");
    record.set_counter("tests_taken", 150);
    record.record_unlocked("tests_taken", TierRank::Bronze);
    record.record_unlocked("tests_taken", TierRank::Silver);
    record.record_unlocked("tests_taken", TierRank::Gold);

    let status = evaluator.evaluate("tests_taken", &record).unwrap();
    let goal = status.goal.as_ref().unwrap();

    // The goal parks on the highest tier once everything is unlocked
    assert_eq!(goal.rank, TierRank::Gold);
    assert!(goal.is_complete);
    assert_eq!(status.percent, 100.0);
    assert_eq!(status.progress_label(), "100/100");
    assert_eq!(status.caption(), "Completed");
    assert_eq!(status.stars_earned, 35);
    assert!(status.is_complete());
}

#[test]
fn test_single_tier_achievement() {
    let mut catalog = AchievementCatalog::new();
    catalog.push(
        AchievementDef::new(
            "first_login",
            "Welcome Aboard",
            "Sign in for the first time",
            AchievementIcon::Star,
            "study",
        )
        .with_tier(TierRank::Bronze, 10, 5),
    );
    let evaluator = AchievementEvaluator::new(&catalog);

    let mut record = record_named("Omar");
    record.set_counter("first_login", 5);

    let status = evaluator.evaluate("first_login", &record).unwrap();
    assert_eq!(status.goal.as_ref().unwrap().rank, TierRank::Bronze);
    assert_eq!(status.percent, 50.0);
    assert_eq!(status.progress_label(), "5/10");
    assert_eq!(status.caption(), "Goal: Bronze");
}

#[test]
fn test_unknown_achievement_id() {
    let catalog = default_catalog();
    let evaluator = AchievementEvaluator::new(&catalog);
    let record = record_named("Mei");

    assert!(evaluator.evaluate("typing_speed", &record).is_none());
}

#[test]
fn test_evaluate_all_preserves_catalog_order() {
    let catalog = default_catalog();
    let evaluator = AchievementEvaluator::new(&catalog);
    let record = record_named("Mei");

    let statuses = evaluator.evaluate_all(&record);

    assert_eq!(statuses.len(), catalog.len());
    for (status, def) in statuses.iter().zip(catalog.iter()) {
        assert_eq!(status.id, def.id);
    }
}

#[test]
fn test_unlocked_view_is_always_a_prefix() {
    super::init_tracing();

    let catalog = default_catalog();
    let evaluator = AchievementEvaluator::new(&catalog);

    // Store data with a hole: gold recorded without silver
    let mut record = record_named("Mei");
    record.set_counter("tests_taken", 30);
    record.record_unlocked("tests_taken", TierRank::Bronze);
    record.record_unlocked("tests_taken", TierRank::Gold);

    let status = evaluator.evaluate("tests_taken", &record).unwrap();

    assert_eq!(status.unlocked, vec![TierRank::Bronze]);
    assert_eq!(status.goal.as_ref().unwrap().rank, TierRank::Silver);
    assert_eq!(status.stars_earned, 5);
}

#[test]
fn test_fresh_record_starts_at_bronze() {
    let catalog = default_catalog();
    let evaluator = AchievementEvaluator::new(&catalog);
    let record = record_named("Mei");

    for status in evaluator.evaluate_all(&record) {
        let goal = status.goal.as_ref().unwrap();
        assert_eq!(goal.rank, TierRank::Bronze);
        assert!(!goal.is_complete);
        assert_eq!(status.percent, 0.0);
        assert_eq!(status.stars_earned, 0);
    }
}

#[test]
fn test_completion_percent_over_default_catalog() {
    let catalog = default_catalog();
    let evaluator = AchievementEvaluator::new(&catalog);

    let mut record = record_named("Mei");
    assert_eq!(evaluator.completion_percent(&record), 0.0);

    record.record_unlocked("tests_taken", TierRank::Bronze);
    record.record_unlocked("tests_taken", TierRank::Silver);
    record.record_unlocked("game_wins", TierRank::Bronze);

    let total = catalog.total_tiers() as f32;
    let percent = evaluator.completion_percent(&record);
    assert!((percent - 300.0 / total).abs() < 0.001);
}
