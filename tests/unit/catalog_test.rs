//! Unit tests for catalog persistence and validation at the crate surface.

use halloffame::catalog::definitions::default_catalog;
use halloffame::catalog::loader::{load_catalog, save_catalog};
use halloffame::{
    AchievementCatalog, AchievementDef, AchievementEvaluator, AchievementIcon, CatalogError,
    StudentRecord, TierRank,
};
use uuid::Uuid;

#[test]
fn test_saved_catalog_loads_and_evaluates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("achievements.toml");

    let mut catalog = default_catalog();
    catalog.push(
        AchievementDef::new(
            "essays_written",
            "Wordsmith",
            "Write practice essays",
            AchievementIcon::Pencil,
            "study",
        )
        .with_tier(TierRank::Bronze, 3, 5)
        .with_tier(TierRank::Silver, 12, 10),
    );
    save_catalog(&path, &catalog).unwrap();

    let loaded = load_catalog(&path).unwrap();
    assert_eq!(loaded.achievements.len(), catalog.achievements.len());

    let evaluator = AchievementEvaluator::new(&loaded);
    let mut record = StudentRecord::new(Uuid::new_v4(), "Mei");
    record.set_counter("essays_written", 2);

    let status = evaluator.evaluate("essays_written", &record).unwrap();
    assert_eq!(status.goal.as_ref().unwrap().rank, TierRank::Bronze);
    assert_eq!(status.progress_label(), "2/3");
}

#[test]
fn test_save_refuses_unsorted_thresholds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("achievements.toml");

    let mut catalog = AchievementCatalog::new();
    catalog.push(
        AchievementDef::new("broken", "Broken", "", AchievementIcon::Star, "study")
            .with_tier(TierRank::Bronze, 50, 5)
            .with_tier(TierRank::Silver, 10, 10),
    );

    let err = save_catalog(&path, &catalog).unwrap_err();
    assert!(matches!(err, CatalogError::ThresholdOrder(_)));
    assert!(!path.exists());
}

#[test]
fn test_save_refuses_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("achievements.toml");

    let mut catalog = AchievementCatalog::new();
    for _ in 0..2 {
        catalog.push(
            AchievementDef::new("twice", "Twice", "", AchievementIcon::Star, "game")
                .with_tier(TierRank::Bronze, 1, 5),
        );
    }

    let err = save_catalog(&path, &catalog).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(_)));
}

#[test]
fn test_default_path_points_at_achievements_file() {
    let path = halloffame::catalog::loader::default_catalog_path();
    assert_eq!(path.file_name().unwrap(), "achievements.toml");
}
