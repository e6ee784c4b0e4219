//! HallOfFame - Achievement Evaluation Engine
//!
//! Computes a student's hall-of-fame dashboard state for a learning platform:
//! which bronze/silver/gold tiers are unlocked per achievement, the next goal
//! tier with a bounded progress percentage, category filter buckets, and the
//! dashboard header aggregates (tiers, stars, achievements started).
//!
//! The crate is a pure computation layer. The achievement catalog is static,
//! versioned data; raw activity counters and persisted unlocks belong to an
//! external student record store and are passed in as explicit arguments.

pub mod catalog;
pub mod evaluator;
pub mod student;

// Re-export commonly used types
pub use catalog::{
    AchievementCatalog, AchievementDef, AchievementIcon, AchievementTier, CatalogError, TierRank,
};
pub use evaluator::{
    AchievementEvaluator, AchievementStatus, CategoryBucket, HallOfFameSummary, TierGoal,
};
pub use student::{RecordError, StudentRecord};
