//! Achievement evaluation.
//!
//! Combines the static catalog with a student record snapshot to derive, per
//! achievement: the unlocked tier prefix, the current goal tier, a bounded
//! progress percentage, and display counts. Evaluation is pure and recomputed
//! on demand; nothing is persisted here.

pub mod filter;
pub mod summary;

// Re-exports for convenience
pub use filter::CategoryBucket;
pub use summary::HallOfFameSummary;

use serde::{Deserialize, Serialize};

use crate::catalog::{AchievementCatalog, AchievementDef, AchievementIcon, TierRank};
use crate::student::StudentRecord;

/// The next tier to work toward within one achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierGoal {
    /// Rank of the goal tier
    pub rank: TierRank,
    /// Counter value that unlocks it
    pub target_value: u64,
    /// Whether every defined tier is already unlocked (the goal is then the
    /// highest defined tier)
    pub is_complete: bool,
}

impl TierGoal {
    /// Progress-bar caption, e.g. "Goal: Silver".
    pub fn caption(&self) -> String {
        if self.is_complete {
            "Completed".to_string()
        } else {
            format!("Goal: {}", self.rank.display_name())
        }
    }
}

/// Select the goal tier: the first defined tier (in rank order) not yet
/// unlocked, or the highest defined tier once everything is unlocked.
/// Achievements that define no tiers have no goal.
pub fn select_goal(def: &AchievementDef, unlocked: &[TierRank]) -> Option<TierGoal> {
    for tier in &def.tiers {
        if !unlocked.contains(&tier.rank) {
            return Some(TierGoal {
                rank: tier.rank,
                target_value: tier.target_value,
                is_complete: false,
            });
        }
    }

    def.tiers.last().map(|tier| TierGoal {
        rank: tier.rank,
        target_value: tier.target_value,
        is_complete: true,
    })
}

/// Bounded progress percentage (0-100) for a progress bar. A zero goal reads
/// as 0 % rather than dividing by zero.
pub fn progress_percent(current_value: u64, goal_value: u64) -> f32 {
    if goal_value == 0 {
        return 0.0;
    }
    ((current_value as f64 / goal_value as f64) * 100.0).min(100.0) as f32
}

/// Progress numbers for display; the numerator never exceeds the goal.
pub fn display_counts(current_value: u64, goal_value: u64) -> (u64, u64) {
    (current_value.min(goal_value), goal_value)
}

/// Reduce a persisted tier set to the longest prefix of the achievement's
/// defined tier order.
///
/// The store owns unlock truth, so nothing is written back; ranks outside the
/// prefix (gaps, or ranks the achievement does not define) are only dropped
/// from the derived view, with a data-consistency warning.
pub fn normalize_unlocked(def: &AchievementDef, stored: &[TierRank]) -> Vec<TierRank> {
    let mut prefix = Vec::new();
    for tier in &def.tiers {
        if stored.contains(&tier.rank) {
            prefix.push(tier.rank);
        } else {
            break;
        }
    }

    if stored.iter().any(|rank| !prefix.contains(rank)) {
        tracing::warn!(
            "Persisted unlocked tiers for {} are not a defined prefix: {:?}",
            def.id,
            stored
        );
    }

    prefix
}

/// Derived display state for one achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementStatus {
    /// Achievement id
    pub id: String,
    /// Display title
    pub title: String,
    /// Icon identifier for the UI layer to resolve
    pub icon: AchievementIcon,
    /// Raw category tag
    pub category: String,
    /// Current raw counter value
    pub current_value: u64,
    /// Unlocked tiers, always a prefix of the defined tier order
    pub unlocked: Vec<TierRank>,
    /// Tier currently worked toward (None when no tiers are defined)
    pub goal: Option<TierGoal>,
    /// Bounded progress toward the goal (0-100)
    pub percent: f32,
    /// Stars already earned from unlocked tiers
    pub stars_earned: u32,
}

impl AchievementStatus {
    /// Whether every defined tier is unlocked.
    pub fn is_complete(&self) -> bool {
        self.goal.as_ref().map(|g| g.is_complete).unwrap_or(false)
    }

    /// Progress numbers for display.
    pub fn display_counts(&self) -> (u64, u64) {
        let goal_value = self.goal.as_ref().map(|g| g.target_value).unwrap_or(0);
        display_counts(self.current_value, goal_value)
    }

    /// Progress text for display, e.g. "30/50".
    pub fn progress_label(&self) -> String {
        let (shown, goal) = self.display_counts();
        format!("{}/{}", shown, goal)
    }

    /// Progress-bar caption; empty for achievements without tiers.
    pub fn caption(&self) -> String {
        self.goal
            .as_ref()
            .map(|g| g.caption())
            .unwrap_or_default()
    }
}

/// Evaluate one achievement definition against a student record.
pub fn evaluate_achievement(def: &AchievementDef, record: &StudentRecord) -> AchievementStatus {
    let current_value = record.counter(&def.id);
    let unlocked = normalize_unlocked(def, record.unlocked(&def.id));
    let goal = select_goal(def, &unlocked);

    let percent = goal
        .as_ref()
        .map(|g| progress_percent(current_value, g.target_value))
        .unwrap_or(0.0);

    let stars_earned = unlocked
        .iter()
        .filter_map(|rank| def.tier(*rank))
        .map(|tier| tier.reward_stars)
        .sum();

    AchievementStatus {
        id: def.id.clone(),
        title: def.title.clone(),
        icon: def.icon,
        category: def.category.clone(),
        current_value,
        unlocked,
        goal,
        percent,
        stars_earned,
    }
}

/// Evaluates achievements for display.
///
/// Borrows the static catalog; per-student data always arrives as an explicit
/// argument, so one evaluator serves any number of students.
pub struct AchievementEvaluator<'a> {
    catalog: &'a AchievementCatalog,
}

impl<'a> AchievementEvaluator<'a> {
    /// Create an evaluator over a catalog.
    pub fn new(catalog: &'a AchievementCatalog) -> Self {
        Self { catalog }
    }

    /// Evaluate a single achievement by id.
    pub fn evaluate(
        &self,
        achievement_id: &str,
        record: &StudentRecord,
    ) -> Option<AchievementStatus> {
        self.catalog
            .get(achievement_id)
            .map(|def| evaluate_achievement(def, record))
    }

    /// Evaluate every achievement in catalog order.
    pub fn evaluate_all(&self, record: &StudentRecord) -> Vec<AchievementStatus> {
        self.catalog
            .iter()
            .map(|def| evaluate_achievement(def, record))
            .collect()
    }

    /// Evaluate the achievements in one display bucket, in catalog order.
    pub fn evaluate_bucket(
        &self,
        record: &StudentRecord,
        bucket: CategoryBucket,
    ) -> Vec<AchievementStatus> {
        filter::filter_catalog(self.catalog, bucket)
            .into_iter()
            .map(|def| evaluate_achievement(def, record))
            .collect()
    }

    /// Aggregate the dashboard header numbers.
    pub fn summarize(&self, record: &StudentRecord) -> HallOfFameSummary {
        summary::summarize(self.catalog, record)
    }

    /// Share of all defined tiers the student has unlocked (0-100).
    pub fn completion_percent(&self, record: &StudentRecord) -> f32 {
        let total = self.catalog.total_tiers();
        if total == 0 {
            return 0.0;
        }
        let summary = self.summarize(record);
        ((summary.tiers_unlocked as f32 / total as f32) * 100.0).min(100.0)
    }
}
