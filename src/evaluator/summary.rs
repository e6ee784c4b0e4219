//! Dashboard header aggregates.

use serde::{Deserialize, Serialize};

use crate::catalog::{AchievementCatalog, TierRank};
use crate::student::StudentRecord;

/// Aggregate numbers for the hall-of-fame dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallOfFameSummary {
    /// Total tiers unlocked across all achievements
    pub tiers_unlocked: u32,
    /// Total stars earned from unlocked tiers
    pub stars_earned: u32,
    /// Achievements with any progress record
    pub achievements_started: u32,
}

/// Aggregate a student's persisted unlocks into the dashboard header numbers.
///
/// Iterates the record's unlock entries: tier counts come straight from the
/// store, star rewards are looked up in the catalog, and an unmatched
/// achievement/tier combination contributes no stars (a data-consistency
/// warning, not an error).
pub fn summarize(catalog: &AchievementCatalog, record: &StudentRecord) -> HallOfFameSummary {
    let mut summary = HallOfFameSummary::default();

    for (achievement_id, ranks) in &record.unlocked_tiers {
        let def = catalog.get(achievement_id);
        if def.is_none() {
            tracing::warn!(
                "Student record references unknown achievement: {}",
                achievement_id
            );
        }

        let mut seen: Vec<TierRank> = Vec::new();
        for rank in ranks {
            if seen.contains(rank) {
                continue;
            }
            seen.push(*rank);

            summary.tiers_unlocked += 1;
            match def.and_then(|d| d.tier(*rank)) {
                Some(tier) => summary.stars_earned += tier.reward_stars,
                None => {
                    if def.is_some() {
                        tracing::warn!(
                            "No {} tier defined for {}; no stars awarded",
                            rank,
                            achievement_id
                        );
                    }
                }
            }
        }
    }

    summary.achievements_started = record.progress_count() as u32;
    summary
}
