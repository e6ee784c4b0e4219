//! Student record snapshots.
//!
//! The external student record store owns the raw activity counters and the
//! persisted unlocked tiers; this module is the read-side view the evaluator
//! consumes. Nothing here decides when a tier unlocks.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::TierRank;

/// Snapshot of one student's achievement-relevant state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: Uuid,
    pub display_name: String,
    /// Raw activity counters keyed by achievement id.
    #[serde(default)]
    pub counters: HashMap<String, u64>,
    /// Persisted unlocked tiers keyed by achievement id, in unlock order.
    #[serde(default)]
    pub unlocked_tiers: HashMap<String, Vec<TierRank>>,
    /// When the snapshot was taken.
    #[serde(default = "Utc::now")]
    pub snapshot_at: DateTime<Utc>,
}

impl StudentRecord {
    /// Create an empty snapshot for a student.
    pub fn new(student_id: Uuid, display_name: &str) -> Self {
        Self {
            student_id,
            display_name: display_name.to_string(),
            counters: HashMap::new(),
            unlocked_tiers: HashMap::new(),
            snapshot_at: Utc::now(),
        }
    }

    /// Raw counter for an achievement (0 when the student has no entry).
    pub fn counter(&self, achievement_id: &str) -> u64 {
        self.counters.get(achievement_id).copied().unwrap_or(0)
    }

    /// Persisted unlocked tiers for an achievement (empty when none).
    pub fn unlocked(&self, achievement_id: &str) -> &[TierRank] {
        self.unlocked_tiers
            .get(achievement_id)
            .map(|ranks| ranks.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the student has any progress record for an achievement.
    pub fn has_progress(&self, achievement_id: &str) -> bool {
        self.counters.contains_key(achievement_id)
            || self.unlocked_tiers.contains_key(achievement_id)
    }

    /// Count of achievements with any progress record.
    pub fn progress_count(&self) -> usize {
        let ids: BTreeSet<&str> = self
            .counters
            .keys()
            .map(String::as_str)
            .chain(self.unlocked_tiers.keys().map(String::as_str))
            .collect();
        ids.len()
    }

    /// Set a raw counter value.
    pub fn set_counter(&mut self, achievement_id: &str, value: u64) {
        self.counters.insert(achievement_id.to_string(), value);
    }

    /// Record a persisted tier unlock while assembling a snapshot. The store
    /// decides when tiers unlock; duplicate ranks are ignored.
    pub fn record_unlocked(&mut self, achievement_id: &str, rank: TierRank) {
        let ranks = self
            .unlocked_tiers
            .entry(achievement_id.to_string())
            .or_default();
        if !ranks.contains(&rank) {
            ranks.push(rank);
        }
    }

    /// Parse a snapshot from the store's JSON interchange format.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        serde_json::from_str(json).map_err(|e| RecordError::ParseError(e.to_string()))
    }

    /// Serialize the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, RecordError> {
        serde_json::to_string_pretty(self).map_err(|e| RecordError::SerializeError(e.to_string()))
    }
}

/// Student record errors.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
