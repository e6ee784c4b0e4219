//! Achievement catalog: tier and achievement definitions.
//!
//! The catalog is static, versioned data. Student state lives in the external
//! record store and is combined with these definitions by the evaluator.

pub mod definitions;
pub mod loader;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Current catalog file format version.
pub const CATALOG_FORMAT_VERSION: u32 = 1;

/// Tier rank within an achievement, ordered easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierRank {
    /// Easy to obtain
    Bronze,
    /// Moderate difficulty
    Silver,
    /// Challenging
    Gold,
}

impl TierRank {
    /// Canonical rank order (unlock prefixes follow this order).
    pub const ALL: [TierRank; 3] = [TierRank::Bronze, TierRank::Silver, TierRank::Gold];

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TierRank::Bronze => "Bronze",
            TierRank::Silver => "Silver",
            TierRank::Gold => "Gold",
        }
    }

    /// Stable identifier, matching the persisted form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TierRank::Bronze => "bronze",
            TierRank::Silver => "silver",
            TierRank::Gold => "gold",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "bronze" => Some(TierRank::Bronze),
            "silver" => Some(TierRank::Silver),
            "gold" => Some(TierRank::Gold),
            _ => None,
        }
    }
}

impl std::fmt::Display for TierRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One unlockable tier of an achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementTier {
    /// Rank of this tier
    pub rank: TierRank,
    /// Counter value required to unlock
    pub target_value: u64,
    /// Stars awarded on unlock
    pub reward_stars: u32,
}

impl AchievementTier {
    /// Create a new tier.
    pub fn new(rank: TierRank, target_value: u64, reward_stars: u32) -> Self {
        Self {
            rank,
            target_value,
            reward_stars,
        }
    }
}

/// Icon identifier for an achievement.
///
/// The evaluator only ever emits an identifier; mapping it to an actual
/// renderer is the UI layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementIcon {
    Trophy,
    Medal,
    Star,
    GraduationCap,
    Book,
    Pencil,
    Flame,
    Target,
    Gamepad,
    Crown,
    CardStack,
    Gem,
    Backpack,
}

impl AchievementIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementIcon::Trophy => "trophy",
            AchievementIcon::Medal => "medal",
            AchievementIcon::Star => "star",
            AchievementIcon::GraduationCap => "graduation_cap",
            AchievementIcon::Book => "book",
            AchievementIcon::Pencil => "pencil",
            AchievementIcon::Flame => "flame",
            AchievementIcon::Target => "target",
            AchievementIcon::Gamepad => "gamepad",
            AchievementIcon::Crown => "crown",
            AchievementIcon::CardStack => "card_stack",
            AchievementIcon::Gem => "gem",
            AchievementIcon::Backpack => "backpack",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "trophy" => Some(AchievementIcon::Trophy),
            "medal" => Some(AchievementIcon::Medal),
            "star" => Some(AchievementIcon::Star),
            "graduation_cap" => Some(AchievementIcon::GraduationCap),
            "book" => Some(AchievementIcon::Book),
            "pencil" => Some(AchievementIcon::Pencil),
            "flame" => Some(AchievementIcon::Flame),
            "target" => Some(AchievementIcon::Target),
            "gamepad" => Some(AchievementIcon::Gamepad),
            "crown" => Some(AchievementIcon::Crown),
            "card_stack" => Some(AchievementIcon::CardStack),
            "gem" => Some(AchievementIcon::Gem),
            "backpack" => Some(AchievementIcon::Backpack),
            _ => None,
        }
    }
}

/// Achievement definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDef {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Description shown on the dashboard
    pub description: String,
    /// Icon identifier
    pub icon: AchievementIcon,
    /// Raw category tag ("study", "game", "collection"); unknown tags are
    /// tolerated and only appear in the all-achievements bucket
    pub category: String,
    /// Tiers in ascending rank order; any subset of ranks may be present
    pub tiers: Vec<AchievementTier>,
}

impl AchievementDef {
    /// Create a new achievement definition with no tiers.
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        icon: AchievementIcon,
        category: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon,
            category: category.to_string(),
            tiers: Vec::new(),
        }
    }

    /// Append a tier.
    pub fn with_tier(mut self, rank: TierRank, target_value: u64, reward_stars: u32) -> Self {
        self.tiers.push(AchievementTier::new(rank, target_value, reward_stars));
        self
    }

    /// Look up a tier by rank.
    pub fn tier(&self, rank: TierRank) -> Option<&AchievementTier> {
        self.tiers.iter().find(|t| t.rank == rank)
    }

    /// Total stars available across this achievement's tiers.
    pub fn total_stars(&self) -> u32 {
        self.tiers.iter().map(|t| t.reward_stars).sum()
    }

    /// Check this definition's invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.tiers.is_empty() {
            return Err(CatalogError::EmptyTiers(self.id.clone()));
        }

        for pair in self.tiers.windows(2) {
            if pair[1].rank <= pair[0].rank {
                return Err(CatalogError::TierOrder(self.id.clone()));
            }
            if pair[1].target_value < pair[0].target_value {
                return Err(CatalogError::ThresholdOrder(self.id.clone()));
            }
        }

        Ok(())
    }
}

/// The static, versioned achievement catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementCatalog {
    /// Catalog file format version
    pub version: u32,
    /// All achievement definitions, in display order
    pub achievements: Vec<AchievementDef>,
}

impl AchievementCatalog {
    /// Create an empty catalog at the current format version.
    pub fn new() -> Self {
        Self {
            version: CATALOG_FORMAT_VERSION,
            achievements: Vec::new(),
        }
    }

    /// Append an achievement definition.
    pub fn push(&mut self, def: AchievementDef) {
        self.achievements.push(def);
    }

    /// Look up an achievement by id.
    pub fn get(&self, id: &str) -> Option<&AchievementDef> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Iterate achievement definitions in display order.
    pub fn iter(&self) -> impl Iterator<Item = &AchievementDef> {
        self.achievements.iter()
    }

    /// Number of achievement definitions.
    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }

    /// Total number of tiers defined across all achievements.
    pub fn total_tiers(&self) -> usize {
        self.achievements.iter().map(|a| a.tiers.len()).sum()
    }

    /// Check catalog-wide invariants: unique ids, per-achievement tier order
    /// and non-decreasing thresholds.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for def in &self.achievements {
            if !seen.insert(def.id.as_str()) {
                return Err(CatalogError::DuplicateId(def.id.clone()));
            }
            def.validate()?;
        }
        Ok(())
    }
}

impl Default for AchievementCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalog errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Unsupported catalog version: {0}")]
    UnsupportedVersion(u32),

    #[error("Duplicate achievement id: {0}")]
    DuplicateId(String),

    #[error("Achievement defines no tiers: {0}")]
    EmptyTiers(String),

    #[error("Achievement tiers out of rank order: {0}")]
    TierOrder(String),

    #[error("Achievement tier thresholds must be non-decreasing: {0}")]
    ThresholdOrder(String),
}
