//! Category buckets for the dashboard filter bar.

use serde::{Deserialize, Serialize};

use crate::catalog::{AchievementCatalog, AchievementDef};

/// Display bucket on the dashboard filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryBucket {
    /// Every achievement, including ones with unknown category tags
    All,
    /// Study achievements
    Study,
    /// Learning-game achievements
    Game,
    /// Collection achievements
    Collection,
}

impl CategoryBucket {
    /// Buckets in display order.
    pub const ALL_BUCKETS: [CategoryBucket; 4] = [
        CategoryBucket::All,
        CategoryBucket::Study,
        CategoryBucket::Game,
        CategoryBucket::Collection,
    ];

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryBucket::All => "All",
            CategoryBucket::Study => "Study",
            CategoryBucket::Game => "Games",
            CategoryBucket::Collection => "Collection",
        }
    }

    /// Map a raw category tag to its narrow bucket. Unknown tags map to no
    /// bucket and therefore only show under [`CategoryBucket::All`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "study" => Some(CategoryBucket::Study),
            "game" => Some(CategoryBucket::Game),
            "collection" => Some(CategoryBucket::Collection),
            _ => None,
        }
    }

    /// Whether an achievement with the given tag belongs in this bucket.
    pub fn contains_tag(&self, tag: &str) -> bool {
        match self {
            CategoryBucket::All => true,
            bucket => Self::from_tag(tag) == Some(*bucket),
        }
    }
}

impl std::fmt::Display for CategoryBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The catalog entries belonging to one bucket, in catalog order.
pub fn filter_catalog<'a>(
    catalog: &'a AchievementCatalog,
    bucket: CategoryBucket,
) -> Vec<&'a AchievementDef> {
    catalog
        .iter()
        .filter(|def| bucket.contains_tag(&def.category))
        .collect()
}
