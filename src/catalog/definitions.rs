//! Built-in achievement definitions.

use super::{AchievementCatalog, AchievementDef, AchievementIcon, TierRank, CATALOG_FORMAT_VERSION};

/// Get the stock achievement catalog shipped with the platform.
pub fn default_catalog() -> AchievementCatalog {
    let mut achievements = Vec::new();

    achievements.extend(study_achievements());
    achievements.extend(game_achievements());
    achievements.extend(collection_achievements());

    AchievementCatalog {
        version: CATALOG_FORMAT_VERSION,
        achievements,
    }
}

fn study_achievements() -> Vec<AchievementDef> {
    vec![
        AchievementDef::new(
            "tests_taken",
            "Test Veteran",
            "Complete practice tests",
            AchievementIcon::GraduationCap,
            "study",
        )
        .with_tier(TierRank::Bronze, 10, 5)
        .with_tier(TierRank::Silver, 50, 10)
        .with_tier(TierRank::Gold, 100, 20),
        AchievementDef::new(
            "words_learned",
            "Word Collector",
            "Master new vocabulary words",
            AchievementIcon::Book,
            "study",
        )
        .with_tier(TierRank::Bronze, 100, 5)
        .with_tier(TierRank::Silver, 500, 15)
        .with_tier(TierRank::Gold, 2000, 30),
        AchievementDef::new(
            "study_streak",
            "On a Roll",
            "Study on consecutive days",
            AchievementIcon::Flame,
            "study",
        )
        .with_tier(TierRank::Bronze, 3, 5)
        .with_tier(TierRank::Silver, 14, 15)
        .with_tier(TierRank::Gold, 60, 40),
        AchievementDef::new(
            "lessons_completed",
            "Chapter by Chapter",
            "Finish course lessons",
            AchievementIcon::Pencil,
            "study",
        )
        .with_tier(TierRank::Bronze, 5, 5)
        .with_tier(TierRank::Silver, 25, 10)
        .with_tier(TierRank::Gold, 75, 25),
        AchievementDef::new(
            "perfect_scores",
            "Perfectionist",
            "Score full marks on a test",
            AchievementIcon::Target,
            "study",
        )
        .with_tier(TierRank::Bronze, 1, 10)
        .with_tier(TierRank::Silver, 10, 25)
        .with_tier(TierRank::Gold, 50, 60),
    ]
}

fn game_achievements() -> Vec<AchievementDef> {
    vec![
        AchievementDef::new(
            "games_played",
            "Game On",
            "Play learning games",
            AchievementIcon::Gamepad,
            "game",
        )
        .with_tier(TierRank::Bronze, 5, 5)
        .with_tier(TierRank::Silver, 30, 10)
        .with_tier(TierRank::Gold, 100, 20),
        AchievementDef::new(
            "game_wins",
            "Champion",
            "Win learning games",
            AchievementIcon::Trophy,
            "game",
        )
        .with_tier(TierRank::Bronze, 1, 5)
        .with_tier(TierRank::Silver, 20, 15)
        .with_tier(TierRank::Gold, 75, 35),
        AchievementDef::new(
            "win_streak",
            "Unstoppable",
            "Win games in a row",
            AchievementIcon::Crown,
            "game",
        )
        .with_tier(TierRank::Bronze, 3, 10)
        .with_tier(TierRank::Silver, 7, 20)
        .with_tier(TierRank::Gold, 15, 40),
    ]
}

fn collection_achievements() -> Vec<AchievementDef> {
    vec![
        AchievementDef::new(
            "cards_collected",
            "Card Sharp",
            "Collect flashcards",
            AchievementIcon::CardStack,
            "collection",
        )
        .with_tier(TierRank::Bronze, 10, 5)
        .with_tier(TierRank::Silver, 50, 15)
        .with_tier(TierRank::Gold, 150, 30),
        AchievementDef::new(
            "rare_cards",
            "Treasure Hunter",
            "Find rare cards",
            AchievementIcon::Gem,
            "collection",
        )
        .with_tier(TierRank::Bronze, 1, 10)
        .with_tier(TierRank::Silver, 10, 30)
        .with_tier(TierRank::Gold, 30, 60),
        AchievementDef::new(
            "avatar_items",
            "Dressed for Success",
            "Unlock avatar outfit items",
            AchievementIcon::Backpack,
            "collection",
        )
        .with_tier(TierRank::Bronze, 5, 5)
        .with_tier(TierRank::Silver, 20, 10)
        .with_tier(TierRank::Gold, 50, 25),
    ]
}
