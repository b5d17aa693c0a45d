// SPDX-License-Identifier: MIT
//! Achievement catalog — 15 pre-defined achievements and their unlock
//! thresholds.
//!
//! Keys use snake_case as their string value (e.g. `"first_quest"`). They
//! are stable across app versions: the ledger merges persisted progress onto
//! this list at startup, so definitions can be reordered, re-thresholded, or
//! added here without a storage migration.

use super::model::{AchievementCategory, AchievementDefinition, RewardKind};

// ─── Achievement key constants ────────────────────────────────────────────────

pub const FIRST_QUEST: &str = "first_quest";
pub const QUESTS_10: &str = "quests_10";
pub const QUESTS_50: &str = "quests_50";
pub const QUESTS_100: &str = "quests_100";
pub const FIRST_VICTORY: &str = "first_victory";
pub const BATTLES_25: &str = "battles_25";
pub const FLAWLESS_VICTORY: &str = "flawless_victory";
pub const GOLD_1K: &str = "gold_1k";
pub const GOLD_10K: &str = "gold_10k";
pub const CHAPTER_1: &str = "chapter_1";
pub const CHAPTERS_ALL: &str = "chapters_all";
pub const STREAK_7: &str = "streak_7";
pub const STREAK_30: &str = "streak_30";
pub const EARLY_RISER: &str = "early_riser";
pub const WEEKEND_WARRIOR: &str = "weekend_warrior";

// ─── Achievement definitions ──────────────────────────────────────────────────

/// The canonical, ordered source of truth for the achievement catalogue.
/// The achievements screen renders each badge in this order (earned = full
/// color; unearned = grayscale) grouped by category.
pub fn all_definitions() -> &'static [AchievementDefinition] {
    CATALOG
}

static CATALOG: &[AchievementDefinition] = &[
    AchievementDefinition::new(
        FIRST_QUEST,
        "First Steps",
        "Complete your first quest. The journey begins.",
        AchievementCategory::Quests,
        1,
    )
    .with_reward(RewardKind::Coins, 50),
    AchievementDefinition::new(
        QUESTS_10,
        "Adventurer",
        "Complete 10 quests.",
        AchievementCategory::Quests,
        10,
    )
    .with_reward(RewardKind::Coins, 150),
    AchievementDefinition::new(
        QUESTS_50,
        "Taskmaster",
        "Complete 50 quests.",
        AchievementCategory::Quests,
        50,
    )
    .with_reward(RewardKind::Crystals, 5),
    AchievementDefinition::new(
        QUESTS_100,
        "Questline Legend",
        "Complete 100 quests. Nothing on your list survives you.",
        AchievementCategory::Quests,
        100,
    )
    .with_reward(RewardKind::Crystals, 20),
    AchievementDefinition::new(
        FIRST_VICTORY,
        "First Victory",
        "Win your first battle.",
        AchievementCategory::Battles,
        1,
    )
    .with_reward(RewardKind::Coins, 75),
    AchievementDefinition::new(
        BATTLES_25,
        "Seasoned Fighter",
        "Win 25 battles.",
        AchievementCategory::Battles,
        25,
    )
    .with_reward(RewardKind::Crystals, 5),
    AchievementDefinition::new(
        FLAWLESS_VICTORY,
        "Flawless",
        "Win a battle without taking damage.",
        AchievementCategory::Battles,
        1,
    )
    .with_reward(RewardKind::Energy, 10),
    AchievementDefinition::new(
        GOLD_1K,
        "Saver",
        "Earn 1,000 gold in total.",
        AchievementCategory::Wealth,
        1_000,
    ),
    AchievementDefinition::new(
        GOLD_10K,
        "Tycoon",
        "Earn 10,000 gold in total.",
        AchievementCategory::Wealth,
        10_000,
    )
    .with_reward(RewardKind::Crystals, 10),
    AchievementDefinition::new(
        CHAPTER_1,
        "The Story Begins",
        "Finish the first story chapter.",
        AchievementCategory::Story,
        1,
    )
    .with_reward(RewardKind::Energy, 5),
    AchievementDefinition::new(
        CHAPTERS_ALL,
        "Lorekeeper",
        "Finish all twelve story chapters.",
        AchievementCategory::Story,
        12,
    )
    .with_reward(RewardKind::Crystals, 25),
    AchievementDefinition::new(
        STREAK_7,
        "One Week Strong",
        "Keep a 7-day activity streak.",
        AchievementCategory::Dedication,
        7,
    )
    .with_reward(RewardKind::Coins, 200),
    AchievementDefinition::new(
        STREAK_30,
        "Habit Forged",
        "Keep a 30-day activity streak.",
        AchievementCategory::Dedication,
        30,
    )
    .with_reward(RewardKind::Crystals, 30),
    AchievementDefinition::new(
        EARLY_RISER,
        "Early Riser",
        "Finish a task before 8 a.m.",
        AchievementCategory::Dedication,
        1,
    ),
    AchievementDefinition::new(
        WEEKEND_WARRIOR,
        "Weekend Warrior",
        "Complete a quest on a weekend.",
        AchievementCategory::Dedication,
        1,
    )
    .with_reward(RewardKind::Coins, 100),
];

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for def in all_definitions() {
            assert!(seen.insert(def.key), "duplicate catalog key: {}", def.key);
        }
    }

    #[test]
    fn thresholds_are_nonzero() {
        for def in all_definitions() {
            assert!(
                def.required_value > 0,
                "{} has a zero threshold and would never gate an unlock",
                def.key
            );
        }
    }

    #[test]
    fn display_text_is_present() {
        for def in all_definitions() {
            assert!(!def.name.is_empty(), "{} has no badge name", def.key);
            assert!(!def.description.is_empty(), "{} has no card text", def.key);
        }
    }

    #[test]
    fn one_shot_events_use_sentinel_threshold() {
        for key in [FLAWLESS_VICTORY, EARLY_RISER, WEEKEND_WARRIOR] {
            let def = all_definitions().iter().find(|d| d.key == key).unwrap();
            assert_eq!(def.required_value, 1, "{key} is a one-shot event");
        }
    }
}
