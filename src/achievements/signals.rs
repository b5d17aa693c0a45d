//! Progress events reported by game-state observers.
//!
//! Each variant carries only the cumulative value needed to evaluate the
//! related achievements. Observers emit one of these after completing the
//! relevant action (e.g. after a quest is marked done, emit
//! `ProgressEvent::QuestCompleted { total_quests: n }`); the ledger fans the
//! event out to every candidate key and evaluates thresholds itself, so the
//! threshold table lives in the catalog alone.

use super::catalog;

/// One-shot events carry this fixed sentinel value.
const ONE_SHOT: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A quest was completed. `total_quests` is the cumulative count.
    QuestCompleted { total_quests: u64 },

    /// A battle ended in a win. `total_wins` is the cumulative count.
    BattleWon { total_wins: u64 },

    /// A battle was won without taking any damage.
    FlawlessBattle,

    /// The player's lifetime gold earnings changed.
    GoldEarned { total_gold: u64 },

    /// A story chapter was finished. `chapters_read` is the cumulative count.
    ChapterFinished { chapters_read: u64 },

    /// The daily activity streak reached `days` consecutive days.
    StreakReached { days: u64 },

    /// A task was finished before 8 a.m. local time.
    EarlyTaskFinished,

    /// A quest was completed on a Saturday or Sunday.
    WeekendQuestCompleted,
}

impl ProgressEvent {
    /// The `(key, value)` signals checked for this event. Every related key
    /// is probed with the same cumulative value — which of them actually
    /// unlock is the ledger's call.
    pub fn signals(&self) -> Vec<(&'static str, u64)> {
        match self {
            Self::QuestCompleted { total_quests } => vec![
                (catalog::FIRST_QUEST, *total_quests),
                (catalog::QUESTS_10, *total_quests),
                (catalog::QUESTS_50, *total_quests),
                (catalog::QUESTS_100, *total_quests),
            ],
            Self::BattleWon { total_wins } => vec![
                (catalog::FIRST_VICTORY, *total_wins),
                (catalog::BATTLES_25, *total_wins),
            ],
            Self::FlawlessBattle => vec![(catalog::FLAWLESS_VICTORY, ONE_SHOT)],
            Self::GoldEarned { total_gold } => vec![
                (catalog::GOLD_1K, *total_gold),
                (catalog::GOLD_10K, *total_gold),
            ],
            Self::ChapterFinished { chapters_read } => vec![
                (catalog::CHAPTER_1, *chapters_read),
                (catalog::CHAPTERS_ALL, *chapters_read),
            ],
            Self::StreakReached { days } => vec![
                (catalog::STREAK_7, *days),
                (catalog::STREAK_30, *days),
            ],
            Self::EarlyTaskFinished => vec![(catalog::EARLY_RISER, ONE_SHOT)],
            Self::WeekendQuestCompleted => vec![(catalog::WEEKEND_WARRIOR, ONE_SHOT)],
        }
    }
}
