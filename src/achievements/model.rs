// SPDX-License-Identifier: MIT
//! Achievement data models — the compiled-in definition shape, the persisted
//! per-key record, and the unlock event handed back to the host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Category ─────────────────────────────────────────────────────────────────

/// Grouping used by the achievements screen. One section per category,
/// in the order categories first appear in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    /// Quest completion milestones.
    #[default]
    Quests,
    /// Battle outcomes.
    Battles,
    /// Cumulative gold earned.
    Wealth,
    /// Story chapter progress.
    Story,
    /// Streaks and one-shot habit events.
    Dedication,
}

impl AchievementCategory {
    /// Section header shown above the category's badges.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Quests => "Quests",
            Self::Battles => "Battles",
            Self::Wealth => "Wealth",
            Self::Story => "Story",
            Self::Dedication => "Dedication",
        }
    }
}

// ─── Reward ───────────────────────────────────────────────────────────────────

/// Resource kind granted by an achievement reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    Coins,
    Crystals,
    Energy,
}

/// Reward payload attached to a definition. The ledger never applies the
/// reward itself — it hands the payload to the host inside [`Unlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub kind: RewardKind,
    pub amount: u32,
}

// ─── Definition ───────────────────────────────────────────────────────────────

/// A compiled-in achievement definition. The catalog of these is the single
/// source of truth for which keys exist, their thresholds, and their rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDefinition {
    /// Machine-stable identifier, snake_case, e.g. `"first_quest"`.
    pub key: &'static str,
    /// Human-readable badge name, e.g. `"First Steps"`.
    pub name: &'static str,
    /// Short description shown on the achievement card.
    pub description: &'static str,
    pub category: AchievementCategory,
    /// Progress value at which the achievement unlocks.
    pub required_value: u64,
    /// Reward granted on unlock. `None` for badge-only achievements.
    pub reward: Option<Reward>,
}

impl AchievementDefinition {
    pub const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        category: AchievementCategory,
        required_value: u64,
    ) -> Self {
        Self {
            key,
            name,
            description,
            category,
            required_value,
            reward: None,
        }
    }

    pub const fn with_reward(mut self, kind: RewardKind, amount: u32) -> Self {
        self.reward = Some(Reward { kind, amount });
        self
    }
}

// ─── Record ───────────────────────────────────────────────────────────────────

/// Per-key persisted state: a copy of the definition's static fields plus the
/// player's dynamic progress. Missing fields default on decode and unknown
/// fields are ignored, so the stored blob survives catalog and schema edits
/// in both directions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementRecord {
    pub key: String,
    pub name: String,
    pub description: String,
    pub category: AchievementCategory,
    pub required_value: u64,
    /// Last reported progress value (last-write-wins, not a running max).
    pub progress: u64,
    /// Monotonic: once true, never returns to false.
    pub is_unlocked: bool,
    /// Set exactly once, at the first unlock. RFC 3339 UTC on the wire.
    pub unlocked_at: Option<DateTime<Utc>>,
    pub reward: Option<Reward>,
}

impl AchievementRecord {
    /// Fresh locked record for a catalog definition: zero progress, no
    /// unlock timestamp.
    pub fn from_definition(def: &AchievementDefinition) -> Self {
        Self {
            key: def.key.to_string(),
            name: def.name.to_string(),
            description: def.description.to_string(),
            category: def.category,
            required_value: def.required_value,
            progress: 0,
            is_unlocked: false,
            unlocked_at: None,
            reward: def.reward,
        }
    }
}

// ─── Unlock event ─────────────────────────────────────────────────────────────

/// Emitted exactly once per unlock. The host consumes this to grant the
/// reward and trigger its celebratory presentation — the ledger has no
/// inbound dependency on either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unlock {
    pub key: String,
    pub name: String,
    pub reward: Option<Reward>,
    pub unlocked_at: DateTime<Utc>,
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_record_has_no_timestamp() {
        let def = AchievementDefinition::new(
            "test_key",
            "Test Badge",
            "A test achievement.",
            AchievementCategory::Quests,
            10,
        );
        let record = AchievementRecord::from_definition(&def);
        assert_eq!(record.key, "test_key");
        assert_eq!(record.progress, 0);
        assert!(!record.is_unlocked);
        assert!(record.unlocked_at.is_none());
    }

    #[test]
    fn with_reward_attaches_payload() {
        let def = AchievementDefinition::new(
            "rewarded",
            "Rewarded",
            "Comes with coins.",
            AchievementCategory::Wealth,
            5,
        )
        .with_reward(RewardKind::Coins, 50);
        assert_eq!(
            def.reward,
            Some(Reward { kind: RewardKind::Coins, amount: 50 })
        );
    }

    #[test]
    fn record_roundtrip_json() {
        let def = AchievementDefinition::new(
            "roundtrip",
            "Roundtrip",
            "Survives encode/decode.",
            AchievementCategory::Story,
            3,
        )
        .with_reward(RewardKind::Crystals, 5);
        let mut record = AchievementRecord::from_definition(&def);
        record.progress = 2;

        let json = serde_json::to_string(&record).unwrap();
        let back: AchievementRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let json = r#"{
            "key": "first_quest",
            "category": "quests",
            "required_value": 1,
            "progress": 1,
            "is_unlocked": true,
            "unlocked_at": "2026-08-01T09:30:00Z",
            "legacy_sort_order": 7,
            "icon": "trophy"
        }"#;
        let record: AchievementRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_unlocked);
        assert_eq!(record.progress, 1);
    }

    #[test]
    fn decode_defaults_missing_fields() {
        let record: AchievementRecord =
            serde_json::from_str(r#"{"key": "bare"}"#).unwrap();
        assert_eq!(record.key, "bare");
        assert_eq!(record.progress, 0);
        assert!(!record.is_unlocked);
        assert!(record.unlocked_at.is_none());
        assert!(record.reward.is_none());
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&AchievementCategory::Dedication).unwrap();
        assert_eq!(json, r#""dedication""#);
    }
}
