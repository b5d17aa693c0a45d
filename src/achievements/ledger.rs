// SPDX-License-Identifier: MIT
//! The achievement ledger — threshold evaluation, exactly-once unlocks, and
//! merge-on-load against the compiled-in catalog.
//!
//! The ledger is a synchronous, single-threaded state reducer. Every
//! mutating operation takes `&mut self`, so exclusive access is enforced by
//! the borrow checker; a host that shares one ledger across threads wraps it
//! in a `Mutex` (every operation reads then writes the same record
//! sequence).

use chrono::Utc;
use tracing::{debug, info, warn};

use super::catalog;
use super::model::{AchievementCategory, AchievementDefinition, AchievementRecord, Unlock};
use super::signals::ProgressEvent;
use crate::store::BlobStore;

/// Name of the blob the ledger persists under, unless the host overrides it.
pub const DEFAULT_BLOB_NAME: &str = "achievements";

pub struct AchievementLedger {
    store: Box<dyn BlobStore>,
    blob_name: String,
    definitions: Vec<AchievementDefinition>,
    records: Vec<AchievementRecord>,
    /// Key of the most recently unlocked record, kept for the host's
    /// celebratory banner.
    last_unlocked: Option<String>,
    /// Raised on unlock; the UI consumes the banner and clears it via
    /// [`AchievementLedger::acknowledge_unlock`].
    unlock_pending: bool,
}

impl AchievementLedger {
    // ─── Construction ─────────────────────────────────────────────────────────

    /// Build the ledger from the compiled-in catalog, merging any persisted
    /// state found in `store` under `blob_name`.
    pub fn load(store: Box<dyn BlobStore>, blob_name: impl Into<String>) -> Self {
        Self::load_with(catalog::all_definitions(), store, blob_name)
    }

    /// Same as [`AchievementLedger::load`] with an explicit definition list.
    /// Hosts use this for seasonal catalogs; tests use it to exercise
    /// catalog evolution.
    pub fn load_with(
        definitions: &[AchievementDefinition],
        store: Box<dyn BlobStore>,
        blob_name: impl Into<String>,
    ) -> Self {
        let blob_name = blob_name.into();
        let records = match store.get(&blob_name) {
            Some(bytes) => match serde_json::from_slice::<Vec<AchievementRecord>>(&bytes) {
                Ok(persisted) => merge(definitions, persisted),
                Err(e) => {
                    warn!(err = %e, "stored achievements unreadable — starting fresh");
                    fresh(definitions)
                }
            },
            None => fresh(definitions),
        };

        let ledger = Self {
            store,
            blob_name,
            definitions: definitions.to_vec(),
            records,
            last_unlocked: None,
            unlock_pending: false,
        };
        debug!(
            total = ledger.total_count(),
            unlocked = ledger.unlocked_count(),
            "achievement ledger loaded"
        );
        ledger
    }

    // ─── Progress reporting ───────────────────────────────────────────────────

    /// Record a reported progress value and unlock the achievement if its
    /// threshold is now met.
    ///
    /// `progress` is overwritten with `value` (last-write-wins — observers
    /// are responsible for reporting monotonically non-decreasing values).
    /// An unknown `key` is a silent no-op: shared check-call sites may probe
    /// keys that are not in every catalog.
    ///
    /// Returns the [`Unlock`] event exactly once, on the call that crosses
    /// the threshold. The full ledger is persisted synchronously on unlock.
    pub fn report_progress(&mut self, key: &str, value: u64) -> Option<Unlock> {
        let idx = self.records.iter().position(|r| r.key == key)?;

        let record = &mut self.records[idx];
        record.progress = value;
        if record.is_unlocked || value < record.required_value {
            return None;
        }

        let now = Utc::now();
        record.is_unlocked = true;
        record.unlocked_at = Some(now);
        let unlock = Unlock {
            key: record.key.clone(),
            name: record.name.clone(),
            reward: record.reward,
            unlocked_at: now,
        };

        info!(key = %unlock.key, progress = value, "achievement unlocked");
        self.last_unlocked = Some(unlock.key.clone());
        self.unlock_pending = true;
        self.save();

        Some(unlock)
    }

    /// Fan a game-state event out to every related key and collect the
    /// unlocks it produced. Each signal is processed independently.
    pub fn apply(&mut self, event: &ProgressEvent) -> Vec<Unlock> {
        event
            .signals()
            .into_iter()
            .filter_map(|(key, value)| self.report_progress(key, value))
            .collect()
    }

    // ─── Persistence ──────────────────────────────────────────────────────────

    /// Serialize the full ledger to the store. Best effort: encode or write
    /// failure is logged and swallowed, leaving in-memory state authoritative
    /// until the next successful save.
    pub fn save(&self) {
        let bytes = match serde_json::to_vec(&self.records) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(err = %e, "failed to encode achievements — skipping save");
                return;
            }
        };
        if let Err(e) = self.store.put(&self.blob_name, &bytes) {
            warn!(err = %e, "failed to persist achievements");
        }
    }

    /// Discard the persisted blob, rebuild every record from the catalog as
    /// locked with zero progress, and clear the unlock-notification state.
    pub fn reset(&mut self) {
        if let Err(e) = self.store.remove(&self.blob_name) {
            warn!(err = %e, "failed to discard persisted achievements");
        }
        self.records = fresh(&self.definitions);
        self.last_unlocked = None;
        self.unlock_pending = false;
        self.save();
        info!("achievement ledger reset");
    }

    // ─── Derived queries ──────────────────────────────────────────────────────

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn unlocked_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_unlocked).count()
    }

    /// Unlocked share in `0.0..=1.0`. An empty ledger reports `0.0`.
    pub fn unlocked_fraction(&self) -> f32 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.unlocked_count() as f32 / self.records.len() as f32
    }

    /// All records, in catalog order.
    pub fn records(&self) -> &[AchievementRecord] {
        &self.records
    }

    pub fn record(&self, key: &str) -> Option<&AchievementRecord> {
        self.records.iter().find(|r| r.key == key)
    }

    /// Records grouped by category. Groups keep the first-seen order of the
    /// underlying sequence, so the achievements screen is stable across
    /// calls.
    pub fn by_category(&self) -> Vec<(AchievementCategory, Vec<&AchievementRecord>)> {
        let mut groups: Vec<(AchievementCategory, Vec<&AchievementRecord>)> = Vec::new();
        for record in &self.records {
            match groups.iter_mut().find(|(cat, _)| *cat == record.category) {
                Some((_, members)) => members.push(record),
                None => groups.push((record.category, vec![record])),
            }
        }
        groups
    }

    /// The most recently unlocked record, for the celebratory banner.
    pub fn last_unlocked(&self) -> Option<&AchievementRecord> {
        let key = self.last_unlocked.as_deref()?;
        self.record(key)
    }

    /// True while an unlock banner is waiting to be shown.
    pub fn has_pending_unlock(&self) -> bool {
        self.unlock_pending
    }

    /// Clear the pending-unlock flag. Called by the UI layer after it has
    /// presented the banner; the last-unlocked pointer stays readable.
    pub fn acknowledge_unlock(&mut self) {
        self.unlock_pending = false;
    }
}

// ─── Merge-on-load ────────────────────────────────────────────────────────────

fn fresh(definitions: &[AchievementDefinition]) -> Vec<AchievementRecord> {
    definitions.iter().map(AchievementRecord::from_definition).collect()
}

/// Reconcile persisted records against the current catalog. Static fields
/// (name, description, category, threshold, reward) always come from the
/// catalog so edits take effect on existing installs; only the player's
/// dynamic state (progress, unlock flag, timestamp) survives from disk.
/// Keys the catalog no longer defines are dropped, and the output order is
/// catalog order.
///
/// The merge is a field copy: a record whose persisted progress already
/// meets a newly lowered threshold stays locked until the next
/// `report_progress` call for its key.
fn merge(
    definitions: &[AchievementDefinition],
    persisted: Vec<AchievementRecord>,
) -> Vec<AchievementRecord> {
    definitions
        .iter()
        .map(|def| {
            let mut record = AchievementRecord::from_definition(def);
            if let Some(saved) = persisted.iter().find(|r| r.key == def.key) {
                record.progress = saved.progress;
                record.is_unlocked = saved.is_unlocked;
                record.unlocked_at = saved.unlocked_at;
            }
            record
        })
        .collect()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
