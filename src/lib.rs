// SPDX-License-Identifier: MIT
//! Questline Core — the achievement subsystem of the Questline companion
//! apps. Quests map to real-world tasks; this crate tracks the progress the
//! host reports, unlocks achievements exactly once, and hands reward
//! payloads back as events. Rendering, story content, and reward delivery
//! stay in the host.
//!
//! ```
//! use questline_core::store::MemoryStore;
//! use questline_core::{AchievementLedger, ProgressEvent};
//!
//! let mut ledger = AchievementLedger::load(Box::new(MemoryStore::new()), "achievements");
//! let unlocks = ledger.apply(&ProgressEvent::QuestCompleted { total_quests: 1 });
//! assert_eq!(unlocks[0].key, "first_quest");
//! ```

pub mod achievements;
pub mod config;
pub mod observability;
pub mod store;

pub use achievements::ledger::AchievementLedger;
pub use achievements::model::{
    AchievementCategory, AchievementDefinition, AchievementRecord, Reward, RewardKind, Unlock,
};
pub use achievements::signals::ProgressEvent;
pub use config::CoreConfig;

use anyhow::{Context as _, Result};

use store::FileStore;

/// Explicitly constructed application state. The host builds one of these at
/// startup and passes it (by reference or ownership) to whichever component
/// needs the ledger — there is no process-wide shared instance.
pub struct CoreContext {
    pub config: CoreConfig,
    pub ledger: AchievementLedger,
}

impl CoreContext {
    /// Wire config → file store → ledger. Creates the data directory if it
    /// does not exist yet.
    pub fn initialize(config: CoreConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir).with_context(|| {
            format!("creating data directory {}", config.data_dir.display())
        })?;

        let store = FileStore::new(&config.data_dir);
        let ledger = AchievementLedger::load(Box::new(store), config.ledger.blob_name.clone());
        Ok(Self { config, ledger })
    }

    /// Final best-effort flush. The ledger already saves on every unlock, so
    /// this only matters for progress reported since the last unlock.
    pub fn shutdown(&self) {
        self.ledger.save();
    }
}
