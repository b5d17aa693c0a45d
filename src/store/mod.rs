// SPDX-License-Identifier: MIT
//! Blob store seam — opaque named byte blobs.
//!
//! The ledger persists through this interface and treats it as
//! fire-and-forget; hosts substitute their own backend by implementing
//! [`BlobStore`]. Two implementations ship here: [`FileStore`] for devices
//! and [`MemoryStore`] for tests and ephemeral preview profiles.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

mod memory;
pub use memory::MemoryStore;

// ─── Errors ───────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("blob i/o failed: {0}")]
    Io(#[from] io::Error),

    /// Blob names become file names in [`FileStore`]; anything that could
    /// escape the data directory is rejected.
    #[error("invalid blob name {0:?}")]
    InvalidName(String),
}

// ─── Trait ────────────────────────────────────────────────────────────────────

/// Get/set/remove byte blobs by name.
pub trait BlobStore: Send {
    /// Read a named blob. Absence and read failure both yield `None`.
    fn get(&self, name: &str) -> Option<Vec<u8>>;

    /// Write a named blob, replacing any previous contents.
    fn put(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Delete a named blob. Removing a blob that does not exist is not an
    /// error.
    fn remove(&self, name: &str) -> Result<(), StoreError>;
}

// ─── FileStore ────────────────────────────────────────────────────────────────

/// One file per blob name under a data directory. The directory is created
/// on first write.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        let valid = !name.is_empty()
            && name != "."
            && name != ".."
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.');
        if !valid {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(name))
    }
}

impl BlobStore for FileStore {
    fn get(&self, name: &str) -> Option<Vec<u8>> {
        let path = self.path_for(name).ok()?;
        fs::read(path).ok()
    }

    fn put(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "blob written");
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), StoreError> {
        let path = self.path_for(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_roundtrip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());

        assert!(store.get("progress").is_none());
        store.put("progress", b"\x01\x02\x03").unwrap();
        assert_eq!(store.get("progress").unwrap(), b"\x01\x02\x03");

        store.remove("progress").unwrap();
        assert!(store.get("progress").is_none());
    }

    #[test]
    fn file_store_creates_missing_data_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("nested").join("data"));
        store.put("blob", b"ok").unwrap();
        assert_eq!(store.get("blob").unwrap(), b"ok");
    }

    #[test]
    fn remove_missing_blob_is_not_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        assert!(store.remove("never_written").is_ok());
    }

    #[test]
    fn path_traversal_names_are_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        assert!(matches!(
            store.put("../escape", b"x"),
            Err(StoreError::InvalidName(_))
        ));
        assert!(store.get("../escape").is_none());
    }
}
