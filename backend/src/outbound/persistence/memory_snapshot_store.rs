//! In-memory snapshot store.
//!
//! Backs tests and offline runs where nothing should touch the filesystem.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::ports::{SnapshotKey, SnapshotStore, SnapshotStoreError};

/// Snapshot store keeping payloads in a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    entries: Mutex<HashMap<SnapshotKey, String>>,
}

impl MemorySnapshotStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given payloads.
    pub fn with_entries(entries: impl IntoIterator<Item = (SnapshotKey, String)>) -> Self {
        Self {
            entries: Mutex::new(entries.into_iter().collect()),
        }
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn read(&self, key: SnapshotKey) -> Result<Option<String>, SnapshotStoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| SnapshotStoreError::unavailable("snapshot map poisoned"))?;
        Ok(entries.get(&key).cloned())
    }

    fn write(&self, key: SnapshotKey, payload: &str) -> Result<(), SnapshotStoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| SnapshotStoreError::unavailable("snapshot map poisoned"))?;
        entries.insert(key, payload.to_owned());
        Ok(())
    }
}
