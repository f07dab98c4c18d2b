//! File-backed snapshot store.
//!
//! One JSON file per snapshot key inside a capability-scoped directory.
//! Writes go through a staging file that is renamed over the final name, so
//! a crash mid-write never leaves a half-written snapshot behind.

use std::io;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

use crate::domain::ports::{SnapshotKey, SnapshotStore, SnapshotStoreError};

/// Snapshot store persisting each slice as `<key>.json` in one directory.
pub struct JsonSnapshotStore {
    dir: Dir,
}

impl JsonSnapshotStore {
    /// Open (creating if needed) the storage directory.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Unavailable`] when the directory cannot
    /// be created or opened.
    pub fn open(path: &Path) -> Result<Self, SnapshotStoreError> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|error| {
            SnapshotStoreError::unavailable(format!(
                "failed to create {}: {error}",
                path.display()
            ))
        })?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(|error| {
            SnapshotStoreError::unavailable(format!("failed to open {}: {error}", path.display()))
        })?;
        Ok(Self { dir })
    }

    fn file_name(key: SnapshotKey) -> String {
        format!("{key}.json")
    }

    fn staging_name(key: SnapshotKey) -> String {
        format!(".tmp-{key}.json")
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn read(&self, key: SnapshotKey) -> Result<Option<String>, SnapshotStoreError> {
        let payload = match self.dir.read(Self::file_name(key)) {
            Ok(payload) => payload,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(SnapshotStoreError::io(format!("read {key}: {error}")));
            }
        };
        String::from_utf8(payload)
            .map(Some)
            .map_err(|error| SnapshotStoreError::io(format!("read {key}: {error}")))
    }

    fn write(&self, key: SnapshotKey, payload: &str) -> Result<(), SnapshotStoreError> {
        let staging = Self::staging_name(key);
        self.dir
            .write(&staging, payload.as_bytes())
            .map_err(|error| SnapshotStoreError::io(format!("stage {key}: {error}")))?;
        self.dir
            .rename(&staging, &self.dir, Self::file_name(key))
            .map_err(|error| SnapshotStoreError::io(format!("replace {key}: {error}")))
    }
}
