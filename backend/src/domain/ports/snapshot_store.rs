//! Port for the durable local key-value snapshot store.
//!
//! The store holds one serialized snapshot per state slice. Adapters decide
//! where the payloads live (files, memory); the bridge decides what goes in
//! them.

use std::fmt;

/// Well-known keys, one per persisted state slice.
///
/// The names keep the original deployment's `sits-` prefix so operators can
/// correlate snapshots across implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotKey {
    /// The currently authenticated identity, or null.
    CurrentIdentity,
    /// The full roster of known identities.
    Roster,
    /// The administrator contact card.
    AdminProfile,
    /// Institution-wide settings.
    SystemSettings,
}

impl SnapshotKey {
    /// Every persisted slice, in rehydration order.
    pub const ALL: [Self; 4] = [
        Self::CurrentIdentity,
        Self::Roster,
        Self::AdminProfile,
        Self::SystemSettings,
    ];

    /// Durable key string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CurrentIdentity => "sits-current-user",
            Self::Roster => "sits-users",
            Self::AdminProfile => "sits-admin-profile",
            Self::SystemSettings => "sits-system-settings",
        }
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by snapshot store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotStoreError {
    /// The backing storage could not be opened.
    #[error("snapshot store unavailable: {message}")]
    Unavailable { message: String },
    /// A read or write failed during execution.
    #[error("snapshot store i/o failed: {message}")]
    Io { message: String },
}

impl SnapshotStoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

/// Port for reading and writing serialized slice snapshots.
///
/// Reads happen once at boot; writes happen on every observed slice change.
/// Both are synchronous: the durable store this models is a local
/// constant-time key-value surface, not a remote service.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotStore: Send + Sync {
    /// Fetch the stored payload for `key`, `None` when absent.
    fn read(&self, key: SnapshotKey) -> Result<Option<String>, SnapshotStoreError>;

    /// Store `payload` under `key`, replacing any previous value.
    fn write(&self, key: SnapshotKey, payload: &str) -> Result<(), SnapshotStoreError>;
}

/// Fixture implementation for tests that don't exercise persistence.
///
/// Reads always miss and writes are discarded, so every boot looks like a
/// first boot.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSnapshotStore;

impl SnapshotStore for FixtureSnapshotStore {
    fn read(&self, _key: SnapshotKey) -> Result<Option<String>, SnapshotStoreError> {
        Ok(None)
    }

    fn write(&self, _key: SnapshotKey, _payload: &str) -> Result<(), SnapshotStoreError> {
        Ok(())
    }
}
