//! Persistence bridge: one-way mirror between in-memory state slices and the
//! durable snapshot store.
//!
//! Rehydration happens once at boot; every later slice change is written
//! through. Neither direction is allowed to fail the caller: unreadable or
//! unparseable snapshots fall back to defaults, and failed writes are logged
//! and swallowed. There is no schema versioning, so a shape change requires
//! clearing the durable store.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::identity::Identity;
use crate::domain::ports::{SnapshotKey, SnapshotStore};
use crate::domain::profile::AdminProfile;
use crate::domain::settings::SystemSettings;

/// The four state slices as read back at boot.
#[derive(Debug, Clone)]
pub struct RehydratedState {
    /// The persisted session, when one was stored and parseable.
    pub current: Option<Identity>,
    /// The persisted roster, or the seed roster.
    pub roster: Vec<Identity>,
    /// The persisted profile, or its default.
    pub profile: AdminProfile,
    /// The persisted settings, or their defaults.
    pub settings: SystemSettings,
}

/// Write-through mirror over a [`SnapshotStore`].
#[derive(Clone)]
pub struct PersistenceBridge {
    store: Arc<dyn SnapshotStore>,
}

impl PersistenceBridge {
    /// Wrap a snapshot store.
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// Read all four slices, substituting defaults where the store has
    /// nothing usable. `seed_roster` is the caller-supplied roster default.
    pub fn rehydrate(&self, seed_roster: Vec<Identity>) -> RehydratedState {
        RehydratedState {
            current: self
                .load_slice::<Option<Identity>>(SnapshotKey::CurrentIdentity)
                .flatten(),
            roster: self
                .load_slice(SnapshotKey::Roster)
                .unwrap_or(seed_roster),
            profile: self
                .load_slice(SnapshotKey::AdminProfile)
                .unwrap_or_default(),
            settings: self
                .load_slice(SnapshotKey::SystemSettings)
                .unwrap_or_default(),
        }
    }

    /// Persist the current-session slice.
    pub fn persist_current(&self, current: Option<&Identity>) {
        self.persist_slice(SnapshotKey::CurrentIdentity, &current);
    }

    /// Persist the roster slice.
    pub fn persist_roster(&self, roster: &[Identity]) {
        self.persist_slice(SnapshotKey::Roster, &roster);
    }

    /// Persist the admin-profile slice.
    pub fn persist_profile(&self, profile: &AdminProfile) {
        self.persist_slice(SnapshotKey::AdminProfile, profile);
    }

    /// Persist the system-settings slice.
    pub fn persist_settings(&self, settings: &SystemSettings) {
        self.persist_slice(SnapshotKey::SystemSettings, settings);
    }

    fn load_slice<T: DeserializeOwned>(&self, key: SnapshotKey) -> Option<T> {
        let payload = match self.store.read(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(error) => {
                warn!(key = %key, %error, "snapshot read failed; using default");
                return None;
            }
        };
        match serde_json::from_str(&payload) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(key = %key, %error, "snapshot parse failed; using default");
                None
            }
        }
    }

    fn persist_slice<T: Serialize>(&self, key: SnapshotKey, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(key = %key, %error, "snapshot serialization failed; slice not persisted");
                return;
            }
        };
        if let Err(error) = self.store.write(key, &payload) {
            warn!(key = %key, %error, "snapshot write failed; slice not persisted");
        }
    }
}
