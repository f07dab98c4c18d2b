//! Composition root: wires the session store, persistence bridge, record
//! store, and view state into one event-driven desk.
//!
//! All mutations run through `&mut self` on a single event flow; gateway
//! calls may suspend the caller but nothing else runs concurrently with
//! them.

use std::sync::Arc;

use mockable::Clock;
use tracing::info;

use crate::domain::bridge::PersistenceBridge;
use crate::domain::complaint::{ComplaintDraft, ComplaintId, ComplaintStatus};
use crate::domain::credentials::PasswordInput;
use crate::domain::error::DomainError;
use crate::domain::feedback::Feedback;
use crate::domain::identity::{EmailAddress, Identity, Role};
use crate::domain::ports::{DeletePrompt, RecordGateway, SnapshotStore};
use crate::domain::profile::AdminProfile;
use crate::domain::records::RecordStore;
use crate::domain::screen::{AuthScreen, Screen, ViewState};
use crate::domain::session::{SessionStore, SignupDraft};
use crate::domain::settings::SystemSettings;
use crate::domain::stats::ComplaintTally;

/// The assembled complaint desk.
pub struct ComplaintDesk {
    session: SessionStore,
    records: RecordStore,
    view: ViewState,
    profile: AdminProfile,
    settings: SystemSettings,
    bridge: PersistenceBridge,
    clock: Arc<dyn Clock>,
}

impl ComplaintDesk {
    /// Boot the desk: rehydrate the persisted slices and, when a session is
    /// already present, load the record collections from the gateway.
    pub async fn boot(
        store: Arc<dyn SnapshotStore>,
        gateway: Arc<dyn RecordGateway>,
        prompt: Arc<dyn DeletePrompt>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let bridge = PersistenceBridge::new(store);
        let state = bridge.rehydrate(Identity::seed_roster(clock.utc()));
        info!(
            roster = state.roster.len(),
            authenticated = state.current.is_some(),
            "state rehydrated"
        );

        let mut desk = Self {
            session: SessionStore::new(state.roster, state.current),
            records: RecordStore::new(gateway, prompt, Arc::clone(&clock)),
            view: ViewState::new(),
            profile: state.profile,
            settings: state.settings,
            bridge,
            clock,
        };
        if desk.session.current().is_some() {
            desk.records.load_complaints().await;
            desk.records.load_feedbacks().await;
        }
        desk
    }

    /// Session store, read-only.
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Record store, read-only.
    pub const fn records(&self) -> &RecordStore {
        &self.records
    }

    /// View state, read-only.
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Administrator contact card.
    pub const fn profile(&self) -> &AdminProfile {
        &self.profile
    }

    /// Institution-wide settings.
    pub const fn settings(&self) -> &SystemSettings {
        &self.settings
    }

    /// Status tallies for the dashboard screens.
    pub fn tally(&self) -> ComplaintTally {
        self.records.tally()
    }

    /// Authenticate and, on success, persist the session and load the
    /// record collections.
    ///
    /// Malformed input fails like any other bad credential: with a plain
    /// `false`.
    pub async fn login(&mut self, email: &str, password: &str, role: Role) -> bool {
        let Ok(email) = EmailAddress::new(email) else {
            return false;
        };
        let Ok(password) = PasswordInput::new(password) else {
            return false;
        };
        if !self.session.login(&email, &password, role) {
            return false;
        }

        self.bridge.persist_current(self.session.current());
        self.view.reset();
        self.records.load_complaints().await;
        self.records.load_feedbacks().await;
        true
    }

    /// Register a new identity; persists the roster and session on success.
    pub fn signup(&mut self, draft: SignupDraft) -> bool {
        if !self.session.signup(draft, self.clock.utc()) {
            return false;
        }
        self.bridge.persist_roster(self.session.roster());
        self.bridge.persist_current(self.session.current());
        self.view.reset();
        true
    }

    /// Whether a password reset could be initiated for `email`.
    pub fn forgot_password(&self, email: &str) -> bool {
        EmailAddress::new(email)
            .is_ok_and(|email| self.session.forgot_password(&email))
    }

    /// Clear the session, return the view to its defaults, and persist the
    /// now-empty session slice.
    pub fn logout(&mut self) {
        self.session.logout();
        self.view.reset();
        self.bridge.persist_current(None);
    }

    /// Move to `screen` under the current identity's role.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a session; `Forbidden` when the role's
    /// transition table rejects the screen.
    pub fn navigate(&mut self, screen: Screen) -> Result<(), DomainError> {
        let identity = self
            .session
            .current()
            .ok_or_else(|| DomainError::unauthorized("no active session"))?;
        self.view.navigate(screen, identity.role())
    }

    /// Flip the notification panel.
    pub const fn toggle_notifications(&mut self) {
        self.view.toggle_notifications();
    }

    /// Switch the pre-authentication form.
    pub const fn show_auth(&mut self, auth_screen: AuthScreen) {
        self.view.show_auth(auth_screen);
    }

    /// Submit a complaint as the current student.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a session; `Forbidden` for non-student roles.
    pub async fn submit_complaint(
        &mut self,
        draft: ComplaintDraft,
    ) -> Result<ComplaintId, DomainError> {
        self.require_role(Role::Student)?;
        Ok(self.records.submit(draft).await)
    }

    /// Submit feedback as the current student.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a session; `Forbidden` for non-student roles.
    pub async fn submit_feedback(&mut self, feedback: Feedback) -> Result<(), DomainError> {
        self.require_role(Role::Student)?;
        self.records.submit_feedback(feedback).await;
        Ok(())
    }

    /// Update a complaint's status as the current administrator.
    ///
    /// Returns whether a record changed.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a session; `Forbidden` for non-admin roles.
    pub fn update_complaint_status(
        &mut self,
        id: &ComplaintId,
        status: ComplaintStatus,
    ) -> Result<bool, DomainError> {
        self.require_role(Role::Admin)?;
        Ok(self.records.update_status(id, status))
    }

    /// Delete a complaint as the current administrator, behind the
    /// confirmation prompt.
    ///
    /// Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a session; `Forbidden` for non-admin roles.
    pub fn delete_complaint(&mut self, id: &ComplaintId) -> Result<bool, DomainError> {
        self.require_role(Role::Admin)?;
        Ok(self.records.delete(id))
    }

    /// Replace the administrator profile wholesale and persist it.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a session; `Forbidden` for non-admin roles.
    pub fn update_profile(&mut self, profile: AdminProfile) -> Result<(), DomainError> {
        self.require_role(Role::Admin)?;
        self.profile = profile;
        self.bridge.persist_profile(&self.profile);
        Ok(())
    }

    /// Replace the system settings wholesale and persist them.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a session; `Forbidden` for non-admin roles.
    pub fn update_settings(&mut self, settings: SystemSettings) -> Result<(), DomainError> {
        self.require_role(Role::Admin)?;
        self.settings = settings;
        self.bridge.persist_settings(&self.settings);
        Ok(())
    }

    fn require_role(&self, role: Role) -> Result<(), DomainError> {
        let identity = self
            .session
            .current()
            .ok_or_else(|| DomainError::unauthorized("no active session"))?;
        if identity.role() != role {
            return Err(DomainError::forbidden(format!(
                "operation requires the {role} role"
            )));
        }
        Ok(())
    }
}
