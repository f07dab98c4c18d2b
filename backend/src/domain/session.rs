//! Session store: the roster of known identities and the current session.
//!
//! Authentication is a single roster lookup: each identity carries its own
//! credential fingerprint, so signup and login can never fall out of sync
//! with a separate credential table.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::credentials::PasswordInput;
use crate::domain::identity::{EmailAddress, Identity, IdentityDraft, IdentityId, Role};

/// Signup form input.
#[derive(Debug, Clone)]
pub struct SignupDraft {
    pub email: EmailAddress,
    pub name: String,
    pub role: Role,
    pub password: PasswordInput,
    pub roll_number: Option<String>,
    pub department: Option<String>,
}

/// Holds the current authenticated identity and the roster.
///
/// All outcomes are reported through return values; persistence of the
/// mutated slices is the composition root's concern.
#[derive(Debug, Clone)]
pub struct SessionStore {
    roster: Vec<Identity>,
    current: Option<Identity>,
}

impl SessionStore {
    /// Build a store from rehydrated state.
    pub const fn new(roster: Vec<Identity>, current: Option<Identity>) -> Self {
        Self { roster, current }
    }

    /// The currently authenticated identity, when one exists.
    pub const fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Every known identity, in insertion order.
    pub fn roster(&self) -> &[Identity] {
        &self.roster
    }

    /// Look up a roster entry by email.
    pub fn find_by_email(&self, email: &EmailAddress) -> Option<&Identity> {
        self.roster.iter().find(|identity| identity.email() == email)
    }

    /// Authenticate against the roster.
    ///
    /// Succeeds only when an identity with `email` exists, the password's
    /// fingerprint matches its stored credential, and `role` equals its
    /// role. Failure reasons are deliberately indistinguishable to the
    /// caller.
    pub fn login(&mut self, email: &EmailAddress, password: &PasswordInput, role: Role) -> bool {
        let Some(identity) = self
            .roster
            .iter()
            .find(|identity| identity.email() == email && identity.authenticates(password, role))
        else {
            debug!(email = %email, "login rejected");
            return false;
        };
        self.current = Some(identity.clone());
        true
    }

    /// Register a new identity and make it current.
    ///
    /// Returns `false` without touching the roster when the email is already
    /// taken.
    pub fn signup(&mut self, draft: SignupDraft, now: DateTime<Utc>) -> bool {
        if self.find_by_email(&draft.email).is_some() {
            debug!(email = %draft.email, "signup rejected: email already registered");
            return false;
        }

        let identity = Identity::new(IdentityDraft {
            id: IdentityId::synthesize(draft.role, now),
            email: draft.email,
            name: draft.name,
            role: draft.role,
            roll_number: draft.roll_number,
            department: draft.department,
            created_at: now,
            credential: draft.password.fingerprint(),
        });
        let Ok(identity) = identity else {
            debug!("signup rejected: draft failed validation");
            return false;
        };

        self.roster.push(identity.clone());
        self.current = Some(identity);
        true
    }

    /// Whether a password reset could be initiated for `email`.
    ///
    /// No reset is actually performed; the desk only reports whether the
    /// address is known, exactly like the original flow.
    pub fn forgot_password(&self, email: &EmailAddress) -> bool {
        let known = self.find_by_email(email).is_some();
        debug!(email = %email, known, "password reset requested; delivery not implemented");
        known
    }

    /// Clear the current identity.
    pub fn logout(&mut self) {
        self.current = None;
    }
}
