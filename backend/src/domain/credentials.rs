//! Credential primitives shared by login and signup.
//!
//! Keep raw password handling out of the rest of the domain: callers turn a
//! password into a [`CredentialFingerprint`] as early as possible, and only
//! the fingerprint is stored on the roster.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Domain error returned when credential inputs are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialValidationError {
    /// Password was empty.
    EmptyPassword,
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// A validated raw password held only for the duration of one operation.
///
/// ## Invariants
/// - Non-empty; caller-provided whitespace is preserved to avoid surprising
///   credential comparisons.
///
/// # Examples
/// ```
/// use complaint_desk::domain::PasswordInput;
///
/// let password = PasswordInput::new("admin123").unwrap();
/// assert!(password.fingerprint().matches(&password));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordInput(Zeroizing<String>);

impl PasswordInput {
    /// Construct a password from raw input.
    pub fn new(password: impl Into<String>) -> Result<Self, CredentialValidationError> {
        let password = password.into();
        if password.is_empty() {
            return Err(CredentialValidationError::EmptyPassword);
        }
        Ok(Self(Zeroizing::new(password)))
    }

    /// Derive the stored fingerprint for this password.
    pub fn fingerprint(&self) -> CredentialFingerprint {
        CredentialFingerprint::of(self.0.as_str())
    }
}

/// SHA-256 fingerprint of a password, hex encoded.
///
/// The roster stores fingerprints rather than a separate credential table so
/// signup and login always consult the same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialFingerprint(String);

impl CredentialFingerprint {
    fn of(password: &str) -> Self {
        let digest = Sha256::digest(password.as_bytes());
        Self(hex::encode(digest))
    }

    /// Whether the supplied password hashes to this fingerprint.
    pub fn matches(&self, password: &PasswordInput) -> bool {
        Self::of(password.0.as_str()) == *self
    }
}

impl AsRef<str> for CredentialFingerprint {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
