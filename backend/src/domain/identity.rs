//! Identity data model and the seeded roster.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::credentials::{CredentialFingerprint, PasswordInput};

/// Email of the seeded administrator identity.
pub const SEED_ADMIN_EMAIL: &str = "admin@sits.edu.in";
/// Email of the seeded student identity.
pub const SEED_STUDENT_EMAIL: &str = "student@sits.edu.in";
/// Demo password for the seeded administrator identity.
pub const SEED_ADMIN_PASSWORD: &str = "admin123";
/// Demo password for the seeded student identity.
pub const SEED_STUDENT_PASSWORD: &str = "student123";

/// Validation errors returned by identity constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityValidationError {
    EmptyId,
    EmptyEmail,
    InvalidEmail,
    EmptyName,
}

impl fmt::Display for IdentityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "identity id must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => {
                write!(f, "email must contain a local part and a domain separated by '@'")
            }
            Self::EmptyName => write!(f, "name must not be empty"),
        }
    }
}

impl std::error::Error for IdentityValidationError {}

/// Account role scoping which screens and operations an identity may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Complaint submitters.
    Student,
    /// Complaint handlers and settings owners.
    Admin,
}

impl Role {
    /// Lowercase name used in generated ids and log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identity identifier.
///
/// Ids are opaque strings; synthesized ones follow `<role>-<millis>` and the
/// seeds keep the original fixed ids (`admin-1`, `student-1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityId(String);

impl IdentityId {
    /// Validate and construct an [`IdentityId`].
    pub fn new(id: impl Into<String>) -> Result<Self, IdentityValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(IdentityValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Synthesize an id for a fresh signup.
    ///
    /// Not guaranteed globally unique across rapid calls within the same
    /// millisecond; the roster tolerates this because lookup is by email.
    pub fn synthesize(role: Role, at: DateTime<Utc>) -> Self {
        Self(format!("{role}-{}", at.timestamp_millis()))
    }
}

impl AsRef<str> for IdentityId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<IdentityId> for String {
    fn from(value: IdentityId) -> Self {
        value.0
    }
}

impl TryFrom<String> for IdentityId {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated email address, unique within the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from raw input.
    ///
    /// The input is trimmed; comparisons stay case-sensitive to match the
    /// roster's storage semantics.
    pub fn new(email: impl AsRef<str>) -> Result<Self, IdentityValidationError> {
        let trimmed = email.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IdentityValidationError::EmptyEmail);
        }
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(IdentityValidationError::InvalidEmail);
        };
        if local.is_empty() || domain.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(IdentityValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Input payload for [`Identity::new`].
#[derive(Debug, Clone)]
pub struct IdentityDraft {
    pub id: IdentityId,
    pub email: EmailAddress,
    pub name: String,
    pub role: Role,
    pub roll_number: Option<String>,
    pub department: Option<String>,
    pub created_at: DateTime<Utc>,
    pub credential: CredentialFingerprint,
}

/// A user account on the roster.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - `email` is unique within the roster (enforced by the session store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IdentityDto", into = "IdentityDto")]
pub struct Identity {
    id: IdentityId,
    email: EmailAddress,
    name: String,
    role: Role,
    roll_number: Option<String>,
    department: Option<String>,
    created_at: DateTime<Utc>,
    credential: CredentialFingerprint,
}

impl Identity {
    /// Build a validated [`Identity`] from a draft.
    pub fn new(draft: IdentityDraft) -> Result<Self, IdentityValidationError> {
        if draft.name.trim().is_empty() {
            return Err(IdentityValidationError::EmptyName);
        }
        Ok(Self {
            id: draft.id,
            email: draft.email,
            name: draft.name,
            role: draft.role,
            roll_number: draft.roll_number,
            department: draft.department,
            created_at: draft.created_at,
            credential: draft.credential,
        })
    }

    /// Stable identifier.
    pub fn id(&self) -> &IdentityId {
        &self.id
    }

    /// Roster-unique email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Account role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Student roll number, when supplied at signup.
    pub fn roll_number(&self) -> Option<&str> {
        self.roll_number.as_deref()
    }

    /// Department, when supplied at signup.
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Stored credential fingerprint.
    pub fn credential(&self) -> &CredentialFingerprint {
        &self.credential
    }

    /// Whether the supplied password and role authenticate this identity.
    pub fn authenticates(&self, password: &PasswordInput, role: Role) -> bool {
        self.role == role && self.credential.matches(password)
    }

    /// The two identities every roster starts with.
    ///
    /// Rehydration substitutes this set whenever the persisted roster is
    /// absent or unparseable, so a fresh or corrupted store always boots into
    /// a usable demo state.
    pub fn seed_roster(now: DateTime<Utc>) -> Vec<Self> {
        vec![
            seed(
                "admin-1",
                SEED_ADMIN_EMAIL,
                "Admin User",
                Role::Admin,
                None,
                Some("Administration"),
                now,
                SEED_ADMIN_PASSWORD,
            ),
            seed(
                "student-1",
                SEED_STUDENT_EMAIL,
                "Student User",
                Role::Student,
                Some("SITS2024001"),
                Some("Computer Science Engineering"),
                now,
                SEED_STUDENT_PASSWORD,
            ),
        ]
    }
}

#[expect(clippy::too_many_arguments, reason = "internal seed helper")]
fn seed(
    id: &str,
    email: &str,
    name: &str,
    role: Role,
    roll_number: Option<&str>,
    department: Option<&str>,
    now: DateTime<Utc>,
    password: &str,
) -> Identity {
    let draft = (|| -> Result<IdentityDraft, Box<dyn std::error::Error>> {
        Ok(IdentityDraft {
            id: IdentityId::new(id)?,
            email: EmailAddress::new(email)?,
            name: name.to_owned(),
            role,
            roll_number: roll_number.map(str::to_owned),
            department: department.map(str::to_owned),
            created_at: now,
            credential: PasswordInput::new(password)?.fingerprint(),
        })
    })();
    match draft.and_then(|parts| Identity::new(parts).map_err(Into::into)) {
        Ok(identity) => identity,
        Err(err) => panic!("seed identity must satisfy validation: {err}"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityDto {
    id: String,
    email: String,
    name: String,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    roll_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    department: Option<String>,
    #[serde(alias = "created_at")]
    created_at: DateTime<Utc>,
    credential: CredentialFingerprint,
}

impl From<Identity> for IdentityDto {
    fn from(value: Identity) -> Self {
        let Identity {
            id,
            email,
            name,
            role,
            roll_number,
            department,
            created_at,
            credential,
        } = value;
        Self {
            id: id.into(),
            email: email.into(),
            name,
            role,
            roll_number,
            department,
            created_at,
            credential,
        }
    }
}

impl TryFrom<IdentityDto> for Identity {
    type Error = IdentityValidationError;

    fn try_from(value: IdentityDto) -> Result<Self, Self::Error> {
        Identity::new(IdentityDraft {
            id: IdentityId::new(value.id)?,
            email: EmailAddress::new(value.email)?,
            name: value.name,
            role: value.role,
            roll_number: value.roll_number,
            department: value.department,
            created_at: value.created_at,
            credential: value.credential,
        })
    }
}

#[cfg(test)]
mod tests;
