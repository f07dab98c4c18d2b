//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the strongly typed state model of the complaint desk:
//! identities and sessions, complaint and feedback records, the persisted
//! configuration slices, and the ports the model talks through. Keep types
//! validated at construction and document invariants and serialisation
//! contracts (serde) in each type's Rustdoc.

pub mod bridge;
pub mod complaint;
pub mod credentials;
pub mod error;
pub mod feedback;
pub mod identity;
pub mod ports;
pub mod profile;
pub mod records;
pub mod screen;
pub mod session;
pub mod settings;
pub mod stats;

pub use self::bridge::{PersistenceBridge, RehydratedState};
pub use self::complaint::{
    Complaint, ComplaintDraft, ComplaintId, ComplaintStatus, ComplaintValidationError, SyncState,
};
pub use self::credentials::{CredentialFingerprint, CredentialValidationError, PasswordInput};
pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::feedback::Feedback;
pub use self::identity::{
    EmailAddress, Identity, IdentityDraft, IdentityId, IdentityValidationError, Role,
};
pub use self::profile::AdminProfile;
pub use self::records::RecordStore;
pub use self::screen::{AuthScreen, Screen, ViewState};
pub use self::session::{SessionStore, SignupDraft};
pub use self::settings::{BackupFrequency, SystemSettings};
pub use self::stats::ComplaintTally;

/// Convenient result alias for desk operations.
pub type DeskResult<T> = Result<T, DomainError>;
