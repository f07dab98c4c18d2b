//! Complaint records and their lifecycle status.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::identity::EmailAddress;

/// Validation errors returned by complaint constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplaintValidationError {
    EmptyId,
    EmptyTitle,
    EmptyDescription,
    EmptyCategory,
}

impl fmt::Display for ComplaintValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "complaint id must not be empty"),
            Self::EmptyTitle => write!(f, "complaint title must not be empty"),
            Self::EmptyDescription => write!(f, "complaint description must not be empty"),
            Self::EmptyCategory => write!(f, "complaint category must not be empty"),
        }
    }
}

impl std::error::Error for ComplaintValidationError {}

/// Workflow status of a complaint.
///
/// Serialised names match the wire and display vocabulary of the desk
/// ("In Progress", not "InProgress").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintStatus {
    /// Newly submitted, awaiting triage.
    Pending,
    /// Picked up by an administrator.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Closed with a resolution.
    Resolved,
    /// Closed without action.
    Rejected,
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("Pending"),
            Self::InProgress => f.write_str("In Progress"),
            Self::Resolved => f.write_str("Resolved"),
            Self::Rejected => f.write_str("Rejected"),
        }
    }
}

/// Whether the remote collaborator has acknowledged a record.
///
/// Locally synthesized records that failed to save remotely are kept but
/// marked [`SyncState::LocalOnly`], so divergence is visible instead of
/// silent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SyncState {
    /// The remote collaborator returned this record.
    #[default]
    Confirmed,
    /// The record exists only in this session's memory.
    LocalOnly,
}

/// Complaint identifier, `CMP-<millis>-<suffix>` for synthesized records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComplaintId(String);

impl ComplaintId {
    /// Validate and construct a [`ComplaintId`].
    pub fn new(id: impl Into<String>) -> Result<Self, ComplaintValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ComplaintValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Synthesize an id for a fresh submission.
    ///
    /// Collision probability across suffixes is negligible but not zero; the
    /// desk accepts that for the same reason the original did.
    pub fn synthesize(at: DateTime<Utc>, suffix: &str) -> Self {
        Self(format!("CMP-{}-{suffix}", at.timestamp_millis()))
    }
}

impl AsRef<str> for ComplaintId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ComplaintId> for String {
    fn from(value: ComplaintId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ComplaintId {
    type Error = ComplaintValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Submitter-supplied fields of a complaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintDraft {
    title: String,
    description: String,
    category: String,
    department: Option<String>,
    submitted_by: Option<EmailAddress>,
}

impl ComplaintDraft {
    /// Validate submitter input.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ComplaintValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ComplaintValidationError::EmptyTitle);
        }
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ComplaintValidationError::EmptyDescription);
        }
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ComplaintValidationError::EmptyCategory);
        }
        Ok(Self {
            title,
            description,
            category,
            department: None,
            submitted_by: None,
        })
    }

    /// Attach the submitter's department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Attach the submitter's email.
    #[must_use]
    pub fn with_submitted_by(mut self, email: EmailAddress) -> Self {
        self.submitted_by = Some(email);
        self
    }
}

/// A submitted grievance with a lifecycle status.
///
/// Ordering within the record store is newest-first by insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Generated identifier.
    pub id: ComplaintId,
    /// Short summary supplied by the submitter.
    pub title: String,
    /// Full description supplied by the submitter.
    pub description: String,
    /// Complaint category supplied by the submitter.
    pub category: String,
    /// Submitter's department, when given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Submitter's email, when given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<EmailAddress>,
    /// Generation time of the record.
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
    /// Current workflow status.
    pub status: ComplaintStatus,
    /// Remote acknowledgement marker; absent on the wire means confirmed.
    #[serde(default, skip_serializing)]
    pub sync: SyncState,
}

impl Complaint {
    /// Build the record for a fresh submission: status starts at
    /// [`ComplaintStatus::Pending`] and the sync marker is settled by the
    /// record store once the remote save resolves.
    pub fn submitted(draft: ComplaintDraft, id: ComplaintId, at: DateTime<Utc>) -> Self {
        let ComplaintDraft {
            title,
            description,
            category,
            department,
            submitted_by,
        } = draft;
        Self {
            id,
            title,
            description,
            category,
            department,
            submitted_by,
            created_at: at,
            status: ComplaintStatus::Pending,
            sync: SyncState::LocalOnly,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case("", "desc", "cat", ComplaintValidationError::EmptyTitle)]
    #[case("title", "  ", "cat", ComplaintValidationError::EmptyDescription)]
    #[case("title", "desc", "", ComplaintValidationError::EmptyCategory)]
    fn blank_draft_fields_are_rejected(
        #[case] title: &str,
        #[case] description: &str,
        #[case] category: &str,
        #[case] expected: ComplaintValidationError,
    ) {
        let err =
            ComplaintDraft::new(title, description, category).expect_err("draft must fail");
        assert_eq!(err, expected);
    }

    #[test]
    fn synthesized_ids_embed_millis_and_suffix() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_456).single().expect("valid time");
        let id = ComplaintId::synthesize(at, "a1b2c3");
        assert_eq!(id.as_ref(), "CMP-1700000000456-a1b2c3");
    }

    #[test]
    fn submitted_records_start_pending_and_local_only() {
        let draft = ComplaintDraft::new("Broken projector", "Room 204 projector flickers", "Infrastructure")
            .expect("valid draft")
            .with_department("Computer Science Engineering");
        let at = Utc::now();
        let complaint = Complaint::submitted(draft, ComplaintId::synthesize(at, "zz9yx8"), at);
        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert_eq!(complaint.sync, SyncState::LocalOnly);
        assert_eq!(complaint.created_at, at);
    }

    #[rstest]
    #[case(ComplaintStatus::Pending, "\"Pending\"")]
    #[case(ComplaintStatus::InProgress, "\"In Progress\"")]
    #[case(ComplaintStatus::Resolved, "\"Resolved\"")]
    #[case(ComplaintStatus::Rejected, "\"Rejected\"")]
    fn status_serialises_with_display_names(
        #[case] status: ComplaintStatus,
        #[case] expected: &str,
    ) {
        let json = serde_json::to_string(&status).expect("status serialises");
        assert_eq!(json, expected);
        let restored: ComplaintStatus = serde_json::from_str(expected).expect("status parses");
        assert_eq!(restored, status);
    }

    #[test]
    fn wire_records_without_sync_marker_are_confirmed() {
        let json = r#"{
            "id": "CMP-1700000000456-a1b2c3",
            "title": "Wifi outage",
            "description": "Hostel block B has no connectivity",
            "category": "Network",
            "created_at": "2024-06-01T09:30:00Z",
            "status": "Pending"
        }"#;
        let complaint: Complaint = serde_json::from_str(json).expect("wire record parses");
        assert_eq!(complaint.sync, SyncState::Confirmed);
        assert_eq!(complaint.status, ComplaintStatus::Pending);
    }
}
