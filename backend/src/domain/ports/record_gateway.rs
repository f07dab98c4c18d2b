//! Port for the remote record collaborator.
//!
//! The gateway is an opaque, possibly-failing dependency: every operation may
//! error, and the record store degrades to local-only state when one does.

use async_trait::async_trait;

use crate::domain::complaint::Complaint;
use crate::domain::feedback::Feedback;

/// Errors raised by record gateway adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordGatewayError {
    /// The request never produced a usable response.
    #[error("record gateway transport failed: {message}")]
    Transport { message: String },
    /// The request exceeded the adapter's deadline.
    #[error("record gateway timed out: {message}")]
    Timeout { message: String },
    /// The response arrived but could not be decoded.
    #[error("record gateway response invalid: {message}")]
    Decode { message: String },
    /// The collaborator refused the request.
    #[error("record gateway rejected request (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

impl RecordGatewayError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}

/// Port consumed by the record store for remote fetches and saves.
///
/// Save operations return the collaborator's canonical copy of the record;
/// the store prepends that copy rather than its local draft when the save
/// succeeds.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordGateway: Send + Sync {
    /// Fetch the full complaint collection, newest first.
    async fn fetch_complaints(&self) -> Result<Vec<Complaint>, RecordGatewayError>;

    /// Fetch the full feedback collection.
    async fn fetch_feedbacks(&self) -> Result<Vec<Feedback>, RecordGatewayError>;

    /// Persist a complaint and return the stored record.
    async fn save_complaint(&self, complaint: &Complaint)
    -> Result<Complaint, RecordGatewayError>;

    /// Persist a feedback payload and return the stored record.
    async fn save_feedback(&self, feedback: &Feedback) -> Result<Feedback, RecordGatewayError>;
}

/// Fixture implementation for tests and offline operation.
///
/// Fetches return empty collections and saves echo the input back, so the
/// desk behaves as if the collaborator acknowledged everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecordGateway;

#[async_trait]
impl RecordGateway for FixtureRecordGateway {
    async fn fetch_complaints(&self) -> Result<Vec<Complaint>, RecordGatewayError> {
        Ok(Vec::new())
    }

    async fn fetch_feedbacks(&self) -> Result<Vec<Feedback>, RecordGatewayError> {
        Ok(Vec::new())
    }

    async fn save_complaint(
        &self,
        complaint: &Complaint,
    ) -> Result<Complaint, RecordGatewayError> {
        Ok(complaint.clone())
    }

    async fn save_feedback(&self, feedback: &Feedback) -> Result<Feedback, RecordGatewayError> {
        Ok(feedback.clone())
    }
}
