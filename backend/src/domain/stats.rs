//! Complaint tallies backing the dashboard and report screens.

use crate::domain::complaint::{Complaint, ComplaintStatus, SyncState};

/// Counts of complaints per workflow status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplaintTally {
    /// Complaints awaiting triage.
    pub pending: usize,
    /// Complaints being handled.
    pub in_progress: usize,
    /// Complaints closed with a resolution.
    pub resolved: usize,
    /// Complaints closed without action.
    pub rejected: usize,
    /// Complaints the remote collaborator has not acknowledged.
    pub unconfirmed: usize,
}

impl ComplaintTally {
    /// Tally a collection of complaints.
    pub fn of<'a>(complaints: impl IntoIterator<Item = &'a Complaint>) -> Self {
        let mut tally = Self::default();
        for complaint in complaints {
            match complaint.status {
                ComplaintStatus::Pending => tally.pending += 1,
                ComplaintStatus::InProgress => tally.in_progress += 1,
                ComplaintStatus::Resolved => tally.resolved += 1,
                ComplaintStatus::Rejected => tally.rejected += 1,
            }
            if complaint.sync == SyncState::LocalOnly {
                tally.unconfirmed += 1;
            }
        }
        tally
    }

    /// Total number of complaints.
    pub const fn total(&self) -> usize {
        self.pending + self.in_progress + self.resolved + self.rejected
    }

    /// Complaints still awaiting an outcome.
    pub const fn open(&self) -> usize {
        self.pending + self.in_progress
    }
}
