//! Domain record store for complaints and feedback.
//!
//! Collections load from the remote gateway at boot and are mutated locally
//! afterward. Saves are optimistic: a failed remote save keeps the local
//! record, marked [`SyncState::LocalOnly`], instead of losing the
//! submission.

use std::sync::Arc;

use mockable::Clock;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng, distributions::Alphanumeric};
use tracing::{debug, warn};

use crate::domain::complaint::{Complaint, ComplaintDraft, ComplaintId, ComplaintStatus, SyncState};
use crate::domain::feedback::Feedback;
use crate::domain::ports::{DeletePrompt, RecordGateway};
use crate::domain::stats::ComplaintTally;

const ID_SUFFIX_LEN: usize = 6;
const DELETE_PROMPT_MESSAGE: &str = "Are you sure you want to delete this complaint?";

/// In-memory complaint and feedback collections plus their remote gateway.
pub struct RecordStore {
    complaints: Vec<Complaint>,
    feedbacks: Vec<Feedback>,
    gateway: Arc<dyn RecordGateway>,
    prompt: Arc<dyn DeletePrompt>,
    clock: Arc<dyn Clock>,
    rng: SmallRng,
}

impl RecordStore {
    /// Build an empty store over the given collaborators.
    pub fn new(
        gateway: Arc<dyn RecordGateway>,
        prompt: Arc<dyn DeletePrompt>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            complaints: Vec::new(),
            feedbacks: Vec::new(),
            gateway,
            prompt,
            clock,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Complaints, newest first.
    pub fn complaints(&self) -> &[Complaint] {
        &self.complaints
    }

    /// Feedback records as loaded or submitted.
    pub fn feedbacks(&self) -> &[Feedback] {
        &self.feedbacks
    }

    /// Status tallies over the current complaint collection.
    pub fn tally(&self) -> ComplaintTally {
        ComplaintTally::of(&self.complaints)
    }

    /// Replace the complaint collection from the gateway.
    ///
    /// On failure the previous collection stays (empty at first boot) and
    /// the error is logged; there is no retry.
    pub async fn load_complaints(&mut self) {
        match self.gateway.fetch_complaints().await {
            Ok(complaints) => {
                debug!(count = complaints.len(), "complaints loaded");
                self.complaints = complaints;
            }
            Err(error) => {
                warn!(%error, "failed to load complaints; keeping previous collection");
            }
        }
    }

    /// Replace the feedback collection from the gateway.
    pub async fn load_feedbacks(&mut self) {
        match self.gateway.fetch_feedbacks().await {
            Ok(feedbacks) => {
                debug!(count = feedbacks.len(), "feedbacks loaded");
                self.feedbacks = feedbacks;
            }
            Err(error) => {
                warn!(%error, "failed to load feedbacks; keeping previous collection");
            }
        }
    }

    /// Submit a complaint: synthesize the record, try to save it remotely,
    /// and prepend exactly one record either way.
    ///
    /// Returns the id now at the head of the collection.
    pub async fn submit(&mut self, draft: ComplaintDraft) -> ComplaintId {
        let now = self.clock.utc();
        let suffix = self.id_suffix();
        let complaint = Complaint::submitted(draft, ComplaintId::synthesize(now, &suffix), now);

        match self.gateway.save_complaint(&complaint).await {
            Ok(mut saved) => {
                saved.sync = SyncState::Confirmed;
                let id = saved.id.clone();
                self.complaints.insert(0, saved);
                id
            }
            Err(error) => {
                warn!(%error, id = %complaint.id, "complaint save failed; keeping local-only record");
                let id = complaint.id.clone();
                self.complaints.insert(0, complaint);
                id
            }
        }
    }

    /// Replace the status of the matching record in place.
    ///
    /// Local-only: the change is not pushed to the gateway and is lost on
    /// the next full reload. Returns whether a record was updated.
    pub fn update_status(&mut self, id: &ComplaintId, status: ComplaintStatus) -> bool {
        match self.complaints.iter_mut().find(|complaint| &complaint.id == id) {
            Some(complaint) => {
                complaint.status = status;
                true
            }
            None => {
                debug!(id = %id, "status update ignored: unknown complaint");
                false
            }
        }
    }

    /// Delete a record after interactive confirmation.
    ///
    /// A declined prompt aborts with no effect. Local-only, like
    /// [`RecordStore::update_status`]. Returns whether a record was removed.
    pub fn delete(&mut self, id: &ComplaintId) -> bool {
        if !self.prompt.confirm(DELETE_PROMPT_MESSAGE) {
            debug!(id = %id, "delete aborted at prompt");
            return false;
        }
        let before = self.complaints.len();
        self.complaints.retain(|complaint| &complaint.id != id);
        before != self.complaints.len()
    }

    /// Submit a feedback payload with the same optimistic degradation as
    /// complaints: the remote copy wins when the save succeeds, the local
    /// payload is kept when it fails.
    pub async fn submit_feedback(&mut self, feedback: Feedback) {
        match self.gateway.save_feedback(&feedback).await {
            Ok(saved) => self.feedbacks.insert(0, saved),
            Err(error) => {
                warn!(%error, "feedback save failed; keeping local-only record");
                self.feedbacks.insert(0, feedback);
            }
        }
    }

    fn id_suffix(&mut self) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(ID_SUFFIX_LEN)
            .map(char::from)
            .collect::<String>()
            .to_lowercase()
    }
}
