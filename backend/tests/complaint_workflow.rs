//! Behavioural tests for the complaint and feedback workflow.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockable::DefaultClock;
use serde_json::json;

use complaint_desk::ComplaintDesk;
use complaint_desk::domain::identity::{
    SEED_ADMIN_EMAIL, SEED_ADMIN_PASSWORD, SEED_STUDENT_EMAIL, SEED_STUDENT_PASSWORD,
};
use complaint_desk::domain::ports::{
    DeletePrompt, FixturePrompt, FixtureRecordGateway, RecordGateway, RecordGatewayError,
};
use complaint_desk::domain::{
    Complaint, ComplaintDraft, ComplaintId, ComplaintStatus, ErrorCode, Feedback, Role, SyncState,
};
use complaint_desk::outbound::persistence::MemorySnapshotStore;

/// Gateway fake that remembers saved records and serves them on fetch, like
/// the real collaborator does across login cycles. Saves can be switched to
/// fail to mirror an outage mid-session.
#[derive(Debug, Default)]
struct RecordingGateway {
    complaints: Mutex<Vec<Complaint>>,
    feedbacks: Mutex<Vec<Feedback>>,
    down: AtomicBool,
}

impl RecordingGateway {
    fn take_down(&self) {
        self.down.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), RecordGatewayError> {
        if self.down.load(Ordering::SeqCst) {
            Err(RecordGatewayError::transport("collaborator unreachable"))
        } else {
            Ok(())
        }
    }

    fn lock<T>(collection: &Mutex<Vec<T>>) -> std::sync::MutexGuard<'_, Vec<T>> {
        collection.lock().expect("gateway fake poisoned")
    }
}

#[async_trait]
impl RecordGateway for RecordingGateway {
    async fn fetch_complaints(&self) -> Result<Vec<Complaint>, RecordGatewayError> {
        self.check()?;
        Ok(Self::lock(&self.complaints).clone())
    }

    async fn fetch_feedbacks(&self) -> Result<Vec<Feedback>, RecordGatewayError> {
        self.check()?;
        Ok(Self::lock(&self.feedbacks).clone())
    }

    async fn save_complaint(&self, complaint: &Complaint) -> Result<Complaint, RecordGatewayError> {
        self.check()?;
        Self::lock(&self.complaints).insert(0, complaint.clone());
        Ok(complaint.clone())
    }

    async fn save_feedback(&self, feedback: &Feedback) -> Result<Feedback, RecordGatewayError> {
        self.check()?;
        Self::lock(&self.feedbacks).insert(0, feedback.clone());
        Ok(feedback.clone())
    }
}

async fn desk_with(
    gateway: Arc<dyn RecordGateway>,
    prompt: Arc<dyn DeletePrompt>,
) -> ComplaintDesk {
    ComplaintDesk::boot(
        Arc::new(MemorySnapshotStore::new()),
        gateway,
        prompt,
        Arc::new(DefaultClock),
    )
    .await
}

fn draft() -> ComplaintDraft {
    ComplaintDraft::new(
        "Projector broken",
        "Room 204 projector flickers and dies",
        "Infrastructure",
    )
    .expect("valid draft")
    .with_department("Computer Science Engineering")
}

#[tokio::test]
async fn students_submit_and_the_record_lands_at_the_head() {
    let mut desk = desk_with(
        Arc::new(FixtureRecordGateway),
        Arc::new(FixturePrompt::approving()),
    )
    .await;
    assert!(
        desk.login(SEED_STUDENT_EMAIL, SEED_STUDENT_PASSWORD, Role::Student)
            .await
    );

    let first = desk.submit_complaint(draft()).await.expect("student submits");
    let second = desk.submit_complaint(draft()).await.expect("student submits");

    let complaints = desk.records().complaints();
    assert_eq!(complaints.len(), 2);
    let head = complaints.first().expect("head record");
    assert_eq!(head.id, second);
    assert_eq!(head.status, ComplaintStatus::Pending);
    assert_eq!(head.sync, SyncState::Confirmed);
    assert!(head.id.as_ref().starts_with("CMP-"));
    assert_ne!(first, second);
}

#[tokio::test]
async fn a_collaborator_outage_keeps_submissions_local_only() {
    let gateway = Arc::new(RecordingGateway::default());
    let mut desk = desk_with(
        Arc::clone(&gateway) as Arc<dyn RecordGateway>,
        Arc::new(FixturePrompt::approving()),
    )
    .await;
    assert!(
        desk.login(SEED_STUDENT_EMAIL, SEED_STUDENT_PASSWORD, Role::Student)
            .await
    );

    let confirmed = desk.submit_complaint(draft()).await.expect("saved remotely");
    gateway.take_down();
    let local = desk.submit_complaint(draft()).await.expect("kept locally");

    let complaints = desk.records().complaints();
    assert_eq!(complaints.len(), 2);
    assert_eq!(complaints.first().expect("head").id, local);
    assert_eq!(complaints.first().expect("head").sync, SyncState::LocalOnly);
    assert_eq!(complaints.get(1).expect("tail").id, confirmed);
    assert_eq!(complaints.get(1).expect("tail").sync, SyncState::Confirmed);

    let tally = desk.tally();
    assert_eq!(tally.total(), 2);
    assert_eq!(tally.pending, 2);
    assert_eq!(tally.unconfirmed, 1);
}

#[tokio::test]
async fn role_gates_cover_submission_and_triage() {
    let mut desk = desk_with(
        Arc::new(RecordingGateway::default()),
        Arc::new(FixturePrompt::approving()),
    )
    .await;

    assert!(
        desk.login(SEED_STUDENT_EMAIL, SEED_STUDENT_PASSWORD, Role::Student)
            .await
    );
    let id = desk.submit_complaint(draft()).await.expect("student submits");

    let err = desk
        .update_complaint_status(&id, ComplaintStatus::Resolved)
        .expect_err("students may not triage");
    assert_eq!(err.code(), ErrorCode::Forbidden);
    let err = desk.delete_complaint(&id).expect_err("students may not delete");
    assert_eq!(err.code(), ErrorCode::Forbidden);

    desk.logout();
    assert!(desk.login(SEED_ADMIN_EMAIL, SEED_ADMIN_PASSWORD, Role::Admin).await);
    let err = desk.submit_complaint(draft()).await.expect_err("admins may not submit");
    assert_eq!(err.code(), ErrorCode::Forbidden);
    let err = desk
        .submit_feedback(Feedback::new(json!({ "rating": 1 })))
        .await
        .expect_err("admins may not submit feedback");
    assert_eq!(err.code(), ErrorCode::Forbidden);
}

#[tokio::test]
async fn update_status_changes_one_record_and_ignores_unknown_ids() {
    let gateway = Arc::new(RecordingGateway::default());
    let mut desk = desk_with(
        Arc::clone(&gateway) as Arc<dyn RecordGateway>,
        Arc::new(FixturePrompt::approving()),
    )
    .await;

    assert!(
        desk.login(SEED_STUDENT_EMAIL, SEED_STUDENT_PASSWORD, Role::Student)
            .await
    );
    let kept = desk.submit_complaint(draft()).await.expect("student submits");
    let updated = desk.submit_complaint(draft()).await.expect("student submits");
    desk.logout();

    // The admin session reloads the collection from the collaborator, which
    // still serves both saved records.
    assert!(desk.login(SEED_ADMIN_EMAIL, SEED_ADMIN_PASSWORD, Role::Admin).await);
    assert_eq!(desk.records().complaints().len(), 2);
    assert!(
        desk.update_complaint_status(&updated, ComplaintStatus::InProgress)
            .expect("admin triages")
    );

    for complaint in desk.records().complaints() {
        let expected = if complaint.id == updated {
            ComplaintStatus::InProgress
        } else {
            ComplaintStatus::Pending
        };
        assert_eq!(complaint.status, expected);
    }
    assert!(
        desk.records()
            .complaints()
            .iter()
            .any(|complaint| complaint.id == kept)
    );

    let unknown = ComplaintId::new("CMP-0-gone").expect("valid id");
    assert!(
        !desk
            .update_complaint_status(&unknown, ComplaintStatus::Rejected)
            .expect("admin triages")
    );
    assert_eq!(desk.records().complaints().len(), 2);
}

#[tokio::test]
async fn delete_honours_the_confirmation_prompt() {
    let gateway = Arc::new(RecordingGateway::default());
    let mut desk = desk_with(
        Arc::clone(&gateway) as Arc<dyn RecordGateway>,
        Arc::new(FixturePrompt::declining()),
    )
    .await;

    assert!(
        desk.login(SEED_STUDENT_EMAIL, SEED_STUDENT_PASSWORD, Role::Student)
            .await
    );
    let id = desk.submit_complaint(draft()).await.expect("student submits");
    desk.logout();

    assert!(desk.login(SEED_ADMIN_EMAIL, SEED_ADMIN_PASSWORD, Role::Admin).await);
    assert!(!desk.delete_complaint(&id).expect("admin may attempt delete"));
    assert_eq!(
        desk.records().complaints().len(),
        1,
        "declined delete has no effect"
    );
}

#[tokio::test]
async fn confirmed_delete_removes_exactly_one_record() {
    let gateway = Arc::new(RecordingGateway::default());
    let mut desk = desk_with(
        Arc::clone(&gateway) as Arc<dyn RecordGateway>,
        Arc::new(FixturePrompt::approving()),
    )
    .await;

    assert!(
        desk.login(SEED_STUDENT_EMAIL, SEED_STUDENT_PASSWORD, Role::Student)
            .await
    );
    let doomed = desk.submit_complaint(draft()).await.expect("student submits");
    let survivor = desk.submit_complaint(draft()).await.expect("student submits");
    desk.logout();

    assert!(desk.login(SEED_ADMIN_EMAIL, SEED_ADMIN_PASSWORD, Role::Admin).await);
    assert!(desk.delete_complaint(&doomed).expect("admin deletes"));

    let complaints = desk.records().complaints();
    assert_eq!(complaints.len(), 1);
    assert_eq!(complaints.first().expect("survivor").id, survivor);

    // The delete is local-only: the collaborator still holds both records.
    assert_eq!(
        gateway
            .fetch_complaints()
            .await
            .expect("collaborator reachable")
            .len(),
        2
    );
}

#[tokio::test]
async fn feedback_follows_the_same_optimistic_path() {
    let gateway = Arc::new(RecordingGateway::default());
    let mut desk = desk_with(
        Arc::clone(&gateway) as Arc<dyn RecordGateway>,
        Arc::new(FixturePrompt::approving()),
    )
    .await;
    assert!(
        desk.login(SEED_STUDENT_EMAIL, SEED_STUDENT_PASSWORD, Role::Student)
            .await
    );

    desk.submit_feedback(Feedback::new(json!({ "rating": 5, "comment": "sorted fast" })))
        .await
        .expect("student submits feedback");
    gateway.take_down();
    desk.submit_feedback(Feedback::new(json!({ "rating": 2, "comment": "still waiting" })))
        .await
        .expect("student submits feedback");

    assert_eq!(desk.records().feedbacks().len(), 2);
    assert_eq!(
        stored_feedback_count(&gateway),
        1,
        "only the first feedback reached the collaborator"
    );
}

fn stored_feedback_count(gateway: &RecordingGateway) -> usize {
    gateway
        .feedbacks
        .lock()
        .expect("gateway fake poisoned")
        .len()
}
