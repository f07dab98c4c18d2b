//! Regression coverage for identity types and the seed roster.

use chrono::{TimeZone, Utc};
use rstest::rstest;

use super::*;

fn sample_draft() -> IdentityDraft {
    IdentityDraft {
        id: IdentityId::new("student-1700000000000").expect("valid id"),
        email: EmailAddress::new("ada@sits.edu.in").expect("valid email"),
        name: "Ada Lovelace".to_owned(),
        role: Role::Student,
        roll_number: Some("SITS2024042".to_owned()),
        department: Some("Mathematics".to_owned()),
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).single().expect("valid time"),
        credential: PasswordInput::new("s3cret").expect("valid password").fingerprint(),
    }
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_ids_are_rejected(#[case] raw: &str) {
    let err = IdentityId::new(raw).expect_err("blank id must fail");
    assert_eq!(err, IdentityValidationError::EmptyId);
}

#[test]
fn synthesized_ids_carry_role_and_millis() {
    let at = Utc.timestamp_millis_opt(1_700_000_000_123).single().expect("valid time");
    assert_eq!(
        IdentityId::synthesize(Role::Admin, at).as_ref(),
        "admin-1700000000123"
    );
    assert_eq!(
        IdentityId::synthesize(Role::Student, at).as_ref(),
        "student-1700000000123"
    );
}

#[rstest]
#[case("", IdentityValidationError::EmptyEmail)]
#[case("   ", IdentityValidationError::EmptyEmail)]
#[case("no-at-sign", IdentityValidationError::InvalidEmail)]
#[case("@sits.edu.in", IdentityValidationError::InvalidEmail)]
#[case("ada@", IdentityValidationError::InvalidEmail)]
#[case("ada lovelace@sits.edu.in", IdentityValidationError::InvalidEmail)]
fn invalid_emails_are_rejected(#[case] raw: &str, #[case] expected: IdentityValidationError) {
    let err = EmailAddress::new(raw).expect_err("invalid email must fail");
    assert_eq!(err, expected);
}

#[test]
fn emails_are_trimmed_but_not_lowercased() {
    let email = EmailAddress::new("  Ada@sits.edu.in  ").expect("valid email");
    assert_eq!(email.as_ref(), "Ada@sits.edu.in");
}

#[test]
fn blank_names_are_rejected() {
    let mut draft = sample_draft();
    draft.name = "   ".to_owned();
    let err = Identity::new(draft).expect_err("blank name must fail");
    assert_eq!(err, IdentityValidationError::EmptyName);
}

#[test]
fn identity_round_trips_through_serde() {
    let identity = Identity::new(sample_draft()).expect("valid identity");
    let json = serde_json::to_string(&identity).expect("identity serialises");
    let restored: Identity = serde_json::from_str(&json).expect("identity deserialises");
    assert_eq!(restored, identity);
}

#[test]
fn identity_dto_uses_camel_case_and_accepts_snake_case_created_at() {
    let identity = Identity::new(sample_draft()).expect("valid identity");
    let json = serde_json::to_value(&identity).expect("identity serialises");
    assert!(json.get("rollNumber").is_some());
    assert!(json.get("createdAt").is_some());

    let mut legacy = json;
    let created_at = legacy
        .as_object_mut()
        .expect("object payload")
        .remove("createdAt")
        .expect("createdAt present");
    legacy
        .as_object_mut()
        .expect("object payload")
        .insert("created_at".to_owned(), created_at);
    let restored: Identity =
        serde_json::from_value(legacy).expect("legacy created_at is accepted");
    assert_eq!(restored, identity);
}

#[test]
fn seed_roster_contains_the_two_demo_identities() {
    let now = Utc::now();
    let roster = Identity::seed_roster(now);
    assert_eq!(roster.len(), 2);

    let admin = roster
        .iter()
        .find(|identity| identity.email().as_ref() == SEED_ADMIN_EMAIL)
        .expect("admin seed present");
    assert_eq!(admin.id().as_ref(), "admin-1");
    assert_eq!(admin.role(), Role::Admin);
    assert_eq!(admin.department(), Some("Administration"));
    assert_eq!(admin.created_at(), now);

    let student = roster
        .iter()
        .find(|identity| identity.email().as_ref() == SEED_STUDENT_EMAIL)
        .expect("student seed present");
    assert_eq!(student.id().as_ref(), "student-1");
    assert_eq!(student.role(), Role::Student);
    assert_eq!(student.roll_number(), Some("SITS2024001"));
}

#[rstest]
#[case(SEED_ADMIN_PASSWORD, Role::Admin, true)]
#[case(SEED_ADMIN_PASSWORD, Role::Student, false)]
#[case("wrong", Role::Admin, false)]
fn seed_admin_authentication(
    #[case] password: &str,
    #[case] role: Role,
    #[case] expected: bool,
) {
    let roster = Identity::seed_roster(Utc::now());
    let admin = roster
        .iter()
        .find(|identity| identity.role() == Role::Admin)
        .expect("admin seed present");
    let password = PasswordInput::new(password).expect("valid password");
    assert_eq!(admin.authenticates(&password, role), expected);
}
