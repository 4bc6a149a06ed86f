use super::*;

// =============================================================
// Clock
// =============================================================

#[test]
fn remaining_until_floors_partial_seconds() {
    assert_eq!(remaining_until(10_000.0, 0.0), 10);
    assert_eq!(remaining_until(10_000.0, 500.0), 9);
    assert_eq!(remaining_until(10_000.0, 9_999.0), 0);
}

#[test]
fn remaining_until_never_goes_negative() {
    assert_eq!(remaining_until(1_000.0, 5_000.0), 0);
    assert_eq!(remaining_until(f64::NAN, 0.0), 0);
}

fn quick_test() -> quiz::types::Test {
    use quiz::types::{AnswerOption, Question, Test};

    Test {
        id: "t1".to_owned(),
        title: "Quick".to_owned(),
        description: String::new(),
        duration: 1,
        total_questions: 1,
        subjects: vec!["Math".to_owned()],
        difficulty: "Easy".to_owned(),
        questions: vec![Question {
            id: "q1".to_owned(),
            text: "1 + 1?".to_owned(),
            options: vec![AnswerOption { id: "a".to_owned(), text: "2".to_owned() }],
            subject: "Math".to_owned(),
            topic: "Arithmetic".to_owned(),
            difficulty: "Easy".to_owned(),
        }],
    }
}

#[test]
fn deadline_resync_expires_the_session() {
    let mut session = TestSession::started(quick_test(), "alice");
    assert!(session.sync_remaining(remaining_until(60_000.0, 30_000.0)).is_none());
    assert_eq!(session.remaining_secs(), 30);
    let request = session.sync_remaining(remaining_until(60_000.0, 61_000.0));
    assert!(request.is_some_and(|r| r.answers.is_empty()));
    assert!(session.is_input_locked());
}

// =============================================================
// Credentials feeding the submission
// =============================================================

#[test]
fn token_without_username_never_starts_a_session() {
    use quiz::store::{CredentialStore, MemoryStore, TOKEN_KEY};

    let mut store = MemoryStore::new();
    store.set(TOKEN_KEY, "tok");
    assert_eq!(AuthState::from_store(&store).credentials(), None);
}

#[test]
fn submission_carries_the_signed_in_username() {
    use quiz::store::{MemoryStore, save_credentials};

    let mut store = MemoryStore::new();
    save_credentials(&mut store, &Credentials { token: "tok".to_owned(), username: "alice".to_owned() });
    let Credentials { username, .. } = AuthState::from_store(&store).credentials().expect("signed in");
    let mut session = TestSession::started(quick_test(), username);
    let request = session.begin_submit(false).expect("slot is free");
    assert_eq!(request.username, "alice");
}

// =============================================================
// Query and status text
// =============================================================

#[test]
fn requested_test_id_ignores_blanks() {
    assert_eq!(requested_test_id(None), None);
    assert_eq!(requested_test_id(Some("  ".to_owned())), None);
    assert_eq!(requested_test_id(Some(" t9 ".to_owned())), Some("t9".to_owned()));
}

#[test]
fn submitting_text_mentions_timeout_for_auto_submit() {
    assert!(submitting_text(true).starts_with("Time is up"));
    assert!(!submitting_text(false).contains("Time"));
}
