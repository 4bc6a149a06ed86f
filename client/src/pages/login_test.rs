use super::*;
use quiz::store::{MemoryStore, TOKEN_KEY, USERNAME_KEY, load_credentials};

fn response(token: &str) -> LoginResponse {
    LoginResponse { access_token: token.to_owned(), token_type: "bearer".to_owned() }
}

// =============================================================
// Success
// =============================================================

#[test]
fn successful_login_stores_token_and_username() {
    let mut store = MemoryStore::new();
    let creds = apply_login_outcome(Ok(response("abc")), "alice", &mut store).unwrap();
    assert_eq!(creds.token, "abc");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(store.get(USERNAME_KEY).as_deref(), Some("alice"));
}

// =============================================================
// Failure
// =============================================================

#[test]
fn unauthorized_shows_error_and_stores_nothing() {
    let mut store = MemoryStore::new();
    let err = apply_login_outcome(Err(ApiError::Unauthorized), "alice", &mut store).unwrap_err();
    assert_eq!(err, LOGIN_FAILED_MESSAGE);
    assert_eq!(load_credentials(&store), None);
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn blank_token_counts_as_failure() {
    let mut store = MemoryStore::new();
    assert!(apply_login_outcome(Ok(response("  ")), "alice", &mut store).is_err());
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn network_failure_suggests_retry() {
    let mut store = MemoryStore::new();
    let err = apply_login_outcome(Err(ApiError::Network("down".to_owned())), "alice", &mut store).unwrap_err();
    assert!(err.contains("try again"));
}
