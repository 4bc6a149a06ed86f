use super::*;
use quiz::store::{MemoryStore, TOKEN_KEY, save_credentials};
use quiz::types::Credentials;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.display_name(), "User");
}

#[test]
fn from_store_reads_token_and_username() {
    let mut store = MemoryStore::new();
    save_credentials(&mut store, &Credentials { token: "tok".to_owned(), username: "alice".to_owned() });
    let state = AuthState::from_store(&store);
    assert!(state.is_authenticated());
    assert_eq!(state.display_name(), "alice");
}

#[test]
fn from_store_without_username_is_signed_out() {
    let mut store = MemoryStore::new();
    store.set(TOKEN_KEY, "tok");
    let state = AuthState::from_store(&store);
    assert!(!state.is_authenticated());
    assert_eq!(state.credentials(), None);
}

#[test]
fn blank_username_yields_no_credentials() {
    let state = AuthState { token: Some("tok".to_owned()), username: Some("  ".to_owned()) };
    assert!(!state.is_authenticated());
    assert_eq!(state.credentials(), None);
}

#[test]
fn credentials_carry_both_values() {
    let state = AuthState::from(Credentials { token: "tok".to_owned(), username: "alice".to_owned() });
    let credentials = state.credentials().expect("signed in");
    assert_eq!(credentials.token, "tok");
    assert_eq!(credentials.username, "alice");
}
