use super::*;

fn alice() -> Credentials {
    Credentials { token: "tok-1".to_owned(), username: "alice".to_owned() }
}

#[test]
fn save_then_load_credentials() {
    let mut store = MemoryStore::new();
    save_credentials(&mut store, &alice());
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-1"));
    assert_eq!(load_credentials(&store), Some(alice()));
}

#[test]
fn clear_removes_both_keys() {
    let mut store = MemoryStore::new();
    save_credentials(&mut store, &alice());
    clear_credentials(&mut store);
    assert_eq!(load_token(&store), None);
    assert_eq!(store.get(USERNAME_KEY), None);
}

#[test]
fn blank_token_counts_as_missing() {
    let mut store = MemoryStore::new();
    store.set(TOKEN_KEY, "  ");
    store.set(USERNAME_KEY, "alice");
    assert_eq!(load_token(&store), None);
    assert_eq!(load_credentials(&store), None);
}

#[test]
fn credentials_need_username() {
    let mut store = MemoryStore::new();
    store.set(TOKEN_KEY, "tok");
    assert_eq!(load_token(&store).as_deref(), Some("tok"));
    assert_eq!(load_credentials(&store), None);
}

#[test]
fn memory_store_serializes_as_flat_map() {
    let mut store = MemoryStore::new();
    save_credentials(&mut store, &alice());
    assert_eq!(
        serde_json::to_value(&store).unwrap(),
        serde_json::json!({ "token": "tok-1", "username": "alice" })
    );
}
