//! Persisted login state behind a small key-value seam.
//!
//! The browser backs [`CredentialStore`] with `localStorage`; the terminal
//! client backs it with a JSON file. Only two keys are ever written.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Credentials;

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";

/// String key-value storage for client state.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store; also the on-disk shape of the CLI state file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Store the token and username after a successful login.
pub fn save_credentials<S: CredentialStore + ?Sized>(store: &mut S, credentials: &Credentials) {
    store.set(TOKEN_KEY, &credentials.token);
    store.set(USERNAME_KEY, &credentials.username);
}

/// The stored bearer token, ignoring blank values.
pub fn load_token<S: CredentialStore + ?Sized>(store: &S) -> Option<String> {
    store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

/// Token and username, only when both are present.
pub fn load_credentials<S: CredentialStore + ?Sized>(store: &S) -> Option<Credentials> {
    let token = load_token(store)?;
    let username = store.get(USERNAME_KEY).filter(|u| !u.trim().is_empty())?;
    Some(Credentials { token, username })
}

/// Forget the login (logout, or the server rejected the token).
pub fn clear_credentials<S: CredentialStore + ?Sized>(store: &mut S) {
    store.remove(TOKEN_KEY);
    store.remove(USERNAME_KEY);
}
