#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use quiz::store::{CredentialStore, load_credentials};
use quiz::types::Credentials;

/// Who is signed in, as read from the credential store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub username: Option<String>,
}

impl AuthState {
    /// Snapshot the stored login. A token without a username counts as
    /// signed out, so the gate sends the user back to login.
    pub fn from_store<S: CredentialStore + ?Sized>(store: &S) -> Self {
        load_credentials(store).map(Self::from).unwrap_or_default()
    }

    /// Token and username, only when both are non-blank.
    pub fn credentials(&self) -> Option<Credentials> {
        let token = self.token.as_deref().filter(|t| !t.trim().is_empty())?;
        let username = self.username.as_deref().filter(|u| !u.trim().is_empty())?;
        Some(Credentials { token: token.to_owned(), username: username.to_owned() })
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials().is_some()
    }

    /// Name for the header; falls back to "User" like the login flow did.
    pub fn display_name(&self) -> String {
        self.username.clone().unwrap_or_else(|| "User".to_owned())
    }
}

impl From<Credentials> for AuthState {
    fn from(credentials: Credentials) -> Self {
        Self { token: Some(credentials.token), username: Some(credentials.username) }
    }
}
