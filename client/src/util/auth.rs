//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route applies the same gate: public pages bounce signed-in users to
//! the dashboard, protected pages bounce everyone else to login. Ending a
//! session (logout or a 401) clears storage and lets the gate navigate.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use quiz::ApiError;
use quiz::auth::auth_redirect;
use quiz::store::{CredentialStore, clear_credentials};

use crate::state::auth::AuthState;
use crate::util::storage::LocalStore;

/// Navigate whenever the stored login stops matching what `path` requires.
pub fn install_auth_gate<F>(path: &'static str, auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let has_token = auth.with(AuthState::is_authenticated);
        if let Some(target) = auth_redirect(path, has_token) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Drop stored credentials and return the signed-out state.
pub fn end_session<S: CredentialStore + ?Sized>(store: &mut S) -> AuthState {
    clear_credentials(store);
    AuthState::default()
}

/// Logout, or the server rejected the token: clear and let the gate redirect.
pub fn sign_out(auth: RwSignal<AuthState>) {
    auth.set(end_session(&mut LocalStore));
}

/// Route an API failure: auth failures end the session and return `None`;
/// anything else comes back as the message to show.
pub fn triage_failure(auth: RwSignal<AuthState>, err: &ApiError) -> Option<String> {
    let message = inline_message(err);
    if message.is_none() {
        sign_out(auth);
    }
    message
}

/// Inline text for a failure, or `None` when it must end the session.
pub fn inline_message(err: &ApiError) -> Option<String> {
    if err.is_auth_failure() { None } else { Some(err.user_message()) }
}
