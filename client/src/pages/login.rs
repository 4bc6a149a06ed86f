//! Login page: username + password exchanged for a bearer token.
//!
//! On success the token and username land in `localStorage` and the auth
//! gate moves the user to the dashboard. A 401 shows an inline error and
//! stores nothing.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use quiz::ApiError;
use quiz::auth::{LOGIN_FAILED_MESSAGE, LOGIN_PATH, SIGNUP_PATH, validate_login};
use quiz::store::{CredentialStore, save_credentials};
use quiz::types::{Credentials, LoginResponse};

use crate::state::auth::AuthState;
use crate::util::auth::install_auth_gate;

/// Persist a successful login, or turn the failure into inline text.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn apply_login_outcome<S: CredentialStore + ?Sized>(
    outcome: Result<LoginResponse, ApiError>,
    username: &str,
    store: &mut S,
) -> Result<Credentials, String> {
    match outcome {
        Ok(response) if !response.access_token.trim().is_empty() => {
            let credentials = Credentials { token: response.access_token, username: username.to_owned() };
            save_credentials(store, &credentials);
            Ok(credentials)
        }
        Ok(_) | Err(ApiError::Unauthorized) => Err(LOGIN_FAILED_MESSAGE.to_owned()),
        Err(err) => Err(err.user_message()),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_auth_gate(LOGIN_PATH, auth, use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name, secret) = match validate_login(&username.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::login(&name, &secret).await;
            match apply_login_outcome(outcome, &name, &mut crate::util::storage::LocalStore) {
                Ok(credentials) => {
                    log::info!("signed in as {}", credentials.username);
                    auth.set(AuthState::from(credentials));
                }
                Err(message) => {
                    error.set(Some(message));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (name, secret);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Test Portal"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? "
                    <a href=SIGNUP_PATH>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
