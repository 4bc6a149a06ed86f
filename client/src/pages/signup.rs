//! Signup page: create an account, then bounce back to login.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use quiz::ApiError;
use quiz::auth::{LOGIN_PATH, SIGNUP_PATH, registration_error_message, validate_signup};
use quiz::types::RegisteredUser;

use crate::state::auth::AuthState;
use crate::util::auth::install_auth_gate;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to login...";
pub const SIGNUP_UNREACHABLE_MESSAGE: &str = "An error occurred. Please try again.";

/// Delay before returning to the login page after a successful signup.
pub const REDIRECT_DELAY_MS: u64 = 2000;

/// Outcome line for a registration attempt: `Ok` is the success banner.
///
/// # Errors
///
/// Returns the server's `detail` when it rejected the form, or a generic
/// message when the request never got an answer.
pub fn signup_outcome(outcome: Result<RegisteredUser, ApiError>) -> Result<&'static str, String> {
    match outcome {
        Ok(_) => Ok(SIGNUP_SUCCESS_MESSAGE),
        Err(ApiError::Status { detail, .. }) => Err(registration_error_message(detail.as_deref())),
        Err(ApiError::Unauthorized | ApiError::Decode(_)) => Err(registration_error_message(None)),
        Err(ApiError::Network(_)) => Err(SIGNUP_UNREACHABLE_MESSAGE.to_owned()),
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_auth_gate(SIGNUP_PATH, auth, use_navigate());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup(&username.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match signup_outcome(crate::net::api::register(&request).await) {
                Ok(message) => {
                    log::info!("registered {}", request.username);
                    success.set(Some(message));
                    gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS)).await;
                    crate::util::nav::go(LOGIN_PATH);
                }
                Err(message) => {
                    error.set(Some(message));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = request;
    };

    let field = move |kind: &'static str, placeholder: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create Account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {field("text", "Username", username)}
                    {field("email", "Email", email)}
                    {field("password", "Password", password)}
                    {field("password", "Confirm password", confirm)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || success.get().is_some()>
                    <p class="login-message login-message--success">{move || success.get().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Login"</a>
                </p>
            </div>
        </div>
    }
}
