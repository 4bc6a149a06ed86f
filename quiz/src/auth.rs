//! Route gating and auth form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login and signup routes are public; everything else needs a stored
//! token. Pages call [`auth_redirect`] on mount and navigate when it says so.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::types::RegisterRequest;

pub const LOGIN_PATH: &str = "/";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password.";

const PUBLIC_PATHS: &[&str] = &["/", "/index.html", "/signup", "/signup.html"];

/// Whether `path` is reachable without a token.
#[must_use]
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Where to send the user, if anywhere, given the current path and whether a
/// token is stored.
#[must_use]
pub fn auth_redirect(path: &str, has_token: bool) -> Option<&'static str> {
    match (is_public_path(path), has_token) {
        (true, true) => Some(DASHBOARD_PATH),
        (false, false) => Some(LOGIN_PATH),
        _ => None,
    }
}

/// Trim and require both login fields.
///
/// # Errors
///
/// Returns a user-facing message when either field is blank.
pub fn validate_login(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Validate the signup form and build the registration body.
///
/// # Errors
///
/// Returns a user-facing message for blank fields or mismatched passwords.
pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH_MESSAGE);
    }
    Ok(RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Message shown when registration is rejected.
#[must_use]
pub fn registration_error_message(detail: Option<&str>) -> String {
    match detail.map(str::trim) {
        Some(d) if !d.is_empty() => d.to_owned(),
        _ => REGISTRATION_FAILED_MESSAGE.to_owned(),
    }
}
