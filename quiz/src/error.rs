//! API failure model shared by every front end.
//!
//! ERROR HANDLING
//! ==============
//! Only two kinds of failure matter to the UI: the session is no longer
//! authenticated (clear credentials, go to login) or a call failed in a way
//! the user can retry. `ApiError` keeps enough detail to tell them apart and
//! to show a readable message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of one REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Missing, expired, or rejected bearer token (HTTP 401).
    #[error("not authenticated")]
    Unauthorized,
    /// Any other non-success status, with the server's `detail` when present.
    #[error("request failed with status {status}{}", detail_suffix(.detail.as_deref()))]
    Status { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map_or_else(String::new, |d| format!(": {d}"))
}

impl ApiError {
    /// Classify a non-success HTTP response.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        Self::Status { status, detail: extract_detail(body) }
    }

    /// Whether the caller must drop stored credentials and return to login.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Short text suitable for an inline error element.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => "Your session has expired. Please log in again.".to_owned(),
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Status { status, detail: None } => format!("The server returned an error ({status})."),
            Self::Network(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
        }
    }
}

/// Pull a human-readable `detail` out of an error body.
///
/// String details are returned as-is. Structured details (validation error
/// lists) are flattened to their `msg` fields.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}
