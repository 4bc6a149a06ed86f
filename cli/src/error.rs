#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use quiz::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not logged in; run `quiz-cli login` first")]
    NotLoggedIn,
    #[error("session expired; log in again")]
    SessionExpired,
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("state file {path}: {source}")]
    StateFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid state file: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("reading input failed: {0}")]
    Input(#[from] std::io::Error),
    #[error("{0}")]
    Rejected(String),
}

impl CliError {
    /// Auth failures from the API end the stored session.
    pub fn from_api(err: ApiError) -> Self {
        if err.is_auth_failure() { Self::SessionExpired } else { Self::Api(err) }
    }

    /// Line printed to stderr before exiting non-zero.
    pub fn report(&self) -> String {
        format!("Error: {self}")
    }
}
