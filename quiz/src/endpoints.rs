//! REST paths for the test platform API.
//!
//! Identifiers are percent-encoded wherever they land in a path segment or a
//! query value, so an id holding `/`, `?`, `&` or `#` still names one resource.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use urlencoding::encode;

/// URL builder rooted at an API origin. An empty base yields same-origin
/// relative paths, which is what the browser build uses by default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self { base: base.trim().trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn login(&self) -> String {
        format!("{}/api/login", self.base)
    }

    #[must_use]
    pub fn register(&self) -> String {
        format!("{}/api/register", self.base)
    }

    #[must_use]
    pub fn tests(&self) -> String {
        format!("{}/api/tests", self.base)
    }

    #[must_use]
    pub fn test(&self, test_id: &str) -> String {
        format!("{}/api/tests/{}", self.base, encode(test_id))
    }

    #[must_use]
    pub fn submit(&self, test_id: &str) -> String {
        format!("{}/api/tests/{}/submit", self.base, encode(test_id))
    }

    #[must_use]
    pub fn analysis(&self, submission_id: &str) -> String {
        format!("{}/api/analysis/{}", self.base, encode(submission_id))
    }
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Browser route of the test runner for `test_id`.
#[must_use]
pub fn test_page(test_id: &str) -> String {
    format!("/test?id={}", encode(test_id))
}

/// Browser route of the results page for `submission_id`.
#[must_use]
pub fn results_page(submission_id: &str) -> String {
    format!("/results?id={}", encode(submission_id))
}
