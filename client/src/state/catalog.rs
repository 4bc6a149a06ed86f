//! Available-test list state for the dashboard.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use quiz::ApiError;
use quiz::types::TestSummary;

/// Dashboard test inventory.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub items: Vec<TestSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CatalogState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch result. Returns the error back when it was an auth
    /// failure so the caller can end the session; other failures become an
    /// inline message and keep whatever was listed before.
    pub fn finish_load(&mut self, outcome: Result<Vec<TestSummary>, ApiError>) -> Option<ApiError> {
        self.loading = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                None
            }
            Err(err) if err.is_auth_failure() => Some(err),
            Err(err) => {
                self.error = Some(format!("Failed to load tests. {}", err.user_message()));
                None
            }
        }
    }
}
