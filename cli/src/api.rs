//! Async HTTP client for the test platform REST API.
//!
//! Every call returns `quiz::ApiError` so the session state machine can take
//! submission outcomes as-is. A 401 maps to `ApiError::Unauthorized`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use quiz::ApiError;
use quiz::endpoints::{Endpoints, bearer};
use quiz::types::{
    AnalysisResult, LoginResponse, RegisterRequest, RegisteredUser, SubmissionReceipt, SubmissionRequest, Test,
    TestSummary,
};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    token: Option<String>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CliError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoints: Endpoints::new(base_url), token: None })
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::Unauthorized)?;
        Ok(request.header(AUTHORIZATION, bearer(token)))
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = self.http.post(self.endpoints.login()).form(&[("username", username), ("password", password)]);
        send(request).await
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        send(self.http.post(self.endpoints.register()).json(body)).await
    }

    pub async fn tests(&self) -> Result<Vec<TestSummary>, ApiError> {
        send(self.authorized(self.http.get(self.endpoints.tests()))?).await
    }

    pub async fn test(&self, test_id: &str) -> Result<Test, ApiError> {
        send(self.authorized(self.http.get(self.endpoints.test(test_id)))?).await
    }

    pub async fn submit(&self, body: &SubmissionRequest) -> Result<SubmissionReceipt, ApiError> {
        let request = self.http.post(self.endpoints.submit(&body.test_id)).json(body);
        send(self.authorized(request)?).await
    }

    pub async fn analysis(&self, submission_id: &str) -> Result<AnalysisResult, ApiError> {
        send(self.authorized(self.http.get(self.endpoints.analysis(submission_id)))?).await
    }
}

async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await.map_err(|err| {
        tracing::warn!(error = %err, "request failed");
        ApiError::Network(err.to_string())
    })?;
    let status = response.status();
    tracing::debug!(url = %response.url(), status = status.as_u16(), "response");
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status.as_u16(), &body));
    }
    response.json::<T>().await.map_err(|err| ApiError::Decode(err.to_string()))
}
