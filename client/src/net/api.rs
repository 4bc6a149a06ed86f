//! REST API helpers for communicating with the test platform.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning [`ApiError::Network`], since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 401 becomes
//! `ApiError::Unauthorized`, which pages turn into "clear token, go to login";
//! everything else is shown inline and can be retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use quiz::endpoints::Endpoints;
use quiz::types::{AnalysisResult, LoginResponse, RegisterRequest, RegisteredUser, SubmissionReceipt, SubmissionRequest, Test, TestSummary};
use quiz::ApiError;

/// API origin baked in at build time; empty means same origin.
const API_BASE: Option<&str> = option_env!("QUIZ_API_BASE");

fn endpoints() -> Endpoints {
    Endpoints::new(API_BASE.unwrap_or(""))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
fn network(err: gloo_net::Error) -> ApiError {
    log::warn!("request failed: {err}");
    ApiError::Network(err.to_string())
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("{} returned {status}", resp.url());
        return Err(ApiError::from_status(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange username and password for a bearer token via `POST /api/login`.
///
/// The body is form-encoded, as the token endpoint expects.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for bad credentials.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let params = web_sys::UrlSearchParams::new().map_err(|_| ApiError::Network("form encoding failed".to_owned()))?;
        params.append("username", username);
        params.append("password", password);
        let resp = gloo_net::http::Request::post(&endpoints().login())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(params)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err(unavailable())
    }
}

/// Create an account via `POST /api/register`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] carrying the server's `detail` when rejected.
pub async fn register(request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoints().register())
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// List available tests via `GET /api/tests`.
///
/// # Errors
///
/// Returns an error if the request fails or the token is rejected.
pub async fn fetch_tests(token: &str) -> Result<Vec<TestSummary>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoints().tests())
            .header("Authorization", &quiz::endpoints::bearer(token))
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(unavailable())
    }
}

/// Fetch one test with its questions via `GET /api/tests/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the token is rejected.
pub async fn fetch_test(token: &str, test_id: &str) -> Result<Test, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoints().test(test_id))
            .header("Authorization", &quiz::endpoints::bearer(token))
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, test_id);
        Err(unavailable())
    }
}

/// Submit answers via `POST /api/tests/{id}/submit`.
///
/// # Errors
///
/// Returns an error if the request fails or the token is rejected.
pub async fn submit_test(token: &str, request: &SubmissionRequest) -> Result<SubmissionReceipt, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoints().submit(&request.test_id))
            .header("Authorization", &quiz::endpoints::bearer(token))
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, request);
        Err(unavailable())
    }
}

/// Fetch a scored submission and study plan via `GET /api/analysis/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the token is rejected.
pub async fn fetch_analysis(token: &str, submission_id: &str) -> Result<AnalysisResult, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoints().analysis(submission_id))
            .header("Authorization", &quiz::endpoints::bearer(token))
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, submission_id);
        Err(unavailable())
    }
}
