#![cfg(not(feature = "csr"))]

use std::future::Future;
use std::task::{Context, Poll, Waker};

use super::*;

/// Native stubs never await, so a single poll resolves them.
fn resolve<F: Future>(future: F) -> F::Output {
    let mut future = std::pin::pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(value) => value,
        Poll::Pending => panic!("stubbed API call should resolve on first poll"),
    }
}

#[test]
fn endpoints_default_to_same_origin_without_build_env() {
    if API_BASE.is_none() {
        assert_eq!(endpoints().login(), "/api/login");
        assert_eq!(endpoints().submit("t1"), "/api/tests/t1/submit");
    }
}

#[test]
fn stubbed_calls_report_network_failure_natively() {
    let err = resolve(fetch_tests("tok")).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert!(!err.is_auth_failure());
}

#[test]
fn stubbed_login_never_yields_a_token() {
    assert!(resolve(login("alice", "pw")).is_err());
}
