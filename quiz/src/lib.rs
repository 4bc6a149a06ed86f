//! Shared test-taking core for the browser client and the terminal client.
//!
//! This crate owns the REST wire types, the timed test session state machine,
//! and the pure view descriptions both front ends render. It has no browser or
//! network dependencies so every rule here is testable natively.

pub mod auth;
pub mod endpoints;
pub mod error;
pub mod results;
pub mod session;
pub mod store;
pub mod types;
pub mod view;

pub use error::ApiError;
pub use session::{Navigation, Phase, SessionError, TestSession};
pub use types::{
    AnalysisResult, AnswerOption, Credentials, Question, SubmissionReceipt, SubmissionRequest, SubmittedAnswer, Test,
    TestSummary, WeakTopic,
};
