//! REST wire DTOs for the test platform API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON exactly. Descriptive fields the server
//! may leave out are `#[serde(default)]` so a sparse payload still decodes;
//! identity fields (`id`, `question_id`, `submission_id`) stay required.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A test as listed on the dashboard (`GET /api/tests`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestSummary {
    /// Server-assigned test identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short description shown on the dashboard card.
    #[serde(default)]
    pub description: String,
    /// Time budget in minutes.
    #[serde(default)]
    pub duration: u32,
    /// Number of questions the test contains.
    #[serde(default)]
    pub total_questions: u32,
    /// Subjects covered (e.g. `"Physics"`).
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Overall difficulty label.
    #[serde(default)]
    pub difficulty: String,
}

/// A full test with its questions (`GET /api/tests/{id}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Test {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Time budget in minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub total_questions: u32,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Test {
    /// Time budget in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> u64 {
        u64::from(self.duration) * 60
    }
}

/// One multiple-choice question. Correct answers never reach the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub difficulty: String,
}

impl Question {
    /// Whether `option_id` is one of this question's options.
    #[must_use]
    pub fn has_option(&self, option_id: &str) -> bool {
        self.options.iter().any(|o| o.id == option_id)
    }
}

/// A selectable answer option (`id` is usually a letter such as `"a"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
}

/// One answered question inside a [`SubmissionRequest`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub question_id: String,
    pub selected_option_id: String,
}

/// Body of `POST /api/tests/{id}/submit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub test_id: String,
    pub username: String,
    /// Answered questions only; unattempted questions are omitted.
    pub answers: Vec<SubmittedAnswer>,
}

/// Response of the submit endpoint. Only the id is consumed; the results page
/// fetches the full analysis separately.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub submission_id: String,
}

/// A subject/topic pair the server flagged as low-performing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeakTopic {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub topic: String,
}

/// Scored submission with study plan (`GET /api/analysis/{id}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub submission_id: String,
    /// Percentage in `0.0..=100.0`.
    pub score: f64,
    #[serde(default)]
    pub total_questions: u32,
    #[serde(default)]
    pub correct_answers: u32,
    #[serde(default)]
    pub incorrect_answers: u32,
    #[serde(default)]
    pub unattempted: u32,
    #[serde(default)]
    pub weak_topics: Vec<WeakTopic>,
    /// Markdown text; `None` when the analysis service had nothing to say.
    #[serde(default)]
    pub study_plan: Option<String>,
}

/// Response of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Body of `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response of a successful registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// The persisted login: bearer token plus the username it was issued for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    pub username: String,
}
