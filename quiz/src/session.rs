//! Timed, question-by-question test session.
//!
//! STATE MACHINE
//! =============
//! ```text
//! Loading -> InProgress <-> Confirming
//!                |              |
//!                +--> Submitting <--+ (timer expiry, from either)
//!                        |
//!              Submitted | Failed --(retry)--> Submitting
//!                                 --(resume)--> InProgress
//! ```
//!
//! CONCURRENCY
//! ===========
//! The countdown and the user's submit button both funnel through
//! [`TestSession::begin_submit`]. The `submitted` flag is set there and only
//! cleared by a failed attempt, so whichever trigger fires first wins and the
//! other gets `None`. At most one submission is ever in flight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::ApiError;
use crate::types::{Question, SubmissionReceipt, SubmissionRequest, SubmittedAnswer, Test};

/// Where the session is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No test loaded yet.
    #[default]
    Loading,
    /// Answering questions.
    InProgress,
    /// The "submit now?" prompt is open.
    Confirming,
    /// A submission request is in flight.
    Submitting { auto: bool },
    /// The server accepted the answers. Terminal.
    Submitted { submission_id: String },
    /// The last submission failed; answers are intact and the user may retry.
    Failed { message: String },
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// The current question changed to this index.
    Moved(usize),
    /// Moving past the last question opened the confirmation prompt.
    ConfirmRequested,
    /// Nothing changed (at a bound, or not answering).
    Ignored,
}

/// Rejected session operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the test is not in progress")]
    NotInProgress,
    #[error("answers are locked")]
    InputLocked,
    #[error("question {index} is out of range (test has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("option `{0}` is not offered for this question")]
    UnknownOption(String),
}

/// One attempt at one test.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestSession {
    test: Option<Test>,
    username: String,
    phase: Phase,
    current: usize,
    answers: Vec<Option<String>>,
    remaining_secs: u64,
    submitted: bool,
    input_locked: bool,
}

impl TestSession {
    /// Start a fresh attempt: every answer unset, first question, full clock.
    pub fn load(&mut self, test: Test, username: impl Into<String>) {
        *self = Self {
            answers: vec![None; test.questions.len()],
            remaining_secs: test.duration_secs(),
            test: Some(test),
            username: username.into(),
            phase: Phase::InProgress,
            current: 0,
            submitted: false,
            input_locked: false,
        };
    }

    /// Convenience constructor equivalent to `default()` followed by [`load`](Self::load).
    #[must_use]
    pub fn started(test: Test, username: impl Into<String>) -> Self {
        let mut session = Self::default();
        session.load(test, username);
        session
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn test(&self) -> Option<&Test> {
        self.test.as_ref()
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Number of questions in the loaded test.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.question(self.current)
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.test.as_ref().and_then(|t| t.questions.get(index))
    }

    /// Per-question answers, `None` for unattempted.
    #[must_use]
    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    #[must_use]
    pub fn answer_for(&self, index: usize) -> Option<&str> {
        self.answers.get(index).and_then(Option::as_deref)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    #[must_use]
    pub fn unanswered_count(&self) -> usize {
        self.len() - self.answered_count()
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Set once the clock runs out; answers can no longer change.
    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Submitted { .. })
    }

    /// Whether the countdown should keep running in this phase.
    #[must_use]
    pub fn clock_running(&self) -> bool {
        match self.phase {
            Phase::InProgress | Phase::Confirming => true,
            Phase::Failed { .. } => !self.input_locked,
            Phase::Loading | Phase::Submitting { .. } | Phase::Submitted { .. } => false,
        }
    }

    /// Jump to question `index`. Answers are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotInProgress`] outside `InProgress` and
    /// [`SessionError::IndexOutOfRange`] for an invalid index.
    pub fn load_question(&mut self, index: usize) -> Result<(), SessionError> {
        if self.phase != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }
        if index >= self.len() {
            return Err(SessionError::IndexOutOfRange { index, len: self.len() });
        }
        self.current = index;
        Ok(())
    }

    /// Record `option_id` as the answer to the current question.
    ///
    /// # Errors
    ///
    /// Fails when input is locked, the test is not in progress, or the option
    /// is not offered by the current question.
    pub fn select_option(&mut self, option_id: &str) -> Result<(), SessionError> {
        if self.input_locked {
            return Err(SessionError::InputLocked);
        }
        if self.phase != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }
        let index = self.current;
        let len = self.len();
        let question = self.question(index).ok_or(SessionError::IndexOutOfRange { index, len })?;
        if !question.has_option(option_id) {
            return Err(SessionError::UnknownOption(option_id.to_owned()));
        }
        self.answers[index] = Some(option_id.to_owned());
        Ok(())
    }

    /// Move to the next question, or open the confirmation past the last one.
    pub fn advance(&mut self) -> Navigation {
        if self.phase != Phase::InProgress {
            return Navigation::Ignored;
        }
        if self.current + 1 >= self.len() {
            self.phase = Phase::Confirming;
            return Navigation::ConfirmRequested;
        }
        self.current += 1;
        Navigation::Moved(self.current)
    }

    /// Move to the previous question; a no-op on the first one.
    pub fn retreat(&mut self) -> Navigation {
        if self.phase != Phase::InProgress || self.current == 0 {
            return Navigation::Ignored;
        }
        self.current -= 1;
        Navigation::Moved(self.current)
    }

    /// Open the confirmation prompt from the "Submit test" button.
    pub fn request_submit(&mut self) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        self.phase = Phase::Confirming;
        true
    }

    /// Close the confirmation prompt and keep answering.
    pub fn cancel_confirm(&mut self) -> bool {
        if self.phase != Phase::Confirming {
            return false;
        }
        self.phase = Phase::InProgress;
        true
    }

    /// Leave the failure notice and keep answering, if time remains.
    pub fn resume(&mut self) -> bool {
        if !matches!(self.phase, Phase::Failed { .. }) || self.input_locked {
            return false;
        }
        self.phase = Phase::InProgress;
        true
    }

    /// Claim the single submission slot.
    ///
    /// Returns the request to send, or `None` if a submission is already in
    /// flight or done, or there is nothing loaded. `auto` marks a timer-forced
    /// submission and locks input.
    pub fn begin_submit(&mut self, auto: bool) -> Option<SubmissionRequest> {
        if self.submitted {
            return None;
        }
        if !matches!(self.phase, Phase::InProgress | Phase::Confirming | Phase::Failed { .. }) {
            return None;
        }
        let request = self.build_request()?;
        if auto {
            self.input_locked = true;
        }
        self.submitted = true;
        self.phase = Phase::Submitting { auto: self.input_locked };
        Some(request)
    }

    /// Apply the outcome of the request returned by [`begin_submit`](Self::begin_submit).
    pub fn complete_submit(&mut self, outcome: Result<SubmissionReceipt, ApiError>) {
        if !matches!(self.phase, Phase::Submitting { .. }) {
            return;
        }
        match outcome {
            Ok(receipt) => {
                self.phase = Phase::Submitted { submission_id: receipt.submission_id };
            }
            Err(err) => {
                self.submitted = false;
                self.phase = Phase::Failed { message: err.user_message() };
            }
        }
    }

    /// Advance the clock by one second.
    pub fn tick(&mut self) -> Option<SubmissionRequest> {
        if !self.clock_running() {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.expire_if_due()
    }

    /// Re-align the clock with a wall-clock deadline. Time never flows
    /// backwards: a larger `remaining_secs` than the current value is ignored.
    pub fn sync_remaining(&mut self, remaining_secs: u64) -> Option<SubmissionRequest> {
        if !self.clock_running() {
            return None;
        }
        self.remaining_secs = self.remaining_secs.min(remaining_secs);
        self.expire_if_due()
    }

    fn expire_if_due(&mut self) -> Option<SubmissionRequest> {
        if self.remaining_secs > 0 {
            return None;
        }
        self.begin_submit(true)
    }

    fn build_request(&self) -> Option<SubmissionRequest> {
        let test = self.test.as_ref()?;
        let answers = test
            .questions
            .iter()
            .zip(&self.answers)
            .filter_map(|(question, answer)| {
                answer.as_ref().map(|selected| SubmittedAnswer {
                    question_id: question.id.clone(),
                    selected_option_id: selected.clone(),
                })
            })
            .collect();
        Some(SubmissionRequest { test_id: test.id.clone(), username: self.username.clone(), answers })
    }
}
