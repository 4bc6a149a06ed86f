//! Pure rendering of a [`TestSession`] into a view description.
//!
//! DESIGN
//! ======
//! Front ends never read session internals to decide what to draw. They call
//! [`render`] and paint the resulting [`RunnerView`], so every visual rule
//! (labels, highlighting, disabled buttons) is covered by native tests.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::session::{Phase, TestSession};

/// Everything the test-runner screen shows for one session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunnerView {
    Loading,
    Question(QuestionView),
    Confirming { question: QuestionView, unanswered: usize },
    Submitting { auto: bool },
    Submitted { submission_id: String },
    Failed { question: QuestionView, message: String },
}

/// The current question with its navigation chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub title: String,
    /// "Question 2 of 10".
    pub number_label: String,
    pub text: String,
    pub difficulty: String,
    pub subject: String,
    pub topic: String,
    pub options: Vec<OptionView>,
    pub prev_disabled: bool,
    /// "Finish" on the last question, "Next" otherwise.
    pub next_label: &'static str,
    pub nav: Vec<NavBubble>,
    /// Remaining time as `HH:MM:SS`.
    pub timer_label: String,
    pub input_disabled: bool,
}

/// One selectable option row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub id: String,
    /// Upper-cased option id with a trailing dot, e.g. "B.".
    pub label: String,
    pub text: String,
    pub selected: bool,
}

/// Question-navigator bubble status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleStatus {
    Current,
    Answered,
    Unanswered,
}

/// One bubble in the question navigator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavBubble {
    pub index: usize,
    /// 1-based question number.
    pub label: String,
    pub status: BubbleStatus,
}

/// Map a session to what should be on screen.
#[must_use]
pub fn render(session: &TestSession) -> RunnerView {
    match session.phase() {
        Phase::Loading => RunnerView::Loading,
        Phase::InProgress => RunnerView::Question(question_view(session)),
        Phase::Confirming => RunnerView::Confirming {
            question: question_view(session),
            unanswered: session.unanswered_count(),
        },
        Phase::Submitting { auto } => RunnerView::Submitting { auto: *auto },
        Phase::Submitted { submission_id } => RunnerView::Submitted { submission_id: submission_id.clone() },
        Phase::Failed { message } => RunnerView::Failed { question: question_view(session), message: message.clone() },
    }
}

/// Render the current question regardless of phase.
#[must_use]
pub fn question_view(session: &TestSession) -> QuestionView {
    let index = session.current_index();
    let len = session.len();
    let selected = session.answer_for(index);
    let title = session.test().map(|t| t.title.clone()).unwrap_or_default();
    let input_disabled = session.is_input_locked() || session.phase() != &Phase::InProgress;

    let (text, difficulty, subject, topic, options) = match session.question(index) {
        Some(q) => (
            q.text.clone(),
            q.difficulty.clone(),
            q.subject.clone(),
            q.topic.clone(),
            q.options
                .iter()
                .map(|o| OptionView {
                    id: o.id.clone(),
                    label: option_label(&o.id),
                    text: o.text.clone(),
                    selected: selected == Some(o.id.as_str()),
                })
                .collect(),
        ),
        None => (String::new(), String::new(), String::new(), String::new(), Vec::new()),
    };

    QuestionView {
        title,
        number_label: if len == 0 { "No questions".to_owned() } else { format!("Question {} of {len}", index + 1) },
        text,
        difficulty,
        subject,
        topic,
        options,
        prev_disabled: index == 0 || input_disabled,
        next_label: if index + 1 >= len { "Finish" } else { "Next" },
        nav: nav_bubbles(session),
        timer_label: format_hms(session.remaining_secs()),
        input_disabled,
    }
}

fn nav_bubbles(session: &TestSession) -> Vec<NavBubble> {
    let current = session.current_index();
    session
        .answers()
        .iter()
        .enumerate()
        .map(|(index, answer)| NavBubble {
            index,
            label: (index + 1).to_string(),
            status: if index == current {
                BubbleStatus::Current
            } else if answer.is_some() {
                BubbleStatus::Answered
            } else {
                BubbleStatus::Unanswered
            },
        })
        .collect()
}

/// "a" -> "A.".
#[must_use]
pub fn option_label(option_id: &str) -> String {
    format!("{}.", option_id.to_uppercase())
}

/// Format seconds as zero-padded `HH:MM:SS`.
#[must_use]
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}
