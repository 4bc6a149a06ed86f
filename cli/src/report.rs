//! Plain-text results report.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::fmt::Write as _;

use quiz::results::{ResultsView, StudyPlanView, WeakTopicsView};
use quiz::types::TestSummary;

pub fn render_results(view: &ResultsView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Score: {}", view.score_label);
    let _ = writeln!(out, "  Correct:         {}", view.correct);
    let _ = writeln!(out, "  Incorrect:       {}", view.incorrect);
    let _ = writeln!(out, "  Unattempted:     {}", view.unattempted);
    let _ = writeln!(out, "  Total Questions: {}", view.total);
    let _ = writeln!(out);
    out.push_str("Areas to Improve\n");
    match &view.weak_topics {
        WeakTopicsView::None(message) => {
            let _ = writeln!(out, "  {message}");
        }
        WeakTopicsView::Topics(topics) => {
            for topic in topics {
                let _ = writeln!(out, "  - [{}] {}", topic.subject, topic.topic);
            }
        }
    }
    let _ = writeln!(out);
    out.push_str("Personalized Study Plan\n");
    match &view.study_plan {
        StudyPlanView::Markdown(markdown) => {
            let _ = writeln!(out, "{markdown}");
        }
        StudyPlanView::Unavailable(message) => {
            let _ = writeln!(out, "  {message}");
        }
    }
    out
}

/// One line per available test, or the empty-catalog message.
pub fn render_catalog(tests: &[TestSummary]) -> String {
    if tests.is_empty() {
        return "No tests available at the moment.\n".to_owned();
    }
    let mut out = String::new();
    for test in tests {
        let questions = if test.total_questions == 1 { "question" } else { "questions" };
        let _ = writeln!(
            out,
            "{}  {}  [{} | {} | {} min | {} {questions}]",
            test.id,
            test.title,
            test.subjects.join(", "),
            test.difficulty,
            test.duration,
            test.total_questions,
        );
    }
    out
}
