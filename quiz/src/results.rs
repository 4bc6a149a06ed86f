//! Results screen description for a scored submission.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use crate::types::{AnalysisResult, WeakTopic};

/// Radius of the score ring, in SVG user units.
pub const SCORE_RING_RADIUS: f64 = 45.0;

pub const NO_WEAK_TOPICS_MESSAGE: &str = "Great job! No major areas of weakness detected.";
pub const NO_STUDY_PLAN_MESSAGE: &str = "Study plan is not available.";

/// Stroke geometry for the circular score indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreRing {
    pub circumference: f64,
    pub dash_offset: f64,
}

impl ScoreRing {
    /// Ring filled to `score` percent; out-of-range scores are clamped.
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        let circumference = 2.0 * std::f64::consts::PI * SCORE_RING_RADIUS;
        let fraction = clamp_score(score) / 100.0;
        Self { circumference, dash_offset: circumference - fraction * circumference }
    }
}

/// Either the flagged topics or the congratulation line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WeakTopicsView {
    None(&'static str),
    Topics(Vec<WeakTopic>),
}

/// Either markdown to render or the fallback line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StudyPlanView {
    Unavailable(&'static str),
    Markdown(String),
}

/// Everything the results screen shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsView {
    pub score_label: String,
    pub ring: ScoreRing,
    pub correct: u32,
    pub incorrect: u32,
    pub unattempted: u32,
    pub total: u32,
    pub weak_topics: WeakTopicsView,
    pub study_plan: StudyPlanView,
}

impl ResultsView {
    #[must_use]
    pub fn from_result(result: &AnalysisResult) -> Self {
        let weak_topics = if result.weak_topics.is_empty() {
            WeakTopicsView::None(NO_WEAK_TOPICS_MESSAGE)
        } else {
            WeakTopicsView::Topics(result.weak_topics.clone())
        };
        let study_plan = match result.study_plan.as_deref().map(str::trim) {
            Some(plan) if !plan.is_empty() => StudyPlanView::Markdown(plan.to_owned()),
            _ => StudyPlanView::Unavailable(NO_STUDY_PLAN_MESSAGE),
        };
        Self {
            score_label: format_score(result.score),
            ring: ScoreRing::for_score(result.score),
            correct: result.correct_answers,
            incorrect: result.incorrect_answers,
            unattempted: result.unattempted,
            total: result.total_questions,
            weak_topics,
            study_plan,
        }
    }
}

/// Whole-percent label: `66.7` -> `"67%"`.
#[must_use]
pub fn format_score(score: f64) -> String {
    if !score.is_finite() {
        return "0%".to_owned();
    }
    #[allow(clippy::cast_possible_truncation)]
    let whole = score.round() as i64;
    format!("{whole}%")
}

fn clamp_score(score: f64) -> f64 {
    if score.is_finite() { score.clamp(0.0, 100.0) } else { 0.0 }
}
