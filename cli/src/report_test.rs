use super::*;
use quiz::types::{AnalysisResult, WeakTopic};

fn analysis(weak_topics: Vec<WeakTopic>, study_plan: Option<&str>) -> AnalysisResult {
    AnalysisResult {
        submission_id: "s1".to_owned(),
        score: 66.7,
        total_questions: 3,
        correct_answers: 2,
        incorrect_answers: 1,
        unattempted: 0,
        weak_topics,
        study_plan: study_plan.map(str::to_owned),
    }
}

#[test]
fn report_rounds_score_and_lists_weak_topics() {
    let topics = vec![WeakTopic { subject: "Physics".to_owned(), topic: "Optics".to_owned() }];
    let text = render_results(&ResultsView::from_result(&analysis(topics, Some("# Plan"))));
    assert!(text.starts_with("Score: 67%\n"));
    assert!(text.contains("  - [Physics] Optics\n"));
    assert!(text.contains("# Plan\n"));
}

#[test]
fn report_without_weak_topics_or_plan_uses_fallbacks() {
    let text = render_results(&ResultsView::from_result(&analysis(Vec::new(), None)));
    assert!(text.contains("Great job! No major areas of weakness detected."));
    assert!(text.contains("Study plan is not available."));
}

#[test]
fn catalog_lists_tests_or_placeholder() {
    assert_eq!(render_catalog(&[]), "No tests available at the moment.\n");
    let test = TestSummary {
        id: "t1".to_owned(),
        title: "Mock".to_owned(),
        description: String::new(),
        duration: 45,
        total_questions: 1,
        subjects: vec!["Physics".to_owned(), "Math".to_owned()],
        difficulty: "Hard".to_owned(),
    };
    assert_eq!(render_catalog(&[test]), "t1  Mock  [Physics, Math | Hard | 45 min | 1 question]\n");
}
