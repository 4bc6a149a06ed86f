use super::*;
use crate::types::{AnswerOption, Question, Test};

fn session(n: usize) -> TestSession {
    let questions = (1..=n)
        .map(|i| Question {
            id: format!("q{i}"),
            text: format!("Text {i}"),
            options: vec![
                AnswerOption { id: "a".to_owned(), text: "Alpha".to_owned() },
                AnswerOption { id: "b".to_owned(), text: "Beta".to_owned() },
            ],
            subject: "Math".to_owned(),
            topic: "Algebra".to_owned(),
            difficulty: "Hard".to_owned(),
        })
        .collect();
    TestSession::started(
        Test {
            id: "t1".to_owned(),
            title: "Algebra Drill".to_owned(),
            description: String::new(),
            duration: 90,
            total_questions: 0,
            subjects: Vec::new(),
            difficulty: String::new(),
            questions,
        },
        "alice",
    )
}

fn expect_question(view: RunnerView) -> QuestionView {
    match view {
        RunnerView::Question(q) => q,
        other => panic!("expected question view, got {other:?}"),
    }
}

// =============================================================
// format_hms
// =============================================================

#[test]
fn format_hms_pads_each_component() {
    assert_eq!(format_hms(0), "00:00:00");
    assert_eq!(format_hms(59), "00:00:59");
    assert_eq!(format_hms(5400), "01:30:00");
    assert_eq!(format_hms(3723), "01:02:03");
}

#[test]
fn option_label_uppercases_id() {
    assert_eq!(option_label("b"), "B.");
}

// =============================================================
// render
// =============================================================

#[test]
fn loading_session_renders_loading() {
    assert_eq!(render(&TestSession::default()), RunnerView::Loading);
}

#[test]
fn first_question_has_prev_disabled_and_next_label() {
    let q = expect_question(render(&session(3)));
    assert_eq!(q.title, "Algebra Drill");
    assert_eq!(q.number_label, "Question 1 of 3");
    assert_eq!(q.text, "Text 1");
    assert!(q.prev_disabled);
    assert_eq!(q.next_label, "Next");
    assert_eq!(q.timer_label, "01:30:00");
    assert!(!q.input_disabled);
}

#[test]
fn last_question_shows_finish() {
    let mut s = session(2);
    s.advance();
    let q = expect_question(render(&s));
    assert_eq!(q.next_label, "Finish");
    assert!(!q.prev_disabled);
}

#[test]
fn selected_option_is_highlighted_after_returning() {
    let mut s = session(2);
    s.select_option("b").unwrap();
    s.load_question(1).unwrap();
    s.load_question(0).unwrap();
    let q = expect_question(render(&s));
    let selected: Vec<&str> = q.options.iter().filter(|o| o.selected).map(|o| o.id.as_str()).collect();
    assert_eq!(selected, vec!["b"]);
    assert_eq!(q.options[1].label, "B.");
}

#[test]
fn nav_bubbles_mark_current_answered_and_unanswered() {
    let mut s = session(3);
    s.select_option("a").unwrap();
    s.load_question(2).unwrap();
    let q = expect_question(render(&s));
    let statuses: Vec<BubbleStatus> = q.nav.iter().map(|b| b.status).collect();
    assert_eq!(statuses, vec![BubbleStatus::Answered, BubbleStatus::Unanswered, BubbleStatus::Current]);
    assert_eq!(q.nav[2].label, "3");
}

#[test]
fn confirming_reports_unanswered_count_and_disables_input() {
    let mut s = session(3);
    s.select_option("a").unwrap();
    s.request_submit();
    match render(&s) {
        RunnerView::Confirming { question, unanswered } => {
            assert_eq!(unanswered, 2);
            assert!(question.input_disabled);
        }
        other => panic!("expected confirming view, got {other:?}"),
    }
}

#[test]
fn auto_submit_renders_submitting_auto() {
    let mut s = session(1);
    s.sync_remaining(0).unwrap();
    assert_eq!(render(&s), RunnerView::Submitting { auto: true });
}

#[test]
fn failed_view_keeps_question_and_message() {
    let mut s = session(1);
    s.begin_submit(false).unwrap();
    s.complete_submit(Err(crate::ApiError::Network("down".to_owned())));
    match render(&s) {
        RunnerView::Failed { question, message } => {
            assert_eq!(question.text, "Text 1");
            assert!(message.contains("try again"));
        }
        other => panic!("expected failed view, got {other:?}"),
    }
}

#[test]
fn empty_test_renders_placeholder_label() {
    let q = expect_question(render(&session(0)));
    assert_eq!(q.number_label, "No questions");
    assert!(q.options.is_empty());
    assert_eq!(q.next_label, "Finish");
}
