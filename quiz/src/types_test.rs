use super::*;

// =============================================================
// Test / TestSummary decoding
// =============================================================

#[test]
fn test_summary_decodes_dashboard_payload() {
    let raw = serde_json::json!({
        "id": "t1",
        "title": "Physics Mock 1",
        "description": "Kinematics and forces",
        "duration": 30,
        "total_questions": 10,
        "subjects": ["Physics", "Math"],
        "difficulty": "Medium"
    });
    let summary: TestSummary = serde_json::from_value(raw).unwrap();
    assert_eq!(summary.id, "t1");
    assert_eq!(summary.duration, 30);
    assert_eq!(summary.subjects, vec!["Physics".to_owned(), "Math".to_owned()]);
}

#[test]
fn test_summary_tolerates_missing_descriptive_fields() {
    let raw = serde_json::json!({ "id": "t2", "title": "Bare" });
    let summary: TestSummary = serde_json::from_value(raw).unwrap();
    assert_eq!(summary.description, "");
    assert_eq!(summary.duration, 0);
    assert!(summary.subjects.is_empty());
}

#[test]
fn test_decodes_questions_and_options() {
    let raw = serde_json::json!({
        "id": "t1",
        "title": "Mock",
        "duration": 2,
        "questions": [
            {
                "id": "q1",
                "text": "2 + 2 = ?",
                "options": [{ "id": "a", "text": "3" }, { "id": "b", "text": "4" }],
                "subject": "Math",
                "topic": "Arithmetic",
                "difficulty": "Easy"
            }
        ]
    });
    let test: Test = serde_json::from_value(raw).unwrap();
    assert_eq!(test.questions.len(), 1);
    assert_eq!(test.questions[0].options[1].text, "4");
    assert_eq!(test.duration_secs(), 120);
}

#[test]
fn test_without_id_is_rejected() {
    let raw = serde_json::json!({ "title": "No id" });
    assert!(serde_json::from_value::<Test>(raw).is_err());
}

#[test]
fn question_has_option_matches_ids_only() {
    let q = Question {
        id: "q1".to_owned(),
        text: "?".to_owned(),
        options: vec![AnswerOption { id: "a".to_owned(), text: "b".to_owned() }],
        subject: String::new(),
        topic: String::new(),
        difficulty: String::new(),
    };
    assert!(q.has_option("a"));
    assert!(!q.has_option("b"));
}

// =============================================================
// Submission / analysis
// =============================================================

#[test]
fn submission_request_serializes_wire_field_names() {
    let req = SubmissionRequest {
        test_id: "t1".to_owned(),
        username: "alice".to_owned(),
        answers: vec![SubmittedAnswer { question_id: "q2".to_owned(), selected_option_id: "b".to_owned() }],
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "test_id": "t1",
            "username": "alice",
            "answers": [{ "question_id": "q2", "selected_option_id": "b" }]
        })
    );
}

#[test]
fn submission_receipt_ignores_scoring_fields() {
    let raw = serde_json::json!({
        "submission_id": "s-9",
        "test_id": "t1",
        "score": 50.0,
        "weak_topics": []
    });
    let receipt: SubmissionReceipt = serde_json::from_value(raw).unwrap();
    assert_eq!(receipt.submission_id, "s-9");
}

#[test]
fn analysis_result_allows_null_study_plan() {
    let raw = serde_json::json!({
        "submission_id": "s1",
        "score": 66.7,
        "total_questions": 3,
        "correct_answers": 2,
        "incorrect_answers": 1,
        "unattempted": 0,
        "weak_topics": [{ "subject": "Physics", "topic": "Optics" }],
        "study_plan": null
    });
    let result: AnalysisResult = serde_json::from_value(raw).unwrap();
    assert_eq!(result.study_plan, None);
    assert_eq!(result.weak_topics[0].topic, "Optics");
}

#[test]
fn login_response_defaults_token_type() {
    let raw = serde_json::json!({ "access_token": "abc" });
    let login: LoginResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(login.access_token, "abc");
    assert_eq!(login.token_type, "");
}
