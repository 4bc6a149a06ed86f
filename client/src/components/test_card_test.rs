use super::*;

#[test]
fn card_text_formats_badges_and_link() {
    let test = TestSummary {
        id: "t7".to_owned(),
        title: "JEE Mock".to_owned(),
        description: "Full syllabus".to_owned(),
        duration: 180,
        total_questions: 75,
        subjects: vec!["Physics".to_owned(), "Chemistry".to_owned(), "Math".to_owned()],
        difficulty: "Hard".to_owned(),
    };
    assert_eq!(
        card_text(&test),
        CardText {
            subjects: "Physics, Chemistry, Math".to_owned(),
            difficulty: "Hard".to_owned(),
            duration: "180 min".to_owned(),
            questions: "75 questions".to_owned(),
            href: "/test?id=t7".to_owned(),
        }
    );
}

#[test]
fn card_text_with_no_subjects_and_single_question() {
    let test = TestSummary {
        id: "t1".to_owned(),
        title: "Quiz".to_owned(),
        description: String::new(),
        duration: 5,
        total_questions: 1,
        subjects: Vec::new(),
        difficulty: String::new(),
    };
    assert_eq!(card_text(&test).subjects, "");
    assert_eq!(card_text(&test).questions, "1 question");
}
