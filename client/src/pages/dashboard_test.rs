use super::*;
use quiz::ApiError;
use quiz::types::TestSummary;

fn summary(id: &str) -> TestSummary {
    TestSummary {
        id: id.to_owned(),
        title: format!("Test {id}"),
        description: String::new(),
        duration: 60,
        total_questions: 20,
        subjects: vec!["Physics".to_owned()],
        difficulty: "Medium".to_owned(),
    }
}

#[test]
fn empty_catalog_shows_placeholder() {
    let state = CatalogState::default();
    assert_eq!(catalog_notice(&state).as_deref(), Some(EMPTY_CATALOG_MESSAGE));
}

#[test]
fn loaded_catalog_has_no_notice() {
    let state = CatalogState { items: vec![summary("t1")], ..CatalogState::default() };
    assert_eq!(catalog_notice(&state), None);
}

#[test]
fn first_load_shows_loading() {
    let mut state = CatalogState::default();
    state.begin_load();
    assert_eq!(catalog_notice(&state).as_deref(), Some("Loading tests..."));
}

#[test]
fn failure_notice_wins_over_empty_placeholder() {
    let mut state = CatalogState::default();
    state.begin_load();
    state.finish_load(Err(ApiError::Network("offline".to_owned())));
    assert!(catalog_notice(&state).is_some_and(|n| n.starts_with("Failed to load tests.")));
}
