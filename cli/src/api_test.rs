use super::*;
use quiz::types::SubmittedAnswer;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

// =============================================================
// Auth
// =============================================================

#[tokio::test]
async fn login_posts_form_and_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=alice"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "access_token": "tok-1", "token_type": "bearer" })),
        )
        .mount(&server)
        .await;

    let response = client(&server).login("alice", "secret").await.unwrap();
    assert_eq!(response.access_token, "tok-1");
}

#[tokio::test]
async fn login_rejection_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({ "detail": "Incorrect username or password" })),
        )
        .mount(&server)
        .await;

    let err = client(&server).login("alice", "wrong").await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
}

#[tokio::test]
async fn register_rejection_carries_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({ "detail": "Username already registered" })),
        )
        .mount(&server)
        .await;

    let body = RegisterRequest {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "pw".to_owned(),
    };
    let err = client(&server).register(&body).await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 400, detail: Some("Username already registered".to_owned()) });
}

// =============================================================
// Bearer-protected calls
// =============================================================

#[tokio::test]
async fn tests_listing_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tests"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "t1",
                "title": "Physics Mock",
                "description": "Mechanics",
                "duration": 30,
                "total_questions": 10,
                "subjects": ["Physics"],
                "difficulty": "Medium"
            }
        ])))
        .mount(&server)
        .await;

    let tests = client(&server).with_token("tok-1").tests().await.unwrap();
    assert_eq!(tests.len(), 1);
    assert_eq!(tests[0].title, "Physics Mock");
}

#[tokio::test]
async fn missing_token_fails_without_a_request() {
    let server = MockServer::start().await;
    let err = client(&server).tests().await.unwrap_err();
    assert!(err.is_auth_failure());
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn submit_posts_to_test_submit_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tests/t1/submit"))
        .and(body_string_contains("\"selected_option_id\":\"b\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "submission_id": "s-42" })))
        .expect(1)
        .mount(&server)
        .await;

    let body = SubmissionRequest {
        test_id: "t1".to_owned(),
        username: "alice".to_owned(),
        answers: vec![SubmittedAnswer { question_id: "q2".to_owned(), selected_option_id: "b".to_owned() }],
    };
    let receipt = client(&server).with_token("tok").submit(&body).await.unwrap();
    assert_eq!(receipt.submission_id, "s-42");
}

#[tokio::test]
async fn expired_token_on_analysis_is_auth_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analysis/s-1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client(&server).with_token("stale").analysis("s-1").await.unwrap_err();
    assert!(err.is_auth_failure());
}
