//! Integration tests for the best-effort animation endpoint

mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_animation_disabled_returns_no_content() {
    let app = common::TestApp::new();

    let response = app.get("/api/v1/animation").await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_animation_is_fetched_once_and_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animation.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"v": "5.7.4", "layers": []})))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::TestApp::with_animation(&format!("{}/animation.json", server.uri()), 1000);

    let first = app.get("/api/v1/animation").await;
    let second = app.get("/api/v1/animation").await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.json()["v"], "5.7.4");
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_concurrent_first_requests_share_one_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animation.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"v": "5.7.4"}))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = common::TestApp::with_animation(&format!("{}/animation.json", server.uri()), 2000);

    let (a, b, c) = tokio::join!(
        app.get("/api/v1/animation"),
        app.get("/api/v1/animation"),
        app.get("/api/v1/animation"),
    );

    for response in [a, b, c] {
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json()["v"], "5.7.4");
    }
}

#[tokio::test]
async fn test_failed_fetch_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animation.json"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/animation.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"v": "5.7.4"})))
        .mount(&server)
        .await;

    let app = common::TestApp::with_animation(&format!("{}/animation.json", server.uri()), 1000);

    assert_eq!(app.get("/api/v1/animation").await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.get("/api/v1/animation").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_animation_not_found_returns_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animation.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let app = common::TestApp::with_animation(&format!("{}/animation.json", server.uri()), 1000);

    let response = app.get("/api/v1/animation").await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_animation_invalid_json_returns_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animation.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let app = common::TestApp::with_animation(&format!("{}/animation.json", server.uri()), 1000);

    let response = app.get("/api/v1/animation").await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_animation_timeout_returns_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animation.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"v": "5.7.4"}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let app = common::TestApp::with_animation(&format!("{}/animation.json", server.uri()), 50);

    let response = app.get("/api/v1/animation").await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_plan_succeeds_while_animation_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let app = common::TestApp::with_animation(&format!("{}/animation.json", server.uri()), 200);
    let body = json!({
        "weight_kg": 90.0,
        "height_cm": 175.0,
        "age_years": 35,
        "sex": "male",
        "activity_level": "lightly_active",
        "target_weight_kg": 80.0,
        "deficit_percent": 10
    });

    assert_eq!(app.get("/api/v1/animation").await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.post("/api/v1/plan", &body.to_string()).await.status, StatusCode::OK);
}
