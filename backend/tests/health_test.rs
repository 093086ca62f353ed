//! Integration tests for health check endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));
}

#[tokio::test]
async fn test_readiness_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ready"));
    assert!(body.contains("disabled"));
}

#[tokio::test]
async fn test_readiness_names_configured_provider() {
    let app = common::TestApp::with_ollama("http://127.0.0.1:9", std::time::Duration::from_secs(1));

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ollama (llama3.2)"));
}

#[tokio::test]
async fn test_api_v1_root() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Final Tap API v1"));
}

#[tokio::test]
async fn test_api_v1_root_without_trailing_slash() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Final Tap API v1");
}

#[tokio::test]
async fn test_metrics_disabled_is_not_found() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/metrics").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("NOT_FOUND"));
}
