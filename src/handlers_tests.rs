//! Tests for the HTTP handlers

use super::*;
use axum::{body::Body, http::Request, response::Response};
use serde_json::json;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

fn test_app() -> Router {
    let client =
        ReqwestClient::with_timeouts(Duration::from_secs(5), Duration::from_secs(2)).unwrap();
    let state = AppState {
        relay_service: RelayService::new(client),
    };
    create_router(state, &test_config())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ============================================================================
// Relay endpoint
// ============================================================================

#[tokio::test]
async fn send_webhook_success_returns_200() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_app()
        .oneshot(post_json(
            "/api/send-webhook",
            json!({
                "platform": "slack",
                "webhookUrl": server.uri(),
                "payload": { "text": "hi" }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "success": true, "message": "Webhook sent successfully." })
    );
}

#[tokio::test]
async fn send_webhook_missing_fields_returns_400() {
    let response = test_app()
        .oneshot(post_json("/api/send-webhook", json!({ "platform": "discord" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Webhook URL and payload are required.");
}

#[tokio::test]
async fn send_webhook_invalid_shape_returns_400() {
    let response = test_app()
        .oneshot(post_json(
            "/api/send-webhook",
            json!({
                "platform": "slack",
                "webhookUrl": "https://example.com/hook",
                "payload": {}
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "Slack webhook requires either text or blocks in the payload."
    );
}

#[tokio::test]
async fn send_webhook_passes_through_upstream_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let response = test_app()
        .oneshot(post_json(
            "/api/send-webhook",
            json!({
                "platform": "discord",
                "webhookUrl": server.uri(),
                "payload": { "content": "hi" }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Failed to send webhook. Error: not found");
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn send_webhook_transport_failure_returns_500() {
    let response = test_app()
        .oneshot(post_json(
            "/api/send-webhook",
            json!({
                "platform": "discord",
                "webhookUrl": "http://127.0.0.1:1/hook",
                "payload": { "content": "hi" }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("An error occurred while sending the webhook: "));
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn send_webhook_rejects_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/send-webhook")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn send_webhook_rejects_unknown_platform() {
    let response = test_app()
        .oneshot(post_json(
            "/api/send-webhook",
            json!({
                "platform": "teams",
                "webhookUrl": "https://example.com/hook",
                "payload": { "text": "hi" }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Snippets, languages, compose
// ============================================================================

#[tokio::test]
async fn snippet_endpoint_returns_plain_text() {
    let response = test_app()
        .oneshot(post_json(
            "/api/snippet",
            json!({
                "language": "python",
                "webhookUrl": "https://example.com/hook",
                "payload": { "content": "hi" },
                "platform": "discord"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("import requests"));
    assert!(text.contains("https://example.com/hook"));
}

#[tokio::test]
async fn snippet_endpoint_defaults_unknown_language_to_javascript() {
    let request = |language: &str| {
        post_json(
            "/api/snippet",
            json!({
                "language": language,
                "webhookUrl": "https://example.com/hook",
                "payload": { "content": "hi" },
                "platform": "discord"
            }),
        )
    };

    let cobol = test_app().oneshot(request("cobol")).await.unwrap();
    let javascript = test_app().oneshot(request("javascript")).await.unwrap();

    assert_eq!(body_bytes(cobol).await, body_bytes(javascript).await);
}

#[tokio::test]
async fn languages_endpoint_lists_registry() {
    let request = Request::builder()
        .uri("/api/languages")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let languages = body.as_array().unwrap();
    assert_eq!(languages.len(), 8);
    assert_eq!(languages[0], json!({ "key": "javascript", "label": "JavaScript" }));
}

#[tokio::test]
async fn compose_endpoint_builds_discord_embed() {
    let response = test_app()
        .oneshot(post_json(
            "/api/compose",
            json!({
                "platform": "discord",
                "embed": { "title": "Hi", "description": "there", "color": "#ff0000" }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "embeds": [{ "title": "Hi", "description": "there", "color": 16711680 }] })
    );
}

// ============================================================================
// Misc
// ============================================================================

#[tokio::test]
async fn health_check_reports_version() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let request = Request::builder()
        .uri("/does-not-exist")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let huge = "x".repeat(MAX_BODY_BYTES + 1);
    let response = test_app()
        .oneshot(post_json(
            "/api/send-webhook",
            json!({
                "platform": "slack",
                "webhookUrl": "https://example.com/hook",
                "payload": { "text": huge }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
