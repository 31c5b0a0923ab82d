//! Integration tests for REST API endpoints
//!
//! These tests build the real router on top of a scripted mock LLM and
//! exercise the endpoints end-to-end.

use askroute_llm::{GroqProvider, MockProvider, QuestionRouter};
use askroute_server::api::create_router;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Helper to create the app with a mock LLM returning `responses` in order
fn create_test_app(responses: &[&str]) -> (Arc<MockProvider>, Router) {
    let provider = Arc::new(MockProvider::with_responses(responses.iter().copied()));
    let router = QuestionRouter::with_defaults(provider.clone());
    (provider, create_router(Arc::new(router)))
}

fn ask_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_, app) = create_test_app(&[]);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_legal_question() {
    let (provider, app) = create_test_app(&[
        "Classification: Legal\nReasoning (if applicable): contract law",
        "A contract is legally binding once offer, acceptance and consideration exist.",
    ]);

    let (status, json) = send(
        app,
        ask_request("/ask/", json!({"text": "What are the legal implications of a contract?"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "legal");
    assert!(!json["answer"].as_str().unwrap().is_empty());
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn test_medical_question() {
    let (_, app) = create_test_app(&[
        "Classification: Medical",
        "Reduce saturated fat and increase soluble fiber.",
    ]);

    let (status, json) = send(
        app,
        ask_request(
            "/ask/",
            json!({"text": "What dietary changes can help with high cholesterol?"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "medical");
    assert_eq!(json["answer"], "Reduce saturated fat and increase soluble fiber.");
}

#[tokio::test]
async fn test_accounting_question() {
    let (provider, app) = create_test_app(&[
        "Classification: ACCOUNTING\nReasoning: revenue recognition",
        "Use the percentage-of-completion method.",
    ]);

    let (status, json) = send(
        app,
        ask_request(
            "/ask/",
            json!({"text": "How should I record revenue from a long-term contract?"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "accounting");

    let requests = provider.requests();
    assert!(requests[1].prompt.contains("expert accountant"));
    assert!(requests[1]
        .prompt
        .contains("How should I record revenue from a long-term contract?"));
}

#[tokio::test]
async fn test_off_topic_question_cannot_be_classified() {
    let (provider, app) = create_test_app(&[
        "Classification: Other\nReasoning: weather is not legal, accounting or medical",
    ]);

    let (status, json) = send(
        app,
        ask_request("/ask/", json!({"text": "What's the weather today?"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("cannot be classified"));
    assert_eq!(json["status"], 400);
    // Only the classification call happened
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_unparsable_classification_cannot_be_classified() {
    let (provider, app) = create_test_app(&["I'm not sure what this is about."]);

    let (status, json) = send(app, ask_request("/ask/", json!({"text": "Blorp?"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("cannot be classified"));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_question_with_braces() {
    let (provider, app) = create_test_app(&["Classification: Legal", "It depends."]);
    let text = "Is clause {0} in {contract} enforceable? {{}}";

    let (status, json) = send(app, ask_request("/ask/", json!({ "text": text }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "legal");
    for request in provider.requests() {
        assert!(request.prompt.contains(text));
    }
}

#[tokio::test]
async fn test_route_without_trailing_slash() {
    let (_, app) = create_test_app(&["Classification: Medical", "Rest and fluids."]);

    let (status, json) = send(
        app,
        ask_request("/ask", json!({"text": "How do I treat a cold?"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "medical");
}

#[tokio::test]
async fn test_blank_question_rejected_without_llm_call() {
    let (provider, app) = create_test_app(&[]);

    let (status, json) = send(app, ask_request("/ask/", json!({"text": "   "}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("non-empty"));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_missing_text_field() {
    let (provider, app) = create_test_app(&[]);

    let (status, json) = send(app, ask_request("/ask/", json!({"question": "hi"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Invalid JSON data"));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_malformed_json() {
    let (_, app) = create_test_app(&[]);

    let request = Request::builder()
        .method("POST")
        .uri("/ask/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("JSON syntax error"));
}

#[tokio::test]
async fn test_missing_content_type() {
    let (_, app) = create_test_app(&[]);

    let request = Request::builder()
        .method("POST")
        .uri("/ask/")
        .body(Body::from(r#"{"text": "hi"}"#))
        .unwrap();
    let (status, json) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Content-Type"));
}

#[tokio::test]
async fn test_llm_failure_is_server_error() {
    let provider = Arc::new(MockProvider::failing("upstream unavailable"));
    let app = create_router(Arc::new(QuestionRouter::with_defaults(provider.clone())));

    let (status, json) = send(
        app,
        ask_request("/ask/", json!({"text": "What are the legal implications of a contract?"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], 500);
    assert_eq!(json["error"], "Failed to generate an answer.");
    assert!(!json.to_string().contains("upstream unavailable"));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_end_to_end_with_http_provider() {
    let mut server = mockito::Server::new_async().await;

    let completion = |content: &str| {
        json!({
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
            ],
            "usage": { "total_tokens": 42 }
        })
        .to_string()
    };

    let classify_mock = server
        .mock("POST", "/chat/completions")
        .match_body(mockito::Matcher::Regex("categorizing questions".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion("Classification: Medical"))
        .expect(1)
        .create_async()
        .await;

    let answer_mock = server
        .mock("POST", "/chat/completions")
        .match_body(mockito::Matcher::Regex("expert medical doctor".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion("Drink water and rest."))
        .expect(1)
        .create_async()
        .await;

    let provider = Arc::new(GroqProvider::with_base_url(
        "test-key".to_string(),
        server.url(),
    ));
    let app = create_router(Arc::new(QuestionRouter::with_defaults(provider)));

    let (status, json) = send(
        app,
        ask_request("/ask/", json!({"text": "How can I get over a headache?"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "medical");
    assert_eq!(json["answer"], "Drink water and rest.");

    classify_mock.assert_async().await;
    answer_mock.assert_async().await;
}

#[tokio::test]
async fn test_end_to_end_upstream_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/chat/completions")
        .with_status(503)
        .with_body("service unavailable")
        .create_async()
        .await;

    let provider = Arc::new(GroqProvider::with_base_url(
        "test-key".to_string(),
        server.url(),
    ));
    let app = create_router(Arc::new(QuestionRouter::with_defaults(provider)));

    let (status, _) = send(
        app,
        ask_request("/ask/", json!({"text": "What are the legal implications of a contract?"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
