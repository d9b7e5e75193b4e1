use super::mocks::MockModelClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use viva_backend::{
    assessment::AssessmentService,
    config::InferenceConfig,
    llm::{ModelClient, OllamaClient},
    server,
    store::InMemoryStore,
};

pub const EVALUATION_OUTPUT: &str = r#"Here is my evaluation:
{
    "total_score": 78,
    "clarity": 8,
    "technical_depth": 7.5,
    "originality": 6,
    "feedback": "Clear argument, limited novelty."
}
Let me know if you need more."#;

pub const VIVA_OUTPUT: &str = r#"```json
{"questions": ["What is ownership?", "Why does borrowing matter?", "When would you use Rc?"]}
```"#;

/// Router backed by an in-memory store and the given model.
pub fn create_test_app(model: Arc<dyn ModelClient>) -> Router {
    let assessment = AssessmentService::new(Arc::new(InMemoryStore::new()), model);
    server::router(Arc::new(assessment))
}

pub fn create_mock_app(mock: MockModelClient) -> (Router, Arc<MockModelClient>) {
    let mock = Arc::new(mock);
    (create_test_app(mock.clone()), mock)
}

/// Router whose model client talks to `base_url` over HTTP.
pub fn create_ollama_app(base_url: &str) -> Router {
    let client = OllamaClient::new(InferenceConfig {
        base_url: base_url.to_string(),
        model: "mistral".to_string(),
        timeout_secs: 5,
    })
    .unwrap();
    create_test_app(Arc::new(client))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Uploads `text` and returns the new submission id.
pub async fn upload(app: &Router, text: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/upload",
        Some(serde_json::json!({ "text": text })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["submission_id"].as_str().unwrap().to_string()
}
