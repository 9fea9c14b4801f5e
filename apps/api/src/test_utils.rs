//! Scripted provider and request helpers shared by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::config::Config;
use crate::llm_client::{GenerationRequest, LlmError, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

/// Replays canned model outputs in order. `None` entries, and every call
/// once the script runs out, fail the way an unavailable provider would.
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Option<String>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| r.map(Into::into)).collect()),
            requests: Mutex::default(),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().pop_front().flatten() {
            Some(reply) => Ok(reply),
            None => Err(LlmError::Api {
                status: 503,
                message: "scripted failure".to_string(),
            }),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        openrouter_api_key: "test-key".to_string(),
        openrouter_model_id: "test/model".to_string(),
        openrouter_base_url: "http://localhost:0".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
    }
}

/// Router wired to `llm`; keep the `Arc` to inspect recorded requests.
pub fn test_router(llm: Arc<ScriptedGenerator>) -> Router {
    build_router(AppState {
        llm,
        config: test_config(),
    })
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, uri, body.to_string()).await
}

pub async fn post_raw(router: Router, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(router, request).await
}

/// POST with no `Content-Type` header at all.
pub async fn post_untyped(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}
