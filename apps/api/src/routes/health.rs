use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and configured model.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "devotional-api",
        "model": state.config.openrouter_model_id,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;

    use crate::test_utils::{get, test_router, ScriptedGenerator};

    #[tokio::test]
    async fn test_health_reports_model() {
        let router = test_router(Arc::new(ScriptedGenerator::default()));
        let (status, body) = get(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "devotional-api");
        assert_eq!(body["model"], "test/model");
    }
}
