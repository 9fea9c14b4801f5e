use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::GenerationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Response bodies are always `{ "error": "<message>" }`. Body, provider and
/// parse details are logged here and never sent to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}: {source}")]
    Generation {
        message: &'static str,
        #[source]
        source: GenerationError,
    },
}

impl AppError {
    /// Wraps a pipeline failure with the user-facing message for its endpoint.
    pub fn generation(message: &'static str) -> impl FnOnce(GenerationError) -> AppError {
        move |source| AppError::Generation { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Generation { message, source } => {
                tracing::error!("{message}: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, *message)
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    #[tokio::test]
    async fn test_generation_error_hides_provider_detail() {
        let err = AppError::generation("Failed to generate poem")(GenerationError::Llm(
            LlmError::Api {
                status: 401,
                message: "invalid api key sk-123".to_string(),
            },
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Failed to generate poem" }));
    }

    #[test]
    fn test_undecodable_body_is_server_error() {
        let body_error = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = AppError::generation("Failed to generate context")(GenerationError::Body(
            body_error,
        ));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
