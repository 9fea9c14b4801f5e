pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate-context", post(handlers::handle_context))
        .route("/api/generate-imagery", post(handlers::handle_imagery))
        .route(
            "/api/generate-interpretation",
            post(handlers::handle_interpretation),
        )
        .route("/api/generate-poem", post(handlers::handle_poem))
        .route("/api/generate-story", post(handlers::handle_story))
        .route("/api/generate-verse", post(handlers::handle_verse))
        .with_state(state)
}
