//! Axum route handlers for the Generation API.
//!
//! Each handler decodes the body, runs its endpoint pipeline and maps failure
//! to the endpoint's fixed message. Bodies are read as raw bytes and decoded
//! as JSON whatever the `Content-Type`, so an undecodable body fails like any
//! other generation error. The story handler is the exception: it always
//! renders a story-shaped body.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::generation::context::{generate_context, ContextResponse};
use crate::generation::imagery::{generate_imagery, ImageryResponse};
use crate::generation::interpretation::{generate_interpretation, InterpretationResponse};
use crate::generation::poem::{generate_poem, PoemResponse};
use crate::generation::story::{generate_story, has_required_fields, Story};
use crate::generation::verse::{lookup_verse, verse_of_the_day, Verse, VerseRequest};
use crate::generation::{decode_body, DevotionalRequest};
use crate::state::AppState;

/// POST /api/generate-context
pub async fn handle_context(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ContextResponse>, AppError> {
    let request: DevotionalRequest =
        decode_body(&body).map_err(AppError::generation("Failed to generate context"))?;
    info!(
        "Generating context for {} ({})",
        request.verse_reference(),
        request.category().display_name()
    );

    let response = generate_context(state.llm.as_ref(), &request)
        .await
        .map_err(AppError::generation("Failed to generate context"))?;

    Ok(Json(response))
}

/// POST /api/generate-imagery
pub async fn handle_imagery(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ImageryResponse>, AppError> {
    let request: DevotionalRequest =
        decode_body(&body).map_err(AppError::generation("Failed to generate imagery"))?;
    info!(
        "Generating imagery for {} ({})",
        request.verse_reference(),
        request.category().display_name()
    );

    let response = generate_imagery(state.llm.as_ref(), &request)
        .await
        .map_err(AppError::generation("Failed to generate imagery"))?;

    Ok(Json(response))
}

/// POST /api/generate-interpretation
pub async fn handle_interpretation(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<InterpretationResponse>, AppError> {
    let request: DevotionalRequest =
        decode_body(&body).map_err(AppError::generation("Failed to generate interpretation"))?;
    info!(
        "Generating interpretation for {} (language: {})",
        request.verse_reference(),
        request.language.as_deref().unwrap_or("en")
    );

    let response = generate_interpretation(state.llm.as_ref(), &request)
        .await
        .map_err(AppError::generation("Failed to generate interpretation"))?;

    Ok(Json(response))
}

/// POST /api/generate-poem
pub async fn handle_poem(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PoemResponse>, AppError> {
    let request: DevotionalRequest =
        decode_body(&body).map_err(AppError::generation("Failed to generate poem"))?;
    info!("Generating poem for {}", request.verse_reference());

    let response = generate_poem(state.llm.as_ref(), &request)
        .await
        .map_err(AppError::generation("Failed to generate poem"))?;

    Ok(Json(response))
}

/// POST /api/generate-story
///
/// 400 with a placeholder when required fields are missing; 200 with a
/// different placeholder when the body cannot be decoded or generation fails.
pub async fn handle_story(State(state): State<AppState>, body: Bytes) -> Response {
    let request: DevotionalRequest = match decode_body(&body) {
        Ok(request) => request,
        Err(e) => {
            error!("Story generation failed: {e}");
            return Json(Story::unavailable()).into_response();
        }
    };
    if !has_required_fields(&request) {
        warn!("Story request missing required fields");
        return (StatusCode::BAD_REQUEST, Json(Story::missing_fields())).into_response();
    }
    info!(
        "Generating {} story for {}",
        request.story_type.as_deref().unwrap_or_default(),
        request.verse_reference()
    );

    match generate_story(state.llm.as_ref(), &request).await {
        Ok(story) => Json(story).into_response(),
        Err(e) => {
            error!("Story generation failed: {e}");
            Json(Story::unavailable()).into_response()
        }
    }
}

/// POST /api/generate-verse
///
/// A non-blank `verseQuery` is looked up directly; otherwise the verse of the
/// day comes from the requested source with a Come, Follow Me fallback.
pub async fn handle_verse(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Verse>, AppError> {
    let request: VerseRequest =
        decode_body(&body).map_err(AppError::generation("Failed to generate verse"))?;

    if let Some(query) = request.query() {
        let verse = lookup_verse(state.llm.as_ref(), query)
            .await
            .map_err(AppError::generation("Failed to generate verse"))?;
        return Ok(Json(verse));
    }

    let today = chrono::Local::now().date_naive();
    let verse = verse_of_the_day(state.llm.as_ref(), request.verse_source(), today)
        .await
        .map_err(AppError::generation("Unable to fetch verse of the day"))?;

    Ok(Json(verse))
}
