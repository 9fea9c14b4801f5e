// Devotional content generation.
// One module per endpoint: each owns its request builder (pure) and its
// generate -> parse -> sanitize pipeline. All provider calls go through
// the `TextGenerator` trait in llm_client.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::parsing::ParseError;
use crate::personalization::{build_personalization_context, ContentMode};
use crate::scripture::{classify, ScriptureCategory};

pub mod context;
pub mod handlers;
pub mod imagery;
pub mod interpretation;
pub mod language;
pub mod poem;
pub mod prompts;
pub mod story;
pub mod verse;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request body is not valid JSON: {0}")]
    Body(serde_json::Error),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no verse source produced a verse")]
    SourcesExhausted,
}

/// Request body shared by the verse-based endpoints. Every field is optional
/// so a sparse body never fails to decode; each endpoint reads what it needs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DevotionalRequest {
    pub verse_reference: Option<String>,
    pub verse_text: Option<String>,
    pub age_range: Option<String>,
    pub gender: Option<String>,
    pub stage_situation: Option<String>,
    pub source: Option<String>,
    pub content_mode: ContentMode,
    pub language: Option<String>,
    pub poem_type: Option<String>,
    pub story_type: Option<String>,
}

impl DevotionalRequest {
    pub fn verse_reference(&self) -> &str {
        self.verse_reference.as_deref().unwrap_or_default()
    }

    pub fn verse_text(&self) -> &str {
        self.verse_text.as_deref().unwrap_or_default()
    }

    /// The source hint, if one was given and is not blank.
    pub fn source(&self) -> Option<&str> {
        non_blank(self.source.as_deref())
    }

    /// Recomputed per request from the reference and source hint.
    pub fn category(&self) -> ScriptureCategory {
        classify(self.verse_reference(), self.source())
    }

    pub fn personalization(&self) -> String {
        build_personalization_context(
            self.age_range.as_deref().unwrap_or_default(),
            self.gender.as_deref().unwrap_or_default(),
            self.stage_situation.as_deref().unwrap_or_default(),
            self.content_mode,
        )
    }

    /// `"(<label>: <source>)"`, or empty when no source was given.
    pub fn source_line(&self, label: &str) -> String {
        self.source()
            .map(|source| format!("({label}: {source})"))
            .unwrap_or_default()
    }
}

/// Decodes a request body as JSON whatever its `Content-Type`. A failure is
/// reported like any other generation failure for the endpoint.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, GenerationError> {
    serde_json::from_slice(body).map_err(GenerationError::Body)
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
