//! Historical context ("backstory") for a verse: seven prose fields plus an
//! image prompt, requested as embedded JSON.

use serde::{Deserialize, Serialize};

use crate::generation::prompts::{fill_template, CONTEXT_FIELDS, CONTEXT_PROMPT_TEMPLATE};
use crate::generation::{DevotionalRequest, GenerationError};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, PLAIN_PROSE_INSTRUCTION};
use crate::llm_client::{GenerationRequest, TextGenerator};
use crate::parsing::parse_clean;
use crate::personalization::ContentMode;
use crate::scripture::ScriptureCategory;

pub const CASUAL_MAX_TOKENS: u32 = 2500;
pub const ACADEMIC_MAX_TOKENS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptureContext {
    pub who_is_speaking: String,
    pub original_listeners: String,
    pub why_the_conversation: String,
    pub historical_backdrop: String,
    pub immediate_impact: String,
    pub long_term_impact: String,
    pub setting: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextResponse {
    pub context: ScriptureContext,
    pub context_image_prompt: String,
}

fn tone_instruction(mode: ContentMode) -> &'static str {
    mode.pick(
        "Write like a knowledgeable Gospel Doctrine teacher who makes history come alive. \
         Keep it engaging and accessible.",
        "Write as a religious studies scholar. Be thorough, name your sources in prose, and \
         include linguistic analysis.",
    )
}

fn category_guidance(category: ScriptureCategory, mode: ContentMode) -> &'static str {
    match (category, mode) {
        (ScriptureCategory::BookOfMormon, ContentMode::Casual) => {
            "This is from the Book of Mormon. Cover: the ancient American setting, the prophet or \
             writer, Book of Mormon chronology, Joseph Smith's translation, and connections to the \
             brass plates or other Book of Mormon elements."
        }
        (ScriptureCategory::BookOfMormon, ContentMode::Academic) => {
            "This is from the Book of Mormon. Provide scholarly analysis including Hebraisms and \
             chiastic structures, Book of Mormon geography theories, archaeological connections, \
             Royal Skousen's textual analysis, and Brant Gardner's cultural commentary."
        }
        (ScriptureCategory::DoctrineAndCovenants, ContentMode::Casual) => {
            "This is from the Doctrine and Covenants. Cover: what prompted the revelation, who was \
             present, the location, the early Saints involved, and how it shaped the Restoration."
        }
        (ScriptureCategory::DoctrineAndCovenants, ContentMode::Academic) => {
            "This is from the Doctrine and Covenants. Provide scholarly analysis including \
             historical documents and correspondence, specific dates and locations, the early \
             Saints involved, manuscript history, and the Joseph Smith Papers."
        }
        (ScriptureCategory::PearlOfGreatPrice, ContentMode::Casual) => {
            "This is from the Pearl of Great Price. Cover: whether it comes from Moses, Abraham, or \
             Joseph Smith's history, the translation context, unique doctrinal insights, and temple \
             connections if applicable."
        }
        (ScriptureCategory::PearlOfGreatPrice, ContentMode::Academic) => {
            "This is from the Pearl of Great Price. Provide scholarly analysis including \
             translation history, Egyptological context for the Book of Abraham, comparative \
             ancient Near Eastern texts, and Hugh Nibley's research."
        }
        (ScriptureCategory::Bible, ContentMode::Casual) => {
            "This is from the Bible (KJV). Cover: the biblical setting, how LDS doctrine \
             illuminates it, connections to the Book of Mormon or the Restoration, and JST \
             changes if significant."
        }
        (ScriptureCategory::Bible, ContentMode::Academic) => {
            "This is from the Bible (KJV). Provide scholarly analysis including Hebrew (OT) or \
             Greek (NT) word studies, Dead Sea Scrolls connections, JST variants, and ancient \
             Near Eastern context."
        }
    }
}

fn fields_json(mode: ContentMode) -> String {
    CONTEXT_FIELDS
        .iter()
        .map(|(key, description, academic)| {
            let suffix = mode.pick("", *academic);
            format!("    \"{key}\": \"{description}{suffix}\"")
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Builds the provider request for the context endpoint.
pub fn build_context_request(request: &DevotionalRequest) -> GenerationRequest {
    let mode = request.content_mode;

    let system = format!(
        "{}\n\n{}\n\n{}\n\n{} Just clean, flowing prose.",
        tone_instruction(mode),
        category_guidance(request.category(), mode),
        request.personalization(),
        PLAIN_PROSE_INSTRUCTION,
    );

    let prompt = fill_template(
        CONTEXT_PROMPT_TEMPLATE,
        &[
            ("verse_reference", request.verse_reference()),
            ("verse_text", request.verse_text()),
            ("source_line", request.source_line("Source").as_str()),
            ("fields_json", fields_json(mode).as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    );

    GenerationRequest::new(
        system,
        prompt,
        mode.pick(CASUAL_MAX_TOKENS, ACADEMIC_MAX_TOKENS),
    )
}

/// Generates, parses, and sanitizes the verse context. A response missing
/// any field is an error; no partial context is returned.
pub async fn generate_context(
    llm: &dyn TextGenerator,
    request: &DevotionalRequest,
) -> Result<ContextResponse, GenerationError> {
    let text = llm.generate(&build_context_request(request)).await?;
    Ok(parse_clean(&text)?)
}
