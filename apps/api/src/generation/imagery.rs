//! Symbols and metaphors in a verse: exactly four items, requested as
//! embedded JSON.

use serde::{Deserialize, Serialize};

use crate::generation::prompts::{fill_template, IMAGERY_ICONS, IMAGERY_PROMPT_TEMPLATE};
use crate::generation::{DevotionalRequest, GenerationError};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, PLAIN_PROSE_INSTRUCTION};
use crate::llm_client::{GenerationRequest, TextGenerator};
use crate::parsing::{parse_clean, ParseError};
use crate::personalization::ContentMode;
use crate::scripture::ScriptureCategory;

pub const CASUAL_MAX_TOKENS: u32 = 1500;
pub const ACADEMIC_MAX_TOKENS: u32 = 3000;
pub const IMAGERY_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageryItem {
    pub title: String,
    pub sub: String,
    pub icon: String,
    pub image_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageryResponse {
    pub imagery: Vec<ImageryItem>,
}

fn category_guidance(category: ScriptureCategory, mode: ContentMode) -> &'static str {
    match (category, mode) {
        (ScriptureCategory::BookOfMormon, ContentMode::Casual) => {
            "This is from the Book of Mormon. Reference symbols like the Liahona, the iron rod, \
             the tree of life, and the waters of Mormon."
        }
        (ScriptureCategory::BookOfMormon, ContentMode::Academic) => {
            "This is from the Book of Mormon. Draw on scholarly analysis of its symbols: temple \
             imagery, chiastic symbolism, and ancient Near Eastern parallels."
        }
        (ScriptureCategory::DoctrineAndCovenants, ContentMode::Casual) => {
            "This is from the Doctrine and Covenants. Reference Restoration symbols like the \
             Sacred Grove, the Kirtland Temple, and priesthood keys."
        }
        (ScriptureCategory::DoctrineAndCovenants, ContentMode::Academic) => {
            "This is from the Doctrine and Covenants. Discuss Restoration symbolism with \
             historical documentation, temple ordinance connections, and prophetic commentary."
        }
        (ScriptureCategory::PearlOfGreatPrice, ContentMode::Casual) => {
            "This is from the Pearl of Great Price. Reference symbols like Moses on the mount, \
             Abraham's stars, and the pillar of light."
        }
        (ScriptureCategory::PearlOfGreatPrice, ContentMode::Academic) => {
            "This is from the Pearl of Great Price. Discuss its symbols against Egyptian \
             iconography, ancient cosmology, and temple typology."
        }
        (ScriptureCategory::Bible, ContentMode::Casual) => {
            "This is from the Bible (KJV). Reference symbols that Latter-day Saints connect to \
             covenants, the temple, and the Savior."
        }
        (ScriptureCategory::Bible, ContentMode::Academic) => {
            "This is from the Bible (KJV). Discuss Hebrew and Greek word meanings, ancient Near \
             Eastern symbolism, and temple typology."
        }
    }
}

fn system_prompt(request: &DevotionalRequest) -> String {
    let mode = request.content_mode;
    let guidance = category_guidance(request.category(), mode);
    let personalization = request.personalization();

    match mode {
        ContentMode::Academic => format!(
            "You are a religious studies scholar analyzing scriptural symbolism. Provide deep \
             symbolic analysis with references to ancient texts, Hebrew and Greek meanings, \
             temple typology, and interpretations from LDS academics.\n\n{guidance}\n\n\
             {PLAIN_PROSE_INSTRUCTION}\n\n{personalization}"
        ),
        ContentMode::Casual => format!(
            "You help Latter-day Saints discover beautiful symbolism in scripture. Write like \
             you're sharing an insight in Gospel Doctrine class.\n\n{guidance}\n\n\
             Reference temple symbolism, covenants, prophetic teachings, and cross-references \
             when appropriate.\n\n{PLAIN_PROSE_INSTRUCTION}\n\n{personalization}"
        ),
    }
}

fn items_json(mode: ContentMode) -> String {
    IMAGERY_ICONS
        .iter()
        .enumerate()
        .map(|(index, icon)| {
            let sub = match (mode, index) {
                (ContentMode::Academic, 0) => "Scholarly analysis with linguistic and historical depth",
                (ContentMode::Academic, _) => "Scholarly analysis",
                (ContentMode::Casual, 0) => {
                    "Plain text explanation of this symbol and how it applies to Latter-day Saints"
                }
                (ContentMode::Casual, _) => "Plain text explanation",
            };
            format!(
                "    {{ \"title\": \"Symbol Name\", \"sub\": \"{sub}\", \"icon\": \"{icon}\", \"imagePrompt\": \"Visual description\" }}"
            )
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Builds the provider request for the imagery endpoint.
pub fn build_imagery_request(request: &DevotionalRequest) -> GenerationRequest {
    let mode = request.content_mode;

    let depth_instruction = mode.pick(
        "Explain each symbol in a friendly, insightful way.",
        "Provide scholarly analysis of each symbol including linguistic origins, ancient \
         parallels, and theological significance.",
    );

    let prompt = fill_template(
        IMAGERY_PROMPT_TEMPLATE,
        &[
            ("verse_reference", request.verse_reference()),
            ("verse_text", request.verse_text()),
            ("source_line", request.source_line("From").as_str()),
            ("depth_instruction", depth_instruction),
            ("items_json", items_json(mode).as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    );

    GenerationRequest::new(
        system_prompt(request),
        prompt,
        mode.pick(CASUAL_MAX_TOKENS, ACADEMIC_MAX_TOKENS),
    )
}

/// Keeps the first four items; fewer than four is a shape error.
fn ensure_four(mut response: ImageryResponse) -> Result<ImageryResponse, ParseError> {
    if response.imagery.len() < IMAGERY_COUNT {
        return Err(ParseError::Incomplete(format!(
            "expected {IMAGERY_COUNT} imagery items, got {}",
            response.imagery.len()
        )));
    }
    response.imagery.truncate(IMAGERY_COUNT);
    Ok(response)
}

pub async fn generate_imagery(
    llm: &dyn TextGenerator,
    request: &DevotionalRequest,
) -> Result<ImageryResponse, GenerationError> {
    let text = llm.generate(&build_imagery_request(request)).await?;
    let response = parse_clean::<ImageryResponse>(&text)?;
    Ok(ensure_four(response)?)
}
