//! Reflective monologue or scholarly analysis of a verse, optionally in a
//! language other than English. Uses the delimiter strategy.

use serde::Serialize;

use crate::generation::language::{language_reminder, language_requirement, target_language};
use crate::generation::prompts::{fill_template, INTERPRETATION_PROMPT_TEMPLATE};
use crate::generation::{DevotionalRequest, GenerationError};
use crate::llm_client::prompts::{PLAIN_PROSE_INSTRUCTION, PLAIN_TEXT_REMINDER};
use crate::llm_client::{GenerationRequest, TextGenerator};
use crate::parsing::{clean_text, extract_or, Markers};
use crate::personalization::ContentMode;

pub const CASUAL_MAX_TOKENS: u32 = 4000;
pub const ACADEMIC_MAX_TOKENS: u32 = 5000;

pub const INTERPRETATION_MARKERS: Markers = Markers::new("INTERPRETATION===", "===INTERPRETATION");
pub const IMAGE_PROMPT_MARKERS: Markers = Markers::new("IMAGE_PROMPT===", "===IMAGE_PROMPT");

pub const DEFAULT_INTERPRETATION: &str = "Unable to generate interpretation.";
pub const DEFAULT_IMAGE_PROMPT: &str = "A serene scene depicting faith and hope";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationResponse {
    pub interpretation: String,
    pub hero_image_prompt: String,
}

const CASUAL_PERSONA: &str = "You are creating scripture study content for members of The \
    Church of Jesus Christ of Latter-day Saints.

Key guidelines:
- Use LDS terminology naturally (testimony, covenant, priesthood, temple, calling, ward, stake, bishop)
- Reference modern prophets and General Conference when relevant
- Connect scriptures to the Restoration, the Plan of Salvation, and latter-day context
- For Book of Mormon verses, note who is speaking (Nephi, Alma, Mormon, etc.)
- For D&C verses, note the historical context of the revelation when helpful
- Keep a tone consistent with Church publications: warm, testimony-building, and doctrinally sound
- Refer to members as \"Latter-day Saints\" or \"members of the Church\"";

const ACADEMIC_PERSONA: &str = "You are a religious studies scholar specializing in Latter-day \
    Saint scripture and history. Provide rigorous academic analysis while maintaining a \
    faith-affirming perspective.";

fn system_prompt(request: &DevotionalRequest, language: Option<&str>) -> String {
    let mut system = format!(
        "{}\n\n{}\n\n",
        request.content_mode.pick(CASUAL_PERSONA, ACADEMIC_PERSONA),
        PLAIN_PROSE_INSTRUCTION
    );
    if let Some(language) = language {
        system.push_str(&language_requirement(language));
        system.push_str("\n\n");
    }
    system.push_str(&request.personalization());
    system
}

/// Builds the provider request for the interpretation endpoint. A known
/// non-English language is demanded in the system prompt and restated in
/// the user prompt.
pub fn build_interpretation_request(request: &DevotionalRequest) -> GenerationRequest {
    let mode = request.content_mode;
    let language = target_language(request.language.as_deref());

    let task = mode.pick(
        "Write a reflective monologue about this scripture in a warm, personal tone. It should \
         feel like something a thoughtful member might share in testimony meeting or a Come, \
         Follow Me discussion: genuine, heartfelt, and connecting the scripture to real life.",
        "Write a scholarly analysis of this scripture. Include linguistic insights \
         (Hebrew, Greek, or Hebraisms where relevant), historical-critical context, \
         cross-references, and academic perspective, naming LDS scholars in prose where \
         appropriate. Maintain academic rigor while being spiritually insightful.",
    );

    let prompt = fill_template(
        INTERPRETATION_PROMPT_TEMPLATE,
        &[
            ("verse_reference", request.verse_reference()),
            ("verse_text", request.verse_text()),
            ("source_line", request.source_line("Source").as_str()),
            (
                "language_reminder",
                language.map(language_reminder).unwrap_or_default().as_str(),
            ),
            ("task", task),
            ("plain_text", PLAIN_TEXT_REMINDER),
            (
                "body_label",
                mode.pick("reflective monologue", "scholarly analysis"),
            ),
            ("word_limit", mode.pick("under 200 words", "300-400 words")),
            ("flow_label", mode.pick("reflection", "analysis")),
        ],
    );

    GenerationRequest::new(
        system_prompt(request, language),
        prompt,
        mode.pick(CASUAL_MAX_TOKENS, ACADEMIC_MAX_TOKENS),
    )
}

/// Extracts both fields, substituting defaults for anything missing.
pub fn parse_interpretation(text: &str) -> InterpretationResponse {
    InterpretationResponse {
        interpretation: clean_text(&extract_or(
            text,
            INTERPRETATION_MARKERS,
            DEFAULT_INTERPRETATION,
        )),
        hero_image_prompt: clean_text(&extract_or(
            text,
            IMAGE_PROMPT_MARKERS,
            DEFAULT_IMAGE_PROMPT,
        )),
    }
}

pub async fn generate_interpretation(
    llm: &dyn TextGenerator,
    request: &DevotionalRequest,
) -> Result<InterpretationResponse, GenerationError> {
    let text = llm.generate(&build_interpretation_request(request)).await?;
    Ok(parse_interpretation(&text))
}
