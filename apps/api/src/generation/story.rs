//! Contemporary or historical story bringing a verse to life.
//!
//! Unlike the other endpoints this one never renders as an error: missing
//! fields short-circuit to a 400 placeholder, and an undecodable body or any
//! internal failure is answered with a 200 placeholder (see
//! `handlers::handle_story`).

use serde::Serialize;

use crate::generation::prompts::{fill_template, STORY_PROMPT_TEMPLATE};
use crate::generation::{non_blank, DevotionalRequest, GenerationError};
use crate::llm_client::prompts::PLAIN_PROSE_INSTRUCTION;
use crate::llm_client::{GenerationRequest, TextGenerator};
use crate::parsing::{clean_text, extract_field, extract_or, strip_block, Markers};
use crate::personalization::ContentMode;

pub const CASUAL_MAX_TOKENS: u32 = 4000;
pub const ACADEMIC_MAX_TOKENS: u32 = 6000;

pub const TITLE_MARKERS: Markers = Markers::new("TITLE===", "===TITLE");
pub const STORY_MARKERS: Markers = Markers::new("STORY===", "===STORY");
pub const IMAGE_MARKERS: Markers = Markers::new("IMAGE===", "===IMAGE");

pub const DEFAULT_TITLE: &str = "A Story of Faith";
pub const DEFAULT_TEXT: &str = "Unable to generate story.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub title: String,
    pub text: String,
    pub image_prompt: String,
}

/// 400 body: the placeholder plus an `error` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingFieldsResponse {
    pub error: &'static str,
    #[serde(flatten)]
    pub story: Story,
}

impl Story {
    pub fn missing_fields() -> MissingFieldsResponse {
        MissingFieldsResponse {
            error: "Missing required fields",
            story: Story {
                title: "Story Unavailable".to_string(),
                text: "Unable to generate story due to missing information.".to_string(),
                image_prompt: "A peaceful scene".to_string(),
            },
        }
    }

    pub fn unavailable() -> Story {
        Story {
            title: "Story Unavailable".to_string(),
            text: "We encountered an issue generating this story. Please try again later."
                .to_string(),
            image_prompt: "A peaceful, contemplative scene".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryKind {
    Contemporary,
    Historical,
}

impl StoryKind {
    pub fn parse(story_type: &str) -> Option<Self> {
        match story_type {
            "contemporary" => Some(StoryKind::Contemporary),
            "historical" => Some(StoryKind::Historical),
            _ => None,
        }
    }
}

/// True when the fields a story cannot be written without are present.
pub fn has_required_fields(request: &DevotionalRequest) -> bool {
    non_blank(request.verse_reference.as_deref()).is_some()
        && non_blank(request.verse_text.as_deref()).is_some()
        && non_blank(request.story_type.as_deref()).is_some()
}

/// Template for (mode, kind). An unrecognized story type uses the casual
/// contemporary template regardless of mode.
fn story_guide(mode: ContentMode, kind: Option<StoryKind>) -> &'static str {
    match (mode, kind) {
        (ContentMode::Casual, Some(StoryKind::Historical)) => {
            "Write a story in a historical setting related to this scripture. For the Book of \
             Mormon: the perspective of someone in the narrative. For the Bible: the original \
             biblical setting. For the D&C: the early Restoration, Kirtland, Nauvoo, or the \
             pioneer trek. Make it historically vivid."
        }
        (ContentMode::Academic, Some(StoryKind::Contemporary)) => {
            "Write a modern narrative that explores the theological and doctrinal implications of \
             this scripture. Include realistic scenarios where Latter-day Saints grapple with \
             applying scriptural principles, drawing on deeper doctrinal understanding."
        }
        (ContentMode::Academic, Some(StoryKind::Historical)) => {
            "Write a historically rigorous narrative set in the actual time and place of this \
             scripture. For the Book of Mormon: ancient American cultural details per scholarly \
             theories. For the Bible: accurate ancient Near Eastern context. For the D&C: precise \
             details from the Joseph Smith Papers and early Church documents. Include accurate \
             cultural practices, material culture, and historical figures."
        }
        (ContentMode::Casual, Some(StoryKind::Contemporary)) | (_, None) => {
            "Write a modern-day story set in today's world within an LDS context. Settings: family \
             home, ward building, temple grounds, mission field, YSA ward, a hospital room with a \
             priesthood blessing, family home evening, youth camp. Focus on realistic situations: \
             callings, missionary work, covenants, family challenges, faith, service, temple \
             attendance. Use natural LDS vernacular."
        }
    }
}

fn system_prompt(request: &DevotionalRequest) -> String {
    let persona = request.content_mode.pick(
        "You are a gifted storyteller for Latter-day Saints. Write stories that feel authentic to \
         LDS culture, like ones shared in a fireside or Come, Follow Me discussion.\n\n\
         Stories should be genuine, relatable, use LDS terminology naturally, never preachy, show \
         characters growing in testimony, and be appropriate for all ages.",
        "You are a historical fiction writer with deep expertise in religious history and LDS \
         scholarship. Write stories that are both engaging and historically and doctrinally \
         rigorous.",
    );
    format!(
        "{persona}\n\n{PLAIN_PROSE_INSTRUCTION}\n\n{}",
        request.personalization()
    )
}

/// Builds the provider request for the story endpoint.
pub fn build_story_request(request: &DevotionalRequest) -> GenerationRequest {
    let mode = request.content_mode;
    let kind = request.story_type.as_deref().and_then(StoryKind::parse);

    let prompt = fill_template(
        STORY_PROMPT_TEMPLATE,
        &[
            ("verse_reference", request.verse_reference()),
            ("verse_text", request.verse_text()),
            ("source_line", request.source_line("Scripture source").as_str()),
            ("story_guide", story_guide(mode, kind)),
            ("word_count", mode.pick("500", "800-1000")),
        ],
    );

    GenerationRequest::new(
        system_prompt(request),
        prompt,
        mode.pick(CASUAL_MAX_TOKENS, ACADEMIC_MAX_TOKENS),
    )
}

/// Extracts the story fields. Without a `STORY` block the body is whatever
/// remains once the title and image blocks are removed.
pub fn parse_story(text: &str, verse_reference: &str) -> Story {
    let body = extract_field(text, STORY_MARKERS).unwrap_or_else(|| {
        strip_block(&strip_block(text, TITLE_MARKERS), IMAGE_MARKERS)
    });
    let body = clean_text(&body);

    let image_prompt = extract_field(text, IMAGE_MARKERS)
        .unwrap_or_else(|| format!("A warm, uplifting scene depicting {verse_reference}"));

    Story {
        title: clean_text(&extract_or(text, TITLE_MARKERS, DEFAULT_TITLE)),
        text: if body.is_empty() {
            DEFAULT_TEXT.to_string()
        } else {
            body
        },
        image_prompt: clean_text(&image_prompt),
    }
}

pub async fn generate_story(
    llm: &dyn TextGenerator,
    request: &DevotionalRequest,
) -> Result<Story, GenerationError> {
    let text = llm.generate(&build_story_request(request)).await?;
    Ok(parse_story(&text, request.verse_reference()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(story_type: &str, mode: ContentMode) -> DevotionalRequest {
        DevotionalRequest {
            verse_reference: Some("1 Nephi 3:7".to_string()),
            verse_text: Some("I will go and do".to_string()),
            story_type: Some(story_type.to_string()),
            content_mode: mode,
            ..Default::default()
        }
    }

    #[test]
    fn test_token_budget_by_mode() {
        assert_eq!(
            build_story_request(&request("historical", ContentMode::Casual)).max_tokens,
            CASUAL_MAX_TOKENS
        );
        assert_eq!(
            build_story_request(&request("historical", ContentMode::Academic)).max_tokens,
            ACADEMIC_MAX_TOKENS
        );
        assert!(ACADEMIC_MAX_TOKENS > CASUAL_MAX_TOKENS);
    }

    #[test]
    fn test_required_fields() {
        assert!(has_required_fields(&request("contemporary", ContentMode::Casual)));
        assert!(!has_required_fields(&DevotionalRequest::default()));
        assert!(!has_required_fields(&request("   ", ContentMode::Casual)));
    }

    #[test]
    fn test_template_selection() {
        let built = build_story_request(&request("historical", ContentMode::Academic));
        assert!(built.prompt.contains("historically rigorous"));
        assert!(built.prompt.contains("at least 800-1000 words"));

        let built = build_story_request(&request("historical", ContentMode::Casual));
        assert!(built.prompt.contains("Make it historically vivid"));
        assert!(built.prompt.contains("at least 500 words"));
    }

    #[test]
    fn test_unknown_type_uses_casual_contemporary() {
        let built = build_story_request(&request("fantasy", ContentMode::Academic));
        assert!(built.prompt.contains("modern-day story set in today's world"));
        assert!(built.system.unwrap().contains("historical fiction writer"));
    }

    #[test]
    fn test_parse_well_formed() {
        let text = "TITLE===The Brass Plates===TITLE\nSTORY===Nephi _hesitated_ at the gate.===STORY\nIMAGE===Jerusalem at night===IMAGE";
        let story = parse_story(text, "1 Nephi 3:7");
        assert_eq!(story.title, "The Brass Plates");
        assert_eq!(story.text, "Nephi hesitated at the gate.");
        assert_eq!(story.image_prompt, "Jerusalem at night");
    }

    #[test]
    fn test_parse_without_markers_uses_defaults() {
        let story = parse_story("Once upon a time in Zarahemla.", "Alma 32:21");
        assert_eq!(story.title, DEFAULT_TITLE);
        assert_eq!(story.text, "Once upon a time in Zarahemla.");
        assert_eq!(
            story.image_prompt,
            "A warm, uplifting scene depicting Alma 32:21"
        );
    }

    #[test]
    fn test_parse_missing_story_block_strips_other_blocks() {
        let text = "TITLE===Faith===TITLE\nShe knelt to pray.\nIMAGE===A candle===IMAGE";
        let story = parse_story(text, "James 1:5");
        assert_eq!(story.text, "She knelt to pray.");
        assert_eq!(story.image_prompt, "A candle");
    }

    #[test]
    fn test_placeholders_serialize() {
        let value = serde_json::to_value(Story::missing_fields()).unwrap();
        assert_eq!(value["error"], "Missing required fields");
        assert_eq!(value["title"], "Story Unavailable");
        assert_eq!(
            value["text"],
            "Unable to generate story due to missing information."
        );
        assert_eq!(value["imagePrompt"], "A peaceful scene");

        let value = serde_json::to_value(Story::unavailable()).unwrap();
        assert_eq!(value["imagePrompt"], "A peaceful, contemplative scene");
        assert!(value.get("error").is_none());
    }
}
