//! Hymn-style or free-verse poem inspired by a verse. Uses the delimiter
//! strategy; line breaks in the poem body are preserved.

use serde::Serialize;

use crate::generation::prompts::{fill_template, POEM_PROMPT_TEMPLATE};
use crate::generation::{DevotionalRequest, GenerationError};
use crate::llm_client::prompts::PLAIN_POETRY_INSTRUCTION;
use crate::llm_client::{GenerationRequest, TextGenerator};
use crate::parsing::{clean_text, extract_field, extract_or, strip_block, Markers};
use crate::personalization::ContentMode;

pub const CASUAL_MAX_TOKENS: u32 = 1000;
pub const ACADEMIC_MAX_TOKENS: u32 = 1500;

pub const TITLE_MARKERS: Markers = Markers::new("TITLE===", "===TITLE");
pub const POEM_MARKERS: Markers = Markers::new("POEM===", "===POEM");
pub const IMAGE_MARKERS: Markers = Markers::new("IMAGE===", "===IMAGE");

pub const DEFAULT_TITLE: &str = "Untitled Poem";
pub const DEFAULT_TEXT: &str = "Unable to generate poem.";
pub const DEFAULT_IMAGE_PROMPT: &str =
    "Uplifting artistic representation of faith, hope, and spiritual peace";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoemStyle {
    Classic,
    FreeVerse,
}

impl PoemStyle {
    /// `"classic"` selects the hymn style; anything else is free verse.
    pub fn from_request(poem_type: Option<&str>) -> Self {
        match poem_type {
            Some("classic") => PoemStyle::Classic,
            _ => PoemStyle::FreeVerse,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PoemStyle::Classic => "Hymn Style",
            PoemStyle::FreeVerse => "Free Verse",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Poem {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub image_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoemResponse {
    pub poem: Poem,
}

fn style_guide(style: PoemStyle, mode: ContentMode) -> &'static str {
    match (mode, style) {
        (ContentMode::Casual, PoemStyle::Classic) => {
            "Write a HYMN-STYLE poem reminiscent of LDS hymns, with rhyme, meter, and traditional \
             structure that could be sung."
        }
        (ContentMode::Casual, PoemStyle::FreeVerse) => {
            "Write a FREE VERSE poem with vivid imagery and testimony-building themes, no strict \
             rhyme required."
        }
        (ContentMode::Academic, PoemStyle::Classic) => {
            "Write a formally structured poem with attention to meter, rhyme scheme, and classical \
             poetic devices. Draw on the tradition of religious poetry from Herbert, Hopkins, and \
             LDS hymnody."
        }
        (ContentMode::Academic, PoemStyle::FreeVerse) => {
            "Write a literary free verse poem with sophisticated imagery, allusion to scriptural \
             typology, and theological depth, in the manner of modern religious verse."
        }
    }
}

fn system_prompt(request: &DevotionalRequest) -> String {
    let persona = request.content_mode.pick(
        "You are a gifted Latter-day Saint poet. Your poems reflect hope, faith, and testimony of \
         the restored gospel with proper structure, line breaks, and stanzas. Reference gospel \
         themes naturally: covenants, the Savior, temples, families, the Restoration.",
        "You are a literary poet with expertise in religious verse and scriptural themes. Write \
         poetry that combines literary sophistication with theological depth, drawing on both the \
         LDS hymn tradition and broader religious poetry.",
    );
    format!(
        "{persona}\n\n{PLAIN_POETRY_INSTRUCTION}\n\n{}",
        request.personalization()
    )
}

/// Builds the provider request for the poem endpoint.
pub fn build_poem_request(request: &DevotionalRequest) -> GenerationRequest {
    let mode = request.content_mode;
    let style = PoemStyle::from_request(request.poem_type.as_deref());

    let style_label = match style {
        PoemStyle::Classic => "HYMN-STYLE (Classic)",
        PoemStyle::FreeVerse => "FREE VERSE",
    };

    let prompt = fill_template(
        POEM_PROMPT_TEMPLATE,
        &[
            ("style_label", style_label),
            ("verse_reference", request.verse_reference()),
            ("verse_text", request.verse_text()),
            ("source_line", request.source_line("From").as_str()),
            ("style_guide", style_guide(style, mode)),
            ("line_count", mode.pick("8-16", "16-24")),
            (
                "quality",
                mode.pick(
                    "LDS testimony",
                    "literary sophistication and theological depth",
                ),
            ),
            (
                "audience",
                mode.pick("Church setting", "literary appreciation"),
            ),
        ],
    );

    GenerationRequest::new(
        system_prompt(request),
        prompt,
        mode.pick(CASUAL_MAX_TOKENS, ACADEMIC_MAX_TOKENS),
    )
}

/// Extracts the poem fields. Without a `POEM` block the body falls back to
/// whatever text remains once the title and image blocks are removed.
pub fn parse_poem(text: &str, style: PoemStyle) -> Poem {
    let body = extract_field(text, POEM_MARKERS).unwrap_or_else(|| {
        strip_block(&strip_block(text, TITLE_MARKERS), IMAGE_MARKERS)
    });
    let body = clean_text(&body);

    Poem {
        title: clean_text(&extract_or(text, TITLE_MARKERS, DEFAULT_TITLE)),
        kind: style.label().to_string(),
        text: if body.is_empty() {
            DEFAULT_TEXT.to_string()
        } else {
            body
        },
        image_prompt: clean_text(&extract_or(text, IMAGE_MARKERS, DEFAULT_IMAGE_PROMPT)),
    }
}

pub async fn generate_poem(
    llm: &dyn TextGenerator,
    request: &DevotionalRequest,
) -> Result<PoemResponse, GenerationError> {
    let style = PoemStyle::from_request(request.poem_type.as_deref());
    let text = llm.generate(&build_poem_request(request)).await?;
    Ok(PoemResponse {
        poem: parse_poem(&text, style),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(poem_type: &str, mode: ContentMode) -> DevotionalRequest {
        DevotionalRequest {
            verse_reference: Some("Mosiah 2:17".to_string()),
            verse_text: Some("When ye are in the service of your fellow beings".to_string()),
            poem_type: Some(poem_type.to_string()),
            content_mode: mode,
            ..Default::default()
        }
    }

    #[test]
    fn test_token_budget_by_mode() {
        assert_eq!(
            build_poem_request(&request("classic", ContentMode::Casual)).max_tokens,
            CASUAL_MAX_TOKENS
        );
        assert_eq!(
            build_poem_request(&request("classic", ContentMode::Academic)).max_tokens,
            ACADEMIC_MAX_TOKENS
        );
        assert!(ACADEMIC_MAX_TOKENS > CASUAL_MAX_TOKENS);
    }

    #[test]
    fn test_style_selection() {
        assert_eq!(PoemStyle::from_request(Some("classic")), PoemStyle::Classic);
        assert_eq!(PoemStyle::from_request(Some("free")), PoemStyle::FreeVerse);
        assert_eq!(PoemStyle::from_request(None), PoemStyle::FreeVerse);

        let built = build_poem_request(&request("classic", ContentMode::Casual));
        assert!(built.prompt.contains("HYMN-STYLE (Classic)"));
        assert!(built.prompt.contains("8-16 lines"));

        let built = build_poem_request(&request("free", ContentMode::Academic));
        assert!(built.prompt.contains("FREE VERSE"));
        assert!(built.prompt.contains("16-24 lines"));
        assert!(built.system.unwrap().contains("literary poet"));
    }

    #[test]
    fn test_parse_well_formed_keeps_stanzas() {
        let text = "TITLE===In His Service===TITLE\nPOEM===\nWhen hands are lifted\nto serve\n\nWe find Him there\n===POEM\nIMAGE===Hands offering bread===IMAGE";
        let poem = parse_poem(text, PoemStyle::FreeVerse);
        assert_eq!(poem.title, "In His Service");
        assert_eq!(poem.kind, "Free Verse");
        assert_eq!(poem.text, "When hands are lifted\nto serve\n\nWe find Him there");
        assert_eq!(poem.image_prompt, "Hands offering bread");
    }

    #[test]
    fn test_parse_without_markers_uses_defaults() {
        let text = "O Lord, I serve\nand find Thee near";
        let poem = parse_poem(text, PoemStyle::Classic);
        assert_eq!(poem.title, DEFAULT_TITLE);
        assert_eq!(poem.kind, "Hymn Style");
        assert_eq!(poem.text, text);
        assert_eq!(poem.image_prompt, DEFAULT_IMAGE_PROMPT);
    }

    #[test]
    fn test_parse_empty_output_still_renders() {
        let poem = parse_poem("", PoemStyle::FreeVerse);
        assert_eq!(poem.title, DEFAULT_TITLE);
        assert_eq!(poem.text, DEFAULT_TEXT);
    }

    #[test]
    fn test_poem_serializes_type_key() {
        let response = PoemResponse {
            poem: parse_poem("TITLE===Zion===TITLE", PoemStyle::Classic),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["poem"]["type"], "Hymn Style");
        assert_eq!(value["poem"]["title"], "Zion");
        assert!(value["poem"]["imagePrompt"].is_string());
    }
}
