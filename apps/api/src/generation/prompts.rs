// Prompt templates for the generation endpoints.
// Placeholders in `{braces}` are filled by `fill_template` before sending.
// Cross-cutting output rules live in llm_client::prompts.

/// Replaces each `{key}` in `template` with its value in one left-to-right
/// scan. Inserted values are never rescanned, so user text containing
/// `{task}` stays literal. Braces that name no key are kept as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let matched = values.iter().find(|(key, _)| {
            tail[1..]
                .strip_prefix(*key)
                .is_some_and(|after| after.starts_with('}'))
        });
        match matched {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Context prompt. Replace: {verse_reference}, {verse_text}, {source_line},
/// {fields_json}, {json_only}
pub const CONTEXT_PROMPT_TEMPLATE: &str = r#"Give me the backstory for {verse_reference}: "{verse_text}"
{source_line}

Return ONLY a JSON object with this structure, no markdown, no citations, no URLs anywhere:
{
  "context": {
{fields_json}
  },
  "contextImagePrompt": "Cinematic historical scene description"
}

{json_only}"#;

/// Context fields: (key, description, academic suffix).
pub const CONTEXT_FIELDS: &[(&str, &str, &str)] = &[
    ("whoIsSpeaking", "Plain text about the speaker or writer", " with scholarly detail"),
    ("originalListeners", "Plain text about who received these words", " with specific names and dates"),
    ("whyTheConversation", "Plain text about what prompted these words", " with historical documentation"),
    ("historicalBackdrop", "Plain text painting the bigger picture", " with archaeological and historical context"),
    ("immediateImpact", "Plain text about how people responded", " drawing on early sources"),
    ("longTermImpact", "Plain text about lasting impact", " including scholarly reception"),
    ("setting", "Plain text describing the location and scene", " with geographical and archaeological detail"),
];

/// Imagery prompt. Replace: {verse_reference}, {verse_text}, {source_line},
/// {depth_instruction}, {items_json}, {json_only}
pub const IMAGERY_PROMPT_TEMPLATE: &str = r#"Find 4 powerful symbols or metaphors in {verse_reference}: "{verse_text}"
{source_line}

{depth_instruction}

Return ONLY a JSON object, no markdown, no citations, no URLs:
{
  "imagery": [
{items_json}
  ]
}

{json_only}"#;

/// Material icon names suggested for the four symbols, in order.
pub const IMAGERY_ICONS: [&str; 4] = ["auto_awesome", "water_drop", "spa", "wb_sunny"];

/// Interpretation prompt. Replace: {verse_reference}, {verse_text},
/// {source_line}, {language_reminder}, {task}, {plain_text}, {body_label},
/// {word_limit}, {flow_label}
pub const INTERPRETATION_PROMPT_TEMPLATE: &str = r#"{verse_reference}: "{verse_text}"
{source_line}

{language_reminder}{task}

{plain_text}

Format your response EXACTLY like this:

INTERPRETATION===
Your {body_label} here... ({word_limit}, just flowing {flow_label})
===INTERPRETATION

IMAGE_PROMPT===
Cinematic description of an inspiring scene that captures the scripture's theme.
===IMAGE_PROMPT"#;

/// Poem prompt. Replace: {style_label}, {verse_reference}, {verse_text},
/// {source_line}, {style_guide}, {line_count}, {quality}, {audience}
pub const POEM_PROMPT_TEMPLATE: &str = r#"Generate 1 beautiful {style_label} poem inspired by {verse_reference}: "{verse_text}"
{source_line}

{style_guide}

Requirements: {line_count} lines, clear stanzas with blank lines between them, poetic devices, {quality}, appropriate for {audience}.

Respond in this EXACT format:
TITLE===Your Poem Title===TITLE
POEM===
First line of poem
Second line of poem

Third line (new stanza)
Fourth line
===POEM
IMAGE===Visual description for artwork to accompany this poem===IMAGE"#;

/// Story prompt. Replace: {verse_reference}, {verse_text}, {source_line},
/// {story_guide}, {word_count}
pub const STORY_PROMPT_TEMPLATE: &str = r#"Create ONE powerful story that brings {verse_reference}: "{verse_text}" to life.
{source_line}

{story_guide}

The story should be at least {word_count} words with detailed scene setting, dialogue, internal thoughts, and a clear narrative arc.

Format response EXACTLY like this:
TITLE===Your Story Title===TITLE
STORY===Your full story text (plain prose, no formatting)===STORY
IMAGE===Cinematic scene description for an image===IMAGE"#;

/// Shared tail for every verse prompt. Replace: {reference_hint},
/// {version_hint}, {text_hint}, {source_hint}
pub const VERSE_JSON_TEMPLATE: &str = r#"Return ONLY a JSON object with this structure:
{
  "reference": "{reference_hint}",
  "version": {version_hint},
  "text": "{text_hint}",
  "source": {source_hint}
}

Return only the JSON, no markdown, no explanation."#;

/// Come, Follow Me selection. Replace: {today}
pub const COME_FOLLOW_ME_INTRO: &str = "Today is {today}. Select a meaningful scripture from the \
    current Come, Follow Me curriculum for The Church of Jesus Christ of Latter-day Saints. \
    Choose from any of the Standard Works.";

pub const BOOK_OF_MORMON_INTRO: &str = "Select a powerful, well-known scripture from the Book of \
    Mormon that would be meaningful for daily study. Choose scriptures that are frequently \
    quoted in General Conference or are particularly meaningful for Latter-day Saints.";

pub const DOCTRINE_AND_COVENANTS_INTRO: &str = "Select a meaningful scripture from the Doctrine \
    and Covenants that would be uplifting for daily study. Choose scriptures that are frequently \
    quoted or particularly relevant to modern-day Saints.";

pub const BIBLE_INTRO: &str = "Select a meaningful scripture from the King James Version of the \
    Bible that would be particularly meaningful for Latter-day Saints. Choose scriptures that \
    are frequently quoted in LDS contexts or connect to Restoration truths.";

/// Direct lookup. Replace: {verse_query}
pub const VERSE_QUERY_INTRO: &str = "Return ONLY a JSON object for the LDS scripture: \
    {verse_query}\n\nThis could be from the Bible (KJV), Book of Mormon, Doctrine and Covenants, \
    or Pearl of Great Price.";

pub const ANY_STANDARD_WORK_SOURCE: &str =
    r#""Book of Mormon" or "Doctrine and Covenants" or "Pearl of Great Price" or "Bible (KJV)""#;
