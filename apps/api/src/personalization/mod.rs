//! Personalization context: demographic and life-stage instructions that are
//! appended to every system prompt.

use serde::{Deserialize, Deserializer};

pub mod prompts;

use prompts::{
    academic_age_prompt, casual_age_prompt, situation_prompt, ACADEMIC_BASE,
    ACADEMIC_MODE_INSTRUCTIONS, CASUAL_BASE, FEMALE_CLAUSE, MALE_CLAUSE,
};

/// Selects the whole family of templates, tone, and token budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentMode {
    #[default]
    Casual,
    Academic,
}

impl ContentMode {
    /// Lenient parse: anything other than `"academic"` is casual.
    pub fn from_str_lenient(value: Option<&str>) -> Self {
        match value {
            Some("academic") => ContentMode::Academic,
            _ => ContentMode::Casual,
        }
    }

    /// Picks between the casual and academic variant of a value.
    pub fn pick<T>(self, casual: T, academic: T) -> T {
        match self {
            ContentMode::Casual => casual,
            ContentMode::Academic => academic,
        }
    }
}

impl<'de> Deserialize<'de> for ContentMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(ContentMode::from_str_lenient(value.as_deref()))
    }
}

const NOTHING_SPECIAL: &str = "Nothing special";

/// Builds the personalization block for a system prompt.
///
/// Returns an empty string when nothing applies; callers treat that as
/// "no personalization".
pub fn build_personalization_context(
    age_range: &str,
    gender: &str,
    stage_situation: &str,
    mode: ContentMode,
) -> String {
    let mut parts: Vec<&str> = Vec::new();

    match mode {
        ContentMode::Academic => {
            parts.push(ACADEMIC_BASE);
            parts.push(ACADEMIC_MODE_INSTRUCTIONS);
        }
        ContentMode::Casual => parts.push(CASUAL_BASE),
    }

    if !age_range.is_empty() {
        parts.push(match mode {
            ContentMode::Academic => academic_age_prompt(age_range),
            ContentMode::Casual => casual_age_prompt(age_range),
        });
    }

    match gender {
        "female" => parts.push(FEMALE_CLAUSE),
        "male" => parts.push(MALE_CLAUSE),
        _ => {}
    }

    if stage_situation != NOTHING_SPECIAL {
        let situation = situation_prompt(stage_situation);
        if !situation.is_empty() {
            parts.push(situation);
        }
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("\n\nPERSONALIZATION INSTRUCTIONS:\n{}", parts.join("\n\n"))
    }
}
