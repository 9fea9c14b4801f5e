//! Output language for the interpretation endpoint.

pub const ENGLISH: &str = "English";

/// Maps a short language code to the label used inside prompts. Unknown codes
/// resolve to English.
pub fn resolve_language_name(code: &str) -> &'static str {
    match code {
        "es" => "Spanish (Español)",
        "fr" => "French (Français)",
        "de" => "German (Deutsch)",
        "pt" => "Portuguese (Português)",
        "zh" => "Chinese (中文)",
        "vi" => "Vietnamese (Tiếng Việt)",
        "ko" => "Korean (한국어)",
        "th" => "Thai (ไทย)",
        "tl" => "Tagalog",
        "ja" => "Japanese (日本語)",
        _ => ENGLISH,
    }
}

/// The non-English language to write in, if any. Unknown codes behave as
/// English and add no instruction.
pub fn target_language(code: Option<&str>) -> Option<&'static str> {
    code.map(resolve_language_name)
        .filter(|name| *name != ENGLISH)
}

/// System-prompt requirement for a non-English interpretation.
pub fn language_requirement(language: &str) -> String {
    format!(
        "CRITICAL LANGUAGE REQUIREMENT: You MUST write your entire interpretation in {language}. \
         Every single word of the interpretation content must be in {language}. Do NOT write in \
         English. The delimiters stay in English, but ALL content between them must be in \
         {language}."
    )
}

/// Restatement placed next to the user prompt.
pub fn language_reminder(language: &str) -> String {
    format!("REMINDER: Write your interpretation in {language}, NOT English.\n\n")
}
