// Shared prompt fragments used across endpoints.
// Each endpoint defines its own templates alongside its builder; this file
// contains the cross-cutting output-format rules.

/// System prompt rule for prose output. The sanitizer in `parsing` is only a
/// backstop for this instruction.
pub const PLAIN_PROSE_INSTRUCTION: &str = "CRITICAL: Write ONLY plain prose text. \
    NO URLs, NO links, NO citations, NO bracketed text, NO markdown formatting, \
    NO asterisks, NO underscores for emphasis.";

/// Variant of the plain-output rule for poems.
pub const PLAIN_POETRY_INSTRUCTION: &str = "CRITICAL: Write ONLY plain text poetry. \
    NO URLs, NO links, NO citations, NO bracketed text, NO markdown formatting, \
    NO asterisks or underscores.";

/// Restated next to the user prompt for delimiter-formatted responses.
pub const PLAIN_TEXT_REMINDER: &str =
    "Write ONLY plain text - no URLs, no links, no citations, no brackets, no asterisks.";

/// Trailer for prompts that expect a bare JSON object back.
pub const JSON_ONLY_INSTRUCTION: &str =
    "Return only the JSON object. No markdown, no code fences, no citations, no URLs, no explanation.";
