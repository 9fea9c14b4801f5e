//! Strips formatting artifacts from model prose: markdown emphasis, headings,
//! links, bare URLs, and bracketed citations.
//!
//! Underscores only count as emphasis at word edges, so identifiers such as
//! the icon name `water_drop` pass through.
//!
//! Passes run until the text stops changing. Every rewrite either shortens the
//! text or replaces a tab or carriage return in place, so the loop terminates
//! and `clean_text` is idempotent. Carriage returns become newlines.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static LEADING_UNDERSCORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[^\p{L}\p{N}])_+").expect("leading underscore pattern is valid")
});

static TRAILING_UNDERSCORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"_+([^\p{L}\p{N}]|$)").expect("trailing underscore pattern is valid")
});

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]+").expect("heading pattern is valid"));

static MARKDOWN_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\[\]]*)\]\([^()\s]*\)").expect("markdown link pattern is valid")
});

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:https?://|www\.)[^\s<>()\[\]]*[^\s<>()\[\].,;:!?'"]"#)
        .expect("url pattern is valid")
});

static BRACKETED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\[\]]*\]").expect("bracket pattern is valid"));

static EMPTY_PARENS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([ \t]*\)").expect("empty parens pattern is valid"));

static INLINE_SPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]{2,}|\t").expect("inline space pattern is valid"));

static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+([.,;:!?])").expect("punctuation pattern is valid"));

static SPACE_AROUND_NEWLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]*\n[ \t]*").expect("newline pattern is valid"));

static EXTRA_BLANK_LINES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("blank line pattern is valid"));

/// Removes disallowed formatting from a prose value.
pub fn clean_text(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = clean_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn clean_pass(text: &str) -> String {
    // No pass may leave a carriage return behind for the next one to join.
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = text.replace('*', "");
    let text = LEADING_UNDERSCORE_RE.replace_all(&text, "$1");
    let text = TRAILING_UNDERSCORE_RE.replace_all(&text, "$1");
    let text = HEADING_RE.replace_all(&text, "");
    let text = MARKDOWN_LINK_RE.replace_all(&text, "$1");
    let text = URL_RE.replace_all(&text, "");
    let text = BRACKETED_RE.replace_all(&text, "");
    let text = EMPTY_PARENS_RE.replace_all(&text, "");
    let text = INLINE_SPACE_RE.replace_all(&text, " ");
    let text = SPACE_BEFORE_PUNCT_RE.replace_all(&text, "$1");
    let text = SPACE_AROUND_NEWLINE_RE.replace_all(&text, "\n");
    let text = EXTRA_BLANK_LINES_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Applies `clean_text` to every string inside a JSON value. Keys, array
/// order, nesting, and non-string values are left alone.
pub fn clean_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(clean_text(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(clean_value).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, clean_value(value)))
                .collect(),
        ),
        other => other,
    }
}
