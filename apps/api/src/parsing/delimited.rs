//! Delimiter strategy: the prompt asks the model to wrap each field in a
//! begin/end sentinel pair, e.g. `TITLE===...===TITLE`.

use regex::Regex;

/// A begin/end sentinel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub open: &'static str,
    pub close: &'static str,
}

impl Markers {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }

    fn primary_pattern(&self) -> String {
        format!(
            r"(?s){}\s*(.*?)\s*{}",
            regex::escape(self.open),
            regex::escape(self.close)
        )
    }

    /// Used when the closing sentinel is missing: stops at the next `===`,
    /// at a line that opens another `WORD===` marker, or at the end.
    fn fallback_pattern(&self) -> String {
        format!(
            r"(?s){}\s*(.*?)\s*(?:===|\n[A-Z][A-Z_]*===|\z)",
            regex::escape(self.open)
        )
    }
}

/// Extracts the trimmed text between `markers`, tolerating a missing closing
/// sentinel. Empty matches count as absent.
pub fn extract_field(text: &str, markers: Markers) -> Option<String> {
    capture(text, &markers.primary_pattern()).or_else(|| capture(text, &markers.fallback_pattern()))
}

/// `extract_field`, substituting `default` when the field is absent.
pub fn extract_or(text: &str, markers: Markers, default: &str) -> String {
    extract_field(text, markers).unwrap_or_else(|| default.to_string())
}

/// Removes every complete `open...close` block from `text`.
pub fn strip_block(text: &str, markers: Markers) -> String {
    match Regex::new(&markers.primary_pattern()) {
        Ok(re) => re.replace_all(text, "").into_owned(),
        Err(_) => text.to_string(),
    }
}

fn capture(text: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    let value = re.captures(text)?.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE: Markers = Markers::new("TITLE===", "===TITLE");
    const POEM: Markers = Markers::new("POEM===", "===POEM");
    const INTERPRETATION: Markers = Markers::new("INTERPRETATION===", "===INTERPRETATION");
    const IMAGE_PROMPT: Markers = Markers::new("IMAGE_PROMPT===", "===IMAGE_PROMPT");

    #[test]
    fn test_extracts_between_markers() {
        let text = "TITLE===Light in the Grove===TITLE\nPOEM===\nLine one\nLine two\n===POEM";
        assert_eq!(extract_field(text, TITLE).as_deref(), Some("Light in the Grove"));
        assert_eq!(extract_field(text, POEM).as_deref(), Some("Line one\nLine two"));
    }

    #[test]
    fn test_markers_with_surrounding_chatter() {
        let text = "Sure! Here it is:\n\nINTERPRETATION===\n  Faith grows.  \n===INTERPRETATION\nHope this helps.";
        assert_eq!(
            extract_field(text, INTERPRETATION).as_deref(),
            Some("Faith grows.")
        );
    }

    #[test]
    fn test_missing_close_stops_at_next_marker() {
        let text = "INTERPRETATION===\nFaith is a seed.\n\nIMAGE_PROMPT===\nA sunrise\n===IMAGE_PROMPT";
        assert_eq!(
            extract_field(text, INTERPRETATION).as_deref(),
            Some("Faith is a seed.")
        );
        assert_eq!(extract_field(text, IMAGE_PROMPT).as_deref(), Some("A sunrise"));
    }

    #[test]
    fn test_missing_close_runs_to_end_of_text() {
        let text = "INTERPRETATION===\nFaith is a seed.\nIt grows when nourished.";
        assert_eq!(
            extract_field(text, INTERPRETATION).as_deref(),
            Some("Faith is a seed.\nIt grows when nourished.")
        );
    }

    #[test]
    fn test_missing_close_on_inline_marker_stops_at_delimiter() {
        let text = "TITLE===Morning Prayer\nPOEM===Line===POEM";
        assert_eq!(extract_field(text, TITLE).as_deref(), Some("Morning Prayer"));
    }

    #[test]
    fn test_no_markers_is_absent() {
        assert_eq!(extract_field("Just some prose.", TITLE), None);
        assert_eq!(extract_field("", POEM), None);
    }

    #[test]
    fn test_empty_field_is_absent() {
        assert_eq!(extract_field("TITLE======TITLE", TITLE), None);
        assert_eq!(extract_field("TITLE===   ===TITLE", TITLE), None);
    }

    #[test]
    fn test_extract_or_uses_default() {
        assert_eq!(extract_or("nothing here", TITLE, "Untitled Poem"), "Untitled Poem");
        assert_eq!(extract_or("TITLE===Zion===TITLE", TITLE, "Untitled Poem"), "Zion");
    }

    #[test]
    fn test_strip_block_removes_complete_blocks() {
        let text = "TITLE===A===TITLE\nThe body.\nIMAGE===scene===IMAGE";
        let stripped = strip_block(text, TITLE);
        let stripped = strip_block(&stripped, Markers::new("IMAGE===", "===IMAGE"));
        assert_eq!(stripped.trim(), "The body.");
    }
}
