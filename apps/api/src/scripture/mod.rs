//! Scripture source classification.
//!
//! Buckets a free-text reference into one of the four standard works. The
//! function is total: every input, including the empty string, yields exactly
//! one category, with `Bible` as the fallback.

use once_cell::sync::Lazy;
use regex::Regex;

/// One of the four canonical scripture collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptureCategory {
    BookOfMormon,
    DoctrineAndCovenants,
    PearlOfGreatPrice,
    Bible,
}

impl ScriptureCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            ScriptureCategory::BookOfMormon => "Book of Mormon",
            ScriptureCategory::DoctrineAndCovenants => "Doctrine and Covenants",
            ScriptureCategory::PearlOfGreatPrice => "Pearl of Great Price",
            ScriptureCategory::Bible => "Bible (KJV)",
        }
    }
}

static BOOK_OF_MORMON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)nephi|alma|mosiah|helaman|mormon|ether|moroni")
        .expect("book of mormon pattern is valid")
});

static DOCTRINE_AND_COVENANTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)D&C|Doctrine").expect("d&c pattern is valid"));

static PEARL_OF_GREAT_PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Moses|Abraham|JS-H|JS-M|Articles of Faith")
        .expect("pearl of great price pattern is valid")
});

/// Checked in order. A category matches when the source names it or the
/// reference matches its book pattern; anything unmatched is the Bible.
static CATEGORIES: [(ScriptureCategory, &str, &Lazy<Regex>); 3] = [
    (ScriptureCategory::BookOfMormon, "Book of Mormon", &BOOK_OF_MORMON_RE),
    (ScriptureCategory::DoctrineAndCovenants, "Doctrine", &DOCTRINE_AND_COVENANTS_RE),
    (ScriptureCategory::PearlOfGreatPrice, "Pearl", &PEARL_OF_GREAT_PRICE_RE),
];

/// Classifies a reference. An earlier category wins even when a later one is
/// named by `source`.
pub fn classify(reference: &str, source: Option<&str>) -> ScriptureCategory {
    let source = source.unwrap_or_default();
    CATEGORIES
        .iter()
        .find(|(_, hint, pattern)| source.contains(*hint) || pattern.is_match(reference))
        .map(|(category, _, _)| *category)
        .unwrap_or(ScriptureCategory::Bible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reference_is_bible() {
        assert_eq!(classify("", None), ScriptureCategory::Bible);
        assert_eq!(classify("", Some("")), ScriptureCategory::Bible);
    }

    #[test]
    fn test_book_of_mormon_books_case_insensitive() {
        for reference in ["1 Nephi 3:7", "ALMA 32:21", "mosiah 2:17", "Moroni 10:4-5", "Ether 12:27"] {
            assert_eq!(
                classify(reference, None),
                ScriptureCategory::BookOfMormon,
                "{reference}"
            );
        }
    }

    #[test]
    fn test_doctrine_and_covenants() {
        assert_eq!(classify("D&C 4:2", None), ScriptureCategory::DoctrineAndCovenants);
        assert_eq!(
            classify("Doctrine and Covenants 121:7", None),
            ScriptureCategory::DoctrineAndCovenants
        );
        assert_eq!(classify("d&c 58:27", None), ScriptureCategory::DoctrineAndCovenants);
    }

    #[test]
    fn test_pearl_of_great_price() {
        for reference in ["Moses 1:39", "Abraham 3:22", "JS-H 1:17", "Articles of Faith 1:13"] {
            assert_eq!(
                classify(reference, None),
                ScriptureCategory::PearlOfGreatPrice,
                "{reference}"
            );
        }
    }

    #[test]
    fn test_unknown_books_fall_back_to_bible() {
        assert_eq!(classify("John 3:16", None), ScriptureCategory::Bible);
        assert_eq!(classify("!!!", None), ScriptureCategory::Bible);
    }

    #[test]
    fn test_book_of_mormon_wins_over_pearl_without_hint() {
        assert_eq!(
            classify("Moses and Nephi", None),
            ScriptureCategory::BookOfMormon
        );
    }

    #[test]
    fn test_book_of_mormon_wins_over_dc_without_hint() {
        assert_eq!(
            classify("D&C 10 on Mormon's abridgment", None),
            ScriptureCategory::BookOfMormon
        );
    }

    #[test]
    fn test_source_hint_classifies_unrecognized_reference() {
        assert_eq!(
            classify("John 3:16", Some("Doctrine and Covenants")),
            ScriptureCategory::DoctrineAndCovenants
        );
        assert_eq!(
            classify("Genesis 1:1", Some("Pearl of Great Price")),
            ScriptureCategory::PearlOfGreatPrice
        );
    }

    #[test]
    fn test_categories_checked_in_order_across_source_and_reference() {
        assert_eq!(
            classify("Alma 32:21", Some("Doctrine and Covenants")),
            ScriptureCategory::BookOfMormon
        );
        assert_eq!(
            classify("Alma 32:21", Some("Pearl of Great Price")),
            ScriptureCategory::BookOfMormon
        );
        assert_eq!(
            classify("D&C 4:2", Some("Pearl of Great Price")),
            ScriptureCategory::DoctrineAndCovenants
        );
    }

    #[test]
    fn test_bible_source_does_not_override_reference() {
        assert_eq!(
            classify("Moses 1:39", Some("Bible (KJV)")),
            ScriptureCategory::PearlOfGreatPrice
        );
        assert_eq!(
            classify("John 3:16", Some("Bible (KJV)")),
            ScriptureCategory::Bible
        );
    }

    #[test]
    fn test_unrecognized_source_hint_defers_to_reference() {
        assert_eq!(
            classify("Helaman 5:12", Some("Come, Follow Me")),
            ScriptureCategory::BookOfMormon
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ScriptureCategory::Bible.display_name(), "Bible (KJV)");
        assert_eq!(
            ScriptureCategory::DoctrineAndCovenants.display_name(),
            "Doctrine and Covenants"
        );
    }
}
