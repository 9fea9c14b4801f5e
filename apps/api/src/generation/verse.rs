//! Verse of the day and direct verse lookup.
//!
//! The daily verse comes from a source-specific fetcher; when that yields
//! nothing, the Come, Follow Me fetcher gets one more try. A direct
//! `verseQuery` skips the chain entirely and has no fallback.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::generation::prompts::{
    fill_template, ANY_STANDARD_WORK_SOURCE, BIBLE_INTRO, BOOK_OF_MORMON_INTRO,
    COME_FOLLOW_ME_INTRO, DOCTRINE_AND_COVENANTS_INTRO, VERSE_JSON_TEMPLATE, VERSE_QUERY_INTRO,
};
use crate::generation::{non_blank, GenerationError};
use crate::llm_client::{GenerationRequest, TextGenerator};
use crate::parsing::parse_clean;

pub const MAX_TOKENS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseSource {
    ComeFollowMe,
    BookOfMormon,
    DoctrineCovenants,
    Bible,
}

impl VerseSource {
    pub fn parse(source: &str) -> Option<Self> {
        match source {
            "ComeFollowMe" => Some(VerseSource::ComeFollowMe),
            "BookOfMormon" => Some(VerseSource::BookOfMormon),
            "DoctrineCovenants" => Some(VerseSource::DoctrineCovenants),
            "Bible" => Some(VerseSource::Bible),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerseRequest {
    pub source: Option<String>,
    pub verse_query: Option<String>,
}

impl VerseRequest {
    pub fn verse_source(&self) -> Option<VerseSource> {
        self.source.as_deref().and_then(VerseSource::parse)
    }

    pub fn query(&self) -> Option<&str> {
        non_blank(self.verse_query.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub reference: String,
    pub version: String,
    pub text: String,
    pub source: String,
}

struct Hints<'a> {
    reference: &'a str,
    version: &'a str,
    text: &'a str,
    source: &'a str,
}

fn verse_prompt(intro: &str, hints: Hints<'_>) -> String {
    let shape = fill_template(
        VERSE_JSON_TEMPLATE,
        &[
            ("reference_hint", hints.reference),
            ("version_hint", hints.version),
            ("text_hint", hints.text),
            ("source_hint", hints.source),
        ],
    );
    format!("{intro}\n\n{shape}")
}

fn format_today(today: NaiveDate) -> String {
    today.format("%B %-d, %Y").to_string()
}

/// Builds the prompt for one verse-of-the-day fetcher.
pub fn fetcher_request(source: VerseSource, today: NaiveDate) -> GenerationRequest {
    let prompt = match source {
        VerseSource::ComeFollowMe => verse_prompt(
            &fill_template(
                COME_FOLLOW_ME_INTRO,
                &[("today", format_today(today).as_str())],
            ),
            Hints {
                reference: "Book Chapter:Verse (e.g., '1 Nephi 3:7' or 'D&C 4:2')",
                version: r#""LDS""#,
                text: "The exact text of the scripture",
                source: ANY_STANDARD_WORK_SOURCE,
            },
        ),
        VerseSource::BookOfMormon => verse_prompt(
            BOOK_OF_MORMON_INTRO,
            Hints {
                reference: "Book Chapter:Verse (e.g., '1 Nephi 3:7', 'Alma 32:21', 'Moroni 10:4-5')",
                version: r#""LDS""#,
                text: "The exact text of the scripture",
                source: r#""Book of Mormon""#,
            },
        ),
        VerseSource::DoctrineCovenants => verse_prompt(
            DOCTRINE_AND_COVENANTS_INTRO,
            Hints {
                reference: "D&C Section:Verse (e.g., 'D&C 4:2', 'D&C 88:118')",
                version: r#""LDS""#,
                text: "The exact text of the scripture",
                source: r#""Doctrine and Covenants""#,
            },
        ),
        VerseSource::Bible => verse_prompt(
            BIBLE_INTRO,
            Hints {
                reference: "Book Chapter:Verse (e.g., 'John 3:16', 'Proverbs 3:5-6')",
                version: r#""KJV""#,
                text: "The exact KJV text of the scripture",
                source: r#""Bible (KJV)""#,
            },
        ),
    };
    GenerationRequest::prompt_only(prompt, MAX_TOKENS)
}

/// Builds the prompt for a direct lookup of `query`.
pub fn query_request(query: &str) -> GenerationRequest {
    let prompt = verse_prompt(
        &fill_template(VERSE_QUERY_INTRO, &[("verse_query", query)]),
        Hints {
            reference: "Book Chapter:Verse (exactly as requested or corrected if needed)",
            version: r#""LDS" or "KJV""#,
            text: "The exact text of the verse",
            source: ANY_STANDARD_WORK_SOURCE,
        },
    );
    GenerationRequest::prompt_only(prompt, MAX_TOKENS)
}

async fn try_fetch(
    llm: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<Verse, GenerationError> {
    let text = llm.generate(request).await?;
    Ok(parse_clean::<Verse>(&text)?)
}

/// Runs one fetcher. Failures are logged and collapse to `None`.
pub async fn fetch_verse(
    llm: &dyn TextGenerator,
    source: VerseSource,
    today: NaiveDate,
) -> Option<Verse> {
    match try_fetch(llm, &fetcher_request(source, today)).await {
        Ok(verse) => Some(verse),
        Err(e) => {
            warn!("{source:?} verse fetch failed: {e}");
            None
        }
    }
}

/// Primary fetcher for `source` (if any), then Come, Follow Me.
pub async fn verse_of_the_day(
    llm: &dyn TextGenerator,
    source: Option<VerseSource>,
    today: NaiveDate,
) -> Result<Verse, GenerationError> {
    if let Some(source) = source {
        if let Some(verse) = fetch_verse(llm, source, today).await {
            info!("Verse of the day: {} ({})", verse.reference, verse.source);
            return Ok(verse);
        }
        info!("Primary verse source failed, trying Come, Follow Me");
    }

    let verse = fetch_verse(llm, VerseSource::ComeFollowMe, today)
        .await
        .ok_or(GenerationError::SourcesExhausted)?;
    info!("Verse of the day: {} ({})", verse.reference, verse.source);
    Ok(verse)
}

pub async fn lookup_verse(llm: &dyn TextGenerator, query: &str) -> Result<Verse, GenerationError> {
    info!("Verse lookup requested: {query}");
    try_fetch(llm, &query_request(query)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedGenerator;

    const NEPHI: &str = r#"{"reference": "1 Nephi 3:7", "version": "LDS", "text": "I will go and do", "source": "Book of Mormon"}"#;
    const JOHN: &str = "```json\n{\"reference\": \"John 3:16\", \"version\": \"KJV\", \"text\": \"For God so loved the world\", \"source\": \"Bible (KJV)\"}\n```";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_parse_source_names() {
        assert_eq!(VerseSource::parse("ComeFollowMe"), Some(VerseSource::ComeFollowMe));
        assert_eq!(
            VerseSource::parse("DoctrineCovenants"),
            Some(VerseSource::DoctrineCovenants)
        );
        assert_eq!(VerseSource::parse("bible"), None);
        assert_eq!(VerseSource::parse("Quran"), None);
    }

    #[test]
    fn test_come_follow_me_prompt_has_date() {
        let request = fetcher_request(VerseSource::ComeFollowMe, today());
        assert!(request.prompt.starts_with("Today is October 19, 2026."));
        assert!(request.system.is_none());
        assert_eq!(request.max_tokens, MAX_TOKENS);
    }

    #[test]
    fn test_bible_prompt_asks_for_kjv() {
        let request = fetcher_request(VerseSource::Bible, today());
        assert!(request.prompt.contains(r#""version": "KJV""#));
        assert!(request.prompt.contains(r#""source": "Bible (KJV)""#));
    }

    #[test]
    fn test_query_placeholders_stay_literal() {
        let request = query_request("Alma 32:21 {reference_hint}");
        assert!(request.prompt.contains("LDS scripture: Alma 32:21 {reference_hint}"));
        assert!(request.prompt.contains("exactly as requested or corrected if needed"));
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let request: VerseRequest =
            serde_json::from_str(r#"{"source": "Bible", "verseQuery": "  "}"#).unwrap();
        assert_eq!(request.query(), None);
        assert_eq!(request.verse_source(), Some(VerseSource::Bible));
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let llm = ScriptedGenerator::new([Some(NEPHI)]);
        let verse = verse_of_the_day(&llm, Some(VerseSource::BookOfMormon), today())
            .await
            .unwrap();
        assert_eq!(verse.reference, "1 Nephi 3:7");
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_primary_failure_falls_back_to_come_follow_me() {
        let llm = ScriptedGenerator::new([Some("not json"), Some(JOHN)]);
        let verse = verse_of_the_day(&llm, Some(VerseSource::Bible), today())
            .await
            .unwrap();
        assert_eq!(verse.reference, "John 3:16");
        let requests = llm.requests();
        assert!(requests[1].prompt.starts_with("Today is"));
    }

    #[tokio::test]
    async fn test_come_follow_me_retried_after_its_own_failure() {
        let llm = ScriptedGenerator::new([None, Some(NEPHI)]);
        let verse = verse_of_the_day(&llm, Some(VerseSource::ComeFollowMe), today())
            .await
            .unwrap();
        assert_eq!(verse.source, "Book of Mormon");
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn test_unknown_source_goes_straight_to_come_follow_me() {
        let llm = ScriptedGenerator::new([Some(NEPHI)]);
        verse_of_the_day(&llm, None, today()).await.unwrap();
        assert_eq!(llm.calls(), 1);
        assert!(llm.requests()[0].prompt.starts_with("Today is"));
    }

    #[tokio::test]
    async fn test_both_attempts_fail() {
        let llm = ScriptedGenerator::default();
        let result = verse_of_the_day(&llm, Some(VerseSource::Bible), today()).await;
        assert!(matches!(result, Err(GenerationError::SourcesExhausted)));
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn test_lookup_has_no_fallback() {
        let llm = ScriptedGenerator::new([Some("garbage"), Some(NEPHI)]);
        assert!(lookup_verse(&llm, "Alma 32:21").await.is_err());
        assert_eq!(llm.calls(), 1);
    }
}
