//! Block classification.
//!
//! The source layout signals structure through three weak cues: a stable
//! "primary heading" identifier pattern shared by chapter, section and
//! article headings, the heading text itself, and a single emphasis marker
//! that only section headings carry. Classification is driven by a
//! priority-ordered rule table so a new document revision can add or adjust
//! rules without touching control flow.

use std::sync::LazyLock;

use regex::Regex;

use crate::block::Block;
use crate::config::EXPANDED_MARKER;

/// Classification of a source block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Opens a chapter; the next block is the chapter title.
    ChapterHeading,
    /// Opens a section; the next block is the section title.
    SectionHeading,
    /// Opens an article; the next block is the article title.
    ArticleHeading,
    /// Ordinary content belonging to the currently open group.
    Content,
}

impl BlockKind {
    /// Short label for error messages.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ChapterHeading => "chapter",
            Self::SectionHeading => "section",
            Self::ArticleHeading => "article",
            Self::Content => "content",
        }
    }
}

/// Identifier pattern shared by all top-level headings.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PRIMARY_HEADING_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^d1e\d+-1-1$").expect("valid regex"));

/// Chapter heading text, e.g. "CHAPTER IX". Case and whitespace insensitive.
#[allow(clippy::expect_used)]
static CHAPTER_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*CHAPTER\s+([IVXLCDM]+)\s*$").expect("valid regex"));

/// Article heading text, e.g. "Article 17".
#[allow(clippy::expect_used)]
static ARTICLE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Article (\d+)$").expect("valid regex"));

/// Section heading text, e.g. "Section 2". Sections are recognized by the
/// emphasis marker, so this pattern is only used for number extraction.
#[allow(clippy::expect_used)]
static SECTION_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*SECTION\s+(\S.*?)\s*$").expect("valid regex"));

/// One classification rule: all present conditions must hold.
struct HeadingRule {
    kind: BlockKind,
    text_pattern: Option<&'static LazyLock<Regex>>,
    required_marker: Option<&'static str>,
}

/// Rule table in priority order. First match wins.
static HEADING_RULES: &[HeadingRule] = &[
    HeadingRule {
        kind: BlockKind::ChapterHeading,
        text_pattern: Some(&CHAPTER_TEXT),
        required_marker: None,
    },
    HeadingRule {
        kind: BlockKind::SectionHeading,
        text_pattern: None,
        required_marker: Some(EXPANDED_MARKER),
    },
    HeadingRule {
        kind: BlockKind::ArticleHeading,
        text_pattern: Some(&ARTICLE_TEXT),
        required_marker: None,
    },
];

/// Classify a block against the rule table.
///
/// Blocks without the primary-heading identifier are always content,
/// whatever their text says.
#[must_use]
pub fn classify(block: &Block) -> BlockKind {
    let Some(id) = block.id.as_deref() else {
        return BlockKind::Content;
    };
    if !PRIMARY_HEADING_ID.is_match(id) {
        return BlockKind::Content;
    }

    for rule in HEADING_RULES {
        let text_ok = rule
            .text_pattern
            .is_none_or(|pattern| pattern.is_match(block.text.trim()));
        let marker_ok = rule
            .required_marker
            .is_none_or(|marker| block.has_marker(marker));
        if text_ok && marker_ok {
            return rule.kind;
        }
    }

    BlockKind::Content
}

/// Extract the printed number from a heading block, verbatim.
///
/// Returns `None` when the heading text does not carry a recognizable
/// number. Section headings are matched by marker rather than text, so
/// their pattern may legitimately fail.
#[must_use]
pub fn heading_number(kind: BlockKind, block: &Block) -> Option<String> {
    let text = block.text.trim();
    let pattern = match kind {
        BlockKind::ChapterHeading => &CHAPTER_TEXT,
        BlockKind::ArticleHeading => &ARTICLE_TEXT,
        BlockKind::SectionHeading => &SECTION_TEXT,
        BlockKind::Content => return None,
    };
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(text: &str) -> Block {
        Block::paragraph(text).with_id("d1e1374-1-1")
    }

    #[test]
    fn test_classify_chapter_heading() {
        assert_eq!(classify(&heading("CHAPTER I")), BlockKind::ChapterHeading);
        assert_eq!(classify(&heading("  CHAPTER IX  ")), BlockKind::ChapterHeading);
        // Case insensitive per the source's inconsistent casing
        assert_eq!(classify(&heading("Chapter IV")), BlockKind::ChapterHeading);
    }

    #[test]
    fn test_classify_article_heading() {
        assert_eq!(classify(&heading("Article 1")), BlockKind::ArticleHeading);
        assert_eq!(classify(&heading("Article 99")), BlockKind::ArticleHeading);
    }

    #[test]
    fn test_classify_section_heading_needs_marker() {
        let with_marker = heading("Section 1").with_marker(EXPANDED_MARKER);
        assert_eq!(classify(&with_marker), BlockKind::SectionHeading);

        // Same text without the marker is just content
        assert_eq!(classify(&heading("Section 1")), BlockKind::Content);
    }

    #[test]
    fn test_classify_requires_primary_id() {
        // Matching text but no identifier at all
        assert_eq!(classify(&Block::paragraph("Article 1")), BlockKind::Content);

        // Matching text but a non-heading identifier
        let block = Block::paragraph("CHAPTER I").with_id("d1e1374-2-3");
        assert_eq!(classify(&block), BlockKind::Content);
    }

    #[test]
    fn test_classify_content() {
        assert_eq!(
            classify(&Block::paragraph("1. This Regulation lays down rules")),
            BlockKind::Content
        );
        assert_eq!(classify(&heading("Article one")), BlockKind::Content);
    }

    #[test]
    fn test_chapter_number_verbatim_roman() {
        let block = heading("CHAPTER VIII");
        assert_eq!(
            heading_number(BlockKind::ChapterHeading, &block),
            Some("VIII".to_string())
        );
    }

    #[test]
    fn test_article_number() {
        let block = heading("Article 17");
        assert_eq!(
            heading_number(BlockKind::ArticleHeading, &block),
            Some("17".to_string())
        );
    }

    #[test]
    fn test_section_number() {
        let block = heading("Section 2").with_marker(EXPANDED_MARKER);
        assert_eq!(
            heading_number(BlockKind::SectionHeading, &block),
            Some("2".to_string())
        );
    }

    #[test]
    fn test_section_number_soft_failure() {
        let block = heading("Remedies").with_marker(EXPANDED_MARKER);
        assert_eq!(heading_number(BlockKind::SectionHeading, &block), None);
    }
}
