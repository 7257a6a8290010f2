//! Generic heading-driven segmentation.
//!
//! One left-to-right pass over a block sequence with an explicit open-group
//! accumulator: a heading of the requested kind closes the current group
//! and opens a new one, seeded with the number parsed from the heading text
//! and the title taken from the block immediately following the heading.
//! The same routine segments chapters, sections and articles; only the
//! heading kind differs.

use crate::block::Block;
use crate::classify::{classify, heading_number, BlockKind};
use crate::error::{ParseError, Result};

/// One segmented group: a numbered, titled run of content blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Number parsed from the heading text, verbatim.
    pub number: String,
    /// Title taken from the block following the heading.
    pub title: String,
    /// Content blocks up to the next heading.
    pub contents: Vec<Block>,
}

/// Segment `blocks` at headings of the given kind.
///
/// The first block must be a heading: content before the first heading
/// means the caller segmented at the wrong level, which is a structural
/// error, not something to drop silently.
pub fn segment(blocks: &[Block], kind: BlockKind) -> Result<Vec<Segment>> {
    match walk(blocks, kind)? {
        Walk::Segments(segments) => Ok(segments),
        Walk::NoHeadings => {
            if let Some(first) = blocks.first() {
                Err(ParseError::ContentBeforeHeading {
                    kind: kind.label().to_string(),
                    index: 0,
                    text: first.text.trim().to_string(),
                })
            } else {
                Ok(Vec::new())
            }
        }
    }
}

/// Speculatively segment `blocks` at headings of the given kind.
///
/// Returns `Ok(None)` when the sequence contains no heading of that kind at
/// all -- the valid negative signal used for section detection. A sequence
/// that does contain such headings but opens with stray content is
/// inconsistent mixed content and fails.
///
/// The probe is pure: it inspects and returns, nothing else.
pub fn probe_segments(blocks: &[Block], kind: BlockKind) -> Result<Option<Vec<Segment>>> {
    match walk(blocks, kind)? {
        Walk::Segments(segments) => Ok(Some(segments)),
        Walk::NoHeadings => Ok(None),
    }
}

enum Walk {
    Segments(Vec<Segment>),
    NoHeadings,
}

/// Shared single-pass walk. Reports `NoHeadings` only when the entire
/// sequence is free of headings of the requested kind.
fn walk(blocks: &[Block], kind: BlockKind) -> Result<Walk> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut open: Option<Segment> = None;
    let mut stray: Option<usize> = None;

    let mut index = 0;
    while index < blocks.len() {
        let block = &blocks[index];
        if classify(block) == kind {
            if let Some(stray_index) = stray {
                // Headings exist, so the earlier stray content is mixed
                // content rather than a no-headings probe result.
                return Err(mixed_content_error(kind, stray_index, &blocks[stray_index]));
            }

            let heading_text = block.text.trim().to_string();
            let title = blocks.get(index + 1).ok_or_else(|| ParseError::MissingTitle {
                kind: kind.label().to_string(),
                index,
                heading: heading_text.clone(),
            })?;

            if let Some(finished) = open.take() {
                segments.push(finished);
            }
            open = Some(Segment {
                // Sections are matched by marker, so their number pattern
                // may fail; fall back to the raw heading text.
                number: heading_number(kind, block).unwrap_or(heading_text),
                title: title.text.trim().to_string(),
                contents: Vec::new(),
            });
            // The title block is consumed regardless of its own classification
            index += 2;
            continue;
        }

        match open.as_mut() {
            Some(segment) => segment.contents.push(block.clone()),
            None => {
                if stray.is_none() {
                    stray = Some(index);
                }
            }
        }
        index += 1;
    }

    if let Some(finished) = open.take() {
        segments.push(finished);
    }

    if segments.is_empty() {
        Ok(Walk::NoHeadings)
    } else {
        Ok(Walk::Segments(segments))
    }
}

fn mixed_content_error(kind: BlockKind, index: usize, block: &Block) -> ParseError {
    let text = block.text.trim().to_string();
    match kind {
        BlockKind::SectionHeading => ParseError::MixedChapterContent { index, text },
        _ => ParseError::ContentBeforeHeading {
            kind: kind.label().to_string(),
            index,
            text,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn heading(text: &str) -> Block {
        Block::paragraph(text).with_id("d1e1000-1-1")
    }

    #[test]
    fn test_segment_two_chapters() {
        let blocks = vec![
            heading("CHAPTER I"),
            Block::paragraph("General provisions"),
            Block::paragraph("Article 1"),
            heading("CHAPTER II"),
            Block::paragraph("Principles"),
            Block::paragraph("content"),
            Block::paragraph("more content"),
        ];

        let segments = segment(&blocks, BlockKind::ChapterHeading).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].number, "I");
        assert_eq!(segments[0].title, "General provisions");
        assert_eq!(segments[0].contents.len(), 1);
        assert_eq!(segments[1].number, "II");
        assert_eq!(segments[1].contents.len(), 2);
    }

    #[test]
    fn test_title_block_consumed_even_if_heading_shaped() {
        // The block after a heading is the title no matter what it looks like
        let blocks = vec![
            heading("CHAPTER I"),
            heading("Article 1"),
            Block::paragraph("content"),
        ];

        let segments = segment(&blocks, BlockKind::ChapterHeading).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].title, "Article 1");
        assert_eq!(segments[0].contents.len(), 1);
    }

    #[test]
    fn test_heading_at_end_missing_title() {
        let blocks = vec![heading("CHAPTER I")];
        let err = segment(&blocks, BlockKind::ChapterHeading).unwrap_err();
        assert!(matches!(err, ParseError::MissingTitle { index: 0, .. }));
    }

    #[test]
    fn test_content_before_first_heading_fails() {
        let blocks = vec![
            Block::paragraph("stray"),
            heading("Article 1"),
            Block::paragraph("Title"),
        ];
        let err = segment(&blocks, BlockKind::ArticleHeading).unwrap_err();
        assert!(matches!(
            err,
            ParseError::ContentBeforeHeading { index: 0, .. }
        ));
    }

    #[test]
    fn test_segment_empty_input() {
        let segments = segment(&[], BlockKind::ArticleHeading).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn test_probe_no_headings_is_negative_signal() {
        let blocks = vec![
            heading("Article 1"),
            Block::paragraph("Title"),
            Block::paragraph("content"),
        ];
        // Probing for sections over article blocks finds nothing
        let result = probe_segments(&blocks, BlockKind::SectionHeading).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_probe_finds_sections() {
        let blocks = vec![
            heading("Section 1").with_marker("expanded"),
            Block::paragraph("Transparency and modalities"),
            heading("Article 12"),
            Block::paragraph("Title"),
        ];
        let sections = probe_segments(&blocks, BlockKind::SectionHeading)
            .unwrap()
            .unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].number, "1");
        assert_eq!(sections[0].contents.len(), 2);
    }

    #[test]
    fn test_probe_mixed_content_fails() {
        // Bare article blocks before the first section heading
        let blocks = vec![
            heading("Article 11"),
            Block::paragraph("Title"),
            heading("Section 1").with_marker("expanded"),
            Block::paragraph("Section title"),
        ];
        let err = probe_segments(&blocks, BlockKind::SectionHeading).unwrap_err();
        assert!(matches!(err, ParseError::MixedChapterContent { index: 0, .. }));
    }

    #[test]
    fn test_section_number_falls_back_to_heading_text() {
        let blocks = vec![
            heading("Remedies, liability and penalties").with_marker("expanded"),
            Block::paragraph("Title"),
        ];
        let sections = probe_segments(&blocks, BlockKind::SectionHeading)
            .unwrap()
            .unwrap();
        assert_eq!(sections[0].number, "Remedies, liability and penalties");
    }
}
