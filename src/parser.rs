//! Tree assembler: composes classification, segmentation and point
//! extraction into the final document.
//!
//! One linear pass per level: the bounded body is segmented into chapters;
//! each chapter is probed for sections and segmented again; each article's
//! blocks go through the point strategy selected by its number. Recitals
//! and citations are extracted from the full, unbounded sequence. The call
//! either returns a fully-formed tree or fails; there is no partial result.

use crate::block::Block;
use crate::classify::BlockKind;
use crate::config::{BODY_START_ID, FINAL_MARKER};
use crate::error::{ParseError, Result};
use crate::points::strategy_for;
use crate::segment::{probe_segments, segment};
use crate::sidelists::{extract_citations, extract_recitals};
use crate::types::{
    Article, Chapter, ChapterContents, DocumentMetadata, DocumentRoot, Section,
};

/// Parse a full block sequence into a document.
///
/// # Arguments
/// * `blocks` - The complete ordered block sequence, including front matter
/// * `metadata` - Header fields for the document root
pub fn parse_document(blocks: &[Block], metadata: DocumentMetadata) -> Result<DocumentRoot> {
    let body = body_blocks(blocks)?;
    let chapters = parse_chapters(body)?;
    let recitals = extract_recitals(blocks)?;
    let citations = extract_citations(blocks)?;

    tracing::debug!(
        chapters = chapters.len(),
        recitals = recitals.len(),
        citations = citations.len(),
        "assembled document"
    );

    Ok(DocumentRoot {
        title: metadata.title,
        abbreviation: metadata.abbreviation,
        regulation: metadata.regulation,
        dated: metadata.dated,
        updated: metadata.updated,
        about: metadata.about,
        identifier: metadata.identifier,
        language: metadata.language,
        chapters,
        recitals,
        citations,
    })
}

/// The regulation body: from the block with the known start identifier up
/// to (excluding) the block carrying the final marker.
pub fn body_blocks(blocks: &[Block]) -> Result<&[Block]> {
    let start = blocks
        .iter()
        .position(|block| block.id.as_deref() == Some(BODY_START_ID))
        .ok_or_else(|| ParseError::BoundaryNotFound {
            marker: BODY_START_ID.to_string(),
        })?;

    let end = blocks[start..]
        .iter()
        .position(|block| block.has_marker(FINAL_MARKER))
        .map(|offset| start + offset)
        .ok_or_else(|| ParseError::BoundaryNotFound {
            marker: FINAL_MARKER.to_string(),
        })?;

    Ok(&blocks[start..end])
}

/// Parse a pre-bounded body sequence into chapters.
pub fn parse_chapters(blocks: &[Block]) -> Result<Vec<Chapter>> {
    let chapter_segments = segment(blocks, BlockKind::ChapterHeading)?;
    let mut chapters = Vec::with_capacity(chapter_segments.len());

    for chapter in chapter_segments {
        // Speculative probe: zero section headings means the chapter goes
        // straight to articles.
        let contents = match probe_segments(&chapter.contents, BlockKind::SectionHeading)? {
            Some(section_segments) => {
                let mut sections = Vec::with_capacity(section_segments.len());
                for section in section_segments {
                    let articles = build_articles(&section.contents)?;
                    sections.push(Section::new(section.number, section.title, articles));
                }
                ChapterContents::Sections(sections)
            }
            None => ChapterContents::Articles(build_articles(&chapter.contents)?),
        };

        tracing::debug!(
            chapter = %chapter.number,
            children = contents.len(),
            "assembled chapter"
        );
        chapters.push(Chapter::new(chapter.number, chapter.title, contents));
    }

    Ok(chapters)
}

/// Segment article headings and run the per-article point strategy.
fn build_articles(blocks: &[Block]) -> Result<Vec<Article>> {
    let article_segments = segment(blocks, BlockKind::ArticleHeading)?;
    let mut articles = Vec::with_capacity(article_segments.len());

    for article in article_segments {
        let points = strategy_for(&article.number).extract(&article.contents, &article.number)?;
        articles.push(Article::new(article.number, article.title, points));
    }

    Ok(articles)
}
