//! Flat side-lists: recitals and citations.
//!
//! Both live outside the chapter hierarchy. Recitals are a run of
//! consecutive table blocks after a fixed anchor in the front matter;
//! citations are `note`-marked blocks scattered through the whole document.

use std::sync::LazyLock;

use regex::Regex;

use crate::block::Block;
use crate::config::{NOTE_MARKER, RECITALS_ANCHOR_ID};
use crate::error::{ParseError, Result};
use crate::types::{Citation, Recital};

/// Parenthesized numeric recital label, e.g. "(14)".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static RECITAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((\d+)\)").expect("valid regex"));

/// Citation pattern: "(<digits>) <text>".
#[allow(clippy::expect_used)]
static CITATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\((\d+)\)\s+(.*)$").expect("valid regex"));

/// Extract the recital list.
///
/// Walks to the anchor block, advances to the first table block at or after
/// it, then consumes consecutive table blocks as `(number, text)` pairs.
/// The first non-table block is the expected terminal condition. A document
/// without the anchor simply has no recital front matter.
pub fn extract_recitals(blocks: &[Block]) -> Result<Vec<Recital>> {
    let Some(anchor) = blocks
        .iter()
        .position(|block| block.id.as_deref() == Some(RECITALS_ANCHOR_ID))
    else {
        tracing::warn!(anchor = RECITALS_ANCHOR_ID, "recitals anchor not found");
        return Ok(Vec::new());
    };

    let mut recitals = Vec::new();
    for block in blocks[anchor..]
        .iter()
        .skip_while(|block| !block.is_table())
    {
        if !block.is_table() {
            break;
        }
        let number = block
            .fragment(0)
            .and_then(|fragment| RECITAL_PREFIX.captures(fragment))
            .map(|caps| caps[1].to_string());
        let text = block.fragment(1).unwrap_or_default().to_string();
        recitals.push(Recital { number, text });
    }

    Ok(recitals)
}

/// Extract every citation in the document.
///
/// A block carrying the note marker must match the citation pattern;
/// one that does not is malformed input, not a soft miss.
pub fn extract_citations(blocks: &[Block]) -> Result<Vec<Citation>> {
    let mut citations = Vec::new();

    for (index, block) in blocks.iter().enumerate() {
        if !block.has_marker(NOTE_MARKER) {
            continue;
        }
        let text = block.text.trim();
        let caps = CITATION_PATTERN
            .captures(text)
            .ok_or_else(|| ParseError::MalformedCitation {
                index,
                text: text.to_string(),
            })?;
        citations.push(Citation {
            number: caps[1].to_string(),
            text: caps[2].to_string(),
        });
    }

    Ok(citations)
}
