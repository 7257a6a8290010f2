//! Point and subpoint extraction from an article's content blocks.
//!
//! Two strategies share one output shape. In the general layout a numbered
//! point is a paragraph block and its subpoints follow as sibling table
//! blocks. In the embedded-table layout (Article 4, the definitions list)
//! every point is itself a table block and its subpoints are further
//! fragments of that same block. The strategy is selected per article
//! number at the call site; both walks thread an explicit accumulator and
//! keep no state between calls.

use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Block, BlockType};
use crate::config::uses_embedded_tables;
use crate::error::{ParseError, Result};
use crate::types::{Point, PointKind, Subpoint};

/// Leading `<digits>.` numbering prefix of a general-case point.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static POINT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(\d+)\.\s*(.*)$").expect("valid regex"));

/// Parenthesized alphanumeric subpoint label, e.g. "(a)" or "(ii)".
#[allow(clippy::expect_used)]
static SUBPOINT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((\w+)\)").expect("valid regex"));

/// Parenthesized numeric point label of the embedded-table layout, e.g. "(1)".
#[allow(clippy::expect_used)]
static EMBEDDED_POINT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((\d+)\)").expect("valid regex"));

/// Strategy for turning an article's content blocks into points.
pub trait PointStrategy {
    /// Extract the ordered point list. `article_number` is only used for
    /// error context.
    fn extract(&self, blocks: &[Block], article_number: &str) -> Result<Vec<Point>>;
}

/// Select the strategy for an article by its number.
#[must_use]
pub fn strategy_for(article_number: &str) -> &'static dyn PointStrategy {
    if uses_embedded_tables(article_number) {
        &EmbeddedTableStrategy
    } else {
        &SequentialPointStrategy
    }
}

/// General case: paragraph blocks open points, table blocks carry one
/// subpoint each for the most recently opened point.
pub struct SequentialPointStrategy;

impl PointStrategy for SequentialPointStrategy {
    fn extract(&self, blocks: &[Block], article_number: &str) -> Result<Vec<Point>> {
        let mut points: Vec<Point> = Vec::new();

        for (index, block) in blocks.iter().enumerate() {
            match block.block_type {
                BlockType::Paragraph => {
                    let text = block.text.trim();
                    let point = match POINT_PREFIX.captures(text) {
                        Some(caps) => Point::numbered(&caps[1], caps[2].trim()),
                        // Unnumbered lead-in clause, not an error
                        None => Point::plain_text(text),
                    };
                    points.push(point);
                }
                BlockType::Table => {
                    let Some(point) = points.last_mut() else {
                        return Err(ParseError::OrphanSubpoint {
                            index,
                            article: article_number.to_string(),
                        });
                    };
                    point.subpoints.push(subpoint_from_carrier(block));
                }
                BlockType::Other => {
                    tracing::debug!(
                        index,
                        article = article_number,
                        "skipping untyped block in article contents"
                    );
                }
            }
        }

        Ok(points)
    }
}

/// Build a subpoint from a carrier table block: fragment 0 holds the label,
/// fragment 1 the text. Missing pieces degrade to null/empty.
fn subpoint_from_carrier(block: &Block) -> Subpoint {
    let number = block
        .fragment(0)
        .and_then(|fragment| SUBPOINT_PREFIX.captures(fragment))
        .map(|caps| caps[1].to_string());
    let text = block.fragment(1).unwrap_or_default().to_string();
    Subpoint::new(number, text)
}

/// Embedded-table case: each table block is one point, with its subpoints
/// as trailing fragment pairs of the same block. Sibling blocks are never
/// consulted.
pub struct EmbeddedTableStrategy;

impl PointStrategy for EmbeddedTableStrategy {
    fn extract(&self, blocks: &[Block], _article_number: &str) -> Result<Vec<Point>> {
        let mut points = Vec::new();

        for block in blocks {
            if block.fragments.is_empty() {
                // The irregular lead-in clause has no embedded fragments
                points.push(Point::plain_text(block.text.trim()));
                continue;
            }

            let number = block
                .fragment(0)
                .and_then(|fragment| EMBEDDED_POINT_PREFIX.captures(fragment))
                .map(|caps| caps[1].to_string());
            let text = block.fragment(1).unwrap_or_default().to_string();

            let mut subpoints = Vec::new();
            for pair in block.fragments.get(2..).unwrap_or_default().chunks(2) {
                let sub_number = pair
                    .first()
                    .map(|fragment| fragment.trim())
                    .and_then(|fragment| SUBPOINT_PREFIX.captures(fragment))
                    .map(|caps| caps[1].to_string());
                let sub_text = pair.get(1).map_or(String::new(), |f| f.trim().to_string());
                subpoints.push(Subpoint::new(sub_number, sub_text));
            }

            points.push(Point {
                number,
                text,
                kind: PointKind::Numbered,
                subpoints,
            });
        }

        Ok(points)
    }
}
