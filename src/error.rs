//! Error types for the parser.
//!
//! Structural errors are fatal: they abort the whole parse and carry enough
//! context (block index, expected pattern, offending text) to locate the
//! input that caused them. Numbering mismatches are never errors; the
//! extractors degrade them to a null number instead.

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A recognized heading has no following block to take its title from.
    #[error("{kind} heading '{heading}' at block {index} has no following title block")]
    MissingTitle {
        kind: String,
        index: usize,
        heading: String,
    },

    /// Content appeared before the first heading of a committed segmentation.
    #[error("content at block {index} precedes the first {kind} heading: '{text}'")]
    ContentBeforeHeading {
        kind: String,
        index: usize,
        text: String,
    },

    /// A chapter mixes section headings with content outside any section.
    #[error("block {index} is outside any section but the chapter has section headings: '{text}'")]
    MixedChapterContent { index: usize, text: String },

    /// A subpoint carrier appeared before any point was opened.
    #[error("table block {index} in article {article} carries a subpoint but no point is open")]
    OrphanSubpoint { index: usize, article: String },

    /// A block carries the citation marker but does not match the citation pattern.
    #[error(r"citation at block {index} does not match '^\((\d+)\) <text>': '{text}'")]
    MalformedCitation { index: usize, text: String },

    /// A body boundary marker was not found in the input sequence.
    #[error("body boundary '{marker}' not found in block sequence")]
    BoundaryNotFound { marker: String },

    /// JSON (de)serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParseError>;
