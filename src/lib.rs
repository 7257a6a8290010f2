//! GDPR Parser - reconstruct the regulation's hierarchy from flat text blocks.
//!
//! This crate turns the flat, linearly-ordered block sequence extracted from
//! the published GDPR text into a strictly nested document model:
//! chapters, optional sections, articles, points and subpoints, plus the
//! flat recital and citation side-lists.
//!
//! # Example
//!
//! ```
//! use gdpr_parser::{parse_document, Block, DocumentMetadata};
//!
//! let blocks = vec![
//!     Block::paragraph("CHAPTER I").with_id("d1e1374-1-1"),
//!     Block::paragraph("General provisions"),
//!     Block::paragraph("Article 1").with_id("d1e1500-1-1"),
//!     Block::paragraph("Subject-matter and objectives"),
//!     Block::paragraph("1. This Regulation lays down rules."),
//!     Block::other("final").with_marker("final"),
//! ];
//!
//! let document = parse_document(&blocks, DocumentMetadata::gdpr()).unwrap();
//! assert_eq!(document.chapters.len(), 1);
//! ```
//!
//! # Architecture
//!
//! - [`block`]: Input boundary (opaque text block handles)
//! - [`config`]: Fixed identifiers and style-marker names
//! - [`error`]: Error types and Result alias
//! - [`classify`]: Block classification rule table
//! - [`segment`]: Heading-driven segmentation
//! - [`points`]: Point/subpoint extraction strategies
//! - [`sidelists`]: Recital and citation extraction
//! - [`types`]: Document model and interchange contract
//! - [`parser`]: Tree assembler
//! - [`render`]: Cross-referenced outline rendering
//! - [`cli`]: Command-line interface

pub mod block;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod points;
pub mod render;
pub mod segment;
pub mod sidelists;
pub mod types;

// Re-export main functions
pub use parser::{parse_chapters, parse_document};
pub use render::render_document;

// Re-export commonly used items
pub use block::{Block, BlockType};
pub use classify::{classify, BlockKind};
pub use error::{ParseError, Result};
pub use types::{
    Article, Chapter, ChapterContents, Citation, DocumentMetadata, DocumentRoot, Point, PointKind,
    Recital, Section, Subpoint,
};
