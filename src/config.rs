//! Fixed identifiers and style-marker names from the EUR-Lex GDPR layout.
//!
//! The source page carries only weak structural cues: stable element ids,
//! a handful of CSS-class style markers, and textual numbering prefixes.
//! Everything the parser keys on is named here so a new document revision
//! only has to touch constants, not control flow.

/// Identifier of the block where the regulation body begins ("CHAPTER I").
pub const BODY_START_ID: &str = "d1e1374-1-1";

/// Identifier of the anchor block preceding the recital tables.
pub const RECITALS_ANCHOR_ID: &str = "d1e40-1-1";

/// Style marker carried by the block that terminates the regulation body.
pub const FINAL_MARKER: &str = "final";

/// Style marker carried by citation blocks.
pub const NOTE_MARKER: &str = "note";

/// Style marker that distinguishes section headings from article headings.
///
/// Both share the primary-heading identifier pattern; the expanded emphasis
/// marker is the only signal that a chapter is divided into sections.
pub const EXPANDED_MARKER: &str = "expanded";

/// Articles whose points are individually wrapped in table blocks with the
/// subpoints embedded in the same block (Article 4, the definitions list).
pub const EMBEDDED_TABLE_ARTICLES: &[&str] = &["4"];

/// Whether an article uses the embedded-table point layout.
#[must_use]
pub fn uses_embedded_tables(article_number: &str) -> bool {
    EMBEDDED_TABLE_ARTICLES.contains(&article_number)
}
