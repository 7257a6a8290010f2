//! Input boundary: opaque text blocks extracted from the source document.
//!
//! A [`Block`] is what the external acquisition step hands over per source
//! element: a coarse type tag (paragraph-like vs table-like), the element
//! identifier if it has one, the style markers it carries, its full text,
//! and the embedded text fragments of table-like blocks. The parser never
//! touches the live document; it only reads these handles.

use serde::{Deserialize, Serialize};

/// Coarse type tag of a source block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Paragraph-like element (`<p>` in the source page).
    Paragraph,
    /// Table-like element; its embedded fragments carry subpoint data.
    Table,
    /// Anything else (divs, images, horizontal rules).
    Other,
}

/// One opaque text block from the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block type tag.
    #[serde(rename = "type")]
    pub block_type: BlockType,

    /// Element identifier, if the source element had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Style markers carried by the block (CSS classes in the source).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<String>,

    /// Full text content of the block.
    #[serde(default)]
    pub text: String,

    /// Embedded text fragments, in order. Populated for table-like blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fragments: Vec<String>,
}

impl Block {
    /// Create a paragraph block with the given text.
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            block_type: BlockType::Paragraph,
            id: None,
            markers: Vec::new(),
            text: text.into(),
            fragments: Vec::new(),
        }
    }

    /// Create a table block with the given embedded fragments.
    #[must_use]
    pub fn table(fragments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            block_type: BlockType::Table,
            id: None,
            markers: Vec::new(),
            text: String::new(),
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an untyped block with the given text.
    #[must_use]
    pub fn other(text: impl Into<String>) -> Self {
        Self {
            block_type: BlockType::Other,
            id: None,
            markers: Vec::new(),
            text: text.into(),
            fragments: Vec::new(),
        }
    }

    /// Set the element identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a style marker.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }

    /// Set the full text content (used for table blocks, whose constructor
    /// only takes fragments).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Whether this block carries the given style marker.
    #[must_use]
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    /// Whether this is a table-like block.
    #[must_use]
    pub fn is_table(&self) -> bool {
        self.block_type == BlockType::Table
    }

    /// Embedded fragment at `index`, trimmed, if present.
    #[must_use]
    pub fn fragment(&self, index: usize) -> Option<&str> {
        self.fragments.get(index).map(|f| f.trim())
    }
}
