//! Document model for the parsed regulation.
//!
//! The tree is built once by the parser and never mutated afterwards. Every
//! node serializes with a `type` tag (chapter / section / article / point /
//! text / subpoint / recital / citation) matching the interchange contract,
//! so a serialize/deserialize round trip reproduces the identical tree.

use serde::{Deserialize, Deserializer, Serialize};

/// Header fields of the regulation, supplied by the caller alongside the
/// block sequence. Dates are kept verbatim as printed in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    #[serde(rename = "abbrv")]
    pub abbreviation: String,
    pub regulation: String,
    pub dated: String,
    pub updated: String,
    pub about: String,
    pub identifier: String,
    pub language: String,
}

impl DocumentMetadata {
    /// Metadata of the GDPR as published in OJ L 119.
    #[must_use]
    pub fn gdpr() -> Self {
        Self {
            title: "General Data Protection Regulation".to_string(),
            abbreviation: "GDPR".to_string(),
            regulation: "2016/679".to_string(),
            dated: "27/04/2016".to_string(),
            updated: "04/05/2016".to_string(),
            about: "protection of natural persons with regard to the processing of \
                    personal data and on the free movement of such data, and repealing \
                    Directive 95/46/EC (General Data Protection Regulation)"
                .to_string(),
            identifier: "L 119/1".to_string(),
            language: "EN".to_string(),
        }
    }
}

/// The complete parsed regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRoot {
    pub title: String,
    #[serde(rename = "abbrv")]
    pub abbreviation: String,
    pub regulation: String,
    pub dated: String,
    pub updated: String,
    pub about: String,
    pub identifier: String,
    pub language: String,
    pub chapters: Vec<Chapter>,
    pub recitals: Vec<Recital>,
    pub citations: Vec<Citation>,
}

/// A chapter. Its number is preserved verbatim (Roman numerals in the GDPR).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "chapter")]
pub struct Chapter {
    pub number: String,
    pub title: String,
    pub contents: ChapterContents,
}

impl Chapter {
    #[must_use]
    pub fn new(number: impl Into<String>, title: impl Into<String>, contents: ChapterContents) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            contents,
        }
    }
}

/// Children of a chapter: either all sections or all articles, never mixed.
///
/// The invariant lives in the type; deserializing a mixed list is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChapterContents {
    Sections(Vec<Section>),
    Articles(Vec<Article>),
}

impl ChapterContents {
    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Sections(sections) => sections.len(),
            Self::Articles(articles) => articles.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'de> Deserialize<'de> for ChapterContents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Child {
            Section(Section),
            Article(Article),
        }

        let children = Vec::<Child>::deserialize(deserializer)?;
        let mut sections = Vec::new();
        let mut articles = Vec::new();
        for child in children {
            match child {
                Child::Section(section) => sections.push(section),
                Child::Article(article) => articles.push(article),
            }
        }
        match (sections.is_empty(), articles.is_empty()) {
            (false, false) => Err(serde::de::Error::custom(
                "chapter contents mix sections and articles",
            )),
            (false, true) => Ok(Self::Sections(sections)),
            // An empty list reads as an empty article list
            _ => Ok(Self::Articles(articles)),
        }
    }
}

/// A section within a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "section")]
pub struct Section {
    pub number: String,
    pub title: String,
    pub contents: Vec<Article>,
}

impl Section {
    #[must_use]
    pub fn new(number: impl Into<String>, title: impl Into<String>, contents: Vec<Article>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            contents,
        }
    }
}

/// An article; its contents are the points extracted from its block run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "article")]
pub struct Article {
    pub number: String,
    pub title: String,
    pub contents: Vec<Point>,
}

impl Article {
    #[must_use]
    pub fn new(number: impl Into<String>, title: impl Into<String>, contents: Vec<Point>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            contents,
        }
    }
}

/// Kind tag of a point, serialized under the `type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    /// A point that carried a numbering prefix.
    #[serde(rename = "point")]
    Numbered,
    /// Unnumbered lead-in or plain text.
    #[serde(rename = "text")]
    PlainText,
}

/// A point within an article. Unnumbered lead-in text has a null number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub number: Option<String>,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: PointKind,
    pub subpoints: Vec<Subpoint>,
}

impl Point {
    /// Create a numbered point.
    #[must_use]
    pub fn numbered(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
            text: text.into(),
            kind: PointKind::Numbered,
            subpoints: Vec::new(),
        }
    }

    /// Create an unnumbered plain-text point.
    #[must_use]
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            number: None,
            text: text.into(),
            kind: PointKind::PlainText,
            subpoints: Vec::new(),
        }
    }

    /// Attach subpoints.
    #[must_use]
    pub fn with_subpoints(mut self, subpoints: Vec<Subpoint>) -> Self {
        self.subpoints = subpoints;
        self
    }
}

/// A subpoint. Numbers may be alphabetic or numeric, or absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "subpoint")]
pub struct Subpoint {
    pub number: Option<String>,
    pub text: String,
}

impl Subpoint {
    #[must_use]
    pub fn new(number: Option<String>, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// A recital from the document front matter. Flat, not nested under chapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "recital")]
pub struct Recital {
    pub number: Option<String>,
    pub text: String,
}

/// A footnote citation. Flat, document-level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "citation")]
pub struct Citation {
    pub number: String,
    pub text: String,
}
