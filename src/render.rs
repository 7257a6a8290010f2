//! Cross-referenced outline rendering.
//!
//! Thin consumer of the document tree: a pure traversal that emits an
//! indented plain-text outline. Every addressable node gets a stable anchor
//! in brackets (`chapterI`, `section1`, `article4`, `article4-1`,
//! `article4-1-a`, `recital-1`) so rendered output can be referenced the
//! same way the published hierarchical page is.

use std::fmt::Write;

use crate::types::{Article, Chapter, ChapterContents, DocumentRoot, Point};

/// Render a document as an indented, cross-referenced outline.
#[must_use]
pub fn render_document(doc: &DocumentRoot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", doc.title, doc.abbreviation);
    let _ = writeln!(out, "{}", doc.about);

    if !doc.recitals.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Recitals");
        for recital in &doc.recitals {
            match recital.number.as_deref() {
                Some(number) => {
                    let _ = writeln!(
                        out,
                        "  ({}) {}  [recital-{}]",
                        number, recital.text, number
                    );
                }
                None => {
                    let _ = writeln!(out, "  {}", recital.text);
                }
            }
        }
    }

    for chapter in &doc.chapters {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Chapter {} {}  [chapter{}]",
            chapter.number, chapter.title, chapter.number
        );
        match &chapter.contents {
            ChapterContents::Sections(sections) => {
                for section in sections {
                    let _ = writeln!(
                        out,
                        "  Section {} {}  [section{}]",
                        section.number, section.title, section.number
                    );
                    for article in &section.contents {
                        render_article(&mut out, article, 2);
                    }
                }
            }
            ChapterContents::Articles(articles) => {
                for article in articles {
                    render_article(&mut out, article, 1);
                }
            }
        }
    }

    if !doc.citations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Citations");
        for citation in &doc.citations {
            let _ = writeln!(out, "  ({}) {}", citation.number, citation.text);
        }
    }

    out
}

fn render_article(out: &mut String, article: &Article, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(
        out,
        "{}Article {} {}  [article{}]",
        indent, article.number, article.title, article.number
    );
    for point in &article.contents {
        render_point(out, point, &article.number, depth + 1);
    }
}

fn render_point(out: &mut String, point: &Point, article_number: &str, depth: usize) {
    let indent = "  ".repeat(depth);
    match point.number.as_deref() {
        Some(number) => {
            let _ = writeln!(
                out,
                "{}({}) {}  [article{}-{}]",
                indent, number, point.text, article_number, number
            );
        }
        None => {
            let _ = writeln!(out, "{}{}", indent, point.text);
        }
    }

    let sub_indent = "  ".repeat(depth + 1);
    for subpoint in &point.subpoints {
        match (subpoint.number.as_deref(), point.number.as_deref()) {
            (Some(sub), Some(number)) => {
                let _ = writeln!(
                    out,
                    "{}({}) {}  [article{}-{}-{}]",
                    sub_indent, sub, subpoint.text, article_number, number, sub
                );
            }
            (Some(sub), None) => {
                let _ = writeln!(out, "{}({}) {}", sub_indent, sub, subpoint.text);
            }
            (None, _) => {
                // Unnumbered subpoints keep the source's dash convention
                let _ = writeln!(out, "{}- {}", sub_indent, subpoint.text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocumentMetadata, Recital, Section, Subpoint};

    fn small_doc() -> DocumentRoot {
        let metadata = DocumentMetadata::gdpr();
        DocumentRoot {
            title: metadata.title,
            abbreviation: metadata.abbreviation,
            regulation: metadata.regulation,
            dated: metadata.dated,
            updated: metadata.updated,
            about: metadata.about,
            identifier: metadata.identifier,
            language: metadata.language,
            chapters: vec![Chapter::new(
                "I",
                "General provisions",
                ChapterContents::Articles(vec![Article::new(
                    "1",
                    "Subject-matter",
                    vec![
                        Point::numbered("1", "This Regulation lays down rules.").with_subpoints(
                            vec![Subpoint::new(Some("a".to_string()), "first item")],
                        ),
                    ],
                )]),
            )],
            recitals: vec![Recital {
                number: Some("1".to_string()),
                text: "The protection of natural persons.".to_string(),
            }],
            citations: Vec::new(),
        }
    }

    #[test]
    fn test_render_anchors() {
        let output = render_document(&small_doc());
        assert!(output.contains("[chapterI]"));
        assert!(output.contains("[article1]"));
        assert!(output.contains("[article1-1]"));
        assert!(output.contains("[article1-1-a]"));
        assert!(output.contains("[recital-1]"));
    }

    #[test]
    fn test_render_headings() {
        let output = render_document(&small_doc());
        assert!(output.contains("General Data Protection Regulation (GDPR)"));
        assert!(output.contains("Chapter I General provisions"));
        assert!(output.contains("Article 1 Subject-matter"));
        assert!(output.contains("(1) This Regulation lays down rules."));
    }

    #[test]
    fn test_render_sections_and_dash_subpoints() {
        let doc = DocumentRoot {
            chapters: vec![Chapter::new(
                "III",
                "Rights",
                ChapterContents::Sections(vec![Section::new(
                    "1",
                    "Transparency",
                    vec![Article::new(
                        "12",
                        "Transparent information",
                        vec![Point::plain_text("Lead-in.")
                            .with_subpoints(vec![Subpoint::new(None, "unlabelled")])],
                    )],
                )]),
            )],
            ..small_doc()
        };

        let output = render_document(&doc);
        assert!(output.contains("Section 1 Transparency  [section1]"));
        assert!(output.contains("- unlabelled"));
    }
}
