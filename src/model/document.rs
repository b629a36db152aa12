//! Document-level types.

use serde::{Deserialize, Serialize};

use super::ContentNode;
use crate::error::Result;

/// A structured document ready for figure binding and pagination.
///
/// The root `content` sequence contains only `Section` nodes. Input that
/// violates this (a bare paragraph at top level, a root subsection) is
/// repaired on entry: see [`Document::normalize_root`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document title
    #[serde(default)]
    pub title: String,

    /// Optional subtitle
    #[serde(default)]
    pub subtitle: Option<String>,

    /// Top-level sections in reading order
    #[serde(default)]
    pub content: Vec<ContentNode>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            content: Vec::new(),
        }
    }

    /// Parse a document from structuring-collaborator JSON.
    ///
    /// The root sequence is normalized after parsing so the section-only
    /// invariant holds for every document entering the pipeline.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut doc: Document = serde_json::from_str(json)?;
        if doc.title.is_empty() {
            doc.title = "Untitled Document".to_string();
        }
        doc.normalize_root();
        Ok(doc)
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Add a top-level section.
    pub fn add_section(&mut self, heading: impl Into<String>, content: Vec<ContentNode>) {
        self.content.push(ContentNode::section(heading, content));
    }

    /// Repair the root sequence so it contains only `Section` nodes.
    ///
    /// Root-level subsections are promoted to sections (same shape). Each
    /// maximal run of any other node kind is wrapped in one synthetic
    /// untitled section, preserving order; the renderer supplies the
    /// "Untitled Section" label.
    pub fn normalize_root(&mut self) {
        if self.content.iter().all(ContentNode::is_section) {
            return;
        }

        let nodes = std::mem::take(&mut self.content);
        let mut stray: Vec<ContentNode> = Vec::new();

        for node in nodes {
            match node {
                ContentNode::Section { .. } => {
                    if !stray.is_empty() {
                        log::debug!("wrapping {} stray root nodes in untitled section", stray.len());
                        self.content
                            .push(ContentNode::section("", std::mem::take(&mut stray)));
                    }
                    self.content.push(node);
                }
                ContentNode::Subsection { heading, content } => {
                    if !stray.is_empty() {
                        self.content
                            .push(ContentNode::section("", std::mem::take(&mut stray)));
                    }
                    self.content.push(ContentNode::Section { heading, content });
                }
                other => stray.push(other),
            }
        }

        if !stray.is_empty() {
            self.content.push(ContentNode::section("", stray));
        }
    }

    /// Check if the document has any content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Count every node in the tree.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[ContentNode]) -> usize {
            nodes
                .iter()
                .map(|n| match n {
                    ContentNode::Section { content, .. }
                    | ContentNode::Subsection { content, .. } => 1 + count(content),
                    _ => 1,
                })
                .sum()
        }
        count(&self.content)
    }

    /// Count figure nodes in the tree.
    pub fn figure_count(&self) -> usize {
        fn count(nodes: &[ContentNode]) -> usize {
            nodes
                .iter()
                .map(|n| match n {
                    ContentNode::Section { content, .. }
                    | ContentNode::Subsection { content, .. } => count(content),
                    ContentNode::Figure { .. } => 1,
                    _ => 0,
                })
                .sum()
        }
        count(&self.content)
    }

    /// Plain text content of the whole document.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|n| n.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new("Networking");
        assert!(doc.is_empty());
        assert_eq!(doc.node_count(), 0);
    }

    #[test]
    fn test_from_json_normalizes_root() {
        let json = r#"{
            "title": "Networking",
            "content": [
                {"type": "paragraph", "text": "Preamble."},
                {"type": "section", "heading": "Basics", "content": []}
            ]
        }"#;
        let doc = Document::from_json(json).unwrap();
        assert_eq!(doc.content.len(), 2);
        assert!(doc.content.iter().all(ContentNode::is_section));
        match &doc.content[0] {
            ContentNode::Section { heading, content } => {
                assert!(heading.is_empty());
                assert_eq!(content[0], ContentNode::paragraph("Preamble."));
            }
            _ => panic!("expected synthetic section"),
        }
    }

    #[test]
    fn test_from_json_promotes_root_subsection() {
        let json = r#"{
            "title": "T",
            "content": [{"type": "subsection", "heading": "Stray", "content": []}]
        }"#;
        let doc = Document::from_json(json).unwrap();
        match &doc.content[0] {
            ContentNode::Section { heading, .. } => assert_eq!(heading, "Stray"),
            _ => panic!("expected promoted section"),
        }
    }

    #[test]
    fn test_from_json_missing_title() {
        let doc = Document::from_json(r#"{"content": []}"#).unwrap();
        assert_eq!(doc.title, "Untitled Document");
    }

    #[test]
    fn test_figure_count() {
        let mut doc = Document::new("T");
        doc.add_section(
            "S",
            vec![
                ContentNode::figure("Figure 1"),
                ContentNode::subsection("Sub", vec![ContentNode::figure("Figure 2")]),
            ],
        );
        assert_eq!(doc.figure_count(), 2);
        assert_eq!(doc.node_count(), 4);
    }
}
