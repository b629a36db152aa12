//! Content node types.

use serde::{Deserialize, Serialize};

/// One typed element of the document tree.
///
/// The `type` tag matches the JSON emitted by the external structuring
/// collaborator (`{"type": "section", "heading": ..., "content": [...]}`).
/// String fields default to empty and child vectors to empty lists so that
/// structurally valid but incomplete input still deserializes; the renderer
/// substitutes placeholder labels for the missing pieces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentNode {
    /// A top-level section with a heading and nested content.
    Section {
        /// Section heading text
        #[serde(default)]
        heading: String,
        /// Child nodes in reading order
        #[serde(default)]
        content: Vec<ContentNode>,
    },

    /// A nested section. Same shape as `Section`, distinguished only by
    /// nesting role and visual weight; never a direct child of the
    /// document root.
    Subsection {
        /// Subsection heading text
        #[serde(default)]
        heading: String,
        /// Child nodes in reading order
        #[serde(default)]
        content: Vec<ContentNode>,
    },

    /// A paragraph of body text. May contain inline emphasis markers
    /// (`**bold**`, `*italic*`, `__underline__`) recovered by the tokenizer
    /// at render time.
    Paragraph {
        /// Paragraph text
        #[serde(default)]
        text: String,
    },

    /// A figure caption, optionally carrying the image it describes.
    Figure {
        /// Caption text (e.g. "Figure 2-1 Example topology.")
        #[serde(default)]
        caption: String,
        /// Image payload, attached by the figure-image binder
        #[serde(default)]
        image: Option<FigureImage>,
    },

    /// A term and its definition.
    Term {
        /// Term name
        #[serde(default)]
        term: String,
        /// Definition text
        #[serde(default)]
        definition: String,
    },

    /// An ordered or unordered list.
    List {
        /// List item texts in order
        #[serde(default)]
        items: Vec<String>,
        /// Whether items are numbered
        #[serde(default)]
        ordered: bool,
    },
}

impl ContentNode {
    /// Create a section node.
    pub fn section(heading: impl Into<String>, content: Vec<ContentNode>) -> Self {
        ContentNode::Section {
            heading: heading.into(),
            content,
        }
    }

    /// Create a subsection node.
    pub fn subsection(heading: impl Into<String>, content: Vec<ContentNode>) -> Self {
        ContentNode::Subsection {
            heading: heading.into(),
            content,
        }
    }

    /// Create a paragraph node.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentNode::Paragraph { text: text.into() }
    }

    /// Create a figure node with no image attached.
    pub fn figure(caption: impl Into<String>) -> Self {
        ContentNode::Figure {
            caption: caption.into(),
            image: None,
        }
    }

    /// Create a term node.
    pub fn term(term: impl Into<String>, definition: impl Into<String>) -> Self {
        ContentNode::Term {
            term: term.into(),
            definition: definition.into(),
        }
    }

    /// Check if this node is a section.
    pub fn is_section(&self) -> bool {
        matches!(self, ContentNode::Section { .. })
    }

    /// Check if this node is a figure.
    pub fn is_figure(&self) -> bool {
        matches!(self, ContentNode::Figure { .. })
    }

    /// Short name of the node kind, for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ContentNode::Section { .. } => "section",
            ContentNode::Subsection { .. } => "subsection",
            ContentNode::Paragraph { .. } => "paragraph",
            ContentNode::Figure { .. } => "figure",
            ContentNode::Term { .. } => "term",
            ContentNode::List { .. } => "list",
        }
    }

    /// Plain text content of this node and its children.
    pub fn plain_text(&self) -> String {
        match self {
            ContentNode::Section { heading, content }
            | ContentNode::Subsection { heading, content } => {
                let mut parts = vec![heading.clone()];
                parts.extend(content.iter().map(|n| n.plain_text()));
                parts.retain(|p| !p.is_empty());
                parts.join("\n\n")
            }
            ContentNode::Paragraph { text } => text.clone(),
            ContentNode::Figure { caption, .. } => caption.clone(),
            ContentNode::Term { term, definition } => format!("{}: {}", term, definition),
            ContentNode::List { items, .. } => items.join("\n"),
        }
    }
}

/// Binary image payload for a figure.
///
/// The data is raw bytes as supplied by the extraction collaborator; the
/// MIME type tells the page writer how to decode it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureImage {
    /// Raw image bytes
    #[serde(default)]
    pub data: Vec<u8>,

    /// MIME type (e.g. "image/png")
    #[serde(default)]
    pub mime_type: String,
}

impl FigureImage {
    /// Create a new image payload.
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Create a PNG image payload.
    pub fn png(data: Vec<u8>) -> Self {
        Self::new(data, "image/png")
    }

    /// Create a JPEG image payload.
    pub fn jpeg(data: Vec<u8>) -> Self {
        Self::new(data, "image/jpeg")
    }

    /// Size of the image data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_constructors() {
        let node = ContentNode::section("Intro", vec![ContentNode::paragraph("Hello.")]);
        assert!(node.is_section());
        assert_eq!(node.kind_name(), "section");

        let fig = ContentNode::figure("Figure 1 Topology.");
        assert!(fig.is_figure());
    }

    #[test]
    fn test_serde_tagged_roundtrip() {
        let json = r#"{"type":"term","term":"Node","definition":"A connected device."}"#;
        let node: ContentNode = serde_json::from_str(json).unwrap();
        assert_eq!(node, ContentNode::term("Node", "A connected device."));

        let back = serde_json::to_string(&node).unwrap();
        let again: ContentNode = serde_json::from_str(&back).unwrap();
        assert_eq!(node, again);
    }

    #[test]
    fn test_missing_fields_default() {
        // A section without a heading still deserializes; the renderer
        // supplies the placeholder label later.
        let json = r#"{"type":"section","content":[{"type":"paragraph","text":"Body."}]}"#;
        let node: ContentNode = serde_json::from_str(json).unwrap();
        match node {
            ContentNode::Section { heading, content } => {
                assert!(heading.is_empty());
                assert_eq!(content.len(), 1);
            }
            _ => panic!("expected section"),
        }
    }

    #[test]
    fn test_list_ordered_default() {
        let json = r#"{"type":"list","items":["a","b"]}"#;
        let node: ContentNode = serde_json::from_str(json).unwrap();
        match node {
            ContentNode::List { items, ordered } => {
                assert_eq!(items, vec!["a", "b"]);
                assert!(!ordered);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_plain_text() {
        let node = ContentNode::section(
            "Basics",
            vec![
                ContentNode::paragraph("First."),
                ContentNode::term("Host", "An end device."),
            ],
        );
        let text = node.plain_text();
        assert!(text.contains("Basics"));
        assert!(text.contains("Host: An end device."));
    }
}
