//! Classified fragment types.

use serde::{Deserialize, Serialize};

/// Structural kind assigned to a classified fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    /// A section heading
    Heading,
    /// A figure caption ("Figure 3", "Figure 2-1", "Figure 2.1")
    FigureCaption,
    /// A term name whose definition follows on the next line(s)
    TermCandidate,
    /// A chapter title ("Chapter 4 ..."), rendered larger, centered,
    /// and starting a fresh page
    ChapterTitle,
    /// Accumulated body text
    Paragraph,
}

/// One classified, not-yet-tree-shaped piece of the input.
///
/// Fragments are emitted in input order and that order is the only
/// ordering relation; it is preserved unchanged into the final page
/// sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFragment {
    /// Structural kind
    pub kind: FragmentKind,

    /// Fragment text, lines already joined for paragraphs
    pub text: String,
}

impl RawFragment {
    /// Create a new fragment.
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Check if this is a paragraph fragment.
    pub fn is_paragraph(&self) -> bool {
        self.kind == FragmentKind::Paragraph
    }
}
