//! # repage
//!
//! Rebuild structured, paginated e-books from raw extracted document text.
//!
//! Noisy OCR or PDF-extracted text goes in; a typed document tree and a
//! sequence of fixed-size, numbered pages come out. The pipeline:
//!
//! 1. **Classify** raw lines into typed fragments (headings, figure
//!    captions, term candidates, chapter titles, paragraphs).
//! 2. **Assemble** fragments into a document tree, or accept a tree
//!    produced by an external structuring collaborator as JSON.
//! 3. **Bind** externally extracted images to their figure nodes.
//! 4. **Paginate** the tree into styled, measured pages and hand them to
//!    a low-level page writer.
//!
//! ## Quick Start
//!
//! ```
//! use repage::{structure_text, paginate, RenderOptions};
//!
//! fn main() -> repage::Result<()> {
//!     let raw = "Network Basics\n\nA network is a group of connected devices.";
//!     let doc = structure_text(raw, "Networking Primer")?;
//!
//!     let pages = paginate(&doc, &RenderOptions::new());
//!     assert!(pages.len() >= 2); // cover + content
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heuristic structuring**: line-local classification with no
//!   backtracking, degrading gracefully on ambiguous input
//! - **Closed content model**: sections, subsections, paragraphs,
//!   figures, terms, lists, exhaustively matched, no runtime tag checks
//! - **Defensive rendering**: malformed nodes become placeholder labels,
//!   never errors
//! - **Pluggable metrics**: page breaking against caller-supplied text
//!   measurements, with a built-in estimate

pub mod bind;
pub mod classify;
pub mod error;
pub mod inline;
pub mod model;
pub mod normalize;
pub mod render;

// Re-export commonly used types
pub use bind::{bind_figures, FigureReference};
pub use classify::{document_from_fragments, FragmentKind, LineClassifier, RawFragment};
pub use error::{Error, Result};
pub use inline::{tokenize, RunStyle, StyledRun};
pub use model::{ContentNode, Document, FigureImage};
pub use normalize::{normalize, Normalizer};
pub use render::{
    paginate, paginate_fragments, paginate_fragments_with, paginate_with, render_to_writer,
    render_to_writer_with, Alignment, BlockClass, CollectingWriter, HeuristicTypography, Page,
    PageGeometry, PageWriter, RenderOptions, StyledBlock, StyledLine, Typography,
};

use rayon::prelude::*;

/// Classify raw text into ordered fragments.
///
/// # Example
///
/// ```
/// let fragments = repage::classify_text("Protocols\nA protocol is an agreed set of rules.");
/// assert_eq!(fragments[0].kind, repage::FragmentKind::Heading);
/// ```
pub fn classify_text(text: &str) -> Vec<RawFragment> {
    LineClassifier::new().classify(text)
}

/// Structure raw extracted text into a document tree (heuristic path).
///
/// The input is expected to be normalized already (NFC, straight quotes,
/// at most one consecutive blank line); see [`normalize`] when it is not.
/// Fails only on empty input; every later stage degrades instead of
/// erroring.
///
/// # Example
///
/// ```
/// let doc = repage::structure_text("Basics\n\nSome body text.", "Primer").unwrap();
/// assert_eq!(doc.title, "Primer");
/// assert!(!doc.is_empty());
/// ```
pub fn structure_text(text: &str, title: &str) -> Result<Document> {
    if text.trim().is_empty() {
        return Err(Error::MalformedInput("no text provided".to_string()));
    }
    let fragments = classify_text(text);
    Ok(document_from_fragments(title, fragments))
}

/// Structure many independent documents in parallel.
///
/// Each `(text, title)` pair is processed on its own worker; documents
/// share nothing, so results arrive in input order with no cross-document
/// coordination.
pub fn structure_all(inputs: &[(String, String)]) -> Vec<Result<Document>> {
    inputs
        .par_iter()
        .map(|(text, title)| structure_text(text, title))
        .collect()
}

/// Builder for the full structuring and rendering pipeline.
///
/// # Example
///
/// ```
/// use repage::Repage;
///
/// let pages = Repage::new()
///     .with_author("Ada Lovelace")
///     .normalized(true)
///     .structure("Basics\n\nBody text here.", "Primer")?
///     .paginate();
/// assert!(pages.len() >= 2);
/// # Ok::<(), repage::Error>(())
/// ```
pub struct Repage {
    render_options: RenderOptions,
    normalize_input: bool,
}

impl Repage {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
            normalize_input: false,
        }
    }

    /// Set the cover author line.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_author(author);
        self
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.render_options = self.render_options.with_geometry(geometry);
        self
    }

    /// Set the cover generation timestamp.
    pub fn with_generated_at(mut self, at: chrono::DateTime<chrono::Utc>) -> Self {
        self.render_options = self.render_options.with_generated_at(at);
        self
    }

    /// Run input normalization before classification.
    pub fn normalized(mut self, normalize: bool) -> Self {
        self.normalize_input = normalize;
        self
    }

    /// Structure raw text via the heuristic path.
    pub fn structure(self, text: &str, title: &str) -> Result<RepageResult> {
        let normalized;
        let text = if self.normalize_input {
            normalized = normalize(text);
            normalized.as_str()
        } else {
            text
        };
        let document = structure_text(text, title)?;
        Ok(RepageResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Accept structured JSON from an external collaborator (boundary B).
    pub fn from_json(self, json: &str) -> Result<RepageResult> {
        let document = Document::from_json(json)?;
        Ok(RepageResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Wrap an already-built document.
    pub fn from_document(self, document: Document) -> RepageResult {
        RepageResult {
            document,
            render_options: self.render_options,
        }
    }
}

impl Default for Repage {
    fn default() -> Self {
        Self::new()
    }
}

/// A structured document paired with its render options.
pub struct RepageResult {
    /// The structured document
    pub document: Document,
    render_options: RenderOptions,
}

impl RepageResult {
    /// Bind extracted images to figure nodes. Returns the number bound.
    pub fn bind(&mut self, references: &[FigureReference]) -> usize {
        bind_figures(&mut self.document, references)
    }

    /// Paginate with the built-in text metrics.
    pub fn paginate(&self) -> Vec<Page> {
        paginate(&self.document, &self.render_options)
    }

    /// Paginate with caller-supplied text metrics.
    pub fn paginate_with(&self, typography: &dyn Typography) -> Vec<Page> {
        paginate_with(&self.document, &self.render_options, typography)
    }

    /// Paginate and hand every page to the writer.
    pub fn render_to<W: PageWriter + ?Sized>(&self, writer: &mut W) -> Result<()> {
        render_to_writer(&self.document, &self.render_options, writer)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_text_empty_input() {
        let result = structure_text("   \n\n  ", "T");
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_structure_text_root_invariant() {
        let doc = structure_text(
            "leading paragraph before any heading.\n\nBasics\n\nbody text.",
            "T",
        )
        .unwrap();
        assert!(doc.content.iter().all(ContentNode::is_section));
    }

    #[test]
    fn test_structure_all_preserves_order() {
        let inputs = vec![
            ("First body text.".to_string(), "One".to_string()),
            (String::new(), "Two".to_string()),
            ("Third body text.".to_string(), "Three".to_string()),
        ];

        let results = structure_all(&inputs);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().title, "One");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().title, "Three");
    }

    #[test]
    fn test_builder_pipeline() {
        let mut result = Repage::new()
            .with_author("Ada")
            .structure("Basics\n\nFigure 1 Example topology.", "Primer")
            .unwrap();

        let bound = result.bind(&[FigureReference::new(
            "Figure 1",
            FigureImage::png(vec![0]),
        )]);
        assert_eq!(bound, 1);

        let pages = result.paginate();
        assert!(pages.len() >= 2);
        assert_eq!(pages[0].blocks[0].text(), "Primer");
    }

    #[test]
    fn test_builder_normalized_input() {
        let result = Repage::new()
            .normalized(true)
            .structure("Basics\n\n\n\n\u{201C}quoted\u{201D} body text.", "T")
            .unwrap();

        let text = result.document().plain_text();
        assert!(text.contains("\"quoted\" body text."));
    }

    #[test]
    fn test_builder_from_json() {
        let json = r#"{
            "title": "Networking",
            "content": [
                {"type": "section", "heading": "Basics", "content": [
                    {"type": "paragraph", "text": "A network connects devices."}
                ]}
            ]
        }"#;

        let result = Repage::new().from_json(json).unwrap();
        assert_eq!(result.document().title, "Networking");

        let pages = result.paginate();
        assert!(pages.len() >= 2);
    }

    #[test]
    fn test_builder_from_json_invalid() {
        let result = Repage::new().from_json("{not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
