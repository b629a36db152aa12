//! Figure-image binding.
//!
//! Attaches externally extracted images to the figure nodes they depict,
//! matching by caption or id substring. Binding never fails: a figure
//! nobody matched simply keeps an empty image slot and renders as a
//! caption alone.

use serde::{Deserialize, Serialize};

use crate::model::{ContentNode, Document, FigureImage};

/// An externally supplied image with the caption (and optional id) it
/// was extracted under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureReference {
    /// Short identifier, e.g. "Figure 2"
    #[serde(default)]
    pub id: Option<String>,

    /// Caption text associated with the image at extraction time
    #[serde(default)]
    pub caption: String,

    /// The image payload
    pub image: FigureImage,
}

impl FigureReference {
    /// Create a reference without an id.
    pub fn new(caption: impl Into<String>, image: FigureImage) -> Self {
        Self {
            id: None,
            caption: caption.into(),
            image,
        }
    }

    /// Create a reference with an id.
    pub fn with_id(id: impl Into<String>, caption: impl Into<String>, image: FigureImage) -> Self {
        Self {
            id: Some(id.into()),
            caption: caption.into(),
            image,
        }
    }

    /// Check whether this reference matches a figure caption.
    ///
    /// A match is the reference caption appearing as a substring of the
    /// figure caption, or the reference id (when present) appearing as a
    /// substring.
    fn matches(&self, figure_caption: &str) -> bool {
        (!self.caption.is_empty() && figure_caption.contains(&self.caption))
            || self
                .id
                .as_deref()
                .is_some_and(|id| !id.is_empty() && figure_caption.contains(id))
    }
}

/// Attach reference images to matching figure nodes, depth-first and
/// left-to-right over the tree.
///
/// Per figure the first matching reference in list order wins; a
/// reference stays eligible for further figures, so one image may bind
/// many captions. When nothing matches and there is exactly one
/// reference and exactly one figure in the whole tree, the two are
/// paired regardless of caption text. Returns the number of figures
/// that received an image.
pub fn bind_figures(document: &mut Document, references: &[FigureReference]) -> usize {
    if references.is_empty() {
        return 0;
    }

    let sole_pair = references.len() == 1 && document.figure_count() == 1;
    let mut bound = 0;

    fn visit(
        nodes: &mut [ContentNode],
        references: &[FigureReference],
        sole_pair: bool,
        bound: &mut usize,
    ) {
        for node in nodes {
            match node {
                ContentNode::Figure { caption, image } => {
                    let matched = references.iter().find(|r| r.matches(caption));
                    let chosen = match matched {
                        Some(reference) => Some(reference),
                        None if sole_pair => references.first(),
                        None => None,
                    };
                    if let Some(reference) = chosen {
                        log::debug!(
                            "binding image ({} bytes) to figure '{}'",
                            reference.image.size(),
                            caption
                        );
                        *image = Some(reference.image.clone());
                        *bound += 1;
                    } else {
                        log::debug!("no reference matched figure '{}'", caption);
                    }
                }
                ContentNode::Section { content, .. } | ContentNode::Subsection { content, .. } => {
                    visit(content, references, sole_pair, bound);
                }
                _ => {}
            }
        }
    }

    visit(&mut document.content, references, sole_pair, &mut bound);
    bound
}
