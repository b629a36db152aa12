//! Rendered page types.

use serde::{Deserialize, Serialize};

use crate::inline::StyledRun;
use crate::model::FigureImage;

use super::BlockClass;

/// One laid-out line of styled runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledLine {
    /// Runs on this line, in order
    pub runs: Vec<StyledRun>,
}

impl StyledLine {
    /// Create a line from runs.
    pub fn new(runs: Vec<StyledRun>) -> Self {
        Self { runs }
    }

    /// Plain text of the line.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A measured block placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledBlock {
    /// Visual weight class
    pub class: BlockClass,

    /// Wrapped lines; empty for image boxes
    pub lines: Vec<StyledLine>,

    /// Whether the first line carries the class's first-line indent
    pub indent_first_line: bool,

    /// True on the trailing chunks of a block split across pages
    pub continued: bool,

    /// Image payload for figure image boxes
    pub image: Option<FigureImage>,
}

impl StyledBlock {
    /// Create a text block.
    pub fn new(class: BlockClass, lines: Vec<StyledLine>) -> Self {
        Self {
            class,
            lines,
            indent_first_line: false,
            continued: false,
            image: None,
        }
    }

    /// Create an image box block.
    pub fn image_box(image: FigureImage) -> Self {
        Self {
            class: BlockClass::FigureImage,
            lines: Vec::new(),
            indent_first_line: false,
            continued: false,
            image: Some(image),
        }
    }

    /// Plain text of the block.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of lines in the block.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// One fixed-size output page.
///
/// `number` is the 1-based physical position in the emitted sequence,
/// cover included. The visible footer counter covers content pages only:
/// the cover carries no footer, content page `i` of `N` carries
/// `"i / N"`. Pages are consumed immediately by the external writer and
/// not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Physical page number (1-based, cover included)
    pub number: u32,

    /// Blocks on the page, top to bottom
    pub blocks: Vec<StyledBlock>,

    /// Visible footer text, `None` on the cover
    pub footer: Option<String>,
}

impl Page {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            blocks: Vec::new(),
            footer: None,
        }
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: StyledBlock) {
        self.blocks.push(block);
    }

    /// Check if the page has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Plain text of every block on the page.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
