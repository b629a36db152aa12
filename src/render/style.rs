//! Visual weight classes and the constant style table.

use serde::{Deserialize, Serialize};

/// Text alignment within a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Justified alignment
    Justify,
}

/// Visual weight class of a rendered block.
///
/// Each class maps to one fixed entry in the style table; the ordering of
/// visual weight is section heading > subsection heading > chapter title
/// accent > term name > body text > figure caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockClass {
    /// Document title on the cover
    CoverTitle,
    /// Subtitle on the cover
    CoverSubtitle,
    /// Author line on the cover
    CoverAuthor,
    /// Generation date line on the cover
    CoverDate,
    /// Top-level section heading
    SectionHeading,
    /// Nested section heading
    SubsectionHeading,
    /// Chapter title, centered and page-breaking
    ChapterTitle,
    /// Term name in a definition pair
    TermName,
    /// Definition text under a term name
    TermDefinition,
    /// Body paragraph text
    Body,
    /// Figure caption
    FigureCaption,
    /// Reserved box for a bound figure image
    FigureImage,
    /// One list item
    ListItem,
}

/// Fixed visual style of one block class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStyle {
    /// Font size in points
    pub font_size: f32,
    /// Line height multiplier
    pub leading: f32,
    /// Bold face
    pub bold: bool,
    /// Italic face
    pub italic: bool,
    /// Alignment
    pub align: Alignment,
    /// Vertical space before the block in points
    pub space_before: f32,
    /// Vertical space after the block in points
    pub space_after: f32,
    /// Left indent for every line, in points
    pub indent_left: f32,
    /// Additional indent for the first line, in points
    pub first_line_indent: f32,
    /// Whether the block forces a fresh page before itself
    pub page_break_before: bool,
}

impl BlockStyle {
    /// Height of one line in points.
    pub fn line_height(&self) -> f32 {
        self.font_size * self.leading
    }
}

const PLAIN: BlockStyle = BlockStyle {
    font_size: 12.0,
    leading: 1.5,
    bold: false,
    italic: false,
    align: Alignment::Left,
    space_before: 0.0,
    space_after: 0.0,
    indent_left: 0.0,
    first_line_indent: 0.0,
    page_break_before: false,
};

impl BlockClass {
    /// Look up the fixed style for this class.
    pub fn style(self) -> BlockStyle {
        match self {
            BlockClass::CoverTitle => BlockStyle {
                font_size: 24.0,
                leading: 1.3,
                bold: true,
                align: Alignment::Center,
                space_after: 16.0,
                ..PLAIN
            },
            BlockClass::CoverSubtitle => BlockStyle {
                font_size: 16.0,
                leading: 1.3,
                italic: true,
                align: Alignment::Center,
                space_after: 24.0,
                ..PLAIN
            },
            BlockClass::CoverAuthor => BlockStyle {
                font_size: 14.0,
                leading: 1.3,
                align: Alignment::Center,
                space_before: 24.0,
                ..PLAIN
            },
            BlockClass::CoverDate => BlockStyle {
                font_size: 10.0,
                leading: 1.3,
                italic: true,
                align: Alignment::Center,
                space_before: 12.0,
                ..PLAIN
            },
            BlockClass::SectionHeading => BlockStyle {
                font_size: 18.0,
                leading: 1.25,
                bold: true,
                space_before: 16.0,
                space_after: 10.0,
                ..PLAIN
            },
            BlockClass::SubsectionHeading => BlockStyle {
                font_size: 16.0,
                leading: 1.25,
                bold: true,
                space_before: 10.0,
                space_after: 8.0,
                ..PLAIN
            },
            BlockClass::ChapterTitle => BlockStyle {
                font_size: 24.0,
                leading: 1.3,
                bold: true,
                align: Alignment::Center,
                space_before: 60.0,
                space_after: 40.0,
                page_break_before: true,
                ..PLAIN
            },
            BlockClass::TermName => BlockStyle {
                font_size: 14.0,
                leading: 1.3,
                bold: true,
                space_before: 16.0,
                space_after: 5.0,
                ..PLAIN
            },
            BlockClass::TermDefinition => BlockStyle {
                indent_left: 20.0,
                space_after: 14.0,
                ..PLAIN
            },
            BlockClass::Body => BlockStyle {
                align: Alignment::Justify,
                first_line_indent: 24.0,
                space_after: 10.0,
                ..PLAIN
            },
            BlockClass::FigureCaption => BlockStyle {
                font_size: 10.0,
                leading: 1.4,
                italic: true,
                align: Alignment::Center,
                space_before: 5.0,
                space_after: 10.0,
                ..PLAIN
            },
            BlockClass::FigureImage => BlockStyle {
                align: Alignment::Center,
                space_before: 10.0,
                space_after: 8.0,
                ..PLAIN
            },
            BlockClass::ListItem => BlockStyle {
                indent_left: 15.0,
                space_after: 5.0,
                ..PLAIN
            },
        }
    }

    /// Whether blocks of this class may split across a page boundary.
    ///
    /// Only running text splits; headings, captions, and cover lines move
    /// to the next page whole.
    pub fn splittable(self) -> bool {
        matches!(self, BlockClass::Body | BlockClass::TermDefinition)
    }
}
