//! Pagination: depth-first content traversal and page filling.
//!
//! The walk maps every content node to one or more styled blocks, wraps
//! their text into measured lines, and fills fixed-size pages top to
//! bottom. Rendering never fails: malformed nodes degrade to placeholder
//! labels and the walk continues.

use crate::classify::{FragmentKind, RawFragment};
use crate::inline::{tokenize, StyledRun};
use crate::model::{ContentNode, Document, FigureImage};

use super::page::{Page, StyledBlock, StyledLine};
use super::style::BlockClass;
use super::typography::{break_lines, HeuristicTypography, Typography};
use super::RenderOptions;

/// A block before measurement: class, inline runs, optional image.
struct LogicalBlock {
    class: BlockClass,
    runs: Vec<StyledRun>,
    image: Option<FigureImage>,
    indent_first_line: bool,
}

impl LogicalBlock {
    fn text(class: BlockClass, text: impl Into<String>) -> Self {
        Self {
            class,
            runs: vec![StyledRun::plain(text)],
            image: None,
            indent_first_line: false,
        }
    }

    fn runs(class: BlockClass, runs: Vec<StyledRun>) -> Self {
        Self {
            class,
            runs,
            image: None,
            indent_first_line: false,
        }
    }
}

/// Paginate a document with the built-in width estimate.
pub fn paginate(document: &Document, options: &RenderOptions) -> Vec<Page> {
    paginate_with(document, options, &HeuristicTypography)
}

/// Paginate a document with caller-supplied text metrics.
pub fn paginate_with(
    document: &Document,
    options: &RenderOptions,
    typography: &dyn Typography,
) -> Vec<Page> {
    let cover = cover_blocks(&document.title, document.subtitle.as_deref(), options);
    let content = blocks_from_document(document);
    assemble(cover, content, options, typography)
}

/// Paginate a flat fragment sequence (the heuristic-only pipeline).
///
/// The fragment list is treated as a single implicit section; the same
/// footer convention applies as for the tree pipeline.
pub fn paginate_fragments(
    fragments: &[RawFragment],
    title: &str,
    options: &RenderOptions,
) -> Vec<Page> {
    paginate_fragments_with(fragments, title, options, &HeuristicTypography)
}

/// Paginate fragments with caller-supplied text metrics.
pub fn paginate_fragments_with(
    fragments: &[RawFragment],
    title: &str,
    options: &RenderOptions,
    typography: &dyn Typography,
) -> Vec<Page> {
    let cover = cover_blocks(title, None, options);
    let content = blocks_from_fragments(fragments);
    assemble(cover, content, options, typography)
}

/// Substitute a placeholder for empty or whitespace text.
fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.trim().is_empty() {
        placeholder
    } else {
        text
    }
}

/// Cover blocks: title, subtitle, author, generation date.
fn cover_blocks(title: &str, subtitle: Option<&str>, options: &RenderOptions) -> Vec<LogicalBlock> {
    let mut blocks = vec![LogicalBlock::text(
        BlockClass::CoverTitle,
        or_placeholder(title, "Untitled Document"),
    )];

    if let Some(subtitle) = subtitle {
        if !subtitle.trim().is_empty() {
            blocks.push(LogicalBlock::text(BlockClass::CoverSubtitle, subtitle));
        }
    }
    if let Some(ref author) = options.author {
        blocks.push(LogicalBlock::text(
            BlockClass::CoverAuthor,
            format!("By {}", author),
        ));
    }
    if let Some(at) = options.generated_at {
        blocks.push(LogicalBlock::text(
            BlockClass::CoverDate,
            format!("Generated on {}", at.format("%Y-%m-%d")),
        ));
    }

    blocks
}

/// Whether a body paragraph directly after `class` suppresses its
/// first-line indent.
fn suppresses_indent(class: BlockClass) -> bool {
    matches!(
        class,
        BlockClass::SectionHeading
            | BlockClass::SubsectionHeading
            | BlockClass::ChapterTitle
            | BlockClass::TermName
    )
}

/// Append a body paragraph, applying the indent continuity rule.
fn push_body(blocks: &mut Vec<LogicalBlock>, text: &str) {
    let follows_heading = blocks.last().map(|b| b.class).is_some_and(suppresses_indent);
    let mut block = LogicalBlock::runs(
        BlockClass::Body,
        tokenize(or_placeholder(text, "No text content")),
    );
    block.indent_first_line = !follows_heading;
    blocks.push(block);
}

fn blocks_from_document(document: &Document) -> Vec<LogicalBlock> {
    let mut blocks = Vec::new();
    if document.content.is_empty() {
        push_body(&mut blocks, "No content available");
        return blocks;
    }
    for node in &document.content {
        push_node(node, &mut blocks);
    }
    blocks
}

fn push_node(node: &ContentNode, blocks: &mut Vec<LogicalBlock>) {
    match node {
        ContentNode::Section { heading, content } => {
            blocks.push(LogicalBlock::text(
                BlockClass::SectionHeading,
                or_placeholder(heading, "Untitled Section"),
            ));
            push_children(content, blocks);
        }
        ContentNode::Subsection { heading, content } => {
            blocks.push(LogicalBlock::text(
                BlockClass::SubsectionHeading,
                or_placeholder(heading, "Untitled Subsection"),
            ));
            push_children(content, blocks);
        }
        ContentNode::Paragraph { text } => push_body(blocks, text),
        ContentNode::Figure { caption, image } => {
            if let Some(image) = image {
                let mut block = LogicalBlock::runs(BlockClass::FigureImage, Vec::new());
                block.image = Some(image.clone());
                blocks.push(block);
            }
            blocks.push(LogicalBlock::text(
                BlockClass::FigureCaption,
                or_placeholder(caption, "Figure"),
            ));
        }
        ContentNode::Term { term, definition } => {
            blocks.push(LogicalBlock::text(
                BlockClass::TermName,
                or_placeholder(term, "Term"),
            ));
            blocks.push(LogicalBlock::runs(
                BlockClass::TermDefinition,
                tokenize(or_placeholder(definition, "No definition")),
            ));
        }
        ContentNode::List { items, ordered } => {
            if items.is_empty() {
                push_body(blocks, "No list items");
                return;
            }
            for (i, item) in items.iter().enumerate() {
                let prefix = if *ordered {
                    format!("{}. ", i + 1)
                } else {
                    "\u{2022} ".to_string()
                };
                let mut runs = vec![StyledRun::plain(prefix)];
                runs.extend(tokenize(item));
                blocks.push(LogicalBlock::runs(BlockClass::ListItem, runs));
            }
        }
    }
}

fn push_children(content: &[ContentNode], blocks: &mut Vec<LogicalBlock>) {
    if content.is_empty() {
        push_body(blocks, "No content available");
        return;
    }
    for child in content {
        push_node(child, blocks);
    }
}

fn blocks_from_fragments(fragments: &[RawFragment]) -> Vec<LogicalBlock> {
    let mut blocks = Vec::new();
    for fragment in fragments {
        match fragment.kind {
            FragmentKind::Heading => {
                blocks.push(LogicalBlock::text(BlockClass::SectionHeading, &fragment.text));
            }
            FragmentKind::FigureCaption => {
                blocks.push(LogicalBlock::text(BlockClass::FigureCaption, &fragment.text));
            }
            FragmentKind::ChapterTitle => {
                blocks.push(LogicalBlock::text(BlockClass::ChapterTitle, &fragment.text));
            }
            FragmentKind::TermCandidate => {
                blocks.push(LogicalBlock::text(BlockClass::TermName, &fragment.text));
            }
            FragmentKind::Paragraph => push_body(&mut blocks, &fragment.text),
        }
    }
    if blocks.is_empty() {
        push_body(&mut blocks, "No content available");
    }
    blocks
}

/// Lay out the cover and fill content pages, then number pages and
/// write footers. The footer counter covers content pages only.
fn assemble(
    cover: Vec<LogicalBlock>,
    content: Vec<LogicalBlock>,
    options: &RenderOptions,
    typography: &dyn Typography,
) -> Vec<Page> {
    let geometry = options.geometry;
    let mut pages = Vec::new();

    let mut cover_page = Page::new(1);
    for block in cover {
        let style = block.class.style();
        let lines = break_lines(
            &block.runs,
            &style,
            geometry.content_width(),
            false,
            typography,
        );
        cover_page.add_block(StyledBlock::new(block.class, lines));
    }
    pages.push(cover_page);

    let mut filler = PageFiller {
        options,
        typography,
        pages: Vec::new(),
        current: Page::new(0),
        used: 0.0,
    };
    for block in content {
        filler.place(block);
    }
    filler.finish();
    pages.extend(filler.pages);

    let content_total = pages.len() - 1;
    for (index, page) in pages.iter_mut().enumerate() {
        page.number = index as u32 + 1;
        if index > 0 {
            page.footer = Some(format!("{} / {}", index, content_total));
        }
    }

    log::debug!("paginated into 1 cover + {} content pages", content_total);
    pages
}

/// Sequential page filler for content blocks.
struct PageFiller<'a> {
    options: &'a RenderOptions,
    typography: &'a dyn Typography,
    pages: Vec<Page>,
    current: Page,
    used: f32,
}

impl PageFiller<'_> {
    fn capacity(&self) -> f32 {
        self.options.geometry.content_height()
    }

    fn remaining(&self) -> f32 {
        self.capacity() - self.used
    }

    fn flush(&mut self) {
        let page = std::mem::replace(&mut self.current, Page::new(0));
        self.pages.push(page);
        self.used = 0.0;
    }

    fn flush_nonempty(&mut self) {
        if !self.current.is_empty() {
            self.flush();
        }
    }

    fn finish(&mut self) {
        if !self.current.is_empty() {
            self.flush();
        }
    }

    fn place(&mut self, block: LogicalBlock) {
        let style = block.class.style();
        if style.page_break_before {
            self.flush_nonempty();
        }

        if block.class == BlockClass::FigureImage {
            self.place_image(block);
            return;
        }

        let lines = break_lines(
            &block.runs,
            &style,
            self.options.geometry.content_width(),
            block.indent_first_line,
            self.typography,
        );
        if lines.is_empty() {
            return;
        }

        let line_height = style.line_height();
        let total = style.space_before + lines.len() as f32 * line_height + style.space_after;

        if total <= self.remaining() {
            self.push_chunk(&block, lines, false);
            self.used += total;
            return;
        }

        // Headings, captions, and list items move whole to a fresh page;
        // only a block taller than a full page falls through to splitting.
        if !block.class.splittable() && total <= self.capacity() {
            self.flush_nonempty();
            self.push_chunk(&block, lines, false);
            self.used += total;
            return;
        }

        self.split_across_pages(block, lines, &style);
    }

    /// Place a block line by line, continuing onto fresh pages until done.
    fn split_across_pages(&mut self, block: LogicalBlock, lines: Vec<StyledLine>, style: &super::style::BlockStyle) {
        let line_height = style.line_height();
        let mut index = 0;
        let mut first = true;

        while index < lines.len() {
            let space_before = if first { style.space_before } else { 0.0 };
            let available = self.remaining() - space_before;
            let mut count = (available / line_height).floor() as usize;

            if count == 0 {
                if self.current.is_empty() {
                    // Even an empty page holds at least one line.
                    count = 1;
                } else {
                    self.flush();
                    continue;
                }
            }
            count = count.min(lines.len() - index);

            let chunk = lines[index..index + count].to_vec();
            let continued = !first;
            let styled = StyledBlock {
                class: block.class,
                lines: chunk,
                indent_first_line: block.indent_first_line && first,
                continued,
                image: None,
            };
            self.current.add_block(styled);
            self.used += space_before + count as f32 * line_height;

            index += count;
            if index < lines.len() {
                self.flush();
            } else {
                self.used += style.space_after;
            }
            first = false;
        }
    }

    fn push_chunk(&mut self, block: &LogicalBlock, lines: Vec<StyledLine>, continued: bool) {
        self.current.add_block(StyledBlock {
            class: block.class,
            lines,
            indent_first_line: block.indent_first_line,
            continued,
            image: None,
        });
    }

    fn place_image(&mut self, block: LogicalBlock) {
        let style = block.class.style();
        let height = style.space_before + self.options.image_box_height + style.space_after;
        if height > self.remaining() {
            self.flush_nonempty();
        }
        self.current.add_block(StyledBlock {
            class: BlockClass::FigureImage,
            lines: Vec::new(),
            indent_first_line: false,
            continued: false,
            image: block.image,
        });
        self.used += height;
    }
}
