//! Fragment-to-tree assembly for the heuristic path.

use crate::model::{ContentNode, Document};

use super::{FragmentKind, RawFragment};

/// Assemble classified fragments into a document tree.
///
/// Heading and chapter-title fragments open a new top-level section; a
/// term candidate consumes the immediately following paragraph fragment
/// as its definition. Content arriving before the first heading is
/// wrapped in a synthetic untitled section so the root holds only
/// sections.
pub fn document_from_fragments(
    title: impl Into<String>,
    fragments: Vec<RawFragment>,
) -> Document {
    let mut doc = Document::new(title);
    let mut heading: Option<String> = None;
    let mut body: Vec<ContentNode> = Vec::new();

    let mut iter = fragments.into_iter().peekable();
    while let Some(fragment) = iter.next() {
        match fragment.kind {
            FragmentKind::Heading | FragmentKind::ChapterTitle => {
                close_section(&mut doc, &mut heading, &mut body);
                heading = Some(fragment.text);
            }
            FragmentKind::FigureCaption => {
                body.push(ContentNode::figure(fragment.text));
            }
            FragmentKind::TermCandidate => {
                let definition = if iter.peek().map_or(false, RawFragment::is_paragraph) {
                    iter.next().map(|f| f.text).unwrap_or_default()
                } else {
                    String::new()
                };
                body.push(ContentNode::term(fragment.text, definition));
            }
            FragmentKind::Paragraph => {
                body.push(ContentNode::paragraph(fragment.text));
            }
        }
    }

    close_section(&mut doc, &mut heading, &mut body);
    log::debug!(
        "assembled document '{}' with {} sections",
        doc.title,
        doc.content.len()
    );
    doc
}

/// Push the open section, if it holds anything. A section with no heading
/// is the synthetic wrapper for pre-heading content.
fn close_section(doc: &mut Document, heading: &mut Option<String>, body: &mut Vec<ContentNode>) {
    let heading = heading.take();
    if heading.is_none() && body.is_empty() {
        return;
    }
    doc.add_section(heading.unwrap_or_default(), std::mem::take(body));
}
