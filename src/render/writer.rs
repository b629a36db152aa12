//! Hand-off to the external low-level page writer.
//!
//! The writer owns glyph layout and byte-stream encoding; this crate only
//! feeds it finished pages. A writer failure is the one error the
//! rendering pipeline can surface, and it is propagated unchanged: no
//! retry, and no partial output reported as complete.

use crate::error::Result;
use crate::model::Document;

use super::page::Page;
use super::paginate::paginate_with;
use super::typography::{HeuristicTypography, Typography};
use super::RenderOptions;

/// Capability interface of the external page writer.
pub trait PageWriter {
    /// Emit one finished page.
    fn write_page(&mut self, page: &Page) -> Result<()>;

    /// Finalize the output after the last page.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Paginate a document and hand every page to the writer.
///
/// The first writer error aborts the hand-off and is returned as-is.
pub fn render_to_writer<W: PageWriter + ?Sized>(
    document: &Document,
    options: &RenderOptions,
    writer: &mut W,
) -> Result<()> {
    render_to_writer_with(document, options, &HeuristicTypography, writer)
}

/// Paginate with caller-supplied metrics and hand pages to the writer.
pub fn render_to_writer_with<W: PageWriter + ?Sized>(
    document: &Document,
    options: &RenderOptions,
    typography: &dyn Typography,
    writer: &mut W,
) -> Result<()> {
    let pages = paginate_with(document, options, typography);
    for page in &pages {
        writer.write_page(page)?;
    }
    writer.finish()
}

/// Writer that collects pages in memory.
///
/// Useful in tests and for callers that consume the page sequence
/// directly instead of driving a byte-stream writer.
#[derive(Debug, Default)]
pub struct CollectingWriter {
    /// Pages received so far
    pub pages: Vec<Page>,
}

impl CollectingWriter {
    /// Create an empty collecting writer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageWriter for CollectingWriter {
    fn write_page(&mut self, page: &Page) -> Result<()> {
        self.pages.push(page.clone());
        Ok(())
    }
}
