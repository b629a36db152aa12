//! Paginating renderer.
//!
//! Walks a document tree (or a flat fragment sequence) depth-first and
//! emits fixed-size pages of measured, styled blocks with running page
//! numbers. Rendering is a pure function of content plus page geometry;
//! the only fallible step is the final hand-off to an external writer.

mod options;
mod page;
mod paginate;
mod style;
mod typography;
mod writer;

pub use options::{PageGeometry, RenderOptions};
pub use page::{Page, StyledBlock, StyledLine};
pub use paginate::{paginate, paginate_fragments, paginate_fragments_with, paginate_with};
pub use style::{Alignment, BlockClass, BlockStyle};
pub use typography::{HeuristicTypography, Typography};
pub use writer::{render_to_writer, render_to_writer_with, CollectingWriter, PageWriter};
