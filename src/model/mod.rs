//! Document content model.
//!
//! This module defines the recursive, strongly-typed tree that bridges
//! document structuring and page rendering. Trees are produced either by an
//! external structuring collaborator (as JSON conforming to this model) or
//! synthesized locally by the heuristic line classifier, and are read-only
//! inputs to the renderer apart from the single mutation performed by the
//! figure-image binder.

mod document;
mod node;

pub use document::Document;
pub use node::{ContentNode, FigureImage};
