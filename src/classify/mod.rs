//! Heuristic line classification.
//!
//! Splits a flat block of raw extracted text (OCR output, parsed PDF text)
//! into an ordered sequence of typed fragments, and optionally assembles
//! those fragments into a [`Document`](crate::model::Document) tree.
//!
//! Classification is line-local and never backtracks: a short capitalized
//! sentence misread as a heading stays a heading. That imprecision is
//! inherited from the heuristics themselves and is accepted rather than
//! patched over with lookbehind.

mod assemble;
mod classifier;
mod fragment;

pub use assemble::document_from_fragments;
pub use classifier::LineClassifier;
pub use fragment::{FragmentKind, RawFragment};
