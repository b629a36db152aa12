//! Error types for the repage library.

use thiserror::Error;

/// Result type alias for repage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while structuring or rendering a document.
///
/// Classification, figure binding, and pagination never fail: malformed or
/// ambiguous input degrades to a best-effort structural guess or a placeholder
/// label. Errors are produced only at the crate boundary (empty input, invalid
/// structure JSON) and at the final hand-off to an external page writer.
#[derive(Error, Debug)]
pub enum Error {
    /// The input text is empty or missing required content.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A structured-input node could not be resolved to any known kind.
    ///
    /// With the placeholder substitution policy this should not occur in
    /// practice; the variant is kept as a classification for logging.
    #[error("unresolvable structure: {0}")]
    UnresolvableStructure(String),

    /// The external page writer reported a failure.
    #[error("page writer error: {0}")]
    Writer(String),

    /// Structured input was not valid JSON for the content model.
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}
