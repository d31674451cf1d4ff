//! Error types for the transformation engine
//!
//! Nothing here is fatal: document-scope operations abort cleanly when the
//! structural snapshot is missing, and per-line delegate failures are
//! absorbed inside the reformatting pass. Worst case, output equals input.

use thiserror::Error;

/// Errors surfaced to the caller by document-scope operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The structural classification snapshot is not ready yet.
    /// The operation was aborted before touching the document.
    #[error("document structure is not available yet, try again shortly")]
    StructureUnavailable,
}

/// Failure reported by the per-line formatting delegate.
///
/// Caught per line inside [`crate::format::reformat_range`]: the failing
/// line keeps its original text and the pass continues. Never propagates
/// out of a whole-document operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line formatter failed: {message}")]
pub struct LineFormatError {
    message: String,
}

impl LineFormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
