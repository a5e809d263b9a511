//! Error types for urdu-verse.
//!
//! The extractor reports only [`ExtractError`], and only as a diagnostic.
//! Fetch and speech failures have their own types in their modules;
//! [`Error`] gathers them for callers that drive the whole pipeline.

use crate::fetch::FetchError;
use crate::speech::SpeechError;

/// Message shown to users when no block passes the length and script filters.
pub const NO_SCRIPT_TEXT: &str = "no script-matching text found";

/// Reasons the extractor produced no text.
///
/// Both variants are recoverable and render the same user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// No block met the length/script filters.
    #[error("no script-matching text found")]
    NoCandidates,

    /// The document yielded no text blocks at all.
    #[error("no script-matching text found")]
    EmptyDocument,
}

/// Error type for the fetch -> extract -> speak pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Page retrieval or decoding failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Nothing usable was found on the page.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Speech synthesis failed.
    #[error(transparent)]
    Speech(#[from] SpeechError),

    /// Writing output files failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
