//! Error types for the retoc library.

use std::io;
use thiserror::Error;

/// Result type alias for retoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while obtaining fragments or producing output.
///
/// Heuristic inference itself never fails: degenerate input (no candidates,
/// no title) yields an empty outline or empty title string rather than an
/// error. These variants cover the boundaries around the pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading fragment dumps or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The fragment provider could not produce fragments for a document.
    #[error("Fragment extraction error: {0}")]
    Extraction(String),

    /// A fragment violated the input contract (empty text, zero page,
    /// non-positive font size).
    #[error("Invalid fragment: {0}")]
    InvalidFragment(String),

    /// Error serializing a document result.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
