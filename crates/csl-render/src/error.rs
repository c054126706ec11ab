//! Error types for rendering.

use thiserror::Error;

/// Result type alias for csl-render operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up a render.
///
/// Rendering a well-formed buffer, evaluating a condition and parsing a
/// number never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Error from the style model.
    #[error(transparent)]
    Model(#[from] csl_model::Error),

    /// An output format name that is not supported.
    #[error("unknown output format '{0}' (expected text, html, markdown or markdown-pure)")]
    UnknownOutputFormat(String),
}

impl Error {
    /// Stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Model(e) => e.code(),
            Error::UnknownOutputFormat(_) => "Q-11-5",
        }
    }
}
