//! Error types for building the style model.

use thiserror::Error;

/// Result type alias for csl-model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing model values from a pre-parsed tree.
///
/// These are configuration errors: they surface to whoever loads the
/// style or locale, never to a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An attribute holds a value outside its allowed set.
    #[error("invalid value '{value}' for attribute '{attribute}' on <{element}>")]
    InvalidAttributeValue {
        element: String,
        attribute: String,
        value: String,
    },

    /// A required attribute is absent.
    #[error("missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    /// The node is not the element the constructor expects.
    #[error("expected <{expected}> element, found <{found}>")]
    UnexpectedElement { expected: String, found: String },

    /// A locator label name that is not part of the closed label set.
    #[error("unknown locator label '{0}'")]
    InvalidLabel(String),
}

impl Error {
    pub(crate) fn invalid_value(element: &str, attribute: &str, value: &str) -> Self {
        Error::InvalidAttributeValue {
            element: element.to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn missing(element: &str, attribute: &str) -> Self {
        Error::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }

    /// Stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidAttributeValue { .. } => "Q-11-3",
            Error::MissingAttribute { .. } => "Q-11-2",
            Error::UnexpectedElement { .. } => "Q-11-1",
            Error::InvalidLabel(_) => "Q-11-4",
        }
    }
}
