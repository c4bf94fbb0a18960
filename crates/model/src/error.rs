//! Error types for the element model.
//!
//! These are the failures a scalar codec or the content normalizer can
//! report. They carry the offending text so a caller can diagnose the
//! problem without re-parsing the source.

use thiserror::Error;

/// Errors raised while parsing scalar values or normalizing constructor input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Text does not match the accepted grammar of a scalar codec.
    #[error("invalid {kind}: '{value}'")]
    Format { kind: &'static str, value: String },

    /// A token outside the closed code set of an enumeration.
    #[error("unknown {enum_name} value '{value}'")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },

    /// Inline markup that is not legal inside a given language-tagged container.
    #[error("<{markup}> is not allowed inside <{container}>")]
    InvalidMarkup {
        container: &'static str,
        markup: &'static str,
    },
}

impl ModelError {
    pub(crate) fn format(kind: &'static str, value: impl Into<String>) -> Self {
        ModelError::Format {
            kind,
            value: value.into(),
        }
    }

    pub(crate) fn unknown_enum(enum_name: &'static str, value: impl Into<String>) -> Self {
        ModelError::UnknownEnumValue {
            enum_name,
            value: value.into(),
        }
    }
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
