//! Error types for reading and writing AUTOSAR XML.
//!
//! Every variant carries the tag and attribute names involved, plus the
//! offending text, so a failure can be diagnosed without re-parsing the
//! input.

use arxml_model::ModelError;
use thiserror::Error;

/// Errors raised by the reader, the writer and the JSON wrappers.
#[derive(Error, Debug)]
pub enum SerdeError {
    /// A scalar codec or the content normalizer rejected a value.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A child element that is not legal under its parent.
    #[error("unexpected element <{child}> inside <{parent}>")]
    UnexpectedElement { parent: String, child: String },

    /// An attribute value that its scalar codec rejected.
    #[error("invalid value '{value}' for attribute {attribute} of <{element}>: {source}")]
    AttributeFormat {
        element: String,
        attribute: String,
        value: String,
        #[source]
        source: ModelError,
    },

    /// A required attribute is absent.
    #[error("<{element}> is missing required attribute {attribute}")]
    MissingAttribute { element: String, attribute: String },

    /// A required child element is absent.
    #[error("<{parent}> is missing required element <{child}>")]
    MissingElement { parent: String, child: String },

    /// Non-whitespace text where only child elements are allowed.
    #[error("unexpected text '{text}' inside <{element}>")]
    UnexpectedText { element: String, text: String },

    /// Malformed XML.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O failure on the input source or output sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

impl SerdeError {
    pub(crate) fn unexpected_element(parent: &str, child: &str) -> Self {
        SerdeError::UnexpectedElement {
            parent: parent.to_string(),
            child: child.to_string(),
        }
    }

    pub(crate) fn missing_element(parent: &str, child: &str) -> Self {
        SerdeError::MissingElement {
            parent: parent.to_string(),
            child: child.to_string(),
        }
    }
}

impl From<quick_xml::encoding::EncodingError> for SerdeError {
    fn from(err: quick_xml::encoding::EncodingError) -> Self {
        SerdeError::Xml(quick_xml::Error::from(err))
    }
}

impl From<String> for SerdeError {
    fn from(msg: String) -> Self {
        SerdeError::Custom(msg)
    }
}

impl From<&str> for SerdeError {
    fn from(msg: &str) -> Self {
        SerdeError::Custom(msg.to_string())
    }
}

/// Result type alias for serialization operations.
pub type Result<T> = std::result::Result<T, SerdeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_format_message() {
        let source = "XX".parse::<arxml_model::Language>().unwrap_err();
        let err = SerdeError::AttributeFormat {
            element: "L-4".into(),
            attribute: "L".into(),
            value: "XX".into(),
            source,
        };
        assert_eq!(
            err.to_string(),
            "invalid value 'XX' for attribute L of <L-4>: unknown Language value 'XX'"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_model_error_is_transparent() {
        let err: SerdeError = arxml_model::DateValue::parse("2009-07-23T14:38:02.5Z")
            .unwrap_err()
            .into();
        assert!(matches!(err, SerdeError::Model(ModelError::Format { .. })));
        assert_eq!(err.to_string(), "invalid date: '2009-07-23T14:38:02.5Z'");
    }
}
