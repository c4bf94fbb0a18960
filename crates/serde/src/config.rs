//! Reader and writer configuration.
//!
//! The defaults produce the canonical output: two-space indentation, no XML
//! declaration and lenient handling of stray text in block elements.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ARXML_INDENT_WIDTH` | 2 | Spaces per nesting level |
//! | `ARXML_XML_DECLARATION` | false | Emit `<?xml ...?>` on document writes |
//! | `ARXML_STRICT_BLOCK_TEXT` | false | Reject text inside block elements |
//!
//! # Example
//!
//! ```rust
//! use arxml_serde::XmlConfig;
//!
//! let config = XmlConfig {
//!     xml_declaration: true,
//!     ..Default::default()
//! };
//! assert_eq!(config.indent_width, 2);
//! ```

use serde::Deserialize;
use tracing::warn;

pub const INDENT_WIDTH_ENV: &str = "ARXML_INDENT_WIDTH";
pub const XML_DECLARATION_ENV: &str = "ARXML_XML_DECLARATION";
pub const STRICT_BLOCK_TEXT_ENV: &str = "ARXML_STRICT_BLOCK_TEXT";

/// Formatting and strictness options shared by [`XmlReader`](crate::XmlReader)
/// and [`XmlWriter`](crate::XmlWriter).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct XmlConfig {
    /// Spaces added per nesting level of block content.
    pub indent_width: usize,

    /// Whether document-level writes start with an XML declaration.
    pub xml_declaration: bool,

    /// Whether non-whitespace text inside a block element fails the read.
    /// When unset the text is dropped and a warning is logged.
    pub strict_block_text: bool,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            xml_declaration: false,
            strict_block_text: false,
        }
    }
}

impl XmlConfig {
    /// Builds a configuration from the `ARXML_*` environment variables.
    ///
    /// Unset variables keep their default. Unparsable values are ignored
    /// with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = lookup(INDENT_WIDTH_ENV) {
            match value.trim().parse() {
                Ok(width) => config.indent_width = width,
                Err(_) => warn!(variable = INDENT_WIDTH_ENV, %value, "ignoring invalid value"),
            }
        }
        if let Some(value) = lookup(XML_DECLARATION_ENV) {
            match parse_flag(&value) {
                Some(flag) => config.xml_declaration = flag,
                None => warn!(variable = XML_DECLARATION_ENV, %value, "ignoring invalid value"),
            }
        }
        if let Some(value) = lookup(STRICT_BLOCK_TEXT_ENV) {
            match parse_flag(&value) {
                Some(flag) => config.strict_block_text = flag,
                None => warn!(variable = STRICT_BLOCK_TEXT_ENV, %value, "ignoring invalid value"),
            }
        }
        config
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.indent_width > 16 {
            errors.push(format!(
                "Indent width {} exceeds the maximum of 16",
                self.indent_width
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub(crate) fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width * depth)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = XmlConfig::default();
        assert_eq!(config.indent_width, 2);
        assert!(!config.xml_declaration);
        assert!(!config.strict_block_text);
        assert_eq!(config.indent(3), "      ");
    }

    #[test]
    fn test_env_overrides() {
        let config = XmlConfig::from_lookup(lookup(&[
            (INDENT_WIDTH_ENV, "4"),
            (XML_DECLARATION_ENV, "true"),
            (STRICT_BLOCK_TEXT_ENV, "1"),
        ]));
        assert_eq!(config.indent_width, 4);
        assert!(config.xml_declaration);
        assert!(config.strict_block_text);
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let config = XmlConfig::from_lookup(lookup(&[
            (INDENT_WIDTH_ENV, "wide"),
            (XML_DECLARATION_ENV, "maybe"),
        ]));
        assert_eq!(config, XmlConfig::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: XmlConfig = serde_json::from_str(r#"{"indent_width": 4}"#).unwrap();
        assert_eq!(config.indent_width, 4);
        assert!(!config.xml_declaration);
    }

    #[test]
    fn test_validate() {
        assert!(XmlConfig::default().validate().is_ok());
        let config = XmlConfig {
            indent_width: 40,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().len(), 1);
    }
}
