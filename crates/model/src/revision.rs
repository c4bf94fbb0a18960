//! Revision label codec.
//!
//! A revision label is stored and re-emitted exactly as written. Parsing only
//! checks the version-token shape: three dot-separated numbers, optionally
//! followed by a `.`, `_` or `;` separated suffix of free text.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ModelError, Result};

static REVISION_LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+([._;].*)?$").expect("revision label pattern is valid")
});

/// A validated revision label such as `4.0.0`, `4.0.0.1234565` or `4.0.0_vendor specific;13`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevisionLabel(String);

impl RevisionLabel {
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.chars().any(char::is_control) || !REVISION_LABEL_PATTERN.is_match(&text) {
            return Err(ModelError::Format {
                kind: "revision label",
                value: text,
            });
        }
        Ok(RevisionLabel(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RevisionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RevisionLabel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        RevisionLabel::parse(s)
    }
}

impl TryFrom<&str> for RevisionLabel {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self> {
        RevisionLabel::parse(value)
    }
}

impl TryFrom<String> for RevisionLabel {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        RevisionLabel::parse(value)
    }
}

impl AsRef<str> for RevisionLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for RevisionLabel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for RevisionLabel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        RevisionLabel::parse(text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_pass_through_unchanged() {
        for text in [
            "1.0.0",
            "1.2.3",
            "4.0.0.1234565",
            "4.0.0_vendor specific;13",
            "4.0.0;12",
        ] {
            let label = RevisionLabel::parse(text).unwrap();
            assert_eq!(label.as_str(), text);
            assert_eq!(label.to_string(), text);
        }
    }

    #[test]
    fn test_rejects_malformed_labels() {
        for text in ["", "1.0", "v1.0.0", "1.0.0-rc1", "1.0.0\n", "1.0.0;\u{7}"] {
            assert!(RevisionLabel::parse(text).is_err(), "{text:?} should be rejected");
        }
    }
}
