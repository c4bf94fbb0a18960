//! Special data groups (`SDG`) and their leaves (`SD`, `SDF`).

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::language::MultiLanguageLongName;
use crate::normalize::{SdgContentInput, normalize_sdg_content};

static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("numeric pattern is valid")
});

/// Value of an `SDF` leaf.
///
/// Decimals keep the scale they were written with, so `1.50` is re-emitted
/// as `1.50`. Exponent notation, text a decimal cannot hold exactly and
/// floats given by the caller are kept as `f64`, which always prints with a
/// decimal point or an exponent. Equality compares numeric value across variants.
#[derive(Debug, Clone, Copy)]
pub enum Numeric {
    Integer(i64),
    Decimal(Decimal),
    Float(f64),
}

impl Numeric {
    pub fn parse(text: &str) -> Result<Self> {
        if !NUMERIC_PATTERN.is_match(text) {
            return Err(ModelError::format("numeric value", text));
        }
        if let Ok(value) = text.parse::<i64>() {
            return Ok(Numeric::Integer(value));
        }
        if !text.contains(['e', 'E']) {
            if let Ok(value) = Decimal::from_str_exact(text.trim_start_matches('+')) {
                return Ok(Numeric::Decimal(value));
            }
        }
        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Numeric::Float)
            .ok_or_else(|| ModelError::format("numeric value", text))
    }

    /// Wraps a float; NaN and infinities are rejected.
    pub fn from_f64(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(Numeric::Float(value))
        } else {
            Err(ModelError::format("numeric value", value.to_string()))
        }
    }

    /// The exact decimal value, if one exists.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Numeric::Integer(value) => Some(Decimal::from(*value)),
            Numeric::Decimal(value) => Some(*value),
            Numeric::Float(value) => Decimal::from_f64(*value),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Numeric::Integer(value) => *value as f64,
            Numeric::Decimal(value) => value.to_f64().unwrap_or(f64::NAN),
            Numeric::Float(value) => *value,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Numeric::Integer(value) => Some(*value),
            Numeric::Decimal(value) if value.fract().is_zero() => value.to_i64(),
            Numeric::Decimal(_) => None,
            Numeric::Float(value) if value.fract() == 0.0 => value.to_i64(),
            Numeric::Float(_) => None,
        }
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Numeric::Float(_), _) | (_, Numeric::Float(_)) => self.as_f64() == other.as_f64(),
            _ => self.as_decimal() == other.as_decimal(),
        }
    }
}

// Floats are finite by construction.
impl Eq for Numeric {}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Integer(value) => write!(f, "{value}"),
            Numeric::Decimal(value) => write!(f, "{value}"),
            // Debug is the shortest exact form and keeps `1.0` and `1e30`.
            Numeric::Float(value) => write!(f, "{value:?}"),
        }
    }
}

impl FromStr for Numeric {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Numeric::parse(s)
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Integer(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Integer(value.into())
    }
}

impl From<Decimal> for Numeric {
    fn from(value: Decimal) -> Self {
        Numeric::Decimal(value)
    }
}

impl Serialize for Numeric {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Numeric::Integer(value) => serializer.serialize_i64(*value),
            Numeric::Decimal(value) => serializer.collect_str(value),
            Numeric::Float(value) => serializer.serialize_f64(*value),
        }
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Integer(i64),
            Float(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Integer(value) => Ok(Numeric::Integer(value)),
            Raw::Float(value) => Numeric::from_f64(value).map_err(serde::de::Error::custom),
            Raw::Text(text) => Numeric::parse(&text).map_err(serde::de::Error::custom),
        }
    }
}

/// `SD`: a text leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDataElement {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<String>,
}

impl SpecialDataElement {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            gid: None,
        }
    }

    pub fn with_gid(mut self, gid: impl Into<String>) -> Self {
        self.gid = Some(gid.into());
        self
    }
}

/// `SDF`: a numeric leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDataValue {
    pub value: Numeric,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<String>,
}

impl SpecialDataValue {
    pub fn new(value: impl Into<Numeric>) -> Self {
        Self {
            value: value.into(),
            gid: None,
        }
    }

    pub fn with_gid(mut self, gid: impl Into<String>) -> Self {
        self.gid = Some(gid.into());
        self
    }
}

/// One child of an `SDG`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SdgContent {
    Element(SpecialDataElement),
    Value(SpecialDataValue),
    Group(SpecialDataGroup),
}

impl SdgContent {
    pub fn gid(&self) -> Option<&str> {
        match self {
            SdgContent::Element(e) => e.gid.as_deref(),
            SdgContent::Value(v) => v.gid.as_deref(),
            SdgContent::Group(g) => g.gid.as_deref(),
        }
    }

    pub fn as_element(&self) -> Option<&SpecialDataElement> {
        match self {
            SdgContent::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&SpecialDataValue> {
        match self {
            SdgContent::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&SpecialDataGroup> {
        match self {
            SdgContent::Group(g) => Some(g),
            _ => None,
        }
    }
}

impl From<SpecialDataElement> for SdgContent {
    fn from(value: SpecialDataElement) -> Self {
        SdgContent::Element(value)
    }
}

impl From<SpecialDataValue> for SdgContent {
    fn from(value: SpecialDataValue) -> Self {
        SdgContent::Value(value)
    }
}

impl From<SpecialDataGroup> for SdgContent {
    fn from(value: SpecialDataGroup) -> Self {
        SdgContent::Group(value)
    }
}

/// `SDG`: a recursive group of special data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDataGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<MultiLanguageLongName>,
    #[serde(default)]
    pub content: Vec<SdgContent>,
}

impl SpecialDataGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gid(gid: impl Into<String>) -> Self {
        Self {
            gid: Some(gid.into()),
            ..Self::default()
        }
    }

    /// Builds a group from flexible content input.
    ///
    /// ```
    /// use arxml_model::{SdgContentInput, SpecialDataGroup};
    ///
    /// let group = SpecialDataGroup::from_content(
    ///     Some("Outer"),
    ///     vec![SdgContentInput::from("a"), ("g", "b").into(), 5.into()],
    /// )
    /// .unwrap();
    /// assert_eq!(group.content.len(), 3);
    /// ```
    pub fn from_content(gid: Option<&str>, content: impl Into<SdgContentInput>) -> Result<Self> {
        Ok(Self {
            gid: gid.map(str::to_string),
            caption: None,
            content: normalize_sdg_content(content.into())?,
        })
    }

    pub fn with_caption(mut self, caption: impl Into<MultiLanguageLongName>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Normalizes `content` and appends it after the existing children.
    pub fn append(&mut self, content: impl Into<SdgContentInput>) -> Result<()> {
        let items = normalize_sdg_content(content.into())?;
        self.content.extend(items);
        Ok(())
    }

    /// Appends an already canonical child.
    pub fn push(&mut self, item: impl Into<SdgContent>) {
        self.content.push(item.into());
    }

    pub fn is_empty(&self) -> bool {
        self.gid.is_none() && self.caption.is_none() && self.content.is_empty()
    }

    /// Depth of the deepest nested group, 1 for a group without subgroups.
    pub fn depth(&self) -> usize {
        1 + self
            .content
            .iter()
            .filter_map(SdgContent::as_group)
            .map(SpecialDataGroup::depth)
            .max()
            .unwrap_or(0)
    }
}
