//! Canonicalization of flexible constructor input.
//!
//! Constructors accept author-friendly shapes (bare strings and numbers,
//! `(gid, value)` pairs, `{gid, content}` mappings, lists, already-built
//! nodes). Everything is reduced here to the canonical variant tree, so the
//! model only ever stores canonical content and the writer never sees raw
//! input.

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::trace;

use crate::enums::Language;
use crate::error::{ModelError, Result};
use crate::language::{Flavor, LanguageTagged, MultiLanguage};
use crate::special_data::{
    Numeric, SdgContent, SpecialDataElement, SpecialDataGroup, SpecialDataValue,
};

/// A bare value in special-data content.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarInput {
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
    Bool(bool),
    Text(String),
}

impl From<i64> for ScalarInput {
    fn from(value: i64) -> Self {
        ScalarInput::Integer(value)
    }
}

impl From<i32> for ScalarInput {
    fn from(value: i32) -> Self {
        ScalarInput::Integer(value.into())
    }
}

impl From<u32> for ScalarInput {
    fn from(value: u32) -> Self {
        ScalarInput::Integer(value.into())
    }
}

impl From<f64> for ScalarInput {
    fn from(value: f64) -> Self {
        ScalarInput::Float(value)
    }
}

impl From<Decimal> for ScalarInput {
    fn from(value: Decimal) -> Self {
        ScalarInput::Decimal(value)
    }
}

impl From<bool> for ScalarInput {
    fn from(value: bool) -> Self {
        ScalarInput::Bool(value)
    }
}

impl From<&str> for ScalarInput {
    fn from(value: &str) -> Self {
        ScalarInput::Text(value.to_string())
    }
}

impl From<String> for ScalarInput {
    fn from(value: String) -> Self {
        ScalarInput::Text(value)
    }
}

/// Raw content accepted by [`SpecialDataGroup::from_content`] and
/// [`SpecialDataGroup::append`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum SdgContentInput {
    /// A node that is already canonical.
    Node(SdgContent),
    /// `(gid, value)`.
    Pair(String, ScalarInput),
    /// A nested group whose content is normalized recursively.
    Group {
        gid: Option<String>,
        content: Box<SdgContentInput>,
    },
    Scalar(ScalarInput),
    Sequence(Vec<SdgContentInput>),
}

impl SdgContentInput {
    pub fn group(gid: Option<&str>, content: impl Into<SdgContentInput>) -> Self {
        SdgContentInput::Group {
            gid: gid.map(str::to_string),
            content: Box::new(content.into()),
        }
    }
}

macro_rules! scalar_content_input {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for SdgContentInput {
                fn from(value: $ty) -> Self {
                    SdgContentInput::Scalar(value.into())
                }
            }
        )+
    };
}

scalar_content_input!(i64, i32, u32, f64, Decimal, bool, &str, String);

impl From<ScalarInput> for SdgContentInput {
    fn from(value: ScalarInput) -> Self {
        SdgContentInput::Scalar(value)
    }
}

impl From<SdgContent> for SdgContentInput {
    fn from(value: SdgContent) -> Self {
        SdgContentInput::Node(value)
    }
}

impl From<SpecialDataElement> for SdgContentInput {
    fn from(value: SpecialDataElement) -> Self {
        SdgContentInput::Node(value.into())
    }
}

impl From<SpecialDataValue> for SdgContentInput {
    fn from(value: SpecialDataValue) -> Self {
        SdgContentInput::Node(value.into())
    }
}

impl From<SpecialDataGroup> for SdgContentInput {
    fn from(value: SpecialDataGroup) -> Self {
        SdgContentInput::Node(value.into())
    }
}

impl<G, V> From<(G, V)> for SdgContentInput
where
    G: Into<String>,
    V: Into<ScalarInput>,
{
    fn from((gid, value): (G, V)) -> Self {
        SdgContentInput::Pair(gid.into(), value.into())
    }
}

impl<T: Into<SdgContentInput>> From<Vec<T>> for SdgContentInput {
    fn from(items: Vec<T>) -> Self {
        SdgContentInput::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<serde_json::Value> for SdgContentInput {
    type Error = ModelError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::String(text) => Ok(SdgContentInput::Scalar(ScalarInput::Text(text))),
            Value::Bool(flag) => Ok(SdgContentInput::Scalar(ScalarInput::Bool(flag))),
            Value::Number(number) => {
                let scalar = if let Some(value) = number.as_i64() {
                    ScalarInput::Integer(value)
                } else if let Some(value) = number.as_u64() {
                    ScalarInput::Decimal(Decimal::from(value))
                } else {
                    let value = number
                        .as_f64()
                        .ok_or_else(|| ModelError::format("special data content", number.to_string()))?;
                    ScalarInput::Float(value)
                };
                Ok(SdgContentInput::Scalar(scalar))
            }
            Value::Array(items) => items
                .into_iter()
                .map(SdgContentInput::try_from)
                .collect::<Result<Vec<_>>>()
                .map(SdgContentInput::Sequence),
            Value::Object(mut map) => {
                if map.keys().any(|key| key != "gid" && key != "content") {
                    return Err(ModelError::format(
                        "special data content",
                        Value::Object(map).to_string(),
                    ));
                }
                let gid = match map.remove("gid") {
                    None | Some(Value::Null) => None,
                    Some(Value::String(gid)) => Some(gid),
                    Some(other) => return Err(ModelError::format("group identifier", other.to_string())),
                };
                let content = match map.remove("content") {
                    None | Some(Value::Null) => SdgContentInput::Sequence(Vec::new()),
                    Some(content) => SdgContentInput::try_from(content)?,
                };
                Ok(SdgContentInput::Group {
                    gid,
                    content: Box::new(content),
                })
            }
            Value::Null => Err(ModelError::format("special data content", "null")),
        }
    }
}

fn classify(gid: Option<String>, scalar: ScalarInput) -> Result<SdgContent> {
    let item = match scalar {
        ScalarInput::Integer(value) => SpecialDataValue {
            value: Numeric::Integer(value),
            gid,
        }
        .into(),
        ScalarInput::Float(value) => SpecialDataValue {
            value: Numeric::from_f64(value)?,
            gid,
        }
        .into(),
        ScalarInput::Decimal(value) => SpecialDataValue {
            value: Numeric::Decimal(value),
            gid,
        }
        .into(),
        ScalarInput::Bool(flag) => SpecialDataElement {
            value: flag.to_string(),
            gid,
        }
        .into(),
        ScalarInput::Text(value) => SpecialDataElement { value, gid }.into(),
    };
    Ok(item)
}

/// Reduces `input` to an ordered list of canonical group children.
pub fn normalize_sdg_content(input: SdgContentInput) -> Result<Vec<SdgContent>> {
    let mut out = Vec::new();
    normalize_into(input, &mut out)?;
    trace!(items = out.len(), "normalized special data content");
    Ok(out)
}

fn normalize_into(input: SdgContentInput, out: &mut Vec<SdgContent>) -> Result<()> {
    match input {
        SdgContentInput::Node(node) => out.push(node),
        SdgContentInput::Pair(gid, value) => out.push(classify(Some(gid), value)?),
        SdgContentInput::Scalar(value) => out.push(classify(None, value)?),
        SdgContentInput::Group { gid, content } => out.push(
            SpecialDataGroup {
                gid,
                caption: None,
                content: normalize_sdg_content(*content)?,
            }
            .into(),
        ),
        SdgContentInput::Sequence(items) => {
            for item in items {
                normalize_into(item, out)?;
            }
        }
    }
    Ok(())
}

/// One item of multi-language input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged, bound = "")]
pub enum LanguageInput<F: Flavor> {
    Tagged(LanguageTagged<F>),
    Pair(Language, String),
    /// A language with empty content.
    Language(Language),
}

impl<F: Flavor> From<LanguageInput<F>> for LanguageTagged<F> {
    fn from(input: LanguageInput<F>) -> Self {
        match input {
            LanguageInput::Tagged(item) => item,
            LanguageInput::Pair(language, text) => LanguageTagged::with_text(language, text),
            LanguageInput::Language(language) => LanguageTagged::new(language),
        }
    }
}

/// A single value or a list of values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

impl<F: Flavor> From<LanguageInput<F>> for OneOrMany<LanguageInput<F>> {
    fn from(value: LanguageInput<F>) -> Self {
        OneOrMany::One(value)
    }
}

impl<F: Flavor> From<LanguageTagged<F>> for LanguageInput<F> {
    fn from(value: LanguageTagged<F>) -> Self {
        LanguageInput::Tagged(value)
    }
}

impl<F: Flavor> From<Language> for LanguageInput<F> {
    fn from(value: Language) -> Self {
        LanguageInput::Language(value)
    }
}

impl<F: Flavor, S: Into<String>> From<(Language, S)> for LanguageInput<F> {
    fn from((language, text): (Language, S)) -> Self {
        LanguageInput::Pair(language, text.into())
    }
}

impl<F: Flavor> From<LanguageTagged<F>> for OneOrMany<LanguageInput<F>> {
    fn from(value: LanguageTagged<F>) -> Self {
        OneOrMany::One(value.into())
    }
}

impl<F: Flavor> From<Language> for OneOrMany<LanguageInput<F>> {
    fn from(value: Language) -> Self {
        OneOrMany::One(value.into())
    }
}

impl<F: Flavor, S: Into<String>> From<(Language, S)> for OneOrMany<LanguageInput<F>> {
    fn from(value: (Language, S)) -> Self {
        OneOrMany::One(value.into())
    }
}

/// Builds a multi-language container, one item per input in input order.
pub fn normalize_multi_language<F: Flavor>(input: OneOrMany<LanguageInput<F>>) -> MultiLanguage<F> {
    input.into_vec().into_iter().map(LanguageTagged::from).collect()
}

impl<F: Flavor> MultiLanguage<F> {
    /// Builds a container from flexible input.
    ///
    /// ```
    /// use arxml_model::{Language, MultiLanguagePlainText};
    ///
    /// let used = MultiLanguagePlainText::from_input(vec![
    ///     Language::Fr.into(),
    ///     (Language::En, "English").into(),
    /// ]);
    /// assert_eq!(used.len(), 2);
    /// ```
    pub fn from_input(input: impl Into<OneOrMany<LanguageInput<F>>>) -> Self {
        normalize_multi_language(input.into())
    }

    /// Normalizes `input` and appends it.
    pub fn append(&mut self, input: impl Into<OneOrMany<LanguageInput<F>>>) {
        self.items
            .extend(input.into().into_vec().into_iter().map(LanguageTagged::from));
    }
}
