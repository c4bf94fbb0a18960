//! Language-tagged text and multi-language containers.
//!
//! The five schema flavors (`L-1`, `L-2`, `L-4`, `L-5`, `L-10`) share one
//! shape, a language code plus mixed content, and differ only in their tag,
//! the markup they accept and the attributes their multi-language wrapper
//! carries. [`LanguageTagged`] and [`MultiLanguage`] are generic over a
//! zero-sized [`Flavor`] marker that supplies those differences.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::enums::{KeepWithPrevious, Language, PageBreak};
use crate::error::{ModelError, Result};
use crate::markup::{MarkupKind, Part};

/// Compile-time description of one language-tagged flavor.
pub trait Flavor:
    fmt::Debug + Clone + Copy + PartialEq + Eq + Default + Send + Sync + 'static
{
    /// Tag of a single language-tagged item, e.g. `L-4`.
    const TAG: &'static str;

    /// Tag the multi-language wrapper is written under unless overridden.
    const CONTAINER_TAG: &'static str;

    /// Inline markup that may appear between text runs.
    const ALLOWED_MARKUP: &'static [MarkupKind];

    /// Attributes carried by the multi-language wrapper.
    type Attributes: fmt::Debug
        + Clone
        + PartialEq
        + Eq
        + Default
        + Serialize
        + DeserializeOwned
        + Send
        + Sync;

    fn allows(kind: MarkupKind) -> bool {
        Self::ALLOWED_MARKUP.contains(&kind)
    }
}

/// `L-1` inside `P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paragraph;

/// `L-2`, used by `DESC`, `CHANGE` and `REASON`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverviewParagraph;

/// `L-4`, used by `LONG-NAME`, `LABEL` and `SDG-CAPTION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LongName;

/// `L-5` inside `VERBATIM`. Whitespace is content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verbatim;

/// `L-10`, plain text without markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlainText;

const PARAGRAPH_MARKUP: &[MarkupKind] = &[
    MarkupKind::Break,
    MarkupKind::Emphasis,
    MarkupKind::IndexEntry,
    MarkupKind::Subscript,
    MarkupKind::Superscript,
    MarkupKind::TechnicalTerm,
];

impl Flavor for Paragraph {
    const TAG: &'static str = "L-1";
    const CONTAINER_TAG: &'static str = "P";
    const ALLOWED_MARKUP: &'static [MarkupKind] = PARAGRAPH_MARKUP;
    type Attributes = BlockAttributes;
}

impl Flavor for OverviewParagraph {
    const TAG: &'static str = "L-2";
    const CONTAINER_TAG: &'static str = "DESC";
    const ALLOWED_MARKUP: &'static [MarkupKind] = PARAGRAPH_MARKUP;
    type Attributes = ();
}

impl Flavor for LongName {
    const TAG: &'static str = "L-4";
    const CONTAINER_TAG: &'static str = "LONG-NAME";
    const ALLOWED_MARKUP: &'static [MarkupKind] = &[
        MarkupKind::Emphasis,
        MarkupKind::IndexEntry,
        MarkupKind::Subscript,
        MarkupKind::Superscript,
        MarkupKind::TechnicalTerm,
    ];
    type Attributes = ();
}

impl Flavor for Verbatim {
    const TAG: &'static str = "L-5";
    const CONTAINER_TAG: &'static str = "VERBATIM";
    const ALLOWED_MARKUP: &'static [MarkupKind] = &[
        MarkupKind::Break,
        MarkupKind::Emphasis,
        MarkupKind::TechnicalTerm,
    ];
    type Attributes = BlockAttributes;
}

impl Flavor for PlainText {
    const TAG: &'static str = "L-10";
    const CONTAINER_TAG: &'static str = "USED-LANGUAGES";
    const ALLOWED_MARKUP: &'static [MarkupKind] = &[];
    type Attributes = ();
}

/// Layout attributes of `P` and `VERBATIM`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub si: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_break: Option<PageBreak>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_with_previous: Option<KeepWithPrevious>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_entry: Option<String>,
}

impl BlockAttributes {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Appends `part` to a mixed-content list.
///
/// Empty text runs are dropped and adjacent text runs merge, so a list built
/// by repeated pushes has the same shape the reader produces for its text.
pub(crate) fn push_part(
    parts: &mut Vec<Part>,
    part: Part,
    container: &'static str,
    allowed: &[MarkupKind],
) -> Result<()> {
    if let Some(kind) = part.markup_kind() {
        if !allowed.contains(&kind) {
            return Err(ModelError::InvalidMarkup {
                container,
                markup: kind.tag(),
            });
        }
        parts.push(part);
        return Ok(());
    }

    if let Part::Text(text) = part {
        if text.is_empty() {
            return Ok(());
        }
        match parts.last_mut() {
            Some(Part::Text(last)) => last.push_str(&text),
            _ => parts.push(Part::Text(text)),
        }
    }
    Ok(())
}

/// Text in one language, e.g. `<L-4 L="EN">Name</L-4>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct LanguageTagged<F: Flavor> {
    pub language: Language,
    parts: Vec<Part>,
    #[serde(skip)]
    flavor: PhantomData<F>,
}

impl<F: Flavor> LanguageTagged<F> {
    /// An item with no content.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            parts: Vec::new(),
            flavor: PhantomData,
        }
    }

    /// An item holding a single text run.
    pub fn with_text(language: Language, text: impl Into<String>) -> Self {
        let mut item = Self::new(language);
        let text = text.into();
        if !text.is_empty() {
            item.parts.push(Part::Text(text));
        }
        item
    }

    /// Builds an item from mixed content, rejecting markup the flavor forbids.
    pub fn from_parts<I, P>(language: Language, parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        let mut item = Self::new(language);
        for part in parts {
            item.push(part)?;
        }
        Ok(item)
    }

    /// Appends a text run or a markup node.
    pub fn push(&mut self, part: impl Into<Part>) -> Result<()> {
        push_part(&mut self.parts, part.into(), F::TAG, F::ALLOWED_MARKUP)
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Concatenated text of every part, markup tags stripped.
    pub fn text(&self) -> String {
        self.parts.iter().map(Part::text).collect()
    }
}

impl<'de, F: Flavor> Deserialize<'de> for LanguageTagged<F> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            language: Language,
            #[serde(default)]
            parts: Vec<Part>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_parts(raw.language, raw.parts).map_err(serde::de::Error::custom)
    }
}

impl<F: Flavor> fmt::Display for LanguageTagged<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Ordered list of language-tagged items of one flavor.
///
/// Items keep insertion order; that order is also the emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MultiLanguage<F: Flavor> {
    #[serde(default)]
    pub attributes: F::Attributes,
    #[serde(default)]
    pub items: Vec<LanguageTagged<F>>,
}

impl<F: Flavor> Default for MultiLanguage<F> {
    fn default() -> Self {
        Self {
            attributes: F::Attributes::default(),
            items: Vec::new(),
        }
    }
}

impl<F: Flavor> MultiLanguage<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(mut self, attributes: F::Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn push(&mut self, item: LanguageTagged<F>) {
        self.items.push(item);
    }

    /// First item in `language`.
    pub fn get(&self, language: Language) -> Option<&LanguageTagged<F>> {
        self.items.iter().find(|item| item.language == language)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageTagged<F>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.items.iter().map(|item| item.language)
    }
}

impl<F: Flavor> From<LanguageTagged<F>> for MultiLanguage<F> {
    fn from(item: LanguageTagged<F>) -> Self {
        Self {
            attributes: F::Attributes::default(),
            items: vec![item],
        }
    }
}

impl<F: Flavor> From<Vec<LanguageTagged<F>>> for MultiLanguage<F> {
    fn from(items: Vec<LanguageTagged<F>>) -> Self {
        Self {
            attributes: F::Attributes::default(),
            items,
        }
    }
}

impl<F: Flavor> FromIterator<LanguageTagged<F>> for MultiLanguage<F> {
    fn from_iter<I: IntoIterator<Item = LanguageTagged<F>>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<'a, F: Flavor> IntoIterator for &'a MultiLanguage<F> {
    type Item = &'a LanguageTagged<F>;
    type IntoIter = std::slice::Iter<'a, LanguageTagged<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

pub type LanguageParagraph = LanguageTagged<Paragraph>;
pub type LanguageOverviewParagraph = LanguageTagged<OverviewParagraph>;
pub type LanguageLongName = LanguageTagged<LongName>;
pub type LanguageVerbatim = LanguageTagged<Verbatim>;
pub type LanguagePlainText = LanguageTagged<PlainText>;

pub type MultiLanguageParagraph = MultiLanguage<Paragraph>;
pub type MultiLanguageOverviewParagraph = MultiLanguage<OverviewParagraph>;
pub type MultiLanguageLongName = MultiLanguage<LongName>;
pub type MultiLanguageVerbatim = MultiLanguage<Verbatim>;
pub type MultiLanguagePlainText = MultiLanguage<PlainText>;

const UNIT_NAME_MARKUP: &[MarkupKind] = &[MarkupKind::Subscript, MarkupKind::Superscript];

/// `DISPLAY-NAME` of a unit, e.g. `m<SUP>2</SUP>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SingleLanguageUnitNames {
    parts: Vec<Part>,
}

impl SingleLanguageUnitNames {
    pub const TAG: &'static str = "DISPLAY-NAME";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts<I, P>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        let mut names = Self::new();
        for part in parts {
            names.push(part)?;
        }
        Ok(names)
    }

    /// Appends text, `SUB` or `SUP`.
    pub fn push(&mut self, part: impl Into<Part>) -> Result<()> {
        push_part(&mut self.parts, part.into(), Self::TAG, UNIT_NAME_MARKUP)
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl From<&str> for SingleLanguageUnitNames {
    fn from(text: &str) -> Self {
        let mut names = Self::new();
        if !text.is_empty() {
            names.parts.push(Part::Text(text.to_string()));
        }
        names
    }
}

impl<'de> Deserialize<'de> for SingleLanguageUnitNames {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            parts: Vec<Part>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_parts(raw.parts).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for SingleLanguageUnitNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                Part::Superscript(sup) => write!(f, "^{}", sup.text)?,
                Part::Subscript(sub) => write!(f, "_{}", sub.text)?,
                other => f.write_str(other.text())?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Break, EmphasisText, Subscript, Superscript};

    #[test]
    fn test_push_rejects_forbidden_markup() {
        let mut name = LanguageLongName::new(Language::En);
        let err = name.push(Break).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidMarkup {
                container: "L-4",
                markup: "BR"
            }
        );

        let mut plain = LanguagePlainText::new(Language::De);
        assert!(plain.push(EmphasisText::new("bold")).is_err());
        assert!(plain.push("Deutsch").is_ok());
    }

    #[test]
    fn test_text_runs_merge() {
        let mut paragraph = LanguageParagraph::new(Language::ForAll);
        paragraph.push("Hello").unwrap();
        paragraph.push("").unwrap();
        paragraph.push(", world").unwrap();
        paragraph.push(Break).unwrap();
        paragraph.push("!").unwrap();
        assert_eq!(paragraph.parts().len(), 3);
        assert_eq!(paragraph.parts()[0], "Hello, world");
        assert_eq!(paragraph.text(), "Hello, world!");
    }

    #[test]
    fn test_multi_language_keeps_insertion_order() {
        let names: MultiLanguageLongName = vec![
            LanguageLongName::with_text(Language::De, "Name"),
            LanguageLongName::with_text(Language::En, "Name"),
        ]
        .into();
        let languages: Vec<_> = names.languages().collect();
        assert_eq!(languages, vec![Language::De, Language::En]);
        assert_eq!(names.get(Language::En).map(|n| n.text()), Some("Name".into()));
        assert!(names.get(Language::Fr).is_none());
    }

    #[test]
    fn test_unit_names_display() {
        let names =
            SingleLanguageUnitNames::from_parts(vec![Part::from("m"), Superscript::new("2").into()])
                .unwrap();
        assert_eq!(names.to_string(), "m^2");

        let names = SingleLanguageUnitNames::from_parts(vec![
            Part::from("x"),
            Subscript::new("max").into(),
        ])
        .unwrap();
        assert_eq!(names.to_string(), "x_max");

        let mut names = SingleLanguageUnitNames::new();
        assert!(names.push(Break).is_err());
    }

    #[test]
    fn test_json_rejects_forbidden_markup() {
        let json = r#"{"language":"EN","parts":[{"text":"a"},{"break":null}]}"#;
        assert!(serde_json::from_str::<LanguageLongName>(json).is_err());
        let parsed: LanguageParagraph = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.parts().len(), 2);
    }
}
