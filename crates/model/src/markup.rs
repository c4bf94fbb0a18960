//! Inline markup and the parts of mixed content.
//!
//! A mixed-content container holds an ordered list of [`Part`]s: plain text
//! runs interleaved with markup nodes. Order and whitespace are significant
//! and survive a read/write cycle unchanged.

use serde::{Deserialize, Serialize};

use crate::enums::{EmphasisFont, EmphasisType};

/// `<BR/>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Break;

/// `<E>`: emphasised text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmphasisText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<EmphasisFont>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis_type: Option<EmphasisType>,
}

impl EmphasisText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, emphasis_type: EmphasisType) -> Self {
        self.emphasis_type = Some(emphasis_type);
        self
    }

    pub fn with_font(mut self, font: EmphasisFont) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// `<IE>`: index entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub text: String,
}

/// `<TT>`: technical term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalTerm {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tex_render: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_type: Option<String>,
}

impl TechnicalTerm {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, term_type: impl Into<String>) -> Self {
        self.term_type = Some(term_type.into());
        self
    }

    pub fn with_tex_render(mut self, tex_render: impl Into<String>) -> Self {
        self.tex_render = Some(tex_render.into());
        self
    }
}

/// `<SUB>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscript {
    pub text: String,
}

/// `<SUP>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Superscript {
    pub text: String,
}

macro_rules! text_markup_constructors {
    ($($ty:ident),+) => {
        $(
            impl $ty {
                pub fn new(text: impl Into<String>) -> Self {
                    Self { text: text.into() }
                }
            }
        )+
    };
}

text_markup_constructors!(IndexEntry, Subscript, Superscript);

/// Discriminant of a markup node, used to check what a container allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    Break,
    Emphasis,
    IndexEntry,
    TechnicalTerm,
    Subscript,
    Superscript,
}

impl MarkupKind {
    /// The XML tag of this kind of markup.
    pub fn tag(&self) -> &'static str {
        match self {
            MarkupKind::Break => "BR",
            MarkupKind::Emphasis => "E",
            MarkupKind::IndexEntry => "IE",
            MarkupKind::TechnicalTerm => "TT",
            MarkupKind::Subscript => "SUB",
            MarkupKind::Superscript => "SUP",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "BR" => Some(MarkupKind::Break),
            "E" => Some(MarkupKind::Emphasis),
            "IE" => Some(MarkupKind::IndexEntry),
            "TT" => Some(MarkupKind::TechnicalTerm),
            "SUB" => Some(MarkupKind::Subscript),
            "SUP" => Some(MarkupKind::Superscript),
            _ => None,
        }
    }
}

/// One item of mixed content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    Text(String),
    Break(Break),
    Emphasis(EmphasisText),
    IndexEntry(IndexEntry),
    TechnicalTerm(TechnicalTerm),
    Subscript(Subscript),
    Superscript(Superscript),
}

impl Part {
    /// The markup kind, or `None` for a text run.
    pub fn markup_kind(&self) -> Option<MarkupKind> {
        match self {
            Part::Text(_) => None,
            Part::Break(_) => Some(MarkupKind::Break),
            Part::Emphasis(_) => Some(MarkupKind::Emphasis),
            Part::IndexEntry(_) => Some(MarkupKind::IndexEntry),
            Part::TechnicalTerm(_) => Some(MarkupKind::TechnicalTerm),
            Part::Subscript(_) => Some(MarkupKind::Subscript),
            Part::Superscript(_) => Some(MarkupKind::Superscript),
        }
    }

    /// The text run, if this part is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The text carried by this part, empty for `<BR/>`.
    pub fn text(&self) -> &str {
        match self {
            Part::Text(text) => text,
            Part::Break(_) => "",
            Part::Emphasis(e) => &e.text,
            Part::IndexEntry(e) => &e.text,
            Part::TechnicalTerm(e) => &e.text,
            Part::Subscript(e) => &e.text,
            Part::Superscript(e) => &e.text,
        }
    }
}

impl PartialEq<str> for Part {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Part {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Part::Text(text.to_string())
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Part::Text(text)
    }
}

macro_rules! part_from_markup {
    ($($ty:ident => $variant:ident),+) => {
        $(
            impl From<$ty> for Part {
                fn from(value: $ty) -> Self {
                    Part::$variant(value)
                }
            }
        )+
    };
}

part_from_markup!(
    Break => Break,
    EmphasisText => Emphasis,
    IndexEntry => IndexEntry,
    TechnicalTerm => TechnicalTerm,
    Subscript => Subscript,
    Superscript => Superscript
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_tags_round_trip() {
        for kind in [
            MarkupKind::Break,
            MarkupKind::Emphasis,
            MarkupKind::IndexEntry,
            MarkupKind::TechnicalTerm,
            MarkupKind::Subscript,
            MarkupKind::Superscript,
        ] {
            assert_eq!(MarkupKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(MarkupKind::from_tag("XREF"), None);
    }

    #[test]
    fn test_part_conversions() {
        let parts: Vec<Part> = vec!["Name ".into(), Subscript::new("x").into(), Break.into()];
        assert_eq!(parts[0], "Name ");
        assert_eq!(parts[1].markup_kind(), Some(MarkupKind::Subscript));
        assert_eq!(parts[1].text(), "x");
        assert_eq!(parts[2].text(), "");
    }
}
