//! Documentation blocks and annotations.

use serde::{Deserialize, Serialize};

use crate::language::{MultiLanguageLongName, MultiLanguageParagraph, MultiLanguageVerbatim};

/// One item of a documentation block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentationItem {
    Paragraph(MultiLanguageParagraph),
    Verbatim(MultiLanguageVerbatim),
}

impl From<MultiLanguageParagraph> for DocumentationItem {
    fn from(value: MultiLanguageParagraph) -> Self {
        DocumentationItem::Paragraph(value)
    }
}

impl From<MultiLanguageVerbatim> for DocumentationItem {
    fn from(value: MultiLanguageVerbatim) -> Self {
        DocumentationItem::Verbatim(value)
    }
}

/// Ordered `P`/`VERBATIM` content, written as `ANNOTATION-TEXT`,
/// `INTRODUCTION` or another caller-chosen tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationBlock {
    #[serde(default)]
    pub items: Vec<DocumentationItem>,
}

impl DocumentationBlock {
    pub const DEFAULT_TAG: &'static str = "ANNOTATION-TEXT";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: impl Into<DocumentationItem>) {
        self.items.push(item.into());
    }

    pub fn with(mut self, item: impl Into<DocumentationItem>) -> Self {
        self.push(item);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `ANNOTATION`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<MultiLanguageLongName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_text: Option<DocumentationBlock>,
}

impl Annotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<MultiLanguageLongName>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.annotation_origin = Some(origin.into());
        self
    }

    pub fn with_text(mut self, text: DocumentationBlock) -> Self {
        self.annotation_text = Some(text);
        self
    }
}
