//! Administrative data: revisions, modifications and special data groups.

use serde::{Deserialize, Serialize};

use crate::date::DateValue;
use crate::enums::Language;
use crate::language::{
    MultiLanguageOverviewParagraph, MultiLanguagePlainText, OverviewParagraph, PlainText,
};
use crate::normalize::{LanguageInput, OneOrMany};
use crate::revision::RevisionLabel;
use crate::special_data::SpecialDataGroup;

/// `MODIFICATION`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<MultiLanguageOverviewParagraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<MultiLanguageOverviewParagraph>,
}

impl Modification {
    pub fn new() -> Self {
        Self::default()
    }

    /// A modification with only a change description.
    pub fn from_change(change: impl Into<OneOrMany<LanguageInput<OverviewParagraph>>>) -> Self {
        Self::new().with_change(change)
    }

    pub fn with_change(mut self, change: impl Into<OneOrMany<LanguageInput<OverviewParagraph>>>) -> Self {
        self.change = Some(MultiLanguageOverviewParagraph::from_input(change));
        self
    }

    pub fn with_reason(mut self, reason: impl Into<OneOrMany<LanguageInput<OverviewParagraph>>>) -> Self {
        self.reason = Some(MultiLanguageOverviewParagraph::from_input(reason));
        self
    }
}

/// `DOC-REVISION`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRevision {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_label: Option<RevisionLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_label_p1: Option<RevisionLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_label_p2: Option<RevisionLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifications: Vec<Modification>,
}

impl DocRevision {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_revision_label(mut self, label: RevisionLabel) -> Self {
        self.revision_label = Some(label);
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_issued_by(mut self, issued_by: impl Into<String>) -> Self {
        self.issued_by = Some(issued_by.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<DateValue>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_modification(mut self, modification: Modification) -> Self {
        self.modifications.push(modification);
        self
    }

    pub fn append_modification(&mut self, modification: Modification) {
        self.modifications.push(modification);
    }
}

/// `ADMIN-DATA`
///
/// An empty `used_languages` container is kept distinct from an absent one:
/// `Some` of an empty list is written as `<USED-LANGUAGES/>`, `None` writes
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_languages: Option<MultiLanguagePlainText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doc_revisions: Vec<DocRevision>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sdgs: Vec<SpecialDataGroup>,
}

impl AdminData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_used_languages(
        mut self,
        used_languages: impl Into<OneOrMany<LanguageInput<PlainText>>>,
    ) -> Self {
        self.used_languages = Some(MultiLanguagePlainText::from_input(used_languages));
        self
    }

    pub fn with_doc_revision(mut self, revision: DocRevision) -> Self {
        self.doc_revisions.push(revision);
        self
    }

    pub fn with_sdg(mut self, sdg: SpecialDataGroup) -> Self {
        self.sdgs.push(sdg);
        self
    }

    pub fn append_doc_revision(&mut self, revision: DocRevision) {
        self.doc_revisions.push(revision);
    }

    pub fn append_sdg(&mut self, sdg: SpecialDataGroup) {
        self.sdgs.push(sdg);
    }

    /// First group with the given `gid`, searched depth-first.
    pub fn find_sdg(&self, gid: &str) -> Option<&SpecialDataGroup> {
        fn find<'a>(group: &'a SpecialDataGroup, gid: &str) -> Option<&'a SpecialDataGroup> {
            if group.gid.as_deref() == Some(gid) {
                return Some(group);
            }
            group
                .content
                .iter()
                .filter_map(|item| item.as_group())
                .find_map(|nested| find(nested, gid))
        }

        self.sdgs.iter().find_map(|group| find(group, gid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_used_languages_empty_vs_absent() {
        let absent = AdminData::new();
        assert!(absent.used_languages.is_none());

        let empty = AdminData::new().with_used_languages(Vec::<LanguageInput<PlainText>>::new());
        assert_eq!(empty.used_languages.map(|u| u.len()), Some(0));
    }

    #[test]
    fn test_modification_from_pair() {
        let modification = Modification::from_change((Language::ForAll, "Made some changes"));
        let change = modification.change.unwrap();
        assert_eq!(change.items[0].language, Language::ForAll);
        assert_eq!(change.items[0].text(), "Made some changes");
        assert!(modification.reason.is_none());
    }

    #[test]
    fn test_find_nested_sdg() {
        let inner = SpecialDataGroup::with_gid("Inner");
        let mut outer = SpecialDataGroup::with_gid("Outer");
        outer.push(inner.clone());
        let admin = AdminData::new().with_sdg(outer);
        assert_eq!(admin.find_sdg("Inner"), Some(&inner));
        assert!(admin.find_sdg("Missing").is_none());
    }
}
