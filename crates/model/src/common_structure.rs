//! Common structure elements: data filters, engineering objects and code
//! descriptors.

use serde::{Deserialize, Serialize};

use crate::admin_data::AdminData;
use crate::enums::DataFilterType;
use crate::language::{MultiLanguageLongName, MultiLanguageOverviewParagraph};
use crate::revision::RevisionLabel;

/// `DATA-FILTER`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_filter_type: Option<DataFilterType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<u64>,
}

impl DataFilter {
    pub const TAG: &'static str = "DATA-FILTER";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_type(data_filter_type: DataFilterType) -> Self {
        Self {
            data_filter_type: Some(data_filter_type),
            ..Self::default()
        }
    }
}

/// `AUTOSAR-ENGINEERING-OBJECT`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutosarEngineeringObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub revision_labels: Vec<RevisionLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl AutosarEngineeringObject {
    pub const TAG: &'static str = "AUTOSAR-ENGINEERING-OBJECT";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            short_label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_revision_label(mut self, label: RevisionLabel) -> Self {
        self.revision_labels.push(label);
        self
    }
}

/// `CODE`: a named implementation artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    pub short_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_name: Option<MultiLanguageLongName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<MultiLanguageOverviewParagraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_data: Option<AdminData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifact_descriptors: Vec<AutosarEngineeringObject>,
}

impl Code {
    pub const TAG: &'static str = "CODE";

    pub fn new(short_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            long_name: None,
            desc: None,
            category: None,
            admin_data: None,
            artifact_descriptors: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_artifact_descriptor(mut self, descriptor: AutosarEngineeringObject) -> Self {
        self.artifact_descriptors.push(descriptor);
        self
    }

    pub fn with_admin_data(mut self, admin_data: AdminData) -> Self {
        self.admin_data = Some(admin_data);
        self
    }
}
