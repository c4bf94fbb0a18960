//! The closed set of element types a document root can hold.

use serde::{Deserialize, Serialize};

use crate::admin_data::{AdminData, DocRevision, Modification};
use crate::common_structure::{AutosarEngineeringObject, Code, DataFilter};
use crate::date::DateValue;
use crate::documentation::{Annotation, DocumentationBlock};
use crate::language::{
    LanguageLongName, LanguageOverviewParagraph, LanguageParagraph, LanguagePlainText,
    LanguageVerbatim, MultiLanguageLongName, MultiLanguageOverviewParagraph,
    MultiLanguageParagraph, MultiLanguagePlainText, MultiLanguageVerbatim,
    SingleLanguageUnitNames,
};
use crate::markup::{Break, EmphasisText, IndexEntry, Subscript, Superscript, TechnicalTerm};
use crate::revision::RevisionLabel;
use crate::special_data::{SpecialDataElement, SpecialDataGroup, SpecialDataValue};

macro_rules! define_node {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// A parsed element of any supported type.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(tag = "type", content = "value")]
        pub enum Node {
            $($variant($ty)),+
        }

        impl Node {
            /// Name of the contained type.
            pub fn type_name(&self) -> &'static str {
                match self {
                    $(Node::$variant(_) => stringify!($variant)),+
                }
            }
        }

        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$variant(value)
                }
            }

            impl TryFrom<Node> for $ty {
                type Error = Node;

                fn try_from(node: Node) -> Result<Self, Node> {
                    match node {
                        Node::$variant(value) => Ok(value),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

define_node! {
    SpecialDataGroup(SpecialDataGroup),
    SpecialDataElement(SpecialDataElement),
    SpecialDataValue(SpecialDataValue),
    Modification(Modification),
    DocRevision(DocRevision),
    AdminData(AdminData),
    LanguageParagraph(LanguageParagraph),
    LanguageOverviewParagraph(LanguageOverviewParagraph),
    LanguageLongName(LanguageLongName),
    LanguageVerbatim(LanguageVerbatim),
    LanguagePlainText(LanguagePlainText),
    MultiLanguageParagraph(MultiLanguageParagraph),
    MultiLanguageOverviewParagraph(MultiLanguageOverviewParagraph),
    MultiLanguageLongName(MultiLanguageLongName),
    MultiLanguageVerbatim(MultiLanguageVerbatim),
    MultiLanguagePlainText(MultiLanguagePlainText),
    Break(Break),
    Emphasis(EmphasisText),
    IndexEntry(IndexEntry),
    TechnicalTerm(TechnicalTerm),
    Subscript(Subscript),
    Superscript(Superscript),
    UnitNames(SingleLanguageUnitNames),
    Date(DateValue),
    RevisionLabel(RevisionLabel),
    DataFilter(DataFilter),
    AutosarEngineeringObject(AutosarEngineeringObject),
    Code(Code),
    DocumentationBlock(DocumentationBlock),
    Annotation(Annotation),
}
