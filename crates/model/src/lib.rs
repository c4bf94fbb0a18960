//! # arxml-model
//!
//! In-memory model of the AUTOSAR common-structure and documentation
//! elements: admin data, special data groups, multi-language text blocks,
//! inline markup, dates and revision labels.
//!
//! The crate has no XML dependency. `arxml-serde` reads and writes these
//! types; this crate owns the scalar codecs, the content model and the
//! normalizer that turns flexible constructor input into canonical content.
//!
//! ```
//! use arxml_model::{AdminData, Language, SdgContentInput, SpecialDataGroup};
//!
//! let sdg = SpecialDataGroup::from_content(
//!     Some("Outer"),
//!     vec![SdgContentInput::from("text"), ("Inner", 2).into()],
//! )
//! .unwrap();
//! let admin = AdminData::new().with_language(Language::En).with_sdg(sdg);
//! assert_eq!(admin.sdgs[0].content.len(), 2);
//! ```

pub mod admin_data;
pub mod common_structure;
pub mod date;
pub mod documentation;
pub mod enums;
pub mod error;
pub mod language;
pub mod markup;
pub mod node;
pub mod normalize;
pub mod revision;
pub mod special_data;

pub use admin_data::{AdminData, DocRevision, Modification};
pub use common_structure::{AutosarEngineeringObject, Code, DataFilter};
pub use date::DateValue;
pub use documentation::{Annotation, DocumentationBlock, DocumentationItem};
pub use enums::{DataFilterType, EmphasisFont, EmphasisType, KeepWithPrevious, Language, PageBreak};
pub use error::{ModelError, Result};
pub use language::{
    BlockAttributes, Flavor, LanguageLongName, LanguageOverviewParagraph, LanguageParagraph,
    LanguagePlainText, LanguageTagged, LanguageVerbatim, LongName, MultiLanguage,
    MultiLanguageLongName, MultiLanguageOverviewParagraph, MultiLanguageParagraph,
    MultiLanguagePlainText, MultiLanguageVerbatim, OverviewParagraph, Paragraph, PlainText,
    SingleLanguageUnitNames, Verbatim,
};
pub use markup::{
    Break, EmphasisText, IndexEntry, MarkupKind, Part, Subscript, Superscript, TechnicalTerm,
};
pub use node::Node;
pub use normalize::{
    LanguageInput, OneOrMany, ScalarInput, SdgContentInput, normalize_multi_language,
    normalize_sdg_content,
};
pub use revision::RevisionLabel;
pub use special_data::{Numeric, SdgContent, SpecialDataElement, SpecialDataGroup, SpecialDataValue};
