//! # arxml-serde
//!
//! Reads and writes [`arxml_model`] values as canonical AUTOSAR XML.
//!
//! ## Features
//!
//! - **XML reading**: typed reads (`from_xml_str::<T>`) where the caller
//!   names the expected type, and dispatching reads (`read_str`) that pick
//!   the [`Node`](arxml_model::Node) variant from the root tag.
//! - **XML writing**: deterministic output with schema child order, a fixed
//!   attribute order, `partial_escape` text and configurable indentation.
//! - **JSON**: thin wrappers over `serde_json` for every model type.
//!
//! ## Canonical layout
//!
//! | Content | Output |
//! |---------|--------|
//! | block element | children on their own lines, indented per level |
//! | mixed content | written inline, whitespace kept verbatim |
//! | empty element | self-closing (`<USED-LANGUAGES/>`) |
//! | empty `DISPLAY-NAME` | tag pair (`<DISPLAY-NAME></DISPLAY-NAME>`) |
//!
//! ## Examples
//!
//! ```
//! use arxml_model::{Language, MultiLanguageLongName};
//! use arxml_serde::{from_xml_str, to_xml_string};
//!
//! let name = MultiLanguageLongName::from_input((Language::En, "My Name"));
//! let xml = to_xml_string(&name).unwrap();
//! assert_eq!(xml, "<LONG-NAME>\n  <L-4 L=\"EN\">My Name</L-4>\n</LONG-NAME>");
//!
//! let back: MultiLanguageLongName = from_xml_str(&xml).unwrap();
//! assert_eq!(back, name);
//! ```

pub mod config;
pub mod error;
pub mod json;
pub mod xml;

pub use config::XmlConfig;
pub use error::{Result, SerdeError};

pub use json::{from_json_str, from_json_value, to_json_string, to_json_string_pretty, to_json_value};

pub use xml::{
    FromXml, ToXml, XmlReader, XmlWriter, from_xml_file, from_xml_reader, from_xml_str,
    read_file, read_fragment_str, read_str, to_xml_document_string, to_xml_string,
    to_xml_string_with_tag, to_xml_vec, to_xml_writer, write_xml_file,
};
