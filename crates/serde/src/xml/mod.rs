//! XML reading and writing for the AUTOSAR common-structure vocabulary.
//!
//! ## Architecture
//!
//! - **Reading**: quick-xml events are collected into a generic
//!   [`XmlElement`] tree ([`tree`]), which is then mapped onto model types by
//!   [`FromXml`] implementations ([`de`]). A root element of unknown type is
//!   dispatched on its tag name to produce a [`Node`](arxml_model::Node).
//! - **Writing**: [`ToXml`] implementations ([`ser`]) drive an [`XmlWriter`]
//!   that emits quick-xml events. The writer decides between a self-closing
//!   tag and an open/close pair only once it knows whether a child follows,
//!   so no type needs to precompute its own emptiness.
//!
//! ## Layout
//!
//! Block content (elements whose children are elements) is indented, two
//! spaces per level by default, each child on its own line:
//!
//! ```xml
//! <SDG GID="Outer">
//!   <SDG GID="Inner">
//!     <SD>Val</SD>
//!   </SDG>
//! </SDG>
//! ```
//!
//! Mixed content (language-tagged text and inline markup) is written on a
//! single line exactly as authored:
//!
//! ```xml
//! <L-4 L="EN">Name <SUB>x</SUB> more</L-4>
//! ```
//!
//! Attributes are always written in schema order.

pub mod de;
pub mod ser;
pub mod tree;
mod utils;

use arxml_model::BlockAttributes;
use quick_xml::events::BytesStart;

use crate::error::Result;

pub use de::{
    FromXml, XmlReader, from_xml_file, from_xml_reader, from_xml_str, read_file,
    read_fragment_str, read_str,
};
pub use ser::{
    ToXml, XmlWriter, to_xml_document_string, to_xml_string, to_xml_string_with_tag, to_xml_vec,
    to_xml_writer, write_xml_file,
};
pub use tree::{XmlContent, XmlElement};

/// Attributes carried by a multi-language wrapper element.
pub trait XmlAttributes: Sized {
    /// Attribute names in the order they are written.
    const NAMES: &'static [&'static str];

    fn write_attributes(&self, start: &mut BytesStart<'_>);

    fn read_attributes(element: &XmlElement) -> Result<Self>;
}

impl XmlAttributes for () {
    const NAMES: &'static [&'static str] = &[];

    fn write_attributes(&self, _start: &mut BytesStart<'_>) {}

    fn read_attributes(_element: &XmlElement) -> Result<Self> {
        Ok(())
    }
}

impl XmlAttributes for BlockAttributes {
    const NAMES: &'static [&'static str] = &["SI", "VIEW", "BREAK", "KEEP-WITH-PREVIOUS", "HELP-ENTRY"];

    fn write_attributes(&self, start: &mut BytesStart<'_>) {
        if let Some(si) = &self.si {
            start.push_attribute(("SI", si.as_str()));
        }
        if let Some(view) = &self.view {
            start.push_attribute(("VIEW", view.as_str()));
        }
        if let Some(page_break) = self.page_break {
            start.push_attribute(("BREAK", page_break.as_str()));
        }
        if let Some(keep) = self.keep_with_previous {
            start.push_attribute(("KEEP-WITH-PREVIOUS", keep.as_str()));
        }
        if let Some(help_entry) = &self.help_entry {
            start.push_attribute(("HELP-ENTRY", help_entry.as_str()));
        }
    }

    fn read_attributes(element: &XmlElement) -> Result<Self> {
        Ok(BlockAttributes {
            si: de::string_attr(element, "SI"),
            view: de::string_attr(element, "VIEW"),
            page_break: de::parse_attr(element, "BREAK")?,
            keep_with_previous: de::parse_attr(element, "KEEP-WITH-PREVIOUS")?,
            help_entry: de::string_attr(element, "HELP-ENTRY"),
        })
    }
}
