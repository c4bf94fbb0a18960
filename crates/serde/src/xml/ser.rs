//! XML writer for model types.
//!
//! [`XmlWriter`] wraps a quick-xml [`Writer`] and owns the layout rules:
//! block indentation, single-line mixed content and the choice between a
//! self-closing tag and an open/close pair. [`ToXml`] implementations only
//! describe which children and attributes to write, in schema order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use arxml_model::{
    AdminData, Annotation, AutosarEngineeringObject, Break, Code, DataFilter, DateValue,
    DocRevision, DocumentationBlock, DocumentationItem, EmphasisText, Flavor, IndexEntry,
    LanguageTagged, Modification, MultiLanguage, Node, Part, RevisionLabel, SdgContent,
    SingleLanguageUnitNames, SpecialDataElement, SpecialDataGroup, SpecialDataValue, Subscript,
    Superscript, TechnicalTerm,
};
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use crate::config::XmlConfig;
use crate::error::{Result, SerdeError};
use crate::xml::XmlAttributes;

/// A model type that can be written as an XML element.
///
/// The tag is chosen by the caller so one type can serve several schema
/// roles, e.g. a multi-language overview paragraph written as `DESC`,
/// `CHANGE` or `REASON`.
pub trait ToXml {
    /// Tag used when the caller does not override it.
    fn default_tag(&self) -> &'static str;

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()>;
}

/// A block element whose start tag has not been written yet.
struct OpenBlock {
    name: String,
    pending: Option<BytesStart<'static>>,
}

/// Event writer that applies the canonical layout.
pub struct XmlWriter<W: Write> {
    writer: Writer<W>,
    config: XmlConfig,
    open: Vec<OpenBlock>,
}

impl<W: Write> XmlWriter<W> {
    /// Creates a writer with the default configuration.
    pub fn new(inner: W) -> Self {
        Self::with_config(inner, XmlConfig::default())
    }

    pub fn with_config(inner: W, config: XmlConfig) -> Self {
        Self {
            writer: Writer::new(inner),
            config,
            open: Vec::new(),
        }
    }

    pub fn config(&self) -> &XmlConfig {
        &self.config
    }

    /// Writes `value` under its default tag.
    pub fn write<T: ToXml + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.write_with_tag(value, value.default_tag())
    }

    /// Writes `value` under `tag`.
    pub fn write_with_tag<T: ToXml + ?Sized>(&mut self, value: &T, tag: &str) -> Result<()> {
        if self.open.is_empty() {
            debug!(tag, "writing element");
        }
        value.write_xml(tag, self)
    }

    /// Writes a complete document: optional declaration, root, final newline.
    pub fn write_document<T: ToXml + ?Sized>(&mut self, value: &T) -> Result<()> {
        if self.config.xml_declaration {
            self.writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
            self.raw_layout("\n")?;
        }
        self.write(value)?;
        self.raw_layout("\n")
    }

    /// Finishes writing and returns the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        if let Some(block) = self.open.last() {
            return Err(SerdeError::Custom(format!(
                "element <{}> was never closed",
                block.name
            )));
        }
        Ok(self.writer.into_inner())
    }

    /// Opens a block element. Its start tag is deferred until the first
    /// child, so a block that stays empty is written self-closing.
    pub fn start_block(&mut self, start: BytesStart<'static>) -> Result<()> {
        self.begin_child()?;
        let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
        self.open.push(OpenBlock {
            name,
            pending: Some(start),
        });
        Ok(())
    }

    pub fn end_block(&mut self) -> Result<()> {
        let block = self
            .open
            .pop()
            .ok_or_else(|| SerdeError::Custom("end_block without an open block".to_string()))?;
        match block.pending {
            Some(start) => self.writer.write_event(Event::Empty(start))?,
            None => {
                let indent = format!("\n{}", self.config.indent(self.open.len()));
                self.raw_layout(&indent)?;
                self.writer.write_event(Event::End(BytesEnd::new(block.name)))?;
            }
        }
        Ok(())
    }

    /// Writes a block element whose children are produced by `body`.
    pub fn block<F>(&mut self, start: BytesStart<'static>, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.start_block(start)?;
        body(self)?;
        self.end_block()
    }

    /// Writes a simple-content element, self-closing when `text` is empty.
    pub fn text_element(&mut self, start: BytesStart<'static>, text: &str) -> Result<()> {
        self.begin_child()?;
        self.inline(start, text)
    }

    pub fn optional_text_element(&mut self, tag: &str, text: Option<&str>) -> Result<()> {
        match text {
            Some(text) => self.text_element(BytesStart::new(tag.to_string()), text),
            None => Ok(()),
        }
    }

    /// Writes a mixed-content element on one line.
    ///
    /// With `empty_as_pair` an element without parts is written as
    /// `<TAG></TAG>` instead of `<TAG/>`.
    pub fn mixed_element(
        &mut self,
        start: BytesStart<'static>,
        parts: &[Part],
        empty_as_pair: bool,
    ) -> Result<()> {
        self.begin_child()?;
        if parts.is_empty() && !empty_as_pair {
            self.writer.write_event(Event::Empty(start))?;
            return Ok(());
        }
        let end = start.to_end().into_owned();
        self.writer.write_event(Event::Start(start))?;
        for part in parts {
            self.write_part(part)?;
        }
        self.writer.write_event(Event::End(end))?;
        Ok(())
    }

    /// Writes a child of a mixed-content element. No layout is added.
    pub fn write_part(&mut self, part: &Part) -> Result<()> {
        match part {
            Part::Text(text) => self.text(text),
            Part::Break(_) => {
                self.writer.write_event(Event::Empty(BytesStart::new("BR")))?;
                Ok(())
            }
            Part::Emphasis(e) => self.inline(emphasis_start("E", e), &e.text),
            Part::IndexEntry(e) => self.inline(BytesStart::new("IE"), &e.text),
            Part::TechnicalTerm(e) => self.inline(technical_term_start("TT", e), &e.text),
            Part::Subscript(e) => self.inline(BytesStart::new("SUB"), &e.text),
            Part::Superscript(e) => self.inline(BytesStart::new("SUP"), &e.text),
        }
    }

    /// Moves to the line of the next child of the innermost open block,
    /// writing the block's deferred start tag first.
    fn begin_child(&mut self) -> Result<()> {
        let depth = self.open.len();
        if let Some(parent) = self.open.last_mut() {
            if let Some(start) = parent.pending.take() {
                self.writer.write_event(Event::Start(start))?;
            }
            let indent = format!("\n{}", self.config.indent(depth));
            self.writer
                .write_event(Event::Text(BytesText::from_escaped(indent)))?;
        }
        Ok(())
    }

    fn inline(&mut self, start: BytesStart<'static>, text: &str) -> Result<()> {
        if text.is_empty() {
            self.writer.write_event(Event::Empty(start))?;
            return Ok(());
        }
        let end = start.to_end().into_owned();
        self.writer.write_event(Event::Start(start))?;
        self.text(text)?;
        self.writer.write_event(Event::End(end))?;
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
        Ok(())
    }

    fn raw_layout(&mut self, layout: &str) -> Result<()> {
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(layout)))?;
        Ok(())
    }
}

fn start(tag: &str) -> BytesStart<'static> {
    BytesStart::new(tag.to_string())
}

fn start_with_gid(tag: &str, gid: Option<&str>) -> BytesStart<'static> {
    let mut start = start(tag);
    if let Some(gid) = gid {
        start.push_attribute(("GID", gid));
    }
    start
}

fn emphasis_start(tag: &str, emphasis: &EmphasisText) -> BytesStart<'static> {
    let mut start = start(tag);
    if let Some(color) = &emphasis.color {
        start.push_attribute(("COLOR", color.as_str()));
    }
    if let Some(font) = emphasis.font {
        start.push_attribute(("FONT", font.as_str()));
    }
    if let Some(emphasis_type) = emphasis.emphasis_type {
        start.push_attribute(("TYPE", emphasis_type.as_str()));
    }
    start
}

fn technical_term_start(tag: &str, term: &TechnicalTerm) -> BytesStart<'static> {
    let mut start = start(tag);
    if let Some(tex_render) = &term.tex_render {
        start.push_attribute(("TEX-RENDER", tex_render.as_str()));
    }
    if let Some(term_type) = &term.term_type {
        start.push_attribute(("TYPE", term_type.as_str()));
    }
    start
}

fn write_optional<T, W>(writer: &mut XmlWriter<W>, tag: &str, value: Option<&T>) -> Result<()>
where
    T: ToXml,
    W: Write,
{
    match value {
        Some(value) => writer.write_with_tag(value, tag),
        None => Ok(()),
    }
}

/// Writes `items` inside a `tag` wrapper, or nothing when there are none.
fn write_list<T, W>(writer: &mut XmlWriter<W>, tag: &str, items: &[T]) -> Result<()>
where
    T: ToXml,
    W: Write,
{
    if items.is_empty() {
        return Ok(());
    }
    writer.block(start(tag), |w| {
        for item in items {
            w.write(item)?;
        }
        Ok(())
    })
}

impl ToXml for Break {
    fn default_tag(&self) -> &'static str {
        "BR"
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.text_element(start(tag), "")
    }
}

impl ToXml for EmphasisText {
    fn default_tag(&self) -> &'static str {
        "E"
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.text_element(emphasis_start(tag, self), &self.text)
    }
}

impl ToXml for TechnicalTerm {
    fn default_tag(&self) -> &'static str {
        "TT"
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.text_element(technical_term_start(tag, self), &self.text)
    }
}

macro_rules! plain_markup_to_xml {
    ($($ty:ty => $tag:literal),+) => {
        $(
            impl ToXml for $ty {
                fn default_tag(&self) -> &'static str {
                    $tag
                }

                fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
                    writer.text_element(start(tag), &self.text)
                }
            }
        )+
    };
}

plain_markup_to_xml!(IndexEntry => "IE", Subscript => "SUB", Superscript => "SUP");

impl<F: Flavor> ToXml for LanguageTagged<F> {
    fn default_tag(&self) -> &'static str {
        F::TAG
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        let mut start = start(tag);
        start.push_attribute(("L", self.language.as_str()));
        writer.mixed_element(start, self.parts(), false)
    }
}

impl<F> ToXml for MultiLanguage<F>
where
    F: Flavor,
    F::Attributes: XmlAttributes,
{
    fn default_tag(&self) -> &'static str {
        F::CONTAINER_TAG
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        let mut start = start(tag);
        self.attributes.write_attributes(&mut start);
        writer.block(start, |w| {
            for item in &self.items {
                w.write(item)?;
            }
            Ok(())
        })
    }
}

impl ToXml for SingleLanguageUnitNames {
    fn default_tag(&self) -> &'static str {
        SingleLanguageUnitNames::TAG
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.mixed_element(start(tag), self.parts(), true)
    }
}

impl ToXml for SpecialDataElement {
    fn default_tag(&self) -> &'static str {
        "SD"
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.text_element(start_with_gid(tag, self.gid.as_deref()), &self.value)
    }
}

impl ToXml for SpecialDataValue {
    fn default_tag(&self) -> &'static str {
        "SDF"
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        let value = self.value.to_string();
        writer.text_element(start_with_gid(tag, self.gid.as_deref()), &value)
    }
}

impl ToXml for SdgContent {
    fn default_tag(&self) -> &'static str {
        match self {
            SdgContent::Element(e) => e.default_tag(),
            SdgContent::Value(v) => v.default_tag(),
            SdgContent::Group(g) => g.default_tag(),
        }
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        match self {
            SdgContent::Element(e) => e.write_xml(tag, writer),
            SdgContent::Value(v) => v.write_xml(tag, writer),
            SdgContent::Group(g) => g.write_xml(tag, writer),
        }
    }
}

impl ToXml for SpecialDataGroup {
    fn default_tag(&self) -> &'static str {
        "SDG"
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.block(start_with_gid(tag, self.gid.as_deref()), |w| {
            write_optional(w, "SDG-CAPTION", self.caption.as_ref())?;
            for item in &self.content {
                w.write(item)?;
            }
            Ok(())
        })
    }
}

impl ToXml for DateValue {
    fn default_tag(&self) -> &'static str {
        "DATE"
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.text_element(start(tag), &self.to_string())
    }
}

impl ToXml for RevisionLabel {
    fn default_tag(&self) -> &'static str {
        "REVISION-LABEL"
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.text_element(start(tag), self.as_str())
    }
}

impl ToXml for Modification {
    fn default_tag(&self) -> &'static str {
        "MODIFICATION"
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.block(start(tag), |w| {
            write_optional(w, "CHANGE", self.change.as_ref())?;
            write_optional(w, "REASON", self.reason.as_ref())
        })
    }
}

impl ToXml for DocRevision {
    fn default_tag(&self) -> &'static str {
        "DOC-REVISION"
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.block(start(tag), |w| {
            write_optional(w, "REVISION-LABEL", self.revision_label.as_ref())?;
            write_optional(w, "REVISION-LABEL-P1", self.revision_label_p1.as_ref())?;
            write_optional(w, "REVISION-LABEL-P2", self.revision_label_p2.as_ref())?;
            w.optional_text_element("STATE", self.state.as_deref())?;
            w.optional_text_element("ISSUED-BY", self.issued_by.as_deref())?;
            write_optional(w, "DATE", self.date.as_ref())?;
            write_list(w, "MODIFICATIONS", &self.modifications)
        })
    }
}

impl ToXml for AdminData {
    fn default_tag(&self) -> &'static str {
        "ADMIN-DATA"
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.block(start(tag), |w| {
            w.optional_text_element("LANGUAGE", self.language.map(|l| l.as_str()))?;
            write_optional(w, "USED-LANGUAGES", self.used_languages.as_ref())?;
            write_list(w, "DOC-REVISIONS", &self.doc_revisions)?;
            write_list(w, "SDGS", &self.sdgs)
        })
    }
}

impl ToXml for DocumentationItem {
    fn default_tag(&self) -> &'static str {
        match self {
            DocumentationItem::Paragraph(p) => p.default_tag(),
            DocumentationItem::Verbatim(v) => v.default_tag(),
        }
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        match self {
            DocumentationItem::Paragraph(p) => p.write_xml(tag, writer),
            DocumentationItem::Verbatim(v) => v.write_xml(tag, writer),
        }
    }
}

impl ToXml for DocumentationBlock {
    fn default_tag(&self) -> &'static str {
        DocumentationBlock::DEFAULT_TAG
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.block(start(tag), |w| {
            for item in &self.items {
                w.write(item)?;
            }
            Ok(())
        })
    }
}

impl ToXml for Annotation {
    fn default_tag(&self) -> &'static str {
        "ANNOTATION"
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.block(start(tag), |w| {
            write_optional(w, "LABEL", self.label.as_ref())?;
            w.optional_text_element("ANNOTATION-ORIGIN", self.annotation_origin.as_deref())?;
            write_optional(w, "ANNOTATION-TEXT", self.annotation_text.as_ref())
        })
    }
}

impl ToXml for DataFilter {
    fn default_tag(&self) -> &'static str {
        DataFilter::TAG
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        let numbers = [
            ("MASK", self.mask.map(|v| v.to_string())),
            ("MAX", self.max.map(|v| v.to_string())),
            ("MIN", self.min.map(|v| v.to_string())),
            ("OFFSET", self.offset.map(|v| v.to_string())),
            ("PERIOD", self.period.map(|v| v.to_string())),
            ("X", self.x.map(|v| v.to_string())),
        ];
        writer.block(start(tag), |w| {
            w.optional_text_element(
                "DATA-FILTER-TYPE",
                self.data_filter_type.map(|t| t.as_str()),
            )?;
            for (child, value) in &numbers {
                w.optional_text_element(child, value.as_deref())?;
            }
            Ok(())
        })
    }
}

impl ToXml for AutosarEngineeringObject {
    fn default_tag(&self) -> &'static str {
        AutosarEngineeringObject::TAG
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.block(start(tag), |w| {
            w.optional_text_element("SHORT-LABEL", self.short_label.as_deref())?;
            w.optional_text_element("CATEGORY", self.category.as_deref())?;
            write_list(w, "REVISION-LABELS", &self.revision_labels)?;
            w.optional_text_element("DOMAIN", self.domain.as_deref())
        })
    }
}

impl ToXml for Code {
    fn default_tag(&self) -> &'static str {
        Code::TAG
    }

    fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
        writer.block(start(tag), |w| {
            w.text_element(start("SHORT-NAME"), &self.short_name)?;
            write_optional(w, "LONG-NAME", self.long_name.as_ref())?;
            write_optional(w, "DESC", self.desc.as_ref())?;
            w.optional_text_element("CATEGORY", self.category.as_deref())?;
            write_optional(w, "ADMIN-DATA", self.admin_data.as_ref())?;
            write_list(w, "ARTIFACT-DESCRIPTORS", &self.artifact_descriptors)
        })
    }
}

macro_rules! node_to_xml {
    ($($variant:ident),+ $(,)?) => {
        impl ToXml for Node {
            fn default_tag(&self) -> &'static str {
                match self {
                    $(Node::$variant(value) => value.default_tag()),+
                }
            }

            fn write_xml<W: Write>(&self, tag: &str, writer: &mut XmlWriter<W>) -> Result<()> {
                match self {
                    $(Node::$variant(value) => value.write_xml(tag, writer)),+
                }
            }
        }
    };
}

node_to_xml!(
    SpecialDataGroup,
    SpecialDataElement,
    SpecialDataValue,
    Modification,
    DocRevision,
    AdminData,
    LanguageParagraph,
    LanguageOverviewParagraph,
    LanguageLongName,
    LanguageVerbatim,
    LanguagePlainText,
    MultiLanguageParagraph,
    MultiLanguageOverviewParagraph,
    MultiLanguageLongName,
    MultiLanguageVerbatim,
    MultiLanguagePlainText,
    Break,
    Emphasis,
    IndexEntry,
    TechnicalTerm,
    Subscript,
    Superscript,
    UnitNames,
    Date,
    RevisionLabel,
    DataFilter,
    AutosarEngineeringObject,
    Code,
    DocumentationBlock,
    Annotation,
);

/// Serializes `value` under its default tag.
///
/// # Examples
///
/// ```
/// use arxml_model::SpecialDataGroup;
/// use arxml_serde::to_xml_string;
///
/// assert_eq!(to_xml_string(&SpecialDataGroup::new()).unwrap(), "<SDG/>");
/// ```
pub fn to_xml_string<T: ToXml + ?Sized>(value: &T) -> Result<String> {
    to_xml_string_with_tag(value, value.default_tag())
}

/// Serializes `value` under a caller-chosen tag.
pub fn to_xml_string_with_tag<T: ToXml + ?Sized>(value: &T, tag: &str) -> Result<String> {
    let mut writer = XmlWriter::new(Vec::new());
    writer.write_with_tag(value, tag)?;
    into_string(writer.into_inner()?)
}

/// Serializes `value` to an XML byte vector.
pub fn to_xml_vec<T: ToXml + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut writer = XmlWriter::new(Vec::new());
    writer.write(value)?;
    writer.into_inner()
}

/// Serializes `value` into `sink`.
pub fn to_xml_writer<T, W>(value: &T, sink: W) -> Result<()>
where
    T: ToXml + ?Sized,
    W: Write,
{
    let mut writer = XmlWriter::new(sink);
    writer.write(value)?;
    writer.into_inner()?.flush()?;
    Ok(())
}

/// Serializes `value` as a complete document, honouring
/// [`XmlConfig::xml_declaration`].
pub fn to_xml_document_string<T: ToXml + ?Sized>(value: &T, config: &XmlConfig) -> Result<String> {
    let mut writer = XmlWriter::with_config(Vec::new(), config.clone());
    writer.write_document(value)?;
    into_string(writer.into_inner()?)
}

/// Writes `value` as a complete document to the file at `path`.
pub fn write_xml_file<T, P>(value: &T, path: P, config: &XmlConfig) -> Result<()>
where
    T: ToXml + ?Sized,
    P: AsRef<Path>,
{
    let file = File::create(path.as_ref())?;
    let mut writer = XmlWriter::with_config(BufWriter::new(file), config.clone());
    writer.write_document(value)?;
    writer.into_inner()?.flush()?;
    Ok(())
}

fn into_string(buffer: Vec<u8>) -> Result<String> {
    String::from_utf8(buffer).map_err(|e| SerdeError::Custom(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arxml_model::{Language, LanguageLongName, MultiLanguagePlainText};

    #[test]
    fn test_empty_block_self_closes() {
        assert_eq!(to_xml_string(&AdminData::new()).unwrap(), "<ADMIN-DATA/>");
        let sdg = SpecialDataGroup::with_gid("MyGID");
        assert_eq!(to_xml_string(&sdg).unwrap(), r#"<SDG GID="MyGID"/>"#);
    }

    #[test]
    fn test_nested_indentation() {
        let mut inner = SpecialDataGroup::with_gid("Inner");
        inner.push(SpecialDataElement::new("Val"));
        let mut outer = SpecialDataGroup::with_gid("Outer");
        outer.push(inner);
        let expected = r#"<SDG GID="Outer">
  <SDG GID="Inner">
    <SD>Val</SD>
  </SDG>
</SDG>"#;
        assert_eq!(to_xml_string(&outer).unwrap(), expected);
    }

    #[test]
    fn test_indent_width_from_config() {
        let mut sdg = SpecialDataGroup::new();
        sdg.push(SpecialDataElement::new("x"));
        let config = XmlConfig {
            indent_width: 4,
            ..Default::default()
        };
        let mut writer = XmlWriter::with_config(Vec::new(), config);
        writer.write(&sdg).unwrap();
        let xml = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(xml, "<SDG>\n    <SD>x</SD>\n</SDG>");
    }

    #[test]
    fn test_text_is_escaped() {
        let sd = SpecialDataElement::new("a < b & \"c\"").with_gid("x\"y");
        assert_eq!(
            to_xml_string(&sd).unwrap(),
            r#"<SD GID="x&quot;y">a &lt; b &amp; "c"</SD>"#
        );
    }

    #[test]
    fn test_tag_override() {
        let used = MultiLanguagePlainText::from_input(Language::Fr);
        assert_eq!(
            to_xml_string_with_tag(&used, "USED-LANGUAGES").unwrap(),
            "<USED-LANGUAGES>\n  <L-10 L=\"FR\"/>\n</USED-LANGUAGES>"
        );
        let long_name = LanguageLongName::with_text(Language::En, "Name");
        assert_eq!(
            to_xml_string(&long_name).unwrap(),
            r#"<L-4 L="EN">Name</L-4>"#
        );
        assert_eq!(
            to_xml_string_with_tag(&long_name, "L-4").unwrap(),
            to_xml_string(&long_name).unwrap()
        );
    }

    #[test]
    fn test_document_declaration() {
        let config = XmlConfig {
            xml_declaration: true,
            ..Default::default()
        };
        let xml = to_xml_document_string(&SpecialDataGroup::new(), &config).unwrap();
        assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<SDG/>\n");

        let xml = to_xml_document_string(&SpecialDataGroup::new(), &XmlConfig::default()).unwrap();
        assert_eq!(xml, "<SDG/>\n");
    }
}
