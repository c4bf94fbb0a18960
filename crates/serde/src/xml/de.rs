//! XML reader for model types.
//!
//! Input is parsed into an [`XmlElement`] tree first. [`FromXml`]
//! implementations then build typed values from it: attributes go through
//! their scalar codec, block elements are checked child by child, and mixed
//! content is rebuilt part by part with its whitespace intact.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use arxml_model::{
    AdminData, Annotation, AutosarEngineeringObject, Break, Code, DataFilter, DateValue,
    DocRevision, DocumentationBlock, EmphasisText, Flavor, IndexEntry, Language, LanguageLongName,
    LanguageOverviewParagraph, LanguageParagraph, LanguagePlainText, LanguageTagged,
    LanguageVerbatim, MarkupKind, ModelError, Modification, MultiLanguage,
    MultiLanguageLongName, MultiLanguageOverviewParagraph, MultiLanguageParagraph,
    MultiLanguagePlainText, MultiLanguageVerbatim, Node, Numeric, Part, RevisionLabel,
    SdgContent, SingleLanguageUnitNames, SpecialDataElement, SpecialDataGroup, SpecialDataValue,
    Subscript, Superscript, TechnicalTerm,
};
use once_cell::sync::Lazy;
use tracing::{debug, trace, warn};

use crate::config::XmlConfig;
use crate::error::{Result, SerdeError};
use crate::xml::XmlAttributes;
use crate::xml::tree::{XmlContent, XmlElement};
use crate::xml::utils;

/// A model type that can be built from an XML element.
///
/// The element's own tag is not checked: the caller that chose this type
/// already matched it, which lets one type be read from several tags.
pub trait FromXml: Sized {
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self>;
}

/// Reads `name` as a plain string attribute.
pub(crate) fn string_attr(element: &XmlElement, name: &str) -> Option<String> {
    element.attribute(name).map(str::to_string)
}

/// Reads `name` through its scalar codec.
pub(crate) fn parse_attr<T>(element: &XmlElement, name: &str) -> Result<Option<T>>
where
    T: FromStr<Err = ModelError>,
{
    let Some(value) = element.attribute(name) else {
        return Ok(None);
    };
    value
        .parse()
        .map(Some)
        .map_err(|source| SerdeError::AttributeFormat {
            element: element.name.clone(),
            attribute: name.to_string(),
            value: value.to_string(),
            source,
        })
}

/// Logs attributes this reader does not know. They are dropped.
fn check_attributes(element: &XmlElement, known: &[&str]) {
    for (key, value) in &element.attributes {
        if !known.contains(&key.as_str()) && !key.starts_with("xmlns") {
            warn!(element = %element.name, attribute = %key, %value, "ignoring unknown attribute");
        }
    }
}

/// Text content of a simple-content element.
fn simple_text(element: &XmlElement) -> Result<String> {
    if let Some(child) = element.child_elements().next() {
        return Err(SerdeError::unexpected_element(&element.name, &child.name));
    }
    Ok(element.text())
}

fn parse_text<T>(element: &XmlElement) -> Result<T>
where
    T: FromStr<Err = ModelError>,
{
    Ok(simple_text(element)?.parse()?)
}

fn parse_integer<T: FromStr>(element: &XmlElement, kind: &'static str) -> Result<T> {
    let text = simple_text(element)?;
    text.parse().map_err(|_| {
        SerdeError::Model(ModelError::Format {
            kind,
            value: text.clone(),
        })
    })
}

/// Child elements of a block element.
///
/// Whitespace between children is layout. Other text is rejected in strict
/// mode and otherwise dropped with a warning.
fn block_children<'a>(element: &'a XmlElement, config: &XmlConfig) -> Result<Vec<&'a XmlElement>> {
    let mut children = Vec::new();
    for child in &element.children {
        match child {
            XmlContent::Element(child) => {
                trace!(parent = %element.name, child = %child.name, "dispatching child");
                children.push(child);
            }
            XmlContent::Text(text) if utils::is_whitespace(text) => {}
            XmlContent::Text(text) => {
                if config.strict_block_text {
                    return Err(SerdeError::UnexpectedText {
                        element: element.name.clone(),
                        text: utils::excerpt(text),
                    });
                }
                warn!(element = %element.name, text = %utils::excerpt(text), "dropping stray text in block element");
            }
        }
    }
    Ok(children)
}

/// Tracks children that may occur at most once under their parent.
struct Singletons<'a> {
    parent: &'a str,
    seen: Vec<&'a str>,
}

impl<'a> Singletons<'a> {
    fn new(parent: &'a XmlElement) -> Self {
        Self {
            parent: &parent.name,
            seen: Vec::new(),
        }
    }

    /// Records `child`, failing if its tag was already seen.
    fn claim(&mut self, child: &'a XmlElement) -> Result<()> {
        if self.seen.contains(&child.name.as_str()) {
            return Err(SerdeError::unexpected_element(self.parent, &child.name));
        }
        self.seen.push(&child.name);
        Ok(())
    }
}

fn read_markup(element: &XmlElement, kind: MarkupKind, config: &XmlConfig) -> Result<Part> {
    let part = match kind {
        MarkupKind::Break => {
            simple_text(element)?;
            Part::Break(Break)
        }
        MarkupKind::Emphasis => Part::Emphasis(EmphasisText::from_xml(element, config)?),
        MarkupKind::IndexEntry => Part::IndexEntry(IndexEntry::new(simple_text(element)?)),
        MarkupKind::TechnicalTerm => Part::TechnicalTerm(TechnicalTerm::from_xml(element, config)?),
        MarkupKind::Subscript => Part::Subscript(Subscript::new(simple_text(element)?)),
        MarkupKind::Superscript => Part::Superscript(Superscript::new(simple_text(element)?)),
    };
    Ok(part)
}

/// Rebuilds mixed content, keeping text runs exactly as written.
fn read_parts(element: &XmlElement, allowed: &[MarkupKind], config: &XmlConfig) -> Result<Vec<Part>> {
    let mut parts = Vec::with_capacity(element.children.len());
    for child in &element.children {
        match child {
            XmlContent::Text(text) => parts.push(Part::Text(text.clone())),
            XmlContent::Element(child) => {
                let kind = MarkupKind::from_tag(&child.name)
                    .filter(|kind| allowed.contains(kind))
                    .ok_or_else(|| SerdeError::unexpected_element(&element.name, &child.name))?;
                parts.push(read_markup(child, kind, config)?);
            }
        }
    }
    Ok(parts)
}

impl FromXml for Break {
    fn from_xml(element: &XmlElement, _config: &XmlConfig) -> Result<Self> {
        simple_text(element)?;
        Ok(Break)
    }
}

impl FromXml for EmphasisText {
    fn from_xml(element: &XmlElement, _config: &XmlConfig) -> Result<Self> {
        check_attributes(element, &["COLOR", "FONT", "TYPE"]);
        Ok(EmphasisText {
            text: simple_text(element)?,
            color: string_attr(element, "COLOR"),
            font: parse_attr(element, "FONT")?,
            emphasis_type: parse_attr(element, "TYPE")?,
        })
    }
}

impl FromXml for TechnicalTerm {
    fn from_xml(element: &XmlElement, _config: &XmlConfig) -> Result<Self> {
        check_attributes(element, &["TEX-RENDER", "TYPE"]);
        Ok(TechnicalTerm {
            text: simple_text(element)?,
            tex_render: string_attr(element, "TEX-RENDER"),
            term_type: string_attr(element, "TYPE"),
        })
    }
}

impl FromXml for IndexEntry {
    fn from_xml(element: &XmlElement, _config: &XmlConfig) -> Result<Self> {
        Ok(IndexEntry::new(simple_text(element)?))
    }
}

impl FromXml for Subscript {
    fn from_xml(element: &XmlElement, _config: &XmlConfig) -> Result<Self> {
        Ok(Subscript::new(simple_text(element)?))
    }
}

impl FromXml for Superscript {
    fn from_xml(element: &XmlElement, _config: &XmlConfig) -> Result<Self> {
        Ok(Superscript::new(simple_text(element)?))
    }
}

impl<F: Flavor> FromXml for LanguageTagged<F> {
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self> {
        check_attributes(element, &["L"]);
        let language = parse_attr(element, "L")?.ok_or_else(|| SerdeError::MissingAttribute {
            element: element.name.clone(),
            attribute: "L".to_string(),
        })?;
        let parts = read_parts(element, F::ALLOWED_MARKUP, config)?;
        Ok(LanguageTagged::from_parts(language, parts)?)
    }
}

impl<F> FromXml for MultiLanguage<F>
where
    F: Flavor,
    F::Attributes: XmlAttributes,
{
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self> {
        check_attributes(element, F::Attributes::NAMES);
        let mut container = MultiLanguage::new().with_attributes(F::Attributes::read_attributes(element)?);
        for child in block_children(element, config)? {
            if child.name != F::TAG {
                return Err(SerdeError::unexpected_element(&element.name, &child.name));
            }
            container.push(LanguageTagged::from_xml(child, config)?);
        }
        Ok(container)
    }
}

impl FromXml for SingleLanguageUnitNames {
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self> {
        let parts = read_parts(element, &[MarkupKind::Subscript, MarkupKind::Superscript], config)?;
        Ok(SingleLanguageUnitNames::from_parts(parts)?)
    }
}

impl FromXml for SpecialDataElement {
    fn from_xml(element: &XmlElement, _config: &XmlConfig) -> Result<Self> {
        check_attributes(element, &["GID"]);
        Ok(SpecialDataElement {
            value: simple_text(element)?,
            gid: string_attr(element, "GID"),
        })
    }
}

impl FromXml for SpecialDataValue {
    fn from_xml(element: &XmlElement, _config: &XmlConfig) -> Result<Self> {
        check_attributes(element, &["GID"]);
        Ok(SpecialDataValue {
            value: parse_text::<Numeric>(element)?,
            gid: string_attr(element, "GID"),
        })
    }
}

impl FromXml for SpecialDataGroup {
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self> {
        check_attributes(element, &["GID"]);
        let mut group = SpecialDataGroup {
            gid: string_attr(element, "GID"),
            ..SpecialDataGroup::default()
        };
        let mut singletons = Singletons::new(element);
        for child in block_children(element, config)? {
            match child.name.as_str() {
                "SDG-CAPTION" => {
                    singletons.claim(child)?;
                    group.caption = Some(read_caption(child, config)?);
                }
                "SD" => group.push(SdgContent::Element(SpecialDataElement::from_xml(child, config)?)),
                "SDF" => group.push(SdgContent::Value(SpecialDataValue::from_xml(child, config)?)),
                "SDG" => group.push(SdgContent::Group(SpecialDataGroup::from_xml(child, config)?)),
                other => return Err(SerdeError::unexpected_element(&element.name, other)),
            }
        }
        Ok(group)
    }
}

/// Reads an `SDG-CAPTION`. A caption holding bare text instead of `L-4`
/// children becomes a single `FOR-ALL` long name.
fn read_caption(element: &XmlElement, config: &XmlConfig) -> Result<MultiLanguageLongName> {
    let text = element.text();
    if element.child_elements().next().is_none() && !utils::is_whitespace(&text) {
        check_attributes(element, &[]);
        trace!(element = %element.name, "reading plain text caption");
        let mut caption = MultiLanguageLongName::new();
        caption.push(LanguageLongName::with_text(Language::ForAll, text));
        return Ok(caption);
    }
    MultiLanguageLongName::from_xml(element, config)
}

impl FromXml for DateValue {
    fn from_xml(element: &XmlElement, _config: &XmlConfig) -> Result<Self> {
        parse_text(element)
    }
}

impl FromXml for RevisionLabel {
    fn from_xml(element: &XmlElement, _config: &XmlConfig) -> Result<Self> {
        parse_text(element)
    }
}

impl FromXml for Modification {
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self> {
        let mut modification = Modification::new();
        let mut singletons = Singletons::new(element);
        for child in block_children(element, config)? {
            singletons.claim(child)?;
            match child.name.as_str() {
                "CHANGE" => {
                    modification.change = Some(MultiLanguageOverviewParagraph::from_xml(child, config)?)
                }
                "REASON" => {
                    modification.reason = Some(MultiLanguageOverviewParagraph::from_xml(child, config)?)
                }
                other => return Err(SerdeError::unexpected_element(&element.name, other)),
            }
        }
        Ok(modification)
    }
}

/// Reads every child of a list wrapper, each of which must be `item_tag`.
fn read_list<T: FromXml>(element: &XmlElement, item_tag: &str, config: &XmlConfig) -> Result<Vec<T>> {
    block_children(element, config)?
        .into_iter()
        .map(|child| {
            if child.name == item_tag {
                T::from_xml(child, config)
            } else {
                Err(SerdeError::unexpected_element(&element.name, &child.name))
            }
        })
        .collect()
}

impl FromXml for DocRevision {
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self> {
        let mut revision = DocRevision::new();
        let mut singletons = Singletons::new(element);
        for child in block_children(element, config)? {
            singletons.claim(child)?;
            match child.name.as_str() {
                "REVISION-LABEL" => revision.revision_label = Some(RevisionLabel::from_xml(child, config)?),
                "REVISION-LABEL-P1" => {
                    revision.revision_label_p1 = Some(RevisionLabel::from_xml(child, config)?)
                }
                "REVISION-LABEL-P2" => {
                    revision.revision_label_p2 = Some(RevisionLabel::from_xml(child, config)?)
                }
                "STATE" => revision.state = Some(simple_text(child)?),
                "ISSUED-BY" => revision.issued_by = Some(simple_text(child)?),
                "DATE" => revision.date = Some(DateValue::from_xml(child, config)?),
                "MODIFICATIONS" => revision.modifications = read_list(child, "MODIFICATION", config)?,
                other => return Err(SerdeError::unexpected_element(&element.name, other)),
            }
        }
        Ok(revision)
    }
}

impl FromXml for AdminData {
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self> {
        let mut admin = AdminData::new();
        let mut singletons = Singletons::new(element);
        for child in block_children(element, config)? {
            singletons.claim(child)?;
            match child.name.as_str() {
                "LANGUAGE" => admin.language = Some(parse_text(child)?),
                "USED-LANGUAGES" => admin.used_languages = Some(MultiLanguagePlainText::from_xml(child, config)?),
                "DOC-REVISIONS" => admin.doc_revisions = read_list(child, "DOC-REVISION", config)?,
                "SDGS" => admin.sdgs = read_list(child, "SDG", config)?,
                other => return Err(SerdeError::unexpected_element(&element.name, other)),
            }
        }
        Ok(admin)
    }
}

impl FromXml for DocumentationBlock {
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self> {
        let mut block = DocumentationBlock::new();
        for child in block_children(element, config)? {
            match child.name.as_str() {
                "P" => block.push(MultiLanguageParagraph::from_xml(child, config)?),
                "VERBATIM" => block.push(MultiLanguageVerbatim::from_xml(child, config)?),
                other => return Err(SerdeError::unexpected_element(&element.name, other)),
            }
        }
        Ok(block)
    }
}

impl FromXml for Annotation {
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self> {
        let mut annotation = Annotation::new();
        let mut singletons = Singletons::new(element);
        for child in block_children(element, config)? {
            singletons.claim(child)?;
            match child.name.as_str() {
                "LABEL" => annotation.label = Some(MultiLanguageLongName::from_xml(child, config)?),
                "ANNOTATION-ORIGIN" => annotation.annotation_origin = Some(simple_text(child)?),
                "ANNOTATION-TEXT" => annotation.annotation_text = Some(DocumentationBlock::from_xml(child, config)?),
                other => return Err(SerdeError::unexpected_element(&element.name, other)),
            }
        }
        Ok(annotation)
    }
}

impl FromXml for DataFilter {
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self> {
        let mut filter = DataFilter::new();
        let mut singletons = Singletons::new(element);
        for child in block_children(element, config)? {
            singletons.claim(child)?;
            match child.name.as_str() {
                "DATA-FILTER-TYPE" => filter.data_filter_type = Some(parse_text(child)?),
                "MASK" => filter.mask = Some(parse_integer(child, "positive integer")?),
                "MAX" => filter.max = Some(parse_integer(child, "integer")?),
                "MIN" => filter.min = Some(parse_integer(child, "integer")?),
                "OFFSET" => filter.offset = Some(parse_integer(child, "positive integer")?),
                "PERIOD" => filter.period = Some(parse_integer(child, "positive integer")?),
                "X" => filter.x = Some(parse_integer(child, "positive integer")?),
                other => return Err(SerdeError::unexpected_element(&element.name, other)),
            }
        }
        Ok(filter)
    }
}

impl FromXml for AutosarEngineeringObject {
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self> {
        let mut object = AutosarEngineeringObject::new();
        let mut singletons = Singletons::new(element);
        for child in block_children(element, config)? {
            singletons.claim(child)?;
            match child.name.as_str() {
                "SHORT-LABEL" => object.short_label = Some(simple_text(child)?),
                "CATEGORY" => object.category = Some(simple_text(child)?),
                "REVISION-LABELS" => object.revision_labels = read_list(child, "REVISION-LABEL", config)?,
                "DOMAIN" => object.domain = Some(simple_text(child)?),
                other => return Err(SerdeError::unexpected_element(&element.name, other)),
            }
        }
        Ok(object)
    }
}

impl FromXml for Code {
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self> {
        let mut short_name = None;
        let mut long_name = None;
        let mut desc = None;
        let mut category = None;
        let mut admin_data = None;
        let mut artifact_descriptors = Vec::new();
        let mut singletons = Singletons::new(element);
        for child in block_children(element, config)? {
            singletons.claim(child)?;
            match child.name.as_str() {
                "SHORT-NAME" => short_name = Some(simple_text(child)?),
                "LONG-NAME" => long_name = Some(MultiLanguageLongName::from_xml(child, config)?),
                "DESC" => desc = Some(MultiLanguageOverviewParagraph::from_xml(child, config)?),
                "CATEGORY" => category = Some(simple_text(child)?),
                "ADMIN-DATA" => admin_data = Some(AdminData::from_xml(child, config)?),
                "ARTIFACT-DESCRIPTORS" => {
                    artifact_descriptors = read_list(child, "AUTOSAR-ENGINEERING-OBJECT", config)?
                }
                other => return Err(SerdeError::unexpected_element(&element.name, other)),
            }
        }
        let short_name =
            short_name.ok_or_else(|| SerdeError::missing_element(&element.name, "SHORT-NAME"))?;
        Ok(Code {
            short_name,
            long_name,
            desc,
            category,
            admin_data,
            artifact_descriptors,
        })
    }
}

type NodeReader = fn(&XmlElement, &XmlConfig) -> Result<Node>;

fn read_node<T>(element: &XmlElement, config: &XmlConfig) -> Result<Node>
where
    T: FromXml + Into<Node>,
{
    T::from_xml(element, config).map(Into::into)
}

/// Root tag to node constructor. Tags shared by several roles map to the
/// type they most commonly carry.
static NODE_READERS: Lazy<HashMap<&'static str, NodeReader>> = Lazy::new(|| {
    let entries: [(&'static str, NodeReader); 36] = [
        ("SDG", read_node::<SpecialDataGroup>),
        ("SD", read_node::<SpecialDataElement>),
        ("SDF", read_node::<SpecialDataValue>),
        ("SDG-CAPTION", read_node::<MultiLanguageLongName>),
        ("MODIFICATION", read_node::<Modification>),
        ("DOC-REVISION", read_node::<DocRevision>),
        ("ADMIN-DATA", read_node::<AdminData>),
        ("L-1", read_node::<LanguageParagraph>),
        ("L-2", read_node::<LanguageOverviewParagraph>),
        ("L-4", read_node::<LanguageLongName>),
        ("L-5", read_node::<LanguageVerbatim>),
        ("L-10", read_node::<LanguagePlainText>),
        ("P", read_node::<MultiLanguageParagraph>),
        ("VERBATIM", read_node::<MultiLanguageVerbatim>),
        ("LONG-NAME", read_node::<MultiLanguageLongName>),
        ("LABEL", read_node::<MultiLanguageLongName>),
        ("DESC", read_node::<MultiLanguageOverviewParagraph>),
        ("CHANGE", read_node::<MultiLanguageOverviewParagraph>),
        ("REASON", read_node::<MultiLanguageOverviewParagraph>),
        ("USED-LANGUAGES", read_node::<MultiLanguagePlainText>),
        ("BR", read_node::<Break>),
        ("E", read_node::<EmphasisText>),
        ("IE", read_node::<IndexEntry>),
        ("TT", read_node::<TechnicalTerm>),
        ("SUB", read_node::<Subscript>),
        ("SUP", read_node::<Superscript>),
        ("DISPLAY-NAME", read_node::<SingleLanguageUnitNames>),
        ("DATE", read_node::<DateValue>),
        ("REVISION-LABEL", read_node::<RevisionLabel>),
        ("REVISION-LABEL-P1", read_node::<RevisionLabel>),
        ("REVISION-LABEL-P2", read_node::<RevisionLabel>),
        ("DATA-FILTER", read_node::<DataFilter>),
        ("AUTOSAR-ENGINEERING-OBJECT", read_node::<AutosarEngineeringObject>),
        ("CODE", read_node::<Code>),
        ("ANNOTATION-TEXT", read_node::<DocumentationBlock>),
        ("ANNOTATION", read_node::<Annotation>),
    ];
    entries.into_iter().collect()
});

impl FromXml for Node {
    fn from_xml(element: &XmlElement, config: &XmlConfig) -> Result<Self> {
        let reader = NODE_READERS
            .get(element.name.as_str())
            .ok_or_else(|| SerdeError::unexpected_element("(root)", &element.name))?;
        reader(element, config)
    }
}

/// Reads XML with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct XmlReader {
    config: XmlConfig,
}

impl XmlReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: XmlConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &XmlConfig {
        &self.config
    }

    /// Reads a value of the expected type `T` from a string.
    pub fn from_str<T: FromXml>(&self, xml: &str) -> Result<T> {
        let root = XmlElement::parse_str(xml)?;
        debug!(root = %root.name, bytes = xml.len(), "reading element");
        T::from_xml(&root, &self.config)
    }

    pub fn from_reader<T: FromXml, R: BufRead>(&self, reader: R) -> Result<T> {
        let root = XmlElement::parse_reader(reader)?;
        debug!(root = %root.name, "reading element");
        T::from_xml(&root, &self.config)
    }

    pub fn from_file<T: FromXml, P: AsRef<Path>>(&self, path: P) -> Result<T> {
        let file = File::open(path.as_ref())?;
        self.from_reader(BufReader::new(file))
    }

    /// Reads a document and dispatches its root on the tag name.
    pub fn read_str(&self, xml: &str) -> Result<Node> {
        self.from_str(xml)
    }

    /// Reads a single element that has no declaration or document wrapper.
    pub fn read_fragment_str(&self, xml: &str) -> Result<Node> {
        self.from_str(xml.trim())
    }

    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Node> {
        self.from_file(path)
    }
}

/// Deserializes a value of type `T` from an XML string.
///
/// # Examples
///
/// ```
/// use arxml_model::SpecialDataGroup;
/// use arxml_serde::from_xml_str;
///
/// let sdg: SpecialDataGroup = from_xml_str(r#"<SDG GID="MyGID"/>"#).unwrap();
/// assert_eq!(sdg.gid.as_deref(), Some("MyGID"));
/// ```
pub fn from_xml_str<T: FromXml>(xml: &str) -> Result<T> {
    XmlReader::new().from_str(xml)
}

/// Deserializes a value of type `T` from a buffered reader.
pub fn from_xml_reader<R: BufRead, T: FromXml>(reader: R) -> Result<T> {
    XmlReader::new().from_reader(reader)
}

/// Deserializes a value of type `T` from the file at `path`.
pub fn from_xml_file<T: FromXml, P: AsRef<Path>>(path: P) -> Result<T> {
    XmlReader::new().from_file(path)
}

/// Reads a document and returns its root as a [`Node`].
pub fn read_str(xml: &str) -> Result<Node> {
    XmlReader::new().read_str(xml)
}

/// Reads a single element and returns it as a [`Node`].
pub fn read_fragment_str(xml: &str) -> Result<Node> {
    XmlReader::new().read_fragment_str(xml)
}

/// Reads the file at `path` and returns its root as a [`Node`].
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Node> {
    XmlReader::new().read_file(path)
}
