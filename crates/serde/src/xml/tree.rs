//! A generic element tree built from quick-xml events.
//!
//! The reader first materializes the document as [`XmlElement`]s and then
//! maps the tree onto model types. Text is kept exactly as written, with
//! entity and character references resolved, so mixed content keeps its
//! whitespace; block elements discard their layout whitespace later.

use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use tracing::trace;

use crate::error::{Result, SerdeError};
use crate::xml::utils;

const DOCUMENT: &str = "(document)";

/// One node in an element's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlContent {
    Element(XmlElement),
    Text(String),
}

/// An element with its attributes in document order and its content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlContent>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parses a document or a single-element fragment.
    pub fn parse_str(xml: &str) -> Result<Self> {
        parse(Reader::from_str(xml))
    }

    /// Parses a document or a single-element fragment from a buffered reader.
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Self> {
        parse(Reader::from_reader(reader))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|child| match child {
            XmlContent::Element(element) => Some(element),
            XmlContent::Text(_) => None,
        })
    }

    /// Concatenation of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                XmlContent::Text(text) => Some(text.as_str()),
                XmlContent::Element(_) => None,
            })
            .collect()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.children.last_mut() {
            Some(XmlContent::Text(last)) => last.push_str(text),
            _ => self.children.push(XmlContent::Text(text.to_string())),
        }
    }
}

fn element_from_start(start: &BytesStart) -> Result<XmlElement> {
    let decoder = start.decoder();
    let mut element = XmlElement::new(decoder.decode(start.name().as_ref())?);
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = decoder.decode(attr.key.as_ref())?.into_owned();
        let value = attr.decode_and_unescape_value(decoder)?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

/// Resolves a character reference or one of the predefined entities.
fn resolve_reference(reference: &BytesRef) -> Result<String> {
    if let Some(ch) = reference.resolve_char_ref()? {
        return Ok(ch.to_string());
    }
    let name = reference.decode()?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| SerdeError::Custom(format!("unknown entity reference &{name};")))
}

struct TreeBuilder {
    stack: Vec<XmlElement>,
    root: Option<XmlElement>,
}

impl TreeBuilder {
    fn attach(&mut self, element: XmlElement) -> Result<()> {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(XmlContent::Element(element));
            return Ok(());
        }
        if self.root.is_some() {
            return Err(SerdeError::unexpected_element(DOCUMENT, &element.name));
        }
        self.root = Some(element);
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        match self.stack.last_mut() {
            Some(current) => current.push_text(text),
            None if utils::is_whitespace(text) => {}
            None => {
                return Err(SerdeError::UnexpectedText {
                    element: DOCUMENT.to_string(),
                    text: utils::excerpt(text),
                });
            }
        }
        Ok(())
    }
}

fn parse<R: BufRead>(mut reader: Reader<R>) -> Result<XmlElement> {
    let mut builder = TreeBuilder {
        stack: Vec::new(),
        root: None,
    };
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                let element = element_from_start(&start)?;
                trace!(name = %element.name, depth = builder.stack.len(), "open element");
                builder.stack.push(element);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                builder.attach(element)?;
            }
            Event::End(_) => {
                let element = builder
                    .stack
                    .pop()
                    .ok_or_else(|| SerdeError::Custom("unbalanced end tag".to_string()))?;
                builder.attach(element)?;
            }
            Event::Text(text) => {
                builder.text(&text.decode()?)?;
            }
            Event::CData(data) => {
                builder.text(&data.decode()?)?;
            }
            Event::GeneralRef(reference) => {
                builder.text(&resolve_reference(&reference)?)?;
            }
            Event::Comment(_) | Event::PI(_) | Event::Decl(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(open) = builder.stack.last() {
        return Err(SerdeError::Custom(format!("unclosed element <{}>", open.name)));
    }
    builder
        .root
        .ok_or_else(|| SerdeError::Custom("document has no root element".to_string()))
}
