//! XML tree for HWPX content entries
//!
//! quick-xml is event-driven, but the rewrite operation needs whole-document
//! mutation, so content entries are materialized into a small node tree and
//! re-serialized afterwards. Comments are kept so a rewritten entry stays
//! faithful to the input.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::BufRead;

use crate::error::{Error, Result};

/// XML node
#[derive(Clone, Debug)]
pub enum XmlNode {
    /// Element node
    Element(XmlElement),
    /// Text node
    Text(String),
    /// Comment node
    Comment(String),
}

/// XML element with attributes and children
#[derive(Clone, Debug)]
pub struct XmlElement {
    /// Full element name (with prefix, e.g., "hp:t")
    pub name: String,
    /// Attributes as (name, value) pairs
    pub attributes: Vec<(String, String)>,
    /// Child nodes
    pub children: Vec<XmlNode>,
    /// Whether this was a self-closing element
    pub self_closing: bool,
}

/// Parse a whole document and return its root element.
///
/// The prolog (declaration, processing instructions, comments before the
/// root) is not preserved; serialization writes its own declaration.
pub fn parse_document(data: &[u8]) -> Result<XmlElement> {
    let mut reader = Reader::from_reader(data);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => return XmlElement::from_reader(&mut reader, &e),
            Event::Empty(e) => return Ok(XmlElement::from_empty(&e)),
            Event::Eof => {
                return Err(Error::InvalidDocument("no root element".into()));
            }
            _ => {}
        }
        buf.clear();
    }
}

/// Serialize a document as UTF-8 with an XML declaration.
pub fn serialize_document(root: &XmlElement) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new(
        "1.0",
        Some("UTF-8"),
        Some("yes"),
    )))?;
    root.write_to(&mut writer)?;
    Ok(writer.into_inner())
}

impl XmlElement {
    /// Read a complete element from XML reader (starting after the start tag was read)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
        let attributes = read_attributes(start);

        let mut children = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let child = Self::from_reader(reader, &e)?;
                    children.push(XmlNode::Element(child));
                }
                Event::Empty(e) => {
                    children.push(XmlNode::Element(Self::from_empty(&e)));
                }
                Event::Text(t) => {
                    let text = t.unescape()?.to_string();
                    if !text.is_empty() {
                        children.push(XmlNode::Text(text));
                    }
                }
                Event::CData(c) => {
                    children.push(XmlNode::Text(String::from_utf8_lossy(&c).to_string()));
                }
                Event::Comment(c) => {
                    children.push(XmlNode::Comment(String::from_utf8_lossy(&c).to_string()));
                }
                Event::End(e) => {
                    let end_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    if end_name == name {
                        break;
                    }
                }
                Event::Eof => return Err(Error::InvalidDocument("unexpected EOF".into())),
                _ => {}
            }
            buf.clear();
        }

        Ok(Self {
            name,
            attributes,
            children,
            self_closing: false,
        })
    }

    /// Create from empty element tag
    pub fn from_empty(e: &BytesStart) -> Self {
        Self {
            name: String::from_utf8_lossy(e.name().as_ref()).to_string(),
            attributes: read_attributes(e),
            children: Vec::new(),
            self_closing: true,
        }
    }

    /// Write element to XML writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(&self.name);
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() && self.self_closing {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            for child in &self.children {
                child.write_to(writer)?;
            }
            writer.write_event(Event::End(BytesEnd::new(&self.name)))?;
        }

        Ok(())
    }

    /// Text immediately following the start tag, before any child element.
    pub fn leading_text(&self) -> Option<&str> {
        match self.children.first() {
            Some(XmlNode::Text(t)) => Some(t),
            _ => None,
        }
    }

    /// Replace every literal occurrence of `find` in the text nodes of this
    /// subtree.
    pub fn replace_text(&mut self, find: &str, replace: &str) {
        for child in &mut self.children {
            match child {
                XmlNode::Text(t) => {
                    if t.contains(find) {
                        *t = t.replace(find, replace);
                    }
                }
                XmlNode::Element(e) => e.replace_text(find, replace),
                XmlNode::Comment(_) => {}
            }
        }
    }
}

impl XmlNode {
    /// Write node to XML writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match self {
            XmlNode::Element(e) => e.write_to(writer),
            XmlNode::Text(t) => {
                writer.write_event(Event::Text(BytesText::new(t)))?;
                Ok(())
            }
            XmlNode::Comment(c) => {
                writer.write_event(Event::Comment(BytesText::new(c)))?;
                Ok(())
            }
        }
    }
}

fn read_attributes(e: &BytesStart) -> Vec<(String, String)> {
    e.attributes()
        .filter_map(|a| a.ok())
        .map(|a| {
            (
                String::from_utf8_lossy(a.key.as_ref()).to_string(),
                String::from_utf8_lossy(&a.value).to_string(),
            )
        })
        .collect()
}
