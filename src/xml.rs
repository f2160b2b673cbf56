//! Minimal XML element tree.
//!
//! Parsers work against the [`XmlNode`] capability (attribute lookup,
//! child lookup by tag, text extraction) rather than quick-xml events, so
//! the decoding rules stay independent of how the tree was produced.
//! [`Element`] is the quick-xml backed implementation. It can hold a whole
//! small part (relationships, workbook) or a single subtree cut out of a
//! streamed part (one `<c>` cell, one `<si>` item).

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Read-only view of an XML element.
pub trait XmlNode {
    /// Attribute value by qualified name (`r:id`), falling back to the
    /// local name when `name` has no prefix (`id` matches `r:id`).
    fn attr(&self, name: &str) -> Option<&str>;

    /// First child element with the given local name.
    fn child(&self, tag: &str) -> Option<&Self>;

    /// All child elements with the given local name, in document order.
    fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Self> + 'a
    where
        Self: 'a;

    /// Text content directly inside this element (child elements excluded).
    fn text(&self) -> &str;
}

/// An owned XML element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    /// Parse a complete document and return its root element.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event()? {
                Event::Start(e) => return Self::read_subtree(&mut reader, &e),
                Event::Empty(e) => return Self::from_start(&e),
                Event::Eof => {
                    return Err(Error::XmlParse("document has no root element".to_string()))
                }
                _ => {}
            }
        }
    }

    /// Build a childless element from a start (or empty) tag.
    pub fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    /// Consume events up to the end tag matching `start`, which the caller
    /// has just read from `reader`, and return the collected subtree.
    pub fn read_subtree(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self> {
        let mut stack = vec![Self::from_start(start)?];
        loop {
            match reader.read_event()? {
                Event::Start(e) => stack.push(Self::from_start(&e)?),
                Event::Empty(e) => {
                    let child = Self::from_start(&e)?;
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(child);
                    }
                }
                Event::Text(t) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&t.unescape()?);
                    }
                }
                Event::CData(c) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                    }
                }
                Event::End(_) => {
                    let Some(done) = stack.pop() else {
                        return Err(Error::XmlParse("unbalanced end tag".to_string()));
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(done),
                        None => return Ok(done),
                    }
                }
                Event::Eof => {
                    return Err(Error::XmlParse(format!(
                        "unexpected end of document inside <{}>",
                        start_name(start)
                    )))
                }
                _ => {}
            }
        }
    }

    /// Local name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All child elements.
    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

fn start_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

impl XmlNode for Element {
    fn attr(&self, name: &str) -> Option<&str> {
        if let Some((_, value)) = self.attributes.iter().find(|(key, _)| key == name) {
            return Some(value);
        }
        if name.contains(':') {
            return None;
        }
        self.attributes
            .iter()
            .find(|(key, _)| key.rsplit_once(':').is_some_and(|(_, local)| local == name))
            .map(|(_, value)| value.as_str())
    }

    fn child(&self, tag: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == tag)
    }

    fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Self> + 'a
    where
        Self: 'a,
    {
        self.children.iter().filter(move |c| c.name == tag)
    }

    fn text(&self) -> &str {
        &self.text
    }
}
