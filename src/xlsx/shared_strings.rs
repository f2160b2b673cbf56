//! XLSX shared strings parsing.

use crate::error::Result;
use crate::xml::{Element, XmlNode};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Flatten a string item (`<si>` or inline `<is>`) to plain text.
///
/// Direct `<t>` text wins; otherwise the `<t>` of each `<r>` run is joined
/// with a single space. Phonetic runs (`<rPh>`) are ignored.
pub fn flatten_rich_text<N: XmlNode>(item: &N) -> String {
    if let Some(t) = item.child("t") {
        return t.text().to_string();
    }
    item.children_named("r")
        .map(|run| run.child("t").map(|t| t.text()).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shared strings table.
#[derive(Debug, Clone, Default)]
pub struct SharedStrings {
    /// All strings in order
    strings: Vec<String>,
}

impl SharedStrings {
    /// Parse shared strings from XML content.
    ///
    /// Items are streamed one `<si>` at a time; index `n` is the `n`th item.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut strings = Vec::new();
        let mut reader = Reader::from_str(xml);

        loop {
            match reader.read_event()? {
                Event::Start(e) if e.local_name().as_ref() == b"si" => {
                    let item = Element::read_subtree(&mut reader, &e)?;
                    strings.push(flatten_rich_text(&item));
                }
                Event::Empty(e) if e.local_name().as_ref() == b"si" => {
                    strings.push(String::new());
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self { strings })
    }

    /// Get a string by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(|s| s.as_str())
    }

    /// Get the count of shared strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate strings in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }
}
