//! Relationship parsing and workbook part resolution.

use crate::container::{rels_path_for, resolve_path, Package};
use crate::error::{Error, Result};
use crate::xml::{Element, XmlNode};

use super::catalog::SheetDescriptor;

/// Relationship type of the package's main document.
pub const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// Relationship type of a worksheet part.
pub const REL_WORKSHEET: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";

/// Relationship type of the shared strings part.
pub const REL_SHARED_STRINGS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings";

/// A relationship entry from a .rels part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path, relative to the source part unless it starts with `/`
    pub target: String,
}

/// Relationships parsed from one .rels part, in document order.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    entries: Vec<Relationship>,
}

impl Relationships {
    /// Parse a relationships part.
    pub fn parse(xml: &str) -> Result<Self> {
        let root = Element::parse(xml)?;
        let entries = root
            .children_named("Relationship")
            .filter_map(|rel| {
                Some(Relationship {
                    id: rel.attr("Id")?.to_string(),
                    rel_type: rel.attr("Type").unwrap_or_default().to_string(),
                    target: rel.attr("Target").unwrap_or_default().to_string(),
                })
            })
            .collect();
        Ok(Self { entries })
    }

    /// Read and parse the relationships of `part_path` ("" for the package).
    pub fn read(package: &Package, part_path: &str) -> Result<Self> {
        Self::parse(&package.read_xml(&rels_path_for(part_path))?)
    }

    /// Get a relationship by ID.
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.entries.iter().find(|r| r.id == id)
    }

    /// Relationships of an exact type, in document order.
    pub fn get_by_type<'a>(&'a self, rel_type: &'a str) -> impl Iterator<Item = &'a Relationship> {
        self.entries.iter().filter(move |r| r.rel_type == rel_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Part locations discovered by following the package relationships.
#[derive(Debug, Clone)]
pub struct ResolvedParts {
    /// Path of the workbook part, e.g. `xl/workbook.xml`
    pub workbook_path: String,
    /// Declared sheets in workbook order
    pub sheets: Vec<SheetDescriptor>,
    /// Path of the shared strings part, if the workbook links one
    pub shared_strings_path: Option<String>,
}

/// Locate the workbook, its sheets and its shared strings part.
///
/// Every part on the way is required; a missing one fails the whole
/// resolution with [`Error::EntryNotFound`].
pub fn resolve(package: &Package) -> Result<ResolvedParts> {
    let package_rels = Relationships::read(package, "")?;
    let workbook_rel = package_rels
        .get_by_type(REL_OFFICE_DOCUMENT)
        .next()
        .ok_or_else(|| Error::EntryNotFound("officeDocument relationship".to_string()))?;
    let workbook_path = resolve_path("", &workbook_rel.target);
    log::debug!("workbook part: {}", workbook_path);

    let mut sheets = parse_sheet_list(&package.read_xml(&workbook_path)?)?;

    let mut shared_strings_path = None;
    for rel in Relationships::read(package, &workbook_path)?.iter() {
        match rel.rel_type.as_str() {
            REL_WORKSHEET => {
                let path = resolve_path(&workbook_path, &rel.target);
                if let Some(sheet) = sheets.iter_mut().find(|s| s.relationship_id == rel.id) {
                    sheet.part_path = Some(path);
                }
            }
            REL_SHARED_STRINGS => {
                shared_strings_path = Some(resolve_path(&workbook_path, &rel.target));
            }
            _ => {}
        }
    }

    for sheet in sheets.iter().filter(|s| s.part_path.is_none()) {
        log::warn!(
            "sheet '{}' ({}) has no worksheet relationship",
            sheet.name,
            sheet.relationship_id
        );
    }

    Ok(ResolvedParts {
        workbook_path,
        sheets,
        shared_strings_path,
    })
}

/// Read the `<sheets>` list of a workbook part.
fn parse_sheet_list(xml: &str) -> Result<Vec<SheetDescriptor>> {
    let root = Element::parse(xml)?;
    let Some(sheets) = root.child("sheets") else {
        return Ok(Vec::new());
    };

    sheets
        .children_named("sheet")
        .map(|sheet| {
            let name = sheet.attr("name").unwrap_or_default().to_string();
            let raw_id = sheet.attr("sheetId").unwrap_or_default();
            let sheet_id = raw_id.trim().parse::<u32>().map_err(|_| {
                Error::InvalidData(format!("sheet '{}' has invalid sheetId {:?}", name, raw_id))
            })?;
            let relationship_id = sheet
                .attr("r:id")
                .or_else(|| sheet.attr("id"))
                .unwrap_or_default()
                .to_string();
            Ok(SheetDescriptor {
                sheet_id,
                name,
                relationship_id,
                part_path: None,
            })
        })
        .collect()
}
