//! Sheet catalog: name and id lookup over the declared sheets.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// One sheet declared by the workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetDescriptor {
    /// Document-assigned id, unique within the workbook
    pub sheet_id: u32,
    /// Sheet name, unique within the workbook
    pub name: String,
    /// Relationship id linking the sheet to its part
    pub relationship_id: String,
    /// Worksheet part path; `None` when no worksheet relationship matched
    pub part_path: Option<String>,
}

/// A sheet reference by name or by sheet id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SheetRef {
    Name(String),
    Id(u32),
}

impl From<&str> for SheetRef {
    fn from(name: &str) -> Self {
        SheetRef::Name(name.to_string())
    }
}

impl From<String> for SheetRef {
    fn from(name: String) -> Self {
        SheetRef::Name(name)
    }
}

impl From<&String> for SheetRef {
    fn from(name: &String) -> Self {
        SheetRef::Name(name.clone())
    }
}

impl From<u32> for SheetRef {
    fn from(id: u32) -> Self {
        SheetRef::Id(id)
    }
}

impl fmt::Display for SheetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetRef::Name(name) => write!(f, "name '{}'", name),
            SheetRef::Id(id) => write!(f, "id {}", id),
        }
    }
}

/// Immutable catalog of a workbook's sheets.
#[derive(Debug, Clone, Default)]
pub struct WorkbookCatalog {
    /// Descriptors in workbook order
    sheets: Vec<SheetDescriptor>,
    by_name: HashMap<String, usize>,
}

impl WorkbookCatalog {
    /// Build the catalog, rejecting duplicate names or ids.
    pub fn new(sheets: Vec<SheetDescriptor>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(sheets.len());
        for (idx, sheet) in sheets.iter().enumerate() {
            if by_name.insert(sheet.name.clone(), idx).is_some() {
                return Err(Error::InvalidData(format!("duplicate sheet name '{}'", sheet.name)));
            }
            if sheets[..idx].iter().any(|s| s.sheet_id == sheet.sheet_id) {
                return Err(Error::InvalidData(format!("duplicate sheetId {}", sheet.sheet_id)));
            }
        }
        Ok(Self { sheets, by_name })
    }

    /// Sheet names keyed by sheet id.
    pub fn sheet_names_by_id(&self) -> BTreeMap<u32, String> {
        self.sheets
            .iter()
            .map(|s| (s.sheet_id, s.name.clone()))
            .collect()
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name.as_str())
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn descriptors(&self) -> &[SheetDescriptor] {
        &self.sheets
    }

    /// Look a sheet up by name or id.
    pub fn resolve(&self, sheet: &SheetRef) -> Result<&SheetDescriptor> {
        let found = match sheet {
            SheetRef::Name(name) => self.by_name.get(name).map(|&idx| &self.sheets[idx]),
            SheetRef::Id(id) => self.sheets.iter().find(|s| s.sheet_id == *id),
        };
        found.ok_or_else(|| Error::InvalidSheetReference(sheet.to_string()))
    }
}
