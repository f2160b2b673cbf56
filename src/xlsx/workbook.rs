//! Workbook: package, catalog, shared strings and cached worksheets.

use crate::container::{Package, ReadSeek};
use crate::error::{Error, Result};
use crate::options::ReaderOptions;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use super::catalog::{SheetRef, WorkbookCatalog};
use super::relationships;
use super::shared_strings::SharedStrings;
use super::worksheet::{Worksheet, WorksheetParser};

/// An opened XLSX workbook.
///
/// The catalog and shared strings are built when the workbook is opened.
/// Worksheets are parsed on first request and cached by name; the cache
/// lock is held while a sheet parses, so each sheet is parsed at most once
/// even under concurrent first access.
pub struct Workbook {
    package: Package,
    catalog: WorkbookCatalog,
    shared_strings: SharedStrings,
    options: ReaderOptions,
    sheets: Mutex<HashMap<String, Arc<Worksheet>>>,
}

impl Workbook {
    /// Open a workbook from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use xlsxgrid::{ReaderOptions, Workbook};
    ///
    /// let workbook = Workbook::open("data.xlsx", ReaderOptions::default())?;
    /// for (id, name) in workbook.sheet_names_by_id() {
    ///     let sheet = workbook.get_sheet(id)?;
    ///     println!("{} {}: {} rows", id, name, sheet.row_count());
    /// }
    /// # Ok::<(), xlsxgrid::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self> {
        Self::from_package(Package::open(path)?, options)
    }

    /// Open a workbook from bytes.
    pub fn from_bytes(data: Vec<u8>, options: ReaderOptions) -> Result<Self> {
        Self::from_package(Package::from_bytes(data)?, options)
    }

    /// Open a workbook from a seekable reader.
    pub fn from_reader<R: ReadSeek + 'static>(reader: R, options: ReaderOptions) -> Result<Self> {
        Self::from_package(Package::from_reader(reader)?, options)
    }

    /// Resolve relationships, then build the shared strings and catalog.
    pub fn from_package(package: Package, options: ReaderOptions) -> Result<Self> {
        let parts = relationships::resolve(&package)?;

        let shared_strings = match &parts.shared_strings_path {
            Some(path) => SharedStrings::parse(&package.read_xml(path)?)?,
            None => SharedStrings::default(),
        };
        log::debug!("{} shared strings", shared_strings.len());

        let catalog = WorkbookCatalog::new(parts.sheets)?;
        log::debug!("{} sheets in {}", catalog.sheet_count(), parts.workbook_path);

        Ok(Self {
            package,
            catalog,
            shared_strings,
            options,
            sheets: Mutex::new(HashMap::new()),
        })
    }

    /// Sheet names keyed by sheet id.
    pub fn sheet_names_by_id(&self) -> BTreeMap<u32, String> {
        self.catalog.sheet_names_by_id()
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.catalog.sheet_names().collect()
    }

    /// Get the number of sheets.
    pub fn sheet_count(&self) -> usize {
        self.catalog.sheet_count()
    }

    /// Name of the sheet with the given id.
    pub fn sheet_name_by_id(&self, sheet_id: u32) -> Result<&str> {
        self.catalog
            .resolve(&SheetRef::Id(sheet_id))
            .map(|s| s.name.as_str())
    }

    /// Get a worksheet by name or sheet id, parsing it on first access.
    pub fn get_sheet(&self, sheet: impl Into<SheetRef>) -> Result<Arc<Worksheet>> {
        let descriptor = self.catalog.resolve(&sheet.into())?;

        // Entries are inserted only after a complete parse
        let mut cache = self.sheets.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(ws) = cache.get(&descriptor.name) {
            return Ok(Arc::clone(ws));
        }

        let path = descriptor.part_path.as_deref().ok_or_else(|| {
            Error::EntryNotFound(format!("worksheet part for sheet '{}'", descriptor.name))
        })?;
        log::debug!("parsing sheet '{}' from {}", descriptor.name, path);
        let xml = self.package.read_xml(path)?;
        let ws = WorksheetParser::new(&self.shared_strings, &self.options)
            .parse(&descriptor.name, &xml)?;

        let ws = Arc::new(ws);
        cache.insert(descriptor.name.clone(), Arc::clone(&ws));
        Ok(ws)
    }

    /// The sheet catalog.
    pub fn catalog(&self) -> &WorkbookCatalog {
        &self.catalog
    }

    /// The shared strings table.
    pub fn shared_strings(&self) -> &SharedStrings {
        &self.shared_strings
    }

    /// The options the workbook was opened with.
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// The underlying package.
    pub fn package(&self) -> &Package {
        &self.package
    }
}

impl std::fmt::Debug for Workbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbook")
            .field("sheets", &self.catalog.sheet_count())
            .field("shared_strings", &self.shared_strings.len())
            .field("options", &self.options)
            .finish()
    }
}
