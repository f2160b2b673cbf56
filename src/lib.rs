//! # xlsxgrid
//!
//! Read Excel workbooks (.xlsx) into dense, typed, rectangular grids.
//!
//! Worksheets store only non-empty cells at sparse addresses. This crate
//! rebuilds every sheet as a full `rows x columns` grid of [`CellValue`]s,
//! filling the gaps with [`CellValue::Null`] and resolving shared strings,
//! booleans, inline strings, errors and numbers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use xlsxgrid::{open, ReaderOptions};
//!
//! let workbook = open("data.xlsx", ReaderOptions::default())?;
//! println!("Sheets: {:?}", workbook.sheet_names_by_id());
//!
//! let sheet = workbook.get_sheet("Sheet1")?;
//! println!("{} x {}", sheet.row_count(), sheet.column_count());
//! # Ok::<(), xlsxgrid::Error>(())
//! ```
//!
//! Sheets can also be requested by their numeric sheet id:
//!
//! ```no_run
//! # let workbook = xlsxgrid::open("data.xlsx", Default::default())?;
//! let first = workbook.get_sheet(1u32)?;
//! # Ok::<(), xlsxgrid::Error>(())
//! ```

pub mod container;
pub mod error;
pub mod options;
pub mod xlsx;
pub mod xml;

// Re-exports
pub use container::Package;
pub use error::{Error, Result};
pub use options::ReaderOptions;
pub use xlsx::{
    to_unix_timestamp, CellValue, SheetDescriptor, SheetRef, Workbook, Worksheet,
};

use std::path::Path;

/// Open a workbook file.
///
/// Relationships, the sheet catalog and the shared strings are read
/// immediately; worksheets are parsed when first requested.
pub fn open(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Workbook> {
    Workbook::open(path, options)
}
