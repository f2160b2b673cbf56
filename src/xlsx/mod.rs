//! XLSX (Excel) workbook reading.
//!
//! Opening a [`Workbook`] follows the package relationships to the
//! workbook part, its sheet list and its shared strings. Sheets are then
//! reconstructed on demand into dense [`Worksheet`] grids.
//!
//! # Example
//!
//! ```no_run
//! use xlsxgrid::xlsx::{CellValue, Workbook};
//! use xlsxgrid::ReaderOptions;
//!
//! let workbook = Workbook::open("spreadsheet.xlsx", ReaderOptions::default())?;
//! let sheet = workbook.get_sheet("Sheet1")?;
//!
//! for row in sheet.rows() {
//!     let line: Vec<String> = row.iter().map(CellValue::to_string).collect();
//!     println!("{}", line.join("\t"));
//! }
//! # Ok::<(), xlsxgrid::Error>(())
//! ```

mod address;
mod catalog;
mod cell;
mod date;
mod relationships;
mod shared_strings;
mod workbook;
mod worksheet;

pub use address::{decode_address, MAX_COLUMN, MAX_ROW};
pub use catalog::{SheetDescriptor, SheetRef, WorkbookCatalog};
pub use cell::CellValue;
pub use date::{serial_to_unix_seconds, to_unix_timestamp, UNIX_EPOCH_SERIAL};
pub use relationships::{
    resolve, Relationship, Relationships, ResolvedParts, REL_OFFICE_DOCUMENT,
    REL_SHARED_STRINGS, REL_WORKSHEET,
};
pub use shared_strings::{flatten_rich_text, SharedStrings};
pub use workbook::Workbook;
pub use worksheet::{decode_cell, Worksheet, WorksheetParser};
