//! Error types for the xlsxgrid library.

use std::io;
use thiserror::Error;

/// Result type alias for xlsxgrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a workbook.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a part.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file could not be opened as a package.
    #[error("Failed to open package: {0}")]
    Open(String),

    /// An expected part does not exist inside the package.
    #[error("Entry not found in package: {0}")]
    EntryNotFound(String),

    /// The requested sheet name or id is not in the workbook.
    #[error("Invalid sheet reference: {0}")]
    InvalidSheetReference(String),

    /// A cell or dimension address does not match `[A-Z]+[0-9]+`.
    #[error("Invalid cell address: {0:?}")]
    InvalidCellAddress(String),

    /// Error reading the ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Structurally valid XML carrying malformed workbook data.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlParse(err.to_string())
    }
}
