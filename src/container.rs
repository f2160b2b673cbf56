//! ZIP package access for OOXML workbooks.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::{Component, Path};
use std::sync::{Mutex, PoisonError};
use zip::result::ZipError;

/// Byte source a package can be read from.
pub trait ReadSeek: Read + Seek + Send {}

impl<T: Read + Seek + Send> ReadSeek for T {}

/// Fix XML encoding declaration from UTF-16 to UTF-8.
///
/// Once UTF-16 XML is decoded into a Rust `String` the declaration still
/// says `encoding="UTF-16"`, which makes quick-xml misread the content.
fn fix_xml_encoding_declaration(content: &str) -> String {
    if content.starts_with("<?xml") {
        if let Some(end_decl) = content.find("?>") {
            let decl = &content[..end_decl + 2];
            let rest = &content[end_decl + 2..];

            let fixed_decl = decl
                .replace("encoding=\"UTF-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='UTF-16'", "encoding='UTF-8'")
                .replace("encoding=\"utf-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='utf-16'", "encoding='UTF-8'");

            return format!("{}{}", fixed_decl, rest);
        }
    }
    content.to_string()
}

/// Decode XML bytes handling different encodings (UTF-8, UTF-16 LE/BE).
///
/// Workbook parts are almost always UTF-8, but some producers emit UTF-16
/// with a byte order mark.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8(bytes[3..].to_vec())
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)));
    }

    if bytes.starts_with(&[0xFF, 0xFE]) {
        let content = decode_utf16(&bytes[2..], u16::from_le_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    if bytes.starts_with(&[0xFE, 0xFF]) {
        let content = decode_utf16(&bytes[2..], u16::from_be_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    match String::from_utf8(bytes.to_vec()) {
        Ok(s) => Ok(s),
        Err(_) => {
            // ASCII markup in UTF-16 leaves a zero in every other byte
            if bytes.len() >= 4 && bytes[1] == 0 && bytes[3] == 0 {
                decode_utf16(bytes, u16::from_le_bytes)
            } else if bytes.len() >= 4 && bytes[0] == 0 && bytes[2] == 0 {
                decode_utf16(bytes, u16::from_be_bytes)
            } else {
                Ok(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]));

    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Path of the relationship part that belongs to `part_path`.
///
/// `xl/workbook.xml` maps to `xl/_rels/workbook.xml.rels`; the empty path
/// maps to the package-level `_rels/.rels`.
pub fn rels_path_for(part_path: &str) -> String {
    let part_path = part_path.trim_start_matches('/');
    match part_path.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part_path),
    }
}

/// Resolve a relationship target against the part that declared it.
pub fn resolve_path(base: &str, relative: &str) -> String {
    if let Some(stripped) = relative.strip_prefix('/') {
        return stripped.to_string();
    }

    let base_path = Path::new(base);
    let base_dir = base_path.parent().unwrap_or(Path::new(""));

    let mut result = base_dir.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(c) => {
                result.push(c);
            }
            _ => {}
        }
    }

    result.to_string_lossy().replace('\\', "/")
}

/// A workbook package: the ZIP archive holding every XML part.
///
/// Entries are looked up on every call; nothing is cached. The archive sits
/// behind a mutex so a `Package` can be shared across threads.
pub struct Package {
    archive: Mutex<zip::ZipArchive<Box<dyn ReadSeek>>>,
}

impl Package {
    /// Open a package from a file path.
    ///
    /// Only the central directory is read up front; parts are decompressed
    /// on demand.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use xlsxgrid::container::Package;
    ///
    /// let package = Package::open("data.xlsx")?;
    /// let rels = package.read_xml("_rels/.rels")?;
    /// # Ok::<(), xlsxgrid::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Open(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            Error::Open(reason) => Error::Open(format!("{}: {}", path.display(), reason)),
            other => other,
        })
    }

    /// Create a package from an in-memory byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(data))
    }

    /// Create a package from any seekable reader.
    pub fn from_reader<R: ReadSeek + 'static>(reader: R) -> Result<Self> {
        let reader: Box<dyn ReadSeek> = Box::new(reader);
        let archive = zip::ZipArchive::new(reader).map_err(|e| Error::Open(e.to_string()))?;
        Ok(Self {
            archive: Mutex::new(archive),
        })
    }

    /// Read the raw bytes of an entry.
    ///
    /// Fails with [`Error::EntryNotFound`] when the path is not in the archive.
    /// The size recorded in the archive is not trusted for preallocation.
    pub fn read_binary(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.lock().unwrap_or_else(PoisonError::into_inner);
        let mut file = archive.by_name(path).map_err(|err| match err {
            ZipError::FileNotFound => Error::EntryNotFound(path.to_string()),
            other => Error::from(other),
        })?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Read an XML entry as a string, decoding UTF-8 or UTF-16 content.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let bytes = self.read_binary(path)?;
        decode_xml_bytes(&bytes)
    }

    /// Check if an entry exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        let archive = self.archive.lock().unwrap_or_else(PoisonError::into_inner);
        let found = archive.file_names().any(|n| n == path);
        found
    }

    /// List all entries in the archive.
    pub fn list_files(&self) -> Vec<String> {
        let archive = self.archive.lock().unwrap_or_else(PoisonError::into_inner);
        archive.file_names().map(String::from).collect()
    }
}

impl std::fmt::Debug for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self
            .archive
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("Package").field("entries", &entries).finish()
    }
}
