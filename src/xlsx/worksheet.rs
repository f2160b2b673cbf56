//! Worksheet reconstruction: sparse `<sheetData>` to a dense grid.

use crate::error::{Error, Result};
use crate::options::ReaderOptions;
use crate::xml::{Element, XmlNode};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

use super::address::{decode_address, MAX_ROW};
use super::cell::{coerce_numeric, CellValue};
use super::shared_strings::{flatten_rich_text, SharedStrings};

/// A parsed worksheet: a dense `row_count` x `column_count` grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worksheet {
    name: String,
    column_count: usize,
    row_count: usize,
    rows: Vec<Vec<CellValue>>,
}

impl Worksheet {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// The grid; every row holds exactly `column_count` values.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Value at zero-based `(row, column)`, if inside the grid.
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    pub fn into_rows(self) -> Vec<Vec<CellValue>> {
        self.rows
    }
}

/// Streams one worksheet part into a [`Worksheet`].
pub struct WorksheetParser<'a> {
    shared_strings: &'a SharedStrings,
    options: &'a ReaderOptions,
}

impl<'a> WorksheetParser<'a> {
    pub fn new(shared_strings: &'a SharedStrings, options: &'a ReaderOptions) -> Self {
        Self {
            shared_strings,
            options,
        }
    }

    /// Parse worksheet XML in a single pass.
    pub fn parse(&self, name: &str, xml: &str) -> Result<Worksheet> {
        let mut reader = Reader::from_str(xml);
        let mut grid = GridBuilder::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"dimension" => grid.set_dimension(&Element::from_start(&e)?)?,
                    b"row" => grid.begin_row(row_number(&e)?),
                    b"c" if grid.in_row() => {
                        let cell = Element::read_subtree(&mut reader, &e)?;
                        grid.push_cell(&cell, self.shared_strings)?;
                    }
                    _ => {}
                },
                Event::Empty(e) => match e.local_name().as_ref() {
                    b"dimension" => grid.set_dimension(&Element::from_start(&e)?)?,
                    b"row" => {
                        grid.begin_row(row_number(&e)?);
                        grid.end_row();
                    }
                    b"c" if grid.in_row() => {
                        grid.push_cell(&Element::from_start(&e)?, self.shared_strings)?;
                    }
                    _ => {}
                },
                Event::End(e) if e.local_name().as_ref() == b"row" => grid.end_row(),
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(grid.finish(name, self.options.remove_trailing_rows))
    }
}

/// Declared 1-based row number of a `<row>`, if it carries one.
fn row_number(row: &BytesStart<'_>) -> Result<Option<u32>> {
    let row = Element::from_start(row)?;
    match row.attr("r") {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(n) if n > 0 && n <= MAX_ROW => Ok(Some(n)),
            _ => Err(Error::InvalidData(format!("invalid row number {:?}", raw))),
        },
    }
}

/// Decode a `<c>` element by its `t` attribute.
///
/// A cell with no `<v>` (or, for inline strings, no `<is>`) is `Null`
/// whatever its type; such cells only carry styling.
pub fn decode_cell<N: XmlNode>(cell: &N, shared_strings: &SharedStrings) -> Result<CellValue> {
    let value = cell.child("v").map(|v| v.text());
    let value = match (cell.attr("t").unwrap_or_default(), value) {
        ("inlineStr", _) => match cell.child("is") {
            Some(is) => CellValue::Text(flatten_rich_text(is)),
            None => CellValue::Null,
        },
        (_, None) => CellValue::Null,
        ("s", Some("")) => CellValue::Text(String::new()),
        ("s", Some(raw)) => {
            let index = raw.trim().parse::<usize>().map_err(|_| {
                Error::InvalidData(format!("shared string index {:?} is not an integer", raw))
            })?;
            let text = shared_strings.get(index).ok_or_else(|| {
                Error::InvalidData(format!(
                    "shared string index {} out of bounds ({} strings)",
                    index,
                    shared_strings.len()
                ))
            })?;
            CellValue::Text(text.to_string())
        }
        ("b", Some("0")) => CellValue::Boolean(false),
        ("b", Some("1")) => CellValue::Boolean(true),
        // Any other non-empty text counts as true
        ("b", Some(other)) => CellValue::Boolean(!other.is_empty()),
        ("e", Some(raw)) => CellValue::Error(raw.to_string()),
        (_, Some(raw)) => coerce_numeric(raw),
    };
    Ok(value)
}

#[derive(Debug, Default)]
struct GridBuilder {
    /// Declared dimension, `(columns, rows)`
    dimension: Option<(usize, usize)>,
    rows: Vec<Vec<CellValue>>,
    current: Option<Vec<CellValue>>,
    last_data_row: Option<usize>,
}

impl GridBuilder {
    fn column_count(&self) -> usize {
        self.dimension.map_or(0, |(cols, _)| cols)
    }

    fn in_row(&self) -> bool {
        self.current.is_some()
    }

    /// Only the bottom-right address of `ref` sizes the grid; the grid
    /// always starts at A1.
    fn set_dimension(&mut self, dimension: &Element) -> Result<()> {
        let Some(reference) = dimension.attr("ref") else {
            return Ok(());
        };
        let bottom_right = reference.rsplit(':').next().unwrap_or(reference);
        let (col, row) = decode_address(bottom_right)?;
        self.dimension = Some((col as usize + 1, row as usize + 1));
        Ok(())
    }

    fn begin_row(&mut self, number: Option<u32>) {
        let expected = self.rows.len() + 1;
        if let Some(number) = number {
            let number = number as usize;
            if number > expected {
                let width = self.column_count();
                let missing = number - expected;
                self.rows
                    .extend(std::iter::repeat_with(|| vec![CellValue::Null; width]).take(missing));
            }
        }
        self.current = Some(Vec::with_capacity(self.column_count()));
    }

    fn push_cell<N: XmlNode>(&mut self, cell: &N, shared_strings: &SharedStrings) -> Result<()> {
        let value = decode_cell(cell, shared_strings)?;
        let row_index = self.rows.len();
        let Some(row) = self.current.as_mut() else {
            return Ok(());
        };

        if let Some(address) = cell.attr("r") {
            let (col, _) = decode_address(address)?;
            let col = col as usize;
            if col > row.len() {
                row.resize(col, CellValue::Null);
            }
        }

        if !value.is_null() {
            self.last_data_row = Some(row_index);
        }
        row.push(value);
        Ok(())
    }

    fn end_row(&mut self) {
        if let Some(mut row) = self.current.take() {
            let width = self.column_count();
            if row.len() < width {
                row.resize(width, CellValue::Null);
            }
            self.rows.push(row);
        }
    }

    fn finish(mut self, name: &str, remove_trailing_rows: bool) -> Worksheet {
        self.end_row();
        let (declared_cols, declared_rows) = self.dimension.unwrap_or_else(|| {
            log::warn!("sheet '{}' declares no dimension", name);
            (0, 0)
        });

        let mut rows = self.rows;
        if remove_trailing_rows {
            rows.truncate(self.last_data_row.map_or(0, |r| r + 1));
        } else if rows.len() < declared_rows {
            rows.resize_with(declared_rows, Vec::new);
        }

        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        if widest > declared_cols && self.dimension.is_some() {
            log::warn!(
                "sheet '{}' has cells past its declared {} columns; widening to {}",
                name,
                declared_cols,
                widest
            );
        }
        let column_count = declared_cols.max(widest);
        for row in &mut rows {
            row.resize(column_count, CellValue::Null);
        }

        log::debug!("sheet '{}': {} rows x {} columns", name, rows.len(), column_count);
        Worksheet {
            name: name.to_string(),
            column_count,
            row_count: rows.len(),
            rows,
        }
    }
}
