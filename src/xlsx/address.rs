//! A1-style cell address decoding.

use crate::error::{Error, Result};

/// Number of columns in a worksheet (`A` through `XFD`).
pub const MAX_COLUMN: u32 = 16_384;

/// Number of rows in a worksheet.
pub const MAX_ROW: u32 = 1_048_576;

/// Decode an A1-style address into zero-based `(column, row)`.
///
/// The address must be one or more uppercase letters followed by one or
/// more digits and nothing else. Letters form a bijective base-26 numeral
/// (`A` = 1 ... `Z` = 26, no zero digit), most significant first.
/// Addresses past `XFD` or row [`MAX_ROW`] are rejected.
///
/// ```
/// use xlsxgrid::xlsx::decode_address;
///
/// assert_eq!(decode_address("C5")?, (2, 4));
/// assert_eq!(decode_address("AA1")?, (26, 0));
/// # Ok::<(), xlsxgrid::Error>(())
/// ```
pub fn decode_address(address: &str) -> Result<(u32, u32)> {
    decode_bytes(address.as_bytes()).ok_or_else(|| Error::InvalidCellAddress(address.to_string()))
}

fn decode_bytes(bytes: &[u8]) -> Option<(u32, u32)> {
    let letters = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
    let (col_part, row_part) = bytes.split_at(letters);
    if col_part.is_empty() || row_part.is_empty() {
        return None;
    }

    let mut column: u32 = 0;
    for &b in col_part {
        column = column * 26 + u32::from(b - b'A' + 1);
        if column > MAX_COLUMN {
            return None;
        }
    }

    let mut row: u32 = 0;
    for &b in row_part {
        if !b.is_ascii_digit() {
            return None;
        }
        row = row * 10 + u32::from(b - b'0');
        if row > MAX_ROW {
            return None;
        }
    }

    // Both parts are 1-based; a zero row has no zero-based index.
    Some((column - 1, row.checked_sub(1)?))
}
