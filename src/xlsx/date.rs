//! Serial date conversion.

use super::cell::{parse_number, CellValue};

/// Serial day number of 1970-01-01 in the 1900 date system.
pub const UNIX_EPOCH_SERIAL: f64 = 25569.0;

const SECONDS_PER_DAY: f64 = 86400.0;

/// Convert a spreadsheet serial date to seconds since the Unix epoch.
///
/// Serials below one day are time-of-day values and convert to seconds
/// since midnight. No timezone adjustment is applied.
pub fn serial_to_unix_seconds(serial: f64) -> f64 {
    let days = serial.floor();
    let time = serial - days;
    if days > 0.0 {
        (days - UNIX_EPOCH_SERIAL) * SECONDS_PER_DAY + time * SECONDS_PER_DAY
    } else {
        time * SECONDS_PER_DAY
    }
}

/// Convert a numeric cell value to a Unix timestamp in seconds.
///
/// Numbers, and text holding a numeral, become `Float` seconds. Every other
/// value is returned unchanged.
///
/// ```
/// use xlsxgrid::{to_unix_timestamp, CellValue};
///
/// assert_eq!(to_unix_timestamp(&CellValue::Integer(25569)), CellValue::Float(0.0));
/// let text = CellValue::Text("not-a-number".into());
/// assert_eq!(to_unix_timestamp(&text), text);
/// ```
pub fn to_unix_timestamp(value: &CellValue) -> CellValue {
    let serial = match value {
        CellValue::Integer(i) => Some(*i as f64),
        CellValue::Float(f) => Some(*f),
        CellValue::Text(s) => parse_number(s),
        CellValue::Null | CellValue::Boolean(_) | CellValue::Error(_) => None,
    };
    match serial {
        Some(serial) => CellValue::Float(serial_to_unix_seconds(serial)),
        None => value.clone(),
    }
}
