//! Typed cell values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value of one grid position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    /// No value: an absent cell, or a cell without a value field.
    #[default]
    Null,
    Text(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    /// Error text such as `#DIV/0!`.
    Error(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// String content of `Text` and `Error` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) | CellValue::Error(s) => Some(s),
            CellValue::Null | CellValue::Boolean(_) | CellValue::Integer(_) | CellValue::Float(_) => {
                None
            }
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Text(s) | CellValue::Error(s) => f.write_str(s),
            CellValue::Boolean(true) => f.write_str("TRUE"),
            CellValue::Boolean(false) => f.write_str("FALSE"),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Parse text the way a numeric literal is recognised: finite decimal or
/// exponent notation, optional sign, no surrounding whitespace.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce a raw untyped value into the narrowest matching variant.
///
/// Integral text becomes `Integer`, including numerals with a zero fraction
/// (`"7.0"`, `"1e3"`) that fit in an `i64`; other finite numerals become
/// `Float`; anything else stays `Text`.
pub(crate) fn coerce_numeric(raw: &str) -> CellValue {
    if let Ok(i) = raw.parse::<i64>() {
        return CellValue::Integer(i);
    }
    match parse_number(raw) {
        // 2^63 bounds the range where the cast is exact
        Some(v) if v.fract() == 0.0 && v.abs() < 9.223_372_036_854_775_808e18 => {
            CellValue::Integer(v as i64)
        }
        Some(v) => CellValue::Float(v),
        None => CellValue::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_integer() {
        assert_eq!(coerce_numeric("123"), CellValue::Integer(123));
        assert_eq!(coerce_numeric("-42"), CellValue::Integer(-42));
        assert_eq!(coerce_numeric("7.0"), CellValue::Integer(7));
        assert_eq!(coerce_numeric("1e3"), CellValue::Integer(1000));
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce_numeric("123.45"), CellValue::Float(123.45));
        assert_eq!(coerce_numeric("1.5E-3"), CellValue::Float(0.0015));
        assert_eq!(coerce_numeric("1e300"), CellValue::Float(1e300));
    }

    #[test]
    fn test_coerce_text() {
        assert_eq!(coerce_numeric("12a"), CellValue::Text("12a".to_string()));
        assert_eq!(coerce_numeric(""), CellValue::Text(String::new()));
        assert_eq!(coerce_numeric("inf"), CellValue::Text("inf".to_string()));
        assert_eq!(coerce_numeric("NaN"), CellValue::Text("NaN".to_string()));
        assert_eq!(coerce_numeric(" 1"), CellValue::Text(" 1".to_string()));
    }

    #[test]
    fn test_accessors() {
        assert!(CellValue::Null.is_null());
        assert_eq!(CellValue::Text("x".into()).as_str(), Some("x"));
        assert_eq!(CellValue::Error("#N/A".into()).as_str(), Some("#N/A"));
        assert_eq!(CellValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::Float(2.5).as_i64(), None);
        assert_eq!(CellValue::Boolean(true).as_bool(), Some(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Boolean(false).to_string(), "FALSE");
        assert_eq!(CellValue::Integer(10).to_string(), "10");
        assert_eq!(CellValue::Float(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&CellValue::Integer(5)).unwrap();
        assert_eq!(json, r#"{"type":"integer","value":5}"#);
        let json = serde_json::to_string(&CellValue::Null).unwrap();
        assert_eq!(json, r#"{"type":"null"}"#);
    }
}
