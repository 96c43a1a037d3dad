// src/ingest/cells.rs

use crate::domain::{CellValue, FieldKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("expected {expected}, found {raw:?}")]
pub struct CellError {
    pub expected: &'static str,
    pub raw: String,
}

/// Coerces raw cell text to the column's kind.
///
/// Blank cells are `Ok(None)`. Text that does not fit the kind is an error;
/// the caller decides what to do with it.
pub fn coerce(kind: FieldKind, raw: &str) -> Result<Option<CellValue>, CellError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value = match kind {
        FieldKind::Text => CellValue::Text(trimmed.to_string()),
        FieldKind::Number => CellValue::Number(parse_number(trimmed).ok_or_else(|| CellError {
            expected: "a number",
            raw: raw.to_string(),
        })?),
        FieldKind::Integer => CellValue::Integer(parse_integer(trimmed).ok_or_else(|| CellError {
            expected: "a whole number",
            raw: raw.to_string(),
        })?),
        FieldKind::Boolean => CellValue::Boolean(parse_bool(trimmed).ok_or_else(|| CellError {
            expected: "true or false",
            raw: raw.to_string(),
        })?),
    };

    Ok(Some(value))
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_integer(s: &str) -> Option<i64> {
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    // Spreadsheet exports sometimes write ids as "7.0".
    parse_number(s)
        .filter(|v| v.fract() == 0.0 && v.abs() < i64::MAX as f64)
        .map(|v| v as i64)
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") || s == "1" {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") || s == "0" {
        Some(false)
    } else {
        None
    }
}
