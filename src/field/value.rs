//! Typed cell values

use std::fmt;

use chrono::NaiveDateTime;

use super::errors::{FieldError, FieldResult, NumberParseError};
use super::types::FieldType;
use crate::date_format::DateFormat;

/// One typed scalar cell.
///
/// The variant always matches the `FieldType` of the column it was created
/// for; parsing replaces the held value but never changes the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Category(String),
    Number(f64),
    Date(NaiveDateTime),
}

impl Field {
    /// Creates the default value for a column type.
    ///
    /// Category is empty, Number is `0`, Date is the Unix epoch.
    pub fn new(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Category => Field::Category(String::new()),
            FieldType::Number => Field::Number(0.0),
            FieldType::Date => Field::Date(NaiveDateTime::default()),
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Field::Category(_) => FieldType::Category,
            Field::Number(_) => FieldType::Number,
            Field::Date(_) => FieldType::Date,
        }
    }

    /// Parses `raw` into this cell.
    ///
    /// On failure the held value is left untouched.
    pub fn parse(&mut self, raw: &str, date_format: &DateFormat) -> FieldResult<()> {
        match self {
            Field::Category(value) => {
                *value = raw.to_string();
            }
            Field::Number(value) => {
                *value = parse_number(raw).map_err(|source| FieldError::InvalidNumber {
                    input: raw.to_string(),
                    source,
                })?;
            }
            Field::Date(value) => {
                *value = date_format.parse(raw)?;
            }
        }
        Ok(())
    }

    pub fn as_category(&self) -> Option<&str> {
        match self {
            Field::Category(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Field::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&NaiveDateTime> {
        match self {
            Field::Date(value) => Some(value),
            _ => None,
        }
    }
}

/// Finite literals that overflow `f64` are rejected; only an explicit
/// `inf`/`infinity` literal yields an infinite value.
fn parse_number(raw: &str) -> Result<f64, NumberParseError> {
    let value: f64 = raw.parse()?;
    if value.is_infinite() {
        let literal = raw
            .strip_prefix(|c: char| c == '+' || c == '-')
            .unwrap_or(raw)
            .to_ascii_lowercase();
        if literal != "inf" && literal != "infinity" {
            return Err(NumberParseError::OutOfRange);
        }
    }
    Ok(value)
}

/// Dates render as `YYYY-MM-DD HH:MM:SS` with no zone suffix, whatever
/// pattern they were parsed with; values carry no time zone.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Category(value) => f.write_str(value),
            Field::Number(value) => write!(f, "{value}"),
            Field::Date(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}
