//! Date format configuration
//!
//! Every table owns one `DateFormat`; all date cells of that table are parsed
//! and rendered with it. Patterns use chrono's strftime syntax.

use std::fmt;

use chrono::format::{Fixed, Item, Numeric, ParseErrorKind, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::field::{DateParseError, FieldError, FieldResult};

/// Day-month-year with a 24h clock, e.g. `15-07-1990 10:22:04`.
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// A strftime pattern used to parse and render date cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }

    /// Parses `raw` against the pattern.
    ///
    /// The input must be exactly what the pattern renders for the parsed
    /// value: no extra or missing padding, no extra whitespace, no leap
    /// seconds. Patterns without any time specifier resolve to midnight.
    pub fn parse(&self, raw: &str) -> FieldResult<NaiveDateTime> {
        self.parse_exact(raw).map_err(|source| FieldError::InvalidDate {
            input: raw.to_string(),
            pattern: self.0.clone(),
            source,
        })
    }

    fn parse_exact(&self, raw: &str) -> Result<NaiveDateTime, DateParseError> {
        let value = match NaiveDateTime::parse_from_str(raw, &self.0) {
            Ok(value) => value,
            Err(err) if err.kind() == ParseErrorKind::NotEnough && !self.has_time() => {
                NaiveDate::parse_from_str(raw, &self.0)?.and_time(NaiveTime::default())
            }
            Err(err) => return Err(err.into()),
        };

        if value.nanosecond() >= 1_000_000_000 {
            return Err(DateParseError::LeapSecond);
        }
        let expected = self.format(&value);
        if expected != raw {
            return Err(DateParseError::NotExact { expected });
        }
        Ok(value)
    }

    /// Whether the pattern mentions any time-of-day field.
    fn has_time(&self) -> bool {
        StrftimeItems::new(&self.0).any(|item| {
            matches!(
                item,
                Item::Numeric(
                    Numeric::Hour
                        | Numeric::Hour12
                        | Numeric::Minute
                        | Numeric::Second
                        | Numeric::Nanosecond
                        | Numeric::Timestamp,
                    _
                ) | Item::Fixed(
                    Fixed::LowerAmPm
                        | Fixed::UpperAmPm
                        | Fixed::Nanosecond
                        | Fixed::Nanosecond3
                        | Fixed::Nanosecond6
                        | Fixed::Nanosecond9
                        | Fixed::RFC2822
                        | Fixed::RFC3339
                )
            )
        })
    }

    /// Renders `value` with the pattern.
    pub fn format(&self, value: &NaiveDateTime) -> String {
        value.format(&self.0).to_string()
    }

    /// Diagnostic round trip: the re-rendered sample, or the parse error text.
    pub fn probe(&self, sample: &str) -> String {
        match self.parse(sample) {
            Ok(value) => self.format(&value),
            Err(err) => err.to_string(),
        }
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DateFormat {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}
