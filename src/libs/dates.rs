//! Conversion between the two textual date forms used by agenda.
//!
//! Users type and read dates as `DD/MM/YYYY HH:MM` (24-hour clock, no
//! seconds). The database stores `YYYY-MM-DD HH:MM`, which sorts
//! lexically in chronological order. Both forms carry minute precision and
//! no timezone; [`Timestamp`] is the in-memory value between them.
//!
//! ## Usage
//!
//! ```rust
//! use agenda::libs::dates::{parse_human_date, to_canonical, format_human_date};
//!
//! let start = parse_human_date("29/08/2025 09:30").unwrap();
//! assert_eq!(to_canonical(start), "2025-08-29 09:30");
//! assert_eq!(format_human_date(start), "29/08/2025 09:30");
//! ```

use super::error::ParseError;
use chrono::{NaiveDateTime, Timelike};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

/// `chrono` pattern for the user-facing form.
pub const HUMAN_FORMAT: &str = "%d/%m/%Y %H:%M";

/// `chrono` pattern for the storage form.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M";

const HUMAN_PATTERN: &str = "DD/MM/YYYY HH:MM (e.g. 29/08/2025 09:30)";
const CANONICAL_PATTERN: &str = "YYYY-MM-DD HH:MM";

/// Field layout checked before handing text to `chrono`, whose `%Y` takes
/// signed years of any width and whose space matches zero or more spaces.
struct Layout {
    separator: char,
    year_first: bool,
    /// Minimum digits for every field except the year, which is always four.
    min_width: usize,
}

const HUMAN_LAYOUT: Layout = Layout {
    separator: '/',
    year_first: false,
    min_width: 1,
};

const CANONICAL_LAYOUT: Layout = Layout {
    separator: '-',
    year_first: true,
    min_width: 2,
};

impl Layout {
    /// Checks digit counts and separators only; calendar ranges are left to `chrono`.
    fn matches(&self, text: &str) -> bool {
        let Some((date, time)) = text.split_once(' ') else {
            return false;
        };
        let date: Vec<&str> = date.split(self.separator).collect();
        let time: Vec<&str> = time.split(':').collect();
        if date.len() != 3 || time.len() != 2 {
            return false;
        }

        let year = if self.year_first { 0 } else { 2 };
        let date_ok = date.iter().enumerate().all(|(i, field)| {
            if i == year {
                is_digits(field, 4, 4)
            } else {
                is_digits(field, self.min_width, 2)
            }
        });

        date_ok && time.iter().all(|field| is_digits(field, self.min_width, 2))
    }
}

fn is_digits(field: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
}

/// A naive local date and time truncated to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Wraps a `NaiveDateTime`, dropping seconds and sub-second parts.
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        let truncated = datetime.with_second(0).and_then(|dt| dt.with_nanosecond(0)).unwrap_or(datetime);
        Self(truncated)
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

/// Parses a user-entered `DD/MM/YYYY HH:MM` date.
///
/// Surrounding whitespace is ignored. Wrong separators, impossible calendar
/// values (`31/02`, month 13, hour 24) and trailing content are rejected.
/// The year must have exactly four digits and date and time are separated
/// by a single space. Day, month, hour and minute may be given without zero
/// padding.
pub fn parse_human_date(text: &str) -> Result<Timestamp, ParseError> {
    parse_with(text, &HUMAN_LAYOUT, HUMAN_FORMAT, HUMAN_PATTERN)
}

/// Renders a timestamp in the user-facing form, always zero-padded.
pub fn format_human_date(timestamp: Timestamp) -> String {
    timestamp.0.format(HUMAN_FORMAT).to_string()
}

/// Renders a timestamp in the storage form.
pub fn to_canonical(timestamp: Timestamp) -> String {
    timestamp.0.format(CANONICAL_FORMAT).to_string()
}

/// Parses the storage form written by [`to_canonical`]. Every field is zero-padded.
pub fn from_canonical(text: &str) -> Result<Timestamp, ParseError> {
    parse_with(text, &CANONICAL_LAYOUT, CANONICAL_FORMAT, CANONICAL_PATTERN)
}

fn parse_with(text: &str, layout: &Layout, format: &str, expected: &'static str) -> Result<Timestamp, ParseError> {
    let error = || ParseError {
        input: text.to_string(),
        expected,
    };

    let trimmed = text.trim();
    if !layout.matches(trimmed) {
        return Err(error());
    }
    NaiveDateTime::parse_from_str(trimmed, format).map(Timestamp).map_err(|_| error())
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_human_date(*self))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_canonical(*self))
    }
}

impl ToSql for Timestamp {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(to_canonical(*self)))
    }
}

impl FromSql for Timestamp {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        from_canonical(text).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
