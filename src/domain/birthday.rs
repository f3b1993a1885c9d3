//! Birthday value object.

use super::errors::{ValidationError, ValidationResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `chrono` format string matching the accepted `DD.MM.YYYY` input.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A calendar date of birth, parsed from `DD.MM.YYYY`.
///
/// Parsing is strict: two-digit day, two-digit month, four-digit year, `.`
/// separators and nothing else. Because of that, formatting a parsed birthday
/// gives back exactly the string it was parsed from.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("05.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "05.06.1990");
/// assert!(Birthday::new("5.6.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the input has the wrong
    /// shape or does not name a real calendar date (e.g. `31.04.2000`).
    pub fn new(value: &str) -> ValidationResult<Self> {
        Self::parse(value)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDateFormat(value.to_string()))
    }

    fn parse(value: &str) -> Option<NaiveDate> {
        let bytes = value.as_bytes();
        if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
            return None;
        }

        let digits_ok = bytes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2 && *i != 5)
            .all(|(_, b)| b.is_ascii_digit());
        if !digits_ok {
            return None;
        }

        let day: u32 = value[0..2].parse().ok()?;
        let month: u32 = value[3..5].parse().ok()?;
        let year: i32 = value[6..10].parse().ok()?;

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// The underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's month and day placed in `year`.
    ///
    /// 29 February lands on 28 February in non-leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
