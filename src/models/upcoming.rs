//! Result rows of the upcoming-birthdays query.

use crate::domain::DATE_FORMAT;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// The birthday projected onto the current year
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn congratulation_date_str(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    date.format(DATE_FORMAT).to_string().serialize(serializer)
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.congratulation_date_str())
    }
}
