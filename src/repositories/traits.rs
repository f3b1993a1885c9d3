use crate::models::{Record, UpcomingBirthday};
use chrono::{Datelike, Local, NaiveDate};

/// Storage for contact records, keyed by exact contact name.
///
/// Provides abstraction over where records live so the bot handlers and the
/// birthday query can work against any implementation (in-memory, test double).
pub trait ContactRepository {
    /// Insert `record`, overwriting whatever is stored under the same name.
    fn add_record(&mut self, record: Record);

    /// Look up a record by exact, case-sensitive name.
    fn find(&self, name: &str) -> Option<&Record>;

    /// Mutable lookup by exact, case-sensitive name.
    fn find_mut(&mut self, name: &str) -> Option<&mut Record>;

    /// Remove a record. Returns the removed record, or `None` if absent.
    fn delete(&mut self, name: &str) -> Option<Record>;

    /// All records in insertion order.
    fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Contacts whose birthday falls within `days` days from today (inclusive).
    fn upcoming_birthdays(&self, days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    /// Contacts whose birthday falls within `days` days of `today` (inclusive).
    ///
    /// Each birthday is placed in `today`'s year and kept when it is between
    /// zero and `days` days away. Birthdays are never moved into the next year,
    /// so in late December a birthday in early January is not reported.
    fn upcoming_birthdays_from(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        let window = i64::from(days);

        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let congratulation_date = birthday.in_year(today.year())?;
                let offset = (congratulation_date - today).num_days();

                (0..=window).contains(&offset).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date,
                })
            })
            .collect()
    }
}
