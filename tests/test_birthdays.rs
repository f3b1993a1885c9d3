//! Upcoming-birthday query with a fixed "today".

use chrono::NaiveDate;
use contact_book::{AddressBook, ContactRepository, Record};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book_with(birthdays: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in birthdays {
        let mut record = Record::new(*name).unwrap();
        record.set_birthday(birthday).unwrap();
        book.add_record(record);
    }
    book
}

#[test]
fn test_birthday_inside_window() {
    let book = book_with(&[("Alice", "05.06.1990")]);

    let upcoming = book.upcoming_birthdays_from(date(2024, 6, 1), 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Alice");
    assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 5));
    assert_eq!(upcoming[0].congratulation_date_str(), "05.06.2024");
}

#[test]
fn test_birthday_already_passed() {
    let book = book_with(&[("Alice", "05.06.1990")]);
    assert!(book.upcoming_birthdays_from(date(2024, 6, 10), 7).is_empty());
}

#[test]
fn test_window_bounds_are_inclusive() {
    let book = book_with(&[("Today", "01.06.1990"), ("Edge", "08.06.1991"), ("Out", "09.06.1992")]);

    let names: Vec<String> = book
        .upcoming_birthdays_from(date(2024, 6, 1), 7)
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, vec!["Today", "Edge"]);
}

#[test]
fn test_zero_day_window_is_today_only() {
    let book = book_with(&[("Today", "01.06.1990"), ("Tomorrow", "02.06.1990")]);

    let upcoming = book.upcoming_birthdays_from(date(2024, 6, 1), 0);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Today");
}

#[test]
fn test_results_follow_insertion_order() {
    let book = book_with(&[("Late", "07.06.1990"), ("Early", "02.06.1990")]);

    let names: Vec<String> = book
        .upcoming_birthdays_from(date(2024, 6, 1), 7)
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, vec!["Late", "Early"]);
}

#[test]
fn test_no_year_wrap() {
    let book = book_with(&[("NewYear", "02.01.1990")]);

    // Only four days away, but the projection stays in the current year.
    assert!(book.upcoming_birthdays_from(date(2024, 12, 29), 7).is_empty());
}

#[test]
fn test_leap_day_birthday_in_common_year() {
    let book = book_with(&[("Leap", "29.02.2000")]);

    let upcoming = book.upcoming_birthdays_from(date(2023, 2, 25), 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].congratulation_date_str(), "28.02.2023");
}

#[test]
fn test_contacts_without_birthday_are_skipped() {
    let mut book = book_with(&[("Alice", "03.06.1990")]);
    book.add_record(Record::new("Bob").unwrap());

    let upcoming = book.upcoming_birthdays_from(date(2024, 6, 1), 365);
    assert_eq!(upcoming.len(), 1);
}
