//! Command handlers for the assistant bot.
//!
//! Each handler validates its arguments, reads or mutates the address book and
//! returns the text to show on success. Failures come back as [`CommandError`]
//! and are rendered by the REPL.

use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use crate::repositories::ContactRepository;
use tracing::info;

/// Positional argument `index`, or `MissingArgument` if it isn't there.
fn arg(args: &[String], index: usize) -> CommandResult<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument)
}

/// Reject more than `max` arguments.
fn at_most(args: &[String], max: usize) -> CommandResult<()> {
    if args.len() > max {
        return Err(CommandError::InvalidArgument(format!(
            "expected at most {} argument(s), got {}",
            max,
            args.len()
        )));
    }
    Ok(())
}

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone>`: create the contact if needed and append the phone.
///
/// The phone is validated before a new record is inserted, so a bad phone
/// never leaves an empty contact behind.
pub fn add(args: &[String], book: &mut dyn ContactRepository) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;
    at_most(args, 2)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        info!(name, "Contact updated");
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    info!(name, "Contact added");
    Ok("Contact added.".to_string())
}

/// `change <name> <phone>`: replace all phones with one new phone.
pub fn change(args: &[String], book: &mut dyn ContactRepository) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;
    at_most(args, 2)?;

    match book.find_mut(name) {
        Some(record) => {
            record.replace_phones(phone)?;
            info!(name, "Contact phone changed");
            Ok("Contact updated.".to_string())
        }
        None => Ok("Contact not found.".to_string()),
    }
}

/// `phone <name>`: the first stored phone.
pub fn phone(args: &[String], book: &dyn ContactRepository) -> CommandResult<String> {
    let name = arg(args, 0)?;
    at_most(args, 1)?;

    let Some(record) = book.find(name) else {
        return Ok("Contact not found.".to_string());
    };

    let phone = record.first_phone().ok_or(CommandError::LookupIndex)?;
    Ok(format!("The phone number for {} is {}.", name, phone))
}

/// `all`: every record, one per line.
pub fn all(args: &[String], book: &dyn ContactRepository) -> CommandResult<String> {
    at_most(args, 0)?;

    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }

    Ok(book
        .records()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut dyn ContactRepository) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let birthday = arg(args, 1)?;
    at_most(args, 2)?;

    match book.find_mut(name) {
        Some(record) => {
            record.set_birthday(birthday)?;
            info!(name, birthday, "Birthday set");
            Ok(format!("Birthday added for {}.", name))
        }
        None => Ok(format!("Contact {} not found.", name)),
    }
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &dyn ContactRepository) -> CommandResult<String> {
    let name = arg(args, 0)?;
    at_most(args, 1)?;

    Ok(match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => format!("The birthday of {} is {}.", name, birthday),
            None => format!("No birthday set for {}.", name),
        },
        None => format!("Contact {} not found.", name),
    })
}

/// `birthdays [days]`: contacts congratulated within the window.
pub fn birthdays(
    args: &[String],
    book: &dyn ContactRepository,
    default_days: u32,
) -> CommandResult<String> {
    at_most(args, 1)?;

    let days = match args.first() {
        Some(raw) => raw.parse::<u32>().map_err(|_| {
            CommandError::InvalidArgument(format!("days must be a non-negative integer: {}", raw))
        })?,
        None => default_days,
    };

    let upcoming = book.upcoming_birthdays(days);
    if upcoming.is_empty() {
        return Ok(format!("No upcoming birthdays in the next {} days.", days));
    }

    let mut lines = vec![format!("Upcoming birthdays in the next {} days:", days)];
    lines.extend(upcoming.iter().map(ToString::to_string));
    Ok(lines.join("\n"))
}
