//! Contact Book - an in-memory assistant bot for contacts and birthdays.
//!
//! The bot reads one command per line, keeps names, phone numbers and
//! birthdays in memory, and reports whose birthday is coming up.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: The `Record` for one contact and upcoming-birthday rows
//! - **repositories**: The `ContactRepository` trait and the in-memory `AddressBook`
//! - **bot**: Command parsing, handlers and the read-eval-print loop
//! - **error**: Handler and configuration error types
//! - **config**: Optional settings from the environment
//!
//! # Known limitation
//!
//! The upcoming-birthdays query places each birthday in the current calendar
//! year only. Near the end of December, birthdays in early January of the
//! next year are not reported.

pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use bot::{Bot, Command, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError};
pub use models::{Record, UpcomingBirthday};
pub use repositories::{AddressBook, ContactRepository};
