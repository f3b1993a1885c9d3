//! Data models for the address book.
//!
//! A [`Record`] holds everything known about one contact. Records are owned
//! by the [`AddressBook`](crate::repositories::AddressBook) under their name.

pub mod record;
pub mod upcoming;

pub use record::{Record, NO_BIRTHDAY};
pub use upcoming::UpcomingBirthday;
