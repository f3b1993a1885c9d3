//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown in place of a missing birthday.
pub const NO_BIRTHDAY: &str = "not set";

/// A contact: name, phone numbers in insertion order, optional birthday.
///
/// The name is fixed at construction. Phones may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The first phone ever added (or the replacement set by `replace_phones`).
    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> ValidationResult<Phone> {
        let phone = Phone::new(phone)?;
        self.phones.push(phone.clone());
        Ok(phone)
    }

    /// Replace every stored phone with the single validated `phone`.
    ///
    /// On validation failure the existing phones are left untouched.
    pub fn replace_phones(&mut self, phone: &str) -> ValidationResult<Phone> {
        let phone = Phone::new(phone)?;
        self.phones = vec![phone.clone()];
        Ok(phone)
    }

    /// Validate `DD.MM.YYYY` and replace any existing birthday.
    pub fn set_birthday(&mut self, birthday: &str) -> ValidationResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "{}", NO_BIRTHDAY),
        }
    }
}
