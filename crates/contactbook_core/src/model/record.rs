//! Single contact record.
//!
//! # Responsibility
//! - Hold one permanent name, an ordered phone list and an optional birthday.
//! - Provide phone/birthday mutators that validate before touching state.
//!
//! # Invariants
//! - The name never changes after construction.
//! - Duplicate phones are allowed; lookups act on the first match.

use super::field::{Birthday, Field, Name, Phone};
use super::{BookError, BookResult};
use std::fmt::{Display, Formatter};

/// One contact: name, phones in insertion order, optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Creates an empty record for `name`.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self::with_name(Name::new(name)?))
    }

    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validates `value` and appends it. No de-duplication.
    pub fn add_phone(&mut self, value: impl Into<String>) -> BookResult<()> {
        let phone = Phone::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes the first phone equal to `value`.
    pub fn remove_phone(&mut self, value: &str) -> BookResult<Phone> {
        let index = self.phone_index(value)?;
        Ok(self.phones.remove(index))
    }

    /// Replaces the first phone equal to `old_value` in place.
    ///
    /// # Errors
    /// - `PhoneNotFound` when `old_value` is absent.
    /// - `Validation` when `new_value` is not a valid phone; the list is left
    ///   untouched in both cases.
    pub fn edit_phone(&mut self, old_value: &str, new_value: impl Into<String>) -> BookResult<()> {
        let index = self.phone_index(old_value)?;
        let replacement = Phone::new(new_value)?;
        self.phones[index] = replacement;
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.value() == value)
    }

    /// Validates and sets the birthday, overwriting any previous one.
    pub fn add_birthday(&mut self, value: impl Into<String>) -> BookResult<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Returns the stored birthday text, if any.
    pub fn get_birthday(&self) -> Option<&str> {
        self.birthday.as_ref().map(Field::value)
    }

    pub fn remove_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    /// Folds `other` into this record: its phones are appended and its
    /// birthday, when set, replaces ours. Names are not compared.
    pub fn merge_from(&mut self, other: Record) {
        self.phones.extend(other.phones);
        if other.birthday.is_some() {
            self.birthday = other.birthday;
        }
    }

    pub(crate) fn from_parts(name: Name, phones: Vec<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    fn phone_index(&self, value: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|phone| phone.value() == value)
            .ok_or_else(|| BookError::PhoneNotFound(value.to_string()))
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Field::value)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "Contact name: {}, Phones: {}", self.name, phones)
    }
}
