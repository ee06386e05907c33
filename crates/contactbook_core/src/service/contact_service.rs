//! Contact use-case service.
//!
//! # Responsibility
//! - Provide the operations a command layer dispatches to.
//! - Own the loaded address book and the store it persists through.
//!
//! # Invariants
//! - Every operation is all-or-nothing: inputs are validated before the
//!   book is touched.
//! - Unknown contact names surface as `BookError::ContactNotFound`.
//! - Persistence only happens through an explicit `persist()` call.

use crate::model::address_book::{AddressBook, UpcomingBirthday};
use crate::model::field::{Birthday, Phone};
use crate::model::record::Record;
use crate::model::{BookError, BookResult};
use crate::store::{BookStore, StoreResult};
use chrono::NaiveDate;
use log::debug;

/// Result of [`ContactService::add_contact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was created.
    Added,
    /// The phone was appended to an existing record.
    Updated,
}

/// Use-case wrapper around one address book and its store.
pub struct ContactService<S: BookStore> {
    store: S,
    book: AddressBook,
}

impl<S: BookStore> ContactService<S> {
    /// Loads the book from `store`. Missing storage starts an empty book.
    pub fn open(store: S) -> StoreResult<Self> {
        let book = store.load()?;
        Ok(Self { store, book })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes the whole book back to the store.
    pub fn persist(&self) -> StoreResult<()> {
        self.store.save(&self.book)
    }

    /// Adds `phone` to the contact `name`, creating the contact if needed.
    ///
    /// Existing records are merged into, never replaced.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<AddOutcome> {
        let mut record = Record::new(name)?;
        record.add_phone(phone)?;

        if self.book.upsert_merge(record) {
            Ok(AddOutcome::Updated)
        } else {
            Ok(AddOutcome::Added)
        }
    }

    pub fn change_phone(&mut self, name: &str, old_phone: &str, new_phone: &str) -> BookResult<()> {
        self.record_mut(name)?.edit_phone(old_phone, new_phone)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<()> {
        self.record_mut(name)?.remove_phone(phone)?;
        Ok(())
    }

    pub fn phones(&self, name: &str) -> BookResult<&[Phone]> {
        Ok(self.record(name)?.phones())
    }

    /// Sets or overwrites the birthday of `name`.
    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> BookResult<()> {
        self.record_mut(name)?.add_birthday(birthday)
    }

    pub fn birthday(&self, name: &str) -> BookResult<Option<&Birthday>> {
        Ok(self.record(name)?.birthday())
    }

    /// Removes the contact `name`.
    pub fn delete_contact(&mut self, name: &str) -> BookResult<Record> {
        self.book
            .delete(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let upcoming = self.book.get_upcoming_birthdays(today);
        debug!(
            "event=birthday_query module=service status=ok records={} matches={}",
            self.book.len(),
            upcoming.len()
        );
        upcoming
    }

    fn record(&self, name: &str) -> BookResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }
}
