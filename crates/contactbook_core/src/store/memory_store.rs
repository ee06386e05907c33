//! In-process address book store.

use super::codec::{decode_book, encode_book};
use super::{BookStore, StoreResult};
use crate::model::address_book::AddressBook;
use std::cell::RefCell;

/// Keeps the encoded book in memory.
///
/// Goes through the same codec as [`super::JsonFileStore`], so it exercises
/// the persisted format without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    bytes: RefCell<Option<Vec<u8>>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with already-encoded bytes.
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: RefCell::new(Some(bytes)),
        }
    }

    /// Returns a copy of the last saved bytes.
    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.bytes.borrow().clone()
    }
}

impl BookStore for MemoryBookStore {
    fn load(&self) -> StoreResult<AddressBook> {
        match self.bytes.borrow().as_deref() {
            Some(bytes) => decode_book(bytes),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, book: &AddressBook) -> StoreResult<()> {
        let bytes = encode_book(book)?;
        self.bytes.replace(Some(bytes));
        Ok(())
    }
}
