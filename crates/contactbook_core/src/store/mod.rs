//! Address book persistence.
//!
//! # Responsibility
//! - Encode the whole address book into a versioned, field-by-field document.
//! - Load and save that document through a `BookStore` implementation.
//!
//! # Invariants
//! - Missing storage loads as an empty book, never as an error.
//! - Decoding re-validates every field; invalid persisted state is rejected
//!   instead of being masked.
//! - A document written by a newer schema version is refused.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::address_book::AddressBook;
use crate::model::FieldValidationError;

pub mod codec;
mod file_store;
mod memory_store;

pub use file_store::JsonFileStore;
pub use memory_store::MemoryBookStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Encoding(serde_json::Error),
    InvalidData(String),
    UnsupportedSchemaVersion { stored: u32, latest_supported: u32 },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Encoding(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted address book: {message}"),
            Self::UnsupportedSchemaVersion {
                stored,
                latest_supported,
            } => write!(
                f,
                "address book schema version {stored} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encoding(err) => Some(err),
            Self::InvalidData(_) => None,
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encoding(value)
    }
}

impl From<FieldValidationError> for StoreError {
    fn from(value: FieldValidationError) -> Self {
        Self::InvalidData(value.to_string())
    }
}

/// Whole-book persistence contract.
pub trait BookStore {
    /// Loads the stored book, or an empty one when nothing was stored yet.
    fn load(&self) -> StoreResult<AddressBook>;
    /// Replaces the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StoreResult<()>;
}
