//! Contact domain model.
//!
//! # Responsibility
//! - Define validated field values, contact records and the address book.
//! - Own the upcoming-birthday computation.
//!
//! # Invariants
//! - Every address book key equals the name of the record stored under it.
//! - Failed mutations leave records and books unchanged.
//! - Nothing in this module logs or touches the filesystem.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod address_book;
pub mod field;
pub mod record;

pub use field::FieldValidationError;

pub type BookResult<T> = Result<T, BookError>;

/// Typed failure returned by record, address book and service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    Validation(FieldValidationError),
    PhoneNotFound(String),
    ContactNotFound(String),
}

impl Display for BookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::PhoneNotFound(phone) => write!(f, "Phone number {phone} not found in record."),
            Self::ContactNotFound(name) => write!(f, "No contact found with name {name}"),
        }
    }
}

impl Error for BookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::PhoneNotFound(_) => None,
            Self::ContactNotFound(_) => None,
        }
    }
}

impl From<FieldValidationError> for BookError {
    fn from(value: FieldValidationError) -> Self {
        Self::Validation(value)
    }
}
