//! Core domain logic for the contact book.
//! Fields, records, the address book and its persistence live here; the
//! command loop that drives them lives in `contactbook_cli`.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::address_book::{AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use model::field::{Birthday, Field, FieldValidationError, Name, Phone, DATE_FORMAT};
pub use model::record::Record;
pub use model::{BookError, BookResult};
pub use service::contact_service::{AddOutcome, ContactService};
pub use store::codec::{decode_book, encode_book, SCHEMA_VERSION};
pub use store::{BookStore, JsonFileStore, MemoryBookStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
