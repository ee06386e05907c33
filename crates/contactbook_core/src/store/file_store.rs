//! File-backed address book store.
//!
//! # Responsibility
//! - Read and write the encoded book at one filesystem path.
//! - Emit `store_load` / `store_save` events with duration and status.
//!
//! # Invariants
//! - A missing file loads as an empty book.
//! - Saves go through a sibling temp file and a rename, so readers never see
//!   a half-written document.
//! - Log lines carry counts and durations only, never contact data.

use super::codec::{decode_book, encode_book};
use super::{BookStore, StoreResult};
use crate::model::address_book::AddressBook;
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Stores the address book as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    fn read_book(&self) -> StoreResult<Option<AddressBook>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(decode_book(&bytes)?))
    }

    fn write_book(&self, book: &AddressBook) -> StoreResult<()> {
        let bytes = encode_book(book)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let temp_path = self.temp_path();
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> StoreResult<AddressBook> {
        let started_at = Instant::now();
        info!("event=store_load module=store status=start mode=file");

        match self.read_book() {
            Ok(Some(book)) => {
                info!(
                    "event=store_load module=store status=ok mode=file records={} duration_ms={}",
                    book.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(book)
            }
            Ok(None) => {
                info!(
                    "event=store_load module=store status=ok mode=file records=0 fresh=true duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(AddressBook::new())
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn save(&self, book: &AddressBook) -> StoreResult<()> {
        let started_at = Instant::now();

        match self.write_book(book) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok mode=file records={} duration_ms={}",
                    book.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::JsonFileStore;
    use std::path::Path;

    #[test]
    fn temp_path_is_a_sibling() {
        let store = JsonFileStore::new("/data/book.json");
        assert_eq!(store.temp_path(), Path::new("/data/book.json.tmp"));
    }
}
