//! Versioned JSON encoding of an address book.
//!
//! Layout (version 1):
//!
//! ```json
//! { "version": 1,
//!   "records": [ { "name": "Alice", "phones": ["0501234567"], "birthday": "10.06.1990" } ] }
//! ```
//!
//! Records are written in ascending name order. `birthday` is `null` when
//! unset.

use super::{StoreError, StoreResult};
use crate::model::address_book::AddressBook;
use crate::model::field::{Birthday, Field, FieldValidationError, Name, Phone};
use crate::model::record::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current document schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct BookDocumentRef<'a> {
    version: u32,
    records: Vec<RecordDocumentRef<'a>>,
}

#[derive(Serialize)]
struct RecordDocumentRef<'a> {
    name: &'a str,
    phones: Vec<&'a str>,
    birthday: Option<&'a str>,
}

#[derive(Deserialize)]
struct BookDocument {
    version: u32,
    #[serde(default)]
    records: Vec<RecordDocument>,
}

// Phones and birthdays stay untyped until field validation runs, so a bad
// value reports the field error rather than a serde type mismatch.
#[derive(Deserialize)]
struct RecordDocument {
    name: String,
    #[serde(default)]
    phones: Vec<Value>,
    #[serde(default)]
    birthday: Option<Value>,
}

/// Serializes `book` into the current document schema.
pub fn encode_book(book: &AddressBook) -> StoreResult<Vec<u8>> {
    let document = BookDocumentRef {
        version: SCHEMA_VERSION,
        records: book
            .records()
            .map(|record| RecordDocumentRef {
                name: record.name().value(),
                phones: record.phones().iter().map(Field::value).collect(),
                birthday: record.get_birthday(),
            })
            .collect(),
    };
    Ok(serde_json::to_vec_pretty(&document)?)
}

/// Parses and validates a document produced by [`encode_book`].
///
/// # Errors
/// - `Encoding` when the bytes are not a well-formed document.
/// - `UnsupportedSchemaVersion` when written by a newer build.
/// - `InvalidData` on field validation failures or duplicate names.
pub fn decode_book(bytes: &[u8]) -> StoreResult<AddressBook> {
    let document: BookDocument = serde_json::from_slice(bytes)?;
    if document.version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedSchemaVersion {
            stored: document.version,
            latest_supported: SCHEMA_VERSION,
        });
    }

    let mut book = AddressBook::new();
    for entry in document.records {
        let record = decode_record(entry)?;
        let name = record.name().value().to_string();
        if book.add_record(record).is_some() {
            return Err(StoreError::InvalidData(format!(
                "duplicate contact name `{name}`"
            )));
        }
    }
    Ok(book)
}

fn decode_record(entry: RecordDocument) -> StoreResult<Record> {
    let name = Name::new(entry.name)?;
    let phones = entry
        .phones
        .iter()
        .map(decode_phone)
        .collect::<Result<Vec<_>, _>>()?;
    let birthday = match entry.birthday {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(Birthday::new(text)?),
        Some(_) => return Err(FieldValidationError::BirthdayNotText.into()),
    };
    Ok(Record::from_parts(name, phones, birthday))
}

fn decode_phone(value: &Value) -> Result<Phone, FieldValidationError> {
    match value {
        Value::String(text) => Phone::new(text.as_str()),
        // Numeric phones are normalized to their decimal text.
        Value::Number(number) => Phone::new(number.to_string()),
        _ => Err(FieldValidationError::InvalidPhone),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_book, encode_book, SCHEMA_VERSION};
    use crate::model::address_book::AddressBook;
    use crate::model::field::Field;
    use crate::model::record::Record;
    use crate::store::StoreError;
    use serde_json::json;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        let mut alice = Record::new("Alice").unwrap();
        alice.add_phone("2222222222").unwrap();
        alice.add_phone("1111111111").unwrap();
        alice.add_birthday("10.06.1990").unwrap();
        book.add_record(alice);
        book.add_record(Record::new("Bob").unwrap());
        book
    }

    #[test]
    fn encode_uses_expected_wire_fields() {
        let bytes = encode_book(&sample_book()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["version"], SCHEMA_VERSION);
        assert_eq!(json["records"][0]["name"], "Alice");
        assert_eq!(json["records"][0]["phones"], json!(["2222222222", "1111111111"]));
        assert_eq!(json["records"][0]["birthday"], "10.06.1990");
        assert_eq!(json["records"][1]["name"], "Bob");
        assert_eq!(json["records"][1]["phones"], json!([]));
        assert!(json["records"][1]["birthday"].is_null());
    }

    #[test]
    fn decode_restores_identical_book() {
        let book = sample_book();
        let decoded = decode_book(&encode_book(&book).unwrap()).unwrap();
        assert_eq!(decoded, book);

        let alice = decoded.find("Alice").unwrap();
        let phones: Vec<&str> = alice.phones().iter().map(Field::value).collect();
        assert_eq!(phones, ["2222222222", "1111111111"]);
        assert_eq!(alice.get_birthday(), Some("10.06.1990"));
    }

    #[test]
    fn decode_accepts_numeric_phone_and_missing_optionals() {
        let bytes = serde_json::to_vec(&json!({
            "version": 1,
            "records": [
                { "name": "Carol", "phones": [5012345678_u64] },
                { "name": "Dave" }
            ]
        }))
        .unwrap();

        let book = decode_book(&bytes).unwrap();
        let carol = book.find("Carol").unwrap();
        assert_eq!(carol.phones()[0].value(), "5012345678");
        assert!(book.find("Dave").unwrap().birthday().is_none());
    }

    #[test]
    fn decode_rejects_invalid_fields() {
        let cases = [
            (
                json!({ "version": 1, "records": [{ "name": "A", "phones": ["123"] }] }),
                "Phone number must be a 10-digit number.",
            ),
            (
                json!({ "version": 1, "records": [{ "name": "A", "birthday": "31.04.1990" }] }),
                "Birthday must be in the format 'DD.MM.YYYY'.",
            ),
            (
                json!({ "version": 1, "records": [{ "name": "A", "birthday": 19900610 }] }),
                "Birthday must be a string in format 'DD.MM.YYYY'.",
            ),
            (
                json!({ "version": 1, "records": [{ "name": "" }] }),
                "Name must not be empty.",
            ),
        ];

        for (value, expected) in cases {
            let err = decode_book(&serde_json::to_vec(&value).unwrap()).unwrap_err();
            match err {
                StoreError::InvalidData(message) => assert_eq!(message, expected),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn decode_rejects_duplicate_names() {
        let bytes = serde_json::to_vec(&json!({
            "version": 1,
            "records": [{ "name": "A" }, { "name": "A" }]
        }))
        .unwrap();

        let err = decode_book(&bytes).unwrap_err();
        assert!(err.to_string().contains("duplicate contact name `A`"));
    }

    #[test]
    fn decode_rejects_newer_schema_and_garbage() {
        let bytes = serde_json::to_vec(&json!({ "version": 999, "records": [] })).unwrap();
        match decode_book(&bytes).unwrap_err() {
            StoreError::UnsupportedSchemaVersion {
                stored,
                latest_supported,
            } => {
                assert_eq!(stored, 999);
                assert_eq!(latest_supported, SCHEMA_VERSION);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            decode_book(b"\x80\x04pickle").unwrap_err(),
            StoreError::Encoding(_)
        ));
    }
}
