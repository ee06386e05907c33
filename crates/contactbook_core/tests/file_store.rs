use contactbook_core::{
    AddressBook, BookStore, ContactService, Field, JsonFileStore, Record, StoreError,
    SCHEMA_VERSION,
};
use std::fs;

#[test]
fn missing_file_loads_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("addressbook.json"));

    let book = store.load().unwrap();
    assert!(book.is_empty());
    assert!(!store.path().exists());
}

#[test]
fn save_then_load_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested").join("addressbook.json"));

    let mut book = AddressBook::new();
    let mut alice = Record::new("Alice").unwrap();
    alice.add_phone("2222222222").unwrap();
    alice.add_phone("1111111111").unwrap();
    alice.add_birthday("29.02.2000").unwrap();
    book.add_record(alice);
    book.add_record(Record::new("Bob").unwrap());

    store.save(&book).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, book);
    let alice = loaded.find("Alice").unwrap();
    let phones: Vec<&str> = alice.phones().iter().map(Field::value).collect();
    assert_eq!(phones, ["2222222222", "1111111111"]);
    assert_eq!(alice.get_birthday(), Some("29.02.2000"));
    assert!(!dir
        .path()
        .join("nested")
        .join("addressbook.json.tmp")
        .exists());
}

#[test]
fn save_overwrites_previous_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    let store = JsonFileStore::new(&path);

    let mut service = ContactService::open(store.clone()).unwrap();
    service.add_contact("Alice", "1111111111").unwrap();
    service.persist().unwrap();
    service.delete_contact("Alice").unwrap();
    service.add_contact("Bob", "2222222222").unwrap();
    service.persist().unwrap();

    let loaded = store.load().unwrap();
    assert!(loaded.find("Alice").is_none());
    assert!(loaded.find("Bob").is_some());

    let json: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(json["version"], SCHEMA_VERSION);
}

#[test]
fn corrupt_file_is_an_error_not_an_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(&path, b"not json").unwrap();

    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::Encoding(_)));
}

#[test]
fn invalid_persisted_phone_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(
        &path,
        br#"{"version":1,"records":[{"name":"Alice","phones":["12"],"birthday":null}]}"#,
    )
    .unwrap();

    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid persisted address book: Phone number must be a 10-digit number."
    );
}
