//! Text command parsing, dispatch and reply formatting.
//!
//! # Responsibility
//! - Split a raw input line into a verb and its arguments.
//! - Dispatch verbs to `ContactService` operations.
//! - Translate core errors into the replies shown to the user.
//!
//! # Invariants
//! - Core errors never escape this module; every verb yields a reply.
//! - Missing arguments are detected before the service is called.

use chrono::NaiveDate;
use contactbook_core::{AddOutcome, BookError, BookStore, ContactService, Field};
use std::fmt::{Display, Formatter};

const MISSING_NAME_AND_PHONE: &str = "Please give me name and phone number!";
const MISSING_NAME_AND_BIRTHDAY: &str = "Please give me name and birthday!";
const MISSING_BIRTHDAY_NAME: &str = "Please provide a name to show birthday.";
const UNKNOWN_CONTACT: &str = "There is no such person in contacts!";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Lower-cased first token.
    pub verb: String,
    pub args: Vec<String>,
}

/// Splits `line` on whitespace. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<Input> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next()?.to_lowercase();
    Some(Input {
        verb,
        args: tokens.map(str::to_string).collect(),
    })
}

/// Whether the loop keeps reading after a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub flow: Flow,
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flow: Flow::Continue,
        }
    }
}

#[derive(Debug)]
enum CommandError {
    MissingArgs(&'static str),
    Book(BookError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgs(usage) => f.write_str(usage),
            Self::Book(BookError::ContactNotFound(_)) => f.write_str(UNKNOWN_CONTACT),
            Self::Book(err) => write!(f, "{err}"),
        }
    }
}

impl From<BookError> for CommandError {
    fn from(value: BookError) -> Self {
        Self::Book(value)
    }
}

type CommandResult = Result<String, CommandError>;

/// Runs one parsed command against `service`.
///
/// `today` anchors the `birthdays` query; the caller decides which clock it
/// comes from.
pub fn execute<S: BookStore>(
    service: &mut ContactService<S>,
    input: &Input,
    today: NaiveDate,
) -> Reply {
    let args = input.args.as_slice();
    let result = match input.verb.as_str() {
        "exit" | "close" => {
            return Reply {
                text: "Goodbye!".to_string(),
                flow: Flow::Exit,
            }
        }
        "hello" => Ok("How can I help you?".to_string()),
        "add" => add_contact(service, args),
        "change" => change_phone(service, args),
        "phone" => show_phone(service, args),
        "remove-phone" => remove_phone(service, args),
        "delete" => delete_contact(service, args),
        "all" => Ok(show_all(service)),
        "add-birthday" => add_birthday(service, args),
        "show-birthday" => show_birthday(service, args),
        "birthdays" => Ok(show_upcoming(service, today)),
        _ => Ok("Invalid command!".to_string()),
    };

    match result {
        Ok(text) => Reply::message(text),
        Err(err) => Reply::message(err.to_string()),
    }
}

fn add_contact<S: BookStore>(service: &mut ContactService<S>, args: &[String]) -> CommandResult {
    let [name, phone, ..] = args else {
        return Err(CommandError::MissingArgs(MISSING_NAME_AND_PHONE));
    };
    let reply = match service.add_contact(name, phone)? {
        AddOutcome::Added => "Contact added",
        AddOutcome::Updated => "Contact updated",
    };
    Ok(reply.to_string())
}

fn change_phone<S: BookStore>(service: &mut ContactService<S>, args: &[String]) -> CommandResult {
    let [name, old_phone, new_phone] = args else {
        return Err(CommandError::MissingArgs(MISSING_NAME_AND_PHONE));
    };
    service.change_phone(name, old_phone, new_phone)?;
    Ok(format!(
        "Phone number for {name} changed from {old_phone} to {new_phone}"
    ))
}

fn show_phone<S: BookStore>(service: &mut ContactService<S>, args: &[String]) -> CommandResult {
    let [name, ..] = args else {
        return Err(CommandError::MissingArgs(MISSING_NAME_AND_PHONE));
    };
    let phones = service.phones(name)?;
    if phones.is_empty() {
        return Ok(format!("No phone numbers found for {name}"));
    }
    let joined = phones.iter().map(Field::value).collect::<Vec<_>>().join(", ");
    Ok(format!("Phone numbers for {name}: {joined}"))
}

fn remove_phone<S: BookStore>(service: &mut ContactService<S>, args: &[String]) -> CommandResult {
    let [name, phone, ..] = args else {
        return Err(CommandError::MissingArgs(MISSING_NAME_AND_PHONE));
    };
    service.remove_phone(name, phone)?;
    Ok(format!("Phone number {phone} removed from {name}"))
}

fn delete_contact<S: BookStore>(service: &mut ContactService<S>, args: &[String]) -> CommandResult {
    let [name, ..] = args else {
        return Err(CommandError::MissingArgs(MISSING_NAME_AND_PHONE));
    };
    service.delete_contact(name)?;
    Ok(format!("Contact {name} deleted"))
}

fn show_all<S: BookStore>(service: &ContactService<S>) -> String {
    if service.book().is_empty() {
        return "No contacts found.".to_string();
    }
    format!("All contacts:\n{}", service.book())
}

fn add_birthday<S: BookStore>(service: &mut ContactService<S>, args: &[String]) -> CommandResult {
    let [name, birthday] = args else {
        return Err(CommandError::MissingArgs(MISSING_NAME_AND_BIRTHDAY));
    };
    service.add_birthday(name, birthday)?;
    Ok(format!("Birthday for {name} added: {birthday}"))
}

fn show_birthday<S: BookStore>(service: &mut ContactService<S>, args: &[String]) -> CommandResult {
    let [name, ..] = args else {
        return Err(CommandError::MissingArgs(MISSING_BIRTHDAY_NAME));
    };
    match service.birthday(name)? {
        Some(birthday) => Ok(format!("Birthday for {name}: {birthday}")),
        None => Ok(format!("No birthday found for {name}")),
    }
}

fn show_upcoming<S: BookStore>(service: &ContactService<S>, today: NaiveDate) -> String {
    let upcoming = service.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No upcoming birthdays found.".to_string();
    }
    let lines = upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    format!("Upcoming birthdays:\n{lines}")
}
