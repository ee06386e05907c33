//! Validated scalar values stored on a contact record.
//!
//! # Responsibility
//! - Validate raw text once, at construction time.
//! - Keep the validated text as the stored value.
//!
//! # Invariants
//! - `Name` is never empty or whitespace-only.
//! - `Phone` is exactly ten ASCII digits.
//! - `Birthday` is `DD.MM.YYYY` text naming a real calendar date.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Textual day.month.year form used for birthdays and reported dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

const PHONE_DIGITS: usize = 10;

static BIRTHDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday regex"));

/// Validation failure raised by a field constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValidationError {
    EmptyName,
    InvalidPhone,
    InvalidBirthdayFormat,
    BirthdayNotText,
}

impl Display for FieldValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name must not be empty."),
            Self::InvalidPhone => write!(f, "Phone number must be a 10-digit number."),
            Self::InvalidBirthdayFormat => {
                write!(f, "Birthday must be in the format 'DD.MM.YYYY'.")
            }
            Self::BirthdayNotText => {
                write!(f, "Birthday must be a string in format 'DD.MM.YYYY'.")
            }
        }
    }
}

impl Error for FieldValidationError {}

/// Shared capability of every field value: exposing its stored text.
pub trait Field: Display {
    fn value(&self) -> &str;
}

/// Contact name, also the key of the record inside an address book.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(FieldValidationError::EmptyName);
        }
        Ok(Self(value))
    }
}

/// Ten-digit phone number stored without separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Validates `value` as exactly ten decimal digits.
    ///
    /// No separator stripping happens: `"050-123-45"` is rejected rather than
    /// normalized.
    pub fn new(value: impl Into<String>) -> Result<Self, FieldValidationError> {
        let value = value.into();
        let is_valid = value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit());
        if !is_valid {
            return Err(FieldValidationError::InvalidPhone);
        }
        Ok(Self(value))
    }
}

/// Birthday kept as its validated `DD.MM.YYYY` text.
///
/// The parsed date rides along so queries never re-validate, but the text is
/// what gets rendered and persisted, so it round-trips byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldValidationError> {
        let text = value.into();
        let date = parse_date(&text)?;
        Ok(Self { text, date })
    }

    /// Returns the full calendar date, birth year included.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns this birthday's day and month placed in `year`.
    ///
    /// 29 February falls back to 28 February when `year` is not a leap year.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let date = self.date();
        NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
            if date.month() == 2 && date.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, FieldValidationError> {
    if !BIRTHDAY_RE.is_match(value) {
        return Err(FieldValidationError::InvalidBirthdayFormat);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| FieldValidationError::InvalidBirthdayFormat)
}

macro_rules! impl_field {
    ($($ty:ident),+) => {
        $(
            impl Field for $ty {
                fn value(&self) -> &str {
                    &self.0
                }
            }

            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )+
    };
}

impl_field!(Name, Phone);

impl Field for Birthday {
    fn value(&self) -> &str {
        &self.text
    }
}

impl Display for Birthday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::{Birthday, Field, FieldValidationError, Name, Phone};
    use chrono::NaiveDate;

    #[test]
    fn phone_accepts_ten_digits_and_renders_input() {
        for raw in ["0501234567", "0000000000", "9999999999"] {
            let phone = Phone::new(raw).unwrap();
            assert_eq!(phone.value(), raw);
            assert_eq!(phone.to_string(), raw);
        }
    }

    #[test]
    fn phone_rejects_wrong_length_or_non_digits() {
        for raw in [
            "",
            "123456789",
            "12345678901",
            "050123456a",
            "050-123-45",
            "+380501234",
            " 501234567",
            "０５０１２３４５６７",
        ] {
            assert_eq!(
                Phone::new(raw).unwrap_err(),
                FieldValidationError::InvalidPhone,
                "expected rejection for {raw:?}"
            );
        }
    }

    #[test]
    fn phone_error_message_is_stable() {
        let err = Phone::new("12").unwrap_err();
        assert_eq!(err.to_string(), "Phone number must be a 10-digit number.");
    }

    #[test]
    fn name_rejects_blank_text() {
        assert_eq!(Name::new("").unwrap_err(), FieldValidationError::EmptyName);
        assert_eq!(Name::new("   ").unwrap_err(), FieldValidationError::EmptyName);
        assert_eq!(Name::new("Alice").unwrap().value(), "Alice");
    }

    #[test]
    fn birthday_accepts_real_dates_in_exact_pattern() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(birthday.value(), "29.02.2000");
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(2000, 2, 29).unwrap()
        );
    }

    #[test]
    fn birthday_rejects_bad_pattern_or_calendar_date() {
        for raw in [
            "31.04.1990",
            "29.02.2001",
            "1.6.1990",
            "01.06.90",
            "1990-06-01",
            "01/06/1990",
            "01.06.1990 ",
            "",
        ] {
            let err = Birthday::new(raw).unwrap_err();
            assert_eq!(err, FieldValidationError::InvalidBirthdayFormat, "{raw:?}");
            assert_eq!(
                err.to_string(),
                "Birthday must be in the format 'DD.MM.YYYY'."
            );
        }
    }

    #[test]
    fn occurrence_in_falls_back_for_leap_day() {
        let birthday = Birthday::new("29.02.1996").unwrap();
        assert_eq!(
            birthday.occurrence_in(2023),
            NaiveDate::from_ymd_opt(2023, 2, 28)
        );
        assert_eq!(
            birthday.occurrence_in(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }
}
