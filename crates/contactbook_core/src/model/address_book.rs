//! Name-keyed collection of contact records.
//!
//! # Responsibility
//! - Own every record and keep keys consistent with record names.
//! - Answer "who has a birthday within the next week" for a given day.
//!
//! # Invariants
//! - Raw map mutation is never exposed; keys always equal `record.name()`.
//! - Iteration, display and persistence order is ascending by name.
//! - `get_upcoming_birthdays` never reads the system clock.

use super::field::{Field, DATE_FORMAT};
use super::record::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Inclusive size of the upcoming-birthday window, in days from today.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// One contact whose birthday falls within the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Next occurrence of the birthday, on or after the query day.
    pub birthday_date: NaiveDate,
    /// `birthday_date` moved to the following Monday when it is a weekend.
    pub congratulation_date: NaiveDate,
    /// Days from the query day to `birthday_date` (0..=7).
    pub days_until: i64,
}

impl UpcomingBirthday {
    pub fn congratulation_date_text(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

impl Display for UpcomingBirthday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.congratulation_date_text())
    }
}

/// Keyed collection of every contact record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its name, replacing any record already there.
    ///
    /// Returns the replaced record so callers can see what was discarded.
    /// Use [`AddressBook::upsert_merge`] to keep existing data instead.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records
            .insert(record.name().value().to_string(), record)
    }

    /// Merges `record` into the existing entry with the same name, or inserts
    /// it when the name is new. Returns `true` when a merge happened.
    pub fn upsert_merge(&mut self, record: Record) -> bool {
        match self.records.get_mut(record.name().value()) {
            Some(existing) => {
                existing.merge_from(record);
                true
            }
            None => {
                self.add_record(record);
                false
            }
        }
    }

    /// Removes the record for `name`. Absent names are a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in ascending name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Lists contacts whose next birthday is within `UPCOMING_WINDOW_DAYS`
    /// of `today`, inclusive on both ends.
    ///
    /// Weekend birthdays are congratulated on the following Monday. That
    /// shift happens after filtering, so a congratulation date may land past
    /// the window. Results are sorted by congratulation date, then name.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let mut next = birthday.occurrence_in(today.year())?;
                if next < today {
                    next = birthday.occurrence_in(today.year() + 1)?;
                }

                let days_until = (next - today).num_days();
                if !(0..=UPCOMING_WINDOW_DAYS).contains(&days_until) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().value().to_string(),
                    birthday_date: next,
                    congratulation_date: congratulation_date(next),
                    days_until,
                })
            })
            .collect();

        upcoming.sort_by(|left, right| {
            left.congratulation_date
                .cmp(&right.congratulation_date)
                .then_with(|| left.name.cmp(&right.name))
        });
        upcoming
    }
}

impl Display for AddressBook {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for record in self.records.values() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{record}")?;
            first = false;
        }
        Ok(())
    }
}

fn congratulation_date(birthday: NaiveDate) -> NaiveDate {
    match birthday.weekday() {
        Weekday::Sat => birthday + Duration::days(2),
        Weekday::Sun => birthday + Duration::days(1),
        _ => birthday,
    }
}
