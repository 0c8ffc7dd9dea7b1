//! # Field Values
//!
//! Typed wrappers around the raw strings a user types. Each constructor either
//! normalizes its input or rejects it, so a value that exists is always valid:
//!
//! - [`Name`]: non-empty, used verbatim as the contact key
//! - [`Phone`]: always held in canonical `+380XXXXXXXXX` form
//! - [`Birthday`]: a calendar date parsed from `<day><sep><month><sep><year>`

use crate::error::{AddressBookError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const CANONICAL_PREFIX: &str = "+380";
pub const CANONICAL_LEN: usize = 13;

const BIRTHDAY_SEPARATORS: [char; 5] = ['.', '/', '-', ',', ' '];
const ISO_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(AddressBookError::BadArguments(
                "a contact name cannot be empty".to_string(),
            ));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Capitalizes the first letter of every word, for display only.
    pub fn title_case(&self) -> String {
        title_case(&self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// A phone number in canonical `+380XXXXXXXXX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self> {
        Ok(Self(Self::normalize(raw)?))
    }

    /// Maps one of the four accepted input shapes onto the canonical form.
    ///
    /// | length | prefix | transform      |
    /// |--------|--------|----------------|
    /// | 13     | `+380` | unchanged      |
    /// | 12     | `380`  | prepend `+`    |
    /// | 11     | `80`   | prepend `+3`   |
    /// | 10     | `0`    | prepend `+38`  |
    pub fn normalize(raw: &str) -> Result<String> {
        let len = raw.chars().count();
        let canonical = match len {
            13 if raw.starts_with("+380") => raw.to_string(),
            12 if raw.starts_with("380") => format!("+{}", raw),
            11 if raw.starts_with("80") => format!("+3{}", raw),
            10 if raw.starts_with('0') => format!("+38{}", raw),
            _ => return Err(AddressBookError::InvalidPhone(raw.to_string())),
        };
        Ok(canonical)
    }

    /// Canonical form of `raw`, or `None` when it cannot be normalized.
    /// Used for lookups, where an unparseable number simply matches nothing.
    pub fn lookup_key(raw: &str) -> Option<String> {
        Self::normalize(raw).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses `<day><sep><month><sep><year>`.
    ///
    /// The separator is the first of `. / - , <space>` found in the input and
    /// must occur exactly twice. Non-digit characters inside each part are
    /// dropped before the number is read.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || AddressBookError::InvalidBirthday(raw.to_string());

        let sep = raw
            .chars()
            .find(|c| BIRTHDAY_SEPARATORS.contains(c))
            .ok_or_else(invalid)?;

        let parts: Vec<&str> = raw.split(sep).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(invalid());
        };

        let day: u32 = digits_of(day).ok_or_else(invalid)?;
        let month: u32 = digits_of(month).ok_or_else(invalid)?;
        let year: i32 = digits_of(year).ok_or_else(invalid)?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Absent input means "no birthday set" and is not an error.
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>> {
        raw.map(Self::parse).transpose()
    }

    /// Reads the ISO `YYYY-MM-DD` form used in the contacts file.
    pub fn from_iso(raw: &str) -> Option<Self> {
        NaiveDate::parse_from_str(raw, ISO_FORMAT).ok().map(Self)
    }

    pub fn to_iso(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's (month, day) in `year`. Feb 29 falls on Mar 1 in
    /// non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

/// `DD.MM.YYYY`, which [`Birthday::parse`] reads back to the same date.
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}

fn digits_of<T: std::str::FromStr>(part: &str) -> Option<T> {
    let digits: String = part.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
