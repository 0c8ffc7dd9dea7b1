//! # Address Book
//!
//! An ordered mapping from contact name to [`Record`]. Insertion order is
//! preserved: it is the order contacts are listed, paginated and persisted in.
//!
//! ## Pagination
//!
//! The book owns a single page cursor. [`AddressBook::next_page`] hands out the
//! next [`PAGE_SIZE`] records and advances it; [`AddressBook::pages`] resets it
//! to page 1 and returns a finite iterator over the remaining pages. There is
//! one cursor per book, not one per consumer, so two interleaved traversals
//! share their position.

use crate::error::{AddressBookError, Result};
use crate::fields::{Birthday, Name};
use crate::record::Record;
use crate::store::{ContactStore, StoredContact, StoredEntry, NO_BIRTHDAY};
use std::cell::Cell;
use tracing::info;

pub const PAGE_SIZE: usize = 5;

#[derive(Debug)]
pub struct AddressBook {
    records: Vec<Record>,
    page_size: usize,
    current_page: Cell<usize>,
}

/// A slice of the book, in insertion order.
#[derive(Debug)]
pub struct Page<'a> {
    pub number: usize,
    pub records: Vec<&'a Record>,
}

impl Page<'_> {
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name().as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Matches(Vec<String>),
    NoResults,
    EmptyBook,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            page_size: PAGE_SIZE,
            current_page: Cell::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.position_of(name).map(|idx| &self.records[idx])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        let idx = self.position_of(name)?;
        self.records.get_mut(idx)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Inserts `record` under its name. An existing record with the same name
    /// is replaced where it stands.
    pub fn add_record(&mut self, record: Record) {
        match self.position_of(record.name().as_str()) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Record> {
        self.position_of(name).map(|idx| self.records.remove(idx))
    }

    /// Substring search over each contact's name followed by its phones.
    /// Case-sensitive; the query is used as typed.
    pub fn search(&self, word: &str) -> SearchOutcome {
        if self.records.is_empty() {
            return SearchOutcome::EmptyBook;
        }

        let matches: Vec<String> = self
            .records
            .iter()
            .filter(|r| r.search_text().contains(word))
            .map(|r| r.name().as_str().to_string())
            .collect();

        if matches.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Matches(matches)
        }
    }

    #[cfg(test)]
    pub(crate) fn current_page(&self) -> usize {
        self.current_page.get()
    }

    pub fn reset_pages(&self) {
        self.current_page.set(1);
    }

    /// Returns the page under the cursor and advances it.
    pub fn next_page(&self) -> Result<Page<'_>> {
        let number = self.current_page.get();
        let start = (number - 1) * self.page_size;
        if start >= self.records.len() {
            return Err(AddressBookError::PaginationExhausted);
        }
        let end = (start + self.page_size).min(self.records.len());
        self.current_page.set(number + 1);

        Ok(Page {
            number,
            records: self.records[start..end].iter().collect(),
        })
    }

    /// Restarts pagination at page 1 and iterates until the book is exhausted.
    pub fn pages(&self) -> Pages<'_> {
        self.reset_pages();
        Pages { book: self }
    }

    /// Writes every record to `store` and returns what was written.
    pub fn serialize<S: ContactStore>(&self, store: &mut S) -> Result<Vec<StoredEntry>> {
        let entries: Vec<StoredEntry> = self.records.iter().map(to_entry).collect();
        store.save(&entries)?;
        info!(contacts = entries.len(), "address book saved");
        Ok(entries)
    }

    /// Loads every entry from `store` into the book. Phones are re-validated;
    /// any malformed entry fails the whole load and leaves the book untouched.
    pub fn deserialize<S: ContactStore>(&mut self, store: &S) -> Result<()> {
        let entries = store.load()?;
        let records = entries
            .iter()
            .map(from_entry)
            .collect::<Result<Vec<Record>>>()?;

        let count = records.len();
        for record in records {
            self.add_record(record);
        }
        info!(contacts = count, "address book loaded");
        Ok(())
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

pub struct Pages<'a> {
    book: &'a AddressBook,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.book.next_page().ok()
    }
}

fn to_entry(record: &Record) -> StoredEntry {
    let name = record.name().as_str().to_string();
    let contact = StoredContact {
        name: name.clone(),
        phones: record.phones().iter().map(|p| p.as_str().to_string()).collect(),
        birthday: record
            .birthday()
            .map(|b| b.to_iso())
            .unwrap_or_else(|| NO_BIRTHDAY.to_string()),
    };
    StoredEntry::from([(name, contact)])
}

fn from_entry(entry: &StoredEntry) -> Result<Record> {
    let mut pairs = entry.iter();
    let (key, contact) = match (pairs.next(), pairs.next()) {
        (Some(pair), None) => pair,
        _ => {
            return Err(AddressBookError::Store(format!(
                "each entry must hold exactly one contact, found {}",
                entry.len()
            )))
        }
    };
    if *key != contact.name {
        return Err(AddressBookError::Store(format!(
            "entry key '{}' does not match contact name '{}'",
            key, contact.name
        )));
    }

    let mut record = Record::new(Name::new(contact.name.clone())?);
    for phone in &contact.phones {
        record.add_phone(phone)?;
    }
    let birthday = if contact.birthday == NO_BIRTHDAY {
        None
    } else {
        Some(Birthday::from_iso(&contact.birthday).ok_or_else(|| {
            AddressBookError::Store(format!(
                "stored birthday '{}' for '{}' is not a YYYY-MM-DD date",
                contact.birthday, contact.name
            ))
        })?)
    };
    record.set_birthday(birthday);
    Ok(record)
}
