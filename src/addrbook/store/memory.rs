use super::{ContactStore, StoredEntry};
use crate::error::Result;

/// In-memory storage for testing. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Vec<StoredEntry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<StoredEntry>) -> Self {
        Self { entries }
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[StoredEntry] {
        &self.entries
    }
}

impl ContactStore for InMemoryStore {
    fn load(&self) -> Result<Vec<StoredEntry>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[StoredEntry]) -> Result<()> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::book::AddressBook;
    use crate::fields::{Birthday, Name};
    use crate::record::Record;

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        /// Adds `user_1..user_count`, each with one distinct phone.
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut record = Record::new(Name::new(format!("user_{}", i + 1)).unwrap());
                record
                    .add_phone(&format!("050{:07}", i + 1))
                    .unwrap();
                self.book.add_record(record);
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(Name::new(name).unwrap());
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            let mut record = Record::new(Name::new(name).unwrap());
            record.set_birthday(Some(Birthday::parse(birthday).unwrap()));
            self.book.add_record(record);
            self
        }
    }
}
