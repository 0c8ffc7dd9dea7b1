//! # API Facade
//!
//! The single entry point a UI drives: it owns the [`AddressBook`], the store
//! it is persisted to, and the [`Dispatcher`] that runs text commands.
//!
//! `AddrbookApi<S: ContactStore>` is generic over the storage backend:
//! - Production: `AddrbookApi<JsonFileStore>`
//! - Testing: `AddrbookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::dispatch::{is_exit_command, Dispatcher};
use crate::error::Result;
use crate::store::ContactStore;

/// What the UI should do after a line has been handled.
#[derive(Debug)]
pub enum Outcome {
    Continue(CmdResult),
    Exit,
}

pub struct AddrbookApi<S: ContactStore> {
    book: AddressBook,
    store: S,
    dispatcher: Dispatcher<'static>,
}

impl<S: ContactStore> AddrbookApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            book: AddressBook::new(),
            store,
            dispatcher: Dispatcher::default(),
        }
    }

    /// Creates the API and reads whatever the store already holds.
    pub fn open(store: S) -> Result<Self> {
        let mut api = Self::new(store);
        api.load()?;
        Ok(api)
    }

    pub fn load(&mut self) -> Result<()> {
        self.book.deserialize(&self.store)
    }

    pub fn save(&mut self) -> Result<()> {
        self.book.serialize(&mut self.store)?;
        Ok(())
    }

    /// Handles one input line. Exit keywords save the book first.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        if is_exit_command(line) {
            self.save()?;
            return Ok(Outcome::Exit);
        }
        Ok(Outcome::Continue(self.dispatcher.dispatch(&mut self.book, line)))
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn run(api: &mut AddrbookApi<InMemoryStore>, line: &str) -> String {
        match api.handle_line(line).unwrap() {
            Outcome::Continue(result) => result.text(),
            Outcome::Exit => panic!("unexpected exit on {line}"),
        }
    }

    #[test]
    fn commands_mutate_the_book() {
        let mut api = AddrbookApi::new(InMemoryStore::new());
        assert_eq!(run(&mut api, "add user bob"), "User Bob successfully added!");
        run(&mut api, "add phone bob 0501234567");
        assert_eq!(api.book().get("bob").unwrap().phones().len(), 1);
    }

    #[test]
    fn exit_saves_to_store() {
        let mut api = AddrbookApi::new(InMemoryStore::new());
        run(&mut api, "add user bob 0501234567");
        assert!(api.store().entries().is_empty());

        assert!(matches!(api.handle_line("good bye").unwrap(), Outcome::Exit));
        assert_eq!(api.store().entries().len(), 1);
        assert_eq!(
            api.store().entries()[0]["bob"].phones,
            vec!["+380501234567".to_string()]
        );
    }

    #[test]
    fn open_reads_existing_contacts() {
        let mut first = AddrbookApi::new(InMemoryStore::new());
        run(&mut first, "add user alice 0671234567");
        run(&mut first, "set birthday alice 01.02.1990");
        first.save().unwrap();

        let entries = first.store().entries().to_vec();
        let second = AddrbookApi::open(InMemoryStore::with_entries(entries)).unwrap();
        let alice = second.book().get("alice").unwrap();
        assert_eq!(alice.birthday().unwrap().to_iso(), "1990-02-01");
    }
}
