//! # Storage Layer
//!
//! The [`ContactStore`] trait decouples the address book from where its
//! contacts live between runs.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, a single pretty-printed JSON file
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! The file is a JSON array with one single-key object per contact, keyed by
//! the contact's name:
//!
//! ```text
//! [
//!   {
//!     "bob": {
//!       "name": "bob",
//!       "phones": ["+380501234567"],
//!       "birthday": "1990-05-17"
//!     }
//!   }
//! ]
//! ```
//!
//! A contact without a birthday stores the literal string `"None"`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

pub const NO_BIRTHDAY: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredContact {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: String,
}

/// One element of the persisted array: `{ "<name>": StoredContact }`.
pub type StoredEntry = BTreeMap<String, StoredContact>;

pub trait ContactStore {
    /// Read every persisted entry. A store with nothing saved yields an empty list.
    fn load(&self) -> Result<Vec<StoredEntry>>;

    /// Replace the persisted contents with `entries`.
    fn save(&mut self, entries: &[StoredEntry]) -> Result<()>;
}
