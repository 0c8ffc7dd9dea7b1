//! # Command Layer
//!
//! One handler per user command. Every handler has the same shape,
//! [`Handler`]: it receives the address book and the positional argument
//! tokens, and returns a [`CmdResult`] or an error for the dispatcher to
//! translate.
//!
//! Expected outcomes such as "phone already exists" are messages on the
//! result, never errors.

use crate::book::AddressBook;
use crate::error::Result;
use crate::record::Record;

pub mod birthday;
pub mod contacts;
pub mod generate;
pub mod greeting;
pub mod helpers;
pub mod listing;
pub mod phones;
pub mod search;

pub type Handler = fn(&mut AddressBook, &[&str]) -> Result<CmdResult>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    /// All message contents joined by newlines.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
