//! # Command Dispatcher
//!
//! Turns a line of free text into a handler call.
//!
//! 1. The line is lowercased.
//! 2. The first registered command name the line starts with wins. Registry
//!    order is therefore significant: with overlapping names, the one declared
//!    earlier shadows the other.
//! 3. The rest of the line, trimmed, is split on single spaces into argument
//!    tokens.
//! 4. Handler errors never escape: [`describe_error`] turns each one into a
//!    user-facing sentence.

use crate::book::AddressBook;
use crate::commands::birthday::{DAYS_TO_BIRTHDAY_USAGE, SET_BIRTHDAY_USAGE};
use crate::commands::contacts::{ADD_USER_USAGE, DELETE_USER_USAGE, PHONE_USAGE};
use crate::commands::generate::GENERATE_USAGE;
use crate::commands::listing::{SHOW_ALL_USAGE, VIEW_USAGE};
use crate::commands::phones::{ADD_PHONE_USAGE, CHANGE_USAGE, DELETE_PHONE_USAGE};
use crate::commands::search::SEARCH_USAGE;
use crate::commands::{
    birthday, contacts, generate, greeting, listing, phones, search, CmdMessage, CmdResult,
    Handler,
};
use crate::error::AddressBookError;
use tracing::{debug, warn};

pub const EXIT_COMMANDS: [&str; 3] = ["exit", "good bye", "close"];

pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub handler: Handler,
}

/// Every command, in matching priority order.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "hello",
        usage: "hello",
        handler: greeting::hello,
    },
    Command {
        name: "search",
        usage: SEARCH_USAGE,
        handler: search::run,
    },
    Command {
        name: "add user",
        usage: ADD_USER_USAGE,
        handler: contacts::add_user,
    },
    Command {
        name: "add phone",
        usage: ADD_PHONE_USAGE,
        handler: phones::add_phone,
    },
    Command {
        name: "delete phone",
        usage: DELETE_PHONE_USAGE,
        handler: phones::delete_phone,
    },
    Command {
        name: "delete user",
        usage: DELETE_USER_USAGE,
        handler: contacts::delete_user,
    },
    Command {
        name: "set birthday",
        usage: SET_BIRTHDAY_USAGE,
        handler: birthday::set_birthday,
    },
    Command {
        name: "days to birthday",
        usage: DAYS_TO_BIRTHDAY_USAGE,
        handler: birthday::days_to_birthday,
    },
    Command {
        name: "view",
        usage: VIEW_USAGE,
        handler: listing::view,
    },
    Command {
        name: "change",
        usage: CHANGE_USAGE,
        handler: phones::change,
    },
    Command {
        name: "phone",
        usage: PHONE_USAGE,
        handler: contacts::show_phone,
    },
    Command {
        name: "generate",
        usage: GENERATE_USAGE,
        handler: generate::run,
    },
    Command {
        name: "show all",
        usage: SHOW_ALL_USAGE,
        handler: listing::show_all,
    },
    Command {
        name: "help",
        usage: "help",
        handler: greeting::help,
    },
];

/// A line matched against the registry.
pub enum Resolution<'c, 'l> {
    Matched {
        command: &'c Command,
        args: Vec<&'l str>,
    },
    Unknown,
}

pub struct Dispatcher<'c> {
    commands: &'c [Command],
}

impl Default for Dispatcher<'static> {
    fn default() -> Self {
        Self::new(COMMANDS)
    }
}

impl<'c> Dispatcher<'c> {
    pub fn new(commands: &'c [Command]) -> Self {
        Self { commands }
    }

    #[cfg(test)]
    pub(crate) fn command_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name)
    }

    /// Matches an already-lowercased `line`.
    pub fn resolve<'l>(&self, line: &'l str) -> Resolution<'c, 'l> {
        let Some(command) = self.commands.iter().find(|c| line.starts_with(c.name)) else {
            return Resolution::Unknown;
        };

        let rest = line[command.name.len()..].trim();
        let args = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split(' ').collect()
        };
        Resolution::Matched { command, args }
    }

    /// Runs the command named by `input` against `book`. Always yields a
    /// displayable result; failures become error messages.
    pub fn dispatch(&self, book: &mut AddressBook, input: &str) -> CmdResult {
        let line = input.to_lowercase();
        if line.trim().is_empty() {
            return CmdResult::message(CmdMessage::warning("Please write something!"));
        }

        match self.resolve(&line) {
            Resolution::Matched { command, args } => {
                debug!(command = command.name, ?args, "dispatching");
                (command.handler)(book, &args).unwrap_or_else(|err| {
                    debug!(command = command.name, error = %err, "command failed");
                    CmdResult::message(CmdMessage::error(describe_error(&err)))
                })
            }
            Resolution::Unknown => {
                warn!(input, "unknown command");
                CmdResult::message(CmdMessage::error(format!(
                    "Command [{}] does not exist!",
                    input
                )))
            }
        }
    }
}

pub fn is_exit_command(input: &str) -> bool {
    let line = input.trim().to_lowercase();
    EXIT_COMMANDS.contains(&line.as_str())
}

/// The sentence shown to the user for each failure.
pub fn describe_error(err: &AddressBookError) -> String {
    match err {
        AddressBookError::ContactNotFound(name) => format!(
            "User '{}' does not exist! Please add the user before using this command!",
            name
        ),
        AddressBookError::BadArguments(usage) => format!("Wrong arguments. Usage: {}", usage),
        AddressBookError::InvalidBirthday(raw) => format!(
            "'{}' is not a valid birthday! Must be <day>.<month>.<year>",
            raw
        ),
        AddressBookError::InvalidPhone(raw) => format!(
            "'{}' is not a valid phone! Must start with [+380, 380, 80, 0] and normalize to 13 characters",
            raw
        ),
        AddressBookError::BirthdayNotSet(name) => {
            format!("You need to set a birthday for '{}' first!", name)
        }
        AddressBookError::PaginationExhausted => "Pagination end!".to_string(),
        AddressBookError::Io(_)
        | AddressBookError::Serialization(_)
        | AddressBookError::Store(_) => format!("Storage error: {}", err),
    }
}
