use crate::book::AddressBook;
use crate::commands::helpers::{expect_args, record};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddressBookError, Result};
use crate::fields::{title_case, Name};
use crate::record::Record;

pub const ADD_USER_USAGE: &str = "add user <name> [phone...]";
pub const DELETE_USER_USAGE: &str = "delete user <name>";
pub const PHONE_USAGE: &str = "phone <name>";

/// Every phone is validated before the contact is stored, so a bad number
/// leaves the book unchanged.
pub fn add_user(book: &mut AddressBook, args: &[&str]) -> Result<CmdResult> {
    let (name, phones) = args
        .split_first()
        .ok_or_else(|| AddressBookError::BadArguments(ADD_USER_USAGE.to_string()))?;

    if book.contains(name) {
        return Ok(CmdResult::message(CmdMessage::warning(format!(
            "Sorry, but contact with name {} already exists! Please try another name!",
            title_case(name)
        ))));
    }

    let mut record = Record::new(Name::new(*name)?);
    for phone in phones {
        record.add_phone(phone)?;
    }
    book.add_record(record);

    Ok(CmdResult::message(CmdMessage::success(format!(
        "User {} successfully added!",
        title_case(name)
    ))))
}

pub fn delete_user(book: &mut AddressBook, args: &[&str]) -> Result<CmdResult> {
    let [name] = expect_args(args, DELETE_USER_USAGE)?;
    book.remove(name)
        .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))?;

    Ok(CmdResult::message(CmdMessage::success(format!(
        "User {} deleted.",
        title_case(name)
    ))))
}

pub fn show_phone(book: &mut AddressBook, args: &[&str]) -> Result<CmdResult> {
    let [name] = expect_args(args, PHONE_USAGE)?;
    let found = record(book, name)?.clone();
    Ok(CmdResult::default().with_listed_records(vec![found]))
}
