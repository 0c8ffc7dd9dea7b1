use crate::book::AddressBook;
use crate::commands::helpers::{expect_args, record, record_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::{title_case, Birthday};
use chrono::{Local, NaiveDate};

pub const SET_BIRTHDAY_USAGE: &str = "set birthday <name> <day.month.year>";
pub const DAYS_TO_BIRTHDAY_USAGE: &str = "days to birthday <name>";

pub fn set_birthday(book: &mut AddressBook, args: &[&str]) -> Result<CmdResult> {
    let [name, raw] = expect_args(args, SET_BIRTHDAY_USAGE)?;
    let record = record_mut(book, name)?;
    record.set_birthday(Some(Birthday::parse(raw)?));

    Ok(CmdResult::message(CmdMessage::success(format!(
        "Birthday successfully set for user {}.",
        title_case(name)
    ))))
}

pub fn days_to_birthday(book: &mut AddressBook, args: &[&str]) -> Result<CmdResult> {
    days_to_birthday_from(book, args, Local::now().date_naive())
}

pub fn days_to_birthday_from(
    book: &AddressBook,
    args: &[&str],
    today: NaiveDate,
) -> Result<CmdResult> {
    let [name] = expect_args(args, DAYS_TO_BIRTHDAY_USAGE)?;
    let days = record(book, name)?.days_to_birthday(today)?;
    Ok(CmdResult::message(CmdMessage::info(format!(
        "To birthday {} days!",
        days
    ))))
}
