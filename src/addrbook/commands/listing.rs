use crate::book::{AddressBook, Page, PAGE_SIZE};
use crate::commands::helpers::expect_args;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::record::Record;

pub const VIEW_USAGE: &str = "view";
pub const SHOW_ALL_USAGE: &str = "show all";

/// Shows the next page from the book's shared cursor. Books that fit on a
/// single page are shown whole.
pub fn view(book: &mut AddressBook, args: &[&str]) -> Result<CmdResult> {
    expect_args::<0>(args, VIEW_USAGE)?;
    if book.len() < PAGE_SIZE {
        return show_all(book, args);
    }

    let page = book.next_page()?;
    let mut result = CmdResult::message(CmdMessage::info(format!("Page {}", page.number)));
    result.listed_records = owned(&page);
    Ok(result)
}

/// Restarts pagination and lists every page.
pub fn show_all(book: &mut AddressBook, args: &[&str]) -> Result<CmdResult> {
    expect_args::<0>(args, SHOW_ALL_USAGE)?;
    let listed: Vec<Record> = book.pages().flat_map(|page| owned(&page)).collect();

    let result = CmdResult::message(CmdMessage::info(format!("{} contacts", book.len())));
    Ok(result.with_listed_records(listed))
}

fn owned(page: &Page<'_>) -> Vec<Record> {
    page.records.iter().map(|r| (*r).clone()).collect()
}
