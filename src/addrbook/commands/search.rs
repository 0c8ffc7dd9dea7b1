use crate::book::{AddressBook, SearchOutcome};
use crate::commands::helpers::expect_args;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const SEARCH_USAGE: &str = "search <word>";

pub fn run(book: &mut AddressBook, args: &[&str]) -> Result<CmdResult> {
    let [word] = expect_args(args, SEARCH_USAGE)?;

    match book.search(word) {
        SearchOutcome::Matches(names) => {
            let listed = names
                .iter()
                .filter_map(|name| book.get(name).cloned())
                .collect();
            let message = CmdMessage::success(format!("Found: {}", names.join(", ")));
            Ok(CmdResult::message(message).with_listed_records(listed))
        }
        SearchOutcome::NoResults => Ok(CmdResult::message(CmdMessage::info(format!(
            "No results found for “{}”",
            word
        )))),
        SearchOutcome::EmptyBook => Ok(CmdResult::message(CmdMessage::info(
            "Your address book is empty",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn finds_by_phone_fragment() {
        let mut book = BookFixture::new()
            .with_contact("bob", &["0501234567"])
            .with_contact("alice", &["0671234567"])
            .book;
        let result = run(&mut book, &["1234567"]).unwrap();
        assert_eq!(result.text(), "Found: bob, alice");
        assert_eq!(result.listed_records.len(), 2);
    }

    #[test]
    fn reports_no_results_and_empty_book() {
        let mut book = BookFixture::new().with_contact("bob", &[]).book;
        assert_eq!(
            run(&mut book, &["zed"]).unwrap().text(),
            "No results found for “zed”"
        );
        assert_eq!(
            run(&mut AddressBook::new(), &["zed"]).unwrap().text(),
            "Your address book is empty"
        );
    }
}
