use crate::book::AddressBook;
use crate::commands::helpers::{expect_args, record_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::{title_case, Phone};
use crate::record::PhoneStatus;

pub const ADD_PHONE_USAGE: &str = "add phone <name> <phone>";
pub const DELETE_PHONE_USAGE: &str = "delete phone <name> <phone>";
pub const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";

pub fn add_phone(book: &mut AddressBook, args: &[&str]) -> Result<CmdResult> {
    let [name, phone] = expect_args(args, ADD_PHONE_USAGE)?;
    let record = record_mut(book, name)?;

    let message = match record.add_phone(phone)? {
        PhoneStatus::AlreadyExists => CmdMessage::warning(format!(
            "Sorry, but phone with number {} already exists!",
            phone
        )),
        _ => CmdMessage::success(format!(
            "Phone {} successfully added for user {}.",
            phone,
            title_case(name)
        )),
    };
    Ok(CmdResult::message(message))
}

/// A missing contact is reported, not raised.
pub fn delete_phone(book: &mut AddressBook, args: &[&str]) -> Result<CmdResult> {
    let [name, phone] = expect_args(args, DELETE_PHONE_USAGE)?;
    let Some(record) = book.get_mut(name) else {
        return Ok(CmdResult::message(CmdMessage::warning(format!(
            "Sorry but {} not found!",
            name
        ))));
    };

    let message = match record.remove_phone(phone) {
        PhoneStatus::Removed => CmdMessage::success(format!(
            "Phone {} successfully deleted for user {}.",
            phone,
            title_case(name)
        )),
        _ => CmdMessage::warning(format!(
            "User {} doesn't have this number {}",
            title_case(name),
            phone
        )),
    };
    Ok(CmdResult::message(message))
}

pub fn change(book: &mut AddressBook, args: &[&str]) -> Result<CmdResult> {
    let [name, old, new] = expect_args(args, CHANGE_USAGE)?;
    let record = record_mut(book, name)?;

    let message = match record.edit_phone(old, new)? {
        PhoneStatus::Changed => CmdMessage::success(format!(
            "Phone number {} has been changed to {} for {}.",
            old,
            Phone::normalize(new)?,
            title_case(name)
        )),
        PhoneStatus::AlreadyExists => CmdMessage::warning(format!(
            "User {} already has the number {}!",
            title_case(name),
            new
        )),
        _ => CmdMessage::warning(format!(
            "Number {} not found for {}!",
            old,
            title_case(name)
        )),
    };
    Ok(CmdResult::message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::AddressBookError;
    use crate::store::memory::fixtures::BookFixture;

    fn phones_of(book: &AddressBook, name: &str) -> Vec<String> {
        book.get(name)
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn adds_phone_to_existing_contact() {
        let mut book = BookFixture::new().with_contact("bob", &[]).book;
        let result = add_phone(&mut book, &["bob", "0501234567"]).unwrap();
        assert_eq!(
            result.text(),
            "Phone 0501234567 successfully added for user Bob."
        );
        assert_eq!(phones_of(&book, "bob"), vec!["+380501234567"]);
    }

    #[test]
    fn duplicate_phone_in_other_shape_is_a_warning() {
        let mut book = BookFixture::new().with_contact("bob", &["0501234567"]).book;
        let result = add_phone(&mut book, &["bob", "+380501234567"]).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(phones_of(&book, "bob").len(), 1);
    }

    #[test]
    fn add_phone_errors() {
        let mut book = BookFixture::new().with_contact("bob", &[]).book;
        assert!(matches!(
            add_phone(&mut book, &["eve", "0501234567"]),
            Err(AddressBookError::ContactNotFound(_))
        ));
        assert!(matches!(
            add_phone(&mut book, &["bob", "12"]),
            Err(AddressBookError::InvalidPhone(_))
        ));
        assert!(matches!(
            add_phone(&mut book, &["bob"]),
            Err(AddressBookError::BadArguments(_))
        ));
    }

    #[test]
    fn deletes_phone() {
        let mut book = BookFixture::new()
            .with_contact("bob", &["0501234567", "0671234567"])
            .book;
        let result = delete_phone(&mut book, &["bob", "380501234567"]).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(phones_of(&book, "bob"), vec!["+380671234567"]);
    }

    #[test]
    fn delete_phone_statuses() {
        let mut book = BookFixture::new().with_contact("bob", &["0501234567"]).book;
        let missing_number = delete_phone(&mut book, &["bob", "0999999999"]).unwrap();
        assert!(missing_number.text().contains("doesn't have this number"));

        let missing_user = delete_phone(&mut book, &["eve", "0501234567"]).unwrap();
        assert_eq!(missing_user.text(), "Sorry but eve not found!");
    }

    #[test]
    fn changes_phone_in_place() {
        let mut book = BookFixture::new()
            .with_contact("bob", &["0501111111", "0502222222"])
            .book;
        change(&mut book, &["bob", "0501111111", "0933333333"]).unwrap();
        assert_eq!(
            phones_of(&book, "bob"),
            vec!["+380933333333", "+380502222222"]
        );

        let missing = change(&mut book, &["bob", "0501111111", "0934444444"]).unwrap();
        assert_eq!(missing.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn change_reports_canonical_number() {
        let mut book = BookFixture::new().with_contact("bob", &["0501111111"]).book;
        let result = change(&mut book, &["bob", "0501111111", "0933333333"]).unwrap();
        assert_eq!(
            result.text(),
            "Phone number 0501111111 has been changed to +380933333333 for Bob."
        );
    }

    #[test]
    fn change_to_number_already_held_is_a_warning() {
        let mut book = BookFixture::new()
            .with_contact("bob", &["0501111111", "0502222222"])
            .book;
        let result = change(&mut book, &["bob", "0501111111", "0502222222"]).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(
            result.text(),
            "User Bob already has the number 0502222222!"
        );
        assert_eq!(
            phones_of(&book, "bob"),
            vec!["+380501111111", "+380502222222"]
        );
    }
}
