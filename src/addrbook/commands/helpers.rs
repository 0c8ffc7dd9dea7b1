use crate::book::AddressBook;
use crate::error::{AddressBookError, Result};
use crate::record::Record;

/// Exactly `N` argument tokens, or `BadArguments` carrying `usage`.
pub fn expect_args<'a, const N: usize>(args: &[&'a str], usage: &str) -> Result<[&'a str; N]> {
    args.try_into()
        .map_err(|_| AddressBookError::BadArguments(usage.to_string()))
}

pub fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.get_mut(name)
        .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))
}

pub fn record<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.get(name)
        .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))
}
