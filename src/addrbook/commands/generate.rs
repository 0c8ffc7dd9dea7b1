use crate::book::AddressBook;
use crate::commands::contacts::add_user;
use crate::commands::helpers::expect_args;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddressBookError, Result};
use crate::fields::CANONICAL_PREFIX;
use rand::Rng;

pub const GENERATE_USAGE: &str = "generate <count up to 1000>";

/// Largest `count` accepted by a single `generate`.
pub const MAX_GENERATED: usize = 1000;

const OPERATOR_CODES: [&str; 6] = ["66", "50", "63", "96", "93", "67"];

/// Fills an empty book with `user_1..user_<count>`, each with a random number.
pub fn run(book: &mut AddressBook, args: &[&str]) -> Result<CmdResult> {
    let [raw_count] = expect_args(args, GENERATE_USAGE)?;
    let count: usize = raw_count
        .parse()
        .ok()
        .filter(|n| *n <= MAX_GENERATED)
        .ok_or_else(|| AddressBookError::BadArguments(GENERATE_USAGE.to_string()))?;

    if !book.is_empty() {
        return Ok(CmdResult::message(CmdMessage::warning(
            "Please restart your app! And generate contacts when you don't have any contacts!",
        )));
    }

    let mut rng = rand::rng();
    let mut result = CmdResult::default();
    for i in 1..=count {
        let name = format!("user_{}", i);
        let phone = random_phone(&mut rng);
        let added = add_user(book, &[name.as_str(), phone.as_str()])?;
        result.messages.extend(added.messages);
    }
    Ok(result)
}

fn random_phone<R: Rng>(rng: &mut R) -> String {
    let code = OPERATOR_CODES[rng.random_range(0..OPERATOR_CODES.len())];
    let subscriber: String = (0..7)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect();
    format!("{}{}{}", CANONICAL_PREFIX, code, subscriber)
}
