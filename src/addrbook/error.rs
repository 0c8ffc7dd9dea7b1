use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Invalid birthday: {0}")]
    InvalidBirthday(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Birthday is not set for {0}")]
    BirthdayNotSet(String),

    #[error("Bad arguments, usage: {0}")]
    BadArguments(String),

    #[error("No more pages")]
    PaginationExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
