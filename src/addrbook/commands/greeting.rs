use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::dispatch::COMMANDS;
use crate::error::Result;

pub fn hello(_book: &mut AddressBook, _args: &[&str]) -> Result<CmdResult> {
    Ok(CmdResult::message(CmdMessage::info("How can I help you?")))
}

pub fn help(_book: &mut AddressBook, _args: &[&str]) -> Result<CmdResult> {
    let mut result = CmdResult::message(CmdMessage::info("Available commands:"));
    for command in COMMANDS {
        result.add_message(CmdMessage::info(format!("  {}", command.usage)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_greets() {
        let result = hello(&mut AddressBook::new(), &[]).unwrap();
        assert_eq!(result.text(), "How can I help you?");
    }

    #[test]
    fn help_lists_every_command() {
        let result = help(&mut AddressBook::new(), &[]).unwrap();
        assert_eq!(result.messages.len(), COMMANDS.len() + 1);
        assert!(result.text().contains("add phone <name> <phone>"));
    }
}
