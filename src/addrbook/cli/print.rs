use addrbook::commands::{CmdMessage, CmdResult, MessageLevel};
use addrbook::record::Record;
use colored::Colorize;

pub(super) fn print_result(result: &CmdResult) {
    print_records(&result.listed_records);
    print_messages(&result.messages);
    println!();
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_records(records: &[Record]) {
    for record in records {
        println!("{}", record.name().title_case().bold());
        println!("   Phones: {}", format_phones(record));
        if let Some(birthday) = record.birthday() {
            println!("   Birthday: {}", birthday);
        }
        println!("---------");
    }
}

fn format_phones(record: &Record) -> String {
    record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
