//! # CLI Layer
//!
//! The read loop around [`AddrbookApi`]. This is the only place that reads
//! stdin, writes to the terminal or decides the exit code.
//!
//! Startup: parse flags, install logging, resolve the contacts file
//! (`--file` > `ADDRBOOK_FILE` > `config.json` > `contacts.json`) and load it.
//! Each line is handed to the API until an exit keyword or end of input, both
//! of which save the book before leaving.

mod args;
mod print;

use addrbook::api::{AddrbookApi, Outcome};
use addrbook::config::{AddrbookConfig, CONTACTS_FILE_ENV};
use addrbook::error::Result;
use addrbook::store::fs::JsonFileStore;
use args::Cli;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = JsonFileStore::new(contacts_file(&cli)?);
    info!(path = %store.path().display(), "using contacts file");
    let mut api = AddrbookApi::open(store)?;

    println!("For a quick test, use the command [generate <count up to 1000>]");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter command: ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            api.save()?;
            break;
        };

        match api.handle_line(&line)? {
            Outcome::Continue(result) => print::print_result(&result),
            Outcome::Exit => {
                println!("Good bye!");
                break;
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn contacts_file(cli: &Cli) -> Result<PathBuf> {
    let config_dir = cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "addrbook", "addrbook").map(|d| d.config_dir().to_path_buf())
    });
    let config = match config_dir {
        Some(dir) => AddrbookConfig::load(dir)?,
        None => AddrbookConfig::default(),
    };
    let env_value = std::env::var(CONTACTS_FILE_ENV).ok();
    Ok(config.resolve_contacts_file(cli.file.clone(), env_value))
}
