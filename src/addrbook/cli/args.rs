use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook", version)]
#[command(about = "Personal contact book with birthday reminders", long_about = None)]
pub struct Cli {
    /// Contacts file (overrides ADDRBOOK_FILE and the config file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory holding config.json (defaults to the per-user config dir)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
