// CLI module for command-line interface

pub mod preview;
pub mod sequence;
pub mod write;

use clap::{ArgAction, Parser, Subcommand};
use crate::utils::error::Result;

use self::preview::PreviewCommand;
use self::write::WriteCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "datedirs")]
#[command(about = "Create weekly or monthly sequences of dated directories")]
#[command(long_about = r#"datedirs builds a list of directory names from a label, a start date,
a cadence and a count, then creates them on disk.

Weekly sequences are named by date, seven days apart:
  Reports-2020-01-01, Reports-2020-01-08, ...
Monthly sequences are numbered from 00:
  Reports-2020-00, Reports-2020-01, ...

Defaults can be kept in ~/.config/datedirs/datedirs.toml or passed with --config.

Examples:
  datedirs preview --label Reports --year 2024 --month 1 --day 1
  datedirs write --cadence monthly --count 12 --root ~/archive
  datedirs preview --json"#)]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the directories a sequence would create
    Preview(PreviewCommand),

    /// Create the directories of a sequence
    #[command(long_about = r#"Generate a sequence and create each directory in order.

Missing parent directories are created. Creation stops at the first entry
that cannot be created (for example because it already exists); directories
created before that point are left in place.

Examples:
  datedirs write --label Sprint --year 2024 --month 1 --day 8 --count 26
  datedirs write --cadence monthly --root /srv/reports"#)]
    Write(WriteCommand),
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Preview(cmd) => cmd.run(),
            Commands::Write(cmd) => cmd.run(),
        }
    }
}
