// datedirs - dated directory sequences
// Main CLI entry point

use clap::Parser;
use std::process;
use datedirs::cli::{Cli, CliDispatcher};
use datedirs::utils::error::UserError;
use datedirs::utils::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = CliDispatcher::execute(cli.command);

    if let Err(err) = result {
        let user_error = UserError::from_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
