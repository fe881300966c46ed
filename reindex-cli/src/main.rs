//! Reindex command-line tool.
//!
//! Exits with status 0 when the command completes, including when the
//! service rejected the query and nothing was written, and with status 1
//! when an error propagates.

use clap::Parser;
use colored::Colorize;
use reindex_cli::{Cli, error_report, run};
use reindex_core::{Console, init_logging};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.global.verbose, cli.global.quiet) {
        eprintln!("{}", error_report(&e).red());
        return ExitCode::FAILURE;
    }

    let mut console = Console::stdio();

    match run(&cli, &mut console).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_report(&e).red());
            ExitCode::FAILURE
        }
    }
}
