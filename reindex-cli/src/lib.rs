//! Library module for reindex-cli
//!
//! This module exposes argument parsing and command dispatch so they can be
//! exercised by tests. The binary entry point is in main.rs.

use clap::{Args, Parser, Subcommand};
use reindex_core::{
    ClientConfig, Console, FetchOptions, FetchOutcome, ReindexClient, ReindexError, Result,
    fetch_schema,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// CLI argument structure
#[derive(Parser)]
#[command(name = "reindex")]
#[command(about = "Command-line tool for Reindex applications")]
#[command(version)]
#[command(long_about = "
Reindex CLI - manage Reindex applications from the command line

The application is selected with --url (or REINDEX_URL) and authenticated
with an admin token passed as --token (or REINDEX_TOKEN).

EXAMPLES:
  reindex schema-fetch
  reindex schema-fetch schema/ReindexSchema.json --force
  reindex --url https://example.myreindex.com schema-fetch
")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the application schema into a local file
    SchemaFetch(SchemaFetchArgs),
}

/// Arguments of `schema-fetch`
#[derive(Debug, Args)]
pub struct SchemaFetchArgs {
    /// Output file path
    #[arg(
        value_name = "FILE",
        help = "Schema file to write (default: ./ReindexSchema.json)"
    )]
    pub target: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long, help = "Overwrite the schema file if it already exists")]
    pub force: bool,
}

/// Application selection and credentials
#[derive(Args)]
pub struct ConnectionArgs {
    /// Application URL
    #[arg(
        long,
        env = "REINDEX_URL",
        global = true,
        help = "Reindex application URL (credentials will be redacted in output)"
    )]
    pub url: Option<String>,

    /// Admin token
    #[arg(
        long,
        env = "REINDEX_TOKEN",
        global = true,
        hide_env_values = true,
        help = "Reindex admin token"
    )]
    pub token: Option<String>,
}

/// Flags shared by all commands
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress logs
    #[arg(short, long, global = true, help = "Suppress all logs except errors")]
    pub quiet: bool,
}

impl ConnectionArgs {
    /// Builds a validated client configuration from the flags.
    ///
    /// # Errors
    /// Returns a configuration error if no URL was given or it is invalid.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let Some(url) = &self.url else {
            return Err(ReindexError::configuration(
                "Reindex URL is required. Set REINDEX_URL or pass --url.",
            ));
        };

        let mut config = ClientConfig::new(url.clone());
        if let Some(token) = &self.token {
            config = config.with_token(token.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

/// Execute the CLI command with the given arguments
///
/// # Errors
///
/// Returns errors for invalid configuration and for any failure of the
/// command itself. GraphQL errors reported by the service are printed to
/// the console instead.
pub async fn run<O: Write, E: Write>(cli: &Cli, console: &mut Console<O, E>) -> Result<()> {
    match &cli.command {
        Command::SchemaFetch(args) => {
            let client = ReindexClient::new(cli.connection.client_config()?)?;
            let options = FetchOptions { force: args.force };

            match fetch_schema(&client, args.target.as_deref(), options, console).await? {
                FetchOutcome::Written { path, types } => {
                    info!("Saved {} types to {}", types, path.display());
                }
                FetchOutcome::QueryErrors(_) => {
                    info!("Schema file not written");
                }
            }

            Ok(())
        }
    }
}

/// Renders an error followed by its chain of causes.
pub fn error_report(error: &dyn std::error::Error) -> String {
    let mut report = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        report.push_str(": ");
        report.push_str(&cause.to_string());
        source = cause.source();
    }
    report
}
