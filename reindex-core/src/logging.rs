//! Logging setup for the Reindex CLI.
//!
//! Log output goes to stderr; stdout is reserved for the progress lines the
//! commands print for the operator. At the default verbosity only warnings
//! and errors are logged, so a successful run leaves stderr empty.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::Result;

/// Maps the `-v`/`-q` flags to a maximum log level.
///
/// `quiet` wins over any verbosity; otherwise 0 is WARN, 1 is INFO, 2 is
/// DEBUG and anything above is TRACE.
pub const fn log_level(verbose: u8, quiet: bool) -> tracing::Level {
    match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::WARN,
        (false, 1) => tracing::Level::INFO,
        (false, 2) => tracing::Level::DEBUG,
        (false, _) => tracing::Level::TRACE,
    }
}

/// Builds the fmt subscriber used by [`init_logging`], writing to `writer`.
pub fn build_subscriber<W>(
    verbose: u8,
    quiet: bool,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose, quiet))
        .with_writer(writer)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish()
}

/// Initializes structured logging based on verbosity level.
///
/// # Arguments
/// * `verbose` - Verbosity level (0=WARN, 1=INFO, 2=DEBUG, 3+=TRACE)
/// * `quiet` - If true, only show ERROR level logs
///
/// # Example
/// ```rust,no_run
/// use reindex_core::logging::init_logging;
///
/// init_logging(1, false).expect("Failed to initialize logging");
/// ```
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    build_subscriber(verbose, quiet, std::io::stderr)
        .try_init()
        .map_err(|e| {
            crate::error::ReindexError::configuration(format!(
                "Failed to initialize logging: {}",
                e
            ))
        })?;

    Ok(())
}
