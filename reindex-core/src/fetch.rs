//! Fetching an application's schema into a local file.
//!
//! The workflow is linear with two early exits:
//! 1. refuse to run if the target exists and `force` is not set
//! 2. run [`SCHEMA_QUERY`]; if the service reports errors, print them and stop
//! 3. otherwise write the sanitized types as JSON5
//!
//! The existence check completes before any network traffic, so a refused
//! overwrite never costs a round-trip.

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

use crate::{
    Result,
    client::SchemaClient,
    console::Console,
    error::{ReindexError, redact_url},
    json5,
    models::{QueryResponse, SchemaData, SchemaType},
    query::SCHEMA_QUERY,
};

/// Target file used when none is given.
pub const DEFAULT_TARGET: &str = "./ReindexSchema.json";

/// Options for [`fetch_schema`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Overwrite an existing target file
    pub force: bool,
}

/// How a fetch that did not fail ended.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The schema file was written.
    Written {
        /// Path of the written file
        path: PathBuf,
        /// Number of types in the file
        types: usize,
    },
    /// The service answered with GraphQL errors; nothing was written.
    QueryErrors(serde_json::Value),
}

/// Fetches the schema through `client` and writes it to `target`.
///
/// `target` defaults to [`DEFAULT_TARGET`]. Progress lines go to the
/// console's output stream; GraphQL errors reported by the service go to its
/// error stream and end the run without writing a file.
///
/// # Errors
/// Returns error if:
/// - the target exists and `options.force` is false (no query is sent)
/// - the query fails in transport or the response carries no schema data
/// - the file cannot be checked or written
///
/// A status line that cannot be printed after the file is written is only
/// logged.
///
/// # Example
/// ```rust,no_run
/// use reindex_core::{ClientConfig, Console, FetchOptions, ReindexClient, fetch_schema};
///
/// # async fn example() -> reindex_core::Result<()> {
/// let client = ReindexClient::new(ClientConfig::new("https://example.myreindex.com"))?;
/// let mut console = Console::stdio();
/// fetch_schema(&client, None, FetchOptions { force: true }, &mut console).await?;
/// # Ok(())
/// # }
/// ```
pub async fn fetch_schema<C, O, E>(
    client: &C,
    target: Option<&Path>,
    options: FetchOptions,
    console: &mut Console<O, E>,
) -> Result<FetchOutcome>
where
    C: SchemaClient + ?Sized,
    O: Write,
    E: Write,
{
    let target = target.map_or_else(|| PathBuf::from(DEFAULT_TARGET), Path::to_path_buf);

    if !options.force && target_exists(&target).await? {
        debug!("Refusing to overwrite {}", target.display());
        return Err(ReindexError::target_exists(&target));
    }

    console.status(format_args!(
        "Fetching Reindex schema from {}...",
        redact_url(client.url())
    ))?;

    let QueryResponse { data, errors } = client.query(SCHEMA_QUERY).await?;

    if let Some(errors) = errors {
        warn!("Schema query returned errors");
        console.report_errors(&errors)?;
        return Ok(FetchOutcome::QueryErrors(errors));
    }

    let types = data
        .and_then(SchemaData::into_types)
        .ok_or(ReindexError::MissingData)?;
    info!("Received {} types", types.len());
    for schema_type in &types {
        trace!(
            "{} ({} fields)",
            schema_type.name.as_deref().unwrap_or("<unnamed>"),
            schema_type.field_count()
        );
    }

    console.status(format_args!("Writing to {}...", target.display()))?;
    write_schema(&types, &target).await?;
    if let Err(e) = console.status("Done!") {
        warn!("Schema written, but the final status line failed: {}", e);
    }

    Ok(FetchOutcome::Written {
        path: target,
        types: types.len(),
    })
}

/// Encodes `types` as JSON5 with a trailing newline.
///
/// Null attributes of types, fields and permissions are left out.
///
/// # Errors
/// Returns a serialization error if encoding fails.
pub fn render_schema(types: &[SchemaType]) -> Result<Vec<u8>> {
    let mut contents = json5::to_vec_pretty(types)?;
    contents.push(b'\n');
    Ok(contents)
}

/// Overwrites `path` with the rendered schema in a single write.
async fn write_schema(types: &[SchemaType], path: &Path) -> Result<()> {
    let contents = render_schema(types)?;
    debug!("Writing {} bytes to {}", contents.len(), path.display());

    tokio::fs::write(path, contents)
        .await
        .map_err(|e| ReindexError::io(format!("Failed to write to {}", path.display()), e))
}

async fn target_exists(path: &Path) -> Result<bool> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|e| ReindexError::io(format!("Failed to check {}", path.display()), e))
}
