//! Core data structures and operations for the Reindex CLI.
//!
//! This crate provides the schema model, the GraphQL client abstraction and
//! the schema fetch workflow used by the `reindex` binary.
//!
//! # Architecture
//! - [`SchemaClient`] abstracts the remote GraphQL service so the fetch
//!   workflow can run against the HTTP client or an in-memory stand-in
//! - [`fetch_schema`] is a linear pipeline: existence guard, query,
//!   sanitize, serialize, write
//! - Null attributes are dropped during serialization of the schema models,
//!   so what lands on disk is always the sanitized form

pub mod client;
pub mod console;
pub mod error;
pub mod fetch;
pub mod json5;
pub mod logging;
pub mod models;
pub mod query;

// Re-export commonly used types
pub use client::{ClientConfig, ReindexClient, SchemaClient};
pub use console::Console;
pub use error::{ReindexError, Result};
pub use fetch::{DEFAULT_TARGET, FetchOptions, FetchOutcome, fetch_schema};
pub use logging::init_logging;
pub use models::{
    FieldDescriptor, Ordering, PermissionEntry, PermissionGrant, QueryResponse, SchemaType,
};
pub use query::SCHEMA_QUERY;
