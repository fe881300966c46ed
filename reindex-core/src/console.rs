//! Operator-facing output streams.
//!
//! Commands narrate their progress on stdout and report service errors on
//! stderr. Both streams are held by a [`Console`] so tests can capture them.

use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

use crate::{Result, error::ReindexError};

/// A pair of output streams standing in for stdout and stderr.
pub struct Console<O, E> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    /// Console attached to the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    /// Creates a console over arbitrary writers.
    pub const fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Writes one progress line to the output stream.
    ///
    /// # Errors
    /// Returns error if the stream cannot be written.
    pub fn status(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.out, "{}", line)
            .and_then(|()| self.out.flush())
            .map_err(|e| ReindexError::io("Failed to write to stdout", e))
    }

    /// Writes `errors` to the error stream as indented JSON.
    ///
    /// # Errors
    /// Returns error if the value cannot be encoded or the stream cannot be
    /// written.
    pub fn report_errors(&mut self, errors: &serde_json::Value) -> Result<()> {
        let text = serde_json::to_string_pretty(errors)
            .map_err(|e| ReindexError::serialization("GraphQL errors", e))?;
        writeln!(self.err, "{}", text)
            .and_then(|()| self.err.flush())
            .map_err(|e| ReindexError::io("Failed to write to stderr", e))
    }

    /// Consumes the console and returns the underlying writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
