//! JSON5 output for schema files.
//!
//! The writer is a [`serde_json`] formatter layered over the pretty printer.
//! Everything is emitted as pretty JSON with a two-space indent, except
//! object keys that are plain identifiers, which are written without quotes.
//! The result is valid JSON5 and reads like a hand-written config file.

use serde::Serialize;
use serde_json::ser::{CharEscape, CompactFormatter, Formatter, PrettyFormatter};
use std::io;

use crate::{Result, error::ReindexError};

const INDENT: &[u8] = b"  ";

/// Formatter that unquotes identifier keys.
///
/// Key strings are buffered between `begin_string` and `end_string` so the
/// quoting decision can be made once the whole key is known. Numeric and
/// boolean map keys go through the same buffer, so they come out quoted
/// (`"1"`) or bare (`true`) like any other key.
pub struct Json5Formatter<'a> {
    pretty: PrettyFormatter<'a>,
    in_key: bool,
    key: Vec<u8>,
    key_escaped: bool,
}

impl Json5Formatter<'_> {
    /// Creates a formatter with a two-space indent.
    pub fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(INDENT),
            in_key: false,
            key: Vec::new(),
            key_escaped: false,
        }
    }
}

impl Default for Json5Formatter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true if `key` can be written as an unquoted JSON5 member name.
pub fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Scalar writers that honor the key buffer.
macro_rules! buffered_scalars {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method<W>(&mut self, writer: &mut W, value: $ty) -> io::Result<()>
            where
                W: ?Sized + io::Write,
            {
                if self.in_key {
                    CompactFormatter.$method(&mut self.key, value)
                } else {
                    CompactFormatter.$method(writer, value)
                }
            }
        )*
    };
}

impl Formatter for Json5Formatter<'_> {
    buffered_scalars! {
        write_bool: bool,
        write_i8: i8,
        write_i16: i16,
        write_i32: i32,
        write_i64: i64,
        write_i128: i128,
        write_u8: u8,
        write_u16: u16,
        write_u32: u32,
        write_u64: u64,
        write_u128: u128,
        write_f32: f32,
        write_f64: f64,
    }

    fn begin_string<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if self.in_key {
            self.key.clear();
            self.key_escaped = false;
            Ok(())
        } else {
            writer.write_all(b"\"")
        }
    }

    fn end_string<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !self.in_key {
            return writer.write_all(b"\"");
        }

        let bare = !self.key_escaped && std::str::from_utf8(&self.key).is_ok_and(is_identifier);
        if bare {
            writer.write_all(&self.key)
        } else {
            writer.write_all(b"\"")?;
            writer.write_all(&self.key)?;
            writer.write_all(b"\"")
        }
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if self.in_key {
            self.key.extend_from_slice(fragment.as_bytes());
            Ok(())
        } else {
            writer.write_all(fragment.as_bytes())
        }
    }

    fn write_char_escape<W>(&mut self, writer: &mut W, char_escape: CharEscape) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if self.in_key {
            self.key_escaped = true;
            CompactFormatter.write_char_escape(&mut self.key, char_escape)
        } else {
            CompactFormatter.write_char_escape(writer, char_escape)
        }
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.in_key = true;
        self.pretty.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.in_key = false;
        self.pretty.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object_value(writer)
    }
}

/// Serializes `value` as indented JSON5.
///
/// The output has no trailing newline.
///
/// # Errors
/// Returns a serialization error if `value` cannot be represented, e.g. a
/// map keyed by sequences or structs.
pub fn to_vec_pretty<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::with_capacity(4096);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, Json5Formatter::new());
    value
        .serialize(&mut serializer)
        .map_err(|e| ReindexError::serialization("JSON5 encoding", e))?;
    Ok(buffer)
}
