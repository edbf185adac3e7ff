//! Locale JSON codec.
//!
//! Output is deterministic: `serde_json::Map` is ordered by key, so objects
//! are always written with lexicographically sorted keys. Non-ASCII text is
//! written as-is; only the characters JSON requires are escaped.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::config::Formatting;
use crate::error::DocumentError;

/// Read and parse a JSON file.
pub fn load_json(path: &Path) -> Result<Value, DocumentError> {
    let contents = read_text(path)?;
    parse_str(path, &contents)
}

/// Read a file as UTF-8 text, annotating failures with `path`.
pub fn read_text(path: &Path) -> Result<String, DocumentError> {
    std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse JSON text that was read from `path`.
pub fn parse_str(path: &Path, contents: &str) -> Result<Value, DocumentError> {
    serde_json::from_str(contents).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `value` with the configured indentation.
pub fn to_pretty_string(value: &Value, formatting: &Formatting) -> Result<String, DocumentError> {
    let indent = " ".repeat(formatting.indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;

    // serde_json only ever emits valid UTF-8.
    let mut out = String::from_utf8_lossy(&buf).into_owned();
    if formatting.trailing_newline {
        out.push('\n');
    }
    Ok(out)
}
