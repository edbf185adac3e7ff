//! Error types for keysync-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, validating, or serializing a locale document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file could not be read (not found, permission denied, etc.).
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON — includes line/column context from serde_json.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document root is not a JSON object.
    #[error("{path}: root must be a JSON object")]
    NotAnObject { path: PathBuf },

    /// A reference section is not a JSON object.
    #[error("{path}: section '{section}' must be a JSON object")]
    InvalidSection { path: PathBuf, section: String },

    /// Serialization failed on the write path.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while loading `keysync.yaml` or validating options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error — includes file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("indent must be between 0 and {max}, got {got}")]
    InvalidIndent { got: usize, max: usize },
}
