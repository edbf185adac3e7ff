//! Error types for keysync-sync.

use std::path::PathBuf;

use thiserror::Error;

use keysync_core::{DocumentError, LocaleCode};

/// All errors that can arise from sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The reference locale file does not exist.
    #[error("reference locale not found at {path}")]
    ReferenceNotFound { path: PathBuf },

    /// The reference exists but cannot be read or is not a locale document.
    #[error("invalid reference locale: {0}")]
    Reference(#[source] DocumentError),

    /// A target locale document could not be read, parsed, or rendered.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The locale file pattern is not a valid glob.
    #[error("invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// A locale was requested that has no file in the messages directory.
    #[error("no locale file for '{locale}' in {dir}")]
    UnknownLocale { locale: LocaleCode, dir: PathBuf },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
