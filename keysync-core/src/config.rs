//! Run options and the optional `keysync.yaml` config file.
//!
//! # Precedence
//!
//! ```text
//! CLI flag  >  keysync.yaml  >  built-in default
//! ```
//!
//! Each layer is a [`ConfigLayer`] whose `Some` fields override the options
//! built so far.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "keysync.yaml";

/// Placeholder written for keys that still need a translation.
pub const DEFAULT_PLACEHOLDER: &str = "NOT TRANSLATED";

pub const DEFAULT_MESSAGES_DIR: &str = "messages";
pub const DEFAULT_REFERENCE: &str = "en.json";
pub const DEFAULT_PATTERN: &str = "*.json";
pub const DEFAULT_INDENT: usize = 4;
pub const MAX_INDENT: usize = 16;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Output formatting for rewritten locale files. Keys are always sorted and
/// non-ASCII text is never escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatting {
    pub indent: usize,
    pub trailing_newline: bool,
}

impl Default for Formatting {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            trailing_newline: false,
        }
    }
}

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Directory holding one `<locale>.json` per locale.
    pub messages_dir: PathBuf,
    /// File name of the reference locale inside `messages_dir`.
    pub reference: String,
    /// Glob matched against file names in `messages_dir`.
    pub pattern: String,
    pub placeholder: String,
    pub formatting: Formatting,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            messages_dir: PathBuf::from(DEFAULT_MESSAGES_DIR),
            reference: DEFAULT_REFERENCE.to_owned(),
            pattern: DEFAULT_PATTERN.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            formatting: Formatting::default(),
        }
    }
}

impl SyncOptions {
    /// Default options rooted at `messages_dir`.
    pub fn for_dir(messages_dir: impl Into<PathBuf>) -> Self {
        Self {
            messages_dir: messages_dir.into(),
            ..Self::default()
        }
    }

    /// `<messages_dir>/<reference>` — pure, no I/O.
    pub fn reference_path(&self) -> PathBuf {
        self.messages_dir.join(&self.reference)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.formatting.indent > MAX_INDENT {
            return Err(ConfigError::InvalidIndent {
                got: self.formatting.indent,
                max: MAX_INDENT,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Config layers
// ---------------------------------------------------------------------------

/// One layer of optional settings, as found in `keysync.yaml` or on the
/// command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub messages_dir: Option<PathBuf>,
    pub reference: Option<String>,
    pub pattern: Option<String>,
    pub placeholder: Option<String>,
    pub indent: Option<usize>,
    pub trailing_newline: Option<bool>,
}

impl ConfigLayer {
    /// Load a config file. Returns `ConfigError::Io` if it does not exist.
    pub fn load_at(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        // An empty file deserializes to `null`; treat it as an empty layer.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `<dir>/keysync.yaml` if present.
    pub fn discover_in(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        Self::load_at(&path).map(Some)
    }

    /// Override `options` with every field set in this layer.
    pub fn apply(self, options: &mut SyncOptions) {
        if let Some(dir) = self.messages_dir {
            options.messages_dir = dir;
        }
        if let Some(reference) = self.reference {
            options.reference = reference;
        }
        if let Some(pattern) = self.pattern {
            options.pattern = pattern;
        }
        if let Some(placeholder) = self.placeholder {
            options.placeholder = placeholder;
        }
        if let Some(indent) = self.indent {
            options.formatting.indent = indent;
        }
        if let Some(trailing_newline) = self.trailing_newline {
            options.formatting.trailing_newline = trailing_newline;
        }
    }
}

/// Resolve options from defaults and `layers`, lowest precedence first.
pub fn resolve<I>(layers: I) -> Result<SyncOptions, ConfigError>
where
    I: IntoIterator<Item = ConfigLayer>,
{
    let mut options = SyncOptions::default();
    for layer in layers {
        layer.apply(&mut options);
    }
    options.validate()?;
    Ok(options)
}
