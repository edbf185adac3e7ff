//! Domain types for locale documents.
//!
//! A locale document is a JSON object of sections, each section an object of
//! translation keys. The [`Reference`] keeps only the key set of the
//! canonical locale; values are never needed once it is loaded.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::document;
use crate::error::DocumentError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A locale code derived from a file stem, e.g. `de` for `de.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleCode(pub String);

impl LocaleCode {
    /// Locale code of a `<code>.json` path. `None` when the path has no stem.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_stem()
            .map(|s| Self(s.to_string_lossy().into_owned()))
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for LocaleCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LocaleCode {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Reference
// ---------------------------------------------------------------------------

/// Key set of the reference locale: section name → translation keys.
///
/// Read-only after construction; pass it by shared reference to every
/// per-file operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub path: PathBuf,
    pub sections: BTreeMap<String, BTreeSet<String>>,
}

impl Reference {
    /// Load and validate the reference file at `path`.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let value = document::load_json(path)?;
        Self::from_value(path, value)
    }

    /// Build a reference from an already-parsed document.
    ///
    /// The root and every section must be JSON objects.
    pub fn from_value(path: &Path, value: Value) -> Result<Self, DocumentError> {
        let Value::Object(root) = value else {
            return Err(DocumentError::NotAnObject {
                path: path.to_path_buf(),
            });
        };

        let mut sections = BTreeMap::new();
        for (section, body) in root {
            let Value::Object(entries) = body else {
                return Err(DocumentError::InvalidSection {
                    path: path.to_path_buf(),
                    section,
                });
            };
            sections.insert(section, entries.into_iter().map(|(k, _)| k).collect());
        }

        Ok(Self {
            path: path.to_path_buf(),
            sections,
        })
    }

    /// Total number of keys across all sections.
    pub fn key_count(&self) -> usize {
        self.sections.values().map(BTreeSet::len).sum()
    }

    pub fn locale(&self) -> Option<LocaleCode> {
        LocaleCode::from_path(&self.path)
    }
}
