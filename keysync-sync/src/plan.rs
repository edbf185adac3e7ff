//! Compute what syncing one target file would produce, without writing.

use std::path::{Path, PathBuf};

use serde_json::Value;

use keysync_core::{
    document, fill_missing, DocumentError, LocaleCode, MergeReport, Reference, SyncOptions,
};

use crate::error::SyncError;

/// The planned rewrite of one target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlan {
    pub path: PathBuf,
    pub locale: Option<LocaleCode>,
    pub merge: MergeReport,
    /// File contents as read, line endings normalised to LF.
    pub existing: String,
    /// Serialized document after the merge.
    pub rendered: String,
}

impl FilePlan {
    /// Whether writing `rendered` would change the file on disk. This can be
    /// true with no insertions when only formatting differs.
    pub fn is_changed(&self) -> bool {
        self.existing != self.rendered
    }
}

/// Load `path`, fill it from `reference`, and render the result.
pub fn plan_file(
    path: &Path,
    reference: &Reference,
    options: &SyncOptions,
) -> Result<FilePlan, SyncError> {
    let existing = normalize_line_endings(&document::read_text(path)?);
    let Value::Object(mut root) = document::parse_str(path, &existing)? else {
        return Err(DocumentError::NotAnObject {
            path: path.to_path_buf(),
        }
        .into());
    };

    let merge = fill_missing(&mut root, reference, &options.placeholder);
    let rendered = document::to_pretty_string(&Value::Object(root), &options.formatting)?;

    Ok(FilePlan {
        path: path.to_path_buf(),
        locale: LocaleCode::from_path(path),
        merge,
        existing,
        rendered,
    })
}

pub(crate) fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
