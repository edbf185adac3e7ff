//! Hash-gated atomic writer.
//!
//! ## `atomic_write` protocol
//!
//! 1. Normalise line endings of the new content to LF.
//! 2. SHA-256 hash the new content.
//! 3. SHA-256 hash the bytes currently on disk (if any).
//! 4. Compare → skip if identical.
//! 5. Write to `<path>.keysync.tmp`.
//! 6. Rename to final path (atomic on POSIX).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{io_err, SyncError};
use crate::plan::{normalize_line_endings, FilePlan};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — new content matches what is on disk.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

/// Write a planned document to its own path.
pub fn write_plan(plan: &FilePlan, dry_run: bool) -> Result<WriteResult, SyncError> {
    atomic_write(&plan.path, &plan.rendered, dry_run)
}

/// Atomically replace `path` with `content` unless it already holds exactly
/// that content. A symlinked `path` is written through to its target.
pub fn atomic_write(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, SyncError> {
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let tmp = PathBuf::from(format!("{}.keysync.tmp", resolved.display()));
    let result = atomic_write_with_tmp(&resolved, content, dry_run, &tmp)?;
    Ok(match result {
        WriteResult::Written { .. } => WriteResult::Written {
            path: path.to_path_buf(),
        },
        WriteResult::Unchanged { .. } => WriteResult::Unchanged {
            path: path.to_path_buf(),
        },
        WriteResult::WouldWrite { .. } => WriteResult::WouldWrite {
            path: path.to_path_buf(),
        },
    })
}

fn atomic_write_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, SyncError> {
    let normalized = normalize_line_endings(content);
    let content = normalized.as_str();

    let digest = sha256_hex(content.as_bytes());
    if let Some(current) = current_digest(path)? {
        if current == digest {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

/// Hash of the file currently at `path`, with line endings normalised.
/// `None` when the file does not exist.
fn current_digest(path: &Path) -> Result<Option<String>, SyncError> {
    match std::fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            Ok(Some(sha256_hex(normalize_line_endings(&text).as_bytes())))
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
