//! Locate the locale files to bring up to date.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};

use crate::error::{io_err, SyncError};

/// Compile a file-name glob such as `*.json`.
pub fn compile_pattern(pattern: &str) -> Result<GlobMatcher, SyncError> {
    Glob::new(pattern)
        .map(|g| g.compile_matcher())
        .map_err(|source| SyncError::Pattern {
            pattern: pattern.to_owned(),
            source,
        })
}

/// List the files directly inside `dir` whose name matches `pattern`,
/// excluding `reference`. Sorted by file name.
///
/// Subdirectories are not descended into.
pub fn discover_targets(
    dir: &Path,
    pattern: &str,
    reference: &Path,
) -> Result<Vec<PathBuf>, SyncError> {
    let matcher = compile_pattern(pattern)?;
    let reference = canonical_or_raw(reference);

    let mut targets: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| io_err(dir, e))?
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::warn!("skipping unreadable entry in {}: {err}", dir.display());
                None
            }
        })
        .filter(|e| matcher.is_match(e.file_name()))
        .map(|e| e.path())
        .filter(|p| is_locale_file(p))
        .filter(|p| canonical_or_raw(p) != reference)
        .collect();
    targets.sort();

    tracing::debug!("discovered {} target(s) in {}", targets.len(), dir.display());
    Ok(targets)
}

/// Regular file, following symlinks. Dangling links are logged and skipped.
fn is_locale_file(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file(),
        Err(err) => {
            tracing::warn!("skipping {}: {err}", path.display());
            false
        }
    }
}

fn canonical_or_raw(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "{}").unwrap();
    }

    #[test]
    fn lists_json_files_sorted_without_reference() {
        let tmp = TempDir::new().unwrap();
        for name in ["fr.json", "en.json", "de.json", "README.md"] {
            touch(tmp.path(), name);
        }

        let targets = discover_targets(tmp.path(), "*.json", &tmp.path().join("en.json")).unwrap();
        let names: Vec<_> = targets
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["de.json", "fr.json"]);
    }

    #[test]
    fn reference_is_excluded_through_relative_paths() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("messages");
        fs::create_dir_all(&nested).unwrap();
        touch(&nested, "en.json");
        touch(&nested, "de.json");

        let reference = nested.join("..").join("messages").join("en.json");
        let targets = discover_targets(&nested, "*.json", &reference).unwrap();
        assert_eq!(targets, vec![nested.join("de.json")]);
    }

    #[test]
    fn subdirectories_are_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("archive.json")).unwrap();
        touch(tmp.path(), "de.json");

        let targets = discover_targets(tmp.path(), "*.json", &tmp.path().join("en.json")).unwrap();
        assert_eq!(targets, vec![tmp.path().join("de.json")]);
    }

    #[test]
    #[cfg(unix)]
    fn symlinked_locale_file_is_included() {
        let tmp = TempDir::new().unwrap();
        let shared = TempDir::new().unwrap();
        touch(shared.path(), "de.json");
        std::os::unix::fs::symlink(shared.path().join("de.json"), tmp.path().join("de.json"))
            .unwrap();
        std::os::unix::fs::symlink(shared.path().join("nope.json"), tmp.path().join("xx.json"))
            .unwrap();

        let targets = discover_targets(tmp.path(), "*.json", &tmp.path().join("en.json")).unwrap();
        assert_eq!(targets, vec![tmp.path().join("de.json")]);
    }

    #[test]
    fn custom_pattern_narrows_the_set() {
        let tmp = TempDir::new().unwrap();
        for name in ["de.json", "de.backup.json", "fr.json"] {
            touch(tmp.path(), name);
        }
        let targets = discover_targets(tmp.path(), "??.json", &tmp.path().join("en.json")).unwrap();
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = discover_targets(tmp.path(), "[*.json", &tmp.path().join("en.json")).unwrap_err();
        assert!(matches!(err, SyncError::Pattern { .. }), "got: {err}");
    }

    #[test]
    fn missing_dir_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nope");
        let err = discover_targets(&dir, "*.json", &dir.join("en.json")).unwrap_err();
        assert!(matches!(err, SyncError::Io { .. }), "got: {err}");
    }
}
