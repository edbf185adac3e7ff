//! Preview support for `keysync diff`.

use std::path::{Path, PathBuf};

use similar::TextDiff;

use keysync_core::SyncOptions;

use crate::pipeline::{load_reference, select_targets, FileFailure, SyncScope};
use crate::plan::{plan_file, FilePlan};
use crate::SyncError;

/// A single rendered file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub inserted_keys: usize,
    pub unified_diff: String,
}

/// Diff result for a messages directory.
#[derive(Debug)]
pub struct DiffReport {
    pub diffs: Vec<FileDiff>,
    pub failures: Vec<FileFailure>,
}

/// Plan what `sync` would write and compare it to current on-disk content.
///
/// No files are written. Files that would not change are omitted.
pub fn diff_messages(options: &SyncOptions, scope: &SyncScope) -> Result<DiffReport, SyncError> {
    let reference = load_reference(options)?;
    let targets = select_targets(options, &reference, scope)?;

    let mut diffs = Vec::new();
    let mut failures = Vec::new();
    for path in targets {
        match plan_file(&path, &reference, options) {
            Ok(plan) if plan.is_changed() => {
                diffs.push(render_diff(&plan, &options.messages_dir));
            }
            Ok(_) => {}
            Err(error) => {
                tracing::warn!("skipping {}: {error}", path.display());
                failures.push(FileFailure { path, error });
            }
        }
    }

    Ok(DiffReport { diffs, failures })
}

fn render_diff(plan: &FilePlan, root: &Path) -> FileDiff {
    let relative = plan.path.strip_prefix(root).unwrap_or(plan.path.as_path());
    let old_header = format!("a/{}", relative.display());
    let new_header = format!("b/{}", relative.display());
    let unified = TextDiff::from_lines(&plan.existing, &plan.rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    FileDiff {
        path: plan.path.clone(),
        inserted_keys: plan.merge.inserted_keys(),
        unified_diff: unified,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::pipeline;

    use super::*;

    fn fixture() -> TempDir {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("en.json"),
            r#"{"common": {"hello": "Hello", "bye": "Bye"}}"#,
        )
        .expect("write en");
        fs::write(
            tmp.path().join("de.json"),
            "{\n    \"common\": {\n        \"hello\": \"Hallo\"\n    }\n}",
        )
        .expect("write de");
        tmp
    }

    #[test]
    fn missing_key_produces_unified_diff() {
        let tmp = fixture();
        let report = diff_messages(&SyncOptions::for_dir(tmp.path()), &SyncScope::All).expect("diff");

        assert_eq!(report.diffs.len(), 1);
        let diff = &report.diffs[0];
        assert_eq!(diff.inserted_keys, 1);
        assert!(diff.unified_diff.contains("--- a/de.json"));
        assert!(diff.unified_diff.contains("+++ b/de.json"));
        assert!(diff.unified_diff.contains("@@"));
        assert!(diff
            .unified_diff
            .lines()
            .any(|l| l.starts_with('+') && l.contains("\"bye\": \"NOT TRANSLATED\"")));
    }

    #[test]
    fn diff_writes_nothing() {
        let tmp = fixture();
        let before = fs::read_to_string(tmp.path().join("de.json")).unwrap();
        diff_messages(&SyncOptions::for_dir(tmp.path()), &SyncScope::All).expect("diff");
        assert_eq!(fs::read_to_string(tmp.path().join("de.json")).unwrap(), before);
    }

    #[test]
    fn no_diffs_after_sync() {
        let tmp = fixture();
        let options = SyncOptions::for_dir(tmp.path());
        pipeline::run(&options, &SyncScope::All, false).expect("sync");

        let report = diff_messages(&options, &SyncScope::All).expect("diff");
        assert!(report.diffs.is_empty(), "synced directory should have no diff");
    }

    #[test]
    fn malformed_target_is_reported_not_fatal() {
        let tmp = fixture();
        fs::write(tmp.path().join("fr.json"), "{ nope").unwrap();
        let report = diff_messages(&SyncOptions::for_dir(tmp.path()), &SyncScope::All).expect("diff");
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].path.ends_with("fr.json"));
    }
}
