//! Sync pipeline entrypoint used by the CLI.
//!
//! Load reference → discover targets → plan + write each target. A failure in
//! one target is recorded and the rest of the batch still runs; only a bad
//! reference or an unreadable messages directory aborts the run.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use keysync_core::{DocumentError, LocaleCode, MergeReport, Reference, SyncOptions};

use crate::discover::discover_targets;
use crate::plan::plan_file;
use crate::writer::{write_plan, WriteResult};
use crate::SyncError;

/// Which target locales a run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncScope {
    /// Every locale file in the messages directory.
    All,
    /// Only the named locales. Each must have a file.
    Locales(Vec<LocaleCode>),
}

/// Outcome of syncing a single target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub locale: Option<LocaleCode>,
    pub merge: MergeReport,
    pub write: WriteResult,
}

/// A target that was skipped.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: SyncError,
}

/// Outcome of a whole run.
#[derive(Debug)]
pub struct SyncReport {
    pub reference: PathBuf,
    pub files: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl SyncReport {
    pub fn inserted_keys(&self) -> usize {
        self.files.iter().map(|f| f.merge.inserted_keys()).sum()
    }

    pub fn written(&self) -> usize {
        self.files
            .iter()
            .filter(|f| {
                matches!(
                    f.write,
                    WriteResult::Written { .. } | WriteResult::WouldWrite { .. }
                )
            })
            .count()
    }
}

/// Load the reference locale named by `options`.
///
/// A missing file is reported as [`SyncError::ReferenceNotFound`].
pub fn load_reference(options: &SyncOptions) -> Result<Reference, SyncError> {
    let path = options.reference_path();
    Reference::load(&path).map_err(|err| match err {
        DocumentError::Io { source, .. } if source.kind() == ErrorKind::NotFound => {
            SyncError::ReferenceNotFound { path }
        }
        other => SyncError::Reference(other),
    })
}

/// Resolve the target files for `scope`.
pub fn select_targets(
    options: &SyncOptions,
    reference: &Reference,
    scope: &SyncScope,
) -> Result<Vec<PathBuf>, SyncError> {
    let all = discover_targets(&options.messages_dir, &options.pattern, &reference.path)?;
    let SyncScope::Locales(wanted) = scope else {
        return Ok(all);
    };

    for locale in wanted {
        if !all.iter().any(|p| LocaleCode::from_path(p).as_ref() == Some(locale)) {
            return Err(SyncError::UnknownLocale {
                locale: locale.clone(),
                dir: options.messages_dir.clone(),
            });
        }
    }
    Ok(all
        .into_iter()
        .filter(|p| {
            LocaleCode::from_path(p)
                .map(|code| wanted.contains(&code))
                .unwrap_or(false)
        })
        .collect())
}

/// Plan and write one target.
pub fn sync_file(
    path: &Path,
    reference: &Reference,
    options: &SyncOptions,
    dry_run: bool,
) -> Result<FileReport, SyncError> {
    let plan = plan_file(path, reference, options)?;
    for section in &plan.merge.conflicts {
        tracing::warn!(
            "{}: section '{section}' is not an object; left untouched",
            path.display()
        );
    }
    let write = write_plan(&plan, dry_run)?;
    Ok(FileReport {
        path: plan.path,
        locale: plan.locale,
        merge: plan.merge,
        write,
    })
}

/// Run the sync pipeline for a scope.
///
/// Fails only when the reference or the target list cannot be loaded.
/// Per-file errors are collected in [`SyncReport::failures`].
pub fn run(
    options: &SyncOptions,
    scope: &SyncScope,
    dry_run: bool,
) -> Result<SyncReport, SyncError> {
    let reference = load_reference(options)?;
    tracing::debug!(
        "reference {} has {} section(s), {} key(s)",
        reference.path.display(),
        reference.sections.len(),
        reference.key_count()
    );

    let targets = select_targets(options, &reference, scope)?;
    let mut files = Vec::new();
    let mut failures = Vec::new();

    for path in targets {
        match sync_file(&path, &reference, options, dry_run) {
            Ok(report) => files.push(report),
            Err(error) => {
                tracing::warn!("skipping {}: {error}", path.display());
                failures.push(FileFailure { path, error });
            }
        }
    }

    Ok(SyncReport {
        reference: reference.path,
        files,
        failures,
    })
}
