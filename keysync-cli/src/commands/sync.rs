//! `keysync sync` — fill missing keys and rewrite locale files.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use keysync_core::{Insertion, SyncOptions};
use keysync_sync::{pipeline, FileReport, SyncReport, WriteResult};

use super::scope_for;

/// Arguments for `keysync sync`.
#[derive(Args, Debug, Default)]
pub struct SyncArgs {
    /// Locales to sync, e.g. `de fr` (omit for every locale file).
    pub locales: Vec<String>,

    /// Report what would change without writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    pub fn run(self, options: &SyncOptions) -> Result<()> {
        let scope = scope_for(&self.locales);
        let report = pipeline::run(options, &scope, self.dry_run).with_context(|| {
            format!("sync failed for {}", options.messages_dir.display())
        })?;

        print_report(&report, self.dry_run);
        Ok(())
    }
}

fn print_report(report: &SyncReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };

    for file in &report.files {
        print_notices(file, prefix);
    }

    let checked = report.files.len() + report.failures.len();
    if checked == 0 {
        println!("{prefix}No locale files besides {}.", report.reference.display());
        return;
    }

    let verb = if dry_run { "would be written" } else { "written" };
    println!(
        "{prefix}{} {checked} locale file(s) checked ({} {verb}, {} key(s) added)",
        "✓".green(),
        report.written(),
        report.inserted_keys(),
    );
    if !report.failures.is_empty() {
        println!(
            "{prefix}{} {} file(s) skipped:",
            "✗".red(),
            report.failures.len()
        );
        for failure in &report.failures {
            println!("  {}", failure.path.display());
        }
    }
}

fn print_notices(file: &FileReport, prefix: &str) {
    let name = file_label(file);
    for insertion in &file.merge.insertions {
        match insertion {
            Insertion::Section { section } => {
                println!("{prefix}Added section '{}' to {name}", section.cyan());
            }
            Insertion::Key { section, key } => {
                println!(
                    "{prefix}Added missing key '{}' in section '{}' to {name}",
                    key.yellow(),
                    section.cyan()
                );
            }
        }
    }
    for section in &file.merge.conflicts {
        println!(
            "{prefix}{} Section '{}' in {name} is not an object; left untouched",
            "⚠".yellow(),
            section.cyan()
        );
    }
    let rewritten = matches!(
        file.write,
        WriteResult::Written { .. } | WriteResult::WouldWrite { .. }
    );
    if rewritten && file.merge.is_noop() {
        println!("{prefix}Reformatted {name}");
    }
}

fn file_label(file: &FileReport) -> String {
    file.path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.path.display().to_string())
}
