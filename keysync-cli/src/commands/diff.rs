//! `keysync diff` — show unified diffs for what sync would write.

use anyhow::{Context, Result};
use clap::Args;
use keysync_core::SyncOptions;
use keysync_sync::diff_messages;

use super::scope_for;

/// Arguments for `keysync diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Locales to diff (omit for every locale file).
    pub locales: Vec<String>,
}

impl DiffArgs {
    pub fn run(self, options: &SyncOptions) -> Result<()> {
        let scope = scope_for(&self.locales);
        let report = diff_messages(options, &scope)
            .with_context(|| format!("diff failed for {}", options.messages_dir.display()))?;

        // Skipped files were already logged as warnings.
        if report.diffs.is_empty() {
            println!("No differences in {}.", options.messages_dir.display());
            return Ok(());
        }

        for diff in report.diffs {
            print!("{}", diff.unified_diff);
            if !diff.unified_diff.ends_with('\n') {
                println!();
            }
        }
        Ok(())
    }
}
