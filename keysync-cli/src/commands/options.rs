//! Options shared by every subcommand.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use keysync_core::config::{self, ConfigLayer};
use keysync_core::SyncOptions;

/// Global flags. Any flag given here overrides `keysync.yaml`.
#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// Directory containing the locale files [default: messages].
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Reference locale file name inside the directory [default: en.json].
    #[arg(long, global = true, value_name = "FILE")]
    pub reference: Option<String>,

    /// Glob selecting locale files [default: *.json].
    #[arg(long, global = true, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Value written for missing keys [default: NOT TRANSLATED].
    #[arg(long, global = true, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Spaces per indentation level [default: 4].
    #[arg(long, global = true, value_name = "N")]
    pub indent: Option<usize>,

    /// End rewritten files with a newline.
    #[arg(long, global = true, overrides_with = "no_trailing_newline")]
    pub trailing_newline: bool,

    /// Do not end rewritten files with a newline.
    #[arg(long, global = true, overrides_with = "trailing_newline")]
    pub no_trailing_newline: bool,

    /// Config file to read instead of ./keysync.yaml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl OptionArgs {
    /// Defaults, then the config file, then these flags.
    pub fn resolve(self) -> Result<SyncOptions> {
        let file_layer = match &self.config {
            Some(path) => Some(ConfigLayer::load_at(path)?),
            None => {
                let cwd = std::env::current_dir().context("could not determine current directory")?;
                ConfigLayer::discover_in(&cwd)?
            }
        };

        let flag_layer = ConfigLayer {
            messages_dir: self.dir,
            reference: self.reference,
            pattern: self.pattern,
            placeholder: self.placeholder,
            indent: self.indent,
            trailing_newline: match (self.trailing_newline, self.no_trailing_newline) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
        };

        let options = config::resolve(file_layer.into_iter().chain([flag_layer]))?;
        Ok(options)
    }
}
