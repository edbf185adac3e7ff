//! keysync — bring every locale file up to the reference key set.
//!
//! # Usage
//!
//! ```text
//! keysync                               # sync ./messages/*.json against ./messages/en.json
//! keysync sync [LOCALE...] [--dry-run]
//! keysync diff [LOCALE...]
//!
//! options: --dir <DIR> --reference <FILE> --pattern <GLOB> --placeholder <TEXT>
//!          --indent <N> --[no-]trailing-newline --config <FILE>
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, options::OptionArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "keysync",
    version,
    about = "Add missing translation keys to JSON locale files",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    options: OptionArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fill missing keys into every locale file (default).
    Sync(SyncArgs),

    /// Show unified diff of what sync would write.
    Diff(DiffArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = cli.options.resolve()?;
    match cli.command {
        None => SyncArgs::default().run(&options),
        Some(Commands::Sync(args)) => args.run(&options),
        Some(Commands::Diff(args)) => args.run(&options),
    }
}
