//! keysync core library — locale document types, JSON codec, key merge, config.
//!
//! Public API surface:
//! - [`types`] — newtypes and the [`Reference`] key set
//! - [`document`] — load / serialize locale JSON
//! - [`merge`] — fill missing keys into a target document
//! - [`config`] — [`SyncOptions`] and the optional `keysync.yaml`
//! - [`error`] — [`DocumentError`], [`ConfigError`]

pub mod config;
pub mod document;
pub mod error;
pub mod merge;
pub mod types;

pub use config::{Formatting, SyncOptions};
pub use error::{ConfigError, DocumentError};
pub use merge::{fill_missing, Insertion, MergeReport};
pub use types::{LocaleCode, Reference};
