//! # keysync-sync
//!
//! Target discovery, hash-gated atomic writer, and the sync pipeline.
//!
//! Call [`pipeline::run`] to bring every locale file in a messages directory
//! up to the reference key set, or [`diff_messages`] to preview the result.

pub mod diff;
pub mod discover;
pub mod error;
pub mod pipeline;
pub mod plan;
pub mod writer;

pub use diff::{diff_messages, DiffReport, FileDiff};
pub use error::SyncError;
pub use pipeline::{FileFailure, FileReport, SyncReport, SyncScope};
pub use plan::FilePlan;
pub use writer::WriteResult;
