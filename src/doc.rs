//! Seam to the replicated document.
//!
//! The operational-transform engine lives outside this crate. Everything here
//! talks to it through [`SharedDoc`]: read the current content, submit
//! JSON1-shaped ops, and drain presence broadcasts from other sessions.
//! [`LocalDoc`] is the in-process implementation used by the binary and tests.

use thiserror::Error;

use crate::model::{FileId, SessionId, VzContent};

mod file_ops;
mod local;
mod op;
pub mod presence_feed;

pub use self::file_ops::{create_file, delete_directory, delete_file, edit_text, rename_file};
pub use self::local::{LocalDoc, PresenceSender};
pub use self::op::{
    DocPath, Op, PathSegment, file_path, insert_op, name_path, remove_op, replace_op, text_path,
};

/// Source tag attached to ops submitted by the local editor.
pub const SOURCE_LOCAL: &str = "local";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    #[error("file {0} no longer exists")]
    MissingFile(FileId),
    #[error("file {0} already exists")]
    AlreadyExists(FileId),
    #[error("stale {field} for file {id}: document changed underneath")]
    Stale { id: FileId, field: &'static str },
    #[error("unsupported op path {0}")]
    UnsupportedPath(String),
    #[error("invalid value at {path}: {reason}")]
    InvalidValue { path: String, reason: String },
}

/// A presence broadcast from another session. `None` means the session left
/// or cleared its cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct PresenceEvent {
    pub id: SessionId,
    pub presence: Option<serde_json::Value>,
}

pub trait SharedDoc {
    fn data(&self) -> &VzContent;

    /// Bumped on every applied op.
    fn version(&self) -> u64;

    fn submit_op(&mut self, op: Op, source: &str) -> Result<(), DocError>;

    /// Drains presence events received since the last call.
    fn poll_presence(&mut self) -> Vec<PresenceEvent>;
}

#[cfg(test)]
#[path = "tests/doc/local_doc_tests.rs"]
mod local_doc_tests;

#[cfg(test)]
#[path = "tests/doc/presence_feed_tests.rs"]
mod presence_feed_tests;
