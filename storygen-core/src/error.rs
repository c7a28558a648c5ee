//! Error types for storygen-core.

use thiserror::Error;

/// Errors raised while building a [`DocumentSet`](crate::DocumentSet).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentSetError {
    /// The path was empty, or contained nothing but `.` segments.
    #[error("document path is empty")]
    EmptyPath,

    /// The path is rooted (`/x`, `\x`, `C:\x`) instead of relative to the output root.
    #[error("document path '{path}' is absolute; paths must be relative to the output root")]
    AbsolutePath { path: String },

    /// The path contains a `..` segment and could escape the output root.
    #[error("document path '{path}' traverses outside the output root")]
    ParentTraversal { path: String },

    /// Two entries in the same set resolve to the same path.
    #[error("duplicate document path '{path}'")]
    DuplicatePath { path: String },
}
