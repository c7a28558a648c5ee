//! Error types for storygen-writer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from a regeneration or diff pass.
#[derive(Debug, Error)]
pub enum RegenError {
    /// Creating a directory, writing, renaming or reading a file failed.
    #[error("I/O error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`RegenError::Storage`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RegenError {
    RegenError::Storage {
        path: path.into(),
        source,
    }
}
