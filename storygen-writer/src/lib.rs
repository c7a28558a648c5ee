//! # storygen-writer
//!
//! Sequential, fail-fast document regeneration.
//!
//! Call [`regenerate`] to materialize every entry of a
//! [`DocumentSet`](storygen_core::DocumentSet) under an output root, or
//! [`diff`] to see what a pass would change without writing anything.

pub mod diff;
pub mod error;
pub mod writer;

pub use diff::{diff, FileDiff};
pub use error::RegenError;
pub use writer::{regenerate, RegenOptions, RegenReport, WriteResult};
