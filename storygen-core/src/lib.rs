//! storygen core library: document types and validation errors.
//!
//! - [`types`]: [`DocPath`], [`DocumentEntry`], [`DocumentSet`]
//! - [`error`]: [`DocumentSetError`]

pub mod error;
pub mod types;

pub use error::DocumentSetError;
pub use types::{DocPath, DocumentEntry, DocumentSet};
