//! # storygen-catalog
//!
//! The story documents `storygen` regenerates.
//!
//! ```rust,no_run
//! use storygen_catalog::story_set;
//!
//! if let Ok(set) = story_set() {
//!     for entry in &set {
//!         println!("{}: {} bytes", entry.path, entry.content.len());
//!     }
//! }
//! ```

pub mod catalog;

pub use catalog::{story_set, STORIES};
