//! Unified diff between a document set and the files under an output root.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use storygen_core::DocumentSet;

use crate::error::{io_err, RegenError};

/// A single out-of-date document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Compare what a regeneration pass would write with the current on-disk
/// content. Missing files diff against the empty string. Files are compared
/// as bytes; only differing files are decoded (lossily) for the diff text.
///
/// No files are written.
pub fn diff(set: &DocumentSet, root: &Path) -> Result<Vec<FileDiff>, RegenError> {
    let mut diffs = Vec::new();
    for entry in set {
        let path = entry.path.resolve(root);
        let existing = read_existing_or_empty(&path)?;
        if existing == entry.content.as_bytes() {
            continue;
        }
        let existing = String::from_utf8_lossy(&existing);

        let old_header = format!("a/{}", entry.path);
        let new_header = format!("b/{}", entry.path);
        let unified = TextDiff::from_lines(&*existing, entry.content.as_str())
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();

        diffs.push(FileDiff {
            path,
            unified_diff: unified,
        });
    }
    Ok(diffs)
}

fn read_existing_or_empty(path: &Path) -> Result<Vec<u8>, RegenError> {
    match std::fs::read(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(io_err(path, err)),
    }
}
