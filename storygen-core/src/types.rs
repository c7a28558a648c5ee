//! Document types for a regeneration pass.
//!
//! A [`DocumentSet`] is an ordered, duplicate-free list of [`DocumentEntry`]
//! values. Every entry's path is a [`DocPath`], which is validated on
//! construction so that resolving it against an output root can never land
//! outside that root.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::DocumentSetError;

// ---------------------------------------------------------------------------
// DocPath
// ---------------------------------------------------------------------------

/// A validated, slash-delimited path relative to the output root.
///
/// Backslashes are accepted as separators. Empty and `.` segments are
/// dropped, so `./docs//a.md` and `docs/a.md` are the same `DocPath`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocPath(String);

impl DocPath {
    /// Validate and normalise `raw`.
    pub fn new(raw: &str) -> Result<Self, DocumentSetError> {
        if raw.starts_with('/') || raw.starts_with('\\') || has_drive_prefix(raw) {
            return Err(DocumentSetError::AbsolutePath {
                path: raw.to_owned(),
            });
        }

        let mut segments = Vec::new();
        for segment in raw.split(['/', '\\']) {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(DocumentSetError::ParentTraversal {
                        path: raw.to_owned(),
                    })
                }
                other => segments.push(other),
            }
        }

        if segments.is_empty() {
            return Err(DocumentSetError::EmptyPath);
        }
        Ok(Self(segments.join("/")))
    }

    /// The normalised path, always `/`-delimited.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Join this path onto `root` using the platform separator.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        let mut out = root.to_path_buf();
        out.extend(self.segments());
        out
    }
}

/// `C:` style prefixes are absolute (or drive-relative) on Windows.
fn has_drive_prefix(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for DocPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DocPath {
    type Err = DocumentSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for DocPath {
    type Error = DocumentSetError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

// ---------------------------------------------------------------------------
// DocumentEntry
// ---------------------------------------------------------------------------

/// One `(path, content)` pair to materialize.
///
/// `content` is opaque: it is written exactly as given, line endings included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    pub path: DocPath,
    pub content: String,
}

// ---------------------------------------------------------------------------
// DocumentSet
// ---------------------------------------------------------------------------

/// Ordered mapping from [`DocPath`] to content. Paths are unique.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    entries: Vec<DocumentEntry>,
    seen: HashSet<DocPath>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `(path, content)` pairs, keeping their order.
    ///
    /// Fails on the first invalid or duplicate path.
    pub fn from_entries<I, P, C>(entries: I) -> Result<Self, DocumentSetError>
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: Into<String>,
    {
        let mut set = Self::new();
        for (path, content) in entries {
            set.insert(path.as_ref(), content)?;
        }
        Ok(set)
    }

    /// Append an entry. The path is validated and must not already be present.
    pub fn insert(
        &mut self,
        path: &str,
        content: impl Into<String>,
    ) -> Result<(), DocumentSetError> {
        let path = DocPath::new(path)?;
        if !self.seen.insert(path.clone()) {
            return Err(DocumentSetError::DuplicatePath {
                path: path.to_string(),
            });
        }
        self.entries.push(DocumentEntry {
            path,
            content: content.into(),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a DocumentEntry;
    type IntoIter = std::slice::Iter<'a, DocumentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
