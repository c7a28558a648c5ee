//! Atomic writer and the regeneration pass.
//!
//! ## `atomic_write` protocol
//!
//! 1. Create every missing ancestor of the target.
//! 2. Write the content to a uniquely named `.storygen-*.tmp` file next to
//!    the target. The name is picked with `O_EXCL`, so it never lands on
//!    another document.
//! 3. Copy the permissions of the file being replaced, if any.
//! 4. Rename over the final path (atomic on POSIX).
//!
//! A target is therefore either fully replaced or left as it was. There is no
//! merge with the previous content and no line-ending normalisation.
//!
//! The rename replaces the directory entry itself: a symlink at the target
//! becomes a regular file instead of being written through.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use storygen_core::DocumentSet;
use tempfile::{Builder, NamedTempFile};

use crate::error::{io_err, RegenError};

// ---------------------------------------------------------------------------
// Options and results
// ---------------------------------------------------------------------------

/// Settings for one regeneration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenOptions {
    /// Directory every document path is resolved against.
    pub root: PathBuf,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
}

impl Default for RegenOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dry_run: false,
        }
    }
}

impl RegenOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written, replacing whatever was there.
    Written { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            Self::Written { path } | Self::WouldWrite { path } => path,
        }
    }
}

/// Summary of a completed pass. Only produced when every entry succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenReport {
    pub root: PathBuf,
    pub dry_run: bool,
    pub writes: Vec<WriteResult>,
}

impl RegenReport {
    /// Number of documents written (or, in dry-run, that would be written).
    pub fn count(&self) -> usize {
        self.writes.len()
    }
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

/// Write `content` to `path`, replacing any existing file.
pub(crate) fn atomic_write(
    path: &Path,
    content: &str,
    dry_run: bool,
) -> Result<WriteResult, RegenError> {
    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;

    let mut tmp = new_tmp_in(parent).map_err(|e| io_err(parent, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| io_err(tmp.path(), e))?;

    if let Ok(meta) = fs::symlink_metadata(path) {
        if meta.is_file() {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| io_err(tmp.path(), e))?;
        }
    }

    // On failure the temp file is removed when the returned handle drops.
    tmp.persist(path).map_err(|e| io_err(path, e.error))?;

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

/// New files get the same mode `fs::write` would give them (0o666 minus umask).
fn new_tmp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".storygen-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

// ---------------------------------------------------------------------------
// regenerate
// ---------------------------------------------------------------------------

/// Materialize every entry of `set` under `options.root`, in set order.
///
/// Stops at the first entry that cannot be written; entries after it are not
/// attempted and files already written stay on disk. Re-running after fixing
/// the cause converges to the same final state.
pub fn regenerate(set: &DocumentSet, options: &RegenOptions) -> Result<RegenReport, RegenError> {
    tracing::debug!(
        "regenerating {} documents under {}",
        set.len(),
        options.root.display()
    );

    let mut writes = Vec::with_capacity(set.len());
    for entry in set {
        let target = entry.path.resolve(&options.root);
        tracing::debug!("{} -> {}", entry.path, target.display());
        let result = atomic_write(&target, &entry.content, options.dry_run)?;
        writes.push(result);
    }

    let report = RegenReport {
        root: options.root.clone(),
        dry_run: options.dry_run,
        writes,
    };
    tracing::info!(
        "regenerated {} documents under {}",
        report.count(),
        report.root.display()
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
