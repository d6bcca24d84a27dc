//! The status-query capability used by the tracker.
//!
//! The tracker never computes status itself. It hands a repository root and a
//! [`CancellationToken`] to a [`StatusQuery`] on a worker thread and stores
//! whatever changed-file mapping comes back. [`GitStatusQuery`] is the libgit2
//! backed implementation used by the binary.

use crate::core::{
    cancel::CancellationToken, change_kind::ChangeKind, error::Result, state::ChangedFiles,
};
use git2::{Repository, StatusEntry, StatusOptions};
use std::path::{Path, PathBuf};

/// Computes the changed files of a repository.
///
/// Implementations run on a worker thread and must check `cancel` at reasonable
/// intervals, returning `Err(TrackerError::Cancelled)` soon after it fires. A
/// query that never looks at its token stalls the tracker until it finishes.
/// Implementations must not touch shared state outside their return value.
pub trait StatusQuery: Send + Sync {
    fn query(&self, root: &Path, cancel: &CancellationToken) -> Result<ChangedFiles>;
}

/// Status query backed by `git2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitStatusQuery;

impl GitStatusQuery {
    pub fn new() -> Self {
        Self
    }
}

impl StatusQuery for GitStatusQuery {
    fn query(&self, root: &Path, cancel: &CancellationToken) -> Result<ChangedFiles> {
        cancel.check()?;

        let repo = Repository::open(root)?;

        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.recurse_untracked_dirs(true);
        opts.include_ignored(false);
        opts.renames_head_to_index(true);

        // libgit2 offers no way to interrupt the scan itself
        let statuses = repo.statuses(Some(&mut opts))?;
        cancel.check()?;

        let mut changed_files = ChangedFiles::new();
        for (index, entry) in statuses.iter().enumerate() {
            cancel.check_sparse(index)?;

            let Some(kind) = ChangeKind::from_git2(entry.status()) else {
                continue;
            };
            match entry_path(&entry) {
                Some(path) => {
                    changed_files.insert(path, kind);
                }
                None => log::warn!(
                    "Skipping unrepresentable path {:?} in {}",
                    String::from_utf8_lossy(entry.path_bytes()),
                    root.display()
                ),
            }
        }

        log::trace!(
            "git status for {} found {} changed files",
            root.display(),
            changed_files.len()
        );

        Ok(changed_files)
    }
}

/// Path of a status entry relative to the repository root.
///
/// Staged renames are keyed by their new name, which is the file that exists
/// in the worktree.
fn entry_path(entry: &StatusEntry<'_>) -> Option<PathBuf> {
    if entry.status().contains(git2::Status::INDEX_RENAMED) {
        if let Some(path) = entry
            .head_to_index()
            .and_then(|delta| delta.new_file().path())
        {
            return Some(path.to_path_buf());
        }
    }

    path_from_bytes(entry.path_bytes())
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> Option<PathBuf> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    Some(PathBuf::from(OsStr::from_bytes(bytes)))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> Option<PathBuf> {
    std::str::from_utf8(bytes).ok().map(PathBuf::from)
}
