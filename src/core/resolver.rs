//! Repository root discovery.
//!
//! Walks from a path up through its ancestors looking for a `.git` directory.
//! Unlike `git2::Repository::discover` this never reads repository metadata,
//! so it stays cheap enough to run for every visited directory.

use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory marking a repository root.
pub const REPOSITORY_MARKER: &str = ".git";

/// Find the nearest ancestor of `path` (or `path` itself) containing a `.git` directory.
///
/// The marker is checked without following symlinks, and a `.git` *file* (as used by
/// worktrees and submodules) does not count. Returns `None` once the filesystem root
/// is reached without a match; the root itself is never reported as a repository.
pub fn find_repository_root(path: &Path) -> Option<PathBuf> {
    let mut candidate = path;

    loop {
        let parent = candidate.parent()?;

        if is_repository_root(candidate) {
            return Some(candidate.to_path_buf());
        }

        candidate = parent;
    }
}

fn is_repository_root(candidate: &Path) -> bool {
    fs::symlink_metadata(candidate.join(REPOSITORY_MARKER))
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}
