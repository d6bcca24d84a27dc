//! Type-safe change kind enumeration.
//!
//! This module defines [`ChangeKind`], the per-file tag a status query attaches to
//! every path that differs from its committed state. The tracker passes these
//! through unmodified; only the git2-backed query and the display code look inside.
//!
//! # Public API
//! - [`ChangeKind`]: How a tracked file differs from `HEAD`
//!
//! # Key Features
//! - **git2 integration**: Collapses git2::Status flags into a single kind per path
//! - **Display formatting**: Short codes matching `git status --short`
//! - **Sorting logic**: Priority ordering for status display

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a file differs from its committed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Modified file (M)
    Modified,
    /// Added/new file in index (A)
    Added,
    /// Deleted file (D)
    Deleted,
    /// Renamed file (R)
    Renamed,
    /// Type changed (T)
    TypeChanged,
    /// Untracked file (??)
    Untracked,
    /// Unmerged/conflicted file (UU)
    Unmerged,
}

impl ChangeKind {
    /// Convert git2::Status flags into a single change kind.
    ///
    /// Conflicts win, then staged changes, then worktree changes. Returns `None`
    /// for clean and ignored entries.
    pub fn from_git2(flags: git2::Status) -> Option<ChangeKind> {
        if flags.contains(git2::Status::CONFLICTED) {
            return Some(ChangeKind::Unmerged);
        }

        if flags.contains(git2::Status::INDEX_NEW) {
            return Some(ChangeKind::Added);
        }
        if flags.contains(git2::Status::INDEX_RENAMED) {
            return Some(ChangeKind::Renamed);
        }
        if flags.contains(git2::Status::INDEX_DELETED) {
            return Some(ChangeKind::Deleted);
        }
        if flags.contains(git2::Status::INDEX_TYPECHANGE) {
            return Some(ChangeKind::TypeChanged);
        }
        if flags.contains(git2::Status::INDEX_MODIFIED) {
            return Some(ChangeKind::Modified);
        }

        if flags.contains(git2::Status::WT_NEW) {
            return Some(ChangeKind::Untracked);
        }
        if flags.contains(git2::Status::WT_DELETED) {
            return Some(ChangeKind::Deleted);
        }
        if flags.contains(git2::Status::WT_TYPECHANGE) {
            return Some(ChangeKind::TypeChanged);
        }
        if flags.contains(git2::Status::WT_MODIFIED) {
            return Some(ChangeKind::Modified);
        }

        None
    }

    /// Short code as printed by `git status --short`
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Modified => "M",
            ChangeKind::Added => "A",
            ChangeKind::Deleted => "D",
            ChangeKind::Renamed => "R",
            ChangeKind::TypeChanged => "T",
            ChangeKind::Untracked => "??",
            ChangeKind::Unmerged => "UU",
        }
    }

    /// Get sort priority for status ordering
    pub fn sort_priority(&self) -> u8 {
        match self {
            // Conflicts need attention first
            ChangeKind::Unmerged => 0,
            ChangeKind::Added => 1,
            ChangeKind::Modified => 2,
            ChangeKind::Deleted => 3,
            ChangeKind::Renamed => 4,
            ChangeKind::TypeChanged => 5,
            ChangeKind::Untracked => 6,
        }
    }

    /// Get human-readable description for status
    pub fn description(&self) -> &'static str {
        match self {
            ChangeKind::Modified => "modified",
            ChangeKind::Added => "new",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Renamed => "renamed",
            ChangeKind::TypeChanged => "type changed",
            ChangeKind::Untracked => "untracked",
            ChangeKind::Unmerged => "both modified",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
