//! Repository status snapshots.
//!
//! A snapshot is the result of one successful status query: every changed file
//! in a repository, keyed by its path relative to the repository root, plus the
//! time the query completed. Snapshots are immutable once built; a newer query
//! replaces the whole snapshot instead of patching it.
//!
//! # Public API
//! - [`ChangedFiles`]: Mapping from relative path to [`ChangeKind`]
//! - [`RepositoryStatusSnapshot`]: Changed files with their completion timestamp

use crate::core::change_kind::ChangeKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Changed files keyed by path relative to the repository root.
pub type ChangedFiles = HashMap<PathBuf, ChangeKind>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryStatusSnapshot {
    pub changed_files: ChangedFiles,
    pub last_checked: SystemTime,
}

impl RepositoryStatusSnapshot {
    pub fn new(changed_files: ChangedFiles) -> Self {
        Self::with_timestamp(changed_files, SystemTime::now())
    }

    pub fn with_timestamp(changed_files: ChangedFiles, last_checked: SystemTime) -> Self {
        Self {
            changed_files,
            last_checked,
        }
    }

    /// Change kind for a path relative to the repository root
    pub fn change_for(&self, relative_path: &Path) -> Option<ChangeKind> {
        self.changed_files.get(relative_path).copied()
    }

    pub fn is_clean(&self) -> bool {
        self.changed_files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changed_files.len()
    }

    /// Entries ordered for display: by change priority, then by path
    pub fn sorted_entries(&self) -> Vec<(&Path, ChangeKind)> {
        let mut entries: Vec<(&Path, ChangeKind)> = self
            .changed_files
            .iter()
            .map(|(path, kind)| (path.as_path(), *kind))
            .collect();

        entries.sort_by(|a, b| {
            a.1.sort_priority()
                .cmp(&b.1.sort_priority())
                .then_with(|| a.0.cmp(b.0))
        });

        entries
    }
}
