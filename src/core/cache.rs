//! Bounded in-memory cache of repository status snapshots.
//!
//! Keys are repository roots, values the latest [`RepositoryStatusSnapshot`] for
//! that root. The cache never grows past its capacity: inserting a new root into
//! a full cache evicts the entry with the oldest `last_checked` inside the same
//! lock, so no reader ever sees it over capacity.
//!
//! # Public API
//! - [`StatusCache`]: Thread-safe snapshot store shared by the tracker and its readers
//! - [`DEFAULT_CACHE_CAPACITY`]: Number of repositories kept by default
//!
//! Lookups by containing path scan every cached root. That is fine while the
//! capacity stays small; a much larger capacity would want a prefix index.

use crate::core::{change_kind::ChangeKind, state::RepositoryStatusSnapshot};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Number of repositories kept by default
pub const DEFAULT_CACHE_CAPACITY: usize = 15;

#[derive(Debug)]
struct CacheEntry {
    snapshot: Arc<RepositoryStatusSnapshot>,
    // Insertion order, breaks ties between equal timestamps
    sequence: u64,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<PathBuf, CacheEntry>,
    next_sequence: u64,
}

#[derive(Debug)]
pub struct StatusCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
}

impl StatusCache {
    /// Create an empty cache holding at most `capacity` repositories.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "status cache capacity must be at least 1");
        Self {
            inner: Mutex::new(CacheInner::default()),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Latest snapshot for `root`, if one is cached
    pub fn get(&self, root: &Path) -> Option<Arc<RepositoryStatusSnapshot>> {
        self.inner
            .lock()
            .entries
            .get(root)
            .map(|entry| Arc::clone(&entry.snapshot))
    }

    /// Insert or replace the snapshot for `root`, evicting the least recently
    /// checked repository if the cache would exceed its capacity.
    pub fn put(&self, root: PathBuf, snapshot: RepositoryStatusSnapshot) {
        let mut inner = self.inner.lock();

        let sequence = inner.next_sequence;
        inner.next_sequence += 1;
        inner.entries.insert(
            root,
            CacheEntry {
                snapshot: Arc::new(snapshot),
                sequence,
            },
        );

        if inner.entries.len() > self.capacity {
            let oldest = inner
                .entries
                .iter()
                .min_by_key(|(_, entry)| (entry.snapshot.last_checked, entry.sequence))
                .map(|(root, _)| root.clone());

            if let Some(oldest) = oldest {
                log::debug!("Evicting cached status for {}", oldest.display());
                inner.entries.remove(&oldest);
            }
        }
    }

    /// Cached repository roots, in no particular order
    pub fn roots(&self) -> Vec<PathBuf> {
        self.inner.lock().entries.keys().cloned().collect()
    }

    /// The cached repository root containing `path`, without touching the filesystem.
    ///
    /// With nested repositories the innermost (longest) matching root wins.
    pub fn containing_repository(&self, path: &Path) -> Option<PathBuf> {
        let inner = self.inner.lock();
        find_containing_root(inner.entries.keys(), path).cloned()
    }

    /// Change kind of `path` according to the snapshot of its containing repository
    pub fn change_for_path(&self, path: &Path) -> Option<ChangeKind> {
        let inner = self.inner.lock();
        let root = find_containing_root(inner.entries.keys(), path)?;
        let relative = path.strip_prefix(root).ok()?;
        inner.entries.get(root)?.snapshot.change_for(relative)
    }
}

impl Default for StatusCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

// Component-wise prefix match, so "/repo" does not contain "/repository"
fn find_containing_root<'a>(
    roots: impl Iterator<Item = &'a PathBuf>,
    path: &Path,
) -> Option<&'a PathBuf> {
    roots
        .filter(|root| path.starts_with(root))
        .max_by_key(|root| root.components().count())
}
