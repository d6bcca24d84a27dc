//! Git Status Tracker - background git status for interactive file browsers.
//!
//! A file browser reports each directory the user visits; the tracker finds the
//! enclosing git repository, computes its changed files on a worker thread,
//! caches the result and asks the browser to redraw. Moving to another
//! repository cancels the running query, and at most one query runs at a time.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The [`StatusTracker`] service and its [`RedrawNotifier`] hook
//! - The [`StatusQuery`] capability and its git2 implementation
//! - Snapshot caching and repository discovery
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    // Repository discovery
    find_repository_root,
    // Status queries
    CancellationToken,
    // Snapshots
    ChangeKind,
    ChangedFiles,
    GitStatusQuery,
    RedrawNotifier,
    RepositoryStatusSnapshot,
    // Error handling
    Result,
    StatusCache,
    StatusQuery,
    // Background service
    StatusTracker,
    TrackerConfig,
    TrackerError,
};
