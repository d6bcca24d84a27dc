//! Core functionality for the git-status-tracker.
//!
//! This module provides the building blocks of the tracker: repository discovery,
//! the snapshot cache, cooperative cancellation, the status-query capability and
//! the background service tying them together.

pub mod cache;
pub mod cancel;
pub mod change_kind;
pub mod config;
pub mod dirs;
pub mod error;
pub mod output;
pub mod query;
pub mod resolver;
pub mod slot;
pub mod state;
pub mod tracker;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, TrackerError};

// === Change kinds and snapshots ===
// Per-file change tags and the immutable status snapshot built from them
pub use change_kind::ChangeKind;
pub use state::{ChangedFiles, RepositoryStatusSnapshot};

// === Repository discovery ===
// Walks ancestors of a path looking for a `.git` directory
pub use resolver::find_repository_root;

// === Caching ===
// Bounded, recency-evicting snapshot store
pub use cache::{StatusCache, DEFAULT_CACHE_CAPACITY};

// === Status queries ===
// The pluggable status computation and its cancellation handle
pub use cancel::CancellationToken;
pub use query::{GitStatusQuery, StatusQuery};

// === Background service ===
// Intake queue, dispatcher and redraw notifications
pub use config::{TrackerConfig, DEFAULT_QUEUE_CAPACITY};
pub use tracker::{RedrawNotifier, StatusTracker};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{format_change_line, print_error, print_info, print_section_header};
