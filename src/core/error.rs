//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`TrackerError`] which covers every recoverable failure the
//! status tracker can run into. It uses `thiserror` for ergonomic error definitions
//! and includes constructors for the variants that carry context.
//!
//! # Public API
//! - [`TrackerError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, TrackerError>`
//!
//! # Error Categories
//! - **Git operations**: Repository not found, git2 library errors
//! - **Status queries**: Cancellation, panicking query implementations
//! - **Service lifecycle**: Notifications sent after shutdown
//! - **Configuration**: Unreadable or invalid config files
//!
//! Passing a relative path to the tracker is a programming error and panics
//! instead of producing one of these variants.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-status-tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    // File operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Status query errors
    #[error("Status query was cancelled")]
    Cancelled,

    #[error("Status query for '{root}' panicked: {message}")]
    QueryPanicked { root: PathBuf, message: String },

    // Service lifecycle errors
    #[error("Status tracker has been shut down")]
    TrackerClosed,

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to load config file '{path}': {source}")]
    ConfigLoadFailed {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Convenience type alias for Results using TrackerError
pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    /// Create a query panicked error for the given repository root
    pub fn query_panicked(root: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::QueryPanicked {
            root: root.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a config load error
    pub fn config_load_failed<E>(path: impl Into<PathBuf>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigLoadFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Whether this error only means the query was asked to stop
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
