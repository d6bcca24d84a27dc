//! Directory layouts for tests that only need repository markers
//!
//! The resolver only looks for `.git` directories, so dispatcher tests can use
//! empty marker directories instead of real repositories.

#![allow(dead_code)]

use git_status_tracker::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding any number of marker-only repositories
pub struct Workspace {
    pub temp_dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Creates `<workspace>/<name>/.git/` and a `src/` subdirectory, returning the root
    pub fn add_repo(&self, name: &str) -> Result<PathBuf> {
        let root = self.temp_dir.path().join(name);
        fs::create_dir_all(root.join(".git"))?;
        fs::create_dir_all(root.join("src"))?;
        Ok(root)
    }

    /// Creates a plain directory with no repository above it (inside the workspace)
    pub fn add_plain_dir(&self, name: &str) -> Result<PathBuf> {
        let dir = self.temp_dir.path().join(name);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
