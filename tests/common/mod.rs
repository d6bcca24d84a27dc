//! Consolidated test utilities for git-status-tracker
//!
//! Real git repositories for the git2-backed query and CLI tests, bare `.git`
//! directories plus scripted queries for the concurrency tests.

pub mod assertions;
pub mod fakes;
pub mod fixtures;
pub mod repository;
