//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for a changed-file line
pub fn has_change(description: &str, path: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("({description})")).and(predicates::str::contains(path.to_string()))
}

/// Creates a predicate that checks for the repository header
pub fn has_repository_header() -> impl Predicate<str> {
    predicates::str::contains("Repository:")
}
