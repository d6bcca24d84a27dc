use crate::core::{
    cancel::CancellationToken,
    error::{Result, TrackerError},
    output::{format_change_line, print_info, print_section_header},
    query::{GitStatusQuery, StatusQuery},
    resolver::find_repository_root,
    state::RepositoryStatusSnapshot,
};
use colored::*;
use std::path::{Path, PathBuf};

pub fn execute_status(path: Option<PathBuf>) -> Result<()> {
    let path = absolute_path(path)?;
    let root = find_repository_root(&path).ok_or(TrackerError::NotInGitRepo)?;

    log::debug!("Querying status of {} for {}", root.display(), path.display());

    // One-shot query, nothing else can cancel it
    let changed_files = GitStatusQuery::new().query(&root, &CancellationToken::new())?;
    let snapshot = RepositoryStatusSnapshot::new(changed_files);

    print_snapshot(&root, &snapshot);
    Ok(())
}

/// Print a repository header followed by its changed files
pub fn print_snapshot(root: &Path, snapshot: &RepositoryStatusSnapshot) {
    println!(
        "\n{} {}",
        "Repository:".bright_black(),
        root.display().to_string().blue()
    );

    if snapshot.is_clean() {
        print_info("Nothing to commit, working tree clean");
        return;
    }

    let header = match snapshot.len() {
        1 => "1 changed file".to_string(),
        n => format!("{n} changed files"),
    };
    print_section_header(&header);

    for (path, kind) in snapshot.sorted_entries() {
        println!("{}", format_change_line(kind, path));
    }
    println!();
}

/// Resolve an optional user-supplied path against the current directory
pub(crate) fn absolute_path(path: Option<PathBuf>) -> Result<PathBuf> {
    let current_dir = std::env::current_dir()?;
    Ok(match path {
        Some(path) if path.is_absolute() => path,
        Some(path) => current_dir.join(path),
        None => current_dir,
    })
}
