use crate::commands::status::absolute_path;
use crate::core::{
    error::{Result, TrackerError},
    resolver::find_repository_root,
};
use std::path::PathBuf;

pub fn execute_resolve(path: Option<PathBuf>) -> Result<()> {
    let path = absolute_path(path)?;
    let root = find_repository_root(&path).ok_or(TrackerError::NotInGitRepo)?;

    println!("{}", root.display());
    Ok(())
}
