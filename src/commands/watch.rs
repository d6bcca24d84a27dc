//! Drives a [`StatusTracker`] from stdin.
//!
//! Each line on stdin is a visited path, as a file browser would report them.
//! A separate UI thread prints the refreshed status whenever the tracker asks
//! for a redraw.

use crate::commands::status::{absolute_path, print_snapshot};
use crate::core::{
    config::TrackerConfig,
    error::Result,
    query::GitStatusQuery,
    tracker::StatusTracker,
};
use crossbeam_channel::unbounded;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

pub fn execute_watch() -> Result<()> {
    let config = TrackerConfig::load_or_default()?;

    let (redraw_tx, redraw_rx) = unbounded::<PathBuf>();
    let tracker = StatusTracker::new(
        &config,
        Arc::new(GitStatusQuery::new()),
        Arc::new(redraw_tx),
    )?;

    let cache = tracker.cache();
    let ui = thread::Builder::new()
        .name("git-status-ui".to_string())
        .spawn(move || {
            for root in redraw_rx {
                if let Some(snapshot) = cache.get(&root) {
                    print_snapshot(&root, &snapshot);
                }
            }
        })?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let path = absolute_path(Some(PathBuf::from(line)))?;
        log::debug!("Visited {}", path.display());
        tracker.notify_path_visited(path)?;
    }

    // Lets the last visited repository's query complete, then drops the redraw
    // sender, which ends the UI loop
    log::debug!("Input closed, waiting for the last status query");
    tracker.finish();
    if ui.join().is_err() {
        log::warn!("UI thread terminated abnormally");
    }

    Ok(())
}
