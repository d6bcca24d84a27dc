//! The single in-flight status query.
//!
//! An [`ActiveComputation`] owns the worker thread running one [`StatusQuery`]
//! together with the token that can stop it. The worker reports back exactly once
//! through a [`Completion`] message; it never writes to the cache itself.

use crate::core::{
    cancel::CancellationToken,
    error::{Result, TrackerError},
    query::StatusQuery,
    state::ChangedFiles,
};
use crossbeam_channel::Sender;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Outcome of one status query, sent from the worker to the dispatcher.
#[derive(Debug)]
pub struct Completion {
    pub root: PathBuf,
    pub generation: u64,
    pub result: Result<ChangedFiles>,
}

#[derive(Debug)]
pub struct ActiveComputation {
    root: PathBuf,
    generation: u64,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl ActiveComputation {
    /// Start `query` for `root` on a new worker thread.
    pub fn spawn(
        root: PathBuf,
        generation: u64,
        query: Arc<dyn StatusQuery>,
        completions: Sender<Completion>,
    ) -> Result<Self> {
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();
        let worker_root = root.clone();

        let handle = thread::Builder::new()
            .name("git-status-worker".to_string())
            .spawn(move || {
                log::debug!(
                    "Status query #{generation} started for {}",
                    worker_root.display()
                );

                let result = panic::catch_unwind(AssertUnwindSafe(|| {
                    query.query(&worker_root, &worker_cancel)
                }))
                .unwrap_or_else(|panic_info| {
                    let message = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "status query panicked".to_string()
                    };
                    Err(TrackerError::query_panicked(&worker_root, message))
                });

                // The dispatcher outlives every worker, so a failed send only
                // happens while the whole tracker is being torn down.
                let _ = completions.send(Completion {
                    root: worker_root,
                    generation,
                    result,
                });
            })?;

        Ok(Self {
            root,
            generation,
            cancel,
            handle,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ask the query to stop and block until its worker thread has exited.
    pub fn cancel_and_wait(self) {
        log::debug!(
            "Cancelling status query #{} for {}",
            self.generation,
            self.root.display()
        );
        self.cancel.cancel();
        self.join();
    }

    /// Wait for a worker that already reported its completion.
    pub fn finish(self) {
        self.join();
    }

    fn join(self) {
        if self.handle.join().is_err() {
            log::warn!(
                "Status worker for {} terminated abnormally",
                self.root.display()
            );
        }
    }
}
