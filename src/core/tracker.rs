//! Background repository status tracking.
//!
//! [`StatusTracker`] is the service object a file browser talks to. The browser
//! reports every directory the user visits with
//! [`notify_path_visited`](StatusTracker::notify_path_visited); a dispatcher
//! thread resolves the enclosing repository, runs a status query for it on a
//! worker thread, stores the result in a shared [`StatusCache`] and asks the UI
//! to redraw.
//!
//! # Threads
//! - **Producers**: any thread calling `notify_path_visited`. They block while the
//!   bounded intake queue is full.
//! - **Dispatcher**: the only consumer of the intake queue and the only writer of
//!   the cache. It also owns the [`ActiveComputation`].
//! - **Worker**: at most one at a time, running the [`StatusQuery`].
//! - **UI**: receives redraw requests through a [`RedrawNotifier`].
//!
//! Moving to another repository cancels the running query and waits for its
//! worker to exit before the next one starts, so two queries never overlap.
//!
//! [`shutdown`](StatusTracker::shutdown) cancels the query still running when
//! the tracker stops, while [`finish`](StatusTracker::finish) lets it complete
//! and stores its result first.

use crate::core::{
    cache::StatusCache,
    change_kind::ChangeKind,
    config::TrackerConfig,
    error::{Result, TrackerError},
    query::StatusQuery,
    resolver::find_repository_root,
    slot::{ActiveComputation, Completion},
    state::RepositoryStatusSnapshot,
};
use crossbeam_channel::{bounded, select, unbounded, Receiver, Sender, TrySendError};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Receives redraw requests after a repository's cached status changed.
///
/// Called from the dispatcher thread; implementations should only hand the
/// request over to whatever thread owns the screen.
pub trait RedrawNotifier: Send + Sync {
    fn request_redraw(&self, root: &Path);
}

/// Sends the updated repository root to the UI's event loop.
///
/// Never blocks the dispatcher. On a full bounded channel the request for this
/// root is dropped, even though the pending messages may name other roots, so
/// a UI that must see every updated root should use an unbounded channel. A
/// disconnected UI is ignored.
impl RedrawNotifier for Sender<PathBuf> {
    fn request_redraw(&self, root: &Path) {
        match self.try_send(root.to_path_buf()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                log::debug!("Redraw channel full, dropping redraw for {}", root.display())
            }
            Err(TrySendError::Disconnected(_)) => {
                log::trace!("UI is gone, dropping redraw for {}", root.display())
            }
        }
    }
}

pub struct StatusTracker {
    intake: Option<Sender<PathBuf>>,
    cache: Arc<StatusCache>,
    dispatcher: Option<JoinHandle<()>>,
    complete_on_close: Arc<AtomicBool>,
}

impl StatusTracker {
    /// Start the tracker's dispatcher thread.
    pub fn new(
        config: &TrackerConfig,
        query: Arc<dyn StatusQuery>,
        notifier: Arc<dyn RedrawNotifier>,
    ) -> Result<Self> {
        config.validate()?;

        let cache = Arc::new(StatusCache::new(config.cache_capacity));
        let (intake_tx, intake_rx) = bounded(config.queue_capacity);
        let (completion_tx, completion_rx) = unbounded();
        let complete_on_close = Arc::new(AtomicBool::new(false));

        let dispatcher = Dispatcher {
            cache: Arc::clone(&cache),
            query,
            notifier,
            completion_tx,
            completion_rx,
            active: None,
            next_generation: 1,
            complete_on_close: Arc::clone(&complete_on_close),
        };

        let handle = thread::Builder::new()
            .name("git-status-dispatch".to_string())
            .spawn(move || dispatcher.run(intake_rx))?;

        log::debug!(
            "Status tracker started (cache capacity {}, queue capacity {})",
            config.cache_capacity,
            config.queue_capacity
        );

        Ok(Self {
            intake: Some(intake_tx),
            cache,
            dispatcher: Some(handle),
            complete_on_close,
        })
    }

    /// Report that the user is now looking at `path`.
    ///
    /// Blocks while the intake queue is full.
    ///
    /// # Panics
    /// Panics if `path` is not absolute.
    pub fn notify_path_visited(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        assert!(
            path.is_absolute(),
            "status tracker received a non-absolute path: \"{}\"",
            path.display()
        );

        let intake = self.intake.as_ref().ok_or(TrackerError::TrackerClosed)?;
        intake.send(path).map_err(|_| TrackerError::TrackerClosed)
    }

    /// Cached repository root containing `path`, without starting a query
    pub fn containing_tracked_repository(&self, path: &Path) -> Option<PathBuf> {
        self.cache.containing_repository(path)
    }

    /// Latest cached snapshot for a repository root
    pub fn snapshot(&self, root: &Path) -> Option<Arc<RepositoryStatusSnapshot>> {
        self.cache.get(root)
    }

    /// Cached change kind of an absolute path, if its repository is tracked
    pub fn change_for_path(&self, path: &Path) -> Option<ChangeKind> {
        self.cache.change_for_path(path)
    }

    /// Shared handle to the snapshot cache, for readers on other threads
    pub fn cache(&self) -> Arc<StatusCache> {
        Arc::clone(&self.cache)
    }

    /// Stop accepting notifications, cancel any running query and wait for the
    /// dispatcher to exit.
    pub fn shutdown(mut self) {
        self.close();
    }

    /// Stop accepting notifications, but let the dispatcher handle the queued
    /// ones and wait for the last query to complete before it exits.
    ///
    /// The final result is stored and redrawn like any other. A query that
    /// never returns blocks this call.
    pub fn finish(mut self) {
        self.complete_on_close.store(true, Ordering::SeqCst);
        self.close();
    }

    fn close(&mut self) {
        // Dropping the only sender disconnects the intake queue
        self.intake.take();

        if let Some(handle) = self.dispatcher.take() {
            if handle.join().is_err() {
                log::warn!("Status dispatcher terminated abnormally");
            }
        }
    }
}

impl Drop for StatusTracker {
    fn drop(&mut self) {
        self.close();
    }
}

struct Dispatcher {
    cache: Arc<StatusCache>,
    query: Arc<dyn StatusQuery>,
    notifier: Arc<dyn RedrawNotifier>,
    completion_tx: Sender<Completion>,
    completion_rx: Receiver<Completion>,
    active: Option<ActiveComputation>,
    next_generation: u64,
    complete_on_close: Arc<AtomicBool>,
}

impl Dispatcher {
    fn run(mut self, intake: Receiver<PathBuf>) {
        let completions = self.completion_rx.clone();

        loop {
            select! {
                recv(intake) -> visit => match visit {
                    Ok(path) => self.handle_visit(path),
                    Err(_) => break,
                },
                recv(completions) -> completion => {
                    if let Ok(completion) = completion {
                        self.handle_completion(completion);
                    }
                }
            }
        }

        if self.complete_on_close.load(Ordering::SeqCst) {
            self.await_active();
        }
        if let Some(active) = self.active.take() {
            active.cancel_and_wait();
        }
        log::debug!("Status dispatcher stopped");
    }

    /// Handle completions until the active query has reported.
    fn await_active(&mut self) {
        while self.active.is_some() {
            match self.completion_rx.recv() {
                Ok(completion) => self.handle_completion(completion),
                Err(_) => break,
            }
        }
    }

    fn handle_visit(&mut self, path: PathBuf) {
        assert!(
            path.is_absolute(),
            "status dispatcher received a non-absolute path: \"{}\"",
            path.display()
        );

        // Settle finished queries first so their repositories may be queried again
        self.drain_completions();

        let Some(root) = find_repository_root(&path) else {
            log::trace!("{} is not inside a git repository", path.display());
            return;
        };

        if let Some(active) = &self.active {
            if active.root() == root {
                log::trace!("Status query already running for {}", root.display());
                return;
            }
        }

        if let Some(previous) = self.active.take() {
            previous.cancel_and_wait();
            self.drain_completions();
        }

        self.start(root);
    }

    fn start(&mut self, root: PathBuf) {
        let generation = self.next_generation;
        self.next_generation += 1;

        match ActiveComputation::spawn(
            root.clone(),
            generation,
            Arc::clone(&self.query),
            self.completion_tx.clone(),
        ) {
            Ok(active) => self.active = Some(active),
            Err(e) => log::warn!("Failed to start status query for {}: {e}", root.display()),
        }
    }

    fn drain_completions(&mut self) {
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.handle_completion(completion);
        }
    }

    fn handle_completion(&mut self, completion: Completion) {
        let Completion {
            root,
            generation,
            result,
        } = completion;

        match result {
            Ok(changed_files) => {
                log::debug!(
                    "Status query #{generation} for {} found {} changed files",
                    root.display(),
                    changed_files.len()
                );
                self.cache
                    .put(root.clone(), RepositoryStatusSnapshot::new(changed_files));
                self.notifier.request_redraw(&root);
            }
            Err(e) if e.is_cancelled() => {
                log::debug!("Status query #{generation} for {} cancelled", root.display())
            }
            Err(e) => log::warn!("Status query for {} failed: {e}", root.display()),
        }

        // The worker sends its completion last, so joining it here is immediate
        if self
            .active
            .as_ref()
            .is_some_and(|active| active.generation() == generation)
        {
            if let Some(active) = self.active.take() {
                active.finish();
            }
        }
    }
}
