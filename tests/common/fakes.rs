//! Scripted status queries for exercising the tracker's concurrency
//!
//! [`ScriptedQuery`] decides per repository root how a query behaves and
//! reports every start and exit on an event channel, while counting how many
//! queries run at the same time.

#![allow(dead_code)]

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use git_status_tracker::core::{
    cancel::CancellationToken,
    error::{Result, TrackerError},
    query::StatusQuery,
    state::ChangedFiles,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

pub const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    Started(PathBuf),
    /// The query noticed its cancellation token (it may still keep running)
    SawCancel(PathBuf),
    Cancelled(PathBuf),
    Succeeded(PathBuf),
    Failed(PathBuf),
}

#[derive(Clone)]
pub enum Behavior {
    /// Return these files right away
    Succeed(ChangedFiles),
    /// Return an error right away
    Fail,
    /// Poll the token until cancelled
    UntilCancelled,
    /// Ignore cancellation until the gate sends or disconnects
    Gated(Receiver<()>),
}

pub struct ScriptedQuery {
    behaviors: Mutex<HashMap<PathBuf, Behavior>>,
    events: Sender<QueryEvent>,
    running: AtomicUsize,
    max_running: AtomicUsize,
}

impl ScriptedQuery {
    /// New query plus the receiving end of its event stream
    pub fn new() -> (Self, Receiver<QueryEvent>) {
        let (events, events_rx) = unbounded();
        let query = Self {
            behaviors: Mutex::new(HashMap::new()),
            events,
            running: AtomicUsize::new(0),
            max_running: AtomicUsize::new(0),
        };
        (query, events_rx)
    }

    /// Set the behavior for a root; roots without one succeed with no changes
    pub fn script(&self, root: &Path, behavior: Behavior) {
        self.behaviors.lock().insert(root.to_path_buf(), behavior);
    }

    /// Highest number of queries observed running at once
    pub fn max_running(&self) -> usize {
        self.max_running.load(Ordering::SeqCst)
    }

    fn behavior_for(&self, root: &Path) -> Behavior {
        self.behaviors
            .lock()
            .get(root)
            .cloned()
            .unwrap_or_else(|| Behavior::Succeed(ChangedFiles::new()))
    }

    fn emit(&self, event: QueryEvent) {
        let _ = self.events.send(event);
    }

    fn run(&self, root: &Path, cancel: &CancellationToken) -> Result<ChangedFiles> {
        match self.behavior_for(root) {
            Behavior::Succeed(files) => Ok(files),
            Behavior::Fail => Err(TrackerError::NotInGitRepo),
            Behavior::UntilCancelled => loop {
                cancel.check()?;
                thread::sleep(Duration::from_millis(1));
            },
            Behavior::Gated(gate) => {
                let mut reported = false;
                loop {
                    if !reported && cancel.is_cancelled() {
                        self.emit(QueryEvent::SawCancel(root.to_path_buf()));
                        reported = true;
                    }
                    match gate.recv_timeout(Duration::from_millis(1)) {
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                        Err(RecvTimeoutError::Timeout) => continue,
                    }
                }
                cancel.check()?;
                Ok(ChangedFiles::new())
            }
        }
    }
}

impl StatusQuery for ScriptedQuery {
    fn query(&self, root: &Path, cancel: &CancellationToken) -> Result<ChangedFiles> {
        let now_running = self.running.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_running.fetch_max(now_running, Ordering::SeqCst);
        self.emit(QueryEvent::Started(root.to_path_buf()));

        let result = self.run(root, cancel);

        self.running.fetch_sub(1, Ordering::SeqCst);
        let root = root.to_path_buf();
        self.emit(match &result {
            Ok(_) => QueryEvent::Succeeded(root),
            Err(TrackerError::Cancelled) => QueryEvent::Cancelled(root),
            Err(_) => QueryEvent::Failed(root),
        });

        result
    }
}

/// Receive the next event or panic after [`EVENT_TIMEOUT`]
pub fn next_event(events: &Receiver<QueryEvent>) -> QueryEvent {
    events
        .recv_timeout(EVENT_TIMEOUT)
        .expect("timed out waiting for a query event")
}

/// Receive the next redraw request or panic after [`EVENT_TIMEOUT`]
pub fn next_redraw(redraws: &Receiver<PathBuf>) -> PathBuf {
    redraws
        .recv_timeout(EVENT_TIMEOUT)
        .expect("timed out waiting for a redraw")
}
