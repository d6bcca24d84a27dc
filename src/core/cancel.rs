//! Cooperative cancellation for status queries.
//!
//! Cancelling only raises a flag. The query owning the token has to notice it and
//! return; whoever cancelled it waits for the worker thread to exit before doing
//! anything that assumes the query has stopped.

use crate::core::error::{Result, TrackerError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How many entries a long-running loop may process between cancellation checks.
pub const CANCEL_CHECK_INTERVAL: usize = 256;

/// A shared flag asking a running status query to stop.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Returns `Err(TrackerError::Cancelled)` once cancellation was requested,
    /// for early returns with `?`.
    #[inline]
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(TrackerError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Sparse variant of [`check`](Self::check) for tight loops; only looks at
    /// the flag every [`CANCEL_CHECK_INTERVAL`] iterations.
    #[inline]
    pub fn check_sparse(&self, counter: usize) -> Result<()> {
        if counter % CANCEL_CHECK_INTERVAL == 0 {
            self.check()
        } else {
            Ok(())
        }
    }
}
