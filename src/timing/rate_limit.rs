//! Debounce and throttle wrappers
//!
//! Each wrapper owns at most one pending timer. Arguments are a single value
//! `A` forwarded verbatim: use `()` for no arguments and a tuple for several.
//!
//! A zero wait or limit degenerates to "always execute immediately":
//! the debouncer runs its callback synchronously and the throttler never locks.

use super::scheduler::{SharedScheduler, TimerId};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Convert a millisecond setting to a `Duration`, saturating negatives to zero
pub fn millis_or_zero(ms: i64) -> Duration {
    u64::try_from(ms).map_or(Duration::ZERO, Duration::from_millis)
}

/// Coalesces rapid calls into one call after `wait` of quiescence
///
/// Each call cancels the pending one and schedules a new one with the latest
/// arguments. Clones share the same pending timer.
pub struct Debouncer<A> {
    scheduler: SharedScheduler,
    wait: Duration,
    callback: Callback<A>,
    pending: Arc<Mutex<Option<TimerId>>>,
}

impl<A: Send + 'static> Debouncer<A> {
    /// Wrap `callback` so it only runs after `wait` without further calls
    pub fn new<F>(scheduler: SharedScheduler, wait: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            scheduler,
            wait,
            callback: Arc::new(callback),
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Record a call, replacing any pending one
    pub fn call(&self, args: A) {
        let mut pending = self.pending.lock();
        if let Some(id) = pending.take() {
            self.scheduler.cancel(id);
            trace!("Debounce superseded {:?}", id);
        }

        if self.wait.is_zero() {
            drop(pending);
            (self.callback)(args);
            return;
        }

        let callback = Arc::clone(&self.callback);
        let slot = Arc::clone(&self.pending);
        let id = self.scheduler.schedule(
            self.wait,
            Box::new(move || {
                slot.lock().take();
                callback(args);
            }),
        );
        *pending = Some(id);
    }

    /// Drop the pending call without running it
    ///
    /// Returns `true` if a call was pending.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(id) => self.scheduler.cancel(id),
            None => false,
        }
    }

    /// Whether a call is waiting to run
    pub fn is_pending(&self) -> bool {
        self.pending.lock().is_some()
    }
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Arc::clone(&self.scheduler),
            wait: self.wait,
            callback: Arc::clone(&self.callback),
            pending: Arc::clone(&self.pending),
        }
    }
}

/// Runs the first call immediately, then drops calls for `limit`
///
/// Dropped calls are neither queued nor coalesced. Clones share the same lock.
pub struct Throttler<A> {
    scheduler: SharedScheduler,
    limit: Duration,
    callback: Callback<A>,
    unlock_timer: Arc<Mutex<Option<TimerId>>>,
}

impl<A> Throttler<A> {
    /// Wrap `callback` so it runs at most once per `limit`
    pub fn new<F>(scheduler: SharedScheduler, limit: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            scheduler,
            limit,
            callback: Arc::new(callback),
            unlock_timer: Arc::new(Mutex::new(None)),
        }
    }

    /// Run the callback unless the wrapper is locked
    ///
    /// Returns `true` if the callback ran.
    pub fn call(&self, args: A) -> bool {
        {
            let mut unlock_timer = self.unlock_timer.lock();
            if unlock_timer.is_some() {
                trace!("Throttle dropped call");
                return false;
            }
            // Lock before running so re-entrant calls from the callback are dropped
            if !self.limit.is_zero() {
                let slot = Arc::clone(&self.unlock_timer);
                let id = self.scheduler.schedule(
                    self.limit,
                    Box::new(move || {
                        slot.lock().take();
                    }),
                );
                *unlock_timer = Some(id);
            }
        }

        (self.callback)(args);
        true
    }

    /// Whether calls are currently being dropped
    pub fn is_locked(&self) -> bool {
        self.unlock_timer.lock().is_some()
    }
}

impl<A> Clone for Throttler<A> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Arc::clone(&self.scheduler),
            limit: self.limit,
            callback: Arc::clone(&self.callback),
            unlock_timer: Arc::clone(&self.unlock_timer),
        }
    }
}
