//! Scheduler implementations
//!
//! Both schedulers share a [`TimerQueue`] ordered by `(deadline, sequence)`.
//! Cancelled entries are dropped lazily when they reach the head of the heap.

use parking_lot::Mutex;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// A unit of deferred work
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Shared handle to a scheduler, injected into every timed component
pub type SharedScheduler = Arc<dyn Scheduler>;

/// Handle to a scheduled task, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Capability to run tasks after a delay
pub trait Scheduler: Send + Sync {
    /// Current time on this scheduler's clock, measured from its creation
    fn now(&self) -> Duration;

    /// Schedule `task` to run `delay` from now
    fn schedule(&self, delay: Duration, task: Task) -> TimerId;

    /// Cancel a pending task
    ///
    /// Returns `false` if the task already ran or was already cancelled.
    fn cancel(&self, id: TimerId) -> bool;
}

/// Deadline-ordered queue of pending tasks
#[derive(Default)]
struct TimerQueue {
    next_seq: u64,
    deadlines: BinaryHeap<Reverse<(Duration, u64)>>,
    tasks: HashMap<u64, Task>,
}

impl TimerQueue {
    fn push(&mut self, due: Duration, task: Task) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.deadlines.push(Reverse((due, seq)));
        self.tasks.insert(seq, task);
        TimerId(seq)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        self.tasks.remove(&id.0).is_some()
    }

    /// Deadline of the earliest live task, discarding cancelled heads
    fn next_deadline(&mut self) -> Option<Duration> {
        while let Some(&Reverse((due, seq))) = self.deadlines.peek() {
            if self.tasks.contains_key(&seq) {
                return Some(due);
            }
            self.deadlines.pop();
        }
        None
    }

    /// Pop the earliest live task if its deadline is at or before `limit`
    fn pop_due(&mut self, limit: Duration) -> Option<(Duration, Task)> {
        let due = self.next_deadline()?;
        if due > limit {
            return None;
        }
        let Reverse((due, seq)) = self.deadlines.pop()?;
        let task = self.tasks.remove(&seq)?;
        Some((due, task))
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}

struct SimulatedState {
    now: Duration,
    queue: TimerQueue,
}

/// Scheduler driven by a virtual clock
///
/// Time only moves when [`advance`](Self::advance), [`advance_to`](Self::advance_to)
/// or [`run_until_idle`](Self::run_until_idle) is called. Each task observes
/// `now()` equal to its own deadline while it runs.
pub struct SimulatedScheduler {
    state: Mutex<SimulatedState>,
}

impl SimulatedScheduler {
    /// Create a scheduler with its clock at zero
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SimulatedState {
                now: Duration::ZERO,
                queue: TimerQueue::default(),
            }),
        }
    }

    /// Create a scheduler already wrapped in an `Arc`
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Move the clock forward by `by`, running every task that falls due
    ///
    /// Returns the number of tasks that ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now().saturating_add(by);
        self.advance_to(target)
    }

    /// Move the clock to the absolute time `target`, running due tasks
    ///
    /// A `target` in the past runs tasks that are already due without moving
    /// the clock backwards.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut ran = 0;
        loop {
            let task = {
                let mut state = self.state.lock();
                match state.queue.pop_due(target) {
                    Some((due, task)) => {
                        state.now = state.now.max(due);
                        task
                    }
                    None => {
                        state.now = state.now.max(target);
                        break;
                    }
                }
            };
            task();
            ran += 1;
        }
        trace!("Simulated clock at {:?}, ran {} task(s)", self.now(), ran);
        ran
    }

    /// Run tasks until the queue is empty, jumping the clock between deadlines
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let task = {
                let mut state = self.state.lock();
                match state.queue.pop_due(Duration::MAX) {
                    Some((due, task)) => {
                        state.now = state.now.max(due);
                        task
                    }
                    None => break,
                }
            };
            task();
            ran += 1;
        }
        ran
    }

    /// Number of tasks still waiting to run
    pub fn pending_timers(&self) -> usize {
        self.state.lock().queue.len()
    }
}

impl Default for SimulatedScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SimulatedScheduler {
    fn now(&self) -> Duration {
        self.state.lock().now
    }

    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let mut state = self.state.lock();
        let due = state.now.saturating_add(delay);
        let id = state.queue.push(due, task);
        trace!("Scheduled {:?} at {:?}", id, due);
        id
    }

    fn cancel(&self, id: TimerId) -> bool {
        self.state.lock().queue.cancel(id)
    }
}

/// Scheduler driven by the wall clock
///
/// Tasks only run inside [`run_until_idle`](Self::run_until_idle) or
/// [`run_for`](Self::run_for), on the calling thread, which sleeps between
/// deadlines. This keeps execution single-threaded and cooperative.
pub struct RealtimeScheduler {
    origin: Instant,
    queue: Mutex<TimerQueue>,
}

impl RealtimeScheduler {
    /// Create a scheduler whose clock starts now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            queue: Mutex::new(TimerQueue::default()),
        }
    }

    /// Create a scheduler already wrapped in an `Arc`
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Run tasks as they fall due until none remain
    pub fn run_until_idle(&self) -> usize {
        self.run_until(None)
    }

    /// Run tasks as they fall due for at most `window`
    pub fn run_for(&self, window: Duration) -> usize {
        let stop_at = self.now().saturating_add(window);
        self.run_until(Some(stop_at))
    }

    fn run_until(&self, stop_at: Option<Duration>) -> usize {
        let mut ran = 0;
        loop {
            let now = self.now();
            if stop_at.is_some_and(|stop| now >= stop) {
                break;
            }

            let next = {
                let mut queue = self.queue.lock();
                match queue.next_deadline() {
                    None => break,
                    Some(due) if due <= now => queue.pop_due(now).map(|(_, task)| task),
                    Some(due) => {
                        drop(queue);
                        let wake = stop_at.map_or(due, |stop| due.min(stop));
                        std::thread::sleep(wake.saturating_sub(now));
                        continue;
                    }
                }
            };

            if let Some(task) = next {
                task();
                ran += 1;
            }
        }
        debug!("Realtime scheduler ran {} task(s)", ran);
        ran
    }

    /// Number of tasks still waiting to run
    pub fn pending_timers(&self) -> usize {
        self.queue.lock().len()
    }
}

impl Default for RealtimeScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for RealtimeScheduler {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let due = self.now().saturating_add(delay);
        self.queue.lock().push(due, task)
    }

    fn cancel(&self, id: TimerId) -> bool {
        self.queue.lock().cancel(id)
    }
}
