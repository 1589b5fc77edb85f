//! Timer scheduling and rate-limiting module
//!
//! Every delayed action in the crate goes through a [`Scheduler`]: debounce
//! delays, throttle lock windows, notification auto-dismiss and exit
//! transitions, and the simulated subscription latency.
//!
//! # Overview
//!
//! - `Scheduler`: `schedule(delay, task) -> TimerId`, `cancel(TimerId)`, `now()`
//! - `SimulatedScheduler`: virtual clock advanced explicitly, for tests and dry runs
//! - `RealtimeScheduler`: wall clock, runs due tasks on the calling thread
//! - `Debouncer` / `Throttler`: callback wrappers owning at most one timer each
//!
//! # Ordering
//!
//! Tasks run in deadline order. Tasks sharing a deadline run in the order they
//! were scheduled. No scheduler lock is held while a task runs, so tasks may
//! schedule or cancel other tasks.

pub mod rate_limit;
pub mod scheduler;

pub use rate_limit::{Debouncer, Throttler, millis_or_zero};
pub use scheduler::{
    RealtimeScheduler, Scheduler, SharedScheduler, SimulatedScheduler, Task, TimerId,
};
