#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for `SiteFeedback` unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::analytics::{Analytics, MemoryAnalytics};
use crate::config::SiteConfig;
use crate::config::manager::HOME_ENV;
use crate::notifications::{NotificationSurface, Presenter, RenderedNotification};
use crate::timing::SimulatedScheduler;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the `SITEFEEDBACK_HOME` variable.
static HOME_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points `SITEFEEDBACK_HOME` at a temp directory for a test
/// scope and restores the original value when dropped.
///
/// The `HOME_LOCK` mutex is held for the guard's lifetime, so tests touching
/// the variable run one at a time even under the parallel test runner.
pub struct HomeGuard {
    original: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables while holding HOME_LOCK"
)]
impl HomeGuard {
    /// Create a new guard that sets `SITEFEEDBACK_HOME` to the given temp directory path.
    pub fn new(temp_dir: &TempDir) -> Self {
        let lock = HOME_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var(HOME_ENV).ok();
        // SAFETY: HOME_LOCK serializes every writer of this variable, and the
        // crate only reads it from ConfigManager::get_config_path.
        unsafe {
            std::env::set_var(HOME_ENV, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables while holding HOME_LOCK"
)]
impl Drop for HomeGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held; see HomeGuard::new.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(HOME_ENV, original);
            }
        } else {
            unsafe {
                std::env::remove_var(HOME_ENV);
            }
        }
    }
}

/// Simulated scheduler, presenter and recording analytics wired together.
pub struct Harness {
    pub scheduler: Arc<SimulatedScheduler>,
    pub presenter: Presenter,
    pub events: Arc<MemoryAnalytics>,
    pub analytics: Analytics,
    pub config: SiteConfig,
}

impl Harness {
    /// Build a harness around the default configuration.
    pub fn new() -> Self {
        let config = SiteConfig::default();
        let scheduler = SimulatedScheduler::shared();
        let presenter = Presenter::new(
            NotificationSurface::shared(),
            scheduler.clone(),
            (&config.timings).into(),
        );
        let events = Arc::new(MemoryAnalytics::new());
        let analytics = Analytics::new(events.clone());
        Self {
            scheduler,
            presenter,
            events,
            analytics,
            config,
        }
    }

    /// Snapshot of the rendered notification, if any.
    pub fn current_notification(&self) -> Option<RenderedNotification> {
        self.presenter.surface().lock().current().cloned()
    }

    /// Message of the rendered notification; panics if nothing is rendered.
    pub fn current_message(&self) -> String {
        self.current_notification()
            .unwrap()
            .notification()
            .message()
            .to_string()
    }
}
