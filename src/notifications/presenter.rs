//! Notification lifecycle management.
//!
//! The `Presenter` renders notifications into a [`NotificationSurface`] and
//! schedules their auto-dismiss and exit transitions on the injected scheduler.

use super::notification::{Notification, NotificationId, Severity};
use super::surface::{RenderedNotification, SharedSurface};
use crate::config::TimingConfig;
use crate::timing::SharedScheduler;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Durations governing a notification's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    /// Time a notification stays up before dismissing itself.
    pub auto_dismiss: Duration,
    /// Length of the exit transition preceding removal.
    pub exit_transition: Duration,
    /// Length of the enter transition.
    pub enter_transition: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            auto_dismiss: Duration::from_secs(5),
            exit_transition: Duration::from_millis(300),
            enter_transition: Duration::from_millis(300),
        }
    }
}

impl From<&TimingConfig> for NotificationTimings {
    fn from(config: &TimingConfig) -> Self {
        Self {
            auto_dismiss: config.auto_dismiss(),
            exit_transition: config.exit_transition(),
            enter_transition: config.enter_transition(),
        }
    }
}

/// What started a dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DismissTrigger {
    CloseButton,
    AutoDismiss,
}

/// Presents notifications on a shared surface.
///
/// Cloning is cheap; clones drive the same surface.
#[derive(Clone)]
pub struct Presenter {
    surface: SharedSurface,
    scheduler: SharedScheduler,
    timings: NotificationTimings,
}

impl Presenter {
    /// Create a presenter for `surface`, timed by `scheduler`.
    pub fn new(
        surface: SharedSurface,
        scheduler: SharedScheduler,
        timings: NotificationTimings,
    ) -> Self {
        Self {
            surface,
            scheduler,
            timings,
        }
    }

    /// The surface this presenter renders into.
    pub fn surface(&self) -> &SharedSurface {
        &self.surface
    }

    /// Lifecycle durations in use.
    pub fn timings(&self) -> NotificationTimings {
        self.timings
    }

    /// Show `message`, replacing whatever notification is on the surface.
    ///
    /// The previous notification is evicted synchronously, before the new one
    /// is inserted. The new one dismisses itself after `auto_dismiss` unless
    /// it was dismissed or evicted earlier.
    pub fn present(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let notification = Notification::new(severity, message, self.scheduler.now());
        let id = notification.id();
        info!("Presenting {} ({}): {}", id, severity, notification.message());

        self.surface.lock().insert(RenderedNotification::new(
            notification,
            self.timings.enter_transition,
        ));

        // The timer is never cancelled; a stale expiry is a no-op in begin_dismiss
        let presenter = self.clone();
        self.scheduler.schedule(
            self.timings.auto_dismiss,
            Box::new(move || {
                presenter.begin_dismiss(id, DismissTrigger::AutoDismiss);
            }),
        );

        id
    }

    /// Activate the close control of notification `id`.
    ///
    /// Returns `true` if this started the exit transition, `false` if the
    /// notification was already dismissing, removed or evicted.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.begin_dismiss(id, DismissTrigger::CloseButton)
    }

    fn begin_dismiss(&self, id: NotificationId, trigger: DismissTrigger) -> bool {
        let exit = self.timings.exit_transition;
        if !self.surface.lock().begin_exit(id, exit) {
            debug!("Ignoring {:?} for {}: not displayed", trigger, id);
            return false;
        }
        debug!("{} dismissing via {:?}", id, trigger);

        let surface = Arc::clone(&self.surface);
        self.scheduler.schedule(
            exit,
            Box::new(move || {
                surface.lock().remove(id);
            }),
        );
        true
    }
}
