//! The single notification display region.
//!
//! `NotificationSurface` stands in for the page's rendering tree: it holds at
//! most one rendered element and keeps counters of what happened to it.

use super::notification::{Notification, NotificationId};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Surface shared between the presenter and its scheduled tasks.
pub type SharedSurface = Arc<Mutex<NotificationSurface>>;

/// Offset from the top edge of the viewport, in pixels.
pub const OVERLAY_TOP_PX: u32 = 20;
/// Offset from the right edge of the viewport, in pixels.
pub const OVERLAY_RIGHT_PX: u32 = 20;
/// Stacking order above all page content.
pub const OVERLAY_Z_INDEX: u32 = 10_000;
/// Maximum overlay width, in pixels.
pub const OVERLAY_MAX_WIDTH_PX: u32 = 400;
const OVERLAY_PADDING: &str = "1rem 1.5rem";
const OVERLAY_BORDER_RADIUS_PX: u32 = 8;
const OVERLAY_BOX_SHADOW: &str = "0 4px 12px rgba(0,0,0,0.15)";
const OVERLAY_TEXT_COLOR: &str = "white";

/// Where a notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Visible and interactive.
    Displayed,
    /// Running its exit transition; removal is already scheduled.
    Dismissing,
    /// No longer on the surface (dismissed or evicted).
    Removed,
}

/// Keyframe animation applied to the overlay element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    /// Enter transition.
    SlideInRight(Duration),
    /// Exit transition.
    SlideOutRight(Duration),
}

impl Animation {
    /// CSS `animation` shorthand, e.g. `slideInRight 0.3s ease`.
    pub fn css(self) -> String {
        let (name, duration) = match self {
            Animation::SlideInRight(d) => ("slideInRight", d),
            Animation::SlideOutRight(d) => ("slideOutRight", d),
        };
        format!("{name} {}s ease", duration.as_secs_f64())
    }
}

/// A notification as currently rendered on the surface.
#[derive(Debug, Clone)]
pub struct RenderedNotification {
    notification: Notification,
    phase: Phase,
    animation: Animation,
}

impl RenderedNotification {
    /// Render a freshly created notification with its enter transition.
    pub fn new(notification: Notification, enter: Duration) -> Self {
        Self {
            notification,
            phase: Phase::Displayed,
            animation: Animation::SlideInRight(enter),
        }
    }

    /// The underlying notification.
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Animation currently applied.
    pub fn animation(&self) -> Animation {
        self.animation
    }

    /// Inline style of the overlay element.
    pub fn css(&self) -> String {
        format!(
            "position: fixed; top: {OVERLAY_TOP_PX}px; right: {OVERLAY_RIGHT_PX}px; \
             background: {}; color: {OVERLAY_TEXT_COLOR}; padding: {OVERLAY_PADDING}; \
             border-radius: {OVERLAY_BORDER_RADIUS_PX}px; box-shadow: {OVERLAY_BOX_SHADOW}; \
             z-index: {OVERLAY_Z_INDEX}; max-width: {OVERLAY_MAX_WIDTH_PX}px; animation: {};",
            self.notification.severity().color(),
            self.animation.css()
        )
    }
}

/// Lifetime counters for a surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceStats {
    /// Notifications rendered.
    pub inserted: u64,
    /// Notifications replaced by a newer one without an exit transition.
    pub evicted: u64,
    /// Notifications removed after their exit transition.
    pub removed: u64,
}

/// Display region holding at most one notification.
#[derive(Debug, Default)]
pub struct NotificationSurface {
    current: Option<RenderedNotification>,
    stats: SurfaceStats,
}

impl NotificationSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty surface wrapped for sharing.
    pub fn shared() -> SharedSurface {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Remove the current notification immediately, skipping its exit transition.
    pub fn evict(&mut self) -> Option<Notification> {
        let evicted = self.current.take()?;
        self.stats.evicted += 1;
        debug!("Evicted {}", evicted.notification.id());
        Some(evicted.notification)
    }

    /// Render a notification, evicting whatever was there.
    pub fn insert(&mut self, rendered: RenderedNotification) {
        self.evict();
        debug!("Rendered {}", rendered.notification.id());
        self.current = Some(rendered);
        self.stats.inserted += 1;
    }

    /// Move the notification `id` from `Displayed` to `Dismissing`.
    ///
    /// Returns `false` if `id` is not on the surface or is already dismissing.
    pub fn begin_exit(&mut self, id: NotificationId, exit: Duration) -> bool {
        match self.current.as_mut() {
            Some(rendered)
                if rendered.notification.id() == id && rendered.phase == Phase::Displayed =>
            {
                rendered.phase = Phase::Dismissing;
                rendered.animation = Animation::SlideOutRight(exit);
                true
            }
            _ => false,
        }
    }

    /// Remove the notification `id` from the surface.
    ///
    /// Idempotent: returns `false` and does nothing if `id` is not displayed.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        if self
            .current
            .as_ref()
            .is_some_and(|rendered| rendered.notification.id() == id)
        {
            self.current = None;
            self.stats.removed += 1;
            debug!("Removed {}", id);
            true
        } else {
            false
        }
    }

    /// The notification currently rendered, if any.
    pub fn current(&self) -> Option<&RenderedNotification> {
        self.current.as_ref()
    }

    /// Lifecycle phase of `id`; anything not on the surface is `Removed`.
    pub fn phase_of(&self, id: NotificationId) -> Phase {
        match &self.current {
            Some(rendered) if rendered.notification.id() == id => rendered.phase,
            _ => Phase::Removed,
        }
    }

    /// Number of rendered elements (0 or 1).
    pub fn len(&self) -> usize {
        usize::from(self.current.is_some())
    }

    /// Whether nothing is rendered.
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Lifetime counters.
    pub fn stats(&self) -> SurfaceStats {
        self.stats
    }
}
