//! Toast notification system for user feedback.
//!
//! A single overlay region shows at most one notification at a time.
//! Presenting a new notification evicts the current one immediately; an
//! evicted notification gets no exit transition.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with its severity and creation time
//! - [`surface`] - `NotificationSurface`, the display region and its styling
//! - [`presenter`] - `Presenter`, which drives the lifecycle through a scheduler
//!
//! # Lifecycle
//!
//! ```text
//! present() → Displayed ──(dismiss click | auto-dismiss timer)──→ Dismissing ──(exit transition)──→ Removed
//! ```
//!
//! Only the first trigger moves a notification to `Dismissing`; later
//! triggers are no-ops, and removal of an already removed element does nothing.

pub mod notification;
pub mod presenter;
pub mod surface;

pub use notification::{Notification, NotificationId, Severity};
pub use presenter::{NotificationTimings, Presenter};
pub use surface::{Animation, NotificationSurface, Phase, RenderedNotification, SharedSurface};
