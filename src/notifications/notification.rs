//! Core notification data structures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

/// Severity level determines the overlay background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Error the user should act on (red).
    Error,
}

impl Severity {
    /// Background color of the overlay for this severity.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Info => "#2196F3",
            Severity::Success => "#4CAF50",
            Severity::Error => "#f44336",
        }
    }

    /// Lowercase name used in class names and the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Class list of the overlay element, e.g. `notification notification-error`.
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    /// Scheduler time at creation.
    created_at: Duration,
}

impl Notification {
    /// Creates a new notification stamped with the scheduler time `created_at`.
    pub fn new(severity: Severity, message: impl Into<String>, created_at: Duration) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at,
        }
    }

    /// Returns the notification's unique ID.
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the scheduler time at which this notification was created.
    pub fn created_at(&self) -> Duration {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::new(Severity::Info, "test", Duration::ZERO);
        let n2 = Notification::new(Severity::Info, "test", Duration::ZERO);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_match_overlay_palette() {
        assert_eq!(Severity::Info.color(), "#2196F3");
        assert_eq!(Severity::Success.color(), "#4CAF50");
        assert_eq!(Severity::Error.color(), "#f44336");
    }

    #[test]
    fn default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn class_name_includes_severity() {
        assert_eq!(
            Severity::Error.class_name(),
            "notification notification-error"
        );
    }

    #[test]
    fn severity_deserializes_from_lowercase() {
        let severity: Severity = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(severity, Severity::Success);
    }
}
