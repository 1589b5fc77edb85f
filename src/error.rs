//! Error types for `SiteFeedback`
//!
//! This module defines all error types used throughout the crate,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `SiteFeedback`
#[derive(Debug, Error)]
pub enum SiteError {
    /// The submitted value does not have the shape of an email address
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    /// The analytics collaborator rejected or failed to record an event
    /// Preserves the underlying error source for full error chain transparency
    #[error("Analytics error: {0}")]
    Analytics(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Text shown when a submitted email address is rejected
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Result type alias for `SiteFeedback` operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Convert an error to a user-friendly message
///
/// Validation errors map to the exact text shown in the notification overlay;
/// the rest are meant for the command-line front end.
pub fn get_user_friendly_error(error: &SiteError) -> String {
    match error {
        SiteError::InvalidEmail(_) => INVALID_EMAIL_MESSAGE.to_string(),
        SiteError::Analytics(_) => "Analytics reporting is unavailable.\n\n\
             Events will not be recorded for this session.\n\
             This does not affect functionality."
            .to_string(),
        SiteError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Default settings will be used.\n\
             Check that the configuration directory is writable."
            .to_string(),
        SiteError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        SiteError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 Default settings will be used."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_display() {
        let error = SiteError::InvalidEmail("not-an-email".to_string());
        assert_eq!(error.to_string(), "Invalid email address: \"not-an-email\"");
    }

    #[test]
    fn test_invalid_email_user_friendly() {
        let error = SiteError::InvalidEmail("x".to_string());
        assert_eq!(
            get_user_friendly_error(&error),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: SiteError = io_error.into();
        assert!(matches!(error, SiteError::IoError(_)));
    }

    #[test]
    fn test_analytics_error_keeps_source() {
        use std::error::Error as _;

        let error = SiteError::Analytics(StringError::new("sink offline"));
        assert_eq!(error.to_string(), "Analytics error: sink offline");
        assert_eq!(
            error.source().map(ToString::to_string).as_deref(),
            Some("sink offline")
        );
    }

    #[test]
    fn test_config_error_user_friendly() {
        let error = SiteError::ConfigError(StringError::new("bad path"));
        let message = get_user_friendly_error(&error);
        assert!(message.contains("Failed to load or save configuration"));
        assert!(message.contains("Default settings"));
    }
}
