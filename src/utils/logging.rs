//! Logging system initialization
//!
//! Sets up tracing-based logging to stderr, or to `<dir>/sitefeedback.log`
//! with rotation on startup keeping 9 historical files.

use crate::error::{Result, SiteError, StringError};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (sitefeedback.log.1 through .9)
const MAX_LOG_FILES: u8 = 9;

/// Base name of the log file
const LOG_FILE_NAME: &str = "sitefeedback.log";

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, with ANSI colors
    Stderr,
    /// `sitefeedback.log` inside this directory
    File(PathBuf),
}

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
pub fn init_logging(target: &LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = match target {
        LogTarget::Stderr => {
            let subscriber = fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .with_target(true)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        }
        LogTarget::File(log_dir) => {
            std::fs::create_dir_all(log_dir)?;
            rotate_logs_on_startup(&log_dir.join(LOG_FILE_NAME))?;

            // Rotation is handled above; the appender only ever writes one file
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix("sitefeedback")
                .filename_suffix("log")
                .build(log_dir)
                .map_err(|e| SiteError::ConfigError(Box::new(e)))?;

            let subscriber = fmt()
                .with_writer(file_appender)
                .with_env_filter(filter)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        }
    };
    installed.map_err(|e| SiteError::ConfigError(Box::new(e)))?;

    tracing::info!("SiteFeedback v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Rotate log files on startup
///
/// `.9` is deleted, `.1`..`.8` shift up by one, and the current log becomes
/// `.1`. The logger then starts a fresh file.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| SiteError::ConfigError(StringError::new("Invalid log path")))?;
    let log_name = log_path
        .file_name()
        .ok_or_else(|| SiteError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        if current_log.exists() {
            std::fs::rename(&current_log, log_dir.join(format!("{log_name}.{}", i + 1)))?;
        }
    }

    std::fs::rename(log_path, log_dir.join(format!("{log_name}.1")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_dir;
    use std::fs;

    #[test]
    fn test_rotation_without_existing_log_is_noop() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join(LOG_FILE_NAME);

        rotate_logs_on_startup(&log_path).unwrap();
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_rotation_shifts_history() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join(LOG_FILE_NAME);

        for session in 1..=3 {
            fs::write(&log_path, format!("session {session}")).unwrap();
            rotate_logs_on_startup(&log_path).unwrap();
        }

        assert!(!log_path.exists());
        for (suffix, session) in [(1, 3), (2, 2), (3, 1)] {
            let content =
                fs::read_to_string(temp_dir.path().join(format!("{LOG_FILE_NAME}.{suffix}")))
                    .unwrap();
            assert_eq!(content, format!("session {session}"));
        }
    }

    #[test]
    fn test_rotation_caps_history() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join(LOG_FILE_NAME);

        for session in 1..=12 {
            fs::write(&log_path, format!("session {session}")).unwrap();
            rotate_logs_on_startup(&log_path).unwrap();
        }

        let oldest = temp_dir
            .path()
            .join(format!("{LOG_FILE_NAME}.{MAX_LOG_FILES}"));
        assert_eq!(fs::read_to_string(oldest).unwrap(), "session 4");
        assert!(!temp_dir.path().join(format!("{LOG_FILE_NAME}.10")).exists());
    }
}
