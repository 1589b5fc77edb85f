//! Configuration manager for loading and saving site configuration
//!
//! The default location is `$SITEFEEDBACK_HOME/config.json` (falling back to
//! the working directory). Writes are atomic to prevent corruption.

use crate::config::models::SiteConfig;
use crate::error::{Result, SiteError, StringError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the configuration directory
pub const HOME_ENV: &str = "SITEFEEDBACK_HOME";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the path to the configuration file
    ///
    /// Returns: `$SITEFEEDBACK_HOME/config.json`
    pub fn get_config_path() -> PathBuf {
        let home = std::env::var(HOME_ENV).unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join("config.json")
    }

    /// Load configuration from the default path
    pub fn load() -> Result<SiteConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from `path`
    ///
    /// A missing or unparsable file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<SiteConfig> {
        if !path.exists() {
            info!(
                "Configuration file {} not found, using defaults",
                path.display()
            );
            return Ok(SiteConfig::default());
        }

        let json = std::fs::read_to_string(path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(SiteConfig::default())
            }
        }
    }

    /// Save configuration to the default path
    pub fn save(config: &SiteConfig) -> Result<()> {
        Self::save_to(&Self::get_config_path(), config)
    }

    /// Save configuration to `path` with an atomic write
    ///
    /// Writes to a temporary file in the same directory, then renames it over
    /// the target.
    pub fn save_to(path: &Path, config: &SiteConfig) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| SiteError::ConfigError(StringError::new("Invalid config path")))?;
        std::fs::create_dir_all(config_dir)?;

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = tempfile::NamedTempFile::new_in(config_dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(path)
            .map_err(|e| SiteError::ConfigError(Box::new(e.error)))?;

        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}
