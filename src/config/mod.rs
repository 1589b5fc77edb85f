//! Configuration management module
//!
//! This module handles loading, saving, and managing site configuration:
//! timer durations, user-facing texts, search settings and the affiliate URL
//! table. Configuration is stored as JSON with atomic writes.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{MessageConfig, SearchConfig, SiteConfig, TimingConfig};
