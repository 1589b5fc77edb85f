//! Configuration data models
//!
//! This module defines the data structures used for site configuration.
//! Every section falls back to its defaults when missing from the file.

use crate::error::INVALID_EMAIL_MESSAGE;
use crate::timing::millis_or_zero;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Top-level site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Timer durations
    pub timings: TimingConfig,
    /// User-facing texts
    pub messages: MessageConfig,
    /// Search box behavior
    pub search: SearchConfig,
    /// Affiliate URL per product id
    pub affiliate_urls: BTreeMap<String, String>,
}

/// Timer durations in milliseconds
///
/// Negative values are accepted and treated as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Time before a notification dismisses itself
    pub auto_dismiss_ms: i64,
    /// Notification exit transition
    pub exit_transition_ms: i64,
    /// Notification enter transition
    pub enter_transition_ms: i64,
    /// Simulated latency of the newsletter subscription call
    pub subscribe_latency_ms: i64,
    /// Quiescence window of the search box
    pub search_debounce_ms: i64,
    /// Minimum spacing of header scroll handling (0 handles every event)
    pub scroll_throttle_ms: i64,
}

/// User-facing texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Error shown for a malformed email address
    pub invalid_email: String,
    /// Success shown once the subscription settles
    pub subscribed: String,
    /// Trigger label while the subscription is pending
    pub subscribing_label: String,
    /// Initial trigger label
    pub subscribe_label: String,
}

/// Search box behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Queries shorter than this (after trimming) clear the results
    pub min_query_chars: usize,
}

impl TimingConfig {
    /// Notification auto-dismiss delay
    pub fn auto_dismiss(&self) -> Duration {
        millis_or_zero(self.auto_dismiss_ms)
    }

    /// Notification exit transition
    pub fn exit_transition(&self) -> Duration {
        millis_or_zero(self.exit_transition_ms)
    }

    /// Notification enter transition
    pub fn enter_transition(&self) -> Duration {
        millis_or_zero(self.enter_transition_ms)
    }

    /// Simulated subscription latency
    pub fn subscribe_latency(&self) -> Duration {
        millis_or_zero(self.subscribe_latency_ms)
    }

    /// Search debounce window
    pub fn search_debounce(&self) -> Duration {
        millis_or_zero(self.search_debounce_ms)
    }

    /// Header scroll throttle window
    pub fn scroll_throttle(&self) -> Duration {
        millis_or_zero(self.scroll_throttle_ms)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let affiliate_urls = [
            ("echo-dot", "https://amzn.to/3example1"),
            ("nest-thermostat", "https://amzn.to/3example2"),
            ("airpods-pro", "https://amzn.to/3example3"),
        ]
        .into_iter()
        .map(|(id, url)| (id.to_string(), url.to_string()))
        .collect();

        Self {
            timings: TimingConfig::default(),
            messages: MessageConfig::default(),
            search: SearchConfig::default(),
            affiliate_urls,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: 5000,
            exit_transition_ms: 300,
            enter_transition_ms: 300,
            subscribe_latency_ms: 2000,
            search_debounce_ms: 300,
            scroll_throttle_ms: 0,
        }
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            invalid_email: INVALID_EMAIL_MESSAGE.to_string(),
            subscribed: "Thank you for subscribing! Check your email for confirmation."
                .to_string(),
            subscribing_label: "Subscribing...".to_string(),
            subscribe_label: "Subscribe".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { min_query_chars: 2 }
    }
}
