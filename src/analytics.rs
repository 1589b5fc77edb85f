//! Analytics event reporting
//!
//! The analytics collaborator is optional. [`Analytics`] wraps it so callers
//! never see its failures: a missing sink is skipped and a failing sink is
//! logged and ignored.

use crate::error::Result;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{trace, warn};

/// Flat property map attached to an event
pub type EventProperties = BTreeMap<String, Value>;

/// A named analytics event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    /// Event name, e.g. `newsletter_signup`
    pub name: String,
    /// Event properties
    pub properties: EventProperties,
}

impl AnalyticsEvent {
    /// Create an event with no properties
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: EventProperties::new(),
        }
    }

    /// Add a property
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Look up a property
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

/// Destination for analytics events
pub trait AnalyticsSink: Send + Sync {
    /// Record one event
    fn track(&self, event: &AnalyticsEvent) -> Result<()>;
}

/// Defensive front for an optional analytics sink
#[derive(Clone, Default)]
pub struct Analytics {
    sink: Option<Arc<dyn AnalyticsSink>>,
}

impl Analytics {
    /// Report to `sink`
    pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Report nowhere
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether a sink is attached
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Send `event` if a sink is attached; failures are logged and dropped
    pub fn report(&self, event: &AnalyticsEvent) {
        let Some(sink) = &self.sink else {
            trace!("No analytics sink, skipping '{}'", event.name);
            return;
        };
        if let Err(e) = sink.track(event) {
            warn!("Analytics event '{}' dropped: {}", event.name, e);
        }
    }
}

impl fmt::Debug for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analytics")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Sink that keeps every event in memory
#[derive(Debug, Default)]
pub struct MemoryAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemoryAnalytics {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().clone()
    }

    /// Recorded events named `name`
    pub fn named(&self, name: &str) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .iter()
            .filter(|event| event.name == name)
            .cloned()
            .collect()
    }
}

impl AnalyticsSink for MemoryAnalytics {
    fn track(&self, event: &AnalyticsEvent) -> Result<()> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}
