//! Usage analytics with an explicit, passed-in client handle.
//!
//! The client is constructed with `init`, handed around by whoever owns it,
//! and ended with `shutdown`. There is no process-wide default client and no
//! global mutable state. Event transport is a port (`EventSink`); the real
//! wire protocol is out of scope here, so the shipped sinks either log events
//! through `tracing` or buffer them for tests.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Mutex;
use tracing::{debug, info};

/// One tracked usage event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,

    pub at: DateTime<Utc>,
}

/// Where tracked events go.
pub trait EventSink: Send + Sync {
    fn record(&self, event: AnalyticsEvent);
}

/// Logs every event through `tracing` at debug level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: AnalyticsEvent) {
        debug!(name = %event.name, properties = ?event.properties, "analytics event");
    }
}

/// Collects events in memory. Test support.
#[derive(Debug, Default)]
pub struct BufferSink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().expect("sink lock").clone()
    }
}

impl EventSink for BufferSink {
    fn record(&self, event: AnalyticsEvent) {
        self.events.lock().expect("sink lock").push(event);
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalyticsConfig {
    /// Master switch. When false the client is constructed but drops every
    /// event, so call sites never need their own flag checks.
    pub enabled: bool,
}

/// Handle with explicit lifecycle: [`AnalyticsClient::init`] starts it,
/// [`AnalyticsClient::shutdown`] ends it. Events tracked while disabled or
/// after shutdown are dropped silently.
pub struct AnalyticsClient {
    config: AnalyticsConfig,
    sink: Box<dyn EventSink>,
    open: bool,
}

impl AnalyticsClient {
    pub fn init(config: AnalyticsConfig, sink: Box<dyn EventSink>) -> Self {
        if config.enabled {
            info!("analytics enabled");
        }
        Self {
            config,
            sink,
            open: true,
        }
    }

    /// A disabled client that drops everything. Useful as a default.
    pub fn disabled() -> Self {
        Self::init(AnalyticsConfig::default(), Box::new(TracingSink))
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled && self.open
    }

    pub fn track_event(&self, name: &str, properties: BTreeMap<String, String>) {
        if !self.is_enabled() {
            return;
        }
        self.sink.record(AnalyticsEvent {
            name: name.to_string(),
            properties,
            at: Utc::now(),
        });
    }

    /// End the client's lifecycle. Idempotent.
    pub fn shutdown(&mut self) {
        if self.open && self.config.enabled {
            info!("analytics shut down");
        }
        self.open = false;
    }
}
