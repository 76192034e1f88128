//! Analytics events for outbound links.
//!
//! Components never reach for an ambient tracker. They receive a
//! [`Telemetry`] handle as a prop and hand it to [`TrackedLink::activate`].

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::event_log::{BufferSink, EventLogger, StaticLocation};

/// Extra key/value pairs sent with an analytics event.
pub type Metadata = BTreeMap<String, String>;

/// Receives analytics events and ships them somewhere.
pub trait Tracker: Send + Sync {
    fn track(&self, event_name: &str, metadata: &Metadata);
}

/// Drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracker;

impl Tracker for NoopTracker {
    fn track(&self, _event_name: &str, _metadata: &Metadata) {}
}

/// One analytics call, as a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedEvent {
    pub description: String,
    pub metadata: Metadata,
}

/// Records every event it receives.
#[derive(Debug, Default)]
pub struct RecordingTracker {
    events: Mutex<Vec<TrackedEvent>>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TrackedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl Tracker for RecordingTracker {
    fn track(&self, event_name: &str, metadata: &Metadata) {
        if let Ok(mut events) = self.events.lock() {
            events.push(TrackedEvent {
                description: event_name.to_owned(),
                metadata: metadata.clone(),
            });
        }
    }
}

/// Tracker plus event logger, handed to every component with a tracked link.
#[derive(Clone)]
pub struct Telemetry {
    tracker: Arc<dyn Tracker>,
    logger: EventLogger,
}

impl Telemetry {
    pub fn new(tracker: Arc<dyn Tracker>, logger: EventLogger) -> Self {
        Self { tracker, logger }
    }

    /// Drops analytics and keeps log lines in memory. Used for static renders,
    /// where no click can happen.
    pub fn detached() -> Self {
        let logger = EventLogger::new(
            Arc::new(StaticLocation::default()),
            Arc::new(BufferSink::new()),
        );
        Self::new(Arc::new(NoopTracker), logger)
    }

    pub fn tracker(&self) -> &dyn Tracker {
        self.tracker.as_ref()
    }

    pub fn logger(&self) -> &EventLogger {
        &self.logger
    }
}

impl std::fmt::Debug for Telemetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Telemetry")
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}

/// What a tracked anchor looks like, and how its clicks are tagged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Link,
    Button { class: Option<String> },
}

impl LinkKind {
    pub fn button(class: impl Into<String>) -> Self {
        Self::Button {
            class: Some(class.into()),
        }
    }

    /// Tag used in the click log line and as the anchor's CSS class.
    pub fn type_tag(&self) -> String {
        match self {
            Self::Link => "link".to_owned(),
            Self::Button { class: Some(class) } if !class.is_empty() => format!("button {class}"),
            Self::Button { .. } => "button".to_owned(),
        }
    }
}

/// An outbound link that reports clicks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedLink {
    pub label: String,
    pub href: String,
    pub kind: LinkKind,
    pub meta: Metadata,
}

impl TrackedLink {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            kind: LinkKind::Link,
            meta: Metadata::new(),
        }
    }

    pub fn button(label: impl Into<String>, href: impl Into<String>, class: Option<String>) -> Self {
        Self {
            kind: LinkKind::Button { class },
            ..Self::link(label, href)
        }
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Analytics event name for this link.
    pub fn event_name(&self) -> String {
        format!("etcher_app {} button", self.label)
    }

    /// Log description for a click on this link.
    pub fn click_description(&self) -> String {
        format!("click {} {}", self.label, self.kind.type_tag())
    }

    /// Handle a click: analytics first, then the banner log line.
    pub fn activate(&self, telemetry: &Telemetry) {
        telemetry.tracker().track(&self.event_name(), &self.meta);
        telemetry.logger().make_logger(self.click_description())();
    }
}
