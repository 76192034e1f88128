//! Banner event log lines for the host desktop application.
//!
//! The installer scrapes the page's console output. Older installers read a
//! plain `Banner <description>` line; installers that send `api-version=1`
//! expect a JSON command object instead. The API version is read from the
//! current URL every time an event fires, never cached.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::debug;

use crate::query::QueryParams;

/// Query parameter selecting the log line format.
pub const API_VERSION_PARAM: &str = "api-version";

const EVENT_PREFIX: &str = "Banner ";

/// Where the page currently is. Read at call time.
pub trait Location: Send + Sync {
    fn query(&self) -> QueryParams;
}

/// A fixed URL, for native rendering and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticLocation(QueryParams);

impl StaticLocation {
    pub fn new(params: QueryParams) -> Self {
        Self(params)
    }
}

impl Location for StaticLocation {
    fn query(&self) -> QueryParams {
        self.0.clone()
    }
}

/// Output channel for log lines, one line per call.
pub trait LogSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Keeps lines in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl LogSink for BufferSink {
    fn emit(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_owned());
        }
    }
}

/// Log line format, chosen per event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiVersion {
    /// Bare `Banner <description>` string.
    Legacy,
    /// JSON `{"command":"log","data":...}` object.
    V1,
}

impl ApiVersion {
    pub fn resolve(params: &QueryParams) -> Self {
        match params.get(API_VERSION_PARAM) {
            Some("1") => Self::V1,
            _ => Self::Legacy,
        }
    }
}

/// Structured command understood by newer installers.
#[derive(Debug, Serialize)]
pub struct LogCommand<'a> {
    pub command: &'static str,
    pub data: &'a str,
}

/// Render one event for the given API version.
pub fn format_event(description: &str, api: ApiVersion) -> String {
    let data = format!("{EVENT_PREFIX}{description}");
    match api {
        ApiVersion::Legacy => data,
        ApiVersion::V1 => {
            let command = LogCommand {
                command: "log",
                data: &data,
            };
            // A struct of two strings always serialises.
            serde_json::to_string(&command).unwrap_or(data)
        }
    }
}

/// Builds fire-and-forget log callbacks bound to a location and a sink.
#[derive(Clone)]
pub struct EventLogger {
    location: Arc<dyn Location>,
    sink: Arc<dyn LogSink>,
}

impl EventLogger {
    pub fn new(location: Arc<dyn Location>, sink: Arc<dyn LogSink>) -> Self {
        Self { location, sink }
    }

    /// Callback that logs `description` each time it is invoked.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use etcher_pages::event_log::{BufferSink, EventLogger, StaticLocation};
    /// use etcher_pages::query::QueryParams;
    ///
    /// let sink = Arc::new(BufferSink::new());
    /// let location = Arc::new(StaticLocation::new(QueryParams::parse("api-version=1")));
    /// let logger = EventLogger::new(location, sink.clone());
    ///
    /// logger.make_logger("click X")();
    /// assert_eq!(sink.lines(), vec![r#"{"command":"log","data":"Banner click X"}"#]);
    /// ```
    pub fn make_logger(&self, description: impl Into<String>) -> impl Fn() + Send + Sync + 'static {
        let description = description.into();
        let location = Arc::clone(&self.location);
        let sink = Arc::clone(&self.sink);
        move || {
            let api = ApiVersion::resolve(&location.query());
            debug!(?api, description = %description, "banner event");
            sink.emit(&format_event(&description, api));
        }
    }

    pub fn log(&self, description: impl Into<String>) {
        self.make_logger(description)();
    }
}

impl std::fmt::Debug for EventLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLogger").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Location whose URL can change between invocations.
    #[derive(Default)]
    struct MovingLocation(Mutex<QueryParams>);

    impl MovingLocation {
        fn navigate(&self, search: &str) {
            *self.0.lock().unwrap() = QueryParams::parse(search);
        }
    }

    impl Location for MovingLocation {
        fn query(&self) -> QueryParams {
            self.0.lock().unwrap().clone()
        }
    }

    fn logger_for(search: &str) -> (EventLogger, Arc<BufferSink>) {
        let sink = Arc::new(BufferSink::new());
        let location = Arc::new(StaticLocation::new(QueryParams::parse(search)));
        (EventLogger::new(location, sink.clone()), sink)
    }

    #[test]
    fn plain_line_without_api_version() {
        let (logger, sink) = logger_for("");
        logger.make_logger("click X")();
        assert_eq!(sink.lines(), vec!["Banner click X".to_string()]);
    }

    #[test]
    fn json_line_for_api_version_one() {
        let (logger, sink) = logger_for("api-version=1");
        logger.make_logger("click X")();
        assert_eq!(
            sink.lines(),
            vec![r#"{"command":"log","data":"Banner click X"}"#.to_string()]
        );
    }

    #[test]
    fn other_api_versions_stay_plain() {
        for search in ["api-version=2", "api-version=", "api-version=01"] {
            let (logger, sink) = logger_for(search);
            logger.log("click Y");
            assert_eq!(sink.lines(), vec!["Banner click Y".to_string()], "{search}");
        }
    }

    #[test]
    fn making_a_logger_emits_nothing() {
        let (logger, sink) = logger_for("");
        let _callback = logger.make_logger("click X");
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn api_version_is_read_per_invocation() {
        let location = Arc::new(MovingLocation::default());
        let sink = Arc::new(BufferSink::new());
        let logger = EventLogger::new(location.clone(), sink.clone());
        let callback = logger.make_logger("click Tweet button");

        callback();
        location.navigate("api-version=1");
        callback();

        assert_eq!(
            sink.lines(),
            vec![
                "Banner click Tweet button".to_string(),
                r#"{"command":"log","data":"Banner click Tweet button"}"#.to_string(),
            ]
        );
    }

    #[test]
    fn json_escapes_description() {
        assert_eq!(
            format_event(r#"click "quoted""#, ApiVersion::V1),
            r#"{"command":"log","data":"Banner click \"quoted\""}"#
        );
    }
}
