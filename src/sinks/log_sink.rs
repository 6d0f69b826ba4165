use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::sinks::Sink;

/// LogSinkConfig defines the data for a sink that writes timings to the log.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct LogSinkConfig {
    /// A friendly name for logs.
    pub name: String,
}

/// A `LogSink` that emits every timing sample as a structured tracing event.
/// Useful when an external collector scrapes structured logs, and as the
/// usual backend for local runs.
pub struct LogSink {
    pub config: LogSinkConfig,
}

impl LogSink {
    /// Create a new `LogSink` from the config struct.
    pub fn new(config: &LogSinkConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl Sink for LogSink {
    /// The display name for logs/debug.
    fn get_name(&self) -> &str {
        &self.config.name
    }

    fn get_type(&self) -> &str {
        "log"
    }

    fn timing(&self, metric: &str, value_ms: f64) {
        info!(
            event_name = "sinks.timing",
            event_domain = "sinks",
            metric = metric,
            value_ms = value_ms,
            "{} {}ms",
            metric,
            value_ms
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> LogSinkConfig {
        LogSinkConfig {
            name: "test log sink".to_string(),
        }
    }

    /// Test that sink metadata is correct.
    #[test]
    fn test_sink_metadata() {
        let sink = LogSink::new(&create_test_config());
        assert_eq!(sink.get_name(), "test log sink");
        assert_eq!(sink.get_type(), "log");
        assert!(sink.is_enabled());
    }

    /// Test that emitting a timing does not panic without a subscriber installed.
    #[test]
    fn test_timing_without_subscriber() {
        let sink = LogSink::new(&create_test_config());
        sink.timing("request.foo.index.total", 1000.0);
    }
}
