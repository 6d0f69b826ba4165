use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sinks::log_sink::LogSinkConfig;
use crate::sinks::memory_sink::MemorySinkConfig;

/// A wrapper for the metrics sink configuration:
/// - enabled: if false, timings are dropped (NullSink).
/// - backend: the actual sink backend (log, memory, etc.).
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct SinkConfig {
    pub enabled: bool,
    #[serde(flatten)]
    pub backend: Option<SinkBackend>,
}

/// The existing sink backends. We differentiate them via a "type" tag in the YAML.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
#[serde(tag = "type")]
pub enum SinkBackend {
    #[serde(rename = "log")]
    Log(LogSinkConfig),
    #[serde(rename = "memory")]
    Memory(MemorySinkConfig),
    // Add more variants here as needed, like:
    // #[serde(rename = "statsd")]
    // Statsd(StatsdSinkConfig),
}
