use std::sync::Arc;

use tracing::{error, info};

use super::log_sink::LogSink;
use super::memory_sink::MemorySink;
use super::null_sink::NullSink;
use crate::config::{SinkBackend, SinkConfig};

/// The Sink trait abstracts the metrics backend receiving timing samples.
/// Callers treat a sink as a synchronous fire-and-forget target; buffering,
/// aggregation and transport are the implementation's concern.
pub trait Sink: Send + Sync {
    fn get_name(&self) -> &str;
    fn get_type(&self) -> &str;
    /// Record one timing sample, in milliseconds, under a fully-qualified
    /// metric name.
    fn timing(&self, metric: &str, value_ms: f64);
    fn is_enabled(&self) -> bool {
        // Default implementation should return always True for real sinks
        // NullSink will return false so we can write better debug messages
        true
    }
}

/// Creates a concrete sink implementation based on the SinkConfig.
/// If `sink.enabled = false`, returns NullSink. Otherwise, picks the specified backend.
pub fn create_sink(config: &SinkConfig) -> Arc<dyn Sink> {
    if !config.enabled {
        info!("Metrics sink is disabled. Using NullSink.");
        return Arc::new(NullSink::new());
    }

    match &config.backend {
        Some(SinkBackend::Log(log_config)) => {
            info!("Created log sink '{}'.", log_config.name);
            Arc::new(LogSink::new(log_config))
        }
        Some(SinkBackend::Memory(memory_config)) => {
            info!("Created memory sink '{}'.", memory_config.name);
            Arc::new(MemorySink::new(memory_config))
        }
        None => {
            error!("Sink is enabled, but no backend config is provided!");
            std::process::exit(1);
        }
    }
}
