use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sinks::Sink;

/// How many timing samples we keep when no capacity is configured.
const DEFAULT_CAPACITY: usize = 1000;

/// MemorySinkConfig defines the data for an in-memory sink.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct MemorySinkConfig {
    /// A friendly name for logs.
    pub name: String,
    /// Maximum number of retained samples; the oldest are evicted first.
    pub capacity: Option<usize>,
}

/// A single retained timing sample.
#[derive(Debug, Clone)]
pub struct TimingRecord {
    pub metric: String,
    pub value_ms: f64,
    pub recorded_at: DateTime<Utc>,
}

/// A `MemorySink` that retains the most recent timing samples in a bounded
/// buffer. Intended for tests and local development, not production traffic.
pub struct MemorySink {
    config: MemorySinkConfig,
    records: Mutex<VecDeque<TimingRecord>>,
}

impl MemorySink {
    /// Create a new `MemorySink` from the config struct.
    pub fn new(config: &MemorySinkConfig) -> Self {
        Self {
            config: config.clone(),
            records: Mutex::new(VecDeque::new()),
        }
    }

    fn capacity(&self) -> usize {
        self.config.capacity.unwrap_or(DEFAULT_CAPACITY)
    }

    /// Snapshot of the retained samples, oldest first.
    pub fn records(&self) -> Vec<TimingRecord> {
        self.records
            .lock()
            .expect("memory sink mutex poisoned")
            .iter()
            .cloned()
            .collect()
    }

    /// Snapshot of (metric, value) pairs, oldest first. Convenient in tests.
    pub fn timings(&self) -> Vec<(String, f64)> {
        self.records()
            .into_iter()
            .map(|record| (record.metric, record.value_ms))
            .collect()
    }

    /// Drop all retained samples.
    pub fn clear(&self) {
        self.records
            .lock()
            .expect("memory sink mutex poisoned")
            .clear();
    }
}

impl Sink for MemorySink {
    /// The display name for logs/debug.
    fn get_name(&self) -> &str {
        &self.config.name
    }

    fn get_type(&self) -> &str {
        "memory"
    }

    fn timing(&self, metric: &str, value_ms: f64) {
        let mut records = self.records.lock().expect("memory sink mutex poisoned");
        records.push_back(TimingRecord {
            metric: metric.to_string(),
            value_ms,
            recorded_at: Utc::now(),
        });
        while records.len() > self.capacity() {
            records.pop_front();
        }
    }
}
