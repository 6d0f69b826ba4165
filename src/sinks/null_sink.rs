use super::Sink;

/// A no-op sink that silently drops every timing sample,
/// used when the metrics sink is disabled.
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        NullSink
    }
}

impl Default for NullSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for NullSink {
    fn get_name(&self) -> &str {
        "disabled"
    }

    fn get_type(&self) -> &str {
        "null"
    }

    fn timing(&self, _metric: &str, _value_ms: f64) {}

    fn is_enabled(&self) -> bool {
        false
    }
}
