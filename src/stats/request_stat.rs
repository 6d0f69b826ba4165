use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::models::RequestPayload;
use crate::sinks::Sink;

/// Per-request statistics and the reporting step that turns them into
/// hierarchically named timing metrics.
///
/// One `RequestStat` models one completed request: construct it when the
/// request finishes, let trackers fill in [`RequestStat::stats`], call
/// [`RequestStat::report`] once, then drop it. Construction never fails;
/// missing payload data only means fewer metrics get emitted.
pub struct RequestStat {
    /// Free-form label for the request, used in logs only.
    pub name: String,
    /// Wall-clock start of the request, in epoch seconds.
    pub start: Option<f64>,
    /// Wall-clock end of the request, in epoch seconds.
    pub finish: Option<f64>,
    /// Correlation identifier, carried through for logging. Never part of a
    /// metric name.
    pub request_id: String,
    pub payload: RequestPayload,
    /// Metric suffix to value table. Trackers and pre-counted stats from the
    /// report body land here before [`RequestStat::report`] runs. Every entry
    /// is emitted uniformly; keys may themselves contain dots.
    pub stats: HashMap<String, f64>,
    sink: Arc<dyn Sink>,
}

impl RequestStat {
    pub fn new(
        name: impl Into<String>,
        start: Option<f64>,
        finish: Option<f64>,
        request_id: impl Into<String>,
        payload: RequestPayload,
        sink: Arc<dyn Sink>,
    ) -> Self {
        RequestStat {
            name: name.into(),
            start,
            finish,
            request_id: request_id.into(),
            payload,
            stats: HashMap::new(),
            sink,
        }
    }

    /// Database time for this request in milliseconds, when reported.
    pub fn db_runtime(&self) -> Option<f64> {
        self.payload.db_runtime
    }

    /// View rendering time for this request in milliseconds, when reported.
    pub fn view_runtime(&self) -> Option<f64> {
        self.payload.view_runtime
    }

    /// The controller that handled the request, when the payload names one.
    pub fn controller(&self) -> Option<&str> {
        self.payload.param_str("controller")
    }

    /// The action that handled the request, when the payload names one.
    pub fn action(&self) -> Option<&str> {
        self.payload.param_str("action")
    }

    /// Total wall-clock duration in milliseconds, rounded to the nearest
    /// whole number. Zero when either timestamp is missing or the pair is
    /// inconsistent (finish before start).
    pub fn total(&self) -> u64 {
        match (self.start, self.finish) {
            (Some(start), Some(finish)) => ((finish - start) * 1000.0).round().max(0.0) as u64,
            _ => 0,
        }
    }

    /// Emits the timing metrics for this request under
    /// `request.<controller>.<action>`.
    ///
    /// Requests that cannot be attributed to a controller/action pair are
    /// skipped without emitting anything. Attributed requests always emit
    /// `.total`; `.view` and `.db` follow when the payload reported those
    /// runtimes, and every `stats` entry is emitted under its own key.
    pub fn report(&self) {
        let (controller, action) = match (self.controller(), self.action()) {
            (Some(controller), Some(action)) => (controller, action),
            _ => {
                debug!(
                    "Request '{}' ({}) has no controller/action, skipping report",
                    self.name, self.request_id
                );
                return;
            }
        };

        let prefix = format!("request.{}.{}", controller, action);

        self.sink
            .timing(&format!("{}.total", prefix), self.total() as f64);

        if let Some(view_runtime) = self.view_runtime() {
            self.sink.timing(&format!("{}.view", prefix), view_runtime);
        }
        if let Some(db_runtime) = self.db_runtime() {
            self.sink.timing(&format!("{}.db", prefix), db_runtime);
        }
        for (key, value) in &self.stats {
            self.sink.timing(&format!("{}.{}", prefix, key), *value);
        }
    }
}
