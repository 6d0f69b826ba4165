//! Shared application state.
//!
//! Contains the state that is shared across all request handlers,
//! including configuration, the metrics sink, and the tracker chain.

use crate::config::ConfigV1;
use crate::sinks::Sink;
use crate::trackers::Tracker;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// This state is cloned for each request handler and contains
/// references to the configuration, the metrics sink, and the trackers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Metrics sink receiving every timing emission.
    pub sink: Arc<dyn Sink>,
    /// Trackers that derive extra stats for each reported request.
    pub trackers: Arc<Vec<Box<dyn Tracker>>>,
}
