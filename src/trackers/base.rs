use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::sql_tracker::{SqlTracker, SqlTrackerConfig};
use crate::models::ReportRequest;
use crate::stats::RequestStat;

/// Configuration options for trackers (e.g. a SQL statement tracker).
#[derive(Deserialize, Serialize, JsonSchema, Debug)]
#[serde(tag = "type")]
pub enum TrackerConfig {
    #[serde(rename = "sql")]
    SqlTrackerConfig(SqlTrackerConfig),
}

/// A tracker can derive extra stats entries for a request before it is
/// reported, writing values into the RequestStat's stats table.
pub trait Tracker: Send + Sync {
    fn get_name(&self) -> &str;
    fn get_type(&self) -> &str;
    fn track(&self, report: &ReportRequest, stat: &mut RequestStat) -> Result<(), String>;
}

/// Create a tracker from a given config.
pub fn create_tracker(config: &TrackerConfig) -> Box<dyn Tracker> {
    match config {
        TrackerConfig::SqlTrackerConfig(cfg) => Box::new(SqlTracker::new(cfg)),
    }
}
