use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{ReportRequest, SqlQuery};
use crate::stats::RequestStat;
use crate::trackers::Tracker;

/// SqlTrackerConfig defines the data for the SQL statement tracker.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct SqlTrackerConfig {
    /// A friendly name for logs.
    pub name: String,
}

/// A `SqlTracker` that classifies the SQL events of a report into read,
/// write and cache counts, written into the request's stats table under
/// "sql.read", "sql.write" and "sql.cache".
pub struct SqlTracker {
    pub config: SqlTrackerConfig,
}

impl SqlTracker {
    /// Create a new `SqlTracker` from the config struct.
    pub fn new(config: &SqlTrackerConfig) -> Self {
        info!("Creating SqlTracker, name='{}'", config.name);
        Self {
            config: config.clone(),
        }
    }

    /// Classify one SQL event. An ORM cache hit (event name "CACHE") counts
    /// as "sql.cache"; otherwise the leading keyword of the statement
    /// decides. Statements with no recognised keyword are not counted.
    fn classify(query: &SqlQuery) -> Option<&'static str> {
        if query.name.as_deref() == Some("CACHE") {
            return Some("sql.cache");
        }
        let keyword = query.sql.split_whitespace().next()?;
        match keyword.to_ascii_lowercase().as_str() {
            "select" => Some("sql.read"),
            "insert" | "update" | "delete" => Some("sql.write"),
            _ => None,
        }
    }
}

impl Tracker for SqlTracker {
    /// Count the report's SQL events into the stats table. Categories that
    /// were never seen stay absent, so they are never emitted.
    fn track(&self, report: &ReportRequest, stat: &mut RequestStat) -> Result<(), String> {
        let mut counted = 0;
        for query in &report.queries {
            match Self::classify(query) {
                Some(key) => {
                    *stat.stats.entry(key.to_string()).or_insert(0.0) += 1.0;
                    counted += 1;
                }
                None => {
                    debug!(
                        event_name = "trackers.sql.unclassified",
                        event_domain = "trackers",
                        tracker_name = self.config.name.as_str(),
                        sql = query.sql.as_str(),
                        "skipping SQL event with no recognised keyword"
                    );
                }
            }
        }

        if counted > 0 {
            debug!(
                event_name = "trackers.sql.counted",
                event_domain = "trackers",
                tracker_name = self.config.name.as_str(),
                request_id = stat.request_id.as_str(),
                counted_queries = counted,
                "sql tracker counted queries"
            );
        }

        Ok(())
    }

    fn get_name(&self) -> &str {
        &self.config.name
    }

    fn get_type(&self) -> &str {
        "sql"
    }
}
