use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::payload::RequestPayload;

/// One SQL event observed while the request ran, as reported by the
/// instrumentation layer.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SqlQuery {
    /// Event name assigned by the ORM, e.g. "User Load" or "CACHE".
    #[serde(default)]
    pub name: Option<String>,
    /// The SQL text. Only the leading keyword is inspected.
    pub sql: String,
}

/// The wire model for one completed request.
///
/// Every field is optional on the wire. Incomplete reports are accepted and
/// simply produce fewer metrics downstream.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ReportRequest {
    /// Free-form label for the request, used in logs only.
    #[serde(default)]
    pub name: String,
    /// Wall-clock start of the request, in epoch seconds.
    #[serde(default)]
    pub start: Option<f64>,
    /// Wall-clock end of the request, in epoch seconds.
    #[serde(default)]
    pub finish: Option<f64>,
    /// Correlation identifier. Frameworks send either a string or a number;
    /// use [`ReportRequest::request_id`] for the normalized form.
    #[serde(default)]
    pub request_id: Option<Value>,
    #[serde(default)]
    pub payload: RequestPayload,
    /// Pre-counted metric suffixes (e.g. "cache.read") that are merged into
    /// the request's stats verbatim.
    #[serde(default)]
    pub stats: HashMap<String, f64>,
    /// Raw SQL events for the SQL tracker to classify.
    #[serde(default)]
    pub queries: Vec<SqlQuery>,
}

impl ReportRequest {
    /// Returns the correlation id as a string, generating a fresh UUID when
    /// the report carried none (or carried something unusable).
    pub fn request_id(&self) -> String {
        match &self.request_id {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => Uuid::new_v4().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Test that an empty JSON object is a valid (if useless) report.
    #[test]
    fn test_empty_report_deserializes() {
        let report: ReportRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(report.name, "");
        assert!(report.start.is_none());
        assert!(report.finish.is_none());
        assert!(report.stats.is_empty());
        assert!(report.queries.is_empty());
    }

    /// Test that a string correlation id is passed through unchanged.
    #[test]
    fn test_request_id_keeps_strings() {
        let report: ReportRequest =
            serde_json::from_value(json!({ "request_id": "1234" })).unwrap();
        assert_eq!(report.request_id(), "1234");
    }

    /// Test that a numeric correlation id is stringified.
    #[test]
    fn test_request_id_stringifies_numbers() {
        let report: ReportRequest = serde_json::from_value(json!({ "request_id": 1234 })).unwrap();
        assert_eq!(report.request_id(), "1234");
    }

    /// Test that a missing correlation id gets a generated UUID.
    #[test]
    fn test_request_id_generated_when_absent() {
        let report: ReportRequest = serde_json::from_str("{}").unwrap();
        let id = report.request_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    /// Test that an unusable correlation id (e.g. an object) also gets a
    /// generated UUID instead of an error.
    #[test]
    fn test_request_id_generated_for_unusable_values() {
        let report: ReportRequest =
            serde_json::from_value(json!({ "request_id": { "nested": true } })).unwrap();
        assert!(Uuid::parse_str(&report.request_id()).is_ok());
    }

    /// Test that a full report round-trips its interesting fields.
    #[test]
    fn test_full_report_deserializes() {
        let report: ReportRequest = serde_json::from_value(json!({
            "name": "request",
            "start": 1000.0,
            "finish": 1001.0,
            "request_id": "1234",
            "payload": {
                "params": { "controller": "foo", "action": "index" },
                "db_runtime": 100.2,
                "view_runtime": 70.1
            },
            "stats": { "cache.read": 25.0 },
            "queries": [ { "name": "User Load", "sql": "SELECT * FROM users" } ]
        }))
        .unwrap();
        assert_eq!(report.start, Some(1000.0));
        assert_eq!(report.finish, Some(1001.0));
        assert_eq!(report.payload.db_runtime, Some(100.2));
        assert_eq!(report.payload.param_str("action"), Some("index"));
        assert_eq!(report.stats.get("cache.read"), Some(&25.0));
        assert_eq!(report.queries[0].sql, "SELECT * FROM users");
    }
}
