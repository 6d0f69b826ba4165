use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The free-form payload a web framework attaches to a completed request.
///
/// Every key is optional. Lookups on missing or mistyped entries yield
/// absence, never an error, so incomplete reports degrade to fewer metrics.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RequestPayload {
    /// Request parameters as seen by the framework router. May contain
    /// "controller" and "action" string entries identifying the handler.
    #[serde(default)]
    pub params: Option<Map<String, Value>>,
    /// Time spent in the database for this request, in milliseconds.
    #[serde(default)]
    pub db_runtime: Option<f64>,
    /// Time spent rendering views for this request, in milliseconds.
    #[serde(default)]
    pub view_runtime: Option<f64>,
}

impl RequestPayload {
    /// Looks up a string-valued entry in `params`. Missing params, a missing
    /// key, or a non-string value all yield None.
    pub fn param_str(&self, key: &str) -> Option<&str> {
        self.params.as_ref()?.get(key)?.as_str()
    }
}
