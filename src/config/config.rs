use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::sink::SinkConfig;
use crate::trackers::TrackerConfig;

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0, containing the sink, trackers, etc.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct ConfigV1 {
    pub sink: SinkConfig,
    #[serde(default)]
    pub trackers: Vec<TrackerConfig>,
    pub bind_address: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Load config from a YAML file named "config.yaml" in the current directory,
/// with overrides from STATOTRON_-prefixed environment variables
/// (nested keys split on "__", e.g. STATOTRON_LOGGING__LEVEL).
pub fn load_config() -> ConfigV1 {
    let figment = Figment::new()
        .merge(Yaml::file("./config.yaml"))
        .merge(Env::prefixed("STATOTRON_").split("__"));
    let config = match figment.extract::<Config>() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };
    match config {
        Config::ConfigV1(c) => c,
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_CONFIG: &str = r#"
version: "1.0.0"
sink:
  enabled: true
  type: "memory"
  name: "test sink"
bind_address: "127.0.0.1:8081"
"#;

    const FULL_CONFIG: &str = r#"
version: "1.0.0"
logging:
  level: "debug"
  format: "json"
sink:
  enabled: true
  type: "log"
  name: "timings to stdout"
trackers:
  - type: "sql"
    name: "SQL tracker"
bind_address: "0.0.0.0:3130"
"#;

    fn parse(yaml: &str) -> ConfigV1 {
        let config: Config = Figment::new()
            .merge(Yaml::string(yaml))
            .extract()
            .expect("Failed to parse config YAML");
        match config {
            Config::ConfigV1(c) => c,
        }
    }

    /// Test that a minimal config parses and falls back to default logging.
    #[test]
    fn test_minimal_config_defaults() {
        let config = parse(MINIMAL_CONFIG);
        assert_eq!(config.bind_address, "127.0.0.1:8081");
        assert!(config.trackers.is_empty());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "console");
    }

    /// Test that a full config parses the sink backend and tracker list.
    #[test]
    fn test_full_config() {
        let config = parse(FULL_CONFIG);
        assert!(config.sink.enabled);
        assert!(config.sink.backend.is_some());
        assert_eq!(config.trackers.len(), 1);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    /// Test that a disabled sink parses without any backend keys.
    #[test]
    fn test_disabled_sink_without_backend() {
        let yaml = r#"
version: "1.0.0"
sink:
  enabled: false
bind_address: "127.0.0.1:8081"
"#;
        let config = parse(yaml);
        assert!(!config.sink.enabled);
        assert!(config.sink.backend.is_none());
    }
}
