//! Configuration schema for gcpilot
//!
//! Defines the structure and defaults for the config.jsonc file.

use serde::{Deserialize, Serialize};

/// Main configuration structure for gcpilot
///
/// Read from `<config dir>/gcpilot/config.jsonc`. Every field is optional in
/// the file; missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path or name of the gcloud binary (default: "gcloud")
    #[serde(default = "default_gcloud_path")]
    pub gcloud_path: String,

    /// Locations offered when a bucket location is not given on the
    /// command line
    #[serde(default = "default_bucket_locations")]
    pub bucket_locations: Vec<String>,

    /// Print the banner before each command (default: true)
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

fn default_gcloud_path() -> String {
    "gcloud".to_string()
}

fn default_bucket_locations() -> Vec<String> {
    [
        "us-central1",
        "us-east1",
        "us-west1",
        "europe-west1",
        "asia-east1",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_show_banner() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gcloud_path: default_gcloud_path(),
            bucket_locations: default_bucket_locations(),
            show_banner: default_show_banner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.gcloud_path, "gcloud");
        assert_eq!(config.bucket_locations.len(), 5);
        assert_eq!(config.bucket_locations[0], "us-central1");
        assert!(config.show_banner);
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{"show_banner": false, "bucket_locations": ["europe-west4"]}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(!config.show_banner);
        assert_eq!(config.bucket_locations, vec!["europe-west4".to_string()]);
        assert_eq!(config.gcloud_path, "gcloud");
    }

    #[test]
    fn test_reject_unknown_fields() {
        let json = r#"{"gcloud_path": "gcloud", "unknown_field": "value"}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
