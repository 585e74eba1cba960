//! Configuration validation with actionable error messages
//!
//! Checks values that deserialize fine but would break commands later, and
//! says how to fix them.

use super::schema::Config;

/// A configuration validation error with a suggested fix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The config field that has an error
    pub field: String,
    /// Description of what's wrong
    pub message: String,
    /// What to change in the config file
    pub fix: String,
}

/// Validate configuration and return the first error
pub fn validate_config(config: &Config) -> Result<(), ValidationError> {
    if config.gcloud_path.trim().is_empty() {
        return Err(ValidationError {
            field: "gcloud_path".to_string(),
            message: "gcloud_path must not be empty".to_string(),
            fix: r#"set "gcloud_path": "gcloud" or remove the field"#.to_string(),
        });
    }

    if config.bucket_locations.is_empty() {
        return Err(ValidationError {
            field: "bucket_locations".to_string(),
            message: "bucket_locations must list at least one location".to_string(),
            fix: r#"set "bucket_locations": ["us-central1"] or remove the field"#.to_string(),
        });
    }

    if let Some(bad) = config
        .bucket_locations
        .iter()
        .find(|location| !is_location(location))
    {
        return Err(ValidationError {
            field: "bucket_locations".to_string(),
            message: format!("'{bad}' is not a valid bucket location"),
            fix: "use lowercase location names such as us-central1 or EU multi-regions like eu"
                .to_string(),
        });
    }

    Ok(())
}

fn is_location(location: &str) -> bool {
    !location.is_empty()
        && !location.starts_with('-')
        && !location.ends_with('-')
        && location
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_gcloud_path() {
        let config = Config {
            gcloud_path: "  ".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.field, "gcloud_path");
    }

    #[test]
    fn test_empty_locations() {
        let config = Config {
            bucket_locations: Vec::new(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.field, "bucket_locations");
    }

    #[test]
    fn test_bad_location_is_named() {
        let config = Config {
            bucket_locations: vec!["us-central1".to_string(), "US East".to_string()],
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.message.contains("US East"));
    }

    #[test]
    fn test_multi_region_accepted() {
        let config = Config {
            bucket_locations: vec!["eu".to_string(), "asia".to_string()],
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
