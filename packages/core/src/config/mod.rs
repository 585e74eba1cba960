//! Optional on-disk configuration
//!
//! gcpilot works without any config file. When `config.jsonc` exists it is
//! parsed as JSON with comments and trailing commas allowed, then checked by
//! [`validate_config`].

pub mod paths;
pub mod schema;
pub mod validation;

pub use paths::{get_config_dir, get_config_path};
pub use schema::Config;
pub use validation::{ValidationError, validate_config};

use jsonc_parser::ParseOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding the gcloud binary
pub const GCLOUD_ENV: &str = "GCPILOT_GCLOUD";

/// Errors raised while loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSONC in {}: {message}", .path.display())]
    Syntax { path: PathBuf, message: String },

    #[error("invalid config in {}: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for {} in {}: {}", .error.field, .path.display(), .error.message)]
    Invalid {
        path: PathBuf,
        error: ValidationError,
    },
}

impl ConfigError {
    /// File the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Syntax { path, .. }
            | Self::Schema { path, .. }
            | Self::Invalid { path, .. } => path,
        }
    }
}

/// Load and validate the config file at `path`
///
/// A missing file yields the defaults. An empty file (or one holding only
/// comments) is treated the same way.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let value = jsonc_parser::parse_to_serde_value(&text, &ParseOptions::default()).map_err(
        |e| ConfigError::Syntax {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    )?;

    let config = match value {
        Some(value) => {
            serde_json::from_value(value).map_err(|source| ConfigError::Schema {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => Config::default(),
    };

    validate_config(&config).map_err(|error| ConfigError::Invalid {
        path: path.to_path_buf(),
        error,
    })?;

    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load the config from its standard location, or the defaults when the
/// platform has no config directory
pub fn load_config_or_default() -> Result<Config, ConfigError> {
    match get_config_path() {
        Some(path) => load_config(&path),
        None => Ok(Config::default()),
    }
}

/// Pick the gcloud binary: explicit flag, then `GCPILOT_GCLOUD`, then the
/// config file
pub fn resolve_gcloud_path(flag: Option<&Path>, env: Option<&str>, config: &Config) -> PathBuf {
    if let Some(flag) = flag {
        return flag.to_path_buf();
    }
    match env.map(str::trim) {
        Some(env) if !env.is_empty() => PathBuf::from(env),
        _ => PathBuf::from(&config.gcloud_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join(paths::CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("absent.jsonc")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn comments_and_trailing_commas_are_accepted() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
                // custom SDK install
                "gcloud_path": "/opt/google-cloud-sdk/bin/gcloud",
                "show_banner": false,
            }"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.gcloud_path, "/opt/google-cloud-sdk/bin/gcloud");
        assert!(!config.show_banner);
        assert_eq!(config.bucket_locations, Config::default().bucket_locations);
    }

    #[test]
    fn comment_only_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "// nothing here yet\n");
        assert_eq!(load_config(&path).unwrap(), Config::default());
    }

    #[test]
    fn syntax_error_is_reported_with_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"show_banner": }"#);
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Syntax { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn unknown_field_is_a_schema_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"project": "demo"}"#);
        assert!(matches!(
            load_config(&path).unwrap_err(),
            ConfigError::Schema { .. }
        ));
    }

    #[test]
    fn invalid_value_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"bucket_locations": []}"#);
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("bucket_locations"));
    }

    #[test]
    fn gcloud_path_precedence() {
        let config = Config {
            gcloud_path: "/from/file".to_string(),
            ..Config::default()
        };

        assert_eq!(
            resolve_gcloud_path(Some(Path::new("/from/flag")), Some("/from/env"), &config),
            PathBuf::from("/from/flag")
        );
        assert_eq!(
            resolve_gcloud_path(None, Some("/from/env"), &config),
            PathBuf::from("/from/env")
        );
        assert_eq!(
            resolve_gcloud_path(None, Some(" "), &config),
            PathBuf::from("/from/file")
        );
        assert_eq!(
            resolve_gcloud_path(None, None, &config),
            PathBuf::from("/from/file")
        );
    }
}
