//! gcpilot-core - gcloud execution, resource services, and workflows
//!
//! This crate holds everything below the interactive layer:
//! - [`gcloud`]: the injected command runner that executes gcloud
//! - [`services`]: one service per resource family, each building a single
//!   gcloud invocation per operation and parsing its output
//! - [`workflows`]: thin orchestration over the services
//! - [`validation`]: identifier validators used by the prompt layer
//! - [`roles`]: the static IAM role catalog
//! - [`config`]: optional on-disk configuration

pub mod config;
pub mod gcloud;
pub mod roles;
pub mod services;
pub mod validation;
pub mod workflows;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{Config, ConfigError, load_config, load_config_or_default};
pub use gcloud::{CommandRunner, GcloudCli, GcloudError, Interrupted, ServiceResult};

/// Get the version of gcpilot-core
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version_returns_valid_version() {
        let version = get_version();
        assert!(!version.is_empty());
        let parts: Vec<&str> = version.split('.').collect();
        assert_eq!(parts.len(), 3, "Version should be X.Y.Z format");
    }
}
