//! Centralized error formatting
//!
//! Consistent, actionable messages for gcloud and config errors, plus the
//! [`Reported`] marker used once an error banner has already been shown.

use super::Display;
use console::style;
use gcpilot_core::{ConfigError, GcloudError};
use thiserror::Error;

/// Failure whose error banner has already been shown
///
/// The top level exits 1 without printing anything else.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct Reported(pub String);

/// Show an error banner and return the matching [`Reported`] error
pub fn report(display: &Display, message: impl Into<String>) -> anyhow::Error {
    let message = message.into();
    display.error(&message);
    Reported(message).into()
}

/// Format a failed gcloud precheck with installation guidance
pub fn format_gcloud_error(e: &GcloudError) -> String {
    match e {
        GcloudError::NotInstalled { program } => {
            format!(
                "{}\n\n  {}\n  {}\n  {}\n\n  {}: {}",
                style("gcloud CLI not found").red().bold(),
                format_args!("Could not run '{program}'. Install the Google Cloud SDK:"),
                style("  https://cloud.google.com/sdk/docs/install").cyan(),
                "or point gcpilot at an existing install with --gcloud <PATH>.",
                style("Env").dim(),
                style("GCPILOT_GCLOUD=/path/to/gcloud").dim()
            )
        }
        _ => e.to_string(),
    }
}

/// Format config loading errors with the file path and a fix hint
pub fn format_config_error(e: &ConfigError) -> String {
    let hint = match e {
        ConfigError::Invalid { error, .. } => format!("Fix: {}", error.fix),
        ConfigError::Syntax { .. } | ConfigError::Schema { .. } => {
            "Fix the file or delete it to use the defaults.".to_string()
        }
        ConfigError::Read { .. } => "Check the file's permissions.".to_string(),
    };
    format!(
        "{}\n\n  {}\n  {}\n\n  {}: {}",
        style("Invalid configuration").red().bold(),
        e,
        style(hint).cyan(),
        style("File").dim(),
        style(e.path().display()).dim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcpilot_core::config::ValidationError;
    use std::path::PathBuf;

    #[test]
    fn format_not_installed() {
        let msg = format_gcloud_error(&GcloudError::NotInstalled {
            program: "gcloud".to_string(),
        });
        assert!(msg.contains("gcloud CLI not found"));
        assert!(msg.contains("--gcloud"));
    }

    #[test]
    fn format_other_failures_plainly() {
        let err = GcloudError::Failed {
            command: "gcloud x".to_string(),
            code: Some(2),
            stderr: String::new(),
        };
        assert_eq!(format_gcloud_error(&err), err.to_string());
    }

    #[test]
    fn format_config_error_includes_fix_and_path() {
        let err = ConfigError::Invalid {
            path: PathBuf::from("/tmp/gcpilot/config.jsonc"),
            error: ValidationError {
                field: "bucket_locations".to_string(),
                message: "bucket_locations must list at least one location".to_string(),
                fix: "add a location".to_string(),
            },
        };
        let msg = format_config_error(&err);
        assert!(msg.contains("Fix: add a location"));
        assert!(msg.contains("/tmp/gcpilot/config.jsonc"));
    }

    #[test]
    fn report_shows_banner_and_marks_error() {
        let (display, buffer) = Display::buffered();
        let err = report(&display, "No projects found");
        assert!(buffer.contents().contains("✗ No projects found"));
        assert!(err.downcast_ref::<Reported>().is_some());
    }
}
