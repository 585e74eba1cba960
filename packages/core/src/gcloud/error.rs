//! Error types for gcloud execution

use thiserror::Error;

/// Errors from running a gcloud invocation
#[derive(Debug, Error)]
pub enum GcloudError {
    /// The gcloud binary could not be found
    #[error(
        "gcloud CLI not found at '{program}'. Install the Google Cloud SDK: https://cloud.google.com/sdk/docs/install"
    )]
    NotInstalled { program: String },

    /// The process could not be started for another reason
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited non-zero
    #[error("`{command}` failed ({}){}", exit_label(.code), stderr_suffix(.stderr))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The user pressed Ctrl+C while the process was running
    #[error("Interrupted by user")]
    Interrupted,

    /// The process succeeded but printed something we could not parse
    #[error("Unexpected output from `{command}`: {source}")]
    Parse {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GcloudError {
    pub fn is_interrupt(&self) -> bool {
        matches!(self, GcloudError::Interrupted)
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let first = stderr.lines().find(|line| !line.trim().is_empty());
    match first {
        Some(line) => format!(": {}", line.trim()),
        None => String::new(),
    }
}

/// A user interrupt observed while a gcloud process was running
///
/// This is the only failure that crosses the service boundary; everything
/// else is logged and collapsed into the operation's default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Operation interrupted by user")]
pub struct Interrupted;

impl From<Interrupted> for GcloudError {
    fn from(_: Interrupted) -> Self {
        GcloudError::Interrupted
    }
}

/// Result type for service and workflow operations
pub type ServiceResult<T> = Result<T, Interrupted>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_error_includes_first_stderr_line() {
        let err = GcloudError::Failed {
            command: "gcloud projects list".to_string(),
            code: Some(1),
            stderr: "\nERROR: (gcloud.projects.list) permission denied\nmore".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("gcloud projects list"));
        assert!(msg.contains("exit code 1"));
        assert!(msg.contains("permission denied"));
        assert!(!msg.contains("more"));
    }

    #[test]
    fn failed_error_without_stderr() {
        let err = GcloudError::Failed {
            command: "gcloud auth list".to_string(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "`gcloud auth list` failed (terminated by signal)"
        );
    }

    #[test]
    fn not_installed_mentions_install_docs() {
        let err = GcloudError::NotInstalled {
            program: "gcloud".to_string(),
        };
        assert!(err.to_string().contains("cloud.google.com/sdk"));
    }

    #[test]
    fn interrupt_detection() {
        assert!(GcloudError::Interrupted.is_interrupt());
        assert!(GcloudError::from(Interrupted).is_interrupt());
        let err = GcloudError::NotInstalled {
            program: "gcloud".to_string(),
        };
        assert!(!err.is_interrupt());
    }
}
