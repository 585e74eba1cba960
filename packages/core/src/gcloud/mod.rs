//! gcloud subprocess execution
//!
//! Every cloud operation goes through a [`CommandRunner`]. The production
//! runner, [`GcloudCli`], spawns the gcloud binary with an argument array
//! (no shell is involved) and waits for it to finish. Two modes exist:
//! - capture: stdout/stderr are piped and stdout is returned as text
//! - inherit: the terminal is handed to gcloud so it can show its own
//!   prompts (browser login, confirmation output)

mod error;

pub use error::{GcloudError, Interrupted, ServiceResult};

use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, warn};

/// Program name resolved through `PATH` when nothing else is configured
pub const GCLOUD_PROGRAM: &str = "gcloud";

/// Exit code shells report for a child terminated by SIGINT
const SIGINT_EXIT_CODE: i32 = 130;

/// Executes gcloud invocations
///
/// Implementations receive the arguments only; the program is owned by the
/// runner. Tests substitute a recording implementation.
pub trait CommandRunner {
    /// Run gcloud with piped output and return stdout
    fn capture(&self, args: &[String]) -> Result<String, GcloudError>;

    /// Run gcloud attached to the user's terminal
    fn inherit(&self, args: &[String]) -> Result<(), GcloudError>;

    /// Program shown in logs and error messages
    fn program(&self) -> &Path {
        Path::new(GCLOUD_PROGRAM)
    }
}

/// Runner that shells out to the real gcloud binary
#[derive(Debug, Clone)]
pub struct GcloudCli {
    program: PathBuf,
}

impl GcloudCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Return the first line of `gcloud --version`
    ///
    /// Used as an installation precheck before any command runs.
    pub fn version(&self) -> Result<String, GcloudError> {
        let output = self.capture(&args(["--version"]))?;
        Ok(output.lines().next().unwrap_or_default().trim().to_string())
    }

    fn spawn_error(&self, err: std::io::Error) -> GcloudError {
        let program = self.program.display().to_string();
        if err.kind() == ErrorKind::NotFound {
            GcloudError::NotInstalled { program }
        } else {
            GcloudError::Spawn {
                program,
                source: err,
            }
        }
    }
}

impl Default for GcloudCli {
    fn default() -> Self {
        Self::new(GCLOUD_PROGRAM)
    }
}

impl CommandRunner for GcloudCli {
    fn program(&self) -> &Path {
        &self.program
    }

    fn capture(&self, args: &[String]) -> Result<String, GcloudError> {
        let command = render_command(&self.program, args);
        debug!("Executing (captured): {command}");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(status_error(command, output.status, stderr))
    }

    fn inherit(&self, args: &[String]) -> Result<(), GcloudError> {
        let command = render_command(&self.program, args);
        debug!("Executing (interactive): {command}");

        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| self.spawn_error(e))?;

        if status.success() {
            Ok(())
        } else {
            Err(status_error(command, status, String::new()))
        }
    }
}

fn status_error(command: String, status: ExitStatus, stderr: String) -> GcloudError {
    if was_interrupted(status) {
        return GcloudError::Interrupted;
    }
    GcloudError::Failed {
        command,
        code: status.code(),
        stderr,
    }
}

#[cfg(unix)]
fn was_interrupted(status: ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(libc::SIGINT) || status.code() == Some(SIGINT_EXIT_CODE)
}

#[cfg(not(unix))]
fn was_interrupted(status: ExitStatus) -> bool {
    status.code() == Some(SIGINT_EXIT_CODE)
}

/// Build an owned argument vector
pub fn args<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parts.into_iter().map(Into::into).collect()
}

/// Render a program and its arguments for logs and error messages
///
/// Arguments containing whitespace are single-quoted so the text can be
/// pasted back into a shell.
pub fn render_command(program: &Path, args: &[String]) -> String {
    let mut rendered = program.display().to_string();
    for arg in args {
        rendered.push(' ');
        if arg.is_empty() || arg.chars().any(char::is_whitespace) {
            rendered.push('\'');
            rendered.push_str(&arg.replace('\'', r"'\''"));
            rendered.push('\'');
        } else {
            rendered.push_str(arg);
        }
    }
    rendered
}

/// Capture an invocation and deserialize its JSON output
pub fn capture_json<T: DeserializeOwned>(
    runner: &dyn CommandRunner,
    args: &[String],
) -> Result<T, GcloudError> {
    let output = runner.capture(args)?;
    serde_json::from_str(&output).map_err(|source| GcloudError::Parse {
        command: render_command(runner.program(), args),
        source,
    })
}

/// Capture an invocation and split its output into non-empty trimmed lines
pub fn capture_lines(
    runner: &dyn CommandRunner,
    args: &[String],
) -> Result<Vec<String>, GcloudError> {
    let output = runner.capture(args)?;
    Ok(output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Collapse a gcloud failure into the operation's default value
///
/// Interrupts are the exception: they are returned as [`Interrupted`] so the
/// caller can end the whole run quietly.
pub fn settle<T>(result: Result<T, GcloudError>, action: &str, default: T) -> ServiceResult<T> {
    match result {
        Ok(value) => Ok(value),
        Err(GcloudError::Interrupted) => Err(Interrupted),
        Err(err) => {
            warn!("Failed to {action}: {err}");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_command_quotes_whitespace() {
        let rendered = render_command(
            Path::new("gcloud"),
            &args(["projects", "create", "demo-proj", "--name=My Project"]),
        );
        assert_eq!(
            rendered,
            "gcloud projects create demo-proj '--name=My Project'"
        );
    }

    #[test]
    fn render_command_escapes_single_quotes() {
        let rendered = render_command(Path::new("gcloud"), &args(["it's here"]));
        assert_eq!(rendered, r"gcloud 'it'\''s here'");
    }

    #[test]
    fn settle_passes_values_through() {
        let value = settle(Ok(vec![1, 2]), "list things", Vec::new());
        assert_eq!(value, Ok(vec![1, 2]));
    }

    #[test]
    fn settle_collapses_failures_to_default() {
        let failure = GcloudError::Failed {
            command: "gcloud projects list".to_string(),
            code: Some(1),
            stderr: String::new(),
        };
        assert_eq!(settle(Err(failure), "list projects", false), Ok(false));
    }

    #[test]
    fn settle_keeps_interrupts() {
        let result: ServiceResult<bool> = settle(Err(GcloudError::Interrupted), "login", false);
        assert_eq!(result, Err(Interrupted));
    }

    #[test]
    fn missing_binary_reports_not_installed() {
        let cli = GcloudCli::new("/nonexistent/gcpilot-test/gcloud");
        let err = cli.capture(&args(["--version"])).unwrap_err();
        assert!(matches!(err, GcloudError::NotInstalled { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn capture_returns_stdout_of_real_process() {
        let cli = GcloudCli::new("echo");
        let output = cli.capture(&args(["hello", "world"])).unwrap();
        assert_eq!(output.trim(), "hello world");
    }

    #[cfg(unix)]
    #[test]
    fn parse_errors_name_the_configured_program() {
        let cli = GcloudCli::new("echo");
        let err = capture_json::<Vec<String>>(&cli, &args(["not-json"])).unwrap_err();
        match err {
            GcloudError::Parse { command, .. } => assert_eq!(command, "echo not-json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn capture_reports_nonzero_exit() {
        let cli = GcloudCli::new("false");
        let err = cli.capture(&[]).unwrap_err();
        match err {
            GcloudError::Failed { code, .. } => assert_eq!(code, Some(1)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn exit_code_130_is_treated_as_interrupt() {
        let cli = GcloudCli::new("sh");
        let err = cli.capture(&args(["-c", "exit 130"])).unwrap_err();
        assert!(err.is_interrupt());
    }
}
