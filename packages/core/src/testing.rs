//! Test doubles for the command runner
//!
//! [`RecordingRunner`] records every invocation and answers from canned
//! rules, so tests can assert exactly which gcloud calls were made without
//! a real cloud environment.

use crate::gcloud::{CommandRunner, GCLOUD_PROGRAM, GcloudError};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// How an invocation was executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Capture,
    Inherit,
}

/// A recorded gcloud invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub mode: Mode,
    pub args: Vec<String>,
}

impl Invocation {
    /// True when every needle appears among the arguments
    pub fn contains(&self, needles: &[&str]) -> bool {
        needles
            .iter()
            .all(|needle| self.args.iter().any(|arg| arg == needle))
    }

    pub fn command_line(&self) -> String {
        self.args.join(" ")
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Output(String),
    Fail(String),
    Interrupt,
}

#[derive(Debug, Clone)]
struct Rule {
    needles: Vec<String>,
    reply: Reply,
}

impl Rule {
    fn matches(&self, args: &[String]) -> bool {
        self.needles
            .iter()
            .all(|needle| args.iter().any(|arg| arg == needle))
    }
}

/// A [`CommandRunner`] that records calls and returns canned replies
///
/// Rules are checked in registration order; the first rule whose needles
/// all appear among the arguments wins. Unmatched invocations succeed with
/// empty output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    rules: Vec<Rule>,
    calls: RefCell<Vec<Invocation>>,
    program: Option<PathBuf>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `program` as the gcloud binary in use
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Reply with `output` to invocations containing all `needles`
    pub fn respond(mut self, needles: &[&str], output: &str) -> Self {
        self.push(needles, Reply::Output(output.to_string()));
        self
    }

    /// Fail invocations containing all `needles` with a non-zero exit
    pub fn fail(mut self, needles: &[&str]) -> Self {
        self.push(needles, Reply::Fail("simulated failure".to_string()));
        self
    }

    /// Report invocations containing all `needles` as interrupted by Ctrl+C
    pub fn interrupt(mut self, needles: &[&str]) -> Self {
        self.push(needles, Reply::Interrupt);
        self
    }

    fn push(&mut self, needles: &[&str], reply: Reply) {
        self.rules.push(Rule {
            needles: needles.iter().map(|s| s.to_string()).collect(),
            reply,
        });
    }

    /// All invocations so far, in order
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Number of invocations containing all `needles`
    pub fn count(&self, needles: &[&str]) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.contains(needles))
            .count()
    }

    /// Index of the first invocation containing all `needles`
    pub fn position(&self, needles: &[&str]) -> Option<usize> {
        self.calls
            .borrow()
            .iter()
            .position(|call| call.contains(needles))
    }

    fn answer(&self, mode: Mode, args: &[String]) -> Result<String, GcloudError> {
        self.calls.borrow_mut().push(Invocation {
            mode,
            args: args.to_vec(),
        });

        let rule = self.rules.iter().find(|rule| rule.matches(args));
        match rule.map(|rule| &rule.reply) {
            None => Ok(String::new()),
            Some(Reply::Output(output)) => Ok(output.clone()),
            Some(Reply::Fail(stderr)) => Err(GcloudError::Failed {
                command: format!("gcloud {}", args.join(" ")),
                code: Some(1),
                stderr: stderr.clone(),
            }),
            Some(Reply::Interrupt) => Err(GcloudError::Interrupted),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn capture(&self, args: &[String]) -> Result<String, GcloudError> {
        self.answer(Mode::Capture, args)
    }

    fn inherit(&self, args: &[String]) -> Result<(), GcloudError> {
        self.answer(Mode::Inherit, args).map(|_| ())
    }

    fn program(&self) -> &Path {
        self.program
            .as_deref()
            .unwrap_or_else(|| Path::new(GCLOUD_PROGRAM))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gcloud::args;

    #[test]
    fn first_matching_rule_wins() {
        let runner = RecordingRunner::new()
            .fail(&["--role=roles/owner"])
            .respond(&["projects"], "ok");

        assert!(
            runner
                .capture(&args(["projects", "add-iam-policy-binding", "--role=roles/owner"]))
                .is_err()
        );
        assert_eq!(runner.capture(&args(["projects", "list"])).unwrap(), "ok");
    }

    #[test]
    fn unmatched_calls_succeed_empty() {
        let runner = RecordingRunner::new();
        assert_eq!(runner.capture(&args(["auth", "list"])).unwrap(), "");
        assert!(runner.inherit(&args(["auth", "login"])).is_ok());
    }

    #[test]
    fn records_mode_and_order() {
        let runner = RecordingRunner::new().interrupt(&["login"]);
        let _ = runner.capture(&args(["auth", "list"]));
        let err = runner.inherit(&args(["auth", "login"])).unwrap_err();

        assert!(err.is_interrupt());
        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].mode, Mode::Capture);
        assert_eq!(calls[1].mode, Mode::Inherit);
        assert_eq!(runner.position(&["login"]), Some(1));
        assert_eq!(runner.count(&["auth"]), 2);
    }
}
