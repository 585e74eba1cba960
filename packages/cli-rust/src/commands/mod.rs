//! CLI command implementations
//!
//! One module per resource group. Every handler follows the same steps:
//! resolve missing parameters, pass a confirmation gate when the action
//! changes something, call the workflow, and render the outcome.

mod auth;
mod billing;
mod config;
mod iam;
mod org_policy;
mod permissions;
mod project;
mod storage;

pub use auth::{AuthArgs, cmd_auth};
pub use billing::{BillingArgs, cmd_billing};
pub use config::{ConfigArgs, cmd_config};
pub use iam::{IamArgs, cmd_iam};
pub use org_policy::{OrgPolicyArgs, cmd_org_policy};
pub use permissions::{PermissionsArgs, cmd_permissions};
pub use project::{ProjectArgs, cmd_project};
pub use storage::{StorageArgs, cmd_storage};

use crate::output::{Display, report, with_spinner};
use crate::wizard::{Gate, ParamSpec, Prompter, Resolver, params};
use anyhow::Result;
use gcpilot_core::{CommandRunner, Config, ServiceResult};

/// Everything a command handler needs
pub struct Context<'a> {
    pub gcloud: &'a dyn CommandRunner,
    pub prompter: &'a dyn Prompter,
    pub display: &'a Display,
    pub config: &'a Config,
    pub quiet: bool,
}

impl<'a> Context<'a> {
    pub fn resolver(&self) -> Resolver<'a> {
        Resolver::new(self.prompter, self.display, self.quiet)
    }

    pub fn resolve(&self, supplied: Option<String>, spec: ParamSpec<'_>) -> Result<String> {
        self.resolver().resolve(supplied, spec)
    }

    /// Flag value or a pick from the accessible projects
    pub fn project(&self, supplied: Option<String>) -> Result<String> {
        self.resolve(supplied, params::project(self.gcloud, "Select a project:"))
    }

    /// Run a confirmation gate; a decline prints "Operation cancelled"
    ///
    /// Returns true when the caller may go ahead.
    pub fn proceed(&self, warning: &str) -> Result<bool> {
        match self.resolver().gate(warning)? {
            Gate::Proceed => Ok(true),
            Gate::Declined => {
                self.display.info("Operation cancelled");
                Ok(false)
            }
        }
    }

    /// Run a capture-mode workflow call behind a spinner
    pub fn fetch<T>(&self, loading: &str, call: impl FnOnce() -> ServiceResult<T>) -> Result<T> {
        Ok(with_spinner(loading, self.quiet, call)?)
    }

    /// Show an error banner and fail the command
    pub fn fail(&self, message: impl Into<String>) -> anyhow::Error {
        report(self.display, message)
    }
}
