//! Account authentication

use super::succeeded;
use crate::gcloud::{CommandRunner, ServiceResult, args, capture_json, settle};
use serde::Deserialize;
use tracing::info;

/// One entry of `gcloud auth list --format=json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AccountEntry {
    pub account: String,
}

pub struct AuthService<'a> {
    gcloud: &'a dyn CommandRunner,
}

impl<'a> AuthService<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self { gcloud }
    }

    /// True when at least one credentialed account is active
    pub fn is_authenticated(&self) -> ServiceResult<bool> {
        let result = capture_json::<Vec<AccountEntry>>(
            self.gcloud,
            &args(["auth", "list", "--filter=status:ACTIVE", "--format=json"]),
        );
        settle(
            result.map(|accounts| !accounts.is_empty()),
            "check authentication",
            false,
        )
    }

    /// Run the browser login flow, then confirm an account became active
    pub fn login(&self) -> ServiceResult<bool> {
        let result = self
            .gcloud
            .inherit(&args(["auth", "login", "--launch-browser"]));
        if !succeeded(result, "authenticate")? {
            return Ok(false);
        }
        self.is_authenticated()
    }

    /// The account gcloud currently uses, if one is configured
    pub fn current_account(&self) -> ServiceResult<Option<String>> {
        let result = self
            .gcloud
            .capture(&args(["config", "get-value", "account"]))
            .map(|output| parse_config_value(&output));
        settle(result, "read the current account", None)
    }

    /// Credentialed account emails, optionally without the current one
    pub fn list_accounts(&self, exclude_current: bool) -> ServiceResult<Vec<String>> {
        let result = capture_json::<Vec<AccountEntry>>(
            self.gcloud,
            &args(["auth", "list", "--format=json"]),
        );
        let accounts: Vec<String> = settle(
            result.map(|entries| entries.into_iter().map(|e| e.account).collect()),
            "list accounts",
            Vec::new(),
        )?;

        if !exclude_current {
            return Ok(accounts);
        }
        let current = self.current_account()?;
        Ok(accounts
            .into_iter()
            .filter(|account| Some(account) != current.as_ref())
            .collect())
    }

    pub fn switch_account(&self, email: &str) -> ServiceResult<bool> {
        let result = self
            .gcloud
            .capture(&args(["config", "set", "account", email]));
        let switched = succeeded(result, "switch account")?;
        if switched {
            info!("Active account set to {email}");
        }
        Ok(switched)
    }

    /// Revoke every credentialed account
    pub fn logout(&self) -> ServiceResult<bool> {
        let result = self
            .gcloud
            .inherit(&args(["auth", "revoke", "--all", "--quiet"]));
        succeeded(result, "log out")
    }

    /// Credential one more account without changing the login check
    pub fn add_account(&self) -> ServiceResult<bool> {
        let result = self
            .gcloud
            .inherit(&args(["auth", "login", "--launch-browser"]));
        succeeded(result, "add account")
    }
}

/// Interpret `gcloud config get-value` output
///
/// gcloud prints nothing or `(unset)` when the property has no value.
pub(crate) fn parse_config_value(output: &str) -> Option<String> {
    let value = output.lines().next().unwrap_or_default().trim();
    if value.is_empty() || value == "(unset)" {
        None
    } else {
        Some(value.to_string())
    }
}
