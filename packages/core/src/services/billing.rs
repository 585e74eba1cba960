//! Billing account linkage

use super::succeeded;
use crate::gcloud::{CommandRunner, ServiceResult, args, capture_json, settle};
use serde::Deserialize;

/// One entry of `gcloud billing accounts list --format=json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BillingAccount {
    /// Resource name, `billingAccounts/XXXXXX-XXXXXX-XXXXXX`
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub open: bool,
}

impl BillingAccount {
    /// Account id accepted by `--billing-account`
    pub fn id(&self) -> &str {
        self.name
            .strip_prefix("billingAccounts/")
            .unwrap_or(&self.name)
    }
}

/// Output of `gcloud billing projects describe --format=json`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BillingInfo {
    #[serde(default)]
    pub billing_enabled: bool,
}

pub struct BillingService<'a> {
    gcloud: &'a dyn CommandRunner,
}

impl<'a> BillingService<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self { gcloud }
    }

    pub fn list_accounts(&self) -> ServiceResult<Vec<BillingAccount>> {
        let result = capture_json::<Vec<BillingAccount>>(
            self.gcloud,
            &args(["billing", "accounts", "list", "--format=json"]),
        );
        settle(result, "list billing accounts", Vec::new())
    }

    pub fn link(&self, project_id: &str, account_id: &str) -> ServiceResult<bool> {
        let result = self.gcloud.inherit(&args([
            "billing".to_string(),
            "projects".to_string(),
            "link".to_string(),
            project_id.to_string(),
            format!("--billing-account={account_id}"),
        ]));
        succeeded(result, "link billing account")
    }

    pub fn is_enabled(&self, project_id: &str) -> ServiceResult<bool> {
        let result = capture_json::<BillingInfo>(
            self.gcloud,
            &args(["billing", "projects", "describe", project_id, "--format=json"]),
        );
        settle(
            result.map(|info| info.billing_enabled),
            "check billing status",
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Mode, RecordingRunner};

    #[test]
    fn list_accounts_parses_entries() {
        let runner = RecordingRunner::new().respond(
            &["accounts", "list"],
            r#"[{"name": "billingAccounts/0X0X0X-0X0X0X-0X0X0X", "displayName": "Main", "open": true}]"#,
        );
        let accounts = BillingService::new(&runner).list_accounts().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id(), "0X0X0X-0X0X0X-0X0X0X");
        assert_eq!(accounts[0].display_name, "Main");
        assert!(accounts[0].open);
    }

    #[test]
    fn list_accounts_defaults_to_empty() {
        let runner = RecordingRunner::new().fail(&["accounts"]);
        assert_eq!(BillingService::new(&runner).list_accounts(), Ok(vec![]));
    }

    #[test]
    fn link_is_interactive() {
        let runner = RecordingRunner::new();
        assert_eq!(BillingService::new(&runner).link("p1", "ABC-123"), Ok(true));
        let calls = runner.calls();
        assert_eq!(calls[0].mode, Mode::Inherit);
        assert_eq!(
            calls[0].args,
            args(["billing", "projects", "link", "p1", "--billing-account=ABC-123"])
        );
    }

    #[test]
    fn is_enabled_reads_flag() {
        let runner = RecordingRunner::new().respond(
            &["describe"],
            r#"{"billingEnabled": true, "billingAccountName": "billingAccounts/ABC", "projectId": "p1"}"#,
        );
        assert_eq!(BillingService::new(&runner).is_enabled("p1"), Ok(true));

        let runner = RecordingRunner::new().respond(&["describe"], r#"{"projectId": "p1"}"#);
        assert_eq!(BillingService::new(&runner).is_enabled("p1"), Ok(false));

        let runner = RecordingRunner::new().fail(&["describe"]);
        assert_eq!(BillingService::new(&runner).is_enabled("p1"), Ok(false));
    }
}
