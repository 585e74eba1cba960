//! Organization policy constraints on a project

use super::succeeded;
use crate::gcloud::{CommandRunner, ServiceResult, args, capture_json, capture_lines, settle};
use serde::Deserialize;

/// Constraint that blocks public bucket access
pub const PUBLIC_ACCESS_PREVENTION: &str = "constraints/storage.publicAccessPrevention";

/// A policy as printed by `gcloud resource-manager org-policies`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrgPolicy {
    pub constraint: String,
    #[serde(default)]
    pub boolean_policy: Option<BooleanPolicy>,
    #[serde(default)]
    pub list_policy: Option<ListPolicy>,
    #[serde(default)]
    pub update_time: Option<String>,
    #[serde(default)]
    pub etag: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BooleanPolicy {
    #[serde(default)]
    pub enforced: bool,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListPolicy {
    #[serde(default)]
    pub allowed_values: Vec<String>,
}

impl OrgPolicy {
    /// Enforcement of a boolean constraint, `None` for list constraints
    pub fn enforced(&self) -> Option<bool> {
        self.boolean_policy.as_ref().map(|policy| policy.enforced)
    }

    /// Resources explicitly allowed by a list constraint
    pub fn exceptions(&self) -> &[String] {
        self.list_policy
            .as_ref()
            .map(|policy| policy.allowed_values.as_slice())
            .unwrap_or_default()
    }
}

pub struct OrgPolicyService<'a> {
    gcloud: &'a dyn CommandRunner,
}

impl<'a> OrgPolicyService<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self { gcloud }
    }

    /// Policies set on a project
    pub fn list(&self, project_id: &str) -> ServiceResult<Vec<OrgPolicy>> {
        let result = capture_json::<Vec<OrgPolicy>>(
            self.gcloud,
            &policy_args(["list"], project_id, true),
        );
        settle(result, "list organization policies", Vec::new())
    }

    pub fn describe(&self, project_id: &str, constraint: &str) -> ServiceResult<Option<OrgPolicy>> {
        let result = capture_json::<OrgPolicy>(
            self.gcloud,
            &policy_args(["describe", constraint], project_id, true),
        );
        settle(
            result.map(Some),
            &format!("get organization policy {constraint}"),
            None,
        )
    }

    pub fn set_enforcement(
        &self,
        project_id: &str,
        constraint: &str,
        enforce: bool,
    ) -> ServiceResult<bool> {
        let verb = if enforce {
            "enable-enforce"
        } else {
            "disable-enforce"
        };
        let result = self
            .gcloud
            .capture(&policy_args([verb, constraint], project_id, false));
        succeeded(result, &format!("set enforcement of {constraint}"))
    }

    /// Allow `resource` under a list constraint
    pub fn add_exception(
        &self,
        project_id: &str,
        constraint: &str,
        resource: &str,
    ) -> ServiceResult<bool> {
        let result = self
            .gcloud
            .capture(&policy_args(["allow", constraint, resource], project_id, false));
        succeeded(result, &format!("add exception to {constraint}"))
    }

    /// Id of the first organization visible to the active account
    pub fn organization_id(&self) -> ServiceResult<Option<String>> {
        let result = capture_lines(
            self.gcloud,
            &args(["organizations", "list", "--format=value(ID)"]),
        );
        settle(
            result.map(|lines| lines.into_iter().next()),
            "get organization ID",
            None,
        )
    }
}

fn policy_args<const N: usize>(verb: [&str; N], project_id: &str, json: bool) -> Vec<String> {
    let mut command = args(["resource-manager", "org-policies"]);
    command.extend(verb.iter().map(|part| part.to_string()));
    command.push(format!("--project={project_id}"));
    if json {
        command.push("--format=json".to_string());
    }
    command
}
