//! IAM role bindings on projects

use super::{succeeded, user_member};
use crate::gcloud::{CommandRunner, ServiceResult, args, capture_json, settle};
use crate::roles::ADMIN_ROLES;
use serde::Deserialize;
use tracing::{info, warn};

/// IAM policy as printed by `get-iam-policy --format=json`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct IamPolicy {
    #[serde(default)]
    pub bindings: Vec<Binding>,
    #[serde(default)]
    pub etag: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Binding {
    pub role: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl IamPolicy {
    /// Roles bound to `member`, in policy order
    pub fn roles_for(&self, member: &str) -> Vec<String> {
        self.bindings
            .iter()
            .filter(|binding| binding.members.iter().any(|m| m == member))
            .map(|binding| binding.role.clone())
            .collect()
    }

    /// True when `role` is granted to `member`
    pub fn grants(&self, role: &str, member: &str) -> bool {
        self.bindings
            .iter()
            .any(|binding| binding.role == role && binding.members.iter().any(|m| m == member))
    }
}

pub struct IamService<'a> {
    gcloud: &'a dyn CommandRunner,
}

impl<'a> IamService<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self { gcloud }
    }

    pub fn add_role(&self, project_id: &str, email: &str, role: &str) -> ServiceResult<bool> {
        let added = succeeded(
            self.gcloud
                .capture(&binding_args("add-iam-policy-binding", project_id, email, role)),
            "add role",
        )?;
        if added {
            info!("Role {role} added to {email}");
        }
        Ok(added)
    }

    pub fn remove_role(&self, project_id: &str, email: &str, role: &str) -> ServiceResult<bool> {
        let removed = succeeded(
            self.gcloud.capture(&binding_args(
                "remove-iam-policy-binding",
                project_id,
                email,
                role,
            )),
            "remove role",
        )?;
        if removed {
            info!("Role {role} removed from {email}");
        }
        Ok(removed)
    }

    /// Fetch the project's IAM policy
    pub fn policy(&self, project_id: &str) -> ServiceResult<Option<IamPolicy>> {
        let result = capture_json::<IamPolicy>(
            self.gcloud,
            &args(["projects", "get-iam-policy", project_id, "--format=json"]),
        );
        settle(result.map(Some), "read the IAM policy", None)
    }

    /// Roles bound directly to `user:<email>`
    pub fn list_user_roles(&self, project_id: &str, email: &str) -> ServiceResult<Vec<String>> {
        Ok(self
            .policy(project_id)?
            .map(|policy| policy.roles_for(&user_member(email)))
            .unwrap_or_default())
    }

    /// Grant every admin role, continuing past individual failures
    ///
    /// Returns true only when every grant succeeded.
    pub fn apply_admin_roles(&self, project_id: &str, email: &str) -> ServiceResult<bool> {
        let mut all_applied = true;
        for role in ADMIN_ROLES {
            if !self.add_role(project_id, email, role)? {
                warn!("Failed to add role {role} to {email}");
                all_applied = false;
            }
        }
        Ok(all_applied)
    }
}

fn binding_args(verb: &str, project_id: &str, email: &str, role: &str) -> Vec<String> {
    vec![
        "projects".to_string(),
        verb.to_string(),
        project_id.to_string(),
        format!("--member={}", user_member(email)),
        format!("--role={role}"),
        "--format=none".to_string(),
    ]
}
