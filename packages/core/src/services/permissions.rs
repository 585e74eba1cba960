//! Roles held by the active account

use super::auth::AuthService;
use super::iam::IamService;
use crate::gcloud::{CommandRunner, ServiceResult};
use tracing::warn;

/// Whether the active account holds one requested role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    pub permission: String,
    pub granted: bool,
}

pub struct PermissionsService<'a> {
    gcloud: &'a dyn CommandRunner,
}

impl<'a> PermissionsService<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self { gcloud }
    }

    /// Roles bound to the active account on `project_id`
    pub fn list(&self, project_id: &str) -> ServiceResult<Vec<String>> {
        let Some(account) = AuthService::new(self.gcloud).current_account()? else {
            warn!("No active account; cannot list permissions");
            return Ok(Vec::new());
        };

        let roles = IamService::new(self.gcloud).list_user_roles(project_id, &account)?;
        if roles.is_empty() {
            warn!("No permissions found for {account} on {project_id}");
        }
        Ok(roles)
    }

    /// Check each requested entry against [`list`](Self::list)
    pub fn check(
        &self,
        project_id: &str,
        permissions: &[String],
    ) -> ServiceResult<Vec<PermissionCheck>> {
        let held = self.list(project_id)?;
        Ok(permissions
            .iter()
            .map(|permission| PermissionCheck {
                permission: permission.clone(),
                granted: held.contains(permission),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;

    const POLICY: &str = r#"{"bindings": [
        {"role": "roles/owner", "members": ["user:a@b.com"]},
        {"role": "roles/viewer", "members": ["user:c@d.com"]}
    ]}"#;

    fn runner() -> RecordingRunner {
        RecordingRunner::new()
            .respond(&["get-value", "account"], "a@b.com\n")
            .respond(&["get-iam-policy", "p1"], POLICY)
    }

    #[test]
    fn list_returns_roles_of_active_account() {
        let runner = runner();
        assert_eq!(
            PermissionsService::new(&runner).list("p1"),
            Ok(vec!["roles/owner".to_string()])
        );
        assert_eq!(runner.position(&["get-value"]), Some(0));
    }

    #[test]
    fn list_without_account_skips_policy_fetch() {
        let runner = RecordingRunner::new().respond(&["get-value"], "(unset)");
        assert_eq!(PermissionsService::new(&runner).list("p1"), Ok(vec![]));
        assert_eq!(runner.count(&["get-iam-policy"]), 0);
    }

    #[test]
    fn check_reports_each_entry() {
        let runner = runner();
        let results = PermissionsService::new(&runner)
            .check("p1", &["roles/owner".to_string(), "roles/viewer".to_string()])
            .unwrap();
        assert_eq!(
            results,
            vec![
                PermissionCheck {
                    permission: "roles/owner".to_string(),
                    granted: true
                },
                PermissionCheck {
                    permission: "roles/viewer".to_string(),
                    granted: false
                },
            ]
        );
    }

    #[test]
    fn check_is_all_false_when_policy_unavailable() {
        let runner = RecordingRunner::new()
            .respond(&["get-value"], "a@b.com")
            .fail(&["get-iam-policy"]);
        let results = PermissionsService::new(&runner)
            .check("p1", &["roles/owner".to_string()])
            .unwrap();
        assert!(results.iter().all(|r| !r.granted));
    }
}
