use crate::gcloud::{CommandRunner, ServiceResult};
use crate::services::{AuthService, ProjectService};
use tracing::info;

/// Account and session handling
pub struct AuthWorkflow<'a> {
    auth: AuthService<'a>,
    projects: ProjectService<'a>,
}

impl<'a> AuthWorkflow<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self {
            auth: AuthService::new(gcloud),
            projects: ProjectService::new(gcloud),
        }
    }

    pub fn is_authenticated(&self) -> ServiceResult<bool> {
        info!("Checking authentication status");
        self.auth.is_authenticated()
    }

    pub fn login(&self) -> ServiceResult<bool> {
        info!("Starting browser login");
        self.auth.login()
    }

    pub fn current_account(&self) -> ServiceResult<Option<String>> {
        info!("Reading current account");
        self.auth.current_account()
    }

    pub fn list_accounts(&self, exclude_current: bool) -> ServiceResult<Vec<String>> {
        info!("Listing connected accounts");
        self.auth.list_accounts(exclude_current)
    }

    pub fn switch_account(&self, email: &str) -> ServiceResult<bool> {
        info!("Switching to account {email}");
        self.auth.switch_account(email)
    }

    pub fn logout(&self) -> ServiceResult<bool> {
        info!("Revoking all accounts");
        self.auth.logout()
    }

    pub fn add_account(&self) -> ServiceResult<bool> {
        info!("Adding a new account");
        self.auth.add_account()
    }

    pub fn list_projects(&self) -> ServiceResult<Vec<String>> {
        info!("Listing accessible projects");
        self.projects.list()
    }

    pub fn create_project(&self, project_id: &str) -> ServiceResult<bool> {
        info!("Creating new project {project_id}");
        self.projects.create(project_id, None, None)
    }

    pub fn use_project(&self, project_id: &str) -> ServiceResult<bool> {
        info!("Setting active project to {project_id}");
        self.projects.set_active(project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gcloud::args;
    use crate::testing::RecordingRunner;

    #[test]
    fn create_project_has_no_optional_flags() {
        let runner = RecordingRunner::new();
        assert_eq!(AuthWorkflow::new(&runner).create_project("my-proj-1"), Ok(true));
        assert_eq!(
            runner.calls()[0].args,
            args(["projects", "create", "my-proj-1"])
        );
    }

    #[test]
    fn use_project_sets_config() {
        let runner = RecordingRunner::new();
        AuthWorkflow::new(&runner).use_project("my-proj-1").unwrap();
        assert!(runner.calls()[0].contains(&["config", "set", "project", "my-proj-1"]));
    }
}
