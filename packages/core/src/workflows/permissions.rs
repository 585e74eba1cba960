use crate::gcloud::{CommandRunner, ServiceResult};
use crate::services::{PermissionCheck, PermissionsService};
use tracing::info;

pub struct PermissionsWorkflow<'a> {
    permissions: PermissionsService<'a>,
}

impl<'a> PermissionsWorkflow<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self {
            permissions: PermissionsService::new(gcloud),
        }
    }

    pub fn list(&self, project_id: &str) -> ServiceResult<Vec<String>> {
        info!("Listing permissions in project {project_id}");
        self.permissions.list(project_id)
    }

    pub fn check(
        &self,
        project_id: &str,
        permissions: &[String],
    ) -> ServiceResult<Vec<PermissionCheck>> {
        info!(
            "Checking {} permission(s) in project {project_id}",
            permissions.len()
        );
        self.permissions.check(project_id, permissions)
    }
}
