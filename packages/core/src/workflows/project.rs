use crate::gcloud::{CommandRunner, ServiceResult};
use crate::services::{Organization, ProjectInfo, ProjectService};
use tracing::info;

/// Project lifecycle
pub struct ProjectWorkflow<'a> {
    projects: ProjectService<'a>,
}

impl<'a> ProjectWorkflow<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self {
            projects: ProjectService::new(gcloud),
        }
    }

    pub fn list(&self) -> ServiceResult<Vec<String>> {
        info!("Listing projects");
        self.projects.list()
    }

    pub fn info(&self, project_id: &str) -> ServiceResult<Option<ProjectInfo>> {
        info!("Getting details for project {project_id}");
        self.projects.describe(project_id)
    }

    pub fn create(
        &self,
        project_id: &str,
        name: Option<&str>,
        organization: Option<&str>,
    ) -> ServiceResult<bool> {
        info!("Creating project {project_id}");
        self.projects.create(project_id, name, organization)
    }

    pub fn delete(&self, project_id: &str) -> ServiceResult<bool> {
        info!("Deleting project {project_id}");
        self.projects.delete(project_id)
    }

    pub fn list_organizations(&self) -> ServiceResult<Vec<Organization>> {
        info!("Listing organizations");
        self.projects.list_organizations()
    }
}
