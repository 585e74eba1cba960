use crate::gcloud::{CommandRunner, ServiceResult};
use crate::services::{OrgPolicy, OrgPolicyService};
use tracing::info;

pub struct OrgPolicyWorkflow<'a> {
    policies: OrgPolicyService<'a>,
}

impl<'a> OrgPolicyWorkflow<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self {
            policies: OrgPolicyService::new(gcloud),
        }
    }

    pub fn list(&self, project_id: &str) -> ServiceResult<Vec<OrgPolicy>> {
        info!("Listing organization policies for project {project_id}");
        self.policies.list(project_id)
    }

    pub fn get(&self, project_id: &str, constraint: &str) -> ServiceResult<Option<OrgPolicy>> {
        info!("Getting organization policy {constraint} for project {project_id}");
        self.policies.describe(project_id, constraint)
    }

    pub fn set_enforcement(
        &self,
        project_id: &str,
        constraint: &str,
        enforce: bool,
    ) -> ServiceResult<bool> {
        let action = if enforce { "Enabling" } else { "Disabling" };
        info!("{action} enforcement of {constraint} for project {project_id}");
        self.policies.set_enforcement(project_id, constraint, enforce)
    }

    pub fn add_exception(
        &self,
        project_id: &str,
        constraint: &str,
        resource: &str,
    ) -> ServiceResult<bool> {
        info!("Adding exception {resource} to {constraint} for project {project_id}");
        self.policies.add_exception(project_id, constraint, resource)
    }

    pub fn organization_id(&self) -> ServiceResult<Option<String>> {
        info!("Looking up organization ID");
        self.policies.organization_id()
    }
}
