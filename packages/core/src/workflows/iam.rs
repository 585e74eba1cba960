use crate::gcloud::{CommandRunner, ServiceResult};
use crate::roles::{COMMON_ROLES, RoleInfo};
use crate::services::IamService;
use tracing::info;

pub struct IamWorkflow<'a> {
    iam: IamService<'a>,
}

impl<'a> IamWorkflow<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self {
            iam: IamService::new(gcloud),
        }
    }

    pub fn add_role(&self, project_id: &str, email: &str, role: &str) -> ServiceResult<bool> {
        info!("Adding role {role} to {email} in project {project_id}");
        self.iam.add_role(project_id, email, role)
    }

    pub fn remove_role(&self, project_id: &str, email: &str, role: &str) -> ServiceResult<bool> {
        info!("Removing role {role} from {email} in project {project_id}");
        self.iam.remove_role(project_id, email, role)
    }

    pub fn list_user_roles(&self, project_id: &str, email: &str) -> ServiceResult<Vec<String>> {
        info!("Listing roles of {email} in project {project_id}");
        self.iam.list_user_roles(project_id, email)
    }

    pub fn apply_admin_roles(&self, project_id: &str, email: &str) -> ServiceResult<bool> {
        info!("Applying admin roles to {email} in project {project_id}");
        self.iam.apply_admin_roles(project_id, email)
    }

    pub fn common_roles(&self) -> &'static [RoleInfo] {
        COMMON_ROLES
    }
}
