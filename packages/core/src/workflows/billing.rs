use crate::gcloud::{CommandRunner, ServiceResult};
use crate::services::{BillingAccount, BillingService};
use tracing::info;

pub struct BillingWorkflow<'a> {
    billing: BillingService<'a>,
}

impl<'a> BillingWorkflow<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self {
            billing: BillingService::new(gcloud),
        }
    }

    pub fn list_accounts(&self) -> ServiceResult<Vec<BillingAccount>> {
        info!("Listing billing accounts");
        self.billing.list_accounts()
    }

    pub fn link(&self, project_id: &str, account_id: &str) -> ServiceResult<bool> {
        info!("Linking billing account {account_id} to project {project_id}");
        self.billing.link(project_id, account_id)
    }

    pub fn is_enabled(&self, project_id: &str) -> ServiceResult<bool> {
        info!("Checking billing status for project {project_id}");
        self.billing.is_enabled(project_id)
    }
}
