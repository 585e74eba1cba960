use crate::gcloud::{CommandRunner, ServiceResult};
use crate::services::{BucketOptions, StorageService};
use tracing::{info, warn};

/// Bucket management
pub struct StorageWorkflow<'a> {
    storage: StorageService<'a>,
}

impl<'a> StorageWorkflow<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self {
            storage: StorageService::new(gcloud),
        }
    }

    /// Create a bucket, then make it public if requested
    ///
    /// The result reflects the creation only; a failed public binding is
    /// logged but does not turn a created bucket into a failure.
    pub fn create_bucket(&self, name: &str, options: &BucketOptions) -> ServiceResult<bool> {
        info!("Creating bucket {name} in project {}", options.project_id);
        let created = self.storage.create_bucket(name, options)?;

        if created && options.public {
            info!("Making bucket {name} public");
            if !self.storage.make_public(name, &options.project_id)? {
                warn!("Bucket {name} was created but could not be made public");
            }
        }
        Ok(created)
    }

    pub fn list_buckets(&self, project_id: &str) -> ServiceResult<Vec<String>> {
        info!("Listing buckets in project {project_id}");
        self.storage.list_buckets(project_id)
    }

    pub fn make_public(&self, name: &str, project_id: &str) -> ServiceResult<bool> {
        info!("Making bucket {name} public");
        self.storage.make_public(name, project_id)
    }

    pub fn make_private(&self, name: &str, project_id: &str) -> ServiceResult<bool> {
        info!("Making bucket {name} private");
        self.storage.make_private(name, project_id)
    }

    pub fn is_public(&self, project_id: &str, name: &str) -> ServiceResult<bool> {
        info!("Checking if bucket {name} is public in project {project_id}");
        self.storage.is_public(project_id, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;

    fn options(public: bool) -> BucketOptions {
        BucketOptions {
            project_id: "my-proj-1".to_string(),
            location: Some("us-central1".to_string()),
            storage_class: Some("STANDARD".to_string()),
            public,
        }
    }

    #[test]
    fn private_bucket_makes_no_binding() {
        let runner = RecordingRunner::new();
        let workflow = StorageWorkflow::new(&runner);
        assert_eq!(workflow.create_bucket("my-bucket-1", &options(false)), Ok(true));
        assert_eq!(runner.count(&["create"]), 1);
        assert_eq!(runner.count(&["add-iam-policy-binding"]), 0);
    }

    #[test]
    fn public_bucket_binds_after_create() {
        let runner = RecordingRunner::new();
        let workflow = StorageWorkflow::new(&runner);
        assert_eq!(workflow.create_bucket("my-bucket-1", &options(true)), Ok(true));

        assert_eq!(runner.count(&["create"]), 1);
        assert_eq!(runner.count(&["add-iam-policy-binding"]), 1);
        assert!(runner.position(&["create"]) < runner.position(&["add-iam-policy-binding"]));
    }

    #[test]
    fn failed_create_skips_binding() {
        let runner = RecordingRunner::new().fail(&["create"]);
        let workflow = StorageWorkflow::new(&runner);
        assert_eq!(workflow.create_bucket("my-bucket-1", &options(true)), Ok(false));
        assert_eq!(runner.count(&["add-iam-policy-binding"]), 0);
    }

    #[test]
    fn failed_binding_keeps_create_result() {
        let runner = RecordingRunner::new().fail(&["add-iam-policy-binding"]);
        let workflow = StorageWorkflow::new(&runner);
        assert_eq!(workflow.create_bucket("my-bucket-1", &options(true)), Ok(true));
    }
}
