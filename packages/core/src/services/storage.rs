//! Cloud Storage buckets

use super::iam::IamPolicy;
use super::succeeded;
use crate::gcloud::{CommandRunner, ServiceResult, args, capture_json, capture_lines, settle};
use tracing::info;

/// Member granted read access when a bucket is made public
pub const PUBLIC_MEMBER: &str = "allUsers";

/// Role granted to [`PUBLIC_MEMBER`]
pub const PUBLIC_READER_ROLE: &str = "roles/storage.objectViewer";

/// Options for bucket creation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketOptions {
    pub project_id: String,
    pub location: Option<String>,
    pub storage_class: Option<String>,
    /// Create with uniform bucket-level access so it can be made public
    /// with a single binding afterwards
    pub public: bool,
}

pub struct StorageService<'a> {
    gcloud: &'a dyn CommandRunner,
}

impl<'a> StorageService<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self { gcloud }
    }

    pub fn create_bucket(&self, name: &str, options: &BucketOptions) -> ServiceResult<bool> {
        let mut command = args([
            "storage".to_string(),
            "buckets".to_string(),
            "create".to_string(),
            bucket_url(name),
            format!("--project={}", options.project_id),
        ]);
        if let Some(location) = &options.location {
            command.push(format!("--location={location}"));
        }
        if let Some(class) = &options.storage_class {
            command.push(format!("--default-storage-class={class}"));
        }
        if options.public {
            command.push("--uniform-bucket-level-access".to_string());
        }

        let created = succeeded(self.gcloud.inherit(&command), "create bucket")?;
        if created {
            info!("Bucket {name} created in project {}", options.project_id);
        }
        Ok(created)
    }

    /// Bucket names in a project
    pub fn list_buckets(&self, project_id: &str) -> ServiceResult<Vec<String>> {
        let result = capture_lines(
            self.gcloud,
            &args([
                "storage".to_string(),
                "buckets".to_string(),
                "list".to_string(),
                format!("--project={project_id}"),
                "--format=value(name)".to_string(),
            ]),
        );
        settle(result, "list buckets", Vec::new())
    }

    /// Grant anonymous read access to the bucket's objects
    pub fn make_public(&self, name: &str, project_id: &str) -> ServiceResult<bool> {
        let result = self.gcloud.capture(&public_binding_args(
            "add-iam-policy-binding",
            name,
            project_id,
        ));
        succeeded(result, "make bucket public")
    }

    /// Remove anonymous read access
    pub fn make_private(&self, name: &str, project_id: &str) -> ServiceResult<bool> {
        let result = self.gcloud.capture(&public_binding_args(
            "remove-iam-policy-binding",
            name,
            project_id,
        ));
        succeeded(result, "make bucket private")
    }

    /// True when the bucket policy grants anonymous object reads
    pub fn is_public(&self, project_id: &str, name: &str) -> ServiceResult<bool> {
        let result = capture_json::<IamPolicy>(
            self.gcloud,
            &args([
                "storage".to_string(),
                "buckets".to_string(),
                "get-iam-policy".to_string(),
                bucket_url(name),
                format!("--project={project_id}"),
                "--format=json".to_string(),
            ]),
        );
        settle(
            result.map(|policy| policy.grants(PUBLIC_READER_ROLE, PUBLIC_MEMBER)),
            "check bucket public status",
            false,
        )
    }
}

fn bucket_url(name: &str) -> String {
    format!("gs://{name}")
}

fn public_binding_args(verb: &str, name: &str, project_id: &str) -> Vec<String> {
    vec![
        "storage".to_string(),
        "buckets".to_string(),
        verb.to_string(),
        bucket_url(name),
        format!("--member={PUBLIC_MEMBER}"),
        format!("--role={PUBLIC_READER_ROLE}"),
        format!("--project={project_id}"),
    ]
}
