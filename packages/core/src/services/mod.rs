//! Resource services
//!
//! One service per resource family. Each method builds a single gcloud
//! invocation, runs it through the injected [`CommandRunner`], and parses
//! the output. Failures are logged and replaced by the method's default
//! (`false`, `None` or an empty list); only [`Interrupted`] reaches the
//! caller.
//!
//! [`CommandRunner`]: crate::gcloud::CommandRunner
//! [`Interrupted`]: crate::gcloud::Interrupted

mod auth;
mod billing;
mod iam;
mod org_policy;
mod permissions;
mod project;
mod storage;

pub use auth::{AccountEntry, AuthService};
pub use billing::{BillingAccount, BillingInfo, BillingService};
pub use iam::{Binding, IamPolicy, IamService};
pub use org_policy::{
    BooleanPolicy, ListPolicy, OrgPolicy, OrgPolicyService, PUBLIC_ACCESS_PREVENTION,
};
pub use permissions::{PermissionCheck, PermissionsService};
pub use project::{Organization, Parent, ProjectInfo, ProjectService};
pub use storage::{BucketOptions, StorageService, PUBLIC_MEMBER, PUBLIC_READER_ROLE};

use crate::gcloud::{GcloudError, ServiceResult, settle};

/// Collapse a mutating invocation into a success flag
fn succeeded<T>(result: Result<T, GcloudError>, action: &str) -> ServiceResult<bool> {
    settle(result.map(|_| true), action, false)
}

/// `user:` member string for an email
pub fn user_member(email: &str) -> String {
    format!("user:{email}")
}
