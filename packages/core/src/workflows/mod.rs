//! Workflows over the resource services
//!
//! A workflow method logs what it is about to do and delegates to one
//! service call. The exception is [`StorageWorkflow::create_bucket`], which
//! follows a successful creation with the public binding when requested.

mod auth;
mod billing;
mod iam;
mod org_policy;
mod permissions;
mod project;
mod storage;

pub use auth::AuthWorkflow;
pub use billing::BillingWorkflow;
pub use iam::IamWorkflow;
pub use org_policy::OrgPolicyWorkflow;
pub use permissions::PermissionsWorkflow;
pub use project::ProjectWorkflow;
pub use storage::StorageWorkflow;
