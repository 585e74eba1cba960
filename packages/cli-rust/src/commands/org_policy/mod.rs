//! Organization policy subcommand implementations

mod change;
mod view;

use super::Context;
use anyhow::Result;
use clap::{Args, Subcommand};

pub use change::{cmd_org_policy_add_exception, cmd_org_policy_set_enforcement};
pub use view::{cmd_org_policy_check_public_access, cmd_org_policy_get, cmd_org_policy_list};

/// Organization policy command arguments
#[derive(Args, Debug)]
pub struct OrgPolicyArgs {
    #[command(subcommand)]
    pub command: OrgPolicyCommands,
}

/// Project and constraint selection
#[derive(Args, Debug, Default)]
pub struct PolicyTarget {
    /// GCP project ID
    #[arg(short, long)]
    pub project_id: Option<String>,
    /// Constraint name, e.g. constraints/storage.publicAccessPrevention
    #[arg(short = 'n', long)]
    pub policy_name: Option<String>,
}

/// Organization policy subcommands
#[derive(Subcommand, Debug)]
pub enum OrgPolicyCommands {
    /// List policies set on a project
    List {
        /// GCP project ID
        #[arg(short, long)]
        project_id: Option<String>,
    },
    /// Show one policy
    Get(PolicyTarget),
    /// Turn enforcement of a boolean policy on or off
    SetEnforcement {
        #[command(flatten)]
        target: PolicyTarget,
        /// Enforce the policy
        #[arg(short, long, conflicts_with = "no_enforce")]
        enforce: bool,
        /// Stop enforcing the policy
        #[arg(long)]
        no_enforce: bool,
    },
    /// Allow a resource under a list policy
    AddException {
        #[command(flatten)]
        target: PolicyTarget,
        /// Full resource path, e.g. //storage.googleapis.com/projects/_/buckets/b
        #[arg(short, long)]
        resource: Option<String>,
    },
    /// Show the public access prevention policy and how to change it
    CheckPublicAccess {
        /// GCP project ID
        #[arg(short, long)]
        project_id: Option<String>,
    },
}

/// Handle org-policy command
pub fn cmd_org_policy(args: OrgPolicyArgs, ctx: &Context<'_>) -> Result<()> {
    match args.command {
        OrgPolicyCommands::List { project_id } => cmd_org_policy_list(project_id, ctx),
        OrgPolicyCommands::Get(target) => cmd_org_policy_get(target, ctx),
        OrgPolicyCommands::SetEnforcement {
            target,
            enforce,
            no_enforce,
        } => {
            let requested = match (enforce, no_enforce) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            cmd_org_policy_set_enforcement(target, requested, ctx)
        }
        OrgPolicyCommands::AddException { target, resource } => {
            cmd_org_policy_add_exception(target, resource, ctx)
        }
        OrgPolicyCommands::CheckPublicAccess { project_id } => {
            cmd_org_policy_check_public_access(project_id, ctx)
        }
    }
}

/// Project and constraint, prompting for whichever was not supplied
fn resolve_policy(target: PolicyTarget, ctx: &Context<'_>) -> Result<(String, String)> {
    let project_id = ctx.project(target.project_id)?;
    let constraint = ctx.resolve(
        target.policy_name,
        crate::wizard::params::policy(ctx.gcloud, &project_id),
    )?;
    Ok((project_id, constraint))
}
