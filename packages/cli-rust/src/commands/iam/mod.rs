//! IAM subcommand implementations
//!
//! Provides `gcpilot iam` subcommands for project-level role bindings of a
//! single user.

mod admin;
mod roles;

use super::Context;
use anyhow::Result;
use clap::{Args, Subcommand};

pub use admin::cmd_iam_apply_admin;
pub use roles::{cmd_iam_add_role, cmd_iam_common_roles, cmd_iam_list_roles, cmd_iam_remove_role};

/// IAM command arguments
#[derive(Args, Debug)]
pub struct IamArgs {
    #[command(subcommand)]
    pub command: IamCommands,
}

/// Project and user selection
#[derive(Args, Debug, Default)]
pub struct UserTarget {
    /// GCP project ID
    #[arg(short, long)]
    pub project_id: Option<String>,
    /// User email
    #[arg(short, long)]
    pub email: Option<String>,
}

/// IAM subcommands
#[derive(Subcommand, Debug)]
pub enum IamCommands {
    /// Grant a role to a user
    AddRole {
        #[command(flatten)]
        target: UserTarget,
        /// Role, e.g. roles/storage.admin
        #[arg(short, long)]
        role: Option<String>,
    },
    /// Remove a role from a user
    RemoveRole {
        #[command(flatten)]
        target: UserTarget,
        /// Role, e.g. roles/storage.admin
        #[arg(short, long)]
        role: Option<String>,
    },
    /// List the roles a user holds
    ListRoles(UserTarget),
    /// Grant the administrative role bundle to a user
    ApplyAdmin(UserTarget),
    /// Show the catalog of common roles
    CommonRoles,
}

/// Handle iam command
pub fn cmd_iam(args: IamArgs, ctx: &Context<'_>) -> Result<()> {
    match args.command {
        IamCommands::AddRole { target, role } => cmd_iam_add_role(target, role, ctx),
        IamCommands::RemoveRole { target, role } => cmd_iam_remove_role(target, role, ctx),
        IamCommands::ListRoles(target) => cmd_iam_list_roles(target, ctx),
        IamCommands::ApplyAdmin(target) => cmd_iam_apply_admin(target, ctx),
        IamCommands::CommonRoles => cmd_iam_common_roles(ctx),
    }
}

/// Project and email, prompting for whichever was not supplied
fn resolve_user(target: UserTarget, ctx: &Context<'_>) -> Result<(String, String)> {
    let project_id = ctx.project(target.project_id)?;
    let email = ctx.resolve(target.email, crate::wizard::params::email_input())?;
    Ok((project_id, email))
}
