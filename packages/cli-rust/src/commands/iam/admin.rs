//! IAM apply-admin subcommand
//!
//! Every role in the bundle is attempted even when an earlier one fails;
//! the command succeeds only if all of them were granted.

use super::{UserTarget, resolve_user};
use crate::commands::Context;
use anyhow::Result;
use gcpilot_core::roles::ADMIN_ROLES;
use gcpilot_core::workflows::IamWorkflow;

pub fn cmd_iam_apply_admin(target: UserTarget, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Apply Admin Roles");

    let (project_id, email) = resolve_user(target, ctx)?;

    ctx.display.section("Roles to be Added");
    let roles: Vec<String> = ADMIN_ROLES.iter().map(|role| role.to_string()).collect();
    ctx.display.list("Admin Roles", &roles);

    if !ctx.proceed("This will grant full administrative access to the user")? {
        return Ok(());
    }

    if !IamWorkflow::new(ctx.gcloud).apply_admin_roles(&project_id, &email)? {
        return Err(ctx.fail(format!(
            "Failed to apply one or more admin roles to user \"{email}\""
        )));
    }
    ctx.display.success(&format!(
        "Successfully applied admin roles to user \"{email}\" in project \"{project_id}\""
    ));
    Ok(())
}
