use super::{UserTarget, resolve_user};
use crate::commands::Context;
use crate::wizard::params;
use anyhow::Result;
use gcpilot_core::roles::find_role;
use gcpilot_core::workflows::IamWorkflow;

pub fn cmd_iam_add_role(target: UserTarget, role: Option<String>, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Add IAM Role");

    let (project_id, email) = resolve_user(target, ctx)?;
    let role = ctx.resolve(role, params::role())?;

    if !ctx.proceed(&format!(
        "You are about to add role \"{role}\" to user \"{email}\" in project \"{project_id}\""
    ))? {
        return Ok(());
    }

    if !IamWorkflow::new(ctx.gcloud).add_role(&project_id, &email, &role)? {
        return Err(ctx.fail("Failed to add role"));
    }
    ctx.display.success(&format!("Successfully added role \"{role}\" to user \"{email}\""));
    Ok(())
}

/// Remove a role; without `--role` the user picks from the roles they hold
pub fn cmd_iam_remove_role(
    target: UserTarget,
    role: Option<String>,
    ctx: &Context<'_>,
) -> Result<()> {
    ctx.display.title("Remove IAM Role");

    let (project_id, email) = resolve_user(target, ctx)?;
    let role = ctx.resolve(role, params::user_role(ctx.gcloud, &project_id, &email))?;

    if !ctx.proceed(&format!(
        "You are about to remove role \"{role}\" from user \"{email}\" in project \"{project_id}\""
    ))? {
        return Ok(());
    }

    if !IamWorkflow::new(ctx.gcloud).remove_role(&project_id, &email, &role)? {
        return Err(ctx.fail("Failed to remove role"));
    }
    ctx.display.success(&format!(
        "Successfully removed role \"{role}\" from user \"{email}\""
    ));
    Ok(())
}

pub fn cmd_iam_list_roles(target: UserTarget, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("List IAM Roles");

    let (project_id, email) = resolve_user(target, ctx)?;
    let iam = IamWorkflow::new(ctx.gcloud);
    let roles = ctx.fetch("Fetching roles...", || iam.list_user_roles(&project_id, &email))?;

    ctx.display.section(&format!("IAM Roles for \"{email}\" in project \"{project_id}\""));
    if roles.is_empty() {
        ctx.display.info("User has no roles in this project");
    } else {
        let labelled: Vec<String> = roles.iter().map(|role| describe_role(role)).collect();
        ctx.display.list("Roles", &labelled);
    }
    Ok(())
}

/// Append the catalog description for well-known roles
fn describe_role(role: &str) -> String {
    match find_role(role) {
        Some(info) => format!("{role} ({})", info.description),
        None => role.to_string(),
    }
}

pub fn cmd_iam_common_roles(ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Common IAM Roles");

    let rows = IamWorkflow::new(ctx.gcloud)
        .common_roles()
        .iter()
        .map(|role| vec![role.name.to_string(), role.description.to_string()])
        .collect();
    ctx.display.table(&["Role", "Description"], rows);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_roles_get_descriptions() {
        assert_eq!(
            describe_role("roles/viewer"),
            "roles/viewer (View access to all resources)"
        );
        assert_eq!(describe_role("roles/custom.thing"), "roles/custom.thing");
    }
}
