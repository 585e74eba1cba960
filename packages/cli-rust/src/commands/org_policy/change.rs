use super::{PolicyTarget, resolve_policy};
use crate::commands::Context;
use crate::wizard::params;
use anyhow::Result;
use gcpilot_core::workflows::OrgPolicyWorkflow;

/// Switch enforcement; asks when neither `--enforce` nor `--no-enforce`
/// was given
pub fn cmd_org_policy_set_enforcement(
    target: PolicyTarget,
    enforce: Option<bool>,
    ctx: &Context<'_>,
) -> Result<()> {
    ctx.display.title("Set Policy Enforcement");

    let (project_id, constraint) = resolve_policy(target, ctx)?;
    let enforce = match enforce {
        Some(enforce) => enforce,
        None => ctx.resolver().ask("Enable policy enforcement?", true)?,
    };
    let verb = if enforce { "enable" } else { "disable" };

    if !ctx.proceed(&format!(
        "You are about to {verb} enforcement for policy \"{constraint}\""
    ))? {
        return Ok(());
    }

    if !OrgPolicyWorkflow::new(ctx.gcloud).set_enforcement(&project_id, &constraint, enforce)? {
        return Err(ctx.fail(format!("Failed to {verb} policy enforcement")));
    }
    ctx.display.success(&format!(
        "Successfully {verb}d enforcement for policy \"{constraint}\""
    ));
    Ok(())
}

pub fn cmd_org_policy_add_exception(
    target: PolicyTarget,
    resource: Option<String>,
    ctx: &Context<'_>,
) -> Result<()> {
    ctx.display.title("Add Policy Exception");

    let (project_id, constraint) = resolve_policy(target, ctx)?;
    let resource = ctx.resolve(resource, params::resource_input())?;

    if !ctx.proceed(&format!(
        "You are about to add an exception for resource \"{resource}\" to policy \"{constraint}\""
    ))? {
        return Ok(());
    }

    if !OrgPolicyWorkflow::new(ctx.gcloud).add_exception(&project_id, &constraint, &resource)? {
        return Err(ctx.fail("Failed to add policy exception"));
    }
    ctx.display.success(&format!(
        "Successfully added exception for \"{resource}\" to policy \"{constraint}\""
    ));
    Ok(())
}
