use super::{PolicyTarget, resolve_policy};
use crate::commands::Context;
use crate::output::{enforcement_label, status_style};
use anyhow::Result;
use gcpilot_core::services::{OrgPolicy, PUBLIC_ACCESS_PREVENTION};
use gcpilot_core::workflows::OrgPolicyWorkflow;

pub fn cmd_org_policy_list(project_id: Option<String>, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Organization Policies");

    let project_id = ctx.project(project_id)?;
    let workflow = OrgPolicyWorkflow::new(ctx.gcloud);
    let policies = ctx.fetch("Fetching organization policies...", || {
        workflow.list(&project_id)
    })?;

    if policies.is_empty() {
        ctx.display.info("No policies found");
        return Ok(());
    }

    let rows = policies
        .iter()
        .map(|policy| {
            let has_exceptions = if policy.exceptions().is_empty() { "No" } else { "Yes" };
            vec![
                policy.constraint.clone(),
                status_style(enforcement_label(policy.enforced())).to_string(),
                has_exceptions.to_string(),
            ]
        })
        .collect();
    ctx.display.table(&["Policy Name", "Enforcement", "Has Exceptions"], rows);
    Ok(())
}

pub fn cmd_org_policy_get(target: PolicyTarget, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Organization Policy Details");

    let (project_id, constraint) = resolve_policy(target, ctx)?;
    let workflow = OrgPolicyWorkflow::new(ctx.gcloud);
    let Some(policy) = ctx.fetch("Fetching policy...", || workflow.get(&project_id, &constraint))?
    else {
        return Err(ctx.fail(format!("Policy \"{constraint}\" not found")));
    };

    let exceptions = policy.exceptions();
    ctx.display.properties(&[
        ("Name", policy.constraint.clone()),
        (
            "Enforcement",
            status_style(enforcement_label(policy.enforced())).to_string(),
        ),
        (
            "Update Time",
            policy.update_time.clone().unwrap_or_else(|| "-".to_string()),
        ),
        ("Exceptions", exceptions.len().to_string()),
    ]);
    if !exceptions.is_empty() {
        ctx.display.list("Exceptions", exceptions);
    }
    Ok(())
}

/// Show the public access prevention constraint and the gcloud commands
/// that relax it at organization level
pub fn cmd_org_policy_check_public_access(
    project_id: Option<String>,
    ctx: &Context<'_>,
) -> Result<()> {
    ctx.display.title("Public Access Prevention");

    let project_id = ctx.project(project_id)?;
    let workflow = OrgPolicyWorkflow::new(ctx.gcloud);
    let (org_id, policy) = ctx.fetch("Checking public access prevention policy...", || {
        Ok((
            workflow.organization_id()?,
            workflow.get(&project_id, PUBLIC_ACCESS_PREVENTION)?,
        ))
    })?;

    ctx.display.section("Current Policy Status");
    match &policy {
        Some(policy) => ctx.display.properties(&[
            ("Name", policy.constraint.clone()),
            (
                "Enforcement",
                status_style(enforcement_label(policy.enforced())).to_string(),
            ),
            ("Exceptions", policy.exceptions().len().to_string()),
        ]),
        None => ctx
            .display
            .info("Public access prevention is not set on this project"),
    }

    let Some(org_id) = org_id else {
        ctx.display.warning("No organization found; the policy can only be changed on a project");
        return Ok(());
    };

    ctx.display.section("Options to Modify the Policy");
    ctx.display.list(
        "Commands",
        &modify_hints(policy.as_ref(), &project_id, &org_id),
    );
    Ok(())
}

/// gcloud commands that relax public access prevention
///
/// Boolean constraints only take enforce/disable-enforce; allow values are
/// suggested when the policy is stored as a list policy.
fn modify_hints(policy: Option<&OrgPolicy>, project_id: &str, org_id: &str) -> Vec<String> {
    let mut hints = vec![
        format!(
            "Disable the restriction: gcloud resource-manager org-policies disable-enforce {PUBLIC_ACCESS_PREVENTION} --organization={org_id}"
        ),
        format!(
            "Disable it for this project only: gcloud resource-manager org-policies disable-enforce {PUBLIC_ACCESS_PREVENTION} --project={project_id}"
        ),
    ];
    if policy.is_some_and(|policy| policy.list_policy.is_some()) {
        hints.push(format!(
            "Add an exception for a bucket: gcloud resource-manager org-policies allow {PUBLIC_ACCESS_PREVENTION} //storage.googleapis.com/projects/_/buckets/BUCKET --organization={org_id}"
        ));
    }
    hints
}
