//! Auth login subcommand
//!
//! Authenticates first (gcloud owns the terminal for the browser flow),
//! then picks the project to make active.

use crate::commands::Context;
use anyhow::Result;
use gcpilot_core::workflows::AuthWorkflow;

pub fn cmd_auth_login(project_id: Option<String>, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("GCP Authentication");
    let auth = AuthWorkflow::new(ctx.gcloud);

    if !auth.login()? {
        return Err(ctx.fail("Failed to authenticate with GCP"));
    }

    let project_id = ctx.project(project_id)?;
    if !auth.use_project(&project_id)? {
        return Err(ctx.fail(format!(
            "Failed to set \"{project_id}\" as the active project"
        )));
    }

    let account = auth.current_account()?.unwrap_or_else(|| "-".to_string());
    ctx.display.success("Successfully authenticated with GCP");
    ctx.display.properties(&[
        ("Account", account),
        ("Project ID", project_id),
        ("Status", "Authenticated".to_string()),
    ]);
    Ok(())
}
