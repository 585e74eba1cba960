use crate::commands::Context;
use anyhow::Result;
use gcpilot_core::workflows::AuthWorkflow;

/// Report whether gcloud has an active credentialed account
pub fn cmd_auth_check(ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Check Authentication Status");

    let auth = AuthWorkflow::new(ctx.gcloud);
    let authenticated = ctx.fetch("Checking authentication status...", || {
        auth.is_authenticated()
    })?;

    if authenticated {
        ctx.display.success("You are authenticated with GCP");
        return Ok(());
    }

    let err = ctx.fail("You are not authenticated with GCP");
    ctx.display.info("Run \"gcpilot auth login\" to authenticate");
    Err(err)
}
