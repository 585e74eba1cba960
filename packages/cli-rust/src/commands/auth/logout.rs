use crate::commands::Context;
use anyhow::Result;
use gcpilot_core::workflows::AuthWorkflow;

pub fn cmd_auth_logout(ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Logout");

    if !ctx.proceed("You are about to revoke credentials for all accounts")? {
        return Ok(());
    }

    if !AuthWorkflow::new(ctx.gcloud).logout()? {
        return Err(ctx.fail("Failed to log out"));
    }
    ctx.display.success("Successfully logged out of all accounts");
    Ok(())
}
