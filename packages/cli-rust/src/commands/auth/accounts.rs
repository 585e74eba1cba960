//! Account and project listings, and adding an account

use crate::commands::Context;
use anyhow::Result;
use gcpilot_core::workflows::AuthWorkflow;

pub fn cmd_auth_list_accounts(ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Connected Accounts");
    let auth = AuthWorkflow::new(ctx.gcloud);

    let accounts = ctx.fetch("Fetching accounts...", || auth.list_accounts(false))?;
    if accounts.is_empty() {
        ctx.display.info("No accounts connected");
        ctx.display.info("Run \"gcpilot auth login\" to connect an account");
        return Ok(());
    }

    let current = auth.current_account()?;
    let items: Vec<String> = accounts
        .into_iter()
        .map(|account| {
            if current.as_deref() == Some(account.as_str()) {
                format!("{account} (active)")
            } else {
                account
            }
        })
        .collect();
    ctx.display.list("Connected Accounts", &items);
    Ok(())
}

pub fn cmd_auth_list_projects(ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Accessible Projects");
    let auth = AuthWorkflow::new(ctx.gcloud);

    let projects = ctx.fetch("Fetching projects...", || auth.list_projects())?;
    if projects.is_empty() {
        ctx.display.info("No projects found");
        ctx.display.info("You may need to create a new project or request access to existing ones");
        return Ok(());
    }
    ctx.display.list("Available Projects", &projects);
    Ok(())
}

/// Credential an additional account through the browser
pub fn cmd_auth_add_account(ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Add Account");
    let auth = AuthWorkflow::new(ctx.gcloud);

    if !auth.add_account()? {
        return Err(ctx.fail("Failed to add account"));
    }
    ctx.display.success("Successfully added a new account");
    if let Some(account) = auth.current_account()? {
        ctx.display.info(&format!("Active account: {account}"));
    }
    Ok(())
}
