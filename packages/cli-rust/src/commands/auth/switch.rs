use crate::commands::Context;
use crate::wizard::{Choice, ParamSpec};
use anyhow::Result;
use gcpilot_core::workflows::AuthWorkflow;

/// Make another credentialed account the active one
///
/// Having no other account is not an error; it only prints a hint.
pub fn cmd_auth_switch(account: Option<String>, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Switch Account");
    let auth = AuthWorkflow::new(ctx.gcloud);

    let account = match account {
        Some(account) => account,
        None => {
            let others = ctx.fetch("Fetching accounts...", || auth.list_accounts(true))?;
            if others.is_empty() {
                ctx.display.info("No other accounts available");
                ctx.display.info("Run \"gcpilot auth add-account\" to connect another account");
                return Ok(());
            }
            ctx.resolve(
                None,
                ParamSpec::Fixed {
                    prompt: "Select account to switch to:",
                    choices: others.into_iter().map(Choice::plain).collect(),
                    custom: None,
                },
            )?
        }
    };

    if !auth.switch_account(&account)? {
        return Err(ctx.fail(format!("Failed to switch to account \"{account}\"")));
    }
    ctx.display.success(&format!("Switched to account \"{account}\""));
    Ok(())
}
