//! Billing subcommand implementations

use super::Context;
use crate::output::status_style;
use crate::wizard::params;
use anyhow::Result;
use clap::{Args, Subcommand};
use gcpilot_core::workflows::BillingWorkflow;

/// Billing command arguments
#[derive(Args, Debug)]
pub struct BillingArgs {
    #[command(subcommand)]
    pub command: BillingCommands,
}

/// Billing subcommands
#[derive(Subcommand, Debug)]
pub enum BillingCommands {
    /// List billing accounts visible to the active account
    ListAccounts,
    /// Link a billing account to a project
    Link {
        /// GCP project ID
        #[arg(short, long)]
        project_id: Option<String>,
        /// Billing account ID
        #[arg(short, long)]
        billing_account: Option<String>,
    },
    /// Check whether billing is enabled for a project
    Check {
        /// GCP project ID
        #[arg(short, long)]
        project_id: Option<String>,
    },
}

/// Handle billing command
pub fn cmd_billing(args: BillingArgs, ctx: &Context<'_>) -> Result<()> {
    match args.command {
        BillingCommands::ListAccounts => cmd_billing_list_accounts(ctx),
        BillingCommands::Link {
            project_id,
            billing_account,
        } => cmd_billing_link(project_id, billing_account, ctx),
        BillingCommands::Check { project_id } => cmd_billing_check(project_id, ctx),
    }
}

fn cmd_billing_list_accounts(ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Billing Accounts");

    let billing = BillingWorkflow::new(ctx.gcloud);
    let accounts = ctx.fetch("Fetching billing accounts...", || billing.list_accounts())?;
    if accounts.is_empty() {
        ctx.display.info("No billing accounts found");
        return Ok(());
    }

    let rows = accounts
        .iter()
        .map(|account| {
            let status = if account.open { "Open" } else { "Closed" };
            vec![
                account.display_name.clone(),
                account.id().to_string(),
                status_style(status).to_string(),
            ]
        })
        .collect();
    ctx.display.table(&["Name", "Account ID", "Status"], rows);
    Ok(())
}

fn cmd_billing_link(
    project_id: Option<String>,
    billing_account: Option<String>,
    ctx: &Context<'_>,
) -> Result<()> {
    ctx.display.title("Link Billing Account");

    let project_id = ctx.project(project_id)?;
    let account = ctx.resolve(billing_account, params::billing_account(ctx.gcloud))?;

    if !ctx.proceed(&format!(
        "You are about to link billing account \"{account}\" to project \"{project_id}\""
    ))? {
        return Ok(());
    }

    if !BillingWorkflow::new(ctx.gcloud).link(&project_id, &account)? {
        return Err(ctx.fail("Failed to link billing account"));
    }
    ctx.display.success(&format!(
        "Successfully linked billing account \"{account}\" to project \"{project_id}\""
    ));
    Ok(())
}

fn cmd_billing_check(project_id: Option<String>, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Check Billing Status");

    let project_id = ctx.project(project_id)?;
    let billing = BillingWorkflow::new(ctx.gcloud);
    let enabled = ctx.fetch("Checking billing status...", || {
        billing.is_enabled(&project_id)
    })?;

    if enabled {
        ctx.display.success(&format!("Billing is enabled for project \"{project_id}\""));
    } else {
        ctx.display.warning(&format!("Billing is not enabled for project \"{project_id}\""));
        ctx.display.info("Run \"gcpilot billing link\" to link a billing account");
    }
    Ok(())
}
