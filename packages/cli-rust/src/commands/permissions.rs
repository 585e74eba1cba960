//! Permissions subcommand implementations
//!
//! The permissions held by the active account are the roles bound to it on
//! the project; `check` compares requested entries against that set.

use super::Context;
use crate::output::status_style;
use crate::wizard::Choice;
use anyhow::Result;
use clap::{Args, Subcommand};
use gcpilot_core::validation::parse_list;
use gcpilot_core::workflows::PermissionsWorkflow;

/// Permissions command arguments
#[derive(Args, Debug)]
pub struct PermissionsArgs {
    #[command(subcommand)]
    pub command: PermissionsCommands,
}

/// Permissions subcommands
#[derive(Subcommand, Debug)]
pub enum PermissionsCommands {
    /// List permissions of the active account on a project
    List {
        /// GCP project ID
        #[arg(short, long)]
        project_id: Option<String>,
    },
    /// Check specific permissions
    Check {
        /// GCP project ID
        #[arg(short, long)]
        project_id: Option<String>,
        /// Comma-separated list of permissions to check
        #[arg(short = 'r', long)]
        permissions: Option<String>,
    },
}

/// Handle permissions command
pub fn cmd_permissions(args: PermissionsArgs, ctx: &Context<'_>) -> Result<()> {
    match args.command {
        PermissionsCommands::List { project_id } => cmd_permissions_list(project_id, ctx),
        PermissionsCommands::Check {
            project_id,
            permissions,
        } => cmd_permissions_check(project_id, permissions, ctx),
    }
}

fn cmd_permissions_list(project_id: Option<String>, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("List Permissions");

    let project_id = ctx.project(project_id)?;
    let workflow = PermissionsWorkflow::new(ctx.gcloud);
    let permissions = ctx.fetch("Fetching permissions...", || workflow.list(&project_id))?;

    if permissions.is_empty() {
        ctx.display.info("No permissions found");
    } else {
        ctx.display.list("Permissions", &permissions);
    }
    Ok(())
}

fn cmd_permissions_check(
    project_id: Option<String>,
    permissions: Option<String>,
    ctx: &Context<'_>,
) -> Result<()> {
    ctx.display.title("Check Permissions");

    let project_id = ctx.project(project_id)?;
    let workflow = PermissionsWorkflow::new(ctx.gcloud);

    let requested = match permissions.as_deref().map(parse_list) {
        Some(list) if !list.is_empty() => list,
        _ => {
            let available = ctx.fetch("Fetching permissions...", || workflow.list(&project_id))?;
            if available.is_empty() {
                return Err(ctx.fail("No permissions available to check"));
            }
            let choices: Vec<Choice> = available.into_iter().map(Choice::plain).collect();
            ctx.resolver()
                .multi_select("Select permissions to check:", &choices)?
        }
    };

    let results = ctx.fetch("Checking permissions...", || {
        workflow.check(&project_id, &requested)
    })?;

    ctx.display.section("Permission Check Results");
    let rows = results
        .into_iter()
        .map(|check| {
            let verdict = if check.granted { "Granted" } else { "Denied" };
            vec![check.permission, status_style(verdict).to_string()]
        })
        .collect();
    ctx.display.table(&["Permission", "Result"], rows);
    Ok(())
}
