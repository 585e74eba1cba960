//! Auth subcommand implementations
//!
//! Provides `gcpilot auth` subcommands for login state, accounts and the
//! active project.

mod accounts;
mod check;
mod create_project;
mod login;
mod logout;
mod switch;

use super::Context;
use anyhow::Result;
use clap::{Args, Subcommand};

pub use accounts::{cmd_auth_add_account, cmd_auth_list_accounts, cmd_auth_list_projects};
pub use check::cmd_auth_check;
pub use create_project::cmd_auth_create_project;
pub use login::cmd_auth_login;
pub use logout::cmd_auth_logout;
pub use switch::cmd_auth_switch;

/// Authentication command arguments
#[derive(Args, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommands,
}

/// Authentication subcommands
#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Check if you are authenticated
    Check,
    /// Log in through the browser and select the active project
    Login {
        /// GCP project ID
        #[arg(short, long)]
        project_id: Option<String>,
    },
    /// List all connected accounts
    ListAccounts,
    /// List all accessible projects
    ListProjects,
    /// Create a new GCP project
    CreateProject {
        /// GCP project ID
        #[arg(short, long)]
        project_id: Option<String>,
    },
    /// Switch the active account
    Switch {
        /// Account email to switch to
        #[arg(short, long)]
        account: Option<String>,
    },
    /// Revoke credentials for all accounts
    Logout,
    /// Connect another account
    AddAccount,
}

/// Handle auth command
pub fn cmd_auth(args: AuthArgs, ctx: &Context<'_>) -> Result<()> {
    match args.command {
        AuthCommands::Check => cmd_auth_check(ctx),
        AuthCommands::Login { project_id } => cmd_auth_login(project_id, ctx),
        AuthCommands::ListAccounts => cmd_auth_list_accounts(ctx),
        AuthCommands::ListProjects => cmd_auth_list_projects(ctx),
        AuthCommands::CreateProject { project_id } => cmd_auth_create_project(project_id, ctx),
        AuthCommands::Switch { account } => cmd_auth_switch(account, ctx),
        AuthCommands::Logout => cmd_auth_logout(ctx),
        AuthCommands::AddAccount => cmd_auth_add_account(ctx),
    }
}
