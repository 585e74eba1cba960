//! Project subcommand implementations

mod create;
mod delete;
mod info;
mod list;

use super::Context;
use anyhow::Result;
use clap::{Args, Subcommand};

pub use create::cmd_project_create;
pub use delete::cmd_project_delete;
pub use info::cmd_project_info;
pub use list::cmd_project_list;

/// Project command arguments
#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub command: ProjectCommands,
}

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List all accessible projects
    List,
    /// Create a new project
    Create {
        /// GCP project ID
        #[arg(short, long)]
        project_id: Option<String>,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Organization ID to create the project under
        #[arg(short, long)]
        organization: Option<String>,
    },
    /// Delete a project
    Delete {
        /// GCP project ID
        #[arg(short, long)]
        project_id: Option<String>,
    },
    /// Show project details
    Info {
        /// GCP project ID
        #[arg(short, long)]
        project_id: Option<String>,
    },
}

/// Handle project command
pub fn cmd_project(args: ProjectArgs, ctx: &Context<'_>) -> Result<()> {
    match args.command {
        ProjectCommands::List => cmd_project_list(ctx),
        ProjectCommands::Create {
            project_id,
            name,
            organization,
        } => cmd_project_create(project_id, name, organization, ctx),
        ProjectCommands::Delete { project_id } => cmd_project_delete(project_id, ctx),
        ProjectCommands::Info { project_id } => cmd_project_info(project_id, ctx),
    }
}
