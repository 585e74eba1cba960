//! Config subcommand implementations
//!
//! Provides `gcpilot config` subcommands for viewing the configuration file.

mod path;
mod show;

use super::Context;
use anyhow::Result;
use clap::{Args, Subcommand};

pub use path::cmd_config_path;
pub use show::cmd_config_show;

/// Configuration command arguments
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON instead of table format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommands {
    /// Show current configuration
    Show {
        /// Output as JSON instead of table format
        #[arg(long)]
        json: bool,
    },
    /// Print the config file location
    Path,
}

/// Handle config command
///
/// If no subcommand is given, defaults to Show.
pub fn cmd_config(args: ConfigArgs, ctx: &Context<'_>) -> Result<()> {
    match args.command {
        Some(ConfigSubcommands::Show { json }) => cmd_config_show(ctx, json),
        Some(ConfigSubcommands::Path) => cmd_config_path(ctx),
        None => cmd_config_show(ctx, args.json),
    }
}
