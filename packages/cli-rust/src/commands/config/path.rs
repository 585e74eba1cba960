use crate::commands::Context;
use anyhow::{Context as _, Result};
use gcpilot_core::config;

/// Print where the config file is read from, and whether it exists
pub fn cmd_config_path(ctx: &Context<'_>) -> Result<()> {
    let path = config::get_config_path()
        .context("Could not determine the configuration directory")?;

    ctx.display.line(path.display().to_string());
    if !path.exists() && !ctx.quiet {
        ctx.display.info("The file does not exist yet; built-in defaults are in use");
    }
    Ok(())
}
