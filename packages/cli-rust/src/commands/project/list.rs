use crate::commands::Context;
use anyhow::Result;
use gcpilot_core::workflows::ProjectWorkflow;

pub fn cmd_project_list(ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("List Projects");

    let workflow = ProjectWorkflow::new(ctx.gcloud);
    let projects = ctx.fetch("Fetching projects...", || workflow.list())?;

    if projects.is_empty() {
        ctx.display.info("No projects found");
        ctx.display.info("You may need to create a new project or request access to existing ones");
        return Ok(());
    }
    ctx.display.list("Available Projects", &projects);
    Ok(())
}
