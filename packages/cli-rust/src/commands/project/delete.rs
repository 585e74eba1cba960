use crate::commands::Context;
use anyhow::Result;
use gcpilot_core::workflows::ProjectWorkflow;

/// Delete a project after an explicit confirmation
pub fn cmd_project_delete(project_id: Option<String>, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Delete Project");

    let project_id = ctx.project(project_id)?;
    let warning =
        format!("You are about to delete project \"{project_id}\". This action cannot be undone.");
    if !ctx.proceed(&warning)? {
        return Ok(());
    }

    if !ProjectWorkflow::new(ctx.gcloud).delete(&project_id)? {
        return Err(ctx.fail(format!("Failed to delete project \"{project_id}\"")));
    }
    ctx.display.success(&format!("Successfully deleted project \"{project_id}\""));
    Ok(())
}
