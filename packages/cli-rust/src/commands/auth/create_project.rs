use crate::commands::Context;
use crate::wizard::params;
use anyhow::Result;
use gcpilot_core::workflows::AuthWorkflow;

/// Create a project with only an ID
pub fn cmd_auth_create_project(project_id: Option<String>, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Create New Project");

    let project_id = ctx.resolve(project_id, params::project_id_input())?;

    if !ctx.proceed("Creating a new project may incur costs")? {
        return Ok(());
    }

    if !AuthWorkflow::new(ctx.gcloud).create_project(&project_id)? {
        return Err(ctx.fail("Failed to create project"));
    }

    ctx.display.success(&format!("Successfully created project \"{project_id}\""));
    ctx.display.properties(&[
        ("Project ID", project_id),
        ("Status", "Created".to_string()),
    ]);
    Ok(())
}
