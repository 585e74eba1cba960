use crate::commands::Context;
use anyhow::Result;
use gcpilot_core::workflows::StorageWorkflow;

pub fn cmd_storage_list(project_id: Option<String>, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("List Buckets");

    let project_id = ctx.project(project_id)?;
    let storage = StorageWorkflow::new(ctx.gcloud);
    let buckets = ctx.fetch("Fetching buckets...", || storage.list_buckets(&project_id))?;

    ctx.display.section(&format!("Buckets in project \"{project_id}\""));
    if buckets.is_empty() {
        ctx.display.info("No buckets found in this project");
    } else {
        ctx.display.list("Available Buckets", &buckets);
    }
    Ok(())
}
