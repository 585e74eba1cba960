use crate::commands::Context;
use crate::output::status_style;
use anyhow::Result;
use chrono::DateTime;
use gcpilot_core::workflows::ProjectWorkflow;

pub fn cmd_project_info(project_id: Option<String>, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Project Information");

    let project_id = ctx.project(project_id)?;
    let workflow = ProjectWorkflow::new(ctx.gcloud);
    let Some(info) = ctx.fetch("Fetching project details...", || workflow.info(&project_id))? else {
        return Err(ctx.fail(format!("Project \"{project_id}\" not found")));
    };

    ctx.display.section(&format!("Project Details for \"{project_id}\""));
    let dash = || "-".to_string();
    ctx.display.properties(&[
        ("Project ID", info.project_id.clone()),
        ("Name", info.name.clone().unwrap_or_else(dash)),
        ("Project Number", info.project_number.clone().unwrap_or_else(dash)),
        (
            "Parent",
            info.parent
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "None".to_string()),
        ),
        (
            "Created",
            info.create_time.as_deref().map(format_time).unwrap_or_else(dash),
        ),
        (
            "State",
            info.lifecycle_state
                .as_deref()
                .map(|state| status_style(state).to_string())
                .unwrap_or_else(dash),
        ),
    ]);
    Ok(())
}

/// RFC 3339 timestamp as `YYYY-MM-DD HH:MM UTC`; anything else
/// is shown as received
fn format_time(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_handles_rfc3339_and_garbage() {
        assert_eq!(format_time("2024-03-01T10:15:30.123Z"), "2024-03-01 10:15 UTC");
        assert_eq!(format_time("yesterday"), "yesterday");
        assert_eq!(format_time(""), "");
    }
}
