//! Project create subcommand
//!
//! Steps:
//! 1. Resolve the project ID and display name
//! 2. Offer the organizations visible to the account, with a "no
//!    organization" entry, unless `--organization` was given
//! 3. Gate on the cost warning
//! 4. Create through gcloud and show a summary

use crate::commands::Context;
use crate::wizard::{Choice, ParamSpec, params};
use anyhow::Result;
use gcpilot_core::workflows::ProjectWorkflow;

const NO_ORGANIZATION: &str = "";

pub fn cmd_project_create(
    project_id: Option<String>,
    name: Option<String>,
    organization: Option<String>,
    ctx: &Context<'_>,
) -> Result<()> {
    ctx.display.title("Create New Project");
    let workflow = ProjectWorkflow::new(ctx.gcloud);

    let project_id = ctx.resolve(project_id, params::project_id_input())?;
    let name = ctx.resolve(name, params::project_name_input())?;

    let organization = match organization {
        Some(org) => Some(org),
        None => {
            let orgs = ctx.fetch("Fetching organizations...", || workflow.list_organizations())?;
            if orgs.is_empty() {
                None
            } else {
                let mut choices = vec![Choice::new("No organization", NO_ORGANIZATION)];
                choices.extend(orgs.iter().map(|org| {
                    Choice::new(format!("{} ({})", org.display_name, org.id()), org.id())
                }));
                let picked = ctx.resolve(
                    None,
                    ParamSpec::Fixed {
                        prompt: "Select organization:",
                        choices,
                        custom: None,
                    },
                )?;
                Some(picked).filter(|id| id != NO_ORGANIZATION)
            }
        }
    };

    if !ctx.proceed("Creating a new project may incur costs")? {
        return Ok(());
    }

    if !workflow.create(&project_id, Some(name.as_str()), organization.as_deref())? {
        return Err(ctx.fail("Failed to create project"));
    }

    ctx.display.success(&format!("Successfully created project \"{project_id}\""));
    ctx.display.properties(&[
        ("Project ID", project_id),
        ("Display Name", name),
        (
            "Organization",
            organization.unwrap_or_else(|| "None".to_string()),
        ),
        ("Status", "Created".to_string()),
    ]);
    Ok(())
}
