//! Parameter specs shared by the command handlers

use super::{Choice, CustomEntry, ParamSpec};
use crate::output::enforcement_label;
use gcpilot_core::CommandRunner;
use gcpilot_core::roles::COMMON_ROLES;
use gcpilot_core::validation::{
    validate_bucket_name, validate_email, validate_project_id, validate_project_name,
    validate_resource_path, validate_role,
};
use gcpilot_core::workflows::{
    BillingWorkflow, IamWorkflow, OrgPolicyWorkflow, ProjectWorkflow, StorageWorkflow,
};

/// Storage classes with a short access-pattern description
pub const STORAGE_CLASSES: &[(&str, &str)] = &[
    ("STANDARD", "Hot data, frequent access"),
    ("NEARLINE", "Access less than once per month"),
    ("COLDLINE", "Access less than once per quarter"),
    ("ARCHIVE", "Access less than once per year"),
];

pub fn project<'a>(gcloud: &'a dyn CommandRunner, prompt: &str) -> ParamSpec<'a> {
    ParamSpec::Choices {
        prompt: prompt.to_string(),
        loading: "Fetching projects...",
        fetch: Box::new(move || {
            let projects = ProjectWorkflow::new(gcloud).list()?;
            Ok(projects.into_iter().map(Choice::plain).collect())
        }),
        empty_message: "No projects found".to_string(),
        custom: None,
    }
}

pub fn bucket<'a>(gcloud: &'a dyn CommandRunner, project_id: &str) -> ParamSpec<'a> {
    let project_id = project_id.to_string();
    ParamSpec::Choices {
        prompt: "Select a bucket:".to_string(),
        loading: "Fetching buckets...",
        empty_message: format!("No buckets found in project \"{project_id}\""),
        fetch: Box::new(move || {
            let buckets = StorageWorkflow::new(gcloud).list_buckets(&project_id)?;
            Ok(buckets.into_iter().map(Choice::plain).collect())
        }),
        custom: None,
    }
}

pub fn billing_account(gcloud: &dyn CommandRunner) -> ParamSpec<'_> {
    ParamSpec::Choices {
        prompt: "Select billing account:".to_string(),
        loading: "Fetching billing accounts...",
        fetch: Box::new(move || {
            let accounts = BillingWorkflow::new(gcloud).list_accounts()?;
            Ok(accounts
                .iter()
                .map(|account| {
                    let label = if account.display_name.is_empty() {
                        account.id().to_string()
                    } else {
                        format!("{} ({})", account.display_name, account.id())
                    };
                    Choice::new(label, account.id())
                })
                .collect())
        }),
        empty_message: "No billing accounts found".to_string(),
        custom: None,
    }
}

/// Constraints set on a project, labelled with their enforcement
pub fn policy<'a>(gcloud: &'a dyn CommandRunner, project_id: &str) -> ParamSpec<'a> {
    let project_id = project_id.to_string();
    ParamSpec::Choices {
        prompt: "Select policy:".to_string(),
        loading: "Fetching organization policies...",
        fetch: Box::new(move || {
            let policies = OrgPolicyWorkflow::new(gcloud).list(&project_id)?;
            Ok(policies
                .iter()
                .map(|p| {
                    Choice::new(
                        format!("{} ({})", p.constraint, enforcement_label(p.enforced())),
                        p.constraint.clone(),
                    )
                })
                .collect())
        }),
        empty_message: "No policies found".to_string(),
        custom: None,
    }
}

/// Roles the user currently holds, for removal
pub fn user_role<'a>(gcloud: &'a dyn CommandRunner, project_id: &str, email: &str) -> ParamSpec<'a> {
    let project_id = project_id.to_string();
    let email = email.to_string();
    ParamSpec::Choices {
        prompt: "Select role to remove:".to_string(),
        loading: "Fetching roles...",
        fetch: Box::new(move || {
            let roles = IamWorkflow::new(gcloud).list_user_roles(&project_id, &email)?;
            Ok(roles.into_iter().map(Choice::plain).collect())
        }),
        empty_message: "User has no roles in this project".to_string(),
        custom: None,
    }
}

/// The role catalog plus a custom entry
pub fn role() -> ParamSpec<'static> {
    ParamSpec::Fixed {
        prompt: "Select role:",
        choices: COMMON_ROLES
            .iter()
            .map(|role| Choice::new(format!("{} - {}", role.name, role.description), role.name))
            .collect(),
        custom: Some(CustomEntry {
            label: "Enter custom role",
            prompt: "Enter custom role (format: roles/...):",
            validator: validate_role,
        }),
    }
}

pub fn location(locations: &[String]) -> ParamSpec<'static> {
    ParamSpec::Fixed {
        prompt: "Select bucket location:",
        choices: locations.iter().cloned().map(Choice::plain).collect(),
        custom: None,
    }
}

pub fn storage_class() -> ParamSpec<'static> {
    ParamSpec::Fixed {
        prompt: "Select storage class:",
        choices: STORAGE_CLASSES
            .iter()
            .map(|(class, description)| Choice::new(format!("{class} - {description}"), *class))
            .collect(),
        custom: None,
    }
}

pub fn project_id_input() -> ParamSpec<'static> {
    ParamSpec::Text {
        prompt: "Enter project ID:",
        validator: validate_project_id,
    }
}

pub fn project_name_input() -> ParamSpec<'static> {
    ParamSpec::Text {
        prompt: "Enter project display name:",
        validator: validate_project_name,
    }
}

pub fn bucket_name_input() -> ParamSpec<'static> {
    ParamSpec::Text {
        prompt: "Enter bucket name:",
        validator: validate_bucket_name,
    }
}

pub fn email_input() -> ParamSpec<'static> {
    ParamSpec::Text {
        prompt: "Enter user email:",
        validator: validate_email,
    }
}

pub fn resource_input() -> ParamSpec<'static> {
    ParamSpec::Text {
        prompt: "Enter resource path:",
        validator: validate_resource_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcpilot_core::testing::RecordingRunner;

    fn fetch(spec: ParamSpec<'_>) -> Vec<Choice> {
        match spec {
            ParamSpec::Choices { fetch, .. } => fetch().unwrap(),
            _ => panic!("expected a fetched spec"),
        }
    }

    #[test]
    fn billing_labels_include_id() {
        let runner = RecordingRunner::new().respond(
            &["billing", "accounts"],
            r#"[{"name": "billingAccounts/AAA-BBB", "displayName": "Main"}]"#,
        );
        assert_eq!(
            fetch(billing_account(&runner)),
            vec![Choice::new("Main (AAA-BBB)", "AAA-BBB")]
        );
    }

    #[test]
    fn policy_labels_show_enforcement() {
        let runner = RecordingRunner::new().respond(
            &["org-policies", "list"],
            r#"[{"constraint": "constraints/a", "booleanPolicy": {"enforced": true}}]"#,
        );
        assert_eq!(
            fetch(policy(&runner, "p1")),
            vec![Choice::new("constraints/a (Enforced)", "constraints/a")]
        );
    }

    #[test]
    fn role_spec_offers_catalog_and_custom() {
        let ParamSpec::Fixed { choices, custom, .. } = role() else {
            panic!("expected fixed spec");
        };
        assert_eq!(choices.len(), COMMON_ROLES.len());
        assert_eq!(choices[0].value, "roles/owner");
        assert!(custom.is_some());
    }

    #[test]
    fn storage_classes_are_labelled() {
        let ParamSpec::Fixed { choices, .. } = storage_class() else {
            panic!("expected fixed spec");
        };
        assert_eq!(choices[0], Choice::new("STANDARD - Hot data, frequent access", "STANDARD"));
    }
}
