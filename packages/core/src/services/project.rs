//! Project lifecycle

use super::succeeded;
use crate::gcloud::{CommandRunner, ServiceResult, args, capture_json, settle};
use serde::Deserialize;

/// Output of `gcloud projects describe --format=json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub project_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub project_number: Option<String>,
    #[serde(default)]
    pub lifecycle_state: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub parent: Option<Parent>,
}

/// Organization or folder a project belongs to
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Parent {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl std::fmt::Display for Parent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

/// One entry of `gcloud organizations list --format=json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Resource name, `organizations/<id>`
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

impl Organization {
    /// Numeric organization id
    pub fn id(&self) -> &str {
        self.name
            .strip_prefix("organizations/")
            .unwrap_or(&self.name)
    }
}

pub struct ProjectService<'a> {
    gcloud: &'a dyn CommandRunner,
}

impl<'a> ProjectService<'a> {
    pub fn new(gcloud: &'a dyn CommandRunner) -> Self {
        Self { gcloud }
    }

    /// IDs of every project the active account can see
    pub fn list(&self) -> ServiceResult<Vec<String>> {
        let result = capture_json::<Vec<ProjectInfo>>(
            self.gcloud,
            &args(["projects", "list", "--format=json"]),
        );
        settle(
            result.map(|projects| projects.into_iter().map(|p| p.project_id).collect()),
            "list projects",
            Vec::new(),
        )
    }

    pub fn describe(&self, project_id: &str) -> ServiceResult<Option<ProjectInfo>> {
        let result = capture_json::<ProjectInfo>(
            self.gcloud,
            &args(["projects", "describe", project_id, "--format=json"]),
        );
        settle(result.map(Some), "get project details", None)
    }

    pub fn create(
        &self,
        project_id: &str,
        name: Option<&str>,
        organization: Option<&str>,
    ) -> ServiceResult<bool> {
        let mut command = args(["projects", "create", project_id]);
        if let Some(name) = name {
            command.push(format!("--name={name}"));
        }
        if let Some(organization) = organization {
            command.push(format!("--organization={organization}"));
        }
        succeeded(self.gcloud.inherit(&command), "create project")
    }

    pub fn delete(&self, project_id: &str) -> ServiceResult<bool> {
        let result = self
            .gcloud
            .inherit(&args(["projects", "delete", project_id, "--quiet"]));
        succeeded(result, "delete project")
    }

    pub fn list_organizations(&self) -> ServiceResult<Vec<Organization>> {
        let result = capture_json::<Vec<Organization>>(
            self.gcloud,
            &args(["organizations", "list", "--format=json"]),
        );
        settle(result, "list organizations", Vec::new())
    }

    /// Make `project_id` the default project for later gcloud calls
    pub fn set_active(&self, project_id: &str) -> ServiceResult<bool> {
        let result = self
            .gcloud
            .capture(&args(["config", "set", "project", project_id]));
        succeeded(result, "set the active project")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Mode, RecordingRunner};

    const PROJECT: &str = r#"{
        "createTime": "2024-03-01T10:15:00.000Z",
        "lifecycleState": "ACTIVE",
        "name": "My Project",
        "parent": {"id": "123456789", "type": "organization"},
        "projectId": "my-proj-1",
        "projectNumber": "987654321"
    }"#;

    #[test]
    fn list_returns_project_ids() {
        let runner = RecordingRunner::new().respond(
            &["projects", "list"],
            r#"[{"projectId": "alpha-1"}, {"projectId": "beta-22", "name": "Beta"}]"#,
        );
        assert_eq!(
            ProjectService::new(&runner).list(),
            Ok(vec!["alpha-1".to_string(), "beta-22".to_string()])
        );
    }

    #[test]
    fn list_defaults_to_empty_on_failure() {
        let runner = RecordingRunner::new().fail(&["projects", "list"]);
        assert_eq!(ProjectService::new(&runner).list(), Ok(vec![]));
    }

    #[test]
    fn describe_parses_details() {
        let runner = RecordingRunner::new().respond(&["describe", "my-proj-1"], PROJECT);
        let info = ProjectService::new(&runner)
            .describe("my-proj-1")
            .unwrap()
            .unwrap();

        assert_eq!(info.project_id, "my-proj-1");
        assert_eq!(info.name.as_deref(), Some("My Project"));
        assert_eq!(info.project_number.as_deref(), Some("987654321"));
        assert_eq!(info.parent.unwrap().to_string(), "organization/123456789");
    }

    #[test]
    fn describe_defaults_to_none() {
        let runner = RecordingRunner::new().fail(&["describe"]);
        assert_eq!(ProjectService::new(&runner).describe("gone-proj"), Ok(None));
    }

    #[test]
    fn create_passes_optional_flags() {
        let runner = RecordingRunner::new();
        let service = ProjectService::new(&runner);

        assert_eq!(service.create("my-proj-1", None, None), Ok(true));
        assert_eq!(
            service.create("my-proj-2", Some("My Project"), Some("123")),
            Ok(true)
        );

        let calls = runner.calls();
        assert_eq!(calls[0].mode, Mode::Inherit);
        assert_eq!(calls[0].args, args(["projects", "create", "my-proj-1"]));
        assert_eq!(
            calls[1].args,
            args([
                "projects",
                "create",
                "my-proj-2",
                "--name=My Project",
                "--organization=123"
            ])
        );
    }

    #[test]
    fn delete_is_quiet_and_interactive() {
        let runner = RecordingRunner::new().fail(&["delete"]);
        assert_eq!(ProjectService::new(&runner).delete("my-proj-1"), Ok(false));
        let calls = runner.calls();
        assert_eq!(calls[0].mode, Mode::Inherit);
        assert_eq!(
            calls[0].args,
            args(["projects", "delete", "my-proj-1", "--quiet"])
        );
    }

    #[test]
    fn organizations_expose_numeric_id() {
        let runner = RecordingRunner::new().respond(
            &["organizations", "list"],
            r#"[{"name": "organizations/42", "displayName": "example.com"}]"#,
        );
        let orgs = ProjectService::new(&runner).list_organizations().unwrap();
        assert_eq!(orgs.len(), 1);
        assert_eq!(orgs[0].id(), "42");
        assert_eq!(orgs[0].display_name, "example.com");
    }

    #[test]
    fn set_active_sets_config_property() {
        let runner = RecordingRunner::new();
        assert_eq!(ProjectService::new(&runner).set_active("my-proj-1"), Ok(true));
        assert_eq!(
            runner.calls()[0].args,
            args(["config", "set", "project", "my-proj-1"])
        );
    }
}
