//! Static IAM role catalog

/// A predefined IAM role offered in role pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleInfo {
    pub name: &'static str,
    pub description: &'static str,
}

const fn role(name: &'static str, description: &'static str) -> RoleInfo {
    RoleInfo { name, description }
}

/// Commonly assigned roles, in display order
pub static COMMON_ROLES: &[RoleInfo] = &[
    role("roles/owner", "Full access to all resources"),
    role("roles/editor", "Edit access to all resources"),
    role("roles/viewer", "View access to all resources"),
    role("roles/browser", "Browse the resource hierarchy of a project"),
    role("roles/storage.admin", "Full access to Cloud Storage"),
    role("roles/storage.objectViewer", "View access to Cloud Storage objects"),
    role("roles/storage.objectCreator", "Create access to Cloud Storage objects"),
    role("roles/storage.folderAdmin", "Manage storage folders"),
    role("roles/compute.admin", "Full access to Compute Engine"),
    role("roles/compute.storageAdmin", "Full access to Compute Engine storage"),
    role("roles/cloudfunctions.admin", "Full access to Cloud Functions"),
    role("roles/run.admin", "Full access to Cloud Run"),
    role("roles/clouddeploy.admin", "Full access to Cloud Deploy"),
    role("roles/cloudsql.admin", "Full access to Cloud SQL"),
    role(
        "roles/composer.environmentAndStorageObjectAdmin",
        "Full access to Cloud Composer",
    ),
    role("roles/iam.serviceAccountUser", "Access to service accounts"),
    role("roles/iam.serviceAccountKeyAdmin", "Manage service account keys"),
    role("roles/iam.securityAdmin", "Manage IAM security policies"),
    role("roles/resourcemanager.projectIamAdmin", "Manage IAM policies"),
    role(
        "roles/resourcemanager.organizationAdmin",
        "Manage organization resources",
    ),
    role("roles/billing.projectManager", "Manage billing for the project"),
];

/// Roles granted by `iam apply-admin`
pub static ADMIN_ROLES: &[&str] = &[
    "roles/owner",
    "roles/storage.admin",
    "roles/compute.admin",
    "roles/cloudfunctions.admin",
];

/// Look up a catalog entry by role name
pub fn find_role(name: &str) -> Option<&'static RoleInfo> {
    COMMON_ROLES.iter().find(|role| role.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_role;
    use std::collections::HashSet;

    #[test]
    fn catalog_names_are_valid_and_unique() {
        let mut seen = HashSet::new();
        for role in COMMON_ROLES {
            assert!(validate_role(role.name).is_ok(), "{}", role.name);
            assert!(!role.description.is_empty());
            assert!(seen.insert(role.name), "duplicate role {}", role.name);
        }
    }

    #[test]
    fn admin_roles_are_in_catalog() {
        assert_eq!(ADMIN_ROLES.len(), 4);
        for name in ADMIN_ROLES {
            assert!(find_role(name).is_some(), "{name} missing from catalog");
        }
    }

    #[test]
    fn find_role_misses_unknown() {
        assert!(find_role("roles/does.not.exist").is_none());
        assert_eq!(
            find_role("roles/viewer").map(|r| r.description),
            Some("View access to all resources")
        );
    }
}
