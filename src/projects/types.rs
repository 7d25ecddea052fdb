//! Role, permission and roster status types.
//!
//! Two independent role systems exist side by side:
//! - [`ProjectRole`] is a user's role inside one project's roster.
//! - [`Role`] is a user's system-wide role, which maps to a fixed
//!   [`PermissionSet`] through [`Role::permissions`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a user within a single project's roster.
///
/// # Example
///
/// ```rust
/// use taskboard::projects::ProjectRole;
///
/// let role: ProjectRole = "project_manager".parse().unwrap();
/// assert!(role.is_manager());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectRole {
    /// Can manage the project, its tasks and plain members.
    ProjectManager,
    /// Regular participant.
    #[default]
    ProjectMember,
}

impl ProjectRole {
    /// Get the string representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectManager => "project_manager",
            Self::ProjectMember => "project_member",
        }
    }

    /// Check if this is the manager role.
    #[must_use]
    pub fn is_manager(&self) -> bool {
        matches!(self, Self::ProjectManager)
    }
}

impl fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project_manager" => Ok(Self::ProjectManager),
            "project_member" => Ok(Self::ProjectMember),
            _ => Err(ParseRoleError::new(
                s,
                "project_manager or project_member",
            )),
        }
    }
}

/// Invitation lifecycle state of a roster entry.
///
/// Entries start as `Pending` when invited. Only `Accepted` entries take
/// part in authorization decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl MembershipStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single global permission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Permission {
    ManageProjects,
    ManageTasks,
    ManageUsers,
    ViewProjects,
    ViewTasks,
    CommentOnTasks,
    DeleteComments,
    ManageComments,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 8] = [
        Self::ManageProjects,
        Self::ManageTasks,
        Self::ManageUsers,
        Self::ViewProjects,
        Self::ViewTasks,
        Self::CommentOnTasks,
        Self::DeleteComments,
        Self::ManageComments,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageProjects => "manage_projects",
            Self::ManageTasks => "manage_tasks",
            Self::ManageUsers => "manage_users",
            Self::ViewProjects => "view_projects",
            Self::ViewTasks => "view_tasks",
            Self::CommentOnTasks => "comment_on_tasks",
            Self::DeleteComments => "delete_comments",
            Self::ManageComments => "manage_comments",
        }
    }

    const fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A set of [`Permission`]s.
///
/// `Copy` and allocation-free, so it can be computed per check.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PermissionSet(u16);

impl PermissionSet {
    /// The empty set.
    pub const EMPTY: PermissionSet = PermissionSet(0);

    /// Build a set from a slice of permissions.
    #[must_use]
    pub const fn from_slice(permissions: &[Permission]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < permissions.len() {
            bits |= permissions[i].bit();
            i += 1;
        }
        Self(bits)
    }

    #[must_use]
    pub const fn contains(&self, permission: Permission) -> bool {
        self.0 & permission.bit() != 0
    }

    /// Return a copy of this set with `permission` added.
    #[must_use]
    pub const fn with(self, permission: Permission) -> Self {
        Self(self.0 | permission.bit())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the contained permissions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        Permission::ALL.into_iter().filter(|p| self.contains(*p))
    }
}

impl fmt::Debug for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, PermissionSet::with)
    }
}

/// Global (system-wide) user role.
///
/// # Example
///
/// ```rust
/// use taskboard::projects::{Permission, Role};
///
/// assert!(Role::Admin.permissions().contains(Permission::ManageUsers));
/// assert!(!Role::ProjectMember.permissions().contains(Permission::ManageComments));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    ProjectManager,
    ProjectMember,
}

const ADMIN_PERMISSIONS: PermissionSet = PermissionSet::from_slice(&Permission::ALL);

const PROJECT_MANAGER_PERMISSIONS: PermissionSet = PermissionSet::from_slice(&[
    Permission::ManageProjects,
    Permission::ManageTasks,
    Permission::ViewProjects,
    Permission::ViewTasks,
    Permission::CommentOnTasks,
    Permission::DeleteComments,
    Permission::ManageComments,
]);

const PROJECT_MEMBER_PERMISSIONS: PermissionSet = PermissionSet::from_slice(&[
    Permission::ViewProjects,
    Permission::ViewTasks,
    Permission::CommentOnTasks,
    Permission::DeleteComments,
]);

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::ProjectManager => "project_manager",
            Self::ProjectMember => "project_member",
        }
    }

    /// The fixed permission set granted by this role.
    #[must_use]
    pub const fn permissions(&self) -> PermissionSet {
        match self {
            Self::Admin => ADMIN_PERMISSIONS,
            Self::ProjectManager => PROJECT_MANAGER_PERMISSIONS,
            Self::ProjectMember => PROJECT_MEMBER_PERMISSIONS,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "project_manager" => Ok(Self::ProjectManager),
            "project_member" => Ok(Self::ProjectMember),
            _ => Err(ParseRoleError::new(
                s,
                "admin, project_manager, or project_member",
            )),
        }
    }
}

/// Error returned when parsing a role string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    invalid_value: String,
    expected: &'static str,
}

impl ParseRoleError {
    fn new(invalid_value: &str, expected: &'static str) -> Self {
        Self {
            invalid_value: invalid_value.to_string(),
            expected,
        }
    }
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid role: '{}' (expected: {})",
            self.invalid_value, self.expected
        )
    }
}

impl std::error::Error for ParseRoleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_permission_table() {
        let admin = Role::Admin.permissions();
        for permission in Permission::ALL {
            assert!(admin.contains(permission), "admin lacks {permission}");
        }

        let manager = Role::ProjectManager.permissions();
        assert!(manager.contains(Permission::ManageComments));
        assert!(manager.contains(Permission::ManageProjects));
        assert!(!manager.contains(Permission::ManageUsers));

        let member = Role::ProjectMember.permissions();
        assert!(member.contains(Permission::CommentOnTasks));
        assert!(member.contains(Permission::DeleteComments));
        assert!(!member.contains(Permission::ManageComments));
        assert!(!member.contains(Permission::ManageTasks));
    }

    #[test]
    fn test_permission_set_ops() {
        let set = PermissionSet::EMPTY.with(Permission::ViewTasks);
        assert!(set.contains(Permission::ViewTasks));
        assert!(!set.contains(Permission::ViewProjects));
        assert!(!set.is_empty());
        assert!(PermissionSet::EMPTY.is_empty());

        let collected: PermissionSet =
            [Permission::DeleteComments, Permission::ManageUsers].into_iter().collect();
        assert_eq!(
            collected.iter().collect::<Vec<_>>(),
            vec![Permission::ManageUsers, Permission::DeleteComments]
        );
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(
            "project_manager".parse::<ProjectRole>().unwrap(),
            ProjectRole::ProjectManager
        );
        assert_eq!(
            "Project_Member".parse::<ProjectRole>().unwrap(),
            ProjectRole::ProjectMember
        );

        let err = "owner".parse::<ProjectRole>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid role: 'owner' (expected: project_manager or project_member)"
        );
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_string(&ProjectRole::ProjectManager).unwrap(),
            "\"project_manager\""
        );
        assert_eq!(
            serde_json::to_string(&MembershipStatus::Accepted).unwrap(),
            "\"accepted\""
        );
        assert_eq!(
            serde_json::to_string(&Permission::CommentOnTasks).unwrap(),
            "\"comment_on_tasks\""
        );
        let parsed: Role = serde_json::from_str("\"project_member\"").unwrap();
        assert_eq!(parsed, Role::ProjectMember);
    }
}
