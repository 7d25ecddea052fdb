//! Records the authorization engine reasons about.
//!
//! These are snapshots supplied by the persistence layer. Nothing here
//! performs I/O.

use super::types::{MembershipStatus, PermissionSet, ProjectRole, Role};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

id_type!(
    /// User identifier.
    UserId
);
id_type!(
    /// Project identifier.
    ProjectId
);
id_type!(
    /// Task identifier.
    TaskId
);
id_type!(
    /// Task status identifier.
    StatusId
);
id_type!(
    /// Task label identifier.
    LabelId
);
id_type!(
    /// Task comment identifier.
    CommentId
);

/// A user account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Global role; `None` grants no permissions.
    pub role: Option<Role>,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }

    /// Global permission set derived from the user's role.
    #[must_use]
    pub fn permissions(&self) -> PermissionSet {
        self.role
            .map(|role| role.permissions())
            .unwrap_or(PermissionSet::EMPTY)
    }
}

/// One entry of a project's roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub user: User,
    pub role: ProjectRole,
    pub status: MembershipStatus,
}

impl ProjectMember {
    /// A freshly invited entry.
    pub fn pending(user: User, role: ProjectRole) -> Self {
        Self {
            user,
            role,
            status: MembershipStatus::Pending,
        }
    }

    pub fn accepted(user: User, role: ProjectRole) -> Self {
        Self {
            user,
            role,
            status: MembershipStatus::Accepted,
        }
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == MembershipStatus::Accepted
    }
}

/// A project with its roster, in roster (insertion) order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub created_by: UserId,
    #[serde(default)]
    pub roster: Vec<ProjectMember>,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>, created_by: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_by: created_by.into(),
            roster: Vec::new(),
        }
    }

    /// Builder-style roster entry append, used mostly in tests and fixtures.
    #[must_use]
    pub fn with_member(mut self, member: ProjectMember) -> Self {
        self.roster.push(member);
        self
    }

    #[must_use]
    pub fn is_creator(&self, user_id: UserId) -> bool {
        self.created_by == user_id
    }

    /// Accepted roster entries in roster order.
    pub fn accepted_members(&self) -> impl Iterator<Item = &ProjectMember> {
        self.roster.iter().filter(|m| m.is_accepted())
    }

    /// Roster entry for a user, whatever its status.
    #[must_use]
    pub fn roster_entry(&self, user_id: UserId) -> Option<&ProjectMember> {
        self.roster.iter().find(|m| m.user.id == user_id)
    }

    /// Accepted roster entry for a user.
    #[must_use]
    pub fn accepted_entry(&self, user_id: UserId) -> Option<&ProjectMember> {
        self.accepted_members().find(|m| m.user.id == user_id)
    }

    /// Whether the user holds an accepted entry with the given role.
    #[must_use]
    pub fn has_accepted_role(&self, user_id: UserId, role: ProjectRole) -> bool {
        self.accepted_entry(user_id).is_some_and(|m| m.role == role)
    }

    /// Number of entries still waiting for an answer.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.roster
            .iter()
            .filter(|m| m.status == MembershipStatus::Pending)
            .count()
    }
}

/// A task belonging to exactly one project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub title: String,
    pub assigned_user_id: Option<UserId>,
    pub status_id: Option<StatusId>,
    #[serde(default)]
    pub label_ids: Vec<LabelId>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, project_id: impl Into<ProjectId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            title: title.into(),
            assigned_user_id: None,
            status_id: None,
            label_ids: Vec::new(),
        }
    }

    #[must_use]
    pub fn assigned_to(mut self, user_id: impl Into<UserId>) -> Self {
        self.assigned_user_id = Some(user_id.into());
        self
    }

    #[must_use]
    pub fn is_assigned_to(&self, user_id: UserId) -> bool {
        self.assigned_user_id == Some(user_id)
    }
}

/// A task status, either scoped to one project or a global default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub id: StatusId,
    pub name: String,
    pub project_id: Option<ProjectId>,
    #[serde(default)]
    pub is_default: bool,
}

impl TaskStatus {
    /// Status scoped to a single project.
    pub fn for_project(id: impl Into<StatusId>, name: impl Into<String>, project_id: impl Into<ProjectId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            project_id: Some(project_id.into()),
            is_default: false,
        }
    }

    /// Global default status available to every project.
    pub fn global_default(id: impl Into<StatusId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            project_id: None,
            is_default: true,
        }
    }
}

/// A label scoped to a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLabel {
    pub id: LabelId,
    pub name: String,
    pub project_id: ProjectId,
}

/// A comment on a task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskComment {
    pub id: CommentId,
    pub task_id: TaskId,
    pub user_id: UserId,
    pub body: String,
}

impl TaskComment {
    pub fn new(
        id: impl Into<CommentId>,
        task_id: impl Into<TaskId>,
        user_id: impl Into<UserId>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            task_id: task_id.into(),
            user_id: user_id.into(),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64) -> User {
        User::new(id, format!("user-{id}"), Some(Role::ProjectMember))
    }

    #[test]
    fn test_roster_lookups_respect_status() {
        let project = Project::new(1, "Apollo", 10)
            .with_member(ProjectMember::accepted(user(2), ProjectRole::ProjectManager))
            .with_member(ProjectMember::pending(user(3), ProjectRole::ProjectManager));

        assert!(project.has_accepted_role(UserId(2), ProjectRole::ProjectManager));
        assert!(!project.has_accepted_role(UserId(3), ProjectRole::ProjectManager));
        assert!(project.roster_entry(UserId(3)).is_some());
        assert!(project.accepted_entry(UserId(3)).is_none());
        assert_eq!(project.pending_count(), 1);
        assert!(project.is_creator(UserId(10)));
    }

    #[test]
    fn test_user_without_role_has_no_permissions() {
        let user = User::new(1, "guest", None);
        assert!(user.permissions().is_empty());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let task = Task::new(4, 5, "Write docs").assigned_to(7);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["project_id"], 5);
        assert_eq!(json["assigned_user_id"], 7);
        assert!(task.is_assigned_to(UserId(7)));
    }
}
