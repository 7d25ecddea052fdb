//! Guard layer over [`AuthorizationEngine`].
//!
//! Each `authorize_*` function runs before the action it protects and
//! short-circuits with a [`ProjectError`] when the engine says no.

use super::engine::AuthorizationEngine;
use super::error::{ProjectError, Result};
use super::models::{Project, Task, TaskComment, User, UserId};
use super::types::ProjectRole;
use tracing::debug;

/// Project policy guards.
///
/// # Example
///
/// ```rust
/// use taskboard::projects::{Project, ProjectPolicy, Role, User};
///
/// let creator = User::new(1, "Cora", Some(Role::ProjectManager));
/// let stranger = User::new(2, "Sam", Some(Role::ProjectMember));
/// let project = Project::new(10, "Apollo", creator.id);
///
/// assert!(ProjectPolicy::authorize_edit_project(&creator, &project).is_ok());
/// assert!(ProjectPolicy::authorize_edit_project(&stranger, &project).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ProjectPolicy;

impl ProjectPolicy {
    pub fn authorize_edit_project(actor: &User, project: &Project) -> Result<()> {
        Self::check(
            AuthorizationEngine::can_edit_project(actor, project),
            actor,
            project,
            "edit this project",
        )
    }

    pub fn authorize_manage_task(actor: &User, project: &Project) -> Result<()> {
        Self::check(
            AuthorizationEngine::can_manage_task(actor, project),
            actor,
            project,
            "manage tasks in this project",
        )
    }

    pub fn authorize_edit_task(actor: &User, project: &Project, task: &Task) -> Result<()> {
        Self::check(
            AuthorizationEngine::can_edit_task(actor, project, task),
            actor,
            project,
            "edit this task",
        )
    }

    pub fn authorize_invite(actor: &User, project: &Project) -> Result<()> {
        Self::check(
            AuthorizationEngine::can_invite_users(actor, project),
            actor,
            project,
            "invite users to this project",
        )
    }

    /// Guard removal of `target` from the project.
    ///
    /// The target's accepted role decides which kick rule applies.
    pub fn authorize_kick(actor: &User, project: &Project, target: UserId) -> Result<()> {
        if target == actor.id {
            return Err(ProjectError::CannotKickSelf);
        }
        if project.is_creator(target) {
            return Err(ProjectError::CannotKickCreator);
        }

        let entry = project
            .accepted_entry(target)
            .ok_or(ProjectError::NotMember)?;

        match entry.role {
            ProjectRole::ProjectManager => Self::check(
                AuthorizationEngine::can_kick_project_manager(actor, project),
                actor,
                project,
                "kick project managers",
            ),
            ProjectRole::ProjectMember => Self::check(
                AuthorizationEngine::can_kick_project_member(actor, project),
                actor,
                project,
                "kick project members",
            ),
        }
    }

    pub fn authorize_create_comment(actor: &User) -> Result<()> {
        if AuthorizationEngine::can_create_comment(actor) {
            Ok(())
        } else {
            debug!(actor_id = %actor.id, "Comment creation denied");
            Err(ProjectError::forbidden("comment on tasks"))
        }
    }

    pub fn authorize_update_comment(actor: &User, comment: &TaskComment) -> Result<()> {
        if AuthorizationEngine::can_update_comment(actor, comment) {
            Ok(())
        } else {
            debug!(actor_id = %actor.id, comment_id = %comment.id, "Comment update denied");
            Err(ProjectError::forbidden("update this comment"))
        }
    }

    pub fn authorize_delete_comment(actor: &User, comment: &TaskComment) -> Result<()> {
        if AuthorizationEngine::can_delete_comment(actor, comment) {
            Ok(())
        } else {
            debug!(actor_id = %actor.id, comment_id = %comment.id, "Comment deletion denied");
            Err(ProjectError::forbidden("delete this comment"))
        }
    }

    fn check(allowed: bool, actor: &User, project: &Project, action: &'static str) -> Result<()> {
        if allowed {
            return Ok(());
        }
        debug!(
            actor_id = %actor.id,
            project_id = %project.id,
            action,
            "Project action denied"
        );
        Err(ProjectError::forbidden(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::models::ProjectMember;
    use crate::projects::types::Role;

    fn setup() -> (User, User, User, User, Project) {
        let creator = User::new(1, "creator", Some(Role::ProjectManager));
        let manager = User::new(2, "manager", Some(Role::ProjectManager));
        let other_manager = User::new(3, "other manager", Some(Role::ProjectManager));
        let member = User::new(4, "member", Some(Role::ProjectMember));
        let project = Project::new(50, "Apollo", creator.id)
            .with_member(ProjectMember::accepted(manager.clone(), ProjectRole::ProjectManager))
            .with_member(ProjectMember::accepted(
                other_manager.clone(),
                ProjectRole::ProjectManager,
            ))
            .with_member(ProjectMember::accepted(member.clone(), ProjectRole::ProjectMember));
        (creator, manager, other_manager, member, project)
    }

    #[test]
    fn test_kick_guard_uses_target_role() {
        let (creator, manager, other_manager, member, project) = setup();

        assert!(ProjectPolicy::authorize_kick(&creator, &project, other_manager.id).is_ok());
        assert!(ProjectPolicy::authorize_kick(&manager, &project, member.id).is_ok());

        let err = ProjectPolicy::authorize_kick(&manager, &project, other_manager.id).unwrap_err();
        assert!(matches!(
            err,
            ProjectError::Forbidden {
                action: "kick project managers"
            }
        ));

        let err = ProjectPolicy::authorize_kick(&member, &project, manager.id).unwrap_err();
        assert!(err.is_forbidden());
    }

    #[test]
    fn test_kick_guard_edge_cases() {
        let (creator, manager, _, _, project) = setup();

        assert!(matches!(
            ProjectPolicy::authorize_kick(&manager, &project, manager.id),
            Err(ProjectError::CannotKickSelf)
        ));
        assert!(matches!(
            ProjectPolicy::authorize_kick(&manager, &project, creator.id),
            Err(ProjectError::CannotKickCreator)
        ));
        assert!(matches!(
            ProjectPolicy::authorize_kick(&creator, &project, UserId(999)),
            Err(ProjectError::NotMember)
        ));
    }

    #[test]
    fn test_task_guards() {
        let (_, manager, _, member, project) = setup();
        let task = Task::new(1, project.id, "Ship it");

        assert!(ProjectPolicy::authorize_manage_task(&manager, &project).is_ok());
        assert!(ProjectPolicy::authorize_manage_task(&member, &project).is_err());
        assert!(ProjectPolicy::authorize_edit_task(&member, &project, &task).is_err());

        let task = task.assigned_to(member.id);
        assert!(ProjectPolicy::authorize_edit_task(&member, &project, &task).is_ok());
    }

    #[test]
    fn test_invite_guard() {
        let (creator, manager, _, member, project) = setup();
        assert!(ProjectPolicy::authorize_invite(&creator, &project).is_ok());
        assert!(ProjectPolicy::authorize_invite(&manager, &project).is_ok());
        assert!(ProjectPolicy::authorize_invite(&member, &project).is_err());
    }

    #[test]
    fn test_comment_guards() {
        let (_, manager, _, member, _) = setup();
        let comment = TaskComment::new(1, 1, member.id, "hello");

        assert!(ProjectPolicy::authorize_create_comment(&member).is_ok());
        assert!(ProjectPolicy::authorize_create_comment(&User::new(9, "guest", None)).is_err());
        assert!(ProjectPolicy::authorize_update_comment(&member, &comment).is_ok());
        assert!(ProjectPolicy::authorize_update_comment(&manager, &comment).is_err());
        assert!(ProjectPolicy::authorize_delete_comment(&manager, &comment).is_ok());
    }
}
