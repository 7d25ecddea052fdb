//! Project authorization decisions.
//!
//! [`AuthorizationEngine`] answers "may this user do X to this project?"
//! over an already loaded [`Project`] snapshot. Every function is pure:
//! no I/O, no mutation, no panics. Callers that make several checks for one
//! decision should load the project once and reuse it.
//!
//! Two sources of authority are consulted:
//! - the project roster (creator + accepted entries) for project and task
//!   management, and
//! - the user's global [`PermissionSet`](super::PermissionSet) for comments.

use super::models::{Project, Task, TaskComment, User};
use super::types::{Permission, ProjectRole};

/// Stateless project authorization engine.
///
/// # Example
///
/// ```rust
/// use taskboard::projects::{
///     AuthorizationEngine, Project, ProjectMember, ProjectRole, Role, User,
/// };
///
/// let creator = User::new(1, "Cora", Some(Role::ProjectManager));
/// let manager = User::new(2, "Max", Some(Role::ProjectManager));
/// let project = Project::new(10, "Apollo", creator.id)
///     .with_member(ProjectMember::accepted(manager.clone(), ProjectRole::ProjectManager));
///
/// assert!(AuthorizationEngine::can_manage(&creator, &project));
/// assert!(AuthorizationEngine::can_manage(&manager, &project));
/// assert!(!AuthorizationEngine::can_kick_project_manager(&manager, &project));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthorizationEngine;

impl AuthorizationEngine {
    /// Creator or accepted project manager.
    ///
    /// Every other "manage" style check delegates here.
    #[must_use]
    pub fn can_manage(actor: &User, project: &Project) -> bool {
        project.is_creator(actor.id)
            || project.has_accepted_role(actor.id, ProjectRole::ProjectManager)
    }

    /// Same as [`can_manage`](Self::can_manage).
    #[must_use]
    pub fn can_manage_task(actor: &User, project: &Project) -> bool {
        Self::can_manage(actor, project)
    }

    /// Task managers, plus whoever the task is assigned to.
    #[must_use]
    pub fn can_edit_task(actor: &User, project: &Project, task: &Task) -> bool {
        Self::can_manage_task(actor, project) || task.is_assigned_to(actor.id)
    }

    /// Accepted entry with the plain member role.
    ///
    /// Managers and the creator are *not* plain members.
    #[must_use]
    pub fn is_project_member(actor: &User, project: &Project) -> bool {
        project.has_accepted_role(actor.id, ProjectRole::ProjectMember)
    }

    #[must_use]
    pub fn can_invite_users(actor: &User, project: &Project) -> bool {
        Self::can_manage(actor, project)
    }

    #[must_use]
    pub fn can_edit_project(actor: &User, project: &Project) -> bool {
        Self::can_manage(actor, project)
    }

    /// Only the creator may remove a manager.
    #[must_use]
    pub fn can_kick_project_manager(actor: &User, project: &Project) -> bool {
        project.is_creator(actor.id)
    }

    /// Creator, or an accepted manager who is not the creator.
    #[must_use]
    pub fn can_kick_project_member(actor: &User, project: &Project) -> bool {
        Self::can_kick_project_manager(actor, project)
            || (project.has_accepted_role(actor.id, ProjectRole::ProjectManager)
                && !project.is_creator(actor.id))
    }

    /// Users the actor may remove from the project, in roster order.
    ///
    /// Only accepted entries are considered. The actor and the creator are
    /// never listed.
    #[must_use]
    pub fn get_kickable_users<'a>(actor: &User, project: &'a Project) -> Vec<&'a User> {
        let kick_members = Self::can_kick_project_member(actor, project);
        let kick_managers = Self::can_kick_project_manager(actor, project);

        project
            .accepted_members()
            .filter(|entry| entry.user.id != actor.id && !project.is_creator(entry.user.id))
            .filter(|entry| match entry.role {
                ProjectRole::ProjectMember => kick_members,
                ProjectRole::ProjectManager => kick_managers,
            })
            .map(|entry| &entry.user)
            .collect()
    }

    #[must_use]
    pub fn can_create_comment(actor: &User) -> bool {
        actor.permissions().contains(Permission::CommentOnTasks)
    }

    /// Author only; global permissions do not matter here.
    #[must_use]
    pub fn can_update_comment(actor: &User, comment: &TaskComment) -> bool {
        comment.is_authored_by(actor.id)
    }

    /// `manage_comments` deletes anything; `delete_comments` only the
    /// actor's own comments.
    #[must_use]
    pub fn can_delete_comment(actor: &User, comment: &TaskComment) -> bool {
        let permissions = actor.permissions();
        if permissions.contains(Permission::ManageComments) {
            return true;
        }
        permissions.contains(Permission::DeleteComments) && comment.is_authored_by(actor.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::error::ProjectError;
    use crate::projects::models::{ProjectMember, UserId};
    use crate::projects::policy::ProjectPolicy;
    use crate::projects::types::{MembershipStatus, Role};

    struct Fixture {
        creator: User,
        manager: User,
        member: User,
        pending: User,
        outsider: User,
        project: Project,
    }

    fn fixture() -> Fixture {
        let creator = User::new(1, "creator", Some(Role::ProjectManager));
        let manager = User::new(2, "manager", Some(Role::ProjectManager));
        let member = User::new(3, "member", Some(Role::ProjectMember));
        let pending = User::new(4, "pending", Some(Role::ProjectMember));
        let outsider = User::new(5, "outsider", Some(Role::Admin));

        let project = Project::new(100, "Apollo", creator.id)
            .with_member(ProjectMember::accepted(manager.clone(), ProjectRole::ProjectManager))
            .with_member(ProjectMember::accepted(member.clone(), ProjectRole::ProjectMember))
            .with_member(ProjectMember::pending(pending.clone(), ProjectRole::ProjectMember));

        Fixture {
            creator,
            manager,
            member,
            pending,
            outsider,
            project,
        }
    }

    fn ids(users: &[&User]) -> Vec<UserId> {
        users.iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_creator_manages_without_roster_entry() {
        let f = fixture();
        assert!(f.project.roster_entry(f.creator.id).is_none());
        assert!(AuthorizationEngine::can_manage(&f.creator, &f.project));
        assert!(AuthorizationEngine::can_manage_task(&f.creator, &f.project));
        assert!(AuthorizationEngine::can_invite_users(&f.creator, &f.project));
        assert!(AuthorizationEngine::can_edit_project(&f.creator, &f.project));
    }

    #[test]
    fn test_manage_requires_accepted_manager_entry() {
        let f = fixture();
        assert!(AuthorizationEngine::can_manage(&f.manager, &f.project));
        assert!(!AuthorizationEngine::can_manage(&f.member, &f.project));
        assert!(!AuthorizationEngine::can_manage(&f.pending, &f.project));
        // Global admin role grants nothing at project level
        assert!(!AuthorizationEngine::can_manage(&f.outsider, &f.project));
    }

    #[test]
    fn test_pending_or_rejected_manager_cannot_manage() {
        let f = fixture();
        let hopeful = User::new(9, "hopeful", Some(Role::ProjectManager));
        let mut project = f
            .project
            .with_member(ProjectMember::pending(hopeful.clone(), ProjectRole::ProjectManager));
        assert!(!AuthorizationEngine::can_manage(&hopeful, &project));

        project.roster.last_mut().unwrap().status = MembershipStatus::Rejected;
        assert!(!AuthorizationEngine::can_manage(&hopeful, &project));
    }

    #[test]
    fn test_assignee_can_edit_task() {
        let f = fixture();
        let task = Task::new(1, f.project.id, "Fix login").assigned_to(f.member.id);
        assert!(AuthorizationEngine::can_edit_task(&f.member, &f.project, &task));
        assert!(AuthorizationEngine::can_edit_task(&f.manager, &f.project, &task));

        // Assignment alone is enough, even for someone outside the roster
        let task = Task::new(2, f.project.id, "Review").assigned_to(f.outsider.id);
        assert!(AuthorizationEngine::can_edit_task(&f.outsider, &f.project, &task));

        let unassigned = Task::new(3, f.project.id, "Backlog");
        assert!(!AuthorizationEngine::can_edit_task(&f.member, &f.project, &unassigned));
    }

    #[test]
    fn test_is_project_member_excludes_managers_and_creator() {
        let f = fixture();
        assert!(AuthorizationEngine::is_project_member(&f.member, &f.project));
        assert!(!AuthorizationEngine::is_project_member(&f.manager, &f.project));
        assert!(!AuthorizationEngine::is_project_member(&f.creator, &f.project));
        assert!(!AuthorizationEngine::is_project_member(&f.pending, &f.project));
    }

    #[test]
    fn test_kick_rules() {
        let f = fixture();
        assert!(AuthorizationEngine::can_kick_project_manager(&f.creator, &f.project));
        assert!(!AuthorizationEngine::can_kick_project_manager(&f.manager, &f.project));

        assert!(AuthorizationEngine::can_kick_project_member(&f.creator, &f.project));
        assert!(AuthorizationEngine::can_kick_project_member(&f.manager, &f.project));
        assert!(!AuthorizationEngine::can_kick_project_member(&f.member, &f.project));
        assert!(!AuthorizationEngine::can_kick_project_member(&f.outsider, &f.project));
    }

    #[test]
    fn test_creator_also_listed_as_manager() {
        let f = fixture();
        let project = f
            .project
            .with_member(ProjectMember::accepted(f.creator.clone(), ProjectRole::ProjectManager));
        assert!(AuthorizationEngine::can_kick_project_member(&f.creator, &project));
        assert_eq!(
            ids(&AuthorizationEngine::get_kickable_users(&f.creator, &project)),
            vec![f.manager.id, f.member.id]
        );
    }

    #[test]
    fn test_creator_in_roster_is_never_kickable() {
        let f = fixture();
        let project = Project::new(100, "Apollo", f.creator.id)
            .with_member(ProjectMember::accepted(f.creator.clone(), ProjectRole::ProjectMember))
            .with_member(ProjectMember::accepted(f.manager.clone(), ProjectRole::ProjectManager))
            .with_member(ProjectMember::accepted(f.member.clone(), ProjectRole::ProjectMember));

        let listed = AuthorizationEngine::get_kickable_users(&f.manager, &project);
        assert_eq!(ids(&listed), vec![f.member.id]);
        assert!(matches!(
            ProjectPolicy::authorize_kick(&f.manager, &project, f.creator.id),
            Err(ProjectError::CannotKickCreator)
        ));
    }

    #[test]
    fn test_rejected_entries_are_not_kickable() {
        let f = fixture();
        let declined = User::new(6, "declined", Some(Role::ProjectMember));
        let mut project = f
            .project
            .with_member(ProjectMember::pending(declined.clone(), ProjectRole::ProjectMember));
        if let Some(entry) = project.roster.iter_mut().find(|e| e.user.id == declined.id) {
            entry.status = MembershipStatus::Rejected;
        }

        for actor in [&f.creator, &f.manager] {
            let listed = AuthorizationEngine::get_kickable_users(actor, &project);
            assert!(!listed.iter().any(|u| u.id == declined.id));
            assert!(!listed.iter().any(|u| u.id == f.pending.id));
        }
        assert_eq!(
            ids(&AuthorizationEngine::get_kickable_users(&f.creator, &project)),
            vec![f.manager.id, f.member.id]
        );
    }

    #[test]
    fn test_kickable_users() {
        let f = fixture();
        assert_eq!(
            ids(&AuthorizationEngine::get_kickable_users(&f.creator, &f.project)),
            vec![f.manager.id, f.member.id]
        );
        assert_eq!(
            ids(&AuthorizationEngine::get_kickable_users(&f.manager, &f.project)),
            vec![f.member.id]
        );
        assert!(AuthorizationEngine::get_kickable_users(&f.member, &f.project).is_empty());
        assert!(AuthorizationEngine::get_kickable_users(&f.outsider, &f.project).is_empty());
    }

    #[test]
    fn test_kickable_users_follow_roster_order() {
        let f = fixture();
        let late = User::new(6, "late", Some(Role::ProjectMember));
        let project = f
            .project
            .with_member(ProjectMember::accepted(late.clone(), ProjectRole::ProjectMember));
        assert_eq!(
            ids(&AuthorizationEngine::get_kickable_users(&f.manager, &project)),
            vec![f.member.id, late.id]
        );
    }

    #[test]
    fn test_comment_permissions() {
        let author = User::new(7, "author", Some(Role::ProjectMember));
        let deleter = User::new(8, "deleter", Some(Role::ProjectMember));
        let moderator = User::new(9, "moderator", Some(Role::ProjectManager));
        let guest = User::new(10, "guest", None);
        let comment = TaskComment::new(1, 1, author.id, "Looks good");

        assert!(AuthorizationEngine::can_create_comment(&author));
        assert!(!AuthorizationEngine::can_create_comment(&guest));

        assert!(AuthorizationEngine::can_update_comment(&author, &comment));
        assert!(!AuthorizationEngine::can_update_comment(&moderator, &comment));

        assert!(AuthorizationEngine::can_delete_comment(&author, &comment));
        assert!(!AuthorizationEngine::can_delete_comment(&deleter, &comment));
        assert!(AuthorizationEngine::can_delete_comment(&moderator, &comment));
        assert!(!AuthorizationEngine::can_delete_comment(&guest, &comment));
    }

    #[test]
    fn test_author_without_delete_permission_cannot_delete() {
        let author = User::new(7, "author", None);
        let comment = TaskComment::new(1, 1, author.id, "draft");
        assert!(AuthorizationEngine::can_update_comment(&author, &comment));
        assert!(!AuthorizationEngine::can_delete_comment(&author, &comment));
    }
}
