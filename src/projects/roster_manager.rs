//! Roster manager.
//!
//! Handles the invitation lifecycle (invite, accept, reject) and member
//! removal, with policy checks against a single project snapshot per call.

use super::audit::{ProjectAuditEntry, ProjectAuditEvent};
use super::config::InvitationConfig;
use super::engine::AuthorizationEngine;
use super::error::{ProjectError, Result};
use super::models::{Project, ProjectId, ProjectMember, User, UserId};
use super::policy::ProjectPolicy;
use super::storage::{OptionalAuditStore, ProjectAuditStore, ProjectStore, RosterStore, WithAuditStore};
use super::types::{MembershipStatus, ProjectRole};
use tracing::{debug, info, instrument};

/// Roster manager - invitations and kicks with permission checks.
///
/// # Example
///
/// ```rust,ignore
/// use taskboard::projects::{InvitationConfig, ProjectRole, RosterManager};
///
/// let manager = RosterManager::new(store.clone(), store.clone(), InvitationConfig::default());
///
/// // Creator invites a member, who then accepts
/// manager.invite(project_id, invitee_id, ProjectRole::ProjectMember, &creator).await?;
/// manager.accept(project_id, invitee_id).await?;
///
/// // Later, a manager removes them again
/// manager.kick(project_id, invitee_id, &some_manager).await?;
/// ```
///
/// # Audit Logging
///
/// ```rust,ignore
/// let manager = RosterManager::new(...).with_audit_store(my_audit_store);
/// ```
pub struct RosterManager<P, R, A = ()>
where
    P: ProjectStore,
    R: RosterStore,
    A: OptionalAuditStore,
{
    project_store: P,
    roster_store: R,
    audit_store: A,
    config: InvitationConfig,
}

impl<P, R> RosterManager<P, R, ()>
where
    P: ProjectStore,
    R: RosterStore,
{
    /// Create a new roster manager.
    #[must_use]
    pub fn new(project_store: P, roster_store: R, config: InvitationConfig) -> Self {
        Self {
            project_store,
            roster_store,
            audit_store: (),
            config,
        }
    }

    /// Enable audit logging with the given store.
    pub fn with_audit_store<AuditStore: ProjectAuditStore + Clone + 'static>(
        self,
        audit_store: AuditStore,
    ) -> RosterManager<P, R, WithAuditStore<AuditStore>> {
        RosterManager {
            project_store: self.project_store,
            roster_store: self.roster_store,
            audit_store: WithAuditStore(audit_store),
            config: self.config,
        }
    }
}

impl<P, R, A> RosterManager<P, R, A>
where
    P: ProjectStore,
    R: RosterStore,
    A: OptionalAuditStore,
{
    /// Get a reference to the configuration.
    pub fn config(&self) -> &InvitationConfig {
        &self.config
    }

    /// Invite a user to the project with the given role.
    ///
    /// Creates a `Pending` entry. A previously rejected user may be
    /// invited again; their old entry is replaced.
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn invite(
        &self,
        project_id: ProjectId,
        user_id: UserId,
        role: ProjectRole,
        actor: &User,
    ) -> Result<ProjectMember> {
        let project = self.load_project(project_id).await?;
        ProjectPolicy::authorize_invite(actor, &project)?;

        let invitee = self
            .project_store
            .find_user(user_id)
            .await?
            .ok_or_else(|| ProjectError::user_not_found(user_id))?;

        if project.is_creator(user_id) {
            return Err(ProjectError::AlreadyMember);
        }

        match project.roster_entry(user_id).map(|entry| entry.status) {
            Some(MembershipStatus::Accepted) => return Err(ProjectError::AlreadyMember),
            Some(MembershipStatus::Pending) => return Err(ProjectError::InvitationAlreadyExists),
            Some(MembershipStatus::Rejected) | None => {}
        }

        let pending = u32::try_from(project.pending_count()).unwrap_or(u32::MAX);
        let limit = self.config().max_pending_per_project;
        if pending >= limit {
            return Err(ProjectError::max_pending_invitations(limit));
        }

        let entry = ProjectMember::pending(invitee, role);
        self.roster_store.upsert_entry(project_id, &entry).await?;

        info!(%project_id, %user_id, %role, "Invitation sent");

        self.audit_store
            .record(
                ProjectAuditEntry::new(ProjectAuditEvent::InvitationSent, project_id, actor.id)
                    .with_target(user_id)
                    .with_details(format!("role={role}")),
            )
            .await;

        Ok(entry)
    }

    /// Accept a pending invitation (invitee action).
    #[instrument(skip(self))]
    pub async fn accept(&self, project_id: ProjectId, user_id: UserId) -> Result<()> {
        self.respond(project_id, user_id, MembershipStatus::Accepted)
            .await
    }

    /// Decline a pending invitation (invitee action).
    #[instrument(skip(self))]
    pub async fn reject(&self, project_id: ProjectId, user_id: UserId) -> Result<()> {
        self.respond(project_id, user_id, MembershipStatus::Rejected)
            .await
    }

    /// Remove a member or manager from the project.
    ///
    /// Deletes the roster entry only; the user record is untouched.
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn kick(&self, project_id: ProjectId, target: UserId, actor: &User) -> Result<()> {
        let project = self.load_project(project_id).await?;
        ProjectPolicy::authorize_kick(actor, &project, target)?;

        let role = project
            .accepted_entry(target)
            .map(|entry| entry.role)
            .unwrap_or_default();

        self.roster_store.remove_entry(project_id, target).await?;

        info!(%project_id, target_id = %target, %role, "Member kicked");

        self.audit_store
            .record(
                ProjectAuditEntry::new(ProjectAuditEvent::MemberKicked, project_id, actor.id)
                    .with_target(target)
                    .with_details(format!("role={role}")),
            )
            .await;

        Ok(())
    }

    /// Users the actor may kick, in roster order.
    pub async fn kickable_users(&self, project_id: ProjectId, actor: &User) -> Result<Vec<User>> {
        let project = self.load_project(project_id).await?;
        Ok(AuthorizationEngine::get_kickable_users(actor, &project)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Accepted roster entries, in roster order.
    pub async fn members(&self, project_id: ProjectId) -> Result<Vec<ProjectMember>> {
        let project = self.load_project(project_id).await?;
        Ok(project.accepted_members().cloned().collect())
    }

    async fn respond(
        &self,
        project_id: ProjectId,
        user_id: UserId,
        status: MembershipStatus,
    ) -> Result<()> {
        let project = self.load_project(project_id).await?;

        let is_pending = project
            .roster_entry(user_id)
            .is_some_and(|entry| entry.status == MembershipStatus::Pending);
        if !is_pending {
            return Err(ProjectError::InvitationNotFound);
        }

        self.roster_store
            .set_status(project_id, user_id, status)
            .await?;

        let event = match status {
            MembershipStatus::Accepted => ProjectAuditEvent::InvitationAccepted,
            _ => ProjectAuditEvent::InvitationRejected,
        };

        info!(%project_id, %user_id, %status, "Invitation answered");

        // The invitee is the actor here
        self.audit_store
            .record(ProjectAuditEntry::new(event, project_id, user_id))
            .await;

        Ok(())
    }

    async fn load_project(&self, project_id: ProjectId) -> Result<Project> {
        let project = self
            .project_store
            .find_project(project_id)
            .await?
            .ok_or_else(|| ProjectError::project_not_found(project_id))?;
        debug!(%project_id, roster_len = project.roster.len(), "Project snapshot loaded");
        Ok(project)
    }
}
