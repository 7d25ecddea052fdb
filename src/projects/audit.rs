//! Project audit logging.
//!
//! Provides an audit trail for roster and task changes.

use super::models::{ProjectId, UserId};
use serde::{Deserialize, Serialize};

/// Audit entry for project operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAuditEntry {
    /// Unique identifier for this audit entry.
    pub id: String,
    /// The type of event.
    pub event: ProjectAuditEvent,
    /// Project this event relates to.
    pub project_id: ProjectId,
    /// User who performed the action.
    pub actor_id: UserId,
    /// Target user (for roster events).
    pub target_id: Option<UserId>,
    /// Additional details about the event.
    pub details: Option<String>,
    /// Timestamp (Unix seconds).
    pub timestamp: u64,
}

/// Project audit event types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectAuditEvent {
    /// A user was invited to the project.
    InvitationSent,
    /// An invitee accepted.
    InvitationAccepted,
    /// An invitee declined.
    InvitationRejected,
    /// A roster entry was removed.
    MemberKicked,
    /// A task moved to another status.
    TaskStatusChanged,
    /// A task's labels were replaced.
    TaskLabelsChanged,
}

impl std::fmt::Display for ProjectAuditEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvitationSent => write!(f, "invitation_sent"),
            Self::InvitationAccepted => write!(f, "invitation_accepted"),
            Self::InvitationRejected => write!(f, "invitation_rejected"),
            Self::MemberKicked => write!(f, "member_kicked"),
            Self::TaskStatusChanged => write!(f, "task_status_changed"),
            Self::TaskLabelsChanged => write!(f, "task_labels_changed"),
        }
    }
}

impl ProjectAuditEntry {
    /// Create a new audit entry with the given event and project.
    #[must_use]
    pub fn new(event: ProjectAuditEvent, project_id: ProjectId, actor_id: UserId) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event,
            project_id,
            actor_id,
            target_id: None,
            details: None,
            timestamp: super::utils::current_timestamp(),
        }
    }

    /// Set the target user.
    #[must_use]
    pub fn with_target(mut self, target_id: UserId) -> Self {
        self.target_id = Some(target_id);
        self
    }

    /// Set additional details.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
