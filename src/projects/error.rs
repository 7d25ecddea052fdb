//! Project error types.

use super::models::{ProjectId, UserId};
use super::status::{LabelValidationError, StatusValidationError};
use crate::config::Config;
use crate::error::{ErrorContext, TaskboardError};
use axum::response::Response;
use thiserror::Error;

/// Errors that can occur during project operations.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The actor is not allowed to perform the action.
    #[error("Not allowed to {action}")]
    Forbidden {
        /// The denied action, e.g. `kick project manager`.
        action: &'static str,
    },

    /// Project not found.
    #[error("Project not found: {project_id}")]
    ProjectNotFound {
        /// The ID that was not found.
        project_id: ProjectId,
    },

    /// User not found.
    #[error("User not found: {user_id}")]
    UserNotFound {
        /// The ID that was not found.
        user_id: UserId,
    },

    /// Target user has no accepted roster entry.
    #[error("User is not a member of this project")]
    NotMember,

    /// Target user is already an accepted member (or the creator).
    #[error("User is already a member of this project")]
    AlreadyMember,

    /// Target user already has a pending invitation.
    #[error("User already has a pending invitation to this project")]
    InvitationAlreadyExists,

    /// No pending invitation for the user.
    #[error("No pending invitation for this user")]
    InvitationNotFound,

    /// An actor tried to kick themselves.
    #[error("Cannot kick yourself from a project")]
    CannotKickSelf,

    /// The creator can never be removed.
    #[error("Cannot remove the project creator")]
    CannotKickCreator,

    /// Maximum pending invitations reached.
    #[error("Maximum pending invitations reached for this project ({limit})")]
    MaxPendingInvitationsReached {
        /// The configured limit.
        limit: u32,
    },

    /// Status cannot be assigned to a task of this project.
    #[error(transparent)]
    InvalidStatus(#[from] StatusValidationError),

    /// Label cannot be attached to a task of this project.
    #[error(transparent)]
    InvalidLabel(#[from] LabelValidationError),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] TaskboardError),
}

impl ProjectError {
    /// Create a forbidden error for the given action.
    pub fn forbidden(action: &'static str) -> Self {
        Self::Forbidden { action }
    }

    /// Create a project not found error.
    pub fn project_not_found(project_id: ProjectId) -> Self {
        Self::ProjectNotFound { project_id }
    }

    /// Create a user not found error.
    pub fn user_not_found(user_id: UserId) -> Self {
        Self::UserNotFound { user_id }
    }

    /// Create a max pending invitations error.
    pub fn max_pending_invitations(limit: u32) -> Self {
        Self::MaxPendingInvitationsReached { limit }
    }

    /// Whether this is an authorization denial.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            Self::Forbidden { .. } | Self::CannotKickSelf | Self::CannotKickCreator
        )
    }
}

/// Result type for project operations.
pub type Result<T> = std::result::Result<T, ProjectError>;

impl From<ProjectError> for TaskboardError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::Forbidden { .. }
            | ProjectError::CannotKickSelf
            | ProjectError::CannotKickCreator => TaskboardError::forbidden(err.to_string()),
            ProjectError::ProjectNotFound { .. }
            | ProjectError::UserNotFound { .. }
            | ProjectError::NotMember
            | ProjectError::InvitationNotFound => TaskboardError::not_found(err.to_string()),
            ProjectError::AlreadyMember
            | ProjectError::InvitationAlreadyExists
            | ProjectError::MaxPendingInvitationsReached { .. } => {
                TaskboardError::conflict(err.to_string())
            }
            ProjectError::InvalidStatus(e) => e.into_field_error().into(),
            ProjectError::InvalidLabel(e) => e.into_field_error().into(),
            ProjectError::Storage(e) => e,
        }
    }
}

impl ProjectError {
    /// Boundary translation that keeps field-level validation details.
    ///
    /// Prefer this over `TaskboardError::from` when building a response,
    /// since the plain conversion drops the field errors.
    pub fn into_response_parts(self) -> (TaskboardError, ErrorContext) {
        match self {
            ProjectError::InvalidStatus(e) => {
                let with_ctx = e.into_field_error();
                let context = with_ctx.context().clone();
                (with_ctx.into(), context)
            }
            ProjectError::InvalidLabel(e) => {
                let with_ctx = e.into_field_error();
                let context = with_ctx.context().clone();
                (with_ctx.into(), context)
            }
            other => (other.into(), ErrorContext::new()),
        }
    }

    /// Render as an HTTP response, exposing internal details only when
    /// `config.dev_mode` is set.
    pub fn into_response_for(self, config: &Config) -> Response {
        let (error, context) = self.into_response_parts();
        error.into_response_with_context(Some(context), config.dev_mode)
    }
}
