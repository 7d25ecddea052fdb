//! Project role and permission authorization.
//!
//! This module answers who may do what inside a project:
//! - **Engine** - pure predicates over a loaded project snapshot
//!   ([`AuthorizationEngine`])
//! - **Policies** - guards that turn denials into [`ProjectError`]s
//!   ([`ProjectPolicy`])
//! - **Validation** - task status and label applicability
//! - **Managers** - roster lifecycle and task changes over storage traits
//!
//! # Roles
//!
//! A user has a global [`Role`] (mapped to a fixed [`PermissionSet`]) and,
//! per project, at most one roster entry with a [`ProjectRole`] and a
//! [`MembershipStatus`]. Project management checks use the roster; comment
//! checks use the global permission set. The project creator always has
//! full management rights, with or without a roster entry.
//!
//! # Features
//!
//! - `test-projects` - In-memory store for testing
//!
//! # Example
//!
//! ```rust
//! use taskboard::projects::{
//!     AuthorizationEngine, Project, ProjectMember, ProjectRole, Role, User,
//! };
//!
//! let creator = User::new(1, "Cora", Some(Role::ProjectManager));
//! let manager = User::new(2, "Max", Some(Role::ProjectManager));
//! let member = User::new(3, "Xena", Some(Role::ProjectMember));
//!
//! let project = Project::new(10, "Apollo", creator.id)
//!     .with_member(ProjectMember::accepted(manager.clone(), ProjectRole::ProjectManager))
//!     .with_member(ProjectMember::accepted(member.clone(), ProjectRole::ProjectMember));
//!
//! let kickable = AuthorizationEngine::get_kickable_users(&manager, &project);
//! assert_eq!(kickable, vec![&member]);
//! ```

mod audit;
mod config;
mod engine;
mod error;
mod models;
mod policy;
mod roster_manager;
mod status;
pub mod storage;
mod task_manager;
mod types;
mod utils;


// Configuration exports
pub use config::InvitationConfig;

// Error exports
pub use error::ProjectError;

// Engine and policy exports
pub use engine::AuthorizationEngine;
pub use policy::ProjectPolicy;

// Validation exports
pub use status::{
    LABELS_FIELD, LabelValidationError, STATUS_FIELD, StatusValidationError,
    is_valid_status_for_project, validate_labels_for_project, validate_status_for_project,
};

// Manager exports
pub use roster_manager::RosterManager;
pub use task_manager::TaskManager;

// Audit exports
pub use audit::{ProjectAuditEntry, ProjectAuditEvent};

// Storage trait exports
pub use storage::{
    OptionalAuditStore, ProjectAuditStore, ProjectStore, RosterStore, TaskStatusStore,
    WithAuditStore,
};

// Model and type exports
pub use models::{
    CommentId, LabelId, Project, ProjectId, ProjectMember, StatusId, Task, TaskComment, TaskId,
    TaskLabel, TaskStatus, User, UserId,
};
pub use types::{MembershipStatus, ParseRoleError, Permission, PermissionSet, ProjectRole, Role};

// Test exports
#[cfg(any(test, feature = "test-projects"))]
pub use test::InMemoryProjectStore;
