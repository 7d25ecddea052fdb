//! Taskboard - project role and permission authorization
//!
//! Decides who may manage a project, edit a task, invite or kick members,
//! and comment on or delete comments, over records supplied by your own
//! persistence layer.
//!
//! # Features
//!
//! - **Engine**: pure, side-effect-free authorization predicates
//! - **Policies**: guards that turn denials into typed errors
//! - **Validation**: task status and label applicability per project
//! - **Roster lifecycle**: invitations, acceptance, kicking, audit trail
//! - **Errors**: one error type that converts into an Axum response
//!
//! # Quick Start
//!
//! ```rust
//! use taskboard::projects::{
//!     AuthorizationEngine, Project, ProjectMember, ProjectRole, Role, Task, User,
//! };
//!
//! let creator = User::new(1, "Cora", Some(Role::ProjectManager));
//! let member = User::new(2, "Xena", Some(Role::ProjectMember));
//! let project = Project::new(10, "Apollo", creator.id)
//!     .with_member(ProjectMember::accepted(member.clone(), ProjectRole::ProjectMember));
//!
//! let task = Task::new(100, project.id, "Write release notes").assigned_to(member.id);
//!
//! assert!(AuthorizationEngine::can_edit_task(&member, &project, &task));
//! assert!(!AuthorizationEngine::can_manage(&member, &project));
//! ```

mod config;
mod error;
pub mod projects;
pub mod utils;

// Re-exports for public API
pub use config::{Config, ConfigBuilder, LoggingConfig};
pub use error::{ErrorContext, ErrorResponse, ErrorWithContext, Result, TaskboardError};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging with sensible defaults
///
/// # Environment Variables
///
/// - `RUST_LOG`: Set log level (e.g., "info", "debug", "taskboard=debug")
/// - `TASKBOARD_LOG_JSON`: Set to "true" for JSON formatted logs
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_logs = std::env::var("TASKBOARD_LOG_JSON")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Initialize tracing with a custom configuration
pub fn init_tracing_with_config(config: &Config) {
    let env_filter = EnvFilter::new(&config.logging.level);

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
