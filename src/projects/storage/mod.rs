//! Storage traits for projects.
//!
//! The persistence layer implements these; the managers only ever see
//! loaded snapshots through them.

mod audit;
mod project;
mod roster;
mod status;

pub use audit::{OptionalAuditStore, ProjectAuditStore, WithAuditStore};
pub use project::ProjectStore;
pub use roster::RosterStore;
pub use status::TaskStatusStore;
