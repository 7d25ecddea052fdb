//! Roster storage trait.

use crate::error::Result;
use crate::projects::models::{ProjectId, ProjectMember, UserId};
use crate::projects::types::MembershipStatus;
use async_trait::async_trait;

/// Write access to project rosters.
///
/// Removing an entry never touches the user record itself.
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Insert an entry, replacing any existing entry for the same user.
    ///
    /// A replaced entry keeps its position in the roster.
    async fn upsert_entry(&self, project_id: ProjectId, entry: &ProjectMember) -> Result<()>;

    /// Change the status of an existing entry.
    async fn set_status(
        &self,
        project_id: ProjectId,
        user_id: UserId,
        status: MembershipStatus,
    ) -> Result<()>;

    /// Delete an entry.
    async fn remove_entry(&self, project_id: ProjectId, user_id: UserId) -> Result<()>;
}
