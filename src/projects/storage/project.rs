//! Project storage trait.

use crate::error::Result;
use crate::projects::models::{Project, ProjectId, User, UserId};
use async_trait::async_trait;

/// Read access to projects and users.
///
/// `find_project` must return the project together with its full roster,
/// in a stable order (insertion order is expected). All checks for one
/// decision run against the snapshot it returns.
///
/// # Example
///
/// ```rust,ignore
/// use taskboard::projects::{Project, ProjectId, ProjectStore, User, UserId};
/// use async_trait::async_trait;
///
/// struct PgStore { pool: PgPool }
///
/// #[async_trait]
/// impl ProjectStore for PgStore {
///     async fn find_project(&self, id: ProjectId) -> Result<Option<Project>> {
///         let Some(row) = self.fetch_project_row(id).await? else {
///             return Ok(None);
///         };
///         // ORDER BY project_user.id keeps the roster order stable
///         let roster = self.fetch_roster(id).await?;
///         Ok(Some(row.into_project(roster)))
///     }
///
///     async fn find_user(&self, id: UserId) -> Result<Option<User>> {
///         self.fetch_user(id).await
///     }
/// }
/// ```
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Load a project with its roster.
    async fn find_project(&self, id: ProjectId) -> Result<Option<Project>>;

    /// Load a user.
    async fn find_user(&self, id: UserId) -> Result<Option<User>>;
}
