//! Task status lookup trait.

use crate::error::Result;
use crate::projects::models::{StatusId, TaskStatus};
use async_trait::async_trait;

/// Task status lookup by id.
#[async_trait]
pub trait TaskStatusStore: Send + Sync {
    /// Find a status, whichever project it belongs to.
    async fn find_status(&self, id: StatusId) -> Result<Option<TaskStatus>>;
}
