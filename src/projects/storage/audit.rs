//! Project audit storage trait.

use crate::error::Result;
use crate::projects::audit::ProjectAuditEntry;
use crate::projects::models::ProjectId;
use async_trait::async_trait;
use std::future::Future;

/// Trait for project audit storage.
#[async_trait]
pub trait ProjectAuditStore: Send + Sync {
    /// Record an audit entry.
    async fn record_audit(&self, entry: &ProjectAuditEntry) -> Result<()>;

    /// Get audit log for a project, newest first.
    async fn get_project_audit_log(
        &self,
        project_id: ProjectId,
        limit: usize,
    ) -> Result<Vec<ProjectAuditEntry>>;
}

/// Fire-and-forget audit recording used by the managers.
pub trait OptionalAuditStore: Send + Sync + Clone + 'static {
    /// Record an audit entry. Errors are logged, not propagated.
    fn record(&self, entry: ProjectAuditEntry) -> impl Future<Output = ()> + Send;
}

/// No-op implementation for when audit logging is disabled.
impl OptionalAuditStore for () {
    async fn record(&self, _entry: ProjectAuditEntry) {}
}

/// Wrapper to enable audit logging with a real store.
#[derive(Clone)]
pub struct WithAuditStore<A: ProjectAuditStore + Clone>(pub A);

impl<A: ProjectAuditStore + Clone + 'static> OptionalAuditStore for WithAuditStore<A> {
    async fn record(&self, entry: ProjectAuditEntry) {
        if let Err(e) = self.0.record_audit(&entry).await {
            tracing::warn!(
                error = %e,
                event = %entry.event,
                project_id = %entry.project_id,
                "Failed to record audit entry"
            );
        }
    }
}
