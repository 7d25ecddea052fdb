//! Task manager.
//!
//! Status and label changes on tasks, checked against the task's project.
//! Returns the updated task; persisting it is left to the caller.

use super::audit::{ProjectAuditEntry, ProjectAuditEvent};
use super::error::{ProjectError, Result};
use super::models::{Project, StatusId, Task, TaskLabel, User};
use super::policy::ProjectPolicy;
use super::status::{validate_labels_for_project, validate_status_for_project};
use super::storage::{OptionalAuditStore, ProjectAuditStore, ProjectStore, TaskStatusStore, WithAuditStore};
use tracing::{info, instrument};

/// Task manager - status/label assignment with policy and validity checks.
pub struct TaskManager<P, T, A = ()>
where
    P: ProjectStore,
    T: TaskStatusStore,
    A: OptionalAuditStore,
{
    project_store: P,
    status_store: T,
    audit_store: A,
}

impl<P, T> TaskManager<P, T, ()>
where
    P: ProjectStore,
    T: TaskStatusStore,
{
    #[must_use]
    pub fn new(project_store: P, status_store: T) -> Self {
        Self {
            project_store,
            status_store,
            audit_store: (),
        }
    }

    /// Enable audit logging with the given store.
    pub fn with_audit_store<AuditStore: ProjectAuditStore + Clone + 'static>(
        self,
        audit_store: AuditStore,
    ) -> TaskManager<P, T, WithAuditStore<AuditStore>> {
        TaskManager {
            project_store: self.project_store,
            status_store: self.status_store,
            audit_store: WithAuditStore(audit_store),
        }
    }
}

impl<P, T, A> TaskManager<P, T, A>
where
    P: ProjectStore,
    T: TaskStatusStore,
    A: OptionalAuditStore,
{
    /// Move a task to another status.
    ///
    /// Fails with [`ProjectError::InvalidStatus`] when the status does not
    /// exist or belongs to a different project.
    #[instrument(skip(self, task, actor), fields(task_id = %task.id, actor_id = %actor.id))]
    pub async fn change_status(&self, task: &Task, status_id: StatusId, actor: &User) -> Result<Task> {
        let project = self.load_project(task).await?;
        ProjectPolicy::authorize_edit_task(actor, &project, task)?;

        let status = self.status_store.find_status(status_id).await?;
        validate_status_for_project(status.as_ref(), project.id)?;

        let previous = task.status_id;
        let updated = Task {
            status_id: Some(status_id),
            ..task.clone()
        };

        info!(project_id = %project.id, %status_id, "Task status changed");

        let details = match previous {
            Some(previous) => format!("task={} status={}->{}", task.id, previous, status_id),
            None => format!("task={} status=none->{}", task.id, status_id),
        };
        self.audit_store
            .record(
                ProjectAuditEntry::new(ProjectAuditEvent::TaskStatusChanged, project.id, actor.id)
                    .with_details(details),
            )
            .await;

        Ok(updated)
    }

    /// Replace a task's labels.
    ///
    /// Every label must belong to the task's project.
    #[instrument(skip(self, task, labels, actor), fields(task_id = %task.id, actor_id = %actor.id))]
    pub async fn assign_labels(&self, task: &Task, labels: &[TaskLabel], actor: &User) -> Result<Task> {
        let project = self.load_project(task).await?;
        ProjectPolicy::authorize_edit_task(actor, &project, task)?;
        validate_labels_for_project(labels, project.id)?;

        let updated = Task {
            label_ids: labels.iter().map(|label| label.id).collect(),
            ..task.clone()
        };

        info!(project_id = %project.id, count = labels.len(), "Task labels changed");

        let label_list = updated
            .label_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.audit_store
            .record(
                ProjectAuditEntry::new(ProjectAuditEvent::TaskLabelsChanged, project.id, actor.id)
                    .with_details(format!("task={} labels=[{}]", task.id, label_list)),
            )
            .await;

        Ok(updated)
    }

    async fn load_project(&self, task: &Task) -> Result<Project> {
        self.project_store
            .find_project(task.project_id)
            .await?
            .ok_or_else(|| ProjectError::project_not_found(task.project_id))
    }
}
