//! Task status and label applicability rules.
//!
//! A task may only point at a status that belongs to its own project or at
//! a global default status. Labels are always project scoped.

use super::models::{LabelId, ProjectId, TaskLabel, TaskStatus};
use crate::error::{ErrorContext, ErrorWithContext, TaskboardError};
use serde::Serialize;

/// Field name used when reporting status failures.
pub const STATUS_FIELD: &str = "status_id";

/// Field name used when reporting label failures.
pub const LABELS_FIELD: &str = "label_ids";

/// Why a status cannot be assigned.
///
/// The two kinds carry different user-facing messages and must be kept
/// apart at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum StatusValidationError {
    /// No status with the requested id exists.
    #[error("The selected status is invalid.")]
    NotFound,

    /// The status exists but belongs to another project.
    #[error("The selected status is not valid for this project.")]
    NotApplicableToProject,
}

impl StatusValidationError {
    /// Translate into a field-level validation error.
    #[must_use]
    pub fn into_field_error(self) -> ErrorWithContext {
        TaskboardError::validation("The given data was invalid.")
            .with_context(ErrorContext::new().with_field_error(STATUS_FIELD, self.to_string()))
    }
}

/// A label that cannot be attached to a task of the given project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("The selected label {label_id} is not valid for this project.")]
pub struct LabelValidationError {
    pub label_id: LabelId,
}

impl LabelValidationError {
    #[must_use]
    pub fn into_field_error(self) -> ErrorWithContext {
        TaskboardError::validation("The given data was invalid.")
            .with_context(ErrorContext::new().with_field_error(LABELS_FIELD, self.to_string()))
    }
}

/// Status belongs to the project, or is an unscoped default.
#[must_use]
pub fn is_valid_status_for_project(status: &TaskStatus, project_id: ProjectId) -> bool {
    status.project_id == Some(project_id) || (status.is_default && status.project_id.is_none())
}

/// Check a looked-up status against a project.
///
/// `None` means the lookup found nothing.
///
/// # Example
///
/// ```rust
/// use taskboard::projects::{
///     validate_status_for_project, ProjectId, StatusValidationError, TaskStatus,
/// };
///
/// let todo = TaskStatus::for_project(1, "Todo", 5);
/// assert!(validate_status_for_project(Some(&todo), ProjectId(5)).is_ok());
/// assert_eq!(
///     validate_status_for_project(Some(&todo), ProjectId(6)),
///     Err(StatusValidationError::NotApplicableToProject),
/// );
/// assert_eq!(
///     validate_status_for_project(None, ProjectId(5)),
///     Err(StatusValidationError::NotFound),
/// );
/// ```
pub fn validate_status_for_project(
    status: Option<&TaskStatus>,
    project_id: ProjectId,
) -> Result<(), StatusValidationError> {
    let status = status.ok_or(StatusValidationError::NotFound)?;
    if is_valid_status_for_project(status, project_id) {
        Ok(())
    } else {
        Err(StatusValidationError::NotApplicableToProject)
    }
}

/// Every label must belong to the project; reports the first that doesn't.
pub fn validate_labels_for_project<'a, I>(labels: I, project_id: ProjectId) -> Result<(), LabelValidationError>
where
    I: IntoIterator<Item = &'a TaskLabel>,
{
    match labels.into_iter().find(|label| label.project_id != project_id) {
        Some(label) => Err(LabelValidationError { label_id: label.id }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(id: u64, project_id: u64) -> TaskLabel {
        TaskLabel {
            id: LabelId(id),
            name: format!("label-{id}"),
            project_id: ProjectId(project_id),
        }
    }

    #[test]
    fn test_project_scoped_status() {
        let status = TaskStatus::for_project(1, "In review", 5);
        assert!(is_valid_status_for_project(&status, ProjectId(5)));
        assert!(!is_valid_status_for_project(&status, ProjectId(6)));
    }

    #[test]
    fn test_global_default_status_valid_everywhere() {
        let status = TaskStatus::global_default(1, "Todo");
        for project in [1, 5, 6, u64::MAX] {
            assert!(is_valid_status_for_project(&status, ProjectId(project)));
        }
    }

    #[test]
    fn test_unscoped_non_default_status_is_invalid() {
        let status = TaskStatus {
            is_default: false,
            ..TaskStatus::global_default(1, "Orphan")
        };
        assert!(!is_valid_status_for_project(&status, ProjectId(5)));
    }

    #[test]
    fn test_default_flag_does_not_leak_across_projects() {
        let status = TaskStatus {
            is_default: true,
            ..TaskStatus::for_project(1, "Done", 5)
        };
        assert!(is_valid_status_for_project(&status, ProjectId(5)));
        assert!(!is_valid_status_for_project(&status, ProjectId(6)));
    }

    #[test]
    fn test_distinct_messages() {
        assert_eq!(
            StatusValidationError::NotFound.to_string(),
            "The selected status is invalid."
        );
        assert_eq!(
            StatusValidationError::NotApplicableToProject.to_string(),
            "The selected status is not valid for this project."
        );
    }

    #[test]
    fn test_field_error_carries_message() {
        let err = StatusValidationError::NotApplicableToProject.into_field_error();
        assert!(matches!(err.error(), TaskboardError::Validation(_)));
        assert_eq!(
            err.context().field_errors[STATUS_FIELD],
            vec!["The selected status is not valid for this project.".to_string()]
        );
    }

    #[test]
    fn test_labels_must_belong_to_project() {
        let labels = [label(1, 5), label(2, 5)];
        assert!(validate_labels_for_project(&labels, ProjectId(5)).is_ok());

        let labels = [label(1, 5), label(2, 6), label(3, 7)];
        let err = validate_labels_for_project(&labels, ProjectId(5)).unwrap_err();
        assert_eq!(err.label_id, LabelId(2));

        let none: [TaskLabel; 0] = [];
        assert!(validate_labels_for_project(&none, ProjectId(5)).is_ok());
    }
}
