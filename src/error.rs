use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::HashMap;

/// The main error type for Taskboard applications
#[derive(Debug, thiserror::Error)]
pub enum TaskboardError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Error context for additional error information
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Unique error ID for tracking
    pub error_id: Option<String>,
    /// Additional error details
    pub details: Option<String>,
    /// Contextual key-value pairs
    pub context: HashMap<String, String>,
    /// Field-specific validation errors
    pub field_errors: HashMap<String, Vec<String>>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error_id(mut self, id: impl Into<String>) -> Self {
        self.error_id = Some(id.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details = Some(detail.into());
        self
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn with_field_error(mut self, field: impl Into<String>, error: impl Into<String>) -> Self {
        self.field_errors
            .entry(field.into())
            .or_default()
            .push(error.into());
        self
    }
}

/// Error with attached context
///
/// Converts back into a plain [`TaskboardError`] via `Into`, or into a
/// response that carries the context (field errors, details) to the client.
#[derive(Debug)]
pub struct ErrorWithContext {
    error: TaskboardError,
    context: ErrorContext,
}

impl ErrorWithContext {
    pub fn new(error: TaskboardError, context: ErrorContext) -> Self {
        Self { error, context }
    }

    /// Get a reference to the underlying error
    pub fn error(&self) -> &TaskboardError {
        &self.error
    }

    /// Get a reference to the context
    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// Convert to a response, exposing internal details only in dev mode.
    pub fn into_response_with_mode(self, dev_mode: bool) -> Response {
        self.error.into_response_with_context(Some(self.context), dev_mode)
    }
}

impl std::fmt::Display for ErrorWithContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(ref details) = self.context.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorWithContext {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<ErrorWithContext> for TaskboardError {
    fn from(err: ErrorWithContext) -> Self {
        err.error
    }
}

impl IntoResponse for ErrorWithContext {
    fn into_response(self) -> Response {
        self.into_response_with_mode(false)
    }
}

/// Standard error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<HashMap<String, Vec<String>>>,
}

impl TaskboardError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Attach context to this error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use taskboard::{ErrorContext, TaskboardError};
    ///
    /// let error = TaskboardError::validation("The given data was invalid")
    ///     .with_context(ErrorContext::new()
    ///         .with_field_error("status_id", "The selected status is invalid."));
    ///
    /// assert_eq!(error.context().field_errors["status_id"].len(), 1);
    /// ```
    pub fn with_context(self, context: ErrorContext) -> ErrorWithContext {
        ErrorWithContext::new(self, context)
    }

    /// Convert error to a response with optional context.
    ///
    /// Internal error details are only exposed when `dev_mode` is `true`.
    pub fn into_response_with_context(self, context: Option<ErrorContext>, dev_mode: bool) -> Response {
        let status = self.status_code();

        let error_msg = if dev_mode {
            self.to_string()
        } else {
            self.safe_message()
        };

        let mut response = ErrorResponse {
            error: error_msg,
            error_id: None,
            details: None,
            context: None,
            field_errors: None,
        };

        if let Some(context) = context {
            response.error_id = context.error_id;
            response.details = context.details;
            if !context.context.is_empty() {
                response.context = Some(context.context);
            }
            if !context.field_errors.is_empty() {
                response.field_errors = Some(context.field_errors);
            }
        }

        let error_id = response
            .error_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        response.error_id = Some(error_id.clone());

        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                error_id = %error_id,
                error = %self,
                "Request failed"
            );
        } else {
            tracing::debug!(
                status = status.as_u16(),
                error_id = %error_id,
                error = %self,
                "Request rejected"
            );
        }

        (status, Json(response)).into_response()
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) | Self::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message suitable for clients: 4xx messages as-is, 5xx generic.
    fn safe_message(&self) -> String {
        match self {
            Self::NotFound(msg) => format!("Not found: {}", msg),
            Self::BadRequest(msg) => format!("Bad request: {}", msg),
            Self::Forbidden(msg) => format!("Forbidden: {}", msg),
            Self::Validation(msg) => format!("Validation failed: {}", msg),
            Self::Conflict(msg) => format!("Conflict: {}", msg),
            Self::Internal(_) | Self::Anyhow(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for TaskboardError {
    fn into_response(self) -> Response {
        self.into_response_with_context(None, false)
    }
}

/// Result type alias for Taskboard operations
pub type Result<T> = std::result::Result<T, TaskboardError>;

impl From<serde_json::Error> for TaskboardError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            TaskboardError::BadRequest(format!("JSON error: {}", err))
        } else {
            TaskboardError::Internal(format!("JSON serialization error: {}", err))
        }
    }
}
