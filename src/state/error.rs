//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Draft name failed validation. Message text matches the notification
    /// shown to the user.
    #[error("Input field cannot be empty")]
    EmptyName,

    /// Update requested without an active edit session
    #[error("No task selected for editing")]
    EditTargetNotSet,

    /// Task not found in the local snapshot
    #[error("Task not found: {id}")]
    TaskNotFound { id: String },

    /// Generic state error
    #[error("State error: {0}")]
    #[allow(dead_code)]
    Other(String),
}
