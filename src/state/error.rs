//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Description editor used before it was mounted
    #[error("Description editor not mounted")]
    #[allow(dead_code)]
    EditorNotMounted,

    /// Issue not found in state
    #[error("Issue not found: {id}")]
    #[allow(dead_code)]
    IssueNotFound { id: u64 },

    /// Invalid view transition
    #[error("Invalid view transition: {0}")]
    #[allow(dead_code)]
    InvalidViewTransition(String),

    /// Generic state error
    #[error("State error: {0}")]
    #[allow(dead_code)]
    Other(String),
}
