//! Error types for collaborator prompt operations

use thiserror::Error;

/// Errors that can occur while driving a terminal confirmation prompt
///
/// The library API itself is infallible; these errors stay internal to the
/// default [`StdinConfirm`](crate::confirm::StdinConfirm) collaborator, which
/// logs them and treats the prompt as declined.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Reading the answer or writing the prompt failed
    #[error("Prompt I/O error: {0}")]
    Io(String),

    /// The blocking prompt task did not run to completion
    #[error("Prompt task error: {0}")]
    Task(String),
}

/// Result type for prompt operations
pub type PromptResult<T> = Result<T, PromptError>;

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        PromptError::Io(err.to_string())
    }
}

impl From<tokio::task::JoinError> for PromptError {
    fn from(err: tokio::task::JoinError) -> Self {
        PromptError::Task(err.to_string())
    }
}
