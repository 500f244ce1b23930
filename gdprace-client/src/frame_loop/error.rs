// Frame loop error types

use std::fmt;

/// Errors from registering or unregistering a frame loop
#[derive(Debug)]
pub enum FrameLoopError {
    /// `start` was called while a loop is already registered
    AlreadyRunning,

    /// `start` was called outside a tokio runtime
    NoRuntime,

    /// The loop task panicked or was cancelled
    TaskFailed(String),
}

impl fmt::Display for FrameLoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRunning => write!(f, "Frame loop is already running"),
            Self::NoRuntime => write!(f, "Frame loop must be started inside a tokio runtime"),
            Self::TaskFailed(msg) => write!(f, "Frame loop task failed: {}", msg),
        }
    }
}

impl std::error::Error for FrameLoopError {}

impl From<tokio::task::JoinError> for FrameLoopError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::TaskFailed(err.to_string())
    }
}

/// Result type for frame loop operations
pub type FrameLoopResult<T> = Result<T, FrameLoopError>;
