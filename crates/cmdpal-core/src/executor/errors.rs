use crate::errors::CmdPalError;

#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("Failed to start shell for '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    #[error("No automation backend available for '{action}' actions")]
    AutomationUnavailable { action: String },

    #[error("{backend} automation failed: {message}")]
    AutomationFailed { backend: String, message: String },

    #[error("Failed to start worker thread: {message}")]
    WorkerSpawnFailed { message: String },
}

impl CmdPalError for ExecutorError {
    fn error_code(&self) -> &'static str {
        match self {
            ExecutorError::SpawnFailed { .. } => "EXECUTOR_SPAWN_FAILED",
            ExecutorError::AutomationUnavailable { .. } => "AUTOMATION_UNAVAILABLE",
            ExecutorError::AutomationFailed { .. } => "AUTOMATION_FAILED",
            ExecutorError::WorkerSpawnFailed { .. } => "WORKER_SPAWN_FAILED",
        }
    }
}
