use std::path::PathBuf;

use crate::errors::CmdPalError;

#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    #[error("Failed to create notes file '{}': {source}", path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read notes file '{}': {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to append to notes file '{}': {source}", path.display())]
    AppendFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CmdPalError for NotesError {
    fn error_code(&self) -> &'static str {
        match self {
            NotesError::CreateFailed { .. } => "NOTES_CREATE_FAILED",
            NotesError::ReadFailed { .. } => "NOTES_READ_FAILED",
            NotesError::AppendFailed { .. } => "NOTES_APPEND_FAILED",
        }
    }
}
