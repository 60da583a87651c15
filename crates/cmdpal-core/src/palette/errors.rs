use crate::errors::CmdPalError;
use crate::executor::ExecutorError;
use crate::notes::NotesError;

use super::SectionId;

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("No section at {id}")]
    UnknownSection { id: SectionId },

    #[error("Section '{name}' has no command to run")]
    InactiveSection { name: String },

    #[error("Section '{name}' has no item {index}")]
    UnknownItem { name: String, index: usize },

    #[error("Section '{name}' is not a log section")]
    NotALog { name: String },

    #[error(transparent)]
    Executor(#[from] ExecutorError),

    #[error(transparent)]
    Notes(#[from] NotesError),
}

impl CmdPalError for PaletteError {
    fn error_code(&self) -> &'static str {
        match self {
            PaletteError::UnknownSection { .. } => "UNKNOWN_SECTION",
            PaletteError::InactiveSection { .. } => "INACTIVE_SECTION",
            PaletteError::UnknownItem { .. } => "UNKNOWN_ITEM",
            PaletteError::NotALog { .. } => "NOT_A_LOG_SECTION",
            PaletteError::Executor(e) => e.error_code(),
            PaletteError::Notes(e) => e.error_code(),
        }
    }
}
