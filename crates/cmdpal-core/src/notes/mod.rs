//! Append-only notes files backing `log` sections.

mod errors;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, info};

pub use errors::NotesError;

/// strftime pattern for entry headers, e.g. `-- 10/19/26 09:05AM --`.
pub const ENTRY_HEADER_FORMAT: &str = "-- %m/%d/%y %I:%M%p --";

/// One notes file. The file is created on first access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesLog {
    path: PathBuf,
}

impl NotesLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file (and parent directories) if missing.
    pub fn ensure_exists(&self) -> Result<(), NotesError> {
        if self.path.exists() {
            return Ok(());
        }

        let create_err = |source| NotesError::CreateFailed {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(create_err)?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(create_err)?;

        debug!(event = "core.notes.file_created", path = %self.path.display());
        Ok(())
    }

    /// Whole file contents.
    pub fn read_contents(&self) -> Result<String, NotesError> {
        self.ensure_exists()?;
        fs::read_to_string(&self.path).map_err(|source| NotesError::ReadFailed {
            path: self.path.clone(),
            source,
        })
    }

    /// Append `text` under a timestamp header for `at`.
    pub fn append_entry(&self, text: &str, at: NaiveDateTime) -> Result<(), NotesError> {
        self.ensure_exists()?;

        let append_err = |source| NotesError::AppendFailed {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(append_err)?;
        file.write_all(format_entry(text, at).as_bytes())
            .map_err(append_err)?;

        info!(
            event = "core.notes.append_completed",
            path = %self.path.display(),
            bytes = text.len()
        );
        Ok(())
    }
}

/// Header line, blank line, the text, trailing newline.
pub fn format_entry(text: &str, at: NaiveDateTime) -> String {
    format!("{}\n\n{}\n", at.format(ENTRY_HEADER_FORMAT), text)
}
