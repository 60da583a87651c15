use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found, set $HOME environment variable")]
    HomeNotFound,
}

/// Centralized path construction for the `~/.cmd_pal/` directory layout.
///
/// Use `resolve()` in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct CmdPalPaths {
    base_dir: PathBuf,
}

impl CmdPalPaths {
    /// Resolve paths from the user's home directory (`~/.cmd_pal`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            base_dir: home.join(".cmd_pal"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The base `~/.cmd_pal` directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The default configuration file, created on first run.
    pub fn user_config(&self) -> PathBuf {
        self.base_dir.join("config")
    }

    /// Notes file referenced by the built-in default configuration.
    pub fn default_notes_file(&self) -> PathBuf {
        self.base_dir.join("notes.txt")
    }
}

/// Expand a leading `~` or `~/` against the user's home directory.
///
/// Paths without a leading tilde are returned unchanged. `~user` forms are
/// not expanded.
pub fn expand_home(raw: &str) -> Result<PathBuf, PathError> {
    if !raw.starts_with('~') {
        return Ok(PathBuf::from(raw));
    }
    let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
    Ok(expand_home_with(raw, &home))
}

/// Expand a leading tilde against an explicit home directory.
pub fn expand_home_with(raw: &str, home: &Path) -> PathBuf {
    if raw == "~" {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}
