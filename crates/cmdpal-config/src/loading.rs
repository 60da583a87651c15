//! Configuration loading.
//!
//! # Configuration Sources
//!
//! 1. **Default config** - `~/.cmd_pal/config`, written from [`DEFAULT_CONFIG`]
//!    on first run
//! 2. **Extra configs** - one per `-c <path>` CLI flag, in flag order
//!
//! Each file is loaded independently and becomes its own column; sections are
//! never merged across files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use cmdpal_paths::CmdPalPaths;

use crate::defaults::DEFAULT_CONFIG;
use crate::errors::ConfigError;
use crate::ini::parse_ini;
use crate::types::PaletteConfig;
use crate::validation::{section_from_ini, validate_config};

/// Ensure the default config exists, writing the built-in one if absent.
///
/// Returns the path to the default config file.
pub fn ensure_default_config(paths: &CmdPalPaths) -> Result<PathBuf, ConfigError> {
    let config_path = paths.user_config();
    if config_path.exists() {
        return Ok(config_path);
    }

    info!(
        event = "config.default.create_started",
        path = %config_path.display()
    );

    let io_err = |source| ConfigError::IoError {
        path: config_path.clone(),
        source,
    };
    fs::create_dir_all(paths.base_dir()).map_err(io_err)?;
    fs::write(&config_path, DEFAULT_CONFIG).map_err(io_err)?;

    info!(
        event = "config.default.create_completed",
        path = %config_path.display()
    );
    Ok(config_path)
}

/// Parse configuration content. `path` is recorded on the result and used in errors.
pub fn parse_config(content: &str, path: &Path) -> Result<PaletteConfig, ConfigError> {
    let document = parse_ini(content, path)?;
    let sections = document
        .sections()
        .iter()
        .map(|section| section_from_ini(section, path))
        .collect::<Result<Vec<_>, _>>()?;

    let config = PaletteConfig {
        path: std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
        sections,
    };
    validate_config(&config)?;
    Ok(config)
}

/// Load and validate a single configuration file.
pub fn load_config_file(path: &Path) -> Result<PaletteConfig, ConfigError> {
    debug!(event = "config.load_started", path = %path.display());

    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content, path)?;

    info!(
        event = "config.load_completed",
        path = %config.path.display(),
        sections = config.sections.len()
    );
    Ok(config)
}

/// Load the default config (creating it if needed) followed by every extra file.
///
/// # Errors
///
/// Fails on the first file that cannot be read, parsed, or validated. A
/// missing extra file is an error rather than an empty column.
pub fn load_all(paths: &CmdPalPaths, extra: &[PathBuf]) -> Result<Vec<PaletteConfig>, ConfigError> {
    let default_path = ensure_default_config(paths)?;

    let mut configs = Vec::with_capacity(extra.len() + 1);
    configs.push(load_config_file(&default_path)?);
    for path in extra {
        configs.push(load_config_file(path)?);
    }
    Ok(configs)
}
