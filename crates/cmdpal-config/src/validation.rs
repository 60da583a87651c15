//! Conversion of raw INI sections into typed [`Section`]s.
//!
//! Every section is checked at load time so a misconfigured widget stops
//! startup instead of failing the first time it is rendered.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use crate::errors::ConfigError;
use crate::ini::IniSection;
use crate::types::{Action, PaletteConfig, Section, SectionKind};

/// Parse an INI boolean (`1/yes/true/on`, `0/no/false/off`, case-insensitive).
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

fn required<'a>(section: &'a IniSection, key: &str, path: &Path) -> Result<&'a str, ConfigError> {
    section.get(key).ok_or_else(|| ConfigError::MissingKey {
        path: path.to_path_buf(),
        section: section.name().to_string(),
        key: key.to_string(),
    })
}

fn invalid(
    section: &IniSection,
    path: &Path,
    key: &str,
    value: &str,
    message: impl Into<String>,
) -> ConfigError {
    ConfigError::InvalidValue {
        path: path.to_path_buf(),
        section: section.name().to_string(),
        key: key.to_string(),
        value: value.to_string(),
        message: message.into(),
    }
}

fn optional_bool(section: &IniSection, key: &str, path: &Path) -> Result<bool, ConfigError> {
    match section.get(key) {
        None => Ok(false),
        Some(raw) => {
            parse_bool(raw).ok_or_else(|| invalid(section, path, key, raw, "expected a boolean"))
        }
    }
}

/// Build a typed [`Section`] from a raw INI section.
///
/// # Errors
///
/// - `ConfigError::MissingKey` when `type`, `value` or `interval` is absent
/// - `ConfigError::InvalidValue` for an unknown type/action, a non-positive
///   interval, a malformed boolean, or an empty log path
/// - `ConfigError::Path` when a `~` log path cannot be expanded
pub fn section_from_ini(section: &IniSection, path: &Path) -> Result<Section, ConfigError> {
    let raw_kind = required(section, "type", path)?;
    let kind: SectionKind = raw_kind
        .parse()
        .map_err(|msg: String| invalid(section, path, "type", raw_kind, msg))?;

    let value = required(section, "value", path)?.to_string();

    let raw_interval = required(section, "interval", path)?;
    let interval_secs: u64 = raw_interval
        .trim()
        .parse()
        .map_err(|_| invalid(section, path, "interval", raw_interval, "expected whole seconds"))?;
    if interval_secs == 0 {
        return Err(invalid(
            section,
            path,
            "interval",
            raw_interval,
            "must be greater than zero",
        ));
    }

    let action = match section.get("action") {
        None => None,
        Some(raw) => Some(
            raw.parse::<Action>()
                .map_err(|msg| invalid(section, path, "action", raw, msg))?,
        ),
    };

    let log_path = if kind == SectionKind::Log {
        if value.trim().is_empty() {
            return Err(invalid(
                section,
                path,
                "value",
                &value,
                "log sections need a file path",
            ));
        }
        Some(cmdpal_paths::expand_home(value.trim())?)
    } else {
        None
    };

    Ok(Section {
        name: section.name().to_string(),
        kind,
        value,
        interval: Duration::from_secs(interval_secs),
        clean: optional_bool(section, "clean", path)?,
        split: optional_bool(section, "split", path)?,
        action,
        log_path,
    })
}

/// Validate an assembled configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` for duplicate section names or
/// zero intervals (possible when a config is built in code rather than parsed).
pub fn validate_config(config: &PaletteConfig) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for section in &config.sections {
        if !seen.insert(section.name.as_str()) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "duplicate section '{}' in '{}'",
                    section.name,
                    config.path.display()
                ),
            });
        }
        if section.interval.is_zero() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("section '{}' has a zero interval", section.name),
            });
        }
    }
    Ok(())
}
