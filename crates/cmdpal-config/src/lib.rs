//! # cmdpal-config
//!
//! Configuration types, loading, and validation for CMD_PAL.
//!
//! Configuration files are INI, read with `rust-ini`. Each `[Section]` describes
//! one palette widget (`log`, `parse_command` or `display`) and a `[DEFAULT]`
//! section supplies fallback keys. Every file loaded becomes one
//! [`PaletteConfig`] column.

mod defaults;
mod ini;
mod loading;
mod validation;

pub mod errors;
pub mod types;

pub use defaults::DEFAULT_CONFIG;
pub use errors::ConfigError;
pub use ini::{DEFAULT_SECTION, IniDocument, IniSection, parse_ini};
pub use loading::{ensure_default_config, load_all, load_config_file, parse_config};
pub use types::{Action, PaletteConfig, Section, SectionKind};
pub use validation::{parse_bool, section_from_ini, validate_config};
