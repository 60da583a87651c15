//! Command-line surface of `cmd-pal`.


use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use cmdpal_config::{ConfigError, PaletteConfig};
use cmdpal_paths::CmdPalPaths;
use tracing::info;

pub fn build_cli() -> Command {
    Command::new("cmd-pal")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Always-available palette of live shell command output")
        .long_about("CMD_PAL shows one column per configuration file. Sections re-run their command on an interval and render the output as clickable items, plain text, or an appendable notes log. The default configuration lives in ~/.cmd_pal/config and is created on first run.")
        .arg(
            Arg::new("config")
                .short('c')
                .value_name("PATH")
                .help("Load an additional configuration file as its own column (repeatable)")
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// Extra config files in the order given.
pub fn config_paths(matches: &ArgMatches) -> Vec<PathBuf> {
    matches
        .get_many::<PathBuf>("config")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default()
}

/// Default config (bootstrapped if missing) plus every `-c` file.
pub fn load_configs(extra: &[PathBuf]) -> Result<Vec<PaletteConfig>, ConfigError> {
    let paths = CmdPalPaths::resolve()?;
    let configs = cmdpal_config::load_all(&paths, extra)?;

    info!(
        event = "ui.config.load_completed",
        columns = configs.len(),
        sections = configs.iter().map(|c| c.sections.len()).sum::<usize>()
    );
    Ok(configs)
}
