//! Typed configuration model.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Widget type of a configured section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Append-only notes file with an input field.
    Log,
    /// Command whose output is split into clickable items.
    ParseCommand,
    /// Command whose output is shown verbatim in a text pane.
    Display,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Log => "log",
            SectionKind::ParseCommand => "parse_command",
            SectionKind::Display => "display",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(SectionKind::Log),
            "parse_command" => Ok(SectionKind::ParseCommand),
            "display" => Ok(SectionKind::Display),
            other => Err(format!(
                "unknown type '{}' (expected log, parse_command or display)",
                other
            )),
        }
    }
}

/// What happens when a rendered item is activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Action {
    /// Switch to the previously focused application and type the text.
    #[default]
    Insert,
    /// Open the command in a terminal window.
    Show,
    /// Run the command in the background and append its output to the status area.
    Run,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Insert => "insert",
            Action::Show => "show",
            Action::Run => "run",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "insert" => Ok(Action::Insert),
            "show" => Ok(Action::Show),
            "run" => Ok(Action::Run),
            other => Err(format!(
                "unknown action '{}' (expected insert, show or run)",
                other
            )),
        }
    }
}

/// One configured widget. Immutable after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub kind: SectionKind,
    /// Shell command, or file path for `log` sections (as written in the file).
    pub value: String,
    pub interval: Duration,
    pub clean: bool,
    pub split: bool,
    /// Action as configured. `None` when the key was omitted.
    pub action: Option<Action>,
    /// Tilde-expanded file path for `log` sections.
    pub log_path: Option<PathBuf>,
}

impl Section {
    /// Effective action, defaulting to [`Action::Insert`].
    pub fn action(&self) -> Action {
        self.action.unwrap_or_default()
    }

    /// Header text: the section name, with the action appended when configured.
    pub fn header_label(&self) -> String {
        match self.action {
            Some(action) => format!("{} ({})", self.name, action),
            None => self.name.clone(),
        }
    }

    /// Command sections with an empty value are not rendered.
    pub fn is_renderable(&self) -> bool {
        match self.kind {
            SectionKind::Log => self.log_path.is_some(),
            SectionKind::ParseCommand | SectionKind::Display => !self.value.trim().is_empty(),
        }
    }
}

/// Sections loaded from one configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteConfig {
    pub path: PathBuf,
    pub sections: Vec<Section>,
}

impl PaletteConfig {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(kind: SectionKind, value: &str, action: Option<Action>) -> Section {
        Section {
            name: "Clipboard".to_string(),
            kind,
            value: value.to_string(),
            interval: Duration::from_secs(4),
            clean: false,
            split: false,
            action,
            log_path: None,
        }
    }

    #[test]
    fn test_section_kind_round_trips_through_str() {
        for kind in [
            SectionKind::Log,
            SectionKind::ParseCommand,
            SectionKind::Display,
        ] {
            assert_eq!(kind.as_str().parse::<SectionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_section_kind_rejects_unknown() {
        let err = "graph".parse::<SectionKind>().unwrap_err();
        assert!(err.contains("unknown type 'graph'"));
    }

    #[test]
    fn test_action_parse_is_case_insensitive() {
        assert_eq!("RUN".parse::<Action>().unwrap(), Action::Run);
        assert_eq!(" show ".parse::<Action>().unwrap(), Action::Show);
    }

    #[test]
    fn test_action_defaults_to_insert() {
        let s = section(SectionKind::ParseCommand, "pbpaste", None);
        assert_eq!(s.action(), Action::Insert);
    }

    #[test]
    fn test_header_label_includes_configured_action() {
        let s = section(SectionKind::ParseCommand, "pbpaste", Some(Action::Insert));
        assert_eq!(s.header_label(), "Clipboard (insert)");
    }

    #[test]
    fn test_header_label_without_action() {
        let s = section(SectionKind::Display, "uptime", None);
        assert_eq!(s.header_label(), "Clipboard");
    }

    #[test]
    fn test_empty_command_is_not_renderable() {
        assert!(!section(SectionKind::ParseCommand, "  ", None).is_renderable());
        assert!(!section(SectionKind::Display, "", None).is_renderable());
        assert!(section(SectionKind::Display, "uptime", None).is_renderable());
    }
}
