//! Raw INI reading on top of `rust-ini`.
//!
//! The parser is configured for shell commands as values: quotes and
//! backslashes are kept verbatim, `;` inside a value is not a comment, and
//! indented lines continue the previous value. Keys are lowercased here, and
//! entries of a `[DEFAULT]` section act as fallbacks for every other section.

use std::path::Path;

use ::ini::{Ini, ParseOption, Properties};

use crate::errors::ConfigError;

/// Section whose entries supply fallback values instead of a widget.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// One `[Section]` block with its key/value entries in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniSection {
    name: String,
    entries: Vec<(String, String)>,
}

impl IniSection {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a value by key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    fn inherit(&mut self, defaults: &[(String, String)]) {
        for (key, value) in defaults {
            if self.get(key).is_none() {
                self.entries.push((key.clone(), value.clone()));
            }
        }
    }
}

/// A parsed INI file: widget sections in the order they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<IniSection>,
}

impl IniDocument {
    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|s| s.name == name)
    }
}

fn parse_error(path: &Path, message: impl Into<String>) -> ConfigError {
    ConfigError::ConfigParseError {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

fn parse_option() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        enabled_indented_mutiline_value: true,
        ..ParseOption::default()
    }
}

fn lowered_entries(
    name: &str,
    properties: &Properties,
    path: &Path,
) -> Result<Vec<(String, String)>, ConfigError> {
    let mut entries: Vec<(String, String)> = Vec::new();
    for (key, value) in properties.iter() {
        let key = key.trim().to_lowercase();
        if entries.iter().any(|(k, _)| *k == key) {
            return Err(parse_error(
                path,
                format!("duplicate key '{}' in section '{}'", key, name),
            ));
        }
        entries.push((key, value.trim().to_string()));
    }
    Ok(entries)
}

/// Parse INI content. `path` is only used for error messages.
pub fn parse_ini(content: &str, path: &Path) -> Result<IniDocument, ConfigError> {
    let ini = Ini::load_from_str_opt(content, parse_option())
        .map_err(|err| parse_error(path, err.to_string()))?;

    let mut defaults: Vec<(String, String)> = Vec::new();
    let mut sections: Vec<IniSection> = Vec::new();

    for (name, properties) in ini.iter() {
        let Some(name) = name else {
            if properties.iter().next().is_some() {
                return Err(parse_error(path, "key/value pair before any section header"));
            }
            continue;
        };

        let entries = lowered_entries(name, properties, path)?;
        if name == DEFAULT_SECTION {
            defaults.extend(entries);
            continue;
        }
        if sections.iter().any(|s| s.name == name) {
            return Err(parse_error(path, format!("duplicate section '{}'", name)));
        }
        sections.push(IniSection {
            name: name.to_string(),
            entries,
        });
    }

    for section in &mut sections {
        section.inherit(&defaults);
    }

    Ok(IniDocument { sections })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<IniDocument, ConfigError> {
        parse_ini(content, Path::new("test.ini"))
    }

    fn names(doc: &IniDocument) -> Vec<&str> {
        doc.sections().iter().map(|s| s.name()).collect()
    }

    #[test]
    fn test_parse_sections_in_order() {
        let doc = parse("[b]\nx = 1\n\n[a]\ny = 2\n").unwrap();
        assert_eq!(names(&doc), vec!["b", "a"]);
        assert_eq!(doc.section("a").unwrap().get("y"), Some("2"));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let doc = parse("[Uptime]\nType = display\n").unwrap();
        let section = doc.section("Uptime").unwrap();
        assert_eq!(section.get("type"), Some("display"));
        assert_eq!(section.get("TYPE"), Some("display"));
    }

    #[test]
    fn test_section_names_keep_case() {
        let doc = parse("[Ruby Shell]\ntype = log\n").unwrap();
        assert_eq!(names(&doc), vec!["Ruby Shell"]);
    }

    #[test]
    fn test_value_keeps_semicolons_and_quotes() {
        let doc = parse("[History]\nvalue = tail -n 50 ~/.zsh_history | cut -d \";\" -f2- -s\n")
            .unwrap();
        assert_eq!(
            doc.section("History").unwrap().get("value"),
            Some("tail -n 50 ~/.zsh_history | cut -d \";\" -f2- -s")
        );
    }

    #[test]
    fn test_value_keeps_label_marker_and_backslashes() {
        let doc = parse("[s]\nvalue = printf 'a\\nb' ;: two lines\n").unwrap();
        assert_eq!(
            doc.section("s").unwrap().get("value"),
            Some("printf 'a\\nb' ;: two lines")
        );
    }

    #[test]
    fn test_colon_delimiter() {
        let doc = parse("[s]\ninterval: 4\n").unwrap();
        assert_eq!(doc.section("s").unwrap().get("interval"), Some("4"));
    }

    #[test]
    fn test_comments_are_skipped() {
        let doc = parse("# header\n; other\n[s]\nkey = v\n").unwrap();
        assert_eq!(doc.section("s").unwrap().entries().len(), 1);
    }

    #[test]
    fn test_default_section_supplies_fallbacks() {
        let doc =
            parse("[DEFAULT]\ninterval = 4\n\n[Uptime]\ntype = display\nvalue = uptime\n").unwrap();
        assert_eq!(names(&doc), vec!["Uptime"]);
        assert_eq!(doc.section("Uptime").unwrap().get("interval"), Some("4"));
    }

    #[test]
    fn test_section_value_overrides_default() {
        let doc = parse("[DEFAULT]\ninterval = 4\n\n[Uptime]\ninterval = 10\n").unwrap();
        assert_eq!(doc.section("Uptime").unwrap().get("interval"), Some("10"));
    }

    #[test]
    fn test_key_before_section_is_error() {
        assert!(matches!(
            parse("type = log\n"),
            Err(ConfigError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_duplicate_key_differing_in_case_is_error() {
        let err = parse("[a]\ntype = log\nTYPE = display\n").unwrap_err();
        assert!(err.to_string().contains("duplicate key 'type'"));
    }

    #[test]
    fn test_empty_document() {
        let doc = parse("").unwrap();
        assert!(doc.sections().is_empty());
    }
}
