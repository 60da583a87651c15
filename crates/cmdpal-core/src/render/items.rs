use std::collections::HashSet;
use std::hash::Hash;
use std::sync::LazyLock;

use regex::Regex;

/// Visible characters before an item is cut off with `...`.
pub const MAX_DISPLAY_CHARS: usize = 100;

/// `;:` followed by optional whitespace marks an inline label.
static LABEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";:\s*(.*)").expect("label pattern is a valid regex"));

/// One renderable entry of a `parse_command` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    raw: String,
    label: Option<String>,
    display: String,
}

impl DisplayItem {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let label = extract_label(&raw).map(str::to_string);
        let display = truncate_for_display(label.as_deref().unwrap_or(&raw));
        Self {
            raw,
            label,
            display,
        }
    }

    /// Full original text. This is what activation executes.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Single-line text shown on the item's button.
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// Text after the first `;:` marker, up to the end of that line.
///
/// An empty label counts as no label.
pub fn extract_label(text: &str) -> Option<&str> {
    LABEL_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|label| !label.is_empty())
}

/// Cap at [`MAX_DISPLAY_CHARS`] characters and flatten newlines.
pub fn truncate_for_display(text: &str) -> String {
    let shortened = if text.chars().count() > MAX_DISPLAY_CHARS {
        let mut cut: String = text.chars().take(MAX_DISPLAY_CHARS).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    };
    shortened.replace('\n', "  ")
}

/// Split on newlines, newest (last) line first. Unsplit output is one element.
pub fn split_output(raw: &str, split: bool) -> Vec<&str> {
    if split {
        raw.split('\n').rev().collect()
    } else {
        vec![raw]
    }
}

/// Drop repeats, keeping the first occurrence of each value.
pub fn dedup_stable<T>(values: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Full pipeline for `parse_command` output: split, dedup, skip blank entries.
pub fn itemize(raw: &str, split: bool) -> Vec<DisplayItem> {
    dedup_stable(split_output(raw, split))
        .into_iter()
        .filter(|entry| !entry.trim().is_empty())
        .map(DisplayItem::new)
        .collect()
}

/// Text for a `display` section: the first entry of the processed output.
pub fn display_text(raw: &str, split: bool) -> String {
    dedup_stable(split_output(raw, split))
        .first()
        .map(|entry| entry.to_string())
        .unwrap_or_default()
}
