/// Text shown in the status area under the columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusArea {
    text: String,
}

impl StatusArea {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the contents.
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Add `line` as a new paragraph.
    pub fn append(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_separates_paragraphs() {
        let mut status = StatusArea::default();
        status.append("one");
        status.append("two");
        assert_eq!(status.text(), "one\ntwo");
    }

    #[test]
    fn test_show_replaces() {
        let mut status = StatusArea::default();
        status.append("old");
        status.show("new");
        assert_eq!(status.text(), "new");
    }
}
