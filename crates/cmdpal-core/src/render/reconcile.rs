use std::collections::HashSet;

use super::items::DisplayItem;

/// How a refresh treats items that disappeared from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileMode {
    /// Drop stale items, survivors stay where they are (`clean = true`).
    Replace,
    /// Keep stale items; every fresh item is moved or appended to the end in
    /// fresh order (`clean = false`).
    Accumulate,
}

impl ReconcileMode {
    pub fn for_clean(clean: bool) -> Self {
        if clean { Self::Replace } else { Self::Accumulate }
    }
}

/// What a reconcile pass changed, by raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileDiff {
    pub removed: Vec<String>,
    pub kept: Vec<String>,
    pub added: Vec<String>,
}

impl ReconcileDiff {
    pub fn is_unchanged(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// Items currently shown by one section, in display order.
///
/// Raw text is the identity. In [`ReconcileMode::Replace`] a surviving item
/// keeps its position; in [`ReconcileMode::Accumulate`] it moves to the end so
/// the newest output is always last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedItems {
    items: Vec<DisplayItem>,
}

impl RenderedItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reconcile(&mut self, fresh: Vec<DisplayItem>, mode: ReconcileMode) -> ReconcileDiff {
        match mode {
            ReconcileMode::Replace => self.replace(fresh),
            ReconcileMode::Accumulate => self.accumulate(fresh),
        }
    }

    fn replace(&mut self, fresh: Vec<DisplayItem>) -> ReconcileDiff {
        let mut diff = ReconcileDiff::default();
        let fresh_raws: HashSet<&str> = fresh.iter().map(DisplayItem::raw).collect();

        let (kept, stale): (Vec<_>, Vec<_>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| fresh_raws.contains(item.raw()));
        diff.removed = stale.into_iter().map(|item| item.raw().to_string()).collect();
        diff.kept = kept.iter().map(|item| item.raw().to_string()).collect();
        self.items = kept;

        let shown: HashSet<String> = diff.kept.iter().cloned().collect();
        for item in fresh {
            if !shown.contains(item.raw()) {
                diff.added.push(item.raw().to_string());
                self.items.push(item);
            }
        }
        diff
    }

    fn accumulate(&mut self, fresh: Vec<DisplayItem>) -> ReconcileDiff {
        let mut diff = ReconcileDiff::default();
        for item in fresh {
            match self.items.iter().position(|shown| shown.raw() == item.raw()) {
                Some(index) => {
                    self.items.remove(index);
                    diff.kept.push(item.raw().to_string());
                }
                None => diff.added.push(item.raw().to_string()),
            }
            self.items.push(item);
        }
        diff
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&DisplayItem> {
        self.items.last()
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.items.iter().any(|item| item.raw() == raw)
    }
}
