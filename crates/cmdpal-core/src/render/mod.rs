//! Turning raw command output into the items a section displays.

mod items;
mod reconcile;

pub use items::{
    DisplayItem, MAX_DISPLAY_CHARS, dedup_stable, display_text, extract_label, itemize,
    split_output, truncate_for_display,
};
pub use reconcile::{ReconcileDiff, ReconcileMode, RenderedItems};
