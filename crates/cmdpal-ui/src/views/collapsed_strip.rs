//! Narrow strip shown while the palette window is in the background.
//!
//! The window is resized to [`COLLAPSED_WIDTH`] and shows the app name
//! stacked vertically, in the dimmed header colors.

use cmdpal_core::focus::COLLAPSED_WIDTH;
use gpui::{FontWeight, IntoElement, div, prelude::*, px};

use crate::theme;

const STRIP_LABEL: &str = "CMD_PAL";

pub fn render_collapsed_strip() -> impl IntoElement {
    div()
        .w(px(COLLAPSED_WIDTH))
        .h_full()
        .flex()
        .flex_col()
        .items_center()
        .pt(px(theme::SPACE_4))
        .bg(theme::header_bg_dim())
        .text_color(theme::header_text_dim())
        .text_size(px(theme::TEXT_MD))
        .font_weight(FontWeight::BOLD)
        .children(STRIP_LABEL.chars().map(|c| div().child(c.to_string())))
}
