//! Status area under the columns: hover text and `run` output.

use cmdpal_core::StatusArea;
use gpui::{IntoElement, ScrollHandle, div, prelude::*, px};

use crate::theme;

pub fn render_status_area(status: &StatusArea, scroll: &ScrollHandle) -> impl IntoElement {
    div()
        .id("status-area")
        .w_full()
        .h(px(theme::STATUS_HEIGHT))
        .flex_shrink_0()
        .overflow_y_scroll()
        .track_scroll(scroll)
        .px(px(theme::SPACE_3))
        .py(px(theme::SPACE_2))
        .bg(theme::header_bg())
        .text_color(theme::header_text())
        .text_size(px(theme::TEXT_BASE))
        .child(status.text().to_string())
}
