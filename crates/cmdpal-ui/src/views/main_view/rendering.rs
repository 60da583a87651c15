//! Render implementation for MainView.

use gpui::{Context, FontWeight, IntoElement, Render, Window, div, prelude::*, px};

use crate::theme;
use crate::views::{collapsed_strip, section_view, status_area};

use super::main_view_def::MainView;

pub(super) const HEADER_TITLE: &str = "CMD_PAL  v1.0";

impl MainView {
    fn render_header(&self) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .justify_center()
            .pb(px(theme::SPACE_2))
            .bg(theme::header_bg())
            .text_color(theme::header_text())
            .text_size(px(theme::TEXT_HEADER))
            .font_weight(FontWeight::BOLD)
            .child(HEADER_TITLE)
    }

    fn render_columns(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let columns: Vec<_> = self
            .palette
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| {
                section_view::render_column(
                    index,
                    column,
                    &self.scroll_handles,
                    &self.note_inputs,
                    cx,
                )
            })
            .collect();

        div()
            .flex_1()
            .w_full()
            .flex()
            .flex_row()
            .gap(px(theme::SPACE_1))
            .children(columns)
    }
}

impl Render for MainView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let collapsed = self.palette.focus().is_collapsed();

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(theme::app_bg())
            .when(collapsed, |this| {
                this.child(collapsed_strip::render_collapsed_strip())
            })
            .when(!collapsed, |this| {
                this.child(self.render_header())
                    .child(self.render_columns(cx))
                    .child(status_area::render_status_area(
                        self.palette.status(),
                        &self.status_scroll,
                    ))
            })
    }
}
