//! Column and section rendering.
//!
//! A column is the config file's path followed by its sections. Each section
//! has a label and, when active, a body matching its kind.

use std::collections::HashMap;

use cmdpal_core::{DisplayItem, PaletteColumn, SectionContent, SectionId, SectionState};
use gpui::{
    AnyElement, Context, ElementId, Entity, FontWeight, IntoElement, ScrollHandle, div,
    prelude::*, px,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::{Input, InputState};

use crate::theme;
use crate::views::main_view::MainView;

pub(crate) fn element_id(prefix: &str, id: SectionId) -> ElementId {
    ElementId::Name(format!("{}-{}-{}", prefix, id.column, id.index).into())
}

pub(crate) fn item_element_id(id: SectionId, index: usize) -> ElementId {
    ElementId::Name(format!("item-{}-{}-{}", id.column, id.index, index).into())
}

pub fn render_column(
    column_index: usize,
    column: &PaletteColumn,
    scroll_handles: &HashMap<SectionId, ScrollHandle>,
    note_inputs: &HashMap<SectionId, Entity<InputState>>,
    cx: &mut Context<MainView>,
) -> AnyElement {
    let sections: Vec<AnyElement> = column
        .sections()
        .iter()
        .enumerate()
        .map(|(index, state)| {
            let id = SectionId::new(column_index, index);
            render_section(id, state, scroll_handles, note_inputs, cx)
        })
        .collect();

    div()
        .flex_1()
        .min_w_0()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_3))
        .child(
            div()
                .p(px(theme::SPACE_1))
                .bg(theme::column_label_bg())
                .text_color(theme::text_bright())
                .text_size(px(theme::TEXT_BASE))
                .font_weight(FontWeight::BOLD)
                .child(column.path().display().to_string()),
        )
        .children(sections)
        .into_any_element()
}

fn render_section(
    id: SectionId,
    state: &SectionState,
    scroll_handles: &HashMap<SectionId, ScrollHandle>,
    note_inputs: &HashMap<SectionId, Entity<InputState>>,
    cx: &mut Context<MainView>,
) -> AnyElement {
    let label = div()
        .mt(px(theme::SPACE_4))
        .p(px(theme::SPACE_2))
        .bg(theme::section_label_bg())
        .text_color(theme::text_bright())
        .text_size(px(theme::TEXT_BASE))
        .font_weight(FontWeight::BOLD)
        .child(state.section().header_label());

    let body = if state.is_active() {
        match state.content() {
            SectionContent::Items(items) => {
                render_items(id, items.items(), scroll_handles.get(&id), cx)
            }
            SectionContent::Text(text) => render_text(text, cx),
            SectionContent::Log(contents) => {
                render_log(id, contents, scroll_handles.get(&id), note_inputs.get(&id), cx)
            }
        }
    } else {
        div().into_any_element()
    };

    div()
        .flex()
        .flex_col()
        .child(label)
        .child(body)
        .into_any_element()
}

fn render_items(
    id: SectionId,
    items: &[DisplayItem],
    scroll: Option<&ScrollHandle>,
    cx: &mut Context<MainView>,
) -> AnyElement {
    let rows: Vec<_> = items
        .iter()
        .enumerate()
        .map(|(index, item)| render_item(id, index, item, cx))
        .collect();

    div()
        .id(element_id("items", id))
        .h(px(theme::ITEM_LIST_HEIGHT))
        .overflow_y_scroll()
        .when_some(scroll, |this, handle| this.track_scroll(handle))
        .border_1()
        .border_color(theme::border())
        .on_scroll_wheel(cx.listener(MainView::on_scroll_wheel))
        .child(div().flex().flex_col().gap(px(theme::SPACE_1)).children(rows))
        .into_any_element()
}

fn render_item(
    id: SectionId,
    index: usize,
    item: &DisplayItem,
    cx: &mut Context<MainView>,
) -> impl IntoElement + use<> {
    div()
        .id(item_element_id(id, index))
        .w_full()
        .px(px(theme::SPACE_2))
        .py(px(theme::SPACE_1))
        .bg(theme::item_bg())
        .text_color(theme::text())
        .text_size(px(theme::TEXT_MD))
        .cursor_pointer()
        .hover(|this| this.bg(theme::item_hover_bg()))
        .on_hover(cx.listener(move |view, hovered: &bool, _, cx| {
            if *hovered {
                view.on_item_hover(id, index, cx);
            }
        }))
        .on_click(cx.listener(move |view, _, _, cx| {
            view.on_item_click(id, index, cx);
        }))
        .child(item.display().to_string())
}

fn render_text(text: &str, cx: &mut Context<MainView>) -> AnyElement {
    div()
        .p(px(theme::SPACE_2))
        .on_scroll_wheel(cx.listener(MainView::on_scroll_wheel))
        .bg(theme::field_bg())
        .text_color(theme::text_bright())
        .text_size(px(theme::TEXT_SM))
        .child(text.to_string())
        .into_any_element()
}

fn render_log(
    id: SectionId,
    contents: &str,
    scroll: Option<&ScrollHandle>,
    input: Option<&Entity<InputState>>,
    cx: &mut Context<MainView>,
) -> AnyElement {
    div()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_3))
        .child(
            div()
                .id(element_id("log", id))
                .h(px(theme::LOG_HEIGHT))
                .overflow_y_scroll()
                .when_some(scroll, |this, handle| this.track_scroll(handle))
                .p(px(theme::SPACE_2))
                .bg(theme::field_bg())
                .text_color(theme::text_bright())
                .text_size(px(theme::TEXT_SM))
                .on_scroll_wheel(cx.listener(MainView::on_scroll_wheel))
                .child(contents.to_string()),
        )
        .when_some(input, |this, input| {
            this.child(
                div()
                    .bg(theme::input_bg())
                    .text_color(theme::input_text())
                    .text_size(px(theme::TEXT_BASE))
                    .child(Input::new(input)),
            )
        })
        .child(
            div().flex().justify_center().child(
                Button::new(element_id("log-add", id))
                    .label("ADD")
                    .primary()
                    .on_click(cx.listener(move |view, _, window, cx| {
                        view.on_note_submit(id, window, cx);
                    })),
            ),
        )
        .into_any_element()
}
