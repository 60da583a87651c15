//! MainView struct definition and background task setup.

use std::collections::HashMap;
use std::time::Duration;

use cmdpal_core::{Palette, PaletteConfig, SectionId, SectionKind};
use gpui::{AppContext, Context, Entity, ScrollHandle, Subscription, Task, Window};
use gpui_component::input::InputState;

/// Root view. Owns the palette and the GPUI handles its sections need.
pub struct MainView {
    pub(super) palette: Palette,
    /// Scroll handles for item lists and log contents, keyed by section.
    pub(super) scroll_handles: HashMap<SectionId, ScrollHandle>,
    /// Note input for each log section.
    pub(super) note_inputs: HashMap<SectionId, Entity<InputState>>,
    pub(super) status_scroll: ScrollHandle,
    /// One ticker per active section. Must be stored to prevent cancellation.
    pub(super) _tick_tasks: Vec<Task<()>>,
    /// Polls finished `run` workers. Must be stored to prevent cancellation.
    pub(super) _run_poll_task: Task<()>,
    pub(super) _activation_subscription: Subscription,
}

impl MainView {
    pub fn new(configs: Vec<PaletteConfig>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let palette = Palette::from_configs(configs);
        let active = palette.active_sections();

        let mut scroll_handles = HashMap::new();
        let mut note_inputs = HashMap::new();
        let mut tick_tasks = Vec::with_capacity(active.len());

        for id in active {
            let Some(state) = palette.section(id) else {
                continue;
            };
            let section = state.section();

            match section.kind {
                SectionKind::ParseCommand => {
                    scroll_handles.insert(id, ScrollHandle::new());
                }
                SectionKind::Log => {
                    scroll_handles.insert(id, ScrollHandle::new());
                    note_inputs.insert(id, new_note_input(window, cx));
                }
                SectionKind::Display => {}
            }

            tick_tasks.push(spawn_section_ticker(id, section.interval, cx));
        }

        tracing::info!(
            event = "ui.main_view.created",
            columns = palette.columns().len(),
            tickers = tick_tasks.len()
        );

        // Run workers report through a channel; collect their output off the timer path.
        let run_poll_task = cx.spawn(async move |this, cx: &mut gpui::AsyncApp| {
            loop {
                cx.background_executor()
                    .timer(crate::refresh::RUN_RESULTS_POLL_INTERVAL)
                    .await;

                if let Err(e) = this.update(cx, |view, cx| view.poll_run_results(cx)) {
                    tracing::debug!(
                        event = "ui.run_poll_task.stopped",
                        reason = "view_dropped",
                        error = ?e
                    );
                    break;
                }
            }
        });

        // Every section refreshes once before its first tick.
        cx.spawn(async move |this, cx: &mut gpui::AsyncApp| {
            if let Err(e) = this.update(cx, |view, cx| view.refresh_all(cx)) {
                tracing::debug!(event = "ui.initial_refresh.skipped", error = ?e);
            }
        })
        .detach();

        let activation_subscription =
            cx.observe_window_activation(window, |view, window, cx| {
                view.on_window_activation(window, cx);
            });

        Self {
            palette,
            scroll_handles,
            note_inputs,
            status_scroll: ScrollHandle::new(),
            _tick_tasks: tick_tasks,
            _run_poll_task: run_poll_task,
            _activation_subscription: activation_subscription,
        }
    }
}

pub(super) fn new_note_input(window: &mut Window, cx: &mut Context<MainView>) -> Entity<InputState> {
    cx.new(|cx| InputState::new(window, cx).placeholder("Add a note..."))
}

/// Fire `on_section_tick` every `interval` until the view is dropped.
fn spawn_section_ticker(id: SectionId, interval: Duration, cx: &mut Context<MainView>) -> Task<()> {
    cx.spawn(async move |this, cx: &mut gpui::AsyncApp| {
        tracing::debug!(
            event = "ui.section_ticker.started",
            section = %id,
            interval_secs = interval.as_secs()
        );

        loop {
            cx.background_executor().timer(interval).await;

            if let Err(e) = this.update(cx, |view, cx| view.on_section_tick(id, cx)) {
                tracing::debug!(
                    event = "ui.section_ticker.stopped",
                    section = %id,
                    reason = "view_dropped",
                    error = ?e
                );
                break;
            }
        }
    })
}
