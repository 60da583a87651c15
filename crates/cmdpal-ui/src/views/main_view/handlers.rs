//! Event handlers for MainView. Each one delegates to the core palette.

use cmdpal_core::{
    Activation, DockChange, PaletteEvents, RefreshReport, SectionId, TickOutcome, WindowGeometry,
    WindowOrigin,
};
use gpui::{Bounds, Context, Pixels, ScrollWheelEvent, Size, Window, px, size};
use tracing::{debug, info, warn};

use super::main_view_def::{MainView, new_note_input};

/// Convert window bounds to the geometry the focus tracker works in.
pub(super) fn window_geometry(bounds: Bounds<Pixels>) -> WindowGeometry {
    WindowGeometry {
        origin: WindowOrigin {
            x: f32::from(bounds.origin.x),
            y: f32::from(bounds.origin.y),
        },
        width: f32::from(bounds.size.width),
    }
}

/// Window size for a dock change. Height is left alone.
pub(super) fn dock_size(change: &DockChange, height: Pixels) -> Size<Pixels> {
    size(px(change.target().width), height)
}

impl MainView {
    pub(super) fn refresh_all(&mut self, cx: &mut Context<Self>) {
        for (id, result) in self.palette.refresh_all() {
            if let Ok(report) = result {
                self.follow_refresh(id, &report);
            }
        }
        cx.notify();
    }

    pub(super) fn on_section_tick(&mut self, id: SectionId, cx: &mut Context<Self>) {
        match self.palette.on_tick(id) {
            TickOutcome::Refreshed(report) => {
                debug!(event = "ui.section.tick", section = %id);
                self.follow_refresh(id, &report);
                cx.notify();
            }
            TickOutcome::Suppressed => {
                debug!(event = "ui.section.tick_suppressed", section = %id);
            }
            TickOutcome::Failed(e) => {
                debug!(event = "ui.section.tick_failed", section = %id, error = %e);
            }
        }
    }

    /// Keep item lists and logs pinned to their newest entry.
    fn follow_refresh(&self, id: SectionId, report: &RefreshReport) {
        if report.scrolls_to_end()
            && let Some(handle) = self.scroll_handles.get(&id)
        {
            handle.scroll_to_bottom();
        }
    }

    pub(super) fn on_window_activation(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let active = window.is_window_active();
        let geometry = window_geometry(window.bounds());

        if let Some(change) = self.palette.on_focus_changed(active, geometry) {
            info!(event = "ui.window.dock_changed", change = ?change);
            let height = window.bounds().size.height;
            window.resize(dock_size(&change, height));
            cx.notify();
        }
    }

    pub(crate) fn on_item_hover(&mut self, id: SectionId, index: usize, cx: &mut Context<Self>) {
        match self.palette.hover_item(id, index) {
            Ok(_) => cx.notify(),
            Err(e) => debug!(event = "ui.item.hover_stale", section = %id, error = %e),
        }
    }

    pub(crate) fn on_item_click(&mut self, id: SectionId, index: usize, cx: &mut Context<Self>) {
        match self.palette.activate_item(id, index) {
            Ok(Activation::Completed(_)) => {
                info!(event = "ui.item.activate_completed", section = %id);
            }
            Ok(Activation::Dispatched(worker)) => {
                info!(event = "ui.item.run_dispatched", section = %id, worker = worker);
            }
            Err(e) => {
                warn!(event = "ui.item.activate_failed", section = %id, error = %e);
                self.status_scroll.scroll_to_bottom();
            }
        }
        cx.notify();
    }

    pub(crate) fn on_scroll_wheel(
        &mut self,
        _event: &ScrollWheelEvent,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        self.palette.on_interaction();
    }

    pub(crate) fn on_note_submit(
        &mut self,
        id: SectionId,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let text = self
            .note_inputs
            .get(&id)
            .map(|input| input.read(cx).value().to_string())
            .unwrap_or_default();

        match self.palette.submit_note(id, &text) {
            Ok(report) => {
                info!(event = "ui.note.submit_completed", section = %id);
                // InputState has no clear; replace the entity with a fresh one.
                self.note_inputs.insert(id, new_note_input(window, cx));
                self.follow_refresh(id, &report);
            }
            Err(e) => {
                warn!(event = "ui.note.submit_failed", section = %id, error = %e);
                self.status_scroll.scroll_to_bottom();
            }
        }
        cx.notify();
    }

    pub(super) fn poll_run_results(&mut self, cx: &mut Context<Self>) {
        if self.palette.drain_run_results() > 0 {
            self.status_scroll.scroll_to_bottom();
            cx.notify();
        }
    }
}
