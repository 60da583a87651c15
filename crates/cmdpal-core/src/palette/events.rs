use crate::focus::{DockChange, WindowGeometry};

use super::{PaletteError, RefreshReport, SectionId};

/// What happened when a section's timer fired.
#[derive(Debug)]
pub enum TickOutcome {
    Refreshed(RefreshReport),
    /// Recent interaction closed the refresh gate. The timer stays armed.
    Suppressed,
    Failed(PaletteError),
}

/// Events a UI host forwards to the palette.
pub trait PaletteEvents {
    /// The main window gained (`true`) or lost focus.
    ///
    /// Returns the window move the host should perform, if any.
    fn on_focus_changed(&mut self, focused: bool, geometry: WindowGeometry) -> Option<DockChange>;

    /// Scroll, hover, or similar. Returns `true` if refreshes were suppressed.
    fn on_interaction(&mut self) -> bool;

    /// A section's interval elapsed.
    fn on_tick(&mut self, id: SectionId) -> TickOutcome;
}
