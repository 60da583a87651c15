//! Collapse/restore bookkeeping for the palette window.
//!
//! When the window loses focus it shrinks to a [`COLLAPSED_WIDTH`] strip on
//! the left screen edge. Regaining focus gives it back the position and width
//! it had when focus was first lost.

use tracing::debug;

/// Visible width of the collapsed window, in logical pixels.
pub const COLLAPSED_WIDTH: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowOrigin {
    pub x: f32,
    pub y: f32,
}

/// Where the window is and how wide it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    pub origin: WindowOrigin,
    pub width: f32,
}

/// Geometry the host should give the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DockChange {
    Collapse { to: WindowGeometry },
    Restore { to: WindowGeometry },
}

impl DockChange {
    pub fn target(&self) -> WindowGeometry {
        match self {
            DockChange::Collapse { to } | DockChange::Restore { to } => *to,
        }
    }

    pub fn is_collapse(&self) -> bool {
        matches!(self, DockChange::Collapse { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    home: Option<WindowGeometry>,
    collapsed: bool,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Geometry remembered at the last collapse.
    pub fn home(&self) -> Option<WindowGeometry> {
        self.home
    }

    pub fn focus_lost(&mut self, geometry: WindowGeometry) -> Option<DockChange> {
        if self.collapsed {
            return None;
        }
        self.home = Some(geometry);
        self.collapsed = true;

        let to = WindowGeometry {
            origin: WindowOrigin {
                x: 0.0,
                y: geometry.origin.y,
            },
            width: COLLAPSED_WIDTH.min(geometry.width),
        };
        debug!(event = "core.focus.collapse", y = to.origin.y, width = to.width);
        Some(DockChange::Collapse { to })
    }

    pub fn focus_gained(&mut self) -> Option<DockChange> {
        if !self.collapsed {
            return None;
        }
        self.collapsed = false;

        let to = self.home?;
        debug!(
            event = "core.focus.restore",
            x = to.origin.x,
            y = to.origin.y,
            width = to.width
        );
        Some(DockChange::Restore { to })
    }
}
