//! cmdpal-core: Core library for the CMD_PAL command palette
//!
//! Everything here is toolkit-independent. A UI host feeds focus, interaction
//! and timer events into a [`Palette`] and renders whatever state it exposes.
//!
//! # Main Entry Points
//!
//! - [`palette`] - Headless controller implementing [`PaletteEvents`]
//! - [`scheduler`] - Interaction-aware refresh gate
//! - [`render`] - Output itemization and reconciliation
//! - [`executor`] - Shell capture, background runs, and OS automation
//! - [`notes`] - Timestamped notes files for `log` sections
//! - [`focus`] - Collapse/restore bookkeeping for the main window

pub mod errors;
pub mod executor;
pub mod focus;
pub mod logging;
pub mod notes;
pub mod palette;
pub mod render;
pub mod scheduler;

pub use cmdpal_config::{Action, ConfigError, PaletteConfig, Section, SectionKind};
pub use errors::{CmdPalError, CmdPalResult};
pub use executor::{ActionDispatcher, Activation, ExecutorError, RunOutcome, Shell, SystemShell};
pub use focus::{DockChange, FocusTracker, WindowGeometry, WindowOrigin};
pub use notes::{NotesError, NotesLog};
pub use palette::{
    Palette, PaletteColumn, PaletteError, PaletteEvents, RefreshReport, SectionContent, SectionId,
    SectionState, StatusArea, TickOutcome,
};
pub use render::{DisplayItem, ReconcileDiff, ReconcileMode, RenderedItems};
pub use scheduler::{Clock, InteractionClock, ManualClock, SystemClock};

pub use logging::init_logging;
