//! Headless palette controller.
//!
//! Owns the loaded sections and their rendered state, and reacts to the events
//! a UI forwards through [`PaletteEvents`]. The UI only draws what it reads
//! back from here.

mod errors;
mod events;
mod status;
#[cfg(test)]
mod tests;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use cmdpal_config::{PaletteConfig, Section, SectionKind};
use tracing::{debug, error, info, warn};

use crate::executor::{
    ActionDispatcher, Activation, AutomationBackend, Shell, SystemShell, detect_backend,
};
use crate::focus::{DockChange, FocusTracker, WindowGeometry};
use crate::notes::NotesLog;
use crate::render::{ReconcileDiff, ReconcileMode, RenderedItems, display_text, itemize};
use crate::scheduler::{Clock, InteractionClock, SystemClock};

pub use errors::PaletteError;
pub use events::{PaletteEvents, TickOutcome};
pub use status::StatusArea;

/// Position of a section: config file column, then order within the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId {
    pub column: usize,
    pub index: usize,
}

impl SectionId {
    pub fn new(column: usize, index: usize) -> Self {
        Self { column, index }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.index)
    }
}

/// What a section currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    Items(RenderedItems),
    Text(String),
    Log(String),
}

/// Result of a successful refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshReport {
    Items(ReconcileDiff),
    Text,
    Log,
}

impl RefreshReport {
    /// Item lists and logs follow their newest entry after each refresh.
    pub fn scrolls_to_end(&self) -> bool {
        matches!(self, RefreshReport::Items(_) | RefreshReport::Log)
    }
}

#[derive(Debug)]
pub struct SectionState {
    section: Section,
    content: SectionContent,
    notes: Option<NotesLog>,
}

impl SectionState {
    fn new(section: Section) -> Self {
        let content = match section.kind {
            SectionKind::ParseCommand => SectionContent::Items(RenderedItems::new()),
            SectionKind::Display => SectionContent::Text(String::new()),
            SectionKind::Log => SectionContent::Log(String::new()),
        };
        let notes = section.log_path.clone().map(NotesLog::new);
        Self {
            section,
            content,
            notes,
        }
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn content(&self) -> &SectionContent {
        &self.content
    }

    /// Sections without a command only show their header.
    pub fn is_active(&self) -> bool {
        self.section.is_renderable()
    }

    pub fn items(&self) -> Option<&RenderedItems> {
        match &self.content {
            SectionContent::Items(items) => Some(items),
            _ => None,
        }
    }
}

/// Sections from one config file.
#[derive(Debug)]
pub struct PaletteColumn {
    path: PathBuf,
    sections: Vec<SectionState>,
}

impl PaletteColumn {
    /// Absolute path of the config file, used as the column heading.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sections(&self) -> &[SectionState] {
        &self.sections
    }
}

pub struct Palette<C: Clock = SystemClock> {
    columns: Vec<PaletteColumn>,
    interactions: InteractionClock<C>,
    focus: FocusTracker,
    shell: Arc<dyn Shell>,
    dispatcher: ActionDispatcher,
    status: StatusArea,
}

impl Palette<SystemClock> {
    /// Palette backed by `sh` and the detected platform automation.
    pub fn from_configs(configs: Vec<PaletteConfig>) -> Self {
        Self::new(
            configs,
            Arc::new(SystemShell::new()),
            detect_backend(),
            SystemClock,
        )
    }
}

impl<C: Clock> Palette<C> {
    pub fn new(
        configs: Vec<PaletteConfig>,
        shell: Arc<dyn Shell>,
        automation: Option<Arc<dyn AutomationBackend>>,
        clock: C,
    ) -> Self {
        let columns = configs
            .into_iter()
            .map(|config| PaletteColumn {
                path: config.path,
                sections: config.sections.into_iter().map(SectionState::new).collect(),
            })
            .collect();

        Self {
            columns,
            interactions: InteractionClock::new(clock),
            focus: FocusTracker::new(),
            dispatcher: ActionDispatcher::new(Arc::clone(&shell), automation),
            shell,
            status: StatusArea::default(),
        }
    }

    pub fn columns(&self) -> &[PaletteColumn] {
        &self.columns
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionState> {
        self.columns.get(id.column)?.sections.get(id.index)
    }

    fn section_mut(&mut self, id: SectionId) -> Result<&mut SectionState, PaletteError> {
        self.columns
            .get_mut(id.column)
            .and_then(|column| column.sections.get_mut(id.index))
            .ok_or(PaletteError::UnknownSection { id })
    }

    /// Sections that refresh on a timer.
    pub fn active_sections(&self) -> Vec<SectionId> {
        self.columns
            .iter()
            .enumerate()
            .flat_map(|(column, col)| {
                col.sections
                    .iter()
                    .enumerate()
                    .filter(|(_, state)| state.is_active())
                    .map(move |(index, _)| SectionId::new(column, index))
            })
            .collect()
    }

    pub fn status(&self) -> &StatusArea {
        &self.status
    }

    pub fn focus(&self) -> &FocusTracker {
        &self.focus
    }

    pub fn interactions(&self) -> &InteractionClock<C> {
        &self.interactions
    }

    pub fn active_runs(&self) -> usize {
        self.dispatcher.workers().active_count()
    }

    /// Refresh one section now, ignoring the interaction gate.
    pub fn refresh_section(&mut self, id: SectionId) -> Result<RefreshReport, PaletteError> {
        let shell = Arc::clone(&self.shell);
        let state = self.section_mut(id)?;
        if !state.is_active() {
            return Err(PaletteError::InactiveSection {
                name: state.section.name.clone(),
            });
        }

        debug!(
            event = "core.palette.refresh_started",
            section = %state.section.name,
            kind = %state.section.kind
        );

        let section = &state.section;
        let report = match &mut state.content {
            SectionContent::Items(rendered) => {
                let output = shell.capture(&section.value)?;
                let fresh = itemize(&output, section.split);
                let diff = rendered.reconcile(fresh, ReconcileMode::for_clean(section.clean));
                RefreshReport::Items(diff)
            }
            SectionContent::Text(text) => {
                let output = shell.capture(&section.value)?;
                *text = display_text(&output, section.split);
                RefreshReport::Text
            }
            SectionContent::Log(contents) => {
                let notes = state.notes.as_ref().ok_or_else(|| PaletteError::NotALog {
                    name: section.name.clone(),
                })?;
                *contents = notes.read_contents()?;
                RefreshReport::Log
            }
        };

        debug!(
            event = "core.palette.refresh_completed",
            section = %state.section.name
        );
        Ok(report)
    }

    /// Initial population of every active section.
    pub fn refresh_all(&mut self) -> Vec<(SectionId, Result<RefreshReport, PaletteError>)> {
        let ids = self.active_sections();
        info!(event = "core.palette.refresh_all_started", sections = ids.len());

        ids.into_iter()
            .map(|id| {
                let result = self.refresh_section(id);
                if let Err(e) = &result {
                    warn!(event = "core.palette.refresh_failed", section = %id, error = %e);
                }
                (id, result)
            })
            .collect()
    }

    /// Append `text` to a log section's file, then reload it.
    pub fn submit_note(&mut self, id: SectionId, text: &str) -> Result<RefreshReport, PaletteError> {
        self.submit_note_at(id, text, Local::now().naive_local())
    }

    pub fn submit_note_at(
        &mut self,
        id: SectionId,
        text: &str,
        at: NaiveDateTime,
    ) -> Result<RefreshReport, PaletteError> {
        let result = self.append_note(id, text, at);
        if let Err(e) = &result {
            error!(event = "core.palette.note_failed", section = %id, error = %e);
            self.status.append(&format!("Error: {e}"));
        }
        result
    }

    fn append_note(
        &mut self,
        id: SectionId,
        text: &str,
        at: NaiveDateTime,
    ) -> Result<RefreshReport, PaletteError> {
        let state = self.section_mut(id)?;
        let notes = state.notes.as_ref().ok_or_else(|| PaletteError::NotALog {
            name: state.section.name.clone(),
        })?;
        notes.append_entry(text, at)?;
        self.refresh_section(id)
    }

    /// Pointer entered an item: show its full text and count the interaction.
    pub fn hover_text(&mut self, text: &str) -> bool {
        self.status.show(text);
        self.interactions.record_interaction()
    }

    /// Pointer entered item `index` of section `id`.
    pub fn hover_item(&mut self, id: SectionId, index: usize) -> Result<bool, PaletteError> {
        let raw = self.item_raw(id, index)?;
        Ok(self.hover_text(&raw))
    }

    fn item_raw(&self, id: SectionId, index: usize) -> Result<String, PaletteError> {
        let state = self
            .section(id)
            .ok_or(PaletteError::UnknownSection { id })?;
        state
            .items()
            .and_then(|items| items.items().get(index))
            .map(|item| item.raw().to_string())
            .ok_or_else(|| PaletteError::UnknownItem {
                name: state.section.name.clone(),
                index,
            })
    }

    /// Execute item `index` of section `id` with the section's action.
    ///
    /// Failures are also written to the status area.
    pub fn activate_item(&mut self, id: SectionId, index: usize) -> Result<Activation, PaletteError> {
        let result = self.activate(id, index);
        if let Err(e) = &result {
            self.status.append(&format!("Error: {e}"));
        }
        result
    }

    fn activate(&mut self, id: SectionId, index: usize) -> Result<Activation, PaletteError> {
        let raw = self.item_raw(id, index)?;
        let action = self
            .section(id)
            .map(|state| state.section.action())
            .unwrap_or_default();
        Ok(self.dispatcher.activate(&raw, action)?)
    }

    /// Move finished background runs into the status area. Returns how many arrived.
    pub fn drain_run_results(&mut self) -> usize {
        let outcomes = self.dispatcher.drain_results();
        for outcome in &outcomes {
            match &outcome.result {
                Ok(output) => self.status.append(output),
                Err(e) => {
                    warn!(
                        event = "core.palette.run_failed",
                        command = %outcome.command,
                        error = %e
                    );
                    self.status.append(&format!("Error: {e}"));
                }
            }
        }
        outcomes.len()
    }
}

impl<C: Clock> PaletteEvents for Palette<C> {
    fn on_focus_changed(&mut self, focused: bool, geometry: WindowGeometry) -> Option<DockChange> {
        if focused {
            self.focus.focus_gained()
        } else {
            self.focus.focus_lost(geometry)
        }
    }

    fn on_interaction(&mut self) -> bool {
        self.interactions.record_interaction()
    }

    fn on_tick(&mut self, id: SectionId) -> TickOutcome {
        if !self.interactions.should_reload() {
            debug!(
                event = "core.palette.tick_suppressed",
                section = %id,
                remaining_ms = self.interactions.suppressed_for().as_millis() as u64
            );
            return TickOutcome::Suppressed;
        }

        match self.refresh_section(id) {
            Ok(report) => TickOutcome::Refreshed(report),
            Err(e) => {
                warn!(event = "core.palette.tick_failed", section = %id, error = %e);
                TickOutcome::Failed(e)
            }
        }
    }
}
