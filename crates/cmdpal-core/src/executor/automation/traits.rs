use crate::executor::errors::ExecutorError;

/// Drives the desktop on behalf of an activated item.
pub trait AutomationBackend: Send + Sync {
    /// Identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Whether the backend can work on this machine (platform and tools present).
    fn is_available(&self) -> bool;

    /// Switch to the previously focused application and type `text` into it.
    fn insert_text(&self, text: &str) -> Result<(), ExecutorError>;

    /// Open `command` in a terminal window, reusing the front one when possible.
    fn show_in_terminal(&self, command: &str) -> Result<(), ExecutorError>;
}
