//! Test doubles for the executor seams.

use std::collections::HashMap;
use std::sync::Mutex;

use super::automation::AutomationBackend;
use super::errors::ExecutorError;
use super::shell::Shell;

/// Shell returning canned output per command, recording every call.
#[derive(Default)]
pub struct ScriptedShell {
    outputs: Mutex<HashMap<String, String>>,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedShell {
    pub fn set(&self, command: &str, output: &str) {
        self.outputs
            .lock()
            .unwrap()
            .insert(command.to_string(), output.to_string());
    }

    pub fn call_count(&self, command: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == command)
            .count()
    }
}

impl Shell for ScriptedShell {
    fn capture(&self, command: &str) -> Result<String, ExecutorError> {
        self.calls.lock().unwrap().push(command.to_string());
        Ok(self
            .outputs
            .lock()
            .unwrap()
            .get(command)
            .cloned()
            .unwrap_or_default())
    }
}

/// Automation backend that records requests instead of driving the OS.
#[derive(Default)]
pub struct RecordingAutomation {
    pub inserted: Mutex<Vec<String>>,
    pub shown: Mutex<Vec<String>>,
}

impl AutomationBackend for RecordingAutomation {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn insert_text(&self, text: &str) -> Result<(), ExecutorError> {
        self.inserted.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn show_in_terminal(&self, command: &str) -> Result<(), ExecutorError> {
        self.shown.lock().unwrap().push(command.to_string());
        Ok(())
    }
}
