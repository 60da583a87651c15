//! Linux/X11 automation through `xdotool` and a terminal emulator.

use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::executor::automation::traits::AutomationBackend;
use crate::executor::errors::ExecutorError;

/// Terminal emulators tried for `show`, in order.
const TERMINALS: &[&str] = &["x-terminal-emulator", "alacritty", "kitty", "xterm"];

/// Pause between switching windows and typing.
const SWITCH_DELAY: Duration = Duration::from_millis(100);

pub struct LinuxAutomation;

fn failed(message: String) -> ExecutorError {
    ExecutorError::AutomationFailed {
        backend: "linux".to_string(),
        message,
    }
}

fn xdotool(args: &[&str]) -> Result<(), ExecutorError> {
    let output = Command::new("xdotool")
        .args(args)
        .output()
        .map_err(|e| failed(format!("xdotool exec failed: {}", e)))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(failed(format!(
            "xdotool exit {}: {}",
            output.status,
            stderr.trim()
        )))
    }
}

fn find_terminal() -> Option<&'static str> {
    TERMINALS
        .iter()
        .copied()
        .find(|term| which::which(term).is_ok())
}

/// Arguments that run `command` and then leave an interactive shell open.
pub(crate) fn terminal_args(command: &str) -> Vec<String> {
    vec![
        "-e".to_string(),
        "sh".to_string(),
        "-c".to_string(),
        format!("{command}; exec \"${{SHELL:-sh}}\""),
    ]
}

impl AutomationBackend for LinuxAutomation {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux")
            && (which::which("xdotool").is_ok() || find_terminal().is_some())
    }

    fn insert_text(&self, text: &str) -> Result<(), ExecutorError> {
        xdotool(&["key", "--clearmodifiers", "alt+Tab"])?;
        thread::sleep(SWITCH_DELAY);
        xdotool(&["type", "--clearmodifiers", "--", text])
    }

    fn show_in_terminal(&self, command: &str) -> Result<(), ExecutorError> {
        let terminal = find_terminal()
            .ok_or_else(|| failed(format!("no terminal emulator found (tried {:?})", TERMINALS)))?;

        debug!(
            event = "core.automation.terminal_spawn_started",
            terminal = terminal
        );

        Command::new(terminal)
            .args(terminal_args(command))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| failed(format!("{} spawn failed: {}", terminal, e)))?;

        Ok(())
    }
}
