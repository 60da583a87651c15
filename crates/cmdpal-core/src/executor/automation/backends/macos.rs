//! macOS automation through `osascript`.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::executor::automation::traits::AutomationBackend;
use crate::executor::errors::ExecutorError;

/// Command-tab back to the previous app, then type the decoded text.
///
/// The text travels base64-encoded so quotes and backslashes survive AppleScript.
const INSERT_SCRIPT: &str = r#"tell application "System Events"
    key down command
    keystroke tab
    key up command
    delay 0.1
    set decoded_command to do shell script "echo '{encoded}' | base64 --decode"
    keystroke decoded_command
end tell"#;

const SHOW_SCRIPT: &str = r#"tell application "Terminal"
    if (count of windows) is 0 then
        do script "{command}"
    else
        do script "{command}" in front window
    end if
    activate
end tell"#;

pub struct MacOsAutomation;

pub(crate) fn build_insert_script(text: &str) -> String {
    INSERT_SCRIPT.replace("{encoded}", &STANDARD.encode(text))
}

pub(crate) fn build_show_script(command: &str) -> String {
    SHOW_SCRIPT.replace("{command}", &escape_applescript(command))
}

fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl AutomationBackend for MacOsAutomation {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos") && which::which("osascript").is_ok()
    }

    fn insert_text(&self, text: &str) -> Result<(), ExecutorError> {
        run_osascript(&build_insert_script(text))
    }

    fn show_in_terminal(&self, command: &str) -> Result<(), ExecutorError> {
        run_osascript(&build_show_script(command))
    }
}

#[cfg(target_os = "macos")]
fn run_osascript(script: &str) -> Result<(), ExecutorError> {
    tracing::debug!(event = "core.automation.applescript_executing");

    let output = std::process::Command::new("osascript")
        .arg("-e")
        .arg(script)
        .output()
        .map_err(|e| ExecutorError::AutomationFailed {
            backend: "macos".to_string(),
            message: format!("Failed to execute osascript: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExecutorError::AutomationFailed {
            backend: "macos".to_string(),
            message: format!("AppleScript failed: {}", stderr.trim()),
        });
    }

    tracing::debug!(event = "core.automation.applescript_completed");
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn run_osascript(_script: &str) -> Result<(), ExecutorError> {
    Err(ExecutorError::AutomationFailed {
        backend: "macos".to_string(),
        message: "osascript is only available on macOS".to_string(),
    })
}
