use std::process::{Command, Stdio};

use tracing::debug;

use super::errors::ExecutorError;

/// Runs a command line and captures its standard output.
pub trait Shell: Send + Sync {
    /// Untrimmed stdout. A non-zero exit status is not an error.
    fn capture(&self, command: &str) -> Result<String, ExecutorError>;
}

/// `sh -c <command>` on the host.
#[derive(Debug, Clone)]
pub struct SystemShell {
    program: String,
}

impl SystemShell {
    pub fn new() -> Self {
        Self::with_program("sh")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell for SystemShell {
    fn capture(&self, command: &str) -> Result<String, ExecutorError> {
        let output = Command::new(&self.program)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ExecutorError::SpawnFailed {
                command: command.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(
                event = "core.executor.command_nonzero_exit",
                command = command,
                status = %output.status,
                stderr = %stderr.trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_capture_returns_stdout_untrimmed() {
        let shell = SystemShell::new();
        let output = shell.capture("printf 'a\\nb\\n'").unwrap();
        assert_eq!(output, "a\nb\n");
    }

    #[test]
    fn test_nonzero_exit_still_returns_stdout() {
        let shell = SystemShell::new();
        let output = shell.capture("echo partial; exit 3").unwrap();
        assert_eq!(output, "partial\n");
    }

    #[test]
    fn test_stderr_is_not_captured() {
        let shell = SystemShell::new();
        let output = shell.capture("echo oops 1>&2").unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let shell = SystemShell::with_program("/nonexistent/cmdpal-shell");
        let result = shell.capture("true");
        assert!(matches!(result, Err(ExecutorError::SpawnFailed { .. })));
    }
}
