use std::sync::Arc;

use cmdpal_config::Action;
use tracing::{error, info};

use super::automation::AutomationBackend;
use super::errors::ExecutorError;
use super::shell::Shell;
use super::workers::{RunOutcome, RunWorkers, WorkerId};

/// Result text of a successful `insert` or `show`.
pub const ACKNOWLEDGEMENT: &str = "Done!";

/// Execute `command` with `action` and wait for it.
///
/// `run` returns trimmed stdout. `insert` and `show` return [`ACKNOWLEDGEMENT`]
/// once the automation call has been issued.
pub fn execute(
    command: &str,
    action: Action,
    shell: &dyn Shell,
    automation: Option<&dyn AutomationBackend>,
) -> Result<String, ExecutorError> {
    match action {
        Action::Run => Ok(shell.capture(command)?.trim().to_string()),
        Action::Insert | Action::Show => {
            let backend = automation.ok_or_else(|| ExecutorError::AutomationUnavailable {
                action: action.to_string(),
            })?;
            if action == Action::Insert {
                backend.insert_text(command)?;
            } else {
                backend.show_in_terminal(command)?;
            }
            Ok(ACKNOWLEDGEMENT.to_string())
        }
    }
}

/// How an activation finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Handled synchronously.
    Completed(String),
    /// Handed to a background worker; collect via [`ActionDispatcher::drain_results`].
    Dispatched(WorkerId),
}

/// Routes activations: `run` goes to the worker pool, the rest to automation.
pub struct ActionDispatcher {
    shell: Arc<dyn Shell>,
    automation: Option<Arc<dyn AutomationBackend>>,
    workers: RunWorkers,
}

impl ActionDispatcher {
    pub fn new(shell: Arc<dyn Shell>, automation: Option<Arc<dyn AutomationBackend>>) -> Self {
        let workers = RunWorkers::new(Arc::clone(&shell));
        Self {
            shell,
            automation,
            workers,
        }
    }

    pub fn activate(&mut self, command: &str, action: Action) -> Result<Activation, ExecutorError> {
        info!(
            event = "core.executor.activate_started",
            action = %action,
            command = command
        );

        let result = match action {
            Action::Run => self.workers.dispatch(command).map(Activation::Dispatched),
            Action::Insert | Action::Show => execute(
                command,
                action,
                self.shell.as_ref(),
                self.automation.as_deref(),
            )
            .map(Activation::Completed),
        };

        match &result {
            Ok(activation) => info!(
                event = "core.executor.activate_completed",
                action = %action,
                dispatched = matches!(activation, Activation::Dispatched(_))
            ),
            Err(e) => error!(
                event = "core.executor.activate_failed",
                action = %action,
                error = %e
            ),
        }

        result
    }

    /// Finished background runs, without blocking.
    pub fn drain_results(&self) -> Vec<RunOutcome> {
        self.workers.drain()
    }

    pub fn workers(&self) -> &RunWorkers {
        &self.workers
    }

    pub fn automation_name(&self) -> Option<&'static str> {
        self.automation.as_ref().map(|backend| backend.name())
    }
}
