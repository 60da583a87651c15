use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::errors::ExecutorError;
use super::shell::Shell;

pub type WorkerId = u64;

/// A finished background `run`.
#[derive(Debug)]
pub struct RunOutcome {
    pub id: WorkerId,
    pub command: String,
    /// Trimmed stdout.
    pub result: Result<String, ExecutorError>,
}

/// One thread per `run` activation.
///
/// Workers remove themselves from the active set before reporting, so a
/// drained outcome never belongs to a still-active worker.
pub struct RunWorkers {
    shell: Arc<dyn Shell>,
    next_id: WorkerId,
    active: Arc<Mutex<Vec<WorkerId>>>,
    tx: Sender<RunOutcome>,
    rx: Receiver<RunOutcome>,
}

impl RunWorkers {
    pub fn new(shell: Arc<dyn Shell>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            shell,
            next_id: 0,
            active: Arc::new(Mutex::new(Vec::new())),
            tx,
            rx,
        }
    }

    pub fn dispatch(&mut self, command: &str) -> Result<WorkerId, ExecutorError> {
        let id = self.next_id;
        self.next_id += 1;

        if let Ok(mut active) = self.active.lock() {
            active.push(id);
        }

        let shell = Arc::clone(&self.shell);
        let active = Arc::clone(&self.active);
        let tx = self.tx.clone();
        let command_owned = command.to_string();

        let spawned = thread::Builder::new()
            .name(format!("cmdpal-run-{id}"))
            .spawn(move || {
                let result = shell
                    .capture(&command_owned)
                    .map(|output| output.trim().to_string());

                if let Ok(mut active) = active.lock() {
                    active.retain(|worker| *worker != id);
                }

                debug!(event = "core.executor.run_finished", worker = id);
                if tx
                    .send(RunOutcome {
                        id,
                        command: command_owned,
                        result,
                    })
                    .is_err()
                {
                    debug!(event = "core.executor.run_result_dropped", worker = id);
                }
            });

        match spawned {
            Ok(_) => {
                debug!(event = "core.executor.run_dispatched", worker = id, command = command);
                Ok(id)
            }
            Err(e) => {
                if let Ok(mut active) = self.active.lock() {
                    active.retain(|worker| *worker != id);
                }
                warn!(event = "core.executor.run_spawn_failed", error = %e);
                Err(ExecutorError::WorkerSpawnFailed {
                    message: e.to_string(),
                })
            }
        }
    }

    /// Every outcome that has arrived so far.
    pub fn drain(&self) -> Vec<RunOutcome> {
        self.rx.try_iter().collect()
    }

    /// Block for the next outcome, up to `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<RunOutcome> {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    pub fn active_count(&self) -> usize {
        self.active.lock().map(|active| active.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Condvar;

    use super::*;

    /// Blocks every capture until released.
    struct GatedShell {
        released: Mutex<bool>,
        signal: Condvar,
    }

    impl GatedShell {
        fn new() -> Self {
            Self {
                released: Mutex::new(false),
                signal: Condvar::new(),
            }
        }

        fn release(&self) {
            *self.released.lock().unwrap() = true;
            self.signal.notify_all();
        }
    }

    impl Shell for GatedShell {
        fn capture(&self, command: &str) -> Result<String, ExecutorError> {
            let mut released = self.released.lock().unwrap();
            while !*released {
                released = self.signal.wait(released).unwrap();
            }
            Ok(format!(" {command} \n"))
        }
    }

    #[test]
    fn test_worker_leaves_active_set_when_done() {
        let shell = Arc::new(GatedShell::new());
        let mut workers = RunWorkers::new(shell.clone());

        let id = workers.dispatch("echo hi").unwrap();
        assert_eq!(workers.active_count(), 1);
        assert!(workers.drain().is_empty());

        shell.release();
        let outcome = workers.recv_timeout(Duration::from_secs(5)).unwrap();

        assert_eq!(outcome.id, id);
        assert_eq!(outcome.command, "echo hi");
        assert_eq!(outcome.result.unwrap(), "echo hi");
        assert_eq!(workers.active_count(), 0);
    }

    #[test]
    fn test_concurrent_runs_get_distinct_ids() {
        let shell = Arc::new(GatedShell::new());
        let mut workers = RunWorkers::new(shell.clone());

        let first = workers.dispatch("a").unwrap();
        let second = workers.dispatch("b").unwrap();
        assert_ne!(first, second);
        assert_eq!(workers.active_count(), 2);

        shell.release();
        let mut seen = vec![
            workers.recv_timeout(Duration::from_secs(5)).unwrap().id,
            workers.recv_timeout(Duration::from_secs(5)).unwrap().id,
        ];
        seen.sort();
        assert_eq!(seen, vec![first, second]);
        assert_eq!(workers.active_count(), 0);
    }
}
