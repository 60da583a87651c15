//! Running section commands and dispatching item activations.
//!
//! `insert` and `show` hand the command to an [`AutomationBackend`] for the
//! current platform. `run` captures shell output, synchronously through
//! [`execute`] or on a worker thread through [`RunWorkers`].

pub mod automation;
mod dispatch;
mod errors;
mod shell;
#[cfg(test)]
pub(crate) mod test_support;
mod workers;

pub use automation::{AutomationBackend, detect_backend};
pub use dispatch::{ACKNOWLEDGEMENT, ActionDispatcher, Activation, execute};
pub use errors::ExecutorError;
pub use shell::{Shell, SystemShell};
pub use workers::{RunOutcome, RunWorkers, WorkerId};
