use std::sync::{Arc, LazyLock};

use tracing::{debug, info};

use super::backends::{LinuxAutomation, MacOsAutomation};
use super::traits::AutomationBackend;

static REGISTRY: LazyLock<AutomationRegistry> = LazyLock::new(AutomationRegistry::new);

struct AutomationRegistry {
    backends: Vec<Arc<dyn AutomationBackend>>,
}

impl AutomationRegistry {
    fn new() -> Self {
        Self {
            backends: vec![Arc::new(MacOsAutomation), Arc::new(LinuxAutomation)],
        }
    }

    /// First available backend in registration order.
    fn detect(&self) -> Option<Arc<dyn AutomationBackend>> {
        self.backends.iter().find(|b| b.is_available()).cloned()
    }
}

/// Automation backend for the current platform, if any.
pub fn detect_backend() -> Option<Arc<dyn AutomationBackend>> {
    let backend = REGISTRY.detect();
    match &backend {
        Some(b) => info!(event = "core.automation.detect_completed", backend = b.name()),
        None => debug!(
            event = "core.automation.detect_skipped",
            reason = "no backend available"
        ),
    }
    backend
}
