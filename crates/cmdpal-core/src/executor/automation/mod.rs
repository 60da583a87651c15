//! Platform automation for `insert` and `show` actions.

mod backends;
mod registry;
mod traits;

pub use backends::{LinuxAutomation, MacOsAutomation};
pub use registry::detect_backend;
pub use traits::AutomationBackend;
