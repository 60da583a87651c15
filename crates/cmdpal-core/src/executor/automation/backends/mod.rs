mod linux;
mod macos;

pub use linux::LinuxAutomation;
pub use macos::MacOsAutomation;
