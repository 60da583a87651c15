//! Main view for cmd-pal.
//!
//! Root view that composes the header, one column per config file, and the
//! status area. Forwards timer, focus, and pointer events to the core palette.

mod handlers;
mod main_view_def;
mod rendering;


pub use main_view_def::MainView;
