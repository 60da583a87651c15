pub mod collapsed_strip;
pub mod main_view;
pub mod section_view;
pub mod status_area;

pub use main_view::MainView;
