//! cmd-pal: CMD_PAL desktop command palette
//!
//! GPUI window with one column per configuration file. Each section polls a
//! shell command (or a notes file) and renders the result.

use std::process;

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, point, px, size,
};
use gpui_component::Root;

mod app;
mod refresh;
mod theme;
mod theme_bridge;
mod views;

use views::MainView;

fn main() {
    cmdpal_core::init_logging(false);

    let matches = app::build_cli().get_matches();
    let extra_configs = app::config_paths(&matches);

    if let Err(e) = ctrlc::set_handler(|| {
        println!("\nExiting...");
        process::exit(0);
    }) {
        tracing::warn!(event = "ui.signal.handler_failed", error = %e);
    }

    let configs = match app::load_configs(&extra_configs) {
        Ok(configs) => configs,
        Err(e) => {
            tracing::error!(event = "ui.config.load_failed", error = %e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let column_count = configs.len().max(1) as f32;

    Application::new().run(move |cx: &mut App| {
        // Initialize gpui-component (must be first)
        gpui_component::init(cx);

        theme_bridge::apply_cmdpal_theme(cx);

        let bounds = Bounds::new(
            point(px(0.0), px(theme::WINDOW_TOP)),
            size(
                px(theme::COLUMN_WIDTH * column_count),
                px(theme::WINDOW_HEIGHT),
            ),
        );
        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from("CMD_PAL")),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |window, cx| {
                let view = cx.new(|cx| MainView::new(configs, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            },
        );

        if let Err(e) = opened {
            tracing::error!(event = "ui.window.open_failed", error = %e);
            cx.quit();
        }
    });
}
