//! Bridge between CMD_PAL's palette and gpui-component's theme system.
//!
//! Maps the green-on-charcoal colors to gpui-component theme tokens so that
//! library components (Button, Input) match the rest of the window.

use std::rc::Rc;

use gpui::{App, SharedString};
use gpui_component::theme::{Theme, ThemeConfig, ThemeConfigColors, ThemeMode};

/// Apply the CMD_PAL dark theme to gpui-component's global theme.
pub fn apply_cmdpal_theme(cx: &mut App) {
    let config = Rc::new(ThemeConfig {
        name: SharedString::from("CMD_PAL"),
        mode: ThemeMode::Dark,
        is_default: true,
        font_family: Some("Menlo".into()),
        mono_font_family: Some("Menlo".into()),
        font_size: Some(12.0),
        mono_font_size: Some(12.0),
        radius: Some(0),
        radius_lg: Some(2),
        shadow: Some(false),
        colors: cmdpal_colors(),
        highlight: None,
    });

    Theme::global_mut(cx).apply_config(&config);
}

fn cmdpal_colors() -> ThemeConfigColors {
    // ThemeConfigColors has private base color fields, so it is built from JSON.
    let json = r##"{
        "background": "#333333",
        "foreground": "#FFFFFF",
        "border": "#666666",
        "input.border": "#666666",
        "accent.background": "#444444",
        "accent.foreground": "#FFFFFF",
        "primary.background": "#005500",
        "primary.hover.background": "#007700",
        "primary.active.background": "#004400",
        "primary.foreground": "#88DD88",
        "secondary.background": "#444444",
        "secondary.hover.background": "#666666",
        "secondary.active.background": "#3A3A3A",
        "secondary.foreground": "#FFFFFF",
        "success.background": "#00CC00",
        "success.hover.background": "#33DD33",
        "success.active.background": "#009900",
        "success.foreground": "#88DD88",
        "danger.background": "#CC3333",
        "danger.hover.background": "#DD5555",
        "danger.active.background": "#AA2222",
        "danger.foreground": "#88DD88",
        "warning.background": "#CCAA00",
        "warning.hover.background": "#DDBB33",
        "warning.active.background": "#AA8800",
        "warning.foreground": "#333333",
        "info.background": "#004400",
        "info.hover.background": "#005500",
        "info.active.background": "#003300",
        "info.foreground": "#88DD88",
        "muted.background": "#444444",
        "muted.foreground": "#888888",
        "ring": "#005500",
        "overlay": "#111111CC",
        "popover.background": "#444444",
        "popover.foreground": "#FFFFFF",
        "sidebar.background": "#333333",
        "sidebar.foreground": "#FFFFFF",
        "sidebar.accent.background": "#444444",
        "sidebar.accent.foreground": "#FFFFFF",
        "sidebar.primary.background": "#005500",
        "sidebar.primary.foreground": "#88DD88",
        "sidebar.border": "#555555",
        "list.background": "#333333",
        "list.hover.background": "#444444",
        "list.active.background": "#00CC0033",
        "list.active.border": "#005500",
        "list.even.background": "#3A3A3A",
        "list.head.background": "#333333",
        "tab.background": "#333333",
        "tab.active.background": "#3A3A3A",
        "tab.active.foreground": "#FFFFFF",
        "tab.foreground": "#888888",
        "tab_bar.background": "#111111",
        "table.background": "#333333",
        "table.hover.background": "#444444",
        "table.active.background": "#00CC0033",
        "table.active.border": "#005500",
        "table.even.background": "#3A3A3A",
        "table.head.background": "#111111",
        "table.head.foreground": "#AAAAAA",
        "table.row.border": "#555555",
        "scrollbar.background": "#333333",
        "scrollbar.thumb.background": "#666666",
        "scrollbar.thumb.hover.background": "#777777",
        "selection.background": "#00CC0033",
        "caret": "#005500",
        "title_bar.background": "#111111",
        "title_bar.border": "#555555",
        "window.border": "#555555",
        "link": "#005500",
        "link.hover": "#007700",
        "link.active": "#004400",
        "skeleton.background": "#444444",
        "progress.bar.background": "#005500",
        "drag.border": "#005500",
        "drop_target.background": "#00CC0022"
    }"##;
    serde_json::from_str(json).expect("CMD_PAL theme colors are valid")
}
