//! Theme constants for CMD_PAL.
//!
//! Terminal-green on charcoal. All colors are GPUI Rgba values for direct use
//! in styling.

use gpui::Rgba;

// =============================================================================
// COLOR PALETTE
// =============================================================================

// Surfaces
pub fn app_bg() -> Rgba {
    gpui::rgb(0x333333)
}
pub fn field_bg() -> Rgba {
    gpui::rgb(0x444444)
}
pub fn item_bg() -> Rgba {
    gpui::rgb(0x666666)
}
pub fn item_hover_bg() -> Rgba {
    gpui::rgb(0x777777)
}
pub fn border() -> Rgba {
    gpui::rgb(0x666666)
}

// Header and status area (bright while focused, dim while collapsed)
pub fn header_bg() -> Rgba {
    gpui::rgb(0x112211)
}
pub fn header_text() -> Rgba {
    gpui::rgb(0x00CC00)
}
pub fn header_bg_dim() -> Rgba {
    gpui::rgb(0x111111)
}
pub fn header_text_dim() -> Rgba {
    gpui::rgb(0x006600)
}

// Labels
pub fn column_label_bg() -> Rgba {
    gpui::rgb(0x226622)
}
pub fn section_label_bg() -> Rgba {
    gpui::rgb(0x000000)
}

// Text
pub fn text() -> Rgba {
    gpui::rgb(0xE8ECF0)
}
pub fn text_bright() -> Rgba {
    gpui::rgb(0xFFFFFF)
}

// Notes input and submit button
pub fn input_bg() -> Rgba {
    gpui::rgb(0xCCCCCC)
}
pub fn input_text() -> Rgba {
    gpui::rgb(0x333333)
}
pub fn submit_bg() -> Rgba {
    gpui::rgb(0x005500)
}
pub fn submit_text() -> Rgba {
    gpui::rgb(0x88DD88)
}

// =============================================================================
// TYPOGRAPHY SCALE
// =============================================================================

pub const TEXT_XS: f32 = 10.0;
pub const TEXT_SM: f32 = 11.0;
pub const TEXT_BASE: f32 = 12.0;
pub const TEXT_MD: f32 = 14.0;
pub const TEXT_HEADER: f32 = 26.0;

// =============================================================================
// SPACING SCALE
// =============================================================================

pub const SPACE_1: f32 = 2.0;
pub const SPACE_2: f32 = 3.0;
pub const SPACE_3: f32 = 5.0;
pub const SPACE_4: f32 = 10.0;

// =============================================================================
// LAYOUT
// =============================================================================

/// Window width per configuration column.
pub const COLUMN_WIDTH: f32 = 300.0;
pub const WINDOW_HEIGHT: f32 = 1000.0;
/// Initial distance from the top of the screen.
pub const WINDOW_TOP: f32 = 100.0;

pub const ITEM_LIST_HEIGHT: f32 = 100.0;
pub const LOG_HEIGHT: f32 = 160.0;
pub const STATUS_HEIGHT: f32 = 90.0;
