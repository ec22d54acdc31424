//! Fixed decoration palette and metrics.

use driftwm_abi::pixel::rgb;

/// Height of the title-bar strip in pixels.
pub const TITLE_BAR_THICKNESS: i32 = 18;

pub const BACKGROUND_COLOR: u32 = rgb(0x00, 0x80, 0x80);
pub const WINDOW_BORDER: u32 = rgb(0xFF, 0xFF, 0xFF);
pub const TITLE_BAR_BACKGROUND: u32 = rgb(0x00, 0x33, 0x77);
pub const TITLE_BAR_FOREGROUND: u32 = rgb(0xFF, 0xFF, 0xFF);
