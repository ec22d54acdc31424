//! Glyph rendering into a [`PixelBuffer`].

use driftwm_abi::FontInfo;

use crate::surface::PixelBuffer;

/// Draw one glyph cell at (x, y).
///
/// Both foreground and background pixels are painted, so a glyph fully
/// covers its cell. Pixels falling outside the buffer clip silently.
pub fn draw_char(buf: &mut PixelBuffer, font: &FontInfo, ch: u8, x: i32, y: i32, fg: u32, bg: u32) {
    for row in 0..font.height() {
        let bits = font.row(ch, row);
        for col in 0..font.width() {
            let px = if (bits >> (font.width() - 1 - col)) & 1 != 0 {
                fg
            } else {
                bg
            };
            buf.put(x + col, y + row, px);
        }
    }
}
