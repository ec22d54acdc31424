//! Frame composition and change-only publishing.

use core::mem;

use driftwm_abi::{FontInfo, SurfaceInfo, WmError};
use driftwm_gfx::{PixelBuffer, font_render};

use crate::output::PhysSurface;
use crate::registry::{Window, WindowRegistry};
use crate::theme::{
    BACKGROUND_COLOR, TITLE_BAR_BACKGROUND, TITLE_BAR_FOREGROUND, TITLE_BAR_THICKNESS,
    WINDOW_BORDER,
};

/// Double-buffered compositor state.
///
/// `current` and `previous` are full-surface frames (padding included) that
/// ping-pong every pass; the pixel diff between them is the only thing ever
/// published to the physical surface here, which keeps per-refresh cost
/// proportional to change volume rather than surface area. The cursor
/// overlay stamps on top of the published frame afterwards and never enters
/// either buffer.
pub struct Compositor {
    current: PixelBuffer,
    previous: PixelBuffer,
    dirty: bool,
}

impl Compositor {
    /// Allocate the frame pair. Starts dirty so the first refresh paints
    /// the whole surface.
    pub fn try_new(info: &SurfaceInfo) -> Result<Self, WmError> {
        Ok(Self {
            current: PixelBuffer::try_with_pitch(info.width, info.height, info.pitch_px())?,
            previous: PixelBuffer::try_with_pitch(info.width, info.height, info.pitch_px())?,
            dirty: true,
        })
    }

    /// The most recently composited frame.
    #[inline]
    pub fn frame(&self) -> &PixelBuffer {
        &self.current
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recomposite the window stack and publish changed pixels.
    ///
    /// Returns false without touching the surface when nothing was dirty;
    /// any number of mutations between two calls coalesce into one pass, so
    /// a fixed-tick caller pays only for frames that actually changed.
    pub fn refresh(
        &mut self,
        registry: &WindowRegistry,
        font: Option<&FontInfo>,
        out: &mut PhysSurface,
    ) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;

        mem::swap(&mut self.current, &mut self.previous);
        self.current.fill(BACKGROUND_COLOR);

        for window in registry.iter_z() {
            draw_window(&mut self.current, window, font);
        }

        let current = self.current.as_slice();
        let previous = self.previous.as_slice();
        for i in 0..current.len() {
            if current[i] != previous[i] {
                out.write_index(i, current[i]);
            }
        }
        true
    }
}

/// Draw one window's decorations and content, clipped by the frame bounds.
fn draw_window(frame: &mut PixelBuffer, window: &Window, font: Option<&FontInfo>) {
    let x = window.x;
    let y = window.y;
    let width = window.width();
    let height = window.height();

    // Title-bar strip, one border pixel wider on each side.
    for row in 0..TITLE_BAR_THICKNESS {
        for i in 0..width + 2 {
            frame.put(x + i, y + row, TITLE_BAR_BACKGROUND);
        }
    }

    if let Some(font) = font {
        draw_title(frame, window, font);
    }

    // 1px border around title bar and content.
    let bottom = y + TITLE_BAR_THICKNESS + height;
    for i in 0..width + 2 {
        frame.put(x + i, y, WINDOW_BORDER);
        frame.put(x + i, bottom, WINDOW_BORDER);
    }
    for i in 0..height + TITLE_BAR_THICKNESS + 1 {
        frame.put(x, y + i, WINDOW_BORDER);
        frame.put(x + width + 1, y + i, WINDOW_BORDER);
    }

    // Content blit, offset past the left border and title bar.
    let canvas = window.canvas().as_slice();
    for cy in 0..height {
        for cx in 0..width {
            frame.put(
                x + 1 + cx,
                y + TITLE_BAR_THICKNESS + cy,
                canvas[(cy * width + cx) as usize],
            );
        }
    }
}

/// Title text, left-padded one glyph cell, dropping any glyph whose cell
/// would cross the window's right edge.
fn draw_title(frame: &mut PixelBuffer, window: &Window, font: &FontInfo) {
    for (i, ch) in window.title().bytes().enumerate() {
        let i = i as i32;
        if font.width() + (i + 1) * font.width() >= window.width() {
            break;
        }
        font_render::draw_char(
            frame,
            font,
            ch,
            window.x + font.width() + i * font.width(),
            window.y + 1,
            TITLE_BAR_FOREGROUND,
            TITLE_BAR_BACKGROUND,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;
    use std::vec::Vec;

    const PITCH_PX: usize = 70;

    fn fixture() -> (Vec<u32>, PhysSurface, Compositor, WindowRegistry) {
        let info = SurfaceInfo::new(64, 48, PITCH_PX as u32 * 4);
        let mut buf = vec![0u32; info.frame_len()];
        let surface = PhysSurface::new(buf.as_mut_ptr(), info).unwrap();
        let compositor = Compositor::try_new(&info).unwrap();
        (buf, surface, compositor, WindowRegistry::new())
    }

    fn idx(x: usize, y: usize) -> usize {
        x + PITCH_PX * y
    }

    #[test]
    fn test_background_and_decorations() {
        let (buf, mut surface, mut compositor, mut registry) = fixture();
        registry.create("w", 10, 10, 8, 6).unwrap();
        compositor.mark_dirty();
        assert!(compositor.refresh(&registry, None, &mut surface));

        assert_eq!(buf[idx(0, 0)], BACKGROUND_COLOR);
        // Top border overwrites the title strip's first row.
        assert_eq!(buf[idx(10, 10)], WINDOW_BORDER);
        assert_eq!(buf[idx(15, 10)], WINDOW_BORDER);
        // Title strip interior.
        assert_eq!(buf[idx(15, 20)], TITLE_BAR_BACKGROUND);
        // Left/right borders span the full frame height.
        assert_eq!(buf[idx(10, 30)], WINDOW_BORDER);
        assert_eq!(buf[idx(19, 30)], WINDOW_BORDER);
        // Bottom border at y + titlebar + height.
        assert_eq!(buf[idx(15, 34)], WINDOW_BORDER);
        // Zero-filled canvas shows through between the borders.
        assert_eq!(buf[idx(12, 30)], 0);
    }

    #[test]
    fn test_off_surface_window_clips() {
        let (buf, mut surface, mut compositor, mut registry) = fixture();
        registry.create("w", -5, -5, 100, 100).unwrap();
        assert!(compositor.refresh(&registry, None, &mut surface));

        // (0, 0) lands inside the title strip; the strip's own border rows
        // are off-surface.
        assert_eq!(buf[idx(0, 0)], TITLE_BAR_BACKGROUND);
        // Content area starts at y = -5 + 18 = 13.
        assert_eq!(buf[idx(0, 13)], 0);
    }

    #[test]
    fn test_clean_refresh_writes_nothing() {
        let (mut buf, mut surface, mut compositor, mut registry) = fixture();
        registry.create("w", 10, 10, 8, 6).unwrap();
        assert!(compositor.refresh(&registry, None, &mut surface));

        buf[idx(2, 2)] = 0xDEAD_BEEF;
        assert!(!compositor.refresh(&registry, None, &mut surface));
        assert_eq!(buf[idx(2, 2)], 0xDEAD_BEEF);
    }

    #[test]
    fn test_diff_publishes_only_changed_pixels() {
        let (mut buf, mut surface, mut compositor, mut registry) = fixture();
        let id = registry.create("w", 10, 10, 8, 6).unwrap();
        assert!(compositor.refresh(&registry, None, &mut surface));

        // Background far from the window is identical across frames, so a
        // dirty refresh must leave it alone.
        buf[idx(2, 2)] = 0xDEAD_BEEF;
        registry.move_by(id, 1, 0);
        compositor.mark_dirty();
        assert!(compositor.refresh(&registry, None, &mut surface));
        assert_eq!(buf[idx(2, 2)], 0xDEAD_BEEF);
        // The vacated left border column was repainted with background.
        assert_eq!(buf[idx(10, 20)], BACKGROUND_COLOR);
        assert_eq!(buf[idx(11, 20)], WINDOW_BORDER);
    }

    #[test]
    fn test_topmost_window_wins_overlap() {
        let (buf, mut surface, mut compositor, mut registry) = fixture();
        let bottom = registry.create("bottom", 10, 10, 8, 6).unwrap();
        let _top = registry.create("top", 10, 10, 8, 6).unwrap();
        registry.toggle_drawable(bottom);
        assert!(registry.plot(bottom, 0, 0, 0x00FF_0000));

        assert!(compositor.refresh(&registry, None, &mut surface));
        // The later-created window's zero canvas hides the red pixel.
        assert_eq!(buf[idx(11, 28)], 0);

        // Raising the painted window brings the pixel back.
        registry.focus(bottom);
        compositor.mark_dirty();
        assert!(compositor.refresh(&registry, None, &mut surface));
        assert_eq!(buf[idx(11, 28)], 0x00FF_0000);
    }

    // Every glyph row is all-foreground, so rendered cells read back as
    // solid TITLE_BAR_FOREGROUND.
    static GLYPHS: [u8; FontInfo::GLYPH_COUNT * 4] = [0xFF; FontInfo::GLYPH_COUNT * 4];

    #[test]
    fn test_title_clips_at_right_edge() {
        let (buf, mut surface, mut compositor, mut registry) = fixture();
        let font = FontInfo::new(&GLYPHS, 8, 4).unwrap();
        registry.create("abcdef", 0, 0, 20, 5).unwrap();
        assert!(compositor.refresh(&registry, Some(&font), &mut surface));

        // Only the first glyph fits: pad(8) + cell(8) = 16 < 20, the second
        // cell would end at 24.
        assert_eq!(buf[idx(8, 1)], TITLE_BAR_FOREGROUND);
        assert_eq!(buf[idx(15, 1)], TITLE_BAR_FOREGROUND);
        assert_eq!(buf[idx(16, 1)], TITLE_BAR_BACKGROUND);
    }
}
