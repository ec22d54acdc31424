//! Mouse cursor overlay: restore-under, stamp-over.

use driftwm_gfx::PixelBuffer;
use driftwm_gfx::cursor::{CURSOR_SIZE, cursor_pixel};

use crate::output::PhysSurface;

/// Tracks the cursor hotspot and repairs the pixels its glyph covered.
///
/// The stamp goes straight to the physical surface and never enters the
/// composited frames, so the restore pass can always recover the underlying
/// content from the current frame — no second composite needed for the
/// high-frequency pointer path.
pub struct CursorOverlay {
    x: i32,
    y: i32,
    last_x: i32,
    last_y: i32,
}

impl CursorOverlay {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            last_x: x,
            last_y: y,
        }
    }

    #[inline]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Apply a motion delta, clamped to the surface.
    pub fn move_by(&mut self, dx: i32, dy: i32, width: i32, height: i32) {
        self.move_to(self.x + dx, self.y + dy, width, height);
    }

    /// Jump to an absolute position, clamped to the surface.
    pub fn move_to(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.x = x.clamp(0, width - 1);
        self.y = y.clamp(0, height - 1);
    }

    /// Restore the frame's pixels under the previous stamp, then stamp the
    /// glyph at the current position.
    ///
    /// Must run after every composite pass and after every position change,
    /// so the cursor neither leaves residue nor goes missing under freshly
    /// published pixels.
    pub fn repaint(&mut self, frame: &PixelBuffer, out: &mut PhysSurface) {
        for dx in 0..CURSOR_SIZE {
            for dy in 0..CURSOR_SIZE {
                if cursor_pixel(dx, dy).is_some() {
                    let px = frame.get(self.last_x + dx, self.last_y + dy).unwrap_or(0);
                    out.plot(self.last_x + dx, self.last_y + dy, px);
                }
            }
        }
        for dx in 0..CURSOR_SIZE {
            for dy in 0..CURSOR_SIZE {
                if let Some(px) = cursor_pixel(dx, dy) {
                    out.plot(self.x + dx, self.y + dy, px);
                }
            }
        }
        self.last_x = self.x;
        self.last_y = self.y;
    }
}
