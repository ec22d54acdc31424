//! The 16x16 arrow cursor glyph.

/// Cursor cell size in pixels.
pub const CURSOR_SIZE: i32 = 16;

const OUTLINE: u32 = 0x00FF_FFFF;
const FILL: u32 = 0x0000_0000;

const X: u8 = 1;
const B: u8 = 2;
const O: u8 = 0;

// Stored column-major: entry `dx * CURSOR_SIZE + dy`.
#[rustfmt::skip]
static MASK: [u8; (CURSOR_SIZE * CURSOR_SIZE) as usize] = [
    X, X, X, X, X, X, X, X, X, X, X, X, O, O, O, O,
    X, B, B, B, B, B, B, B, B, B, X, O, O, O, O, O,
    X, B, B, B, B, B, B, B, B, X, O, O, O, O, O, O,
    X, B, B, B, B, B, B, B, X, O, O, O, O, O, O, O,
    X, B, B, B, B, B, B, X, O, O, O, O, O, O, O, O,
    X, B, B, B, B, B, B, B, X, O, O, O, O, O, O, O,
    X, B, B, B, B, B, B, B, B, X, O, O, O, O, O, O,
    X, B, B, B, X, B, B, B, B, B, X, O, O, O, O, O,
    X, B, B, X, O, X, B, B, B, B, B, X, O, O, O, O,
    X, B, X, O, O, O, X, B, B, B, B, B, X, O, O, O,
    X, X, O, O, O, O, O, X, B, B, B, B, B, X, O, O,
    X, O, O, O, O, O, O, O, X, B, B, B, B, B, X, O,
    O, O, O, O, O, O, O, O, O, X, B, B, B, B, B, X,
    O, O, O, O, O, O, O, O, O, O, X, B, B, B, X, O,
    O, O, O, O, O, O, O, O, O, O, O, X, B, X, O, O,
    O, O, O, O, O, O, O, O, O, O, O, O, X, O, O, O,
];

/// Color of the cursor cell at (dx, dy), `None` where transparent.
///
/// Callers iterate `0..CURSOR_SIZE` on both axes; other offsets are out of
/// the glyph.
#[inline]
pub fn cursor_pixel(dx: i32, dy: i32) -> Option<u32> {
    match MASK[(dx * CURSOR_SIZE + dy) as usize] {
        X => Some(OUTLINE),
        B => Some(FILL),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotspot_is_opaque() {
        assert_eq!(cursor_pixel(0, 0), Some(OUTLINE));
        assert_eq!(cursor_pixel(1, 1), Some(FILL));
    }

    #[test]
    fn test_transparent_corner() {
        assert_eq!(cursor_pixel(15, 0), None);
        assert_eq!(cursor_pixel(15, 15), None);
    }

    #[test]
    fn test_every_cell_classified() {
        let mut opaque = 0;
        for dx in 0..CURSOR_SIZE {
            for dy in 0..CURSOR_SIZE {
                if cursor_pixel(dx, dy).is_some() {
                    opaque += 1;
                }
            }
        }
        assert!(opaque > 0 && opaque < (CURSOR_SIZE * CURSOR_SIZE));
    }
}
