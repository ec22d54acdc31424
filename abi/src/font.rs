//! Host-supplied bitmap font descriptor.

/// A glyph table addressed `glyph * height + row`.
///
/// Each row byte is a bitmask of `width` pixels; bit `width - 1 - col`
/// selects the foreground color for column `col`. The table must cover the
/// full 256 glyph range. Hosts without a font simply pass `None` to the
/// compositor and titles are not rendered.
#[derive(Copy, Clone)]
pub struct FontInfo {
    glyphs: &'static [u8],
    width: i32,
    height: i32,
}

impl FontInfo {
    pub const GLYPH_COUNT: usize = 256;

    /// Validate cell dimensions (rows are single bytes, so width is capped
    /// at 8) and table coverage.
    pub fn new(glyphs: &'static [u8], width: i32, height: i32) -> Option<Self> {
        if !(1..=8).contains(&width) || height < 1 {
            return None;
        }
        if glyphs.len() < Self::GLYPH_COUNT * height as usize {
            return None;
        }
        Some(Self {
            glyphs,
            width,
            height,
        })
    }

    /// Glyph cell width in pixels.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Glyph cell height in pixels.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Bitmask for one glyph scanline. `row` must be within the cell.
    #[inline]
    pub fn row(&self, glyph: u8, row: i32) -> u8 {
        self.glyphs[glyph as usize * self.height as usize + row as usize]
    }
}
