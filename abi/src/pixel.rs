//! Packed-RGB pixel helpers.

/// Construct a packed 0x00RRGGBB pixel value.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Red channel of a packed pixel.
#[inline]
pub const fn red(px: u32) -> u8 {
    (px >> 16) as u8
}

/// Green channel of a packed pixel.
#[inline]
pub const fn green(px: u32) -> u8 {
    (px >> 8) as u8
}

/// Blue channel of a packed pixel.
#[inline]
pub const fn blue(px: u32) -> u8 {
    px as u8
}
