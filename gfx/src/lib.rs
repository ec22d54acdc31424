//! Software drawing primitives for the driftwm compositor.
//!
//! Everything in this crate is safe code over owned pixel memory: the
//! bounds-checked [`PixelBuffer`], glyph rendering into it, and the cursor
//! glyph data. Writes to the host's physical surface live in `driftwm-wm`.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod cursor;
pub mod font_render;
pub mod surface;

pub use surface::PixelBuffer;
