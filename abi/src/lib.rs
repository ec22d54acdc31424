//! driftwm shared types.
//!
//! Canonical definitions for everything that crosses the boundary between
//! the host environment and the compositor core: surface and font
//! descriptors, packed-pixel helpers, window identifiers, hit-test reports
//! and the error taxonomy. Keeping them in one leaf crate means the drawing
//! and windowing crates never disagree about layout or semantics.

#![no_std]
#![forbid(unsafe_code)]

pub mod display;
pub mod error;
pub mod font;
pub mod pixel;
pub mod window;

pub use display::SurfaceInfo;
pub use error::WmError;
pub use font::FontInfo;
pub use window::{HitFlags, HitReport, WindowId};
