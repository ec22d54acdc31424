//! driftwm — a software-rendered window compositor core.
//!
//! The host hands over a linear framebuffer and (optionally) a bitmap font;
//! the core owns everything above that: a registry of windows with private
//! canvases, a double-buffered compositor that republishes only changed
//! pixels, a cursor overlay that repairs the pixels it covers, and a pointer
//! hit classifier for move/resize/focus/paint gestures.
//!
//! All state lives in a [`WindowManager`] context object so independent
//! instances can coexist and be unit tested; hosts that want a single
//! process-wide compositor use the free functions in [`service`], whose one
//! lock covers registry mutation, composition and cursor movement together.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod compositor;
pub mod cursor;
pub mod hit;
pub mod manager;
pub mod output;
pub mod registry;
pub mod service;
pub mod theme;

pub use driftwm_abi::{FontInfo, HitFlags, HitReport, SurfaceInfo, WindowId, WmError};
pub use manager::WindowManager;
