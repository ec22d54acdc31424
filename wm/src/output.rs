//! Bounds-checked writes to the host-provided physical surface.

use core::mem;

use driftwm_abi::{SurfaceInfo, WmError};

/// The displayed pixel memory.
///
/// The base is kept as an address rather than a pointer so the owning
/// manager stays `Send` for hosts that park it behind a lock. The surface is
/// write-only: composition and cursor restore both read from the in-memory
/// frames, never from display memory.
pub struct PhysSurface {
    base: usize,
    info: SurfaceInfo,
}

impl PhysSurface {
    /// Validate the host descriptor and wrap the mapping.
    pub fn new(base: *mut u32, info: SurfaceInfo) -> Result<Self, WmError> {
        if base.is_null() || (base as usize) % mem::align_of::<u32>() != 0 {
            return Err(WmError::InvalidSurface);
        }
        if !info.is_valid() {
            return Err(WmError::InvalidSurface);
        }
        Ok(Self {
            base: base as usize,
            info,
        })
    }

    #[inline]
    pub fn info(&self) -> SurfaceInfo {
        self.info
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.info.width as i32
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.info.height as i32
    }

    /// Write one pixel by frame index; indices past the end are discarded.
    #[inline]
    pub fn write_index(&mut self, index: usize, px: u32) {
        if index >= self.info.frame_len() {
            return;
        }
        // SAFETY: the descriptor was validated in `new` and `index` is
        // bounds-checked against the mapped frame length above.
        unsafe {
            (self.base as *mut u32).add(index).write_volatile(px);
        }
    }

    /// Bounds-checked pixel write in surface coordinates.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, px: u32) {
        if !self.info.contains(x, y) {
            return;
        }
        self.write_index(x as usize + self.info.pitch_px() * y as usize, px);
    }
}
