//! Owned pixel buffer with bounds-checked access.

use alloc::vec::Vec;

use driftwm_abi::WmError;

/// A heap-backed rectangle of packed-RGB pixels.
///
/// Rows are `pitch_px` pixels apart. Full-surface frames mirror the physical
/// surface's padded pitch so frame indices line up one-to-one with physical
/// indices; window canvases use a packed pitch equal to their width.
///
/// All coordinate access is bounds-checked: reads off the buffer return
/// `None`, writes off the buffer are silently discarded. That discard is the
/// sole clipping mechanism in the compositor, which lets window geometry go
/// negative or past the surface edge without any clamping upstream.
pub struct PixelBuffer {
    data: Vec<u32>,
    width: u32,
    height: u32,
    pitch_px: usize,
}

impl PixelBuffer {
    /// Allocate a zero-filled buffer with packed rows (`pitch_px == width`).
    pub fn try_new(width: u32, height: u32) -> Result<Self, WmError> {
        Self::try_with_pitch(width, height, width as usize)
    }

    /// Allocate a zero-filled buffer with an explicit row stride in pixels.
    ///
    /// Fails with [`WmError::OutOfMemory`] when the allocation cannot be
    /// satisfied, leaving nothing behind.
    pub fn try_with_pitch(width: u32, height: u32, pitch_px: usize) -> Result<Self, WmError> {
        if width == 0 || height == 0 || pitch_px < width as usize {
            return Err(WmError::InvalidSurface);
        }
        let len = pitch_px
            .checked_mul(height as usize)
            .ok_or(WmError::OutOfMemory)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| WmError::OutOfMemory)?;
        data.resize(len, 0);
        Ok(Self {
            data,
            width,
            height,
            pitch_px,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pitch_px(&self) -> usize {
        self.pitch_px
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(x as usize + self.pitch_px * y as usize)
    }

    /// Bounds-checked read.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Bounds-checked write; out-of-range coordinates are discarded.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, px: u32) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = px;
        }
    }

    /// Fill every pixel, padding cells included.
    pub fn fill(&mut self, px: u32) {
        self.data.fill(px);
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.data
    }
}
