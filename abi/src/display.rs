//! Physical surface descriptor.

/// Geometry of a linear packed-RGB pixel surface.
///
/// `pitch` is the byte stride between rows and may exceed
/// `width * BYTES_PER_PIXEL` on padded framebuffers; all row addressing must
/// go through [`SurfaceInfo::pitch_px`], never the visible width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SurfaceInfo {
    pub width: u32,
    pub height: u32,
    /// Byte stride per row.
    pub pitch: u32,
}

impl SurfaceInfo {
    pub const BYTES_PER_PIXEL: u32 = 4;
    pub const MAX_DIMENSION: u32 = 16384;
    pub const MAX_BUFFER_SIZE: usize = 64 * 1024 * 1024;

    #[inline]
    pub const fn new(width: u32, height: u32, pitch: u32) -> Self {
        Self {
            width,
            height,
            pitch,
        }
    }

    /// Pixels per row, padding included.
    #[inline]
    pub const fn pitch_px(&self) -> usize {
        (self.pitch / Self::BYTES_PER_PIXEL) as usize
    }

    /// Total pixels per frame, padding included.
    #[inline]
    pub const fn frame_len(&self) -> usize {
        self.pitch_px() * self.height as usize
    }

    /// Total frame bytes.
    #[inline]
    pub const fn buffer_size(&self) -> usize {
        self.frame_len() * Self::BYTES_PER_PIXEL as usize
    }

    /// True when (x, y) lies on the visible surface.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    pub fn is_valid(&self) -> bool {
        if self.width < 1 || self.width > Self::MAX_DIMENSION {
            return false;
        }
        if self.height < 1 || self.height > Self::MAX_DIMENSION {
            return false;
        }
        if self.pitch % Self::BYTES_PER_PIXEL != 0 {
            return false;
        }
        if self.pitch < self.width * Self::BYTES_PER_PIXEL {
            return false;
        }
        self.buffer_size() <= Self::MAX_BUFFER_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_addressing() {
        let info = SurfaceInfo::new(640, 480, 2560);
        assert_eq!(info.pitch_px(), 640);
        assert_eq!(info.frame_len(), 640 * 480);

        let padded = SurfaceInfo::new(640, 480, 2720);
        assert_eq!(padded.pitch_px(), 680);
        assert_eq!(padded.frame_len(), 680 * 480);
        assert!(padded.is_valid());
    }

    #[test]
    fn test_validation_rejects_bad_descriptors() {
        assert!(!SurfaceInfo::new(0, 480, 2560).is_valid());
        assert!(!SurfaceInfo::new(640, 0, 2560).is_valid());
        // Pitch shorter than a row.
        assert!(!SurfaceInfo::new(640, 480, 2000).is_valid());
        // Pitch not a whole number of pixels.
        assert!(!SurfaceInfo::new(640, 480, 2561).is_valid());
    }

    #[test]
    fn test_contains() {
        let info = SurfaceInfo::new(64, 48, 256);
        assert!(info.contains(0, 0));
        assert!(info.contains(63, 47));
        assert!(!info.contains(64, 0));
        assert!(!info.contains(0, 48));
        assert!(!info.contains(-1, 5));
    }
}
