//! Window identifiers and hit-test reports.

use bitflags::bitflags;

/// Identifier of a live window.
///
/// Ids are arena slot indices: the lowest value not currently in use is
/// assigned at creation, and an id becomes reusable once its window is
/// destroyed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct WindowId(pub u32);

impl WindowId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

bitflags! {
    /// Sub-region classification of a pointer hit.
    ///
    /// A corner sets both of its border flags at once (e.g. TOP | LEFT);
    /// callers depend on that to dispatch combined corner drags. TITLEBAR
    /// excludes the strip's own border rows and columns by construction.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct HitFlags: u8 {
        const TITLEBAR = 1 << 0;
        const TOP = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
        const RIGHT = 1 << 4;
    }
}

/// Result of classifying a point against the window stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HitReport {
    pub id: WindowId,
    /// Canvas-relative x, or -1 when the hit landed on a decoration.
    pub rel_x: i32,
    /// Canvas-relative y, or -1 when the hit landed on a decoration.
    pub rel_y: i32,
    pub flags: HitFlags,
}

impl HitReport {
    #[inline]
    pub fn is_titlebar(&self) -> bool {
        self.flags.contains(HitFlags::TITLEBAR)
    }

    #[inline]
    pub fn is_top(&self) -> bool {
        self.flags.contains(HitFlags::TOP)
    }

    #[inline]
    pub fn is_bottom(&self) -> bool {
        self.flags.contains(HitFlags::BOTTOM)
    }

    #[inline]
    pub fn is_left(&self) -> bool {
        self.flags.contains(HitFlags::LEFT)
    }

    #[inline]
    pub fn is_right(&self) -> bool {
        self.flags.contains(HitFlags::RIGHT)
    }

    /// Content-relative coordinates when the hit landed on the canvas.
    #[inline]
    pub fn canvas_pos(&self) -> Option<(i32, i32)> {
        if self.flags.is_empty() {
            Some((self.rel_x, self.rel_y))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_pos_gated_by_flags() {
        let canvas = HitReport {
            id: WindowId(0),
            rel_x: 4,
            rel_y: 7,
            flags: HitFlags::empty(),
        };
        assert_eq!(canvas.canvas_pos(), Some((4, 7)));

        let corner = HitReport {
            id: WindowId(0),
            rel_x: -1,
            rel_y: -1,
            flags: HitFlags::TOP | HitFlags::LEFT,
        };
        assert!(corner.is_top() && corner.is_left());
        assert!(!corner.is_titlebar());
        assert_eq!(corner.canvas_pos(), None);
    }
}
