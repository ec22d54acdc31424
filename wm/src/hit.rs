//! Pointer hit classification against the window stack.

use driftwm_abi::{HitFlags, HitReport};

use crate::registry::WindowRegistry;
use crate::theme::TITLE_BAR_THICKNESS;

/// Classify a point against window frames, topmost first.
///
/// A window's frame box is its content area plus the 1px border and the
/// title bar; the first (topmost) box containing the point wins. Border and
/// titlebar flags are evaluated independently, so a corner reports both of
/// its borders. Points on no decoration are canvas hits with
/// content-relative coordinates; decoration hits report the (-1, -1)
/// sentinel. `None` when no window's box contains the point.
pub fn classify(registry: &WindowRegistry, x: i32, y: i32) -> Option<HitReport> {
    for window in registry.iter_z_rev() {
        let dx = x - window.x;
        let dy = y - window.y;
        let width = window.width();
        let height = window.height();

        if dx < 0 || dx >= width + 2 || dy < 0 || dy >= height + TITLE_BAR_THICKNESS + 1 {
            continue;
        }

        let mut flags = HitFlags::empty();
        if dy > 0 && dy < TITLE_BAR_THICKNESS && dx > 0 && dx < width {
            flags |= HitFlags::TITLEBAR;
        }
        if dy == 0 {
            flags |= HitFlags::TOP;
        } else if dy == height + TITLE_BAR_THICKNESS {
            flags |= HitFlags::BOTTOM;
        }
        if dx == 0 {
            flags |= HitFlags::LEFT;
        } else if dx == width + 1 {
            flags |= HitFlags::RIGHT;
        }

        let (rel_x, rel_y) = if flags.is_empty() {
            (dx - 1, dy - TITLE_BAR_THICKNESS)
        } else {
            (-1, -1)
        };

        return Some(HitReport {
            id: window.id(),
            rel_x,
            rel_y,
            flags,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(x: i32, y: i32, width: i32, height: i32) -> WindowRegistry {
        let mut registry = WindowRegistry::new();
        registry.create("a", x, y, width, height).unwrap();
        registry
    }

    #[test]
    fn test_top_left_corner_is_both_borders() {
        let registry = registry_with(10, 10, 100, 50);
        let hit = classify(&registry, 10, 10).unwrap();
        assert_eq!(hit.id.0, 0);
        assert!(hit.is_top() && hit.is_left());
        assert!(!hit.is_titlebar());
        assert_eq!((hit.rel_x, hit.rel_y), (-1, -1));
        assert_eq!(hit.canvas_pos(), None);
    }

    #[test]
    fn test_titlebar_interior() {
        let registry = registry_with(10, 10, 100, 50);
        let hit = classify(&registry, 15, 15).unwrap();
        assert!(hit.is_titlebar());
        assert!(!hit.is_top() && !hit.is_left());
        assert_eq!((hit.rel_x, hit.rel_y), (-1, -1));
    }

    #[test]
    fn test_canvas_relative_coordinates() {
        let registry = registry_with(10, 10, 100, 50);
        // Content origin is (11, 28): one border pixel in, below the bar.
        let hit = classify(&registry, 15, 31).unwrap();
        assert!(hit.flags.is_empty());
        assert_eq!(hit.canvas_pos(), Some((4, 3)));
    }

    #[test]
    fn test_right_and_bottom_edges() {
        let registry = registry_with(10, 10, 100, 50);
        let right = classify(&registry, 111, 30).unwrap();
        assert!(right.is_right() && !right.is_left());

        let bottom = classify(&registry, 50, 78).unwrap();
        assert!(bottom.is_bottom() && !bottom.is_top());

        let corner = classify(&registry, 111, 78).unwrap();
        assert!(corner.is_bottom() && corner.is_right());

        // One past the frame box on either axis misses.
        assert!(classify(&registry, 112, 30).is_none());
        assert!(classify(&registry, 50, 79).is_none());
    }

    #[test]
    fn test_topmost_window_wins() {
        let mut registry = WindowRegistry::new();
        let bottom = registry.create("bottom", 10, 10, 40, 30).unwrap();
        let top = registry.create("top", 10, 10, 40, 30).unwrap();

        assert_eq!(classify(&registry, 20, 20).unwrap().id, top);
        registry.focus(bottom);
        assert_eq!(classify(&registry, 20, 20).unwrap().id, bottom);
    }

    #[test]
    fn test_miss_returns_none() {
        let registry = registry_with(10, 10, 100, 50);
        assert!(classify(&registry, 0, 0).is_none());
        assert!(classify(&WindowRegistry::new(), 10, 10).is_none());
    }
}
