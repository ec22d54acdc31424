//! Window records and z-ordering.

use alloc::string::String;
use alloc::vec::Vec;

use driftwm_abi::{WindowId, WmError};
use driftwm_gfx::PixelBuffer;

/// One window: a content canvas plus frame geometry.
///
/// `x`/`y` are physical-surface coordinates and may go negative or past the
/// surface edge; drawing clips at the pixel level, geometry is never
/// clamped. Content dimensions never fall below 1, and the canvas length
/// always equals `width * height`.
pub struct Window {
    id: WindowId,
    title: String,
    pub x: i32,
    pub y: i32,
    width: i32,
    height: i32,
    drawable: bool,
    canvas: PixelBuffer,
}

impl Window {
    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.drawable
    }

    #[inline]
    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }
}

/// Dense window arena plus a separate bottom-to-top draw order.
///
/// The slot index doubles as the window id, so "lowest unused id" is simply
/// the first free slot and ids recycle after destruction. The tail of
/// `order` is the focused, topmost window.
pub struct WindowRegistry {
    slots: Vec<Option<Window>>,
    order: Vec<WindowId>,
    focused: Option<WindowId>,
}

impl WindowRegistry {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            order: Vec::new(),
            focused: None,
        }
    }

    #[inline]
    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Windows bottom-to-top.
    pub fn iter_z(&self) -> impl Iterator<Item = &Window> {
        self.order
            .iter()
            .filter_map(|id| self.slots[id.index()].as_ref())
    }

    /// Windows topmost-first.
    pub fn iter_z_rev(&self) -> impl Iterator<Item = &Window> {
        self.order
            .iter()
            .rev()
            .filter_map(|id| self.slots[id.index()].as_ref())
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.slots.get(id.index()).and_then(|slot| slot.as_ref())
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.slots.get_mut(id.index()).and_then(|slot| slot.as_mut())
    }

    /// Create a window at the top of the stack and focus it.
    ///
    /// Dimensions floor at 1. The canvas and title are allocated before any
    /// registry state changes, so allocation failure leaves no partial
    /// window behind.
    pub fn create(
        &mut self,
        title: &str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<WindowId, WmError> {
        let width = width.max(1);
        let height = height.max(1);

        let canvas = PixelBuffer::try_new(width as u32, height as u32)?;
        let mut owned_title = String::new();
        owned_title
            .try_reserve_exact(title.len())
            .map_err(|_| WmError::OutOfMemory)?;
        owned_title.push_str(title);

        self.order.try_reserve(1).map_err(|_| WmError::OutOfMemory)?;
        let slot = match self.slots.iter().position(|slot| slot.is_none()) {
            Some(free) => free,
            None => {
                self.slots.try_reserve(1).map_err(|_| WmError::OutOfMemory)?;
                self.slots.push(None);
                self.slots.len() - 1
            }
        };

        let id = WindowId(slot as u32);
        self.slots[slot] = Some(Window {
            id,
            title: owned_title,
            x,
            y,
            width,
            height,
            drawable: false,
            canvas,
        });
        self.order.push(id);
        self.focused = Some(id);
        Ok(id)
    }

    /// Relink a window to the top of the draw order, preserving the relative
    /// order of everything else. Unknown ids and already-topmost windows are
    /// complete no-ops.
    pub fn focus(&mut self, id: WindowId) -> bool {
        if self.order.last() == Some(&id) {
            return false;
        }
        let Some(pos) = self.order.iter().position(|&w| w == id) else {
            return false;
        };
        self.order.remove(pos);
        self.order.push(id);
        self.focused = Some(id);
        true
    }

    /// Shift a window by a delta; off-surface positions are allowed.
    pub fn move_by(&mut self, id: WindowId, dx: i32, dy: i32) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.x += dx;
        window.y += dy;
        true
    }

    /// Grow or shrink the content area by a delta, floored at 1x1.
    ///
    /// The overlapping rectangle of old and new content is preserved;
    /// exposed area reads as zero. Unknown ids are a no-op (`Ok(false)`);
    /// allocation failure leaves the window untouched.
    pub fn resize_by(&mut self, id: WindowId, dx: i32, dy: i32) -> Result<bool, WmError> {
        let Some(window) = self.get_mut(id) else {
            return Ok(false);
        };
        let new_width = (window.width + dx).max(1);
        let new_height = (window.height + dy).max(1);

        let mut canvas = PixelBuffer::try_new(new_width as u32, new_height as u32)?;
        let copy_width = window.width.min(new_width) as usize;
        let copy_height = window.height.min(new_height) as usize;
        {
            let src = window.canvas.as_slice();
            let dst = canvas.as_mut_slice();
            for row in 0..copy_height {
                let src_off = row * window.width as usize;
                let dst_off = row * new_width as usize;
                dst[dst_off..dst_off + copy_width]
                    .copy_from_slice(&src[src_off..src_off + copy_width]);
            }
        }
        window.canvas = canvas;
        window.width = new_width;
        window.height = new_height;
        Ok(true)
    }

    /// Paint one content pixel. No-op unless the window exists, is drawable,
    /// and (x, y) is inside the canvas.
    pub fn plot(&mut self, id: WindowId, x: i32, y: i32, px: u32) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        if !window.drawable {
            return false;
        }
        if x < 0 || y < 0 || x >= window.width || y >= window.height {
            return false;
        }
        window.canvas.put(x, y, px);
        true
    }

    /// Flip content painting on or off. Windows start with painting off.
    pub fn toggle_drawable(&mut self, id: WindowId) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.drawable = !window.drawable;
        true
    }

    /// Unlink and drop a window; its id becomes reusable. Focus falls back
    /// to the new topmost window.
    pub fn destroy(&mut self, id: WindowId) -> bool {
        let Some(slot) = self.slots.get_mut(id.index()) else {
            return false;
        };
        if slot.take().is_none() {
            return false;
        }
        self.order.retain(|&w| w != id);
        if self.focused == Some(id) {
            self.focused = self.order.last().copied();
        }
        true
    }
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}
