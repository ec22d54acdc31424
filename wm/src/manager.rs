//! The compositor context object: every subsystem under one roof.

use driftwm_abi::{FontInfo, HitReport, SurfaceInfo, WindowId, WmError};

use crate::compositor::Compositor;
use crate::cursor::CursorOverlay;
use crate::hit;
use crate::output::PhysSurface;
use crate::registry::WindowRegistry;

/// One compositor instance bound to one physical surface.
///
/// Registry mutations only set the compositor's dirty flag; pixels move when
/// [`WindowManager::refresh`] runs. Cursor motion bypasses the composite
/// path entirely and repaints immediately.
pub struct WindowManager {
    surface: PhysSurface,
    font: Option<FontInfo>,
    registry: WindowRegistry,
    compositor: Compositor,
    cursor: CursorOverlay,
}

impl WindowManager {
    /// Bind to a host surface and paint the initial desktop.
    ///
    /// The cursor starts centered. The first refresh runs here, so the
    /// surface shows the background (and cursor) as soon as this returns.
    pub fn new(
        base: *mut u32,
        info: SurfaceInfo,
        font: Option<FontInfo>,
    ) -> Result<Self, WmError> {
        let surface = PhysSurface::new(base, info).inspect_err(|err| {
            log::warn!("rejected surface descriptor {info:?}: {err:?}");
        })?;
        let compositor = Compositor::try_new(&info)?;
        let cursor = CursorOverlay::new(info.width as i32 / 2, info.height as i32 / 2);

        let mut wm = Self {
            surface,
            font,
            registry: WindowRegistry::new(),
            compositor,
            cursor,
        };
        log::debug!(
            "compositor up: {}x{} pitch {} px",
            info.width,
            info.height,
            info.pitch_px()
        );
        wm.refresh();
        Ok(wm)
    }

    /// Create a focused window at the top of the stack.
    pub fn create_window(
        &mut self,
        title: &str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<WindowId, WmError> {
        let id = self
            .registry
            .create(title, x, y, width, height)
            .inspect_err(|err| log::warn!("window create failed: {err:?}"))?;
        self.compositor.mark_dirty();
        Ok(id)
    }

    pub fn destroy_window(&mut self, id: WindowId) {
        if self.registry.destroy(id) {
            self.compositor.mark_dirty();
        }
    }

    pub fn focus_window(&mut self, id: WindowId) {
        if self.registry.focus(id) {
            self.compositor.mark_dirty();
        }
    }

    pub fn move_window(&mut self, id: WindowId, dx: i32, dy: i32) {
        if self.registry.move_by(id, dx, dy) {
            self.compositor.mark_dirty();
        }
    }

    pub fn resize_window(&mut self, id: WindowId, dx: i32, dy: i32) -> Result<(), WmError> {
        if self.registry.resize_by(id, dx, dy)? {
            self.compositor.mark_dirty();
        }
        Ok(())
    }

    pub fn plot_window_pixel(&mut self, id: WindowId, x: i32, y: i32, px: u32) {
        if self.registry.plot(id, x, y, px) {
            self.compositor.mark_dirty();
        }
    }

    /// Flip a window's content painting on or off. Does not trigger a
    /// recomposite; already-painted content stays visible either way.
    pub fn toggle_drawable(&mut self, id: WindowId) {
        self.registry.toggle_drawable(id);
    }

    /// Classify a pointer position against the window stack, topmost first.
    pub fn classify_point(&self, x: i32, y: i32) -> Option<HitReport> {
        hit::classify(&self.registry, x, y)
    }

    #[inline]
    pub fn cursor_position(&self) -> (i32, i32) {
        self.cursor.position()
    }

    /// Move the cursor by a delta and repaint it immediately.
    pub fn set_cursor_relative(&mut self, dx: i32, dy: i32) {
        self.cursor
            .move_by(dx, dy, self.surface.width(), self.surface.height());
        self.cursor.repaint(self.compositor.frame(), &mut self.surface);
    }

    /// Warp the cursor to an absolute position and repaint it immediately.
    pub fn set_cursor_absolute(&mut self, x: i32, y: i32) {
        self.cursor
            .move_to(x, y, self.surface.width(), self.surface.height());
        self.cursor.repaint(self.compositor.frame(), &mut self.surface);
    }

    /// Recomposite and publish if anything changed since the last pass.
    ///
    /// The cursor is re-stamped after a publish, since the diff may have
    /// overwritten pixels under the glyph.
    pub fn refresh(&mut self) {
        if self
            .compositor
            .refresh(&self.registry, self.font.as_ref(), &mut self.surface)
        {
            self.cursor.repaint(self.compositor.frame(), &mut self.surface);
        }
    }
}
