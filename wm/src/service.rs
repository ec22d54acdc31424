//! Process-wide compositor service.
//!
//! A single locked [`WindowManager`] behind free functions, for hosts that
//! want one compositor per display without threading a context handle
//! through every call site. The one lock covers registry mutation,
//! composition and cursor movement, so callers never observe a
//! half-composited frame.

use spin::Mutex;

use driftwm_abi::{FontInfo, HitReport, SurfaceInfo, WindowId, WmError};

use crate::manager::WindowManager;

static MANAGER: Mutex<Option<WindowManager>> = Mutex::new(None);

fn with<R>(f: impl FnOnce(&mut WindowManager) -> R) -> Option<R> {
    MANAGER.lock().as_mut().map(f)
}

/// Bind the service to a host surface, replacing any previous instance.
pub fn init(base: *mut u32, info: SurfaceInfo, font: Option<FontInfo>) -> Result<(), WmError> {
    let wm = WindowManager::new(base, info, font)?;
    *MANAGER.lock() = Some(wm);
    Ok(())
}

pub fn create_window(
    title: &str,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> Result<WindowId, WmError> {
    with(|wm| wm.create_window(title, x, y, width, height)).ok_or(WmError::NotInitialized)?
}

pub fn destroy_window(id: WindowId) {
    with(|wm| wm.destroy_window(id));
}

pub fn focus_window(id: WindowId) {
    with(|wm| wm.focus_window(id));
}

pub fn move_window(id: WindowId, dx: i32, dy: i32) {
    with(|wm| wm.move_window(id, dx, dy));
}

pub fn resize_window(id: WindowId, dx: i32, dy: i32) -> Result<(), WmError> {
    with(|wm| wm.resize_window(id, dx, dy)).ok_or(WmError::NotInitialized)?
}

pub fn toggle_drawable(id: WindowId) {
    with(|wm| wm.toggle_drawable(id));
}

pub fn plot_window_pixel(id: WindowId, x: i32, y: i32, px: u32) {
    with(|wm| wm.plot_window_pixel(id, x, y, px));
}

pub fn set_cursor_relative(dx: i32, dy: i32) {
    with(|wm| wm.set_cursor_relative(dx, dy));
}

pub fn set_cursor_absolute(x: i32, y: i32) {
    with(|wm| wm.set_cursor_absolute(x, y));
}

/// `None` until [`init`] has succeeded.
pub fn cursor_position() -> Option<(i32, i32)> {
    with(|wm| wm.cursor_position())
}

pub fn classify_point(x: i32, y: i32) -> Option<HitReport> {
    with(|wm| wm.classify_point(x, y)).flatten()
}

pub fn refresh() {
    with(|wm| wm.refresh());
}
