//! Pointer and scroll capture.
//!
//! Input events arrive whenever the host delivers them, not in step with
//! simulation ticks. They are folded into an [`InputSlot`]: a single
//! current value per input, last write wins, nothing queued. The tick reads
//! one snapshot and never sees half of an update.
//!
//! ```ignore
//! let slot = background.input();
//! let mut capture = InputCapture::new(slot);
//!
//! // In the winit event handler:
//! capture.handle_event(&event);
//! ```

use glam::Vec2;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use winit::event::{MouseScrollDelta, WindowEvent};

/// Pixels scrolled per wheel line.
pub const LINE_HEIGHT_PX: f64 = 40.0;

/// Shared last-write-wins pointer and scroll state.
///
/// The pointer is stored as both `f32` bit patterns packed into one atomic
/// word, so `x` and `y` are always read as a pair.
#[derive(Debug, Default)]
pub struct InputSlot {
    pointer: AtomicU64,
    scroll: AtomicU64,
}

impl InputSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a pointer position in `[-1, 1]` space, +y up.
    pub fn set_pointer(&self, pointer: Vec2) {
        self.pointer.store(pack(pointer), Ordering::Relaxed);
    }

    /// Latest pointer position.
    pub fn pointer(&self) -> Vec2 {
        unpack(self.pointer.load(Ordering::Relaxed))
    }

    /// Store an absolute scroll offset in pixels.
    pub fn set_scroll(&self, offset_px: f64) {
        self.scroll.store(offset_px.to_bits(), Ordering::Relaxed);
    }

    /// Move the scroll offset by `delta_px`, never going below zero.
    pub fn scroll_by(&self, delta_px: f64) {
        // The closure always returns Some, so this cannot fail.
        let _ = self
            .scroll
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |bits| {
                Some((f64::from_bits(bits) + delta_px).max(0.0).to_bits())
            });
    }

    /// Latest scroll offset in pixels.
    pub fn scroll(&self) -> f64 {
        f64::from_bits(self.scroll.load(Ordering::Relaxed))
    }
}

fn pack(v: Vec2) -> u64 {
    ((v.x.to_bits() as u64) << 32) | v.y.to_bits() as u64
}

fn unpack(bits: u64) -> Vec2 {
    Vec2::new(f32::from_bits((bits >> 32) as u32), f32::from_bits(bits as u32))
}

/// Convert a cursor position in window pixels to `[-1, 1]` pointer space.
///
/// Origin is the window center, +x right, +y up. Returns `None` while the
/// window has no area.
pub fn pointer_from_window(cursor_px: Vec2, window_size: (u32, u32)) -> Option<Vec2> {
    let (w, h) = window_size;
    if w == 0 || h == 0 {
        return None;
    }
    Some(Vec2::new(
        (cursor_px.x / w as f32) * 2.0 - 1.0,
        -(cursor_px.y / h as f32) * 2.0 + 1.0,
    ))
}

/// Center of the radial highlight overlay, in percent of the viewport
/// (`0, 0` top-left).
pub fn overlay_center(pointer: Vec2) -> Vec2 {
    Vec2::new(pointer.x * 50.0 + 50.0, -pointer.y * 50.0 + 50.0)
}

/// Feeds winit window events into an [`InputSlot`].
#[derive(Debug)]
pub struct InputCapture {
    slot: Arc<InputSlot>,
    window_size: (u32, u32),
}

impl InputCapture {
    pub fn new(slot: Arc<InputSlot>) -> Self {
        Self {
            slot,
            window_size: (800, 600),
        }
    }

    /// The slot this capture writes to.
    pub fn slot(&self) -> &Arc<InputSlot> {
        &self.slot
    }

    /// Update window size for pointer normalization.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Process a winit window event. Unrelated events are ignored.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Resized(size) => {
                self.set_window_size(size.width, size.height);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let cursor = Vec2::new(position.x as f32, position.y as f32);
                if let Some(pointer) = pointer_from_window(cursor, self.window_size) {
                    self.slot.set_pointer(pointer);
                }
            }

            // Wheel up (positive y) scrolls the page back toward the top.
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y as f64 * LINE_HEIGHT_PX,
                    MouseScrollDelta::PixelDelta(pos) => pos.y,
                };
                self.slot.scroll_by(-dy);
            }

            _ => {}
        }
    }
}
