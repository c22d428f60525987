use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// A rectangle in screen coordinates. `left`/`top` may be negative on
/// multi-monitor setups where a display sits left of or above the primary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    pub fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a normalized region from two opposite corners of a drag,
    /// regardless of drag direction.
    pub fn from_points(a: (i32, i32), b: (i32, i32)) -> Self {
        let left = a.0.min(b.0);
        let top = a.1.min(b.1);
        let width = (a.0 - b.0).unsigned_abs();
        let height = (a.1 - b.1).unsigned_abs();
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Zero-area regions act as the cancellation sentinel for the
    /// selection overlay.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn right(&self) -> i32 {
        self.left + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height as i32
    }
}

/// Narrow query interface between the drag overlay and the tracked capture
/// loop: the overlay writes its current geometry, the loop reads it. The
/// loop never touches UI state beyond this handle.
#[derive(Clone, Default)]
pub struct SharedRegion(Arc<Mutex<CaptureRegion>>);

impl SharedRegion {
    pub fn new(region: CaptureRegion) -> Self {
        Self(Arc::new(Mutex::new(region)))
    }

    pub fn set(&self, region: CaptureRegion) {
        *self.0.lock().unwrap() = region;
    }

    pub fn get(&self) -> CaptureRegion {
        *self.0.lock().unwrap()
    }
}
