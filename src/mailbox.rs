use image::RgbaImage;
use std::sync::{Arc, Mutex};

/// Where a frame came from. Mostly informational, but the poller uses it to
/// decide whether the drag overlay border needs recoloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSource {
    Camera,
    File,
    Screenshot,
    TrackedRegion,
}

/// One still image captured from any source. Ephemeral: created per capture,
/// dropped after decode and display.
#[derive(Clone)]
pub struct CapturedFrame {
    pub image: RgbaImage,
    pub source: FrameSource,
}

impl CapturedFrame {
    pub fn new(image: RgbaImage, source: FrameSource) -> Self {
        Self { image, source }
    }
}

/// What a capture worker hands to the UI poller: either a fresh frame or a
/// terminal error message.
#[derive(Clone)]
pub enum ScanUpdate {
    Frame(CapturedFrame),
    Failure(String),
}

/// Single-slot handoff from the capture thread to the UI poller.
///
/// Writes are last-write-wins: a frame the poller has not consumed yet is
/// silently replaced by the next capture. Freshness over completeness —
/// stale frames are dropped, never queued. Reads take-and-clear.
#[derive(Clone, Default)]
pub struct Mailbox(Arc<Mutex<Option<ScanUpdate>>>);

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, update: ScanUpdate) {
        *self.0.lock().unwrap() = Some(update);
    }

    pub fn take(&self) -> Option<ScanUpdate> {
        self.0.lock().unwrap().take()
    }

    pub fn clear(&self) {
        *self.0.lock().unwrap() = None;
    }
}
