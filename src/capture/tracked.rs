use crate::capture::screen;
use crate::mailbox::{CapturedFrame, FrameSource};
use crate::region::SharedRegion;
use crate::session::SessionHandle;
use std::time::Duration;

/// Tracked-region worker: re-read the overlay's current rectangle, grab a
/// screenshot of exactly that region, publish it, sleep `interval`. The
/// loop only knows the region through the [`SharedRegion`] query handle,
/// never the overlay window itself.
///
/// Individual grab failures are skipped, not fatal: they happen while the
/// overlay straddles a monitor edge mid-drag.
pub fn run_tracked_loop(handle: SessionHandle, region: SharedRegion, interval: Duration) {
    while handle.is_active() {
        let current = region.get();
        if !current.is_empty() {
            match screen::grab_region(&current) {
                Ok(image) => {
                    handle.publish(CapturedFrame::new(image, FrameSource::TrackedRegion));
                }
                Err(e) => tracing::debug!("tracked grab skipped: {e}"),
            }
        }
        std::thread::sleep(interval);
    }
    tracing::info!("tracked-region capture stopped");
}
