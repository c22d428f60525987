pub mod camera;
pub mod screen;
pub mod tracked;

use thiserror::Error;

/// Capture-related errors. Everything here ends up as a user-facing message
/// on the result panel; none of it is fatal to the process.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Camera missing or held by another application.
    #[error("{0}")]
    DeviceUnavailable(String),
    /// Mid-session read error from an already-open device.
    #[error("Failed to read a frame from the camera: {0}")]
    ReadFailure(String),
    /// No display covers the requested region.
    #[error("No screen found for the requested region")]
    ScreenUnavailable,
    /// The screenshot grab itself failed.
    #[error("Screen capture failed: {0}")]
    Grab(String),
}
