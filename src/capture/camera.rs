use crate::capture::CaptureError;
use crate::mailbox::{CapturedFrame, FrameSource};
use crate::session::SessionHandle;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;
use std::time::Duration;

fn device_unavailable_message() -> String {
    let mut msg =
        String::from("No camera detected, or the camera is in use by another application.");
    if cfg!(target_os = "macos") {
        msg.push_str(
            "\n\nmacOS: check System Settings -> Privacy & Security -> Camera \
             and make sure this application is allowed to access it.",
        );
    }
    msg
}

/// Camera worker: open the default device, publish one frame per iteration,
/// sleep `interval` between reads. Runs until the session is cancelled or a
/// read fails. The device is released before this returns.
pub fn run_camera_loop(handle: SessionHandle, index: u32, interval: Duration) {
    let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
    let mut camera = match Camera::new(CameraIndex::Index(index), requested) {
        Ok(camera) => camera,
        Err(e) => {
            tracing::warn!("camera open failed: {e}");
            handle.fail(CaptureError::DeviceUnavailable(device_unavailable_message()).to_string());
            return;
        }
    };
    if let Err(e) = camera.open_stream() {
        tracing::warn!("camera stream open failed: {e}");
        handle.fail(CaptureError::DeviceUnavailable(device_unavailable_message()).to_string());
        return;
    }
    tracing::info!(index, "camera stream opened");

    while handle.is_active() {
        let frame = match camera.frame() {
            Ok(frame) => frame,
            Err(e) => {
                handle.fail(CaptureError::ReadFailure(e.to_string()).to_string());
                break;
            }
        };
        match frame.decode_image::<RgbFormat>() {
            Ok(rgb) => {
                // nokhwa returns an `image` 0.25 buffer; the rest of the crate
                // is built on `image` 0.24. Rebuild the RGB buffer from its raw
                // bytes (identical pixel layout) to cross the version boundary.
                let (width, height) = (rgb.width(), rgb.height());
                let rgb = image::RgbImage::from_raw(width, height, rgb.into_raw())
                    .expect("camera frame buffer length matches its dimensions");
                let rgba = image::DynamicImage::ImageRgb8(rgb).to_rgba8();
                handle.publish(CapturedFrame::new(rgba, FrameSource::Camera));
            }
            Err(e) => {
                handle.fail(CaptureError::ReadFailure(e.to_string()).to_string());
                break;
            }
        }
        std::thread::sleep(interval);
    }

    if let Err(e) = camera.stop_stream() {
        tracing::debug!("camera stream stop failed: {e}");
    }
    tracing::info!("camera released");
}
