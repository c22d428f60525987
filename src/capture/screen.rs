use crate::capture::CaptureError;
use crate::region::CaptureRegion;
use image::RgbaImage;
use screenshots::Screen;

/// Grab one screenshot of `region`. The region is given in virtual-screen
/// coordinates; `capture_area` wants coordinates relative to the display
/// that hosts the region's top-left corner.
pub fn grab_region(region: &CaptureRegion) -> Result<RgbaImage, CaptureError> {
    let screen = Screen::from_point(region.left, region.top)
        .map_err(|_| CaptureError::ScreenUnavailable)?;
    screen
        .capture_area(
            region.left - screen.display_info.x,
            region.top - screen.display_info.y,
            region.width,
            region.height,
        )
        .map_err(|e| CaptureError::Grab(e.to_string()))
}

/// Bounding rectangle of all connected displays. Sizes the selection
/// overlay so a drag can span monitors.
pub fn virtual_screen_rect() -> Result<CaptureRegion, CaptureError> {
    let screens = Screen::all().map_err(|e| CaptureError::Grab(e.to_string()))?;
    if screens.is_empty() {
        return Err(CaptureError::ScreenUnavailable);
    }
    let mut left = i32::MAX;
    let mut top = i32::MAX;
    let mut right = i32::MIN;
    let mut bottom = i32::MIN;
    for screen in &screens {
        let info = &screen.display_info;
        left = left.min(info.x);
        top = top.min(info.y);
        right = right.max(info.x + info.width as i32);
        bottom = bottom.max(info.y + info.height as i32);
    }
    Ok(CaptureRegion::new(
        left,
        top,
        (right - left) as u32,
        (bottom - top) as u32,
    ))
}
