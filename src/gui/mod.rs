mod drag_overlay;
mod selection_overlay;

pub use drag_overlay::DragOverlay;
pub use selection_overlay::SelectionOverlay;

use crate::capture::{camera, screen, tracked};
use crate::clipboard;
use crate::decode::{self, SymbolDecoder};
use crate::mailbox::{CapturedFrame, FrameSource, Mailbox, ScanUpdate};
use crate::region::{CaptureRegion, SharedRegion};
use crate::session::{ScanSession, SessionKind};
use crate::settings::Settings;
use eframe::egui;
use image::RgbaImage;
use std::time::Duration;

const WELCOME_TEXT: &str = "Image display area\n\nWelcome! Pick a scan mode below.";

// The compositor needs a moment to actually remove the selection overlay
// before the grab, or the screenshot contains the translucent layer itself.
const GRAB_DELAY_FRAMES: u8 = 3;

pub struct ScannerApp {
    settings: Settings,
    decoder: Box<dyn SymbolDecoder>,
    mailbox: Mailbox,
    session: Option<ScanSession>,
    /// Geometry handle shared with the tracked capture loop.
    region: SharedRegion,
    drag_overlay: Option<DragOverlay>,
    selection: Option<SelectionOverlay>,
    pending_grab: Option<(CaptureRegion, u8)>,
    preview: Option<egui::TextureHandle>,
    result_text: String,
    last_payload: Option<String>,
    symbol_found: bool,
    /// Whether there is anything on screen worth clearing.
    dirty: bool,
}

impl ScannerApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            decoder: decode::default_decoder(),
            mailbox: Mailbox::new(),
            session: None,
            region: SharedRegion::default(),
            drag_overlay: None,
            selection: None,
            pending_grab: None,
            preview: None,
            result_text: String::new(),
            last_payload: None,
            symbol_found: false,
            dirty: false,
        }
    }

    fn busy(&self) -> bool {
        self.session.is_some() || self.selection.is_some() || self.pending_grab.is_some()
    }

    /// Tear down whatever flow is running: cancel the worker (bounded join,
    /// device released), drop overlays, drain the mailbox. Leaves the result
    /// panel alone so error messages survive.
    fn end_session(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.cancel();
        }
        self.drag_overlay = None;
        self.selection = None;
        self.pending_grab = None;
        self.mailbox.clear();
        self.symbol_found = false;
    }

    /// The Clear / Reset button: also the cancel path for a running flow.
    fn clear_interface(&mut self) {
        self.end_session();
        self.preview = None;
        self.result_text.clear();
        self.last_payload = None;
        self.dirty = false;
    }

    /// Common entry for every scan flow: any previous session is fully torn
    /// down before new resources are acquired.
    fn begin_flow(&mut self, status: &str) {
        self.end_session();
        self.last_payload = None;
        self.result_text = status.to_string();
        self.dirty = true;
    }

    fn start_camera_scan(&mut self) {
        self.begin_flow("Starting camera...");
        let index = self.settings.camera_index;
        let interval = Duration::from_millis(self.settings.camera_interval_ms);
        self.session = Some(ScanSession::spawn(
            SessionKind::Camera,
            &self.mailbox,
            move |handle| camera::run_camera_loop(handle, index, interval),
        ));
        tracing::info!("camera scan started");
    }

    fn start_tracked_scan(&mut self) {
        self.begin_flow("Live region scan started. Drag the translucent window over a code.");
        // The overlay publishes its real geometry on its first frame; until
        // then the loop sees an empty region and skips.
        self.region.set(CaptureRegion::default());
        self.drag_overlay = Some(DragOverlay::new(self.settings.overlay_size));
        let region = self.region.clone();
        let interval = Duration::from_millis(self.settings.tracked_interval_ms);
        self.session = Some(ScanSession::spawn(
            SessionKind::TrackedRegion,
            &self.mailbox,
            move |handle| tracked::run_tracked_loop(handle, region, interval),
        ));
        tracing::info!("tracked-region scan started");
    }

    fn upload_image_scan(&mut self, ctx: &egui::Context) {
        self.begin_flow("");
        let picked = rfd::FileDialog::new()
            .set_title("Choose an image containing a code")
            .add_filter("Image files", &["png", "jpg", "jpeg", "bmp", "gif"])
            .pick_file();
        let Some(path) = picked else {
            // Dialog dismissed: back to idle, not an error.
            self.clear_interface();
            return;
        };
        match image::open(&path) {
            Ok(img) => {
                let frame = CapturedFrame::new(img.to_rgba8(), FrameSource::File);
                self.handle_frame(ctx, frame);
            }
            Err(e) => {
                tracing::warn!("failed to open {}: {e}", path.display());
                self.result_text = format!("Could not open or decode the image: {e}");
            }
        }
    }

    fn start_region_scan(&mut self, ctx: &egui::Context) {
        self.begin_flow("Drag to select a region to capture...");
        match screen::virtual_screen_rect() {
            Ok(bounds) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
                self.selection = Some(SelectionOverlay::new(bounds));
            }
            Err(e) => self.result_text = e.to_string(),
        }
    }

    fn copy_result(&mut self) {
        let Some(payload) = self.last_payload.clone() else {
            return;
        };
        match clipboard::copy_text(&payload) {
            Ok(()) => self.result_text = format!("Copied to clipboard:\n{payload}"),
            Err(e) => {
                tracing::warn!("clipboard write failed: {e}");
                self.result_text = format!("Could not copy to clipboard: {e}");
            }
        }
    }

    /// Decode and display one frame. Decoding runs here, on the UI thread,
    /// so its cost is bounded by the poll interval and the capture thread
    /// stays a pure producer.
    fn handle_frame(&mut self, ctx: &egui::Context, frame: CapturedFrame) {
        let symbols = self.decoder.decode(&frame.image);
        self.show_preview(ctx, &frame.image);
        self.symbol_found = !symbols.is_empty();
        self.last_payload = decode::first_payload(&symbols);
        self.result_text = decode::format_results(&symbols);
        self.dirty = true;
    }

    fn show_preview(&mut self, ctx: &egui::Context, image: &RgbaImage) {
        let size = [image.width() as usize, image.height() as usize];
        let color = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
        match &mut self.preview {
            Some(texture) => texture.set(color, egui::TextureOptions::LINEAR),
            None => {
                self.preview =
                    Some(ctx.load_texture("capture-preview", color, egui::TextureOptions::LINEAR));
            }
        }
    }

    /// The fixed-interval poller: drain the mailbox, decode, update the
    /// display. A Failure sentinel ends the session; the worker's loop
    /// condition goes false on its next check.
    fn poll(&mut self, ctx: &egui::Context) {
        if self.session.is_none() {
            return;
        }
        let Some(update) = self.mailbox.take() else {
            return;
        };
        match update {
            ScanUpdate::Frame(frame) => self.handle_frame(ctx, frame),
            ScanUpdate::Failure(message) => {
                tracing::warn!("capture worker failed: {message}");
                if let Some(session) = &self.session {
                    session.deactivate();
                }
                self.end_session();
                self.result_text = message;
            }
        }
    }

    fn drive_selection(&mut self, ctx: &egui::Context) {
        let Some(selection) = &mut self.selection else {
            return;
        };
        let Some(region) = selection.show(ctx) else {
            return;
        };
        self.selection = None;
        ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
        ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
        if region.is_empty() {
            // Escape or a zero-area drag: cancellation, not an error.
            self.result_text = "Screenshot cancelled.".into();
            return;
        }
        // TODO: map overlay points to physical pixels on scaled displays
        // before handing the region to the grabber.
        self.pending_grab = Some((region, GRAB_DELAY_FRAMES));
    }

    fn drive_pending_grab(&mut self, ctx: &egui::Context) {
        let Some((region, frames_left)) = self.pending_grab.take() else {
            return;
        };
        if frames_left > 0 {
            self.pending_grab = Some((region, frames_left - 1));
            ctx.request_repaint_after(Duration::from_millis(60));
            return;
        }
        match screen::grab_region(&region) {
            Ok(image) => {
                let frame = CapturedFrame::new(image, FrameSource::Screenshot);
                self.handle_frame(ctx, frame);
            }
            Err(e) => {
                tracing::warn!("one-shot grab failed: {e}");
                self.result_text = format!("Screenshot failed: {e}");
            }
        }
    }

    fn drive_drag_overlay(&mut self, ctx: &egui::Context) {
        let tracked_session = matches!(
            self.session.as_ref().map(|s| s.kind()),
            Some(SessionKind::TrackedRegion)
        );
        if !tracked_session {
            return;
        }
        let Some(overlay) = &mut self.drag_overlay else {
            return;
        };
        if !overlay.show(ctx, &self.region, self.symbol_found) {
            // Overlay closed out from under the session.
            self.end_session();
        }
    }

    fn draw_main(&mut self, ctx: &egui::Context) {
        let busy = self.busy();

        egui::TopBottomPanel::bottom("button-panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!busy, egui::Button::new("Camera scan"))
                    .clicked()
                {
                    self.start_camera_scan();
                }
                if ui
                    .add_enabled(!busy, egui::Button::new("Upload image"))
                    .clicked()
                {
                    self.upload_image_scan(ctx);
                }
                if ui
                    .add_enabled(!busy, egui::Button::new("Region screenshot"))
                    .clicked()
                {
                    self.start_region_scan(ctx);
                }
            });
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!busy, egui::Button::new("Live region scan"))
                    .clicked()
                {
                    self.start_tracked_scan();
                }
                if ui
                    .add_enabled(self.last_payload.is_some(), egui::Button::new("Copy result"))
                    .clicked()
                {
                    self.copy_result();
                }
                if ui
                    .add_enabled(self.dirty || busy, egui::Button::new("Clear / Reset"))
                    .clicked()
                {
                    self.clear_interface();
                }
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("result-panel")
            .min_height(110.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut self.result_text.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(4),
                    );
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| match &self.preview {
                Some(texture) => {
                    ui.add(egui::Image::new(texture).shrink_to_fit());
                }
                None => {
                    ui.label(WELCOME_TEXT);
                }
            });
        });
    }
}

impl eframe::App for ScannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drive_selection(ctx);
        self.drive_pending_grab(ctx);
        self.drive_drag_overlay(ctx);
        self.poll(ctx);
        self.draw_main(ctx);

        if self.session.is_some() {
            ctx.request_repaint_after(Duration::from_millis(
                self.settings.poll_interval_ms.max(16),
            ));
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Transparent so the overlay viewports can actually be see-through.
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Window close cancels any active session and releases the devices.
        self.end_session();
    }
}
