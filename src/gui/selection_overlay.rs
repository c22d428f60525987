use crate::region::CaptureRegion;
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Dragging { from: (i32, i32) },
}

/// Full-virtual-screen, topmost, translucent layer for picking a capture
/// rectangle. Press starts a drag, release resolves the normalized
/// rectangle, Escape resolves a zero-size rectangle. Either way the overlay
/// is dismissed the moment a terminal state is reached.
pub struct SelectionOverlay {
    bounds: CaptureRegion,
    phase: Phase,
    current: Option<(i32, i32)>,
}

impl SelectionOverlay {
    /// `bounds` is the virtual-screen rectangle the overlay must cover.
    pub fn new(bounds: CaptureRegion) -> Self {
        Self {
            bounds,
            phase: Phase::Idle,
            current: None,
        }
    }

    /// Drive the overlay for one frame. Returns `Some(region)` once the user
    /// released the drag (normalized rectangle) or hit Escape (zero-size
    /// rectangle); `None` while the selection is still in progress. The
    /// caller drops the overlay on `Some`, which destroys the window.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<CaptureRegion> {
        let mut outcome = None;
        let builder = egui::ViewportBuilder::default()
            .with_title("Select region")
            .with_position(egui::pos2(self.bounds.left as f32, self.bounds.top as f32))
            .with_inner_size(egui::vec2(
                self.bounds.width as f32,
                self.bounds.height as f32,
            ))
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top();

        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("selection-overlay"),
            builder,
            |ctx, _class| {
                ctx.output_mut(|o| o.cursor_icon = egui::CursorIcon::Crosshair);
                let frame = egui::Frame::none().fill(egui::Color32::from_black_alpha(96));
                egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
                    let response = ui.allocate_rect(ui.max_rect(), egui::Sense::drag());

                    // Pointer positions are viewport-relative; anchor them to
                    // the overlay's screen origin so the resolved rectangle
                    // is in screen coordinates.
                    let origin = ctx
                        .input(|i| i.viewport().outer_rect)
                        .map(|r| (r.left() as i32, r.top() as i32))
                        .unwrap_or((self.bounds.left, self.bounds.top));

                    if let Some(pos) = response.interact_pointer_pos() {
                        let pos = (origin.0 + pos.x as i32, origin.1 + pos.y as i32);
                        if self.phase == Phase::Idle && response.drag_started() {
                            self.phase = Phase::Dragging { from: pos };
                        }
                        self.current = Some(pos);
                    }

                    if let Phase::Dragging { from } = self.phase {
                        let to = self.current.unwrap_or(from);
                        let rect = egui::Rect::from_two_pos(
                            egui::pos2((from.0 - origin.0) as f32, (from.1 - origin.1) as f32),
                            egui::pos2((to.0 - origin.0) as f32, (to.1 - origin.1) as f32),
                        );
                        ui.painter()
                            .rect_stroke(rect, 0.0, egui::Stroke::new(2.0, egui::Color32::RED));

                        if response.drag_stopped() {
                            outcome = Some(CaptureRegion::from_points(from, to));
                        }
                    }

                    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                        outcome = Some(CaptureRegion::default());
                    }
                });
            },
        );
        outcome
    }
}
