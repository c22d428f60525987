use crate::region::{CaptureRegion, SharedRegion};
use eframe::egui;

const NEUTRAL_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(16, 32, 96, 110);
const NEUTRAL_BORDER: egui::Color32 = egui::Color32::from_rgb(60, 110, 240);
const FOUND_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(16, 80, 24, 110);
const FOUND_BORDER: egui::Color32 = egui::Color32::from_rgb(50, 200, 80);

/// Fixed-size, semi-transparent, always-on-top window whose screen position
/// defines the tracked capture region. Dragging anywhere inside it hands the
/// move to the OS, which keeps the cursor at the same grab offset. The
/// window reports its rectangle through [`SharedRegion`] every frame; the
/// capture loop reads it from there.
pub struct DragOverlay {
    size: (f32, f32),
}

impl DragOverlay {
    pub fn new(size: (f32, f32)) -> Self {
        Self { size }
    }

    /// Drive the overlay for one frame. `found` recolors the border green.
    /// Returns `false` once the user asked the window to close.
    pub fn show(&mut self, ctx: &egui::Context, region: &SharedRegion, found: bool) -> bool {
        let mut alive = true;
        let builder = egui::ViewportBuilder::default()
            .with_title("Capture target")
            .with_position(egui::pos2(100.0, 100.0))
            .with_inner_size(egui::vec2(self.size.0, self.size.1))
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_resizable(false);

        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("drag-overlay"),
            builder,
            |ctx, _class| {
                if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
                    region.set(CaptureRegion::new(
                        rect.left() as i32,
                        rect.top() as i32,
                        rect.width() as u32,
                        rect.height() as u32,
                    ));
                }

                let (fill, border) = if found {
                    (FOUND_FILL, FOUND_BORDER)
                } else {
                    (NEUTRAL_FILL, NEUTRAL_BORDER)
                };
                egui::CentralPanel::default()
                    .frame(
                        egui::Frame::none()
                            .fill(fill)
                            .stroke(egui::Stroke::new(3.0, border)),
                    )
                    .show(ctx, |ui| {
                        let response = ui.interact(
                            ui.max_rect(),
                            ui.id().with("drag-surface"),
                            egui::Sense::click_and_drag(),
                        );
                        if response.drag_started() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                        }
                        ui.centered_and_justified(|ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new("Drag this window over a code")
                                        .color(egui::Color32::WHITE),
                                )
                                .selectable(false),
                            );
                        });
                    });

                if ctx.input(|i| i.viewport().close_requested()) {
                    alive = false;
                }
            },
        );
        alive
    }
}
