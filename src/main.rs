use eframe::egui;
use omniscan::gui::ScannerApp;
use omniscan::settings::Settings;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load("settings.json")?;
    omniscan::logging::init(
        settings.debug_logging,
        settings.log_file.as_deref().map(Path::new),
    );

    let (width, height) = settings.window_size.unwrap_or((800.0, 600.0));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    let _ = eframe::run_native(
        "OmniScan",
        native_options,
        Box::new(move |_cc| Box::new(ScannerApp::new(settings))),
    );
    Ok(())
}
