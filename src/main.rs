// Property Portal Application
// Main entry point

use anyhow::{anyhow, Context, Result};
use property_portal::models::ledger::Ledger;
use property_portal::services::settings::SettingsService;
use property_portal::ui_egui::PortalApp;

fn main() -> Result<()> {
    let settings_service = SettingsService::from_project_dirs();
    let settings = settings_service.load_or_default();

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    log::info!("Starting Property Portal");
    log::debug!("Settings file: {}", settings_service.path().display());

    let ledger = Ledger::mock().context("Failed to load the bundled ledger")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Property Portal")
            .with_inner_size(egui::vec2(settings.window_width, settings.window_height))
            .with_min_inner_size(egui::vec2(360.0, 480.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Property Portal",
        options,
        Box::new(move |cc| Ok(Box::new(PortalApp::new(cc, &settings, ledger)))),
    )
    .map_err(|e| anyhow!("Application error: {}", e))
}
