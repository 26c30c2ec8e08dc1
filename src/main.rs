mod app;
mod automation;
mod catalog;
mod core;
mod error;
mod preset;
mod selection;
mod settings;
mod tools;
mod ui;

use std::sync::Arc;
use eframe::egui;
use app::TraitPresetsApp;
use catalog::Catalog;
use settings::AppSettings;

fn main() -> Result<(), eframe::Error> {
    let logs = crate::core::log_buffer::init_logging();

    let settings = AppSettings::load();
    crate::core::log_buffer::apply_log_level(&settings.log_level);
    if !AppSettings::file_exists() {
        // Write defaults so screen positions can be adjusted by hand
        settings.auto_save();
    }

    let catalog = match Catalog::builtin() {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            log::error!("Invalid trait catalog: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Loaded {} traits", catalog.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1440.0, 900.0])
            .with_title("Hunt: Showdown - Trait Presets"),
        ..Default::default()
    };

    eframe::run_native(
        "Hunt Trait Presets",
        options,
        Box::new(move |_cc| Box::new(TraitPresetsApp::new(catalog, settings, logs))),
    )
}
