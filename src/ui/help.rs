use crate::settings::AppSettings;
use eframe::egui;

pub fn render_help(ui: &mut egui::Ui, settings: &AppSettings) {
    ui.heading("Quick start");
    ui.label("- Click traits to add them; click a selected trait to remove it.");
    ui.label("- Traits are equipped in the order you picked them.");
    ui.label(format!(
        "- Start {} and open the traits screen of a hunter.",
        settings.game_window_title
    ));
    ui.label("- Press Equip and keep your hands off mouse and keyboard.");
    ui.label("- Hold Esc to stop equipping at any time.");

    ui.add_space(10.0);
    ui.heading("Upgrade points");
    ui.label("- Read points reads the available points from the game screen.");
    ui.label("- Remaining points turn red when the selection costs too much.");
    ui.label("- Preview region shows where the points are read from.");
    ui.label(format!("- Requires {}.", settings.ocr.binary));

    ui.add_space(10.0);
    ui.heading("Notes");
    ui.label("- Screen positions assume a 2560x1080 screen; adjust them in the settings file.");
    ui.label(format!("- Selection is saved to {}.", settings.preset_file));
    ui.label("- Import/Export load and save presets anywhere on disk.");
    ui.label("- Log panel shows what the app is doing.");
}
