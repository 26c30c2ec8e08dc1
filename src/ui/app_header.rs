use eframe::egui;

pub enum HeaderAction {
    ImportPreset,
    ExportPreset,
    ClearSelection,
    ToggleLog,
    Help,
    None,
}

/// Render the app header (game window status + utility buttons)
pub fn render_header(ui: &mut egui::Ui, game_title: &str, game_found: bool) -> HeaderAction {
    let mut action = HeaderAction::None;

    ui.horizontal(|ui| {
        // --- Left Side: game window status ---
        if game_found {
            ui.label(
                egui::RichText::new(format!("Found: {}", game_title))
                    .color(egui::Color32::from_rgb(168, 226, 187))
                    .strong(),
            );
        } else {
            ui.label(
                egui::RichText::new(format!("Not running: {}", game_title))
                    .color(egui::Color32::from_rgb(200, 200, 200))
                    .strong(),
            );
        }

        // --- Right Side: All Buttons ---
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(6.0, 0.0);
            let button_size = egui::vec2(66.0, 26.0);
            let help_size = egui::vec2(26.0, 26.0);

            if ui
                .add_sized(
                    help_size,
                    egui::Button::new(egui::RichText::new("?").strong())
                        .rounding(egui::Rounding::same(13.0)),
                )
                .clicked()
            {
                action = HeaderAction::Help;
            }

            if ui.add_sized(button_size, egui::Button::new("Log")).clicked() {
                action = HeaderAction::ToggleLog;
            }

            if ui
                .add_sized(button_size, egui::Button::new("Clear"))
                .on_hover_text("Deselect all traits")
                .clicked()
            {
                action = HeaderAction::ClearSelection;
            }

            if ui
                .add_sized(button_size, egui::Button::new("Export…"))
                .on_hover_text("Save the selection to a preset file")
                .clicked()
            {
                action = HeaderAction::ExportPreset;
            }

            if ui
                .add_sized(button_size, egui::Button::new("Import…"))
                .on_hover_text("Replace the selection with a preset file")
                .clicked()
            {
                action = HeaderAction::ImportPreset;
            }
        });
    });

    action
}
