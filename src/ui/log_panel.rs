use eframe::egui;
use crate::core::log_buffer::LogBuffer;

fn line_color(line: &str) -> egui::Color32 {
    if line.starts_with("[ERROR]") {
        egui::Color32::from_rgb(255, 110, 110)
    } else if line.starts_with("[WARN]") {
        egui::Color32::from_rgb(230, 200, 110)
    } else if line.starts_with("[DEBUG]") || line.starts_with("[TRACE]") {
        egui::Color32::from_rgb(130, 130, 130)
    } else {
        egui::Color32::from_rgb(200, 200, 200)
    }
}

pub fn render_log_panel(ctx: &egui::Context, logs: &LogBuffer) {
    let lines = logs.snapshot();

    egui::SidePanel::right("log_panel")
        .resizable(true)
        .default_width(320.0)
        .min_width(200.0)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(12, 12, 12))
                .inner_margin(egui::Margin::same(8.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new("Log")
                                .strong()
                                .color(egui::Color32::LIGHT_GRAY),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("Clear").clicked() {
                                logs.clear();
                            }
                            ui.label(
                                egui::RichText::new(format!("{} lines", lines.len()))
                                    .small()
                                    .color(egui::Color32::DARK_GRAY),
                            );
                        });
                    });

                    ui.add_space(6.0);
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            if lines.is_empty() {
                                ui.label(
                                    egui::RichText::new("No log entries yet.")
                                        .italics()
                                        .color(egui::Color32::DARK_GRAY),
                                );
                            }
                            for line in &lines {
                                ui.label(
                                    egui::RichText::new(line)
                                        .monospace()
                                        .color(line_color(line)),
                                );
                            }
                        });
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_and_warnings_stand_out() {
        let info = line_color("[INFO] Equipped 2 traits");
        assert_ne!(line_color("[ERROR] OCR failed"), info);
        assert_ne!(line_color("[WARN] Skipping unknown trait"), info);
    }
}
