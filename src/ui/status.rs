use eframe::egui;

pub fn render_status(ui: &mut egui::Ui, label: &str, status: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{}:", label)).strong());

        let status_color = if status.contains("Running") || status.contains("Equipped") {
            egui::Color32::from_rgb(100, 255, 100)
        } else if status.contains("Error") || status.contains("Failed") {
            egui::Color32::from_rgb(255, 100, 100)
        } else {
            egui::Color32::GRAY
        };

        let full = status.to_string();
        let shortened = if full.chars().count() > 80 {
            format!("{}...", full.chars().take(77).collect::<String>())
        } else {
            full.clone()
        };
        let response = ui.label(egui::RichText::new(shortened).color(status_color));
        if full.chars().count() > 80 {
            response.on_hover_text(full);
        }
    });
}
