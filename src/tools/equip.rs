use eframe::egui;
use crate::automation::interaction::AutoGuiDriver;
use crate::automation::replay::TraitReplayer;
use crate::core::input::is_escape_key_down;
use crate::core::window::bring_to_front;
use crate::core::worker::Worker;
use crate::error::ReplayError;
use crate::settings::AppSettings;
use crate::tools::r#trait::Tool;

/// Replays the current selection into the game on a worker thread
pub struct EquipTool {
    worker: Worker,
}

impl Default for EquipTool {
    fn default() -> Self {
        Self {
            worker: Worker::new(),
        }
    }
}

impl Tool for EquipTool {
    fn stop(&mut self) {
        if self.worker.is_running() {
            log::info!("Stopping equip");
            self.worker.stop();
        }
    }

    fn is_running(&self) -> bool {
        self.worker.is_running()
    }

    fn get_status(&self) -> String {
        self.worker.get_status()
    }
}

impl EquipTool {
    pub fn start(&mut self, names: Vec<String>, settings: &AppSettings, ctx: &egui::Context) {
        if self.worker.is_running() {
            return;
        }
        if names.is_empty() {
            self.worker.set_status("Nothing selected");
            return;
        }

        let title = settings.game_window_title.clone();
        let coords = settings.coordinates.clone();
        let automation = settings.automation.clone();
        let repaint = ctx.clone();

        self.worker.set_status(&format!("Running: equipping {} traits", names.len()));
        log::info!("Equipping {} traits: {}", names.len(), names.join(", "));

        self.worker.start(
            move |worker| {
                let driver = match AutoGuiDriver::new() {
                    Ok(driver) => driver,
                    Err(e) => {
                        log::error!("{}", e);
                        worker.set_status("Failed: input unavailable");
                        return;
                    }
                };

                let stop = worker.clone();
                let cancel = move || is_escape_key_down() || !stop.is_running();
                let mut replayer = TraitReplayer::new(driver, cancel, coords, automation);

                let result = replayer.equip_traits(&names, || {
                    if bring_to_front(&title) {
                        Ok(())
                    } else {
                        Err(ReplayError::WindowNotFound(title.clone()))
                    }
                });

                match result {
                    Ok(count) => {
                        log::info!("Equipped {} traits", count);
                        worker.set_status(&format!("Equipped {} traits", count));
                    }
                    Err(ReplayError::Cancelled) => {
                        log::info!("Equip cancelled");
                        worker.set_status("Cancelled");
                    }
                    Err(e) => {
                        log::error!("Equip failed: {}", e);
                        worker.set_status(&format!("Failed: {}", e));
                    }
                }
            },
            move || repaint.request_repaint(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tool_is_idle() {
        let mut tool = EquipTool::default();
        assert!(!tool.is_running());
        assert_eq!(tool.get_status(), "Ready");

        // Stopping an idle tool changes nothing
        tool.stop();
        assert!(!tool.is_running());
        assert_eq!(tool.get_status(), "Ready");
    }
}
