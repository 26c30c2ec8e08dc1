use std::sync::{Arc, Mutex};
use eframe::egui;
use crate::core::ocr::read_upgrade_points;
use crate::core::screen_capture::{open_in_viewer, save_region_preview};
use crate::core::worker::Worker;
use crate::settings::AppSettings;
use crate::tools::r#trait::Tool;

/// Reads the in-game upgrade points budget via OCR
pub struct UpgradePointsTool {
    worker: Worker,
    points: Arc<Mutex<Option<u32>>>,
}

impl Default for UpgradePointsTool {
    fn default() -> Self {
        Self {
            worker: Worker::new(),
            points: Arc::new(Mutex::new(None)),
        }
    }
}

impl Tool for UpgradePointsTool {
    fn stop(&mut self) {
        if self.worker.is_running() {
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

impl UpgradePointsTool {
    /// Last successfully read budget
    pub fn points(&self) -> Option<u32> {
        *self.points.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn read(&mut self, settings: &AppSettings, ctx: &egui::Context) {
        if self.worker.is_running() {
            return;
        }

        let title = settings.game_window_title.clone();
        let element = settings.coordinates.upgrade_points;
        let ocr = settings.ocr.clone();
        let points = self.points.clone();
        let repaint = ctx.clone();

        self.worker.set_status("Running: reading upgrade points");
        self.worker.start(
            move |worker| match read_upgrade_points(&title, &element, &ocr) {
                Some(value) => {
                    log::info!("Upgrade points: {}", value);
                    *points.lock().unwrap_or_else(|e| e.into_inner()) = Some(value);
                    worker.set_status(&format!("Upgrade points: {}", value));
                }
                None => worker.set_status("Failed to read upgrade points"),
            },
            move || repaint.request_repaint(),
        );
    }

    /// Screenshot with the OCR region outlined, opened in the system viewer
    pub fn preview(&mut self, settings: &AppSettings, ctx: &egui::Context) {
        if self.worker.is_running() {
            return;
        }

        let title = settings.game_window_title.clone();
        let element = settings.coordinates.upgrade_points;
        let repaint = ctx.clone();

        self.worker.set_status("Running: capturing OCR region");
        self.worker.start(
            move |worker| match save_region_preview(&title, &element) {
                Ok(path) => {
                    open_in_viewer(&path);
                    worker.set_status("Preview saved");
                }
                Err(e) => {
                    log::error!("Region preview failed: {}", e);
                    worker.set_status(&format!("Failed: {}", e));
                }
            },
            move || repaint.request_repaint(),
        );
    }
}
