use serde::{Deserialize, Serialize};
use std::fs;

/// A coordinate or rectangle designating a specific game UI element,
/// in absolute screen pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiElement {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
}

impl UiElement {
    pub const fn point(x: i32, y: i32) -> Self {
        Self { x, y, width: None, height: None }
    }

    pub const fn rect(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width: Some(width), height: Some(height) }
    }

    /// (x, y, width, height) when both dimensions are known
    pub fn as_rect(&self) -> Option<(i32, i32, i32, i32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some((self.x, self.y, w, h)),
            _ => None,
        }
    }
}

/// Measured for a screen of 2560x1080px
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiCoordinates {
    pub upgrade_points: UiElement,
    pub traits_search_input: UiElement,
    pub traits_first_match: UiElement,
    pub failure_dialog_ok: UiElement,
}

impl Default for UiCoordinates {
    fn default() -> Self {
        Self {
            upgrade_points: UiElement::rect(422, 898, 60, 50),
            traits_search_input: UiElement::point(980, 225),
            traits_first_match: UiElement::point(775, 395),
            failure_dialog_ok: UiElement::point(1235, 735),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationSettings {
    /// Random pointer offset (pixels) applied per axis on every move
    pub jitter_px: i32,
    pub move_duration_ms: u64,
    /// Ease-out pointer motion instead of jumping
    pub eased_motion: bool,
    /// Wait before dismissing the "transaction failed" dialog
    pub dialog_wait_ms: u64,
    /// Wait after bringing the game to front
    pub focus_settle_ms: u64,
    /// Pause between discrete input steps
    pub step_delay_ms: u64,
}

impl Default for AutomationSettings {
    fn default() -> Self {
        Self {
            jitter_px: 3,
            move_duration_ms: 150,
            eased_motion: true,
            dialog_wait_ms: 500,
            focus_settle_ms: 300,
            step_delay_ms: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSettings {
    pub binary: String,
    pub language: String,
    pub timeout_ms: u64,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            binary: "Capture2Text/Capture2Text_CLI.exe".to_string(),
            language: "English".to_string(),
            timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub game_window_title: String,
    pub preset_file: String,
    pub image_dir: String,
    pub tile_width: f32,
    /// Hide selected catalog tiles instead of disabling them
    pub hide_selected_tiles: bool,
    pub log_level: String,
    pub coordinates: UiCoordinates,
    pub automation: AutomationSettings,
    pub ocr: OcrSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            game_window_title: "Hunt: Showdown".to_string(),
            preset_file: "hunt_showdown_trait_presets.json".to_string(),
            image_dir: "img".to_string(),
            tile_width: 342.0,
            hide_selected_tiles: false,
            log_level: "info".to_string(),
            coordinates: UiCoordinates::default(),
            automation: AutomationSettings::default(),
            ocr: OcrSettings::default(),
        }
    }
}

impl AppSettings {
    const SETTINGS_FILE: &'static str = "hunt_trait_presets_settings.json";

    /// Load settings from file, or defaults if missing/unreadable
    pub fn load() -> Self {
        Self::load_from(Self::SETTINGS_FILE)
    }

    pub fn load_from(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<AppSettings>(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Ignoring malformed settings file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn file_exists() -> bool {
        std::path::Path::new(Self::SETTINGS_FILE).exists()
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), String> {
        self.save_to(Self::SETTINGS_FILE)
    }

    pub fn save_to(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))?;

        Ok(())
    }

    /// Auto-save (logs errors)
    pub fn auto_save(&self) {
        if let Err(e) = self.save() {
            log::warn!("Failed to save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_measured_layout() {
        let coords = UiCoordinates::default();
        assert_eq!(coords.upgrade_points.as_rect(), Some((422, 898, 60, 50)));
        assert_eq!(coords.traits_search_input, UiElement::point(980, 225));
        assert_eq!(coords.traits_first_match.as_rect(), None);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"game_window_title": "Hunt", "automation": {"jitter_px": 0}}"#,
        )
        .unwrap();

        let settings = AppSettings::load_from(path.to_str().unwrap());
        assert_eq!(settings.game_window_title, "Hunt");
        assert_eq!(settings.automation.jitter_px, 0);
        assert_eq!(settings.automation.dialog_wait_ms, 500);
        assert_eq!(settings.ocr.language, "English");
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let settings = AppSettings::load_from(path.to_str().unwrap());
        assert_eq!(settings.game_window_title, "Hunt: Showdown");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let path = path.to_str().unwrap();

        let mut settings = AppSettings::default();
        settings.hide_selected_tiles = true;
        settings.coordinates.failure_dialog_ok = UiElement::point(1, 2);
        settings.save_to(path).unwrap();

        let reloaded = AppSettings::load_from(path);
        assert!(reloaded.hide_selected_tiles);
        assert_eq!(reloaded.coordinates.failure_dialog_ok, UiElement::point(1, 2));
    }
}
