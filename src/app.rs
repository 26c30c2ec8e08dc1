use std::sync::Arc;
use std::time::{Duration, Instant};
use eframe::egui;
use crate::catalog::Catalog;
use crate::core::input::is_escape_key_down;
use crate::core::log_buffer::LogBuffer;
use crate::core::window::GameWindow;
use crate::preset::{load_from, resolve_names, save_to, PresetStore};
use crate::selection::SelectionState;
use crate::settings::AppSettings;
use crate::tools::equip::EquipTool;
use crate::tools::r#trait::Tool;
use crate::tools::upgrade_points::UpgradePointsTool;
use crate::ui::app_header::{render_header, HeaderAction};
use crate::ui::help::render_help;
use crate::ui::log_panel::render_log_panel;
use crate::ui::picker::{equip_enabled, points_enabled, render_picker, PickerUiAction, PickerView};
use crate::ui::status::render_status;
use crate::ui::tiles::TileImages;

const WINDOW_CHECK_INTERVAL: Duration = Duration::from_secs(2);

pub struct TraitPresetsApp {
    catalog: Arc<Catalog>,
    selection: SelectionState,
    settings: AppSettings,
    images: TileImages,

    // Background tools
    equip: EquipTool,
    points: UpgradePointsTool,

    logs: LogBuffer,
    show_log: bool,
    show_help: bool,

    game_found: bool,
    last_window_check: Option<Instant>,
}

impl TraitPresetsApp {
    pub fn new(catalog: Arc<Catalog>, settings: AppSettings, logs: LogBuffer) -> Self {
        let selection =
            SelectionState::restore(&catalog, PresetStore::new(&settings.preset_file));
        let images = TileImages::new(&settings.image_dir, settings.tile_width);

        Self {
            catalog,
            selection,
            settings,
            images,
            equip: EquipTool::default(),
            points: UpgradePointsTool::default(),
            logs,
            show_log: false,
            show_help: false,
            game_found: false,
            last_window_check: None,
        }
    }

    fn any_running(&self) -> bool {
        self.equip.is_running() || self.points.is_running()
    }

    fn stop_all(&mut self) {
        self.equip.stop();
        self.points.stop();
    }

    fn refresh_game_window(&mut self) {
        let due = self
            .last_window_check
            .map_or(true, |t| t.elapsed() >= WINDOW_CHECK_INTERVAL);
        if due {
            self.game_found = GameWindow::find(&self.settings.game_window_title).is_some();
            self.last_window_check = Some(Instant::now());
        }
    }

    fn import_preset(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Trait preset", &["json"])
            .set_title("Import trait preset")
            .set_directory(std::env::current_dir().unwrap_or_default())
            .pick_file()
        else {
            return;
        };

        match load_from(&path) {
            Ok(names) => {
                let (traits, skipped) = resolve_names(&self.catalog, &names);
                for name in &skipped {
                    log::warn!("Skipping unknown trait '{}' in {}", name, path.display());
                }
                self.selection.replace_all(&traits);
                log::info!("Imported {} traits from {}", traits.len(), path.display());
            }
            Err(e) => log::error!("Import failed: {}", e),
        }
    }

    fn export_preset(&self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Trait preset", &["json"])
            .set_title("Export trait preset")
            .set_file_name("trait_preset.json")
            .save_file()
        else {
            return;
        };

        match save_to(&path, &self.selection.names()) {
            Ok(()) => log::info!(
                "Exported {} traits to {}",
                self.selection.len(),
                path.display()
            ),
            Err(e) => log::error!("Export failed: {}", e),
        }
    }

    fn handle_picker_action(&mut self, action: PickerUiAction, ctx: &egui::Context) {
        match action {
            PickerUiAction::Select(name) => {
                if let Some(t) = self.catalog.get(&name) {
                    self.selection.add(t);
                }
            }
            PickerUiAction::Deselect(name) => {
                self.selection.remove(&name);
            }
            PickerUiAction::Equip => {
                if equip_enabled(&self.selection, self.equip.is_running(), self.points.is_running()) {
                    self.equip.start(self.selection.names(), &self.settings, ctx);
                }
            }
            PickerUiAction::StopEquip => self.equip.stop(),
            PickerUiAction::ReadPoints => {
                if points_enabled(self.equip.is_running(), self.points.is_running()) {
                    self.points.read(&self.settings, ctx);
                }
            }
            PickerUiAction::PreviewRegion => {
                if points_enabled(self.equip.is_running(), self.points.is_running()) {
                    self.points.preview(&self.settings, ctx);
                }
            }
            PickerUiAction::None => {}
        }
    }
}

impl eframe::App for TraitPresetsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Emergency stop; the game usually has focus, so poll the global key state too
        if self.any_running() {
            if is_escape_key_down() || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                log::info!("Esc pressed, stopping");
                self.stop_all();
            }
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        self.refresh_game_window();

        let header_action = egui::TopBottomPanel::top("header")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let action = render_header(ui, &self.settings.game_window_title, self.game_found);
                ui.add_space(4.0);
                action
            })
            .inner;

        match header_action {
            HeaderAction::ImportPreset => self.import_preset(),
            HeaderAction::ExportPreset => self.export_preset(),
            HeaderAction::ClearSelection => self.selection.clear(),
            HeaderAction::ToggleLog => self.show_log = !self.show_log,
            HeaderAction::Help => self.show_help = !self.show_help,
            HeaderAction::None => {}
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            render_status(ui, "Equip", &self.equip.get_status());
            render_status(ui, "Points", &self.points.get_status());
        });

        if self.show_log {
            render_log_panel(ctx, &self.logs);
        }

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let view = PickerView {
                    catalog: &self.catalog,
                    selection: &self.selection,
                    budget: self.points.points(),
                    equip_running: self.equip.is_running(),
                    points_running: self.points.is_running(),
                    hide_selected: self.settings.hide_selected_tiles,
                };
                render_picker(ui, &mut self.images, &view)
            })
            .inner;
        self.handle_picker_action(action, ctx);

        let mut show_help = self.show_help;
        egui::Window::new("Help")
            .open(&mut show_help)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| render_help(ui, &self.settings));
        self.show_help = show_help;
    }
}
