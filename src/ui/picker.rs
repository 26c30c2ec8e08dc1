use eframe::egui;
use crate::catalog::{Catalog, Trait};
use crate::selection::SelectionState;
use crate::ui::flow_layout::flow_layout;
use crate::ui::tiles::{TileImages, TileKind};

#[derive(Debug, PartialEq, Eq)]
pub enum PickerUiAction {
    Select(String),
    Deselect(String),
    Equip,
    StopEquip,
    ReadPoints,
    PreviewRegion,
    None,
}

/// Everything the picker reads besides the tile images
pub struct PickerView<'a> {
    pub catalog: &'a Catalog,
    pub selection: &'a SelectionState,
    pub budget: Option<u32>,
    pub equip_running: bool,
    pub points_running: bool,
    pub hide_selected: bool,
}

/// Budget minus selection cost; negative when over budget
pub fn remaining_points(budget: u32, cost: u32) -> i64 {
    budget as i64 - cost as i64
}

/// Equip needs a selection and no other tool moving the game window
pub fn equip_enabled(selection: &SelectionState, equip_running: bool, points_running: bool) -> bool {
    !selection.is_empty() && !equip_running && !points_running
}

/// OCR and region preview focus the game, so never while equipping
pub fn points_enabled(equip_running: bool, points_running: bool) -> bool {
    !equip_running && !points_running
}

/// Render the selected row, the action buttons and the catalog
pub fn render_picker(
    ui: &mut egui::Ui,
    images: &mut TileImages,
    view: &PickerView,
) -> PickerUiAction {
    let mut action = PickerUiAction::None;

    // --- Selected traits ---
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(view.selection.label_text()).strong());
        if let Some(budget) = view.budget {
            let remaining = remaining_points(budget, view.selection.total_cost());
            let color = if remaining < 0 {
                egui::Color32::from_rgb(255, 100, 100)
            } else {
                egui::Color32::from_rgb(168, 226, 187)
            };
            ui.label(
                egui::RichText::new(format!("Budget: {}, remaining: {}", budget, remaining))
                    .color(color),
            );
        }
    });

    let selected: Vec<&Trait> = view.selection.traits().iter().collect();
    if selected.is_empty() {
        ui.label(
            egui::RichText::new("Click a trait below to add it.")
                .italics()
                .color(egui::Color32::DARK_GRAY),
        );
    } else if let Some(name) =
        render_tiles(ui, images, &selected, TileKind::Small, |_| true, "Deselect")
    {
        action = PickerUiAction::Deselect(name);
    }

    ui.add_space(6.0);

    // --- Actions ---
    ui.horizontal(|ui| {
        let button_size = egui::vec2(110.0, 28.0);
        if view.equip_running {
            if ui
                .add_sized(button_size, egui::Button::new("Stop"))
                .on_hover_text("Stop equipping (or hold Esc)")
                .clicked()
            {
                action = PickerUiAction::StopEquip;
            }
        } else if ui
            .add_enabled_ui(
                equip_enabled(view.selection, view.equip_running, view.points_running),
                |ui| {
                    ui.add_sized(
                        button_size,
                        egui::Button::new(egui::RichText::new("Equip").strong()),
                    )
                },
            )
            .inner
            .on_hover_text("Open the traits screen in game first. Hold Esc to stop.")
            .on_disabled_hover_text("Select at least one trait and wait for the points reading")
            .clicked()
        {
            action = PickerUiAction::Equip;
        }

        let points_ok = points_enabled(view.equip_running, view.points_running);
        if ui
            .add_enabled(points_ok, egui::Button::new("Read points"))
            .on_hover_text("Read available upgrade points from the game via OCR")
            .clicked()
        {
            action = PickerUiAction::ReadPoints;
        }
        if ui
            .add_enabled(points_ok, egui::Button::new("Preview region"))
            .on_hover_text("Screenshot with the OCR region outlined")
            .clicked()
        {
            action = PickerUiAction::PreviewRegion;
        }
    });

    ui.separator();

    // --- Catalog ---
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let tiles: Vec<&Trait> = view
                .catalog
                .iter()
                .filter(|t| !view.hide_selected || view.selection.is_available(t))
                .collect();
            let selection = view.selection;
            if let Some(name) = render_tiles(
                ui,
                images,
                &tiles,
                TileKind::Full,
                |t| selection.is_available(t),
                "Select",
            ) {
                action = PickerUiAction::Select(name);
            }
        });

    action
}

/// Lay out tiles with wrapping; returns the name of the clicked tile
fn render_tiles(
    ui: &mut egui::Ui,
    images: &mut TileImages,
    traits: &[&Trait],
    kind: TileKind,
    enabled: impl Fn(&Trait) -> bool,
    hover_verb: &str,
) -> Option<String> {
    let ctx = ui.ctx().clone();
    let tiles: Vec<_> = traits
        .iter()
        .map(|t| images.tile(&ctx, &t.name, kind))
        .collect();
    let sizes: Vec<egui::Vec2> = tiles
        .iter()
        .map(|tile| match tile {
            Some((_, size)) => *size,
            None => images.fallback_size(kind),
        })
        .collect();

    let width = ui.available_width();
    let layout = flow_layout(width, &sizes, ui.spacing().item_spacing);
    let (area, _) = ui.allocate_exact_size(egui::vec2(width, layout.height), egui::Sense::hover());

    let mut clicked = None;
    for (i, t) in traits.iter().enumerate() {
        let rect = egui::Rect::from_min_size(area.min + layout.positions[i].to_vec2(), sizes[i]);
        let response = ui
            .add_enabled_ui(enabled(t), |ui| match tiles[i] {
                Some((texture, size)) => ui.put(
                    rect,
                    egui::ImageButton::new(egui::load::SizedTexture::new(texture, size)),
                ),
                None => ui.put(rect, egui::Button::new(fallback_label(t)).min_size(sizes[i])),
            })
            .inner;

        let response = response
            .on_hover_text(format!("{}: {}", hover_verb, t.name))
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            clicked = Some(t.name.clone());
        }
    }
    clicked
}

fn fallback_label(t: &Trait) -> egui::RichText {
    egui::RichText::new(format!("{}\n{} points, {}", t.name, t.cost, t.category))
}
