// Trait tile images, loaded lazily and cached as egui textures
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use eframe::egui;
use image::imageops::FilterType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Catalog tile, scaled to the configured width
    Full,
    /// Thumbnail in the selected row
    Small,
}

pub struct TileImages {
    dir: PathBuf,
    tile_width: f32,
    // None caches a missing or unreadable image
    cache: HashMap<(TileKind, String), Option<egui::TextureHandle>>,
}

impl TileImages {
    pub fn new(dir: impl Into<PathBuf>, tile_width: f32) -> Self {
        Self {
            dir: dir.into(),
            tile_width,
            cache: HashMap::new(),
        }
    }

    /// Texture id and display size, or None when the tile has no image
    pub fn tile(
        &mut self,
        ctx: &egui::Context,
        name: &str,
        kind: TileKind,
    ) -> Option<(egui::TextureId, egui::Vec2)> {
        let key = (kind, name.to_string());
        if !self.cache.contains_key(&key) {
            let width = match kind {
                TileKind::Full => Some(self.tile_width.round() as u32),
                TileKind::Small => None,
            };
            let texture = load_color_image(&image_path(&self.dir, name, kind), width).map(|img| {
                ctx.load_texture(
                    format!("trait_{:?}_{}", kind, name),
                    img,
                    egui::TextureOptions::LINEAR,
                )
            });
            self.cache.insert(key.clone(), texture);
        }

        self.cache
            .get(&key)
            .and_then(|t| t.as_ref())
            .map(|t| (t.id(), t.size_vec2()))
    }

    /// Size of the text tile drawn when the image is missing
    pub fn fallback_size(&self, kind: TileKind) -> egui::Vec2 {
        match kind {
            TileKind::Full => egui::vec2(self.tile_width, (self.tile_width * 0.3).max(48.0)),
            TileKind::Small => egui::vec2(120.0, 40.0),
        }
    }
}

pub fn image_path(dir: &Path, name: &str, kind: TileKind) -> PathBuf {
    match kind {
        TileKind::Full => dir.join(format!("{}.png", name)),
        TileKind::Small => dir.join("small").join(format!("{}.png", name)),
    }
}

/// Load an image, optionally scaled to `width` keeping the aspect ratio
pub fn load_color_image(path: &Path, width: Option<u32>) -> Option<egui::ColorImage> {
    if !path.exists() {
        log::debug!("No tile image at {}", path.display());
        return None;
    }

    let img = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            log::warn!("Failed to load tile image {}: {}", path.display(), e);
            return None;
        }
    };

    let img = match width {
        Some(w) if w > 0 && img.width() > 0 && img.width() != w => {
            let h = ((img.height() as f64 * w as f64 / img.width() as f64).round() as u32).max(1);
            img.resize_exact(w, h, FilterType::Triangle)
        }
        _ => img,
    };

    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
