use eframe::egui::{pos2, Pos2, Vec2};

/// Tile positions relative to the container's top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLayout {
    pub positions: Vec<Pos2>,
    pub height: f32,
}

/// Left-to-right placement that wraps when the next tile would overflow
/// `container_width`. A tile that is first on its row never wraps.
pub fn flow_layout(container_width: f32, sizes: &[Vec2], spacing: Vec2) -> FlowLayout {
    let mut positions = Vec::with_capacity(sizes.len());
    let mut x = 0.0;
    let mut y = 0.0;
    let mut row_height: f32 = 0.0;
    let mut row_empty = true;

    for size in sizes {
        if !row_empty && x + size.x > container_width {
            y += row_height + spacing.y;
            x = 0.0;
            row_height = 0.0;
        }
        positions.push(pos2(x, y));
        x += size.x + spacing.x;
        row_height = row_height.max(size.y);
        row_empty = false;
    }

    let height = if sizes.is_empty() { 0.0 } else { y + row_height };
    FlowLayout { positions, height }
}
