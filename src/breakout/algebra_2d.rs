use egui::Pos2;

/// Axis-aligned Bounding Box
///
/// TOP / LEFT corner is `min`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AaBB {
    pub min: Pos2,
    pub max: Pos2,
}

impl AaBB {
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        AaBB {
            min: Pos2::new(x, y),
            max: Pos2::new(x + width, y + height),
        }
    }

    /// True when both boxes share an area of positive size.
    /// Boxes that only touch at an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &AaBB) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}
