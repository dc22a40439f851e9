use serde::{Deserialize, Serialize};

/// Open interval on one horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Strict containment: the walls themselves are not walkable.
    pub fn admits(&self, v: f32) -> bool {
        self.min < v && v < self.max
    }
}

/// Walkable interior of the gallery, one open span per horizontal axis.
/// The y axis is not bounded here; the controller pins it to eye height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkBounds {
    pub x: Span,
    pub z: Span,
}

impl WalkBounds {
    pub fn new(x: Span, z: Span) -> Self {
        Self { x, z }
    }

    /// Interior of a room with the given half extents, inset by `margin`
    /// so the camera never sits flush against a wall.
    pub fn room(half_width: f32, half_depth: f32, margin: f32) -> Self {
        Self {
            x: Span::new(-half_width + margin, half_width - margin),
            z: Span::new(-half_depth + margin, half_depth - margin),
        }
    }
}
