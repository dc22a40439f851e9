//! Static geometry for the virtual gallery: a rectangular room with
//! artworks alternating along the left and right walls.

use glam::Vec3;

use crate::config::GalleryConfig;
use crate::content::Achievement;
use crate::types::Vertex;

const FLOOR_COLOR: [f32; 3] = [0.10, 0.10, 0.10];
const CEILING_COLOR: [f32; 3] = [0.16, 0.16, 0.16];
const WALL_COLOR: [f32; 3] = [0.92, 0.92, 0.90];
const FRAME_COLOR: [f32; 3] = [0.08, 0.08, 0.08];

/// Distance artworks sit off the wall plane, preventing z-fighting.
const WALL_GAP: f32 = 0.1;
const FRAME_HALF_W: f32 = 1.1;
const FRAME_HALF_H: f32 = 0.75;
const CANVAS_HALF_W: f32 = 1.0;
const CANVAS_HALF_H: f32 = 0.65;
const ARTWORK_HEIGHT: f32 = 2.5;

/// Where one artwork hangs: wall-plane position plus which wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtworkPlacement {
    pub position: Vec3,
    /// -1.0 for the left wall (faces +x), 1.0 for the right wall.
    pub side: f32,
}

/// Alternates artworks between the two long walls, spread along z the
/// way the original gallery hangs them.
pub fn artwork_placements(cfg: &GalleryConfig, count: usize) -> Vec<ArtworkPlacement> {
    let x = cfg.half_width - WALL_GAP;
    (0..count)
        .map(|i| {
            let z = -3.0 + (i as f32 / count.max(1) as f32) * 6.0;
            let side = if i % 2 == 0 { -1.0 } else { 1.0 };
            ArtworkPlacement {
                position: Vec3::new(side * x, ARTWORK_HEIGHT, z),
                side,
            }
        })
        .collect()
}

/// Full gallery mesh: room shell plus one frame + canvas per artwork.
pub fn build_gallery(cfg: &GalleryConfig, achievements: &[Achievement]) -> Vec<Vertex> {
    let mut verts = Vec::new();
    let w = cfg.half_width;
    let d = cfg.half_depth;
    let h = cfg.wall_height;

    // Floor and ceiling.
    quad(
        &mut verts,
        [
            Vec3::new(-w, 0.0, -d),
            Vec3::new(w, 0.0, -d),
            Vec3::new(w, 0.0, d),
            Vec3::new(-w, 0.0, d),
        ],
        FLOOR_COLOR,
    );
    quad(
        &mut verts,
        [
            Vec3::new(-w, h, -d),
            Vec3::new(w, h, -d),
            Vec3::new(w, h, d),
            Vec3::new(-w, h, d),
        ],
        CEILING_COLOR,
    );

    // Back, front, left, right walls.
    quad(
        &mut verts,
        [
            Vec3::new(-w, 0.0, -d),
            Vec3::new(w, 0.0, -d),
            Vec3::new(w, h, -d),
            Vec3::new(-w, h, -d),
        ],
        WALL_COLOR,
    );
    quad(
        &mut verts,
        [
            Vec3::new(-w, 0.0, d),
            Vec3::new(w, 0.0, d),
            Vec3::new(w, h, d),
            Vec3::new(-w, h, d),
        ],
        WALL_COLOR,
    );
    quad(
        &mut verts,
        [
            Vec3::new(-w, 0.0, -d),
            Vec3::new(-w, 0.0, d),
            Vec3::new(-w, h, d),
            Vec3::new(-w, h, -d),
        ],
        WALL_COLOR,
    );
    quad(
        &mut verts,
        [
            Vec3::new(w, 0.0, -d),
            Vec3::new(w, 0.0, d),
            Vec3::new(w, h, d),
            Vec3::new(w, h, -d),
        ],
        WALL_COLOR,
    );

    for (placement, achievement) in artwork_placements(cfg, achievements.len())
        .into_iter()
        .zip(achievements)
    {
        // Frame sits a touch closer to the wall than the canvas.
        let frame_center = placement.position + Vec3::new(placement.side * 0.02, 0.0, 0.0);
        wall_quad(
            &mut verts,
            frame_center,
            FRAME_HALF_W,
            FRAME_HALF_H,
            FRAME_COLOR,
        );
        wall_quad(
            &mut verts,
            placement.position,
            CANVAS_HALF_W,
            CANVAS_HALF_H,
            category_color(achievement.category),
        );
    }

    verts
}

/// A quad standing on a side wall: extends along z (width) and y
/// (height) around `center`.
fn wall_quad(verts: &mut Vec<Vertex>, center: Vec3, half_w: f32, half_h: f32, color: [f32; 3]) {
    quad(
        verts,
        [
            center + Vec3::new(0.0, -half_h, -half_w),
            center + Vec3::new(0.0, -half_h, half_w),
            center + Vec3::new(0.0, half_h, half_w),
            center + Vec3::new(0.0, half_h, -half_w),
        ],
        color,
    );
}

/// Two triangles from four corners given in perimeter order.
fn quad(verts: &mut Vec<Vertex>, corners: [Vec3; 4], color: [f32; 3]) {
    let [a, b, c, d] = corners.map(|p| Vertex::new(p.to_array(), color));
    verts.extend_from_slice(&[a, b, c, a, c, d]);
}

/// Deterministic stand-in color for an artwork's canvas, keyed on its
/// category. Untextured quads need to be tellable apart somehow.
fn category_color(category: &str) -> [f32; 3] {
    const PALETTE: [[f32; 3]; 6] = [
        [0.72, 0.45, 0.33],
        [0.36, 0.54, 0.66],
        [0.52, 0.60, 0.38],
        [0.62, 0.42, 0.58],
        [0.76, 0.64, 0.36],
        [0.42, 0.58, 0.56],
    ];
    let hash = category
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    PALETTE[hash as usize % PALETTE.len()]
}
