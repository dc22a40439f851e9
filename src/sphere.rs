use std::f32::consts::PI;

use glam::Vec3;

/// Point `index` of `total` on a sphere of the given radius, spread
/// approximately evenly along a spiral from pole to pole.
///
/// Pure and deterministic: identical `(radius, index, total)` always
/// yields the same point, which is what keeps the tech-sphere layout
/// stable across scene rebuilds. `index` ranges over `[0, total)`.
pub fn sphere_point(radius: f32, index: usize, total: usize) -> Vec3 {
    debug_assert!(total > 0 && index < total);
    let phi = (-1.0 + 2.0 * index as f32 / total as f32).acos();
    let theta = (total as f32 * PI).sqrt() * phi;
    Vec3::new(
        radius * theta.cos() * phi.sin(),
        radius * theta.sin() * phi.sin(),
        radius * phi.cos(),
    )
}

/// All `total` points at once, in index order.
pub fn sphere_points(radius: f32, total: usize) -> Vec<Vec3> {
    (0..total).map(|i| sphere_point(radius, i, total)).collect()
}
