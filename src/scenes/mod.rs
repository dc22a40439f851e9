mod gallery;
mod tech_sphere;

pub use gallery::{artwork_placements, build_gallery, ArtworkPlacement};
pub use tech_sphere::TechSphereScene;

use std::f32::consts::PI;

use glam::Vec3;

use crate::camera::Camera;

/// Which decorative scene is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Gallery,
    TechSphere,
}

impl SceneKind {
    pub fn label(&self) -> &'static str {
        match self {
            SceneKind::Gallery => "Virtual Gallery",
            SceneKind::TechSphere => "Tech Sphere",
        }
    }
}

/// Camera spawn for a scene. The gallery starts just inside the room
/// looking down -z; the sphere viewpoint sits outside the shell.
pub fn spawn_camera(kind: SceneKind, eye_height: f32) -> Camera {
    match kind {
        SceneKind::Gallery => Camera::new(
            Vec3::new(0.0, eye_height, 3.0),
            PI,
            0.0,
            75f32.to_radians(),
        ),
        SceneKind::TechSphere => {
            Camera::new(Vec3::new(0.0, 0.0, 9.0), PI, 0.0, 50f32.to_radians())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_spawn_faces_into_the_room() {
        let camera = spawn_camera(SceneKind::Gallery, 1.7);
        assert_eq!(camera.position.y, 1.7);
        assert!(camera.forward().z < -0.99);
    }

    #[test]
    fn sphere_spawn_sees_the_origin() {
        let camera = spawn_camera(SceneKind::TechSphere, 1.7);
        let to_origin = (-camera.position).normalize();
        assert!(camera.forward().dot(to_origin) > 0.99);
    }
}
