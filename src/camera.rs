use glam::{Mat4, Vec3};

use crate::types::CameraUniform;

/// Radians per pixel of pointer-lock mouse movement.
pub const LOOK_SENSITIVITY: f32 = 0.002;

/// Pitch is kept short of straight up/down so the ground-plane heading
/// used by the navigation controller stays well defined.
const PITCH_LIMIT: f32 = 1.5;

/// First-person camera: position plus yaw/pitch. Look direction is owned
/// here (fed by pointer-lock mouse deltas); translation is owned by the
/// navigation controller, which reads the heading and writes `position`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov_y: f32,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32, fov_y: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
            fov_y,
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    /// Facing vector flattened onto the ground plane and renormalized.
    /// Zero only at the pitch limits, which the clamp keeps unreachable.
    pub fn ground_forward(&self) -> Vec3 {
        let f = self.forward();
        Vec3::new(f.x, 0.0, f.z).normalize_or_zero()
    }

    /// Apply pointer-lock mouse deltas (pixels) to yaw and pitch.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * LOOK_SENSITIVITY;
        self.pitch = (self.pitch - dy * LOOK_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_to_rh(self.position, self.forward(), Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov_y, aspect, 0.05, 200.0);
        proj * view
    }

    pub fn to_uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform::from_matrix(self.view_proj(aspect))
    }
}
