use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;

use super::{MovementState, WalkBounds};

/// Longest tick the integrator accepts, in seconds. Damping is applied as
/// an explicit Euler step; a stalled frame approaching `1 / damping`
/// would cancel or flip the decay term, so ticks are capped at half that
/// for the default tuning.
pub const MAX_TICK: f32 = 0.05;

/// Movement feel tuning. The speed/damping pair is carried over from the
/// original gallery unchanged; there is no deeper rationale behind the
/// numbers than "feels right".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavTuning {
    /// Velocity accumulation rate while a direction is held.
    pub speed: f32,
    /// Exponential decay coefficient applied every tick.
    pub damping: f32,
    /// Fixed camera height above the floor.
    pub eye_height: f32,
}

impl Default for NavTuning {
    fn default() -> Self {
        Self {
            speed: 5.0,
            damping: 10.0,
            eye_height: 1.7,
        }
    }
}

/// Per-tick first-person movement: damped velocity driven by the input
/// flags, displacement relative to the camera's heading, and per-axis
/// clamping against the gallery interior.
#[derive(Debug, Clone)]
pub struct PlayerController {
    velocity: Vec3,
    tuning: NavTuning,
    bounds: WalkBounds,
}

impl PlayerController {
    pub fn new(tuning: NavTuning, bounds: WalkBounds) -> Self {
        Self {
            velocity: Vec3::ZERO,
            tuning,
            bounds,
        }
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn bounds(&self) -> WalkBounds {
        self.bounds
    }

    /// Zero the velocity, e.g. when the gallery scene is re-entered.
    pub fn reset(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    /// One simulation tick.
    ///
    /// Velocity decays toward zero every tick and never exactly reaches
    /// it; the residual drift is accepted. Each horizontal axis is
    /// clamped on its own, so motion into a wall slides along it instead
    /// of stopping outright. `position.y` is pinned to eye height no
    /// matter what happened before.
    pub fn step(&mut self, dt: f32, input: &MovementState, camera: &mut Camera) {
        let dt = dt.min(MAX_TICK);
        let NavTuning {
            speed,
            damping,
            eye_height,
        } = self.tuning;

        self.velocity.x -= self.velocity.x * damping * dt;
        self.velocity.z -= self.velocity.z * damping * dt;

        let wish = input.wish_dir();
        if input.forward() || input.backward() {
            self.velocity.z -= wish.y * speed * dt;
        }
        if input.left() || input.right() {
            self.velocity.x -= wish.x * speed * dt;
        }

        // Movement is relative to where the camera currently looks,
        // projected onto the ground plane, not to world axes.
        let heading = camera.ground_forward();
        let lateral = Vec3::Y.cross(heading).normalize_or_zero();
        let step = heading * -self.velocity.z + lateral * -self.velocity.x;

        let candidate_x = camera.position.x + step.x;
        let candidate_z = camera.position.z + step.z;
        if self.bounds.x.admits(candidate_x) {
            camera.position.x = candidate_x;
        }
        if self.bounds.z.admits(candidate_z) {
            camera.position.z = candidate_z;
        }
        camera.position.y = eye_height;
    }
}
