//! The rotating tech sphere: a wireframe-style shell, one marker per
//! technology spread evenly over the surface, and a slow particle cloud.
//! Everything is generated deterministically so a rebuilt scene lands in
//! exactly the same pose.

use std::f32::consts::{PI, TAU};

use glam::{Mat3, Vec3};

use crate::content::TechEntry;
use crate::sphere::sphere_point;
use crate::types::Vertex;

const SHELL_RADIUS: f32 = 2.0;
const LOGO_RADIUS: f32 = 2.5;
const SHELL_COLOR: [f32; 3] = [0.29, 0.34, 0.41];
const GLOW_COLOR: [f32; 3] = [0.40, 0.43, 0.92];

const PARTICLE_COUNT: usize = 300;
const PARTICLE_EXTENT: f32 = 25.0;
const PARTICLE_HALF: f32 = 0.04;

/// Spin rates in radians per second; the particle cloud drifts at half
/// the shell's pace, as in the original scene.
const SHELL_SPIN: f32 = 0.06;
const PARTICLE_SPIN: f32 = 0.03;

const RING_SEGMENTS: usize = 24;
const RING_THICKNESS: f32 = 0.012;
const LATITUDE_RINGS: usize = 5;
const MERIDIANS: usize = 8;

pub struct TechSphereScene {
    /// Shell plus logo markers, in model space; spins as one group.
    rotating: Vec<Vertex>,
    particles: Vec<Vertex>,
    shell_angle: f32,
    particle_angle: f32,
}

impl TechSphereScene {
    pub fn new(entries: &[TechEntry]) -> Self {
        let mut rotating = Vec::new();
        build_shell(&mut rotating);
        for (i, entry) in entries.iter().enumerate() {
            let center = sphere_point(LOGO_RADIUS, i, entries.len());
            marker(
                &mut rotating,
                center,
                0.28 * entry.scale,
                name_color(entry.name),
            );
        }

        let mut particles = Vec::new();
        let mut state = 0x5DEECE66Du64;
        for _ in 0..PARTICLE_COUNT {
            let p = Vec3::new(
                (unit(&mut state) - 0.5) * PARTICLE_EXTENT,
                (unit(&mut state) - 0.5) * PARTICLE_EXTENT,
                (unit(&mut state) - 0.5) * PARTICLE_EXTENT,
            );
            marker(&mut particles, p, PARTICLE_HALF, GLOW_COLOR);
        }

        Self {
            rotating,
            particles,
            shell_angle: 0.0,
            particle_angle: 0.0,
        }
    }

    /// Advance both spin angles by one tick.
    pub fn advance(&mut self, dt: f32) {
        self.shell_angle = (self.shell_angle + SHELL_SPIN * dt) % TAU;
        self.particle_angle = (self.particle_angle + PARTICLE_SPIN * dt) % TAU;
    }

    /// Current world-space mesh: rotating group and particle cloud, each
    /// under its own yaw.
    pub fn vertices(&self) -> Vec<Vertex> {
        let shell_rot = Mat3::from_rotation_y(self.shell_angle);
        let particle_rot = Mat3::from_rotation_y(self.particle_angle);

        let mut out = Vec::with_capacity(self.rotating.len() + self.particles.len());
        out.extend(self.rotating.iter().map(|v| rotate(v, shell_rot)));
        out.extend(self.particles.iter().map(|v| rotate(v, particle_rot)));
        out
    }

    pub fn vertex_count(&self) -> usize {
        self.rotating.len() + self.particles.len()
    }
}

fn rotate(v: &Vertex, rot: Mat3) -> Vertex {
    let p = rot * Vec3::from_array(v.position);
    Vertex::new(p.to_array(), v.color)
}

/// Latitude rings and meridians built from thin quads, standing in for
/// the original's wireframe sphere material.
fn build_shell(verts: &mut Vec<Vertex>) {
    for ring in 1..=LATITUDE_RINGS {
        let phi = ring as f32 * PI / (LATITUDE_RINGS + 1) as f32;
        let y = SHELL_RADIUS * phi.cos();
        let ring_radius = SHELL_RADIUS * phi.sin();
        let points: Vec<Vec3> = (0..=RING_SEGMENTS)
            .map(|s| {
                let theta = s as f32 / RING_SEGMENTS as f32 * TAU;
                Vec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin())
            })
            .collect();
        ribbon(verts, &points, Vec3::Y * RING_THICKNESS, SHELL_COLOR);
    }

    for m in 0..MERIDIANS {
        let azimuth = m as f32 / MERIDIANS as f32 * PI;
        let dir = Vec3::new(azimuth.sin(), 0.0, azimuth.cos());
        let normal = Vec3::new(-azimuth.cos(), 0.0, azimuth.sin());
        let points: Vec<Vec3> = (0..=RING_SEGMENTS)
            .map(|s| {
                let phi = s as f32 / RING_SEGMENTS as f32 * TAU;
                dir * (SHELL_RADIUS * phi.sin()) + Vec3::Y * (SHELL_RADIUS * phi.cos())
            })
            .collect();
        ribbon(verts, &points, normal * RING_THICKNESS, SHELL_COLOR);
    }
}

/// Strip of quads following `points`, extruded by `offset` either side.
fn ribbon(verts: &mut Vec<Vertex>, points: &[Vec3], offset: Vec3, color: [f32; 3]) {
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let quad = [
            Vertex::new((a - offset).to_array(), color),
            Vertex::new((b - offset).to_array(), color),
            Vertex::new((b + offset).to_array(), color),
            Vertex::new((a + offset).to_array(), color),
        ];
        verts.extend_from_slice(&[quad[0], quad[1], quad[2], quad[0], quad[2], quad[3]]);
    }
}

/// Two crossed quads around `center`; readable from any direction
/// without billboarding.
fn marker(verts: &mut Vec<Vertex>, center: Vec3, half: f32, color: [f32; 3]) {
    let quads = [
        [
            center + Vec3::new(-half, -half, 0.0),
            center + Vec3::new(half, -half, 0.0),
            center + Vec3::new(half, half, 0.0),
            center + Vec3::new(-half, half, 0.0),
        ],
        [
            center + Vec3::new(0.0, -half, -half),
            center + Vec3::new(0.0, -half, half),
            center + Vec3::new(0.0, half, half),
            center + Vec3::new(0.0, half, -half),
        ],
    ];
    for corners in quads {
        let [a, b, c, d] = corners.map(|p| Vertex::new(p.to_array(), color));
        verts.extend_from_slice(&[a, b, c, a, c, d]);
    }
}

/// splitmix64, folded to a float in [0, 1). Fixed seed keeps the cloud
/// identical between scene rebuilds.
fn unit(state: &mut u64) -> f32 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^= z >> 31;
    (z >> 40) as f32 / (1u64 << 24) as f32
}

/// Deterministic marker color per technology name.
fn name_color(name: &str) -> [f32; 3] {
    const PALETTE: [[f32; 3]; 8] = [
        [0.85, 0.60, 0.30],
        [0.40, 0.70, 0.85],
        [0.55, 0.80, 0.45],
        [0.80, 0.45, 0.60],
        [0.65, 0.55, 0.85],
        [0.90, 0.80, 0.40],
        [0.45, 0.80, 0.70],
        [0.80, 0.50, 0.40],
    ];
    let hash = name
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    PALETTE[hash as usize % PALETTE.len()]
}
