use std::f32::consts::PI;

use glam::Vec3;
use winit::keyboard::KeyCode;

use portfolio::camera::Camera;
use portfolio::nav::{MovementState, NavTuning, PlayerController, WalkBounds};

const DT: f32 = 1.0 / 60.0;

fn rig() -> (PlayerController, Camera) {
    let controller = PlayerController::new(NavTuning::default(), WalkBounds::room(9.0, 4.0, 0.5));
    let camera = Camera::new(Vec3::new(0.0, 1.7, 3.0), PI, 0.0, 75f32.to_radians());
    (controller, camera)
}

fn held(codes: &[KeyCode]) -> MovementState {
    let mut state = MovementState::new();
    for &code in codes {
        state.apply_key(code, true);
    }
    state
}

#[test]
fn velocity_decays_strictly_after_release() {
    let (mut controller, mut camera) = rig();
    let moving = held(&[KeyCode::KeyW]);
    for _ in 0..20 {
        controller.step(DT, &moving, &mut camera);
    }
    assert!(controller.velocity().length() > 0.0);

    let idle = MovementState::new();
    let mut previous = controller.velocity().length();
    for _ in 0..200 {
        controller.step(DT, &idle, &mut camera);
        let current = controller.velocity().length();
        assert!(
            current < previous,
            "speed must strictly decrease every idle tick"
        );
        previous = current;
    }
    // Asymptotic: tiny but not required to hit exact zero.
    assert!(previous < 1e-4);
}

#[test]
fn eye_height_holds_regardless_of_prior_state() {
    let (mut controller, mut camera) = rig();
    camera.position.y = 0.2;
    controller.step(DT, &MovementState::new(), &mut camera);
    assert_eq!(camera.position.y, 1.7);

    camera.position.y = 12.0;
    controller.step(DT, &held(&[KeyCode::KeyW]), &mut camera);
    assert_eq!(camera.position.y, 1.7);
}

#[test]
fn wall_rejection_is_axis_local() {
    let (mut controller, mut camera) = rig();
    // Facing -z, `A` pushes toward +x and `W` toward -z. Start close to
    // the +x wall so the x axis saturates while z keeps moving.
    camera.position = Vec3::new(8.4, 1.7, 0.0);
    let input = held(&[KeyCode::KeyA, KeyCode::KeyW]);

    let start_z = camera.position.z;
    let mut pinned_x = None;
    for _ in 0..240 {
        let before_x = camera.position.x;
        controller.step(DT, &input, &mut camera);
        assert!(camera.position.x < 8.5, "x never crosses the wall");
        if camera.position.x == before_x {
            pinned_x = Some(before_x);
        }
    }
    assert!(pinned_x.is_some(), "x axis eventually saturates at the wall");
    assert!(
        camera.position.z < start_z - 1.0,
        "z keeps sliding while x is pinned"
    );
}

#[test]
fn forward_travel_is_positive_and_bounded() {
    let (mut controller, mut camera) = rig();
    let input = held(&[KeyCode::ArrowUp]);
    let heading = camera.ground_forward();
    let start = camera.position;

    // Short enough that the far wall stays out of reach.
    let ticks = 12;
    for _ in 0..ticks {
        controller.step(DT, &input, &mut camera);
    }

    let travelled = (camera.position - start).dot(heading);
    assert!(travelled > 0.0);
    // Velocity can never exceed speed / damping, and each tick applies
    // at most that much displacement.
    let tuning = NavTuning::default();
    let per_tick_cap = tuning.speed / tuning.damping;
    assert!(travelled <= per_tick_cap * ticks as f32 + 1e-3);
}

#[test]
fn diagonal_input_is_not_faster_than_axis_aligned() {
    // Few enough ticks that neither run reaches a wall; clamping would
    // mask the speed comparison.
    let travel = |codes: &[KeyCode]| {
        let (mut controller, mut camera) = rig();
        let input = held(codes);
        let start = camera.position;
        for _ in 0..12 {
            controller.step(DT, &input, &mut camera);
        }
        (camera.position - start).length()
    };

    let axis = travel(&[KeyCode::KeyW]);
    let diagonal = travel(&[KeyCode::KeyW, KeyCode::KeyD]);
    assert!(axis > 0.0);
    assert!(
        diagonal <= axis + 1e-3,
        "diagonal {} must not outrun axis {}",
        diagonal,
        axis
    );
}

#[test]
fn both_bindings_drive_the_same_flag() {
    let (mut controller_a, mut camera_a) = rig();
    let (mut controller_b, mut camera_b) = rig();
    let letters = held(&[KeyCode::KeyW]);
    let arrows = held(&[KeyCode::ArrowUp]);

    for _ in 0..30 {
        controller_a.step(DT, &letters, &mut camera_a);
        controller_b.step(DT, &arrows, &mut camera_b);
    }
    assert!((camera_a.position - camera_b.position).length() < 1e-6);
}
