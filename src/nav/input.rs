use std::collections::HashSet;

use glam::Vec2;
use winit::keyboard::KeyCode;

/// Logical movement directions driven by the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDir {
    Forward,
    Backward,
    Left,
    Right,
}

/// Maps a physical key to the direction it drives. Each direction has two
/// bindings: a letter key and an arrow key.
fn binding(code: KeyCode) -> Option<MoveDir> {
    match code {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(MoveDir::Forward),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(MoveDir::Backward),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(MoveDir::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(MoveDir::Right),
        _ => None,
    }
}

/// Live keyboard state for the four movement directions.
///
/// Held keys are tracked individually, so a direction stays active while
/// any one of its bindings is down. Releasing `W` with `ArrowUp` still
/// held keeps `Forward` true.
#[derive(Debug, Default, Clone)]
pub struct MovementState {
    held: HashSet<KeyCode>,
}

impl MovementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key-down (`pressed = true`) or key-up entry point. Codes without a
    /// movement binding are ignored; repeated key-down (OS auto-repeat)
    /// is idempotent.
    pub fn apply_key(&mut self, code: KeyCode, pressed: bool) {
        if binding(code).is_none() {
            return;
        }
        if pressed {
            self.held.insert(code);
        } else {
            self.held.remove(&code);
        }
    }

    /// Drop every held key. Called when the gallery scene is left so no
    /// stale key survives into the next visit.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_active(&self, dir: MoveDir) -> bool {
        self.held.iter().any(|&code| binding(code) == Some(dir))
    }

    pub fn forward(&self) -> bool {
        self.is_active(MoveDir::Forward)
    }

    pub fn backward(&self) -> bool {
        self.is_active(MoveDir::Backward)
    }

    pub fn left(&self) -> bool {
        self.is_active(MoveDir::Left)
    }

    pub fn right(&self) -> bool {
        self.is_active(MoveDir::Right)
    }

    /// Desired direction as `(lateral, longitudinal)`: x = right - left,
    /// y = forward - backward. Unit length when non-zero, so diagonal
    /// input is no faster than axis-aligned input.
    pub fn wish_dir(&self) -> Vec2 {
        let x = self.right() as i32 - self.left() as i32;
        let y = self.forward() as i32 - self.backward() as i32;
        Vec2::new(x as f32, y as f32).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_down_sets_and_key_up_clears() {
        let mut state = MovementState::new();
        state.apply_key(KeyCode::KeyW, true);
        assert!(state.forward());
        state.apply_key(KeyCode::KeyW, false);
        assert!(!state.forward());
    }

    #[test]
    fn repeated_key_down_is_idempotent() {
        let mut state = MovementState::new();
        state.apply_key(KeyCode::KeyD, true);
        state.apply_key(KeyCode::KeyD, true);
        state.apply_key(KeyCode::KeyD, true);
        assert!(state.right());
        state.apply_key(KeyCode::KeyD, false);
        assert!(!state.right());
    }

    #[test]
    fn direction_active_while_any_binding_held() {
        let mut state = MovementState::new();
        state.apply_key(KeyCode::KeyW, true);
        state.apply_key(KeyCode::ArrowUp, true);
        state.apply_key(KeyCode::KeyW, false);
        assert!(state.forward(), "arrow binding still held");
        state.apply_key(KeyCode::ArrowUp, false);
        assert!(!state.forward());
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut state = MovementState::new();
        state.apply_key(KeyCode::KeyQ, true);
        state.apply_key(KeyCode::Space, true);
        assert_eq!(state.wish_dir(), Vec2::ZERO);
    }

    #[test]
    fn wish_dir_is_normalized_on_diagonals() {
        let mut state = MovementState::new();
        state.apply_key(KeyCode::KeyW, true);
        state.apply_key(KeyCode::KeyD, true);
        let dir = state.wish_dir();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x > 0.0 && dir.y > 0.0);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut state = MovementState::new();
        state.apply_key(KeyCode::KeyW, true);
        state.apply_key(KeyCode::KeyS, true);
        assert_eq!(state.wish_dir(), Vec2::ZERO);
    }

    #[test]
    fn clear_releases_everything() {
        let mut state = MovementState::new();
        state.apply_key(KeyCode::KeyW, true);
        state.apply_key(KeyCode::ArrowLeft, true);
        state.clear();
        assert!(!state.forward());
        assert!(!state.left());
    }
}
