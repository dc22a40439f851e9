//! First-person navigation for the gallery walk: keyboard state, the
//! damped-velocity motion integrator, and the walkable interior bounds.

mod bounds;
mod controller;
mod input;

pub use bounds::{Span, WalkBounds};
pub use controller::{NavTuning, PlayerController, MAX_TICK};
pub use input::{MoveDir, MovementState};
