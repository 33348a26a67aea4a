//! Picking: ray construction from the camera, ray/marker hit testing,
//! and the hover/selection interaction state machine.

/// Ray construction and ray/sphere hit testing.
pub mod ray;
/// Hover target, selection set, and the visual-state join.
pub mod state;

pub use ray::{pick, PickRay};
pub use state::{visual_state, InteractionState, VisualState};
