// extensions/mod.rs
//
// Transform animation layer: states, timing functions, animations and the
// per-entity animation set. Pure logic, ticked by the host's frame loop.

pub mod easing;
pub mod transform;
pub mod animation;
pub mod tween;

pub use easing::{Easing, TimingFunction, lerp, lerp_vec2, ease, ease_vec2};
pub use transform::TransformState;
pub use animation::{TransformAnimation, AnimationState};
pub use tween::{AnimationSet, AnimationId};
