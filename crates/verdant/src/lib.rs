pub mod api;
pub mod core;
pub mod math;
pub mod renderer;
pub mod assets;
pub mod extensions;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::types::EntityId;
pub use core::time::Timer;
pub use error::AnimationError;
pub use math::{
    Vec2, Rect, Rng,
    angle_between_points, vec2_from_angle, distance,
    check_rect_intersection, check_point_on_rect_intersection,
};
pub use renderer::instance::{TransformInstance, FrameBuffer};
pub use assets::manifest::AnimationManifest;

pub use extensions::{
    Easing, TimingFunction, lerp, lerp_vec2, ease, ease_vec2,
    TransformState,
    TransformAnimation, AnimationState,
    AnimationSet, AnimationId,
};
