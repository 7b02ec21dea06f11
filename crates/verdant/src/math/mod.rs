//! 2D math primitives shared by the animation code.

pub mod geometry;
pub mod rng;

pub use glam::Vec2;
pub use geometry::{
    angle_between_points, vec2_from_angle, distance, Rect,
    check_rect_intersection, check_point_on_rect_intersection,
};
pub use rng::Rng;
