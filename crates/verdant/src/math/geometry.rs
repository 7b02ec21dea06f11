//! Angle, distance and axis-aligned rectangle helpers.
//!
//! Rotation convention: angle 0 faces +y ("down" in screen space) and grows
//! toward +x. `angle_between_points` and `vec2_from_angle` both follow it, so
//! rotation values produced here can be fed straight into a `TransformState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Angle from `a` toward `target`, measured from the +y axis.
///
/// Note the argument order: this is `atan2(dx, dy)`, not the usual `atan2(dy, dx)`.
#[inline]
pub fn angle_between_points(a: Vec2, target: Vec2) -> f32 {
    (target.x - a.x).atan2(target.y - a.y)
}

/// Unit vector pointing along `angle` (inverse of [`angle_between_points`]).
#[inline]
pub fn vec2_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), angle.cos())
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos(pos: Vec2, w: f32, h: f32) -> Self {
        Self::new(pos.x, pos.y, w, h)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Overlap test with strict inequalities: shared edges or corners do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Whether `point` lies strictly inside the rectangle (edges excluded).
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x > self.x
            && point.x < self.x + self.w
            && point.y > self.y
            && point.y < self.y + self.h
    }
}

/// Check if two AABBs given by position and size overlap.
pub fn check_rect_intersection(pos1: Vec2, w1: f32, h1: f32, pos2: Vec2, w2: f32, h2: f32) -> bool {
    Rect::from_pos(pos1, w1, h1).intersects(&Rect::from_pos(pos2, w2, h2))
}

/// Check if `point` is strictly inside the AABB at (`x`, `y`) with size `w` x `h`.
pub fn check_point_on_rect_intersection(point: Vec2, x: f32, y: f32, w: f32, h: f32) -> bool {
    Rect::new(x, y, w, h).contains_point(point)
}
