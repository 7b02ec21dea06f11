// extensions/easing.rs
//
// Timing functions: map normalized progress to eased progress.
// Pure math — no dependencies on animations or timers.
//
// Every family is defined once as its "in" curve; the out and in-out
// variants are derived by reflection:
//   out(t)    = 1 - in(1 - t)
//   in_out(t) = in(2t) / 2            for t < 0.5
//             = 1 - in(2 - 2t) / 2    otherwise

use std::f32::consts::PI;
use serde::{Deserialize, Serialize};

/// Anything that remaps animation progress.
///
/// Nominally `f(0) = 0` and `f(1) = 1`, but overshooting curves are legal.
/// Any `Fn(f32) -> f32` closure qualifies, as does every [`Easing`].
pub trait TimingFunction: Send + Sync {
    fn evaluate(&self, t: f32) -> f32;
}

impl<F> TimingFunction for F
where
    F: Fn(f32) -> f32 + Send + Sync,
{
    #[inline]
    fn evaluate(&self, t: f32) -> f32 {
        self(t)
    }
}

impl TimingFunction for Easing {
    #[inline]
    fn evaluate(&self, t: f32) -> f32 {
        self.apply(t)
    }
}

/// Built-in easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant velocity (identity).
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    /// Pulls back before moving forward.
    BackIn,
    /// Overshoots the target, then settles.
    BackOut,
    BackInOut,
    BounceIn,
    /// Bouncy finish.
    BounceOut,
    BounceInOut,
    /// Elastic spring.
    ElasticOut,
}

/// Overshoot constant for the back family.
const BACK: f32 = 1.70158;
/// The in-out back curve uses a stronger overshoot so each half matches the single-sided feel.
const BACK_IN_OUT: f32 = BACK * 1.525;

#[derive(Debug, Clone, Copy)]
enum Curve {
    Power(i32),
    Sine,
    Expo,
    Back(f32),
    Bounce,
}

impl Curve {
    fn ease_in(self, t: f32) -> f32 {
        match self {
            Curve::Power(n) => t.powi(n),
            Curve::Sine => 1.0 - (t * PI / 2.0).cos(),
            Curve::Expo => {
                if t == 0.0 { 0.0 } else { 2.0_f32.powf(10.0 * t - 10.0) }
            }
            Curve::Back(c) => t * t * ((c + 1.0) * t - c),
            Curve::Bounce => 1.0 - bounce_out(1.0 - t),
        }
    }

    fn ease_out(self, t: f32) -> f32 {
        match self {
            Curve::Bounce => bounce_out(t),
            _ => 1.0 - self.ease_in(1.0 - t),
        }
    }

    fn ease_in_out(self, t: f32) -> f32 {
        if t < 0.5 {
            self.ease_in(2.0 * t) / 2.0
        } else {
            1.0 - self.ease_in(2.0 - 2.0 * t) / 2.0
        }
    }
}

impl Easing {
    /// Apply the easing curve to normalized progress `t`.
    ///
    /// The input is not clamped: `Linear` is the identity everywhere, and the
    /// other curves extrapolate their formulas outside [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        use Curve::*;
        match self {
            Easing::Linear => t,

            Easing::QuadIn => Power(2).ease_in(t),
            Easing::QuadOut => Power(2).ease_out(t),
            Easing::QuadInOut => Power(2).ease_in_out(t),

            Easing::CubicIn => Power(3).ease_in(t),
            Easing::CubicOut => Power(3).ease_out(t),
            Easing::CubicInOut => Power(3).ease_in_out(t),

            Easing::QuartIn => Power(4).ease_in(t),
            Easing::QuartOut => Power(4).ease_out(t),
            Easing::QuartInOut => Power(4).ease_in_out(t),

            Easing::SineIn => Sine.ease_in(t),
            Easing::SineOut => Sine.ease_out(t),
            Easing::SineInOut => Sine.ease_in_out(t),

            Easing::ExpoIn => Expo.ease_in(t),
            Easing::ExpoOut => Expo.ease_out(t),
            Easing::ExpoInOut => Expo.ease_in_out(t),

            Easing::BackIn => Back(BACK).ease_in(t),
            Easing::BackOut => Back(BACK).ease_out(t),
            Easing::BackInOut => Back(BACK_IN_OUT).ease_in_out(t),

            Easing::BounceIn => Bounce.ease_in(t),
            Easing::BounceOut => Bounce.ease_out(t),
            Easing::BounceInOut => Bounce.ease_in_out(t),

            Easing::ElasticOut => elastic_out(t),
        }
    }

    /// Every built-in curve, for iteration in tools and tests.
    pub const ALL: [Easing; 23] = [
        Easing::Linear,
        Easing::QuadIn, Easing::QuadOut, Easing::QuadInOut,
        Easing::CubicIn, Easing::CubicOut, Easing::CubicInOut,
        Easing::QuartIn, Easing::QuartOut, Easing::QuartInOut,
        Easing::SineIn, Easing::SineOut, Easing::SineInOut,
        Easing::ExpoIn, Easing::ExpoOut, Easing::ExpoInOut,
        Easing::BackIn, Easing::BackOut, Easing::BackInOut,
        Easing::BounceIn, Easing::BounceOut, Easing::BounceInOut,
        Easing::ElasticOut,
    ];
}

#[inline]
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    let (offset, floor) = if t < 1.0 / D1 {
        (0.0, 0.0)
    } else if t < 2.0 / D1 {
        (1.5 / D1, 0.75)
    } else if t < 2.5 / D1 {
        (2.25 / D1, 0.9375)
    } else {
        (2.625 / D1, 0.984375)
    };
    let t = t - offset;
    N1 * t * t + floor
}

#[inline]
fn elastic_out(t: f32) -> f32 {
    const PERIOD: f32 = (2.0 * PI) / 3.0;
    if t == 0.0 || t == 1.0 {
        return t;
    }
    2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * PERIOD).sin() + 1.0
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec2 values.
#[inline]
pub fn lerp_vec2(a: glam::Vec2, b: glam::Vec2, t: f32) -> glam::Vec2 {
    a + (b - a) * t
}

/// Interpolate through any timing function.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, timing: &dyn TimingFunction) -> f32 {
    lerp(a, b, timing.evaluate(t))
}

/// Interpolate a Vec2 through any timing function.
#[inline]
pub fn ease_vec2(a: glam::Vec2, b: glam::Vec2, t: f32, timing: &dyn TimingFunction) -> glam::Vec2 {
    lerp_vec2(a, b, timing.evaluate(t))
}
