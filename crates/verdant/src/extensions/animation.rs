// extensions/animation.rs
//
// TransformAnimation — interpolates between two TransformStates over a duration.
// Driven by the caller's frame loop; never spawns timers or threads.
//
// Usage:
//   let mut anim = TransformAnimation::new(from, to, 250.0).with_easing(Easing::BackOut);
//   anim.start();
//   // each frame:
//   anim.tick(dt_ms);
//   let state = anim.get_frame();

use std::fmt;
use std::sync::Arc;
use crate::core::time::Timer;
use crate::error::AnimationError;
use super::easing::{Easing, TimingFunction};
use super::transform::TransformState;

/// Lifecycle of a [`TransformAnimation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Constructed, never started.
    Idle,
    Running,
    /// Reached its duration. `start()` replays from the beginning.
    Complete,
}

/// Smoothly animates between two [`TransformState`]s according to a timing function.
///
/// `to - from` is computed once at construction and reused every frame, and the
/// interpolated result is written into a single scratch state owned by the
/// animation. `get_frame` hands that buffer out by reference, so the borrow
/// checker stops callers from holding it across frames.
#[derive(Clone)]
pub struct TransformAnimation {
    from: TransformState,
    to: TransformState,
    /// True if either endpoint is multiplicative.
    multiply: bool,
    timer: Timer,
    timing: Arc<dyn TimingFunction>,
    running: bool,
    complete: bool,
    /// Return `to` exactly once complete, instead of interpolating.
    fill_forwards: bool,
    diff: TransformState,
    current: TransformState,
}

impl TransformAnimation {
    /// Create an animation lasting `duration` milliseconds with linear timing.
    ///
    /// Mixing a multiplicative and an absolute endpoint is accepted (and logged);
    /// use [`try_new`](Self::try_new) to reject it.
    pub fn new(from: TransformState, to: TransformState, duration: f32) -> Self {
        if from.is_multiplicative() != to.is_multiplicative() {
            log::warn!(
                "TransformAnimation: mixing multiplicative and absolute endpoints; treating as multiplicative"
            );
        }
        Self::with_diff(from, to, duration, Arc::new(Easing::Linear), to - from)
    }

    /// Like [`new`](Self::new), but fails if the endpoints disagree on mode.
    pub fn try_new(from: TransformState, to: TransformState, duration: f32) -> Result<Self, AnimationError> {
        if from.is_multiplicative() != to.is_multiplicative() {
            return Err(AnimationError::MixedModes);
        }
        Ok(Self::with_diff(from, to, duration, Arc::new(Easing::Linear), to - from))
    }

    fn with_diff(
        from: TransformState,
        to: TransformState,
        duration: f32,
        timing: Arc<dyn TimingFunction>,
        diff: TransformState,
    ) -> Self {
        let multiply = from.is_multiplicative() || to.is_multiplicative();
        Self {
            from,
            to,
            multiply,
            timer: Timer::new(duration),
            timing,
            running: false,
            complete: false,
            fill_forwards: true,
            diff,
            current: TransformState::identity(multiply),
        }
    }

    // -- Builder methods --

    pub fn with_timing(mut self, timing: impl TimingFunction + 'static) -> Self {
        self.timing = Arc::new(timing);
        self
    }

    pub fn with_easing(self, easing: Easing) -> Self {
        self.with_timing(easing)
    }

    pub fn with_fill_forwards(mut self, fill_forwards: bool) -> Self {
        self.fill_forwards = fill_forwards;
        self
    }

    pub fn set_fill_forwards(&mut self, fill_forwards: bool) {
        self.fill_forwards = fill_forwards;
    }

    /// Start from the beginning. Calling it again while running or after
    /// completion restarts the run.
    pub fn start(&mut self) {
        log::debug!(
            "TransformAnimation: start ({}ms, was {:?})",
            self.timer.duration(),
            self.state()
        );
        self.timer.restart();
        self.running = true;
        self.complete = false;
    }

    /// Advance by `dt` milliseconds. Returns true on the tick that completes the run.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        if self.timer.advance(dt) {
            self.on_timer_finished();
            return true;
        }
        false
    }

    fn on_timer_finished(&mut self) {
        self.running = false;
        self.complete = true;
        log::debug!("TransformAnimation: complete after {}ms", self.timer.elapsed());
    }

    /// The interpolated state for the current elapsed time.
    ///
    /// Before `start()` this is `from`. Once complete with fill-forwards on, it
    /// is `to` itself, bit for bit.
    pub fn get_frame(&mut self) -> &TransformState {
        if self.fill_forwards && self.complete {
            return &self.to;
        }

        let percentage = self.timer.elapsed() / self.timer.duration();
        let t = self.timing.evaluate(percentage);

        self.current.position.x = self.from.position.x + self.diff.position.x * t;
        self.current.position.y = self.from.position.y + self.diff.position.y * t;
        self.current.width = self.from.width + self.diff.width * t;
        self.current.height = self.from.height + self.diff.height * t;
        self.current.angle = self.from.angle + self.diff.angle * t;

        &self.current
    }

    /// A fresh, idle animation with the same endpoints, duration, timing and
    /// precomputed difference as this one. Fill-forwards starts at its default (on).
    ///
    /// The difference is carried over rather than recomputed, so endpoints
    /// edited through [`edit_from`](Self::edit_from) or [`edit_to`](Self::edit_to)
    /// do not change the copied trajectory.
    pub fn duplicate(&self) -> Self {
        Self::with_diff(
            self.from,
            self.to,
            self.timer.duration(),
            Arc::clone(&self.timing),
            self.diff,
        )
    }

    pub fn from(&self) -> &TransformState {
        &self.from
    }

    pub fn to(&self) -> &TransformState {
        &self.to
    }

    /// Edit the start state in place. The stored difference is not recomputed.
    pub fn edit_from(&mut self) -> &mut TransformState {
        &mut self.from
    }

    /// Edit the end state in place. The stored difference is not recomputed.
    pub fn edit_to(&mut self) -> &mut TransformState {
        &mut self.to
    }

    /// `to - from` as captured at construction.
    pub fn diff(&self) -> &TransformState {
        &self.diff
    }

    pub fn is_multiplicative(&self) -> bool {
        self.multiply
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn fill_forwards(&self) -> bool {
        self.fill_forwards
    }

    pub fn state(&self) -> AnimationState {
        if self.running {
            AnimationState::Running
        } else if self.complete {
            AnimationState::Complete
        } else {
            AnimationState::Idle
        }
    }

    /// Milliseconds elapsed in the current run.
    pub fn elapsed(&self) -> f32 {
        self.timer.elapsed()
    }

    pub fn duration(&self) -> f32 {
        self.timer.duration()
    }
}

impl fmt::Debug for TransformAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformAnimation")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("multiply", &self.multiply)
            .field("timer", &self.timer)
            .field("running", &self.running)
            .field("complete", &self.complete)
            .field("fill_forwards", &self.fill_forwards)
            .field("diff", &self.diff)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn slide() -> TransformAnimation {
        let from = TransformState::new(Vec2::ZERO, 0.0, 0.0, 0.0, false);
        let to = TransformState::new(Vec2::new(100.0, 0.0), 0.0, 0.0, 0.0, false);
        TransformAnimation::new(from, to, 1000.0)
    }

    fn grow() -> TransformAnimation {
        let from = TransformState::new(Vec2::new(0.0, 10.0), 10.0, 20.0, 0.0, false);
        let to = TransformState::new(Vec2::new(50.0, -10.0), 30.0, 60.0, 3.0, false);
        TransformAnimation::new(from, to, 200.0)
    }

    #[test]
    fn halfway_position() {
        let mut anim = slide();
        anim.start();
        anim.tick(500.0);
        assert!((anim.get_frame().position.x - 50.0).abs() < 0.01);
    }

    #[test]
    fn frame_before_start_is_from() {
        let mut anim = grow();
        let from = *anim.from();
        assert_eq!(anim.state(), AnimationState::Idle);
        assert_eq!(*anim.get_frame(), from);
    }

    #[test]
    fn every_field_interpolates() {
        let mut anim = grow();
        anim.start();
        anim.tick(50.0);
        let frame = *anim.get_frame();
        assert!((frame.position.x - 12.5).abs() < 1e-4);
        assert!((frame.position.y - 5.0).abs() < 1e-4);
        assert!((frame.width - 15.0).abs() < 1e-4);
        assert!((frame.height - 30.0).abs() < 1e-4);
        assert!((frame.angle - 0.75).abs() < 1e-4);
    }

    #[test]
    fn completes_once_and_fills_forwards() {
        let mut anim = grow();
        let to = *anim.to();
        anim.start();
        assert!(!anim.tick(150.0));
        assert!(anim.tick(150.0));
        assert!(anim.is_complete());
        assert!(!anim.is_running());
        assert_eq!(anim.state(), AnimationState::Complete);
        // No second completion, no drift
        assert!(!anim.tick(10_000.0));
        assert_eq!(*anim.get_frame(), to);
    }

    #[test]
    fn without_fill_forwards_final_frame_is_interpolated() {
        let mut anim = slide().with_fill_forwards(false);
        anim.start();
        anim.tick(5000.0);
        assert!(anim.is_complete());
        assert!((anim.get_frame().position.x - 100.0).abs() < 1e-3);
    }

    #[test]
    fn start_restarts_a_finished_run() {
        let mut anim = slide();
        anim.start();
        anim.tick(1000.0);
        assert!(anim.is_complete());

        anim.start();
        assert!(anim.is_running());
        assert!(!anim.is_complete());
        assert_eq!(anim.elapsed(), 0.0);
        assert_eq!(anim.get_frame().position.x, 0.0);
    }

    #[test]
    fn start_while_running_restarts() {
        let mut anim = slide();
        anim.start();
        anim.tick(700.0);
        anim.start();
        anim.tick(100.0);
        assert!((anim.get_frame().position.x - 10.0).abs() < 0.01);
    }

    #[test]
    fn timing_function_shapes_progress() {
        let mut anim = slide().with_timing(|t: f32| t * t);
        anim.start();
        anim.tick(500.0);
        assert!((anim.get_frame().position.x - 25.0).abs() < 0.01);

        let mut eased = slide().with_easing(Easing::QuadOut);
        eased.start();
        eased.tick(500.0);
        assert!((eased.get_frame().position.x - 75.0).abs() < 0.01);
    }

    #[test]
    fn duplicate_is_idle_and_keeps_diff() {
        let mut anim = grow();
        anim.start();
        anim.tick(120.0);

        let original_diff = *anim.diff();
        let copy = anim.duplicate();
        anim.edit_to().width = 1000.0;
        anim.edit_from().position = Vec2::splat(-7.0);

        assert!(!copy.is_running());
        assert!(!copy.is_complete());
        assert_eq!(copy.elapsed(), 0.0);
        assert_eq!(*copy.diff(), original_diff);
        assert_eq!(*anim.diff(), original_diff);
    }

    #[test]
    fn duplicate_plays_the_same_trajectory() {
        let mut anim = grow().with_easing(Easing::SineInOut);
        let mut copy = anim.duplicate();
        anim.start();
        copy.start();
        anim.tick(80.0);
        copy.tick(80.0);
        assert_eq!(*anim.get_frame(), *copy.get_frame());
    }

    #[test]
    fn duplicate_resets_fill_forwards() {
        let anim = slide().with_fill_forwards(false);
        let copy = anim.duplicate();
        assert!(!anim.fill_forwards());
        assert!(copy.fill_forwards());
    }

    #[test]
    fn mixed_modes_are_permissive_by_default() {
        let from = TransformState::absolute();
        let to = TransformState::multiplicative();
        let anim = TransformAnimation::new(from, to, 100.0);
        assert!(anim.is_multiplicative());
    }

    #[test]
    fn try_new_rejects_mixed_modes() {
        let err = TransformAnimation::try_new(
            TransformState::absolute(),
            TransformState::multiplicative(),
            100.0,
        );
        assert!(matches!(err, Err(AnimationError::MixedModes)));

        let ok = TransformAnimation::try_new(
            TransformState::multiplicative(),
            TransformState::multiplicative().with_size(2.0, 2.0),
            100.0,
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn multiplicative_scratch_starts_at_identity_mode() {
        let mut anim = TransformAnimation::new(
            TransformState::multiplicative(),
            TransformState::multiplicative().with_size(3.0, 3.0),
            100.0,
        );
        anim.start();
        anim.tick(50.0);
        let frame = anim.get_frame();
        assert!(frame.is_multiplicative());
        assert!((frame.width - 2.0).abs() < 1e-5);
    }
}
