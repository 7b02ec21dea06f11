/// Tick-driven elapsed-time tracker.
/// Never reads a clock: time only moves when the frame loop calls `advance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    /// Length of one run in milliseconds.
    duration: f32,
    /// Time accumulated in the current run.
    elapsed: f32,
    running: bool,
    finished: bool,
}

impl Timer {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            running: false,
            finished: false,
        }
    }

    /// Begin (or continue) counting. Does not reset elapsed time.
    pub fn start(&mut self) {
        self.running = true;
        self.finished = false;
    }

    /// Pause counting without touching elapsed time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Zero the elapsed time and leave the timer stopped.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.running = false;
        self.finished = false;
    }

    /// Reset and start in one call.
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Add `dt` milliseconds. Returns true on the call that completes the run.
    ///
    /// On completion elapsed time is clamped to the duration, so progress
    /// never reads past 1.0.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.running = false;
            self.finished = true;
            return true;
        }
        false
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Time left in the current run.
    pub fn remaining(&self) -> f32 {
        self.duration - self.elapsed
    }

    /// `elapsed / duration`, unclamped (NaN for a zero duration before it completes).
    pub fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
