//! Cooperative virtual-time timers
//!
//! Timers never read a wall clock. They are advanced by the session's `tick`
//! so cancellation is a plain state change and tests run without waiting.

/// A cancellable one-shot or repeating timer
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    period_ms: f32,
    elapsed_ms: f32,
    repeating: bool,
    armed: bool,
}

impl Timer {
    /// Disarmed repeating timer
    pub fn repeating(period_ms: f32) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0.0,
            repeating: true,
            armed: false,
        }
    }

    /// Disarmed one-shot timer
    pub fn one_shot(period_ms: f32) -> Self {
        Self {
            repeating: false,
            ..Self::repeating(period_ms)
        }
    }

    /// (Re)start from zero. Re-arming replaces any pending schedule.
    pub fn arm(&mut self) {
        self.elapsed_ms = 0.0;
        self.armed = true;
    }

    /// Change the period and restart
    pub fn arm_with(&mut self, period_ms: f32) {
        self.period_ms = period_ms;
        self.arm();
    }

    pub fn cancel(&mut self) {
        self.armed = false;
        self.elapsed_ms = 0.0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn period_ms(&self) -> f32 {
        self.period_ms
    }

    /// Advance by `dt_ms`, returning how many times the timer fired
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        if !self.armed || self.period_ms <= 0.0 {
            return 0;
        }

        self.elapsed_ms += dt_ms;
        if self.elapsed_ms < self.period_ms {
            return 0;
        }

        if self.repeating {
            let fires = (self.elapsed_ms / self.period_ms).floor();
            self.elapsed_ms -= fires * self.period_ms;
            fires as u32
        } else {
            self.cancel();
            1
        }
    }
}
