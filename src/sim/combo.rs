//! Score and combo tracking
//!
//! Combo counts consecutive non-hazard hits and falls back to zero when no
//! hit lands within the idle window. Score only ever grows.

use super::timer::Timer;

/// Combo state as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboState {
    Idle,
    Active(u32),
}

#[derive(Debug, Clone)]
pub struct ScoreBoard {
    score: u64,
    combo: u32,
    idle: Timer,
}

impl ScoreBoard {
    pub fn new(combo_window_ms: f32) -> Self {
        Self {
            score: 0,
            combo: 0,
            idle: Timer::one_shot(combo_window_ms),
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn state(&self) -> ComboState {
        match self.combo {
            0 => ComboState::Idle,
            n => ComboState::Active(n),
        }
    }

    /// Credit one batch of `hits` non-hazard hits worth `points` in total.
    ///
    /// Every credited batch restarts the idle window.
    pub fn credit(&mut self, points: u64, hits: u32) {
        if hits == 0 {
            return;
        }
        self.score = self.score.saturating_add(points);
        self.combo += hits;
        self.idle.arm();
    }

    /// Advance the idle window; returns true if the combo just reset
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        if self.idle.advance(dt_ms) > 0 && self.combo > 0 {
            self.combo = 0;
            return true;
        }
        false
    }

    /// Stop the idle window without touching score or combo
    pub fn halt(&mut self) {
        self.idle.cancel();
    }

    /// Clear everything for a new round
    pub fn reset(&mut self) {
        self.score = 0;
        self.combo = 0;
        self.idle.cancel();
    }
}
