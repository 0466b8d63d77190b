//! Round controller
//!
//! Owns the live item set, the pointer trail, scoring, and the three session
//! timers (spawn cadence, countdown, combo idle). Everything runs on the
//! caller's thread: `tick` advances time and physics, pointer callbacks run
//! slicing, and `&mut self` keeps the two from interleaving.

use glam::Vec2;

use super::collision::{CutParams, check_collision};
use super::combo::ScoreBoard;
use super::difficulty::{Difficulty, difficulty_for};
use super::event::{EventSink, GameEvent, RemovalCause};
use super::item::{ItemId, Projectile};
use super::kinematics::{self, StepClock};
use super::spawn::Spawner;
use super::state::{EndReason, Field, GamePhase, PointerSample};
use super::timer::Timer;
use super::trail::{TrailSegment, TrailTracker};
use crate::error::FieldError;
use crate::tuning::Tuning;

/// Countdown resolution
const COUNTDOWN_PERIOD_MS: f32 = 1000.0;

/// One player's game session, reused across rounds
#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    cut: CutParams,
    field: Option<Field>,
    phase: GamePhase,
    end_reason: Option<EndReason>,
    time_remaining: u32,
    items: Vec<Projectile>,
    trail: TrailTracker,
    cursor: Option<Vec2>,
    board: ScoreBoard,
    spawner: Spawner,
    difficulty: Difficulty,
    spawn_timer: Timer,
    countdown: Timer,
    physics: StepClock,
    events: Vec<GameEvent>,
}

impl Session {
    /// Session with a random seed
    pub fn new(tuning: Tuning) -> Self {
        Self::with_seed(tuning, rand::random())
    }

    /// Session with a fixed seed (reproducible spawns)
    pub fn with_seed(tuning: Tuning, seed: u64) -> Self {
        let difficulty = difficulty_for(0);
        Self {
            cut: CutParams::from_tuning(&tuning),
            field: None,
            phase: GamePhase::Idle,
            end_reason: None,
            time_remaining: 0,
            items: Vec::new(),
            trail: TrailTracker::new(tuning.trail_capacity, tuning.min_segment_length),
            cursor: None,
            board: ScoreBoard::new(tuning.combo_window_ms),
            spawner: Spawner::new(seed),
            difficulty,
            spawn_timer: Timer::repeating(difficulty.interval_ms as f32),
            countdown: Timer::repeating(COUNTDOWN_PERIOD_MS),
            physics: StepClock::new(tuning.physics_step_ms, tuning.max_substeps),
            events: Vec::new(),
            tuning,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn field(&self) -> Option<Field> {
        self.field
    }

    pub fn score(&self) -> u64 {
        self.board.score()
    }

    pub fn combo(&self) -> u32 {
        self.board.combo()
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Live items, in spawn order
    pub fn items(&self) -> &[Projectile] {
        &self.items
    }

    pub fn trail(&self) -> &TrailTracker {
        &self.trail
    }

    /// Last known pointer position, tracked even when not slicing
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Begin a new round on a `width` x `height` field.
    ///
    /// A round already in progress ends with `UserAbort` first. On error the
    /// session is left untouched.
    pub fn start_round(&mut self, width: f32, height: f32) -> Result<(), FieldError> {
        let field = Field::new(width, height).inspect_err(|e| {
            log::warn!("Rejected play area: {}", e);
        })?;

        if self.phase == GamePhase::Playing {
            self.end_round(EndReason::UserAbort);
        }

        let seconds = self.tuning.round_seconds.max(1);
        self.items.clear();
        self.trail.clear();
        self.board.reset();
        self.physics.reset();
        self.field = Some(field);
        self.phase = GamePhase::Playing;
        self.end_reason = None;
        self.time_remaining = seconds;
        self.difficulty = difficulty_for(0);

        self.emit(GameEvent::RoundStarted {
            width,
            height,
            seconds,
        });

        // Seed the field so it isn't empty while the scheduler warms up
        for _ in 0..self.tuning.initial_items {
            self.spawn_item(None);
        }

        self.spawn_timer.arm_with(self.difficulty.interval_ms as f32);
        self.countdown.arm();

        log::info!(
            "Round started: {}x{} field, {}s, {} initial items",
            width,
            height,
            seconds,
            self.items.len()
        );
        Ok(())
    }

    /// Feed one pointer motion sample
    pub fn on_pointer_sample(&mut self, sample: PointerSample) {
        self.cursor = Some(sample.pos);

        if !sample.is_dragging() {
            // Button up ends the stroke even if no release was reported
            self.trail.release();
            return;
        }
        if self.phase != GamePhase::Playing {
            return;
        }

        if let Some(segment) = self.trail.feed(sample.pos) {
            self.resolve_slice(&segment);
        }
    }

    /// Pointer lifted; the next sample starts a fresh trail
    pub fn on_pointer_release(&mut self) {
        self.trail.release();
    }

    /// Advance timers and physics by `elapsed_ms` of frame time
    pub fn tick(&mut self, elapsed_ms: f32) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(field) = self.field else {
            return;
        };
        let elapsed = if elapsed_ms.is_finite() {
            elapsed_ms.max(0.0)
        } else {
            0.0
        };

        // Countdown first so an expiring round spawns nothing more
        for _ in 0..self.countdown.advance(elapsed) {
            self.time_remaining = self.time_remaining.saturating_sub(1);
            self.emit(GameEvent::TimeChanged {
                remaining: self.time_remaining,
            });
            if self.time_remaining == 0 {
                self.end_round(EndReason::TimeExpired);
                return;
            }
        }

        if self.board.advance(elapsed) {
            self.emit(GameEvent::ComboChanged { combo: 0 });
        }

        // At most one spawn per tick; a stalled frame drops the backlog
        if self.spawn_timer.advance(elapsed) > 0
            && self.items.len() < self.difficulty.max_concurrent
        {
            self.spawn_item(None);
        }

        for _ in 0..self.physics.advance(elapsed) {
            let culled = kinematics::advance(&mut self.items, field.height, self.tuning.gravity);
            if !culled.is_empty() {
                log::debug!("Culled {} items below the field", culled.len());
                self.emit(GameEvent::ItemsRemoved {
                    ids: culled,
                    cause: RemovalCause::FellOut,
                });
            }
        }
    }

    /// Inject one item with a forced kind-selection roll, bypassing the
    /// scheduler and the concurrency cap. No-op outside `Playing`.
    pub fn spawn_with_roll(&mut self, roll: f32) -> Option<ItemId> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        self.spawn_item(Some(roll))
    }

    /// Player quit the round (restart/home)
    pub fn abort(&mut self) {
        self.end_round(EndReason::UserAbort);
    }

    /// Return to a clean idle state, aborting any running round
    pub fn go_idle(&mut self) {
        self.abort();
        self.phase = GamePhase::Idle;
        self.end_reason = None;
        self.time_remaining = 0;
        self.field = None;
        self.board.reset();
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Push all queued events into `sink`
    pub fn dispatch(&mut self, sink: &mut impl EventSink) {
        for event in self.events.drain(..) {
            sink.on_event(&event);
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn spawn_item(&mut self, roll: Option<f32>) -> Option<ItemId> {
        let field = self.field?;
        let item = match roll {
            Some(roll) => self.spawner.spawn_with_roll(field, roll),
            None => self.spawner.spawn(field),
        };

        log::debug!("Spawned {:?} #{} at x={:.0}", item.kind, item.id, item.pos.x);
        let id = item.id;
        self.emit(GameEvent::ItemSpawned {
            id,
            kind: item.kind,
            x: item.pos.x,
            y: item.pos.y,
            radius: item.radius(),
        });
        self.items.push(item);
        Some(id)
    }

    fn resolve_slice(&mut self, segment: &TrailSegment) {
        let result = check_collision(segment, &self.items, self.board.combo(), &self.cut);
        if !result.is_hit() {
            return;
        }

        let ids = result.hit_ids();
        self.items.retain(|item| !ids.contains(&item.id));
        log::debug!(
            "Slice hit {} items (+{} points, hazard: {})",
            ids.len(),
            result.score_delta,
            result.hazard_hit
        );

        self.emit(GameEvent::ItemsRemoved {
            ids,
            cause: RemovalCause::Sliced,
        });
        self.emit(GameEvent::SliceEffect { hits: result.hits });

        // Non-hazard hits in the batch are credited before a hazard ends the round
        if result.combo_delta > 0 {
            self.board.credit(result.score_delta, result.combo_delta);
            self.emit(GameEvent::ScoreChanged {
                total: self.board.score(),
                delta: result.score_delta,
                bonus: result.bonus_hit,
            });
            self.emit(GameEvent::ComboChanged {
                combo: self.board.combo(),
            });
            self.update_difficulty();
        }

        if result.hazard_hit {
            self.end_round(EndReason::HazardCut);
        }
    }

    /// Re-arm the spawn cadence when the score crosses into a new tier
    fn update_difficulty(&mut self) {
        let next = difficulty_for(self.board.score());
        if next == self.difficulty {
            return;
        }

        log::info!(
            "Difficulty up at score {}: every {}ms, max {} items",
            self.board.score(),
            next.interval_ms,
            next.max_concurrent
        );
        self.difficulty = next;
        self.spawn_timer.arm_with(next.interval_ms as f32);
    }

    fn end_round(&mut self, reason: EndReason) {
        if self.phase != GamePhase::Playing {
            return;
        }

        self.phase = GamePhase::Ended;
        self.end_reason = Some(reason);
        self.spawn_timer.cancel();
        self.countdown.cancel();
        self.board.halt();
        self.physics.reset();
        self.trail.clear();

        if !self.items.is_empty() {
            let ids = self.items.drain(..).map(|item| item.id).collect();
            self.emit(GameEvent::ItemsRemoved {
                ids,
                cause: RemovalCause::RoundOver,
            });
        }

        let final_score = self.board.score();
        self.emit(GameEvent::RoundEnded {
            reason,
            final_score,
        });
        log::info!("Round ended: {:?}, score {}", reason, final_score);
    }
}
