//! Browser facade
//!
//! Thin `wasm-bindgen` wrapper over `Session`. Events, cues and the live item
//! list cross to JavaScript as JSON strings.

use glam::Vec2;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::audio::CueQueue;
use crate::best_score::BestScore;
use crate::sim::{EventSink, GameEvent, PointerSample, Session};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Slice Rush core loaded");
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::warn!("Failed to serialize for JS: {}", e);
        "[]".to_string()
    })
}

/// Game instance owned by the page
#[wasm_bindgen]
pub struct WebGame {
    session: Session,
    best: BestScore,
    cues: CueQueue,
    outbox: Vec<GameEvent>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        WebGame {
            session: Session::new(Tuning::load()),
            best: BestScore::load(),
            cues: CueQueue::new(),
            outbox: Vec::new(),
        }
    }

    pub fn start_round(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        let result = self.session.start_round(width, height);
        self.flush();
        result.map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `touch` samples always slice; mouse samples only while `pressed`
    pub fn pointer_move(&mut self, x: f32, y: f32, touch: bool, pressed: bool) {
        let pos = Vec2::new(x, y);
        let sample = if touch {
            PointerSample::touch(pos)
        } else {
            PointerSample::mouse(pos, pressed)
        };
        self.session.on_pointer_sample(sample);
        self.flush();
    }

    pub fn pointer_up(&mut self) {
        self.session.on_pointer_release();
    }

    pub fn tick(&mut self, elapsed_ms: f32) {
        self.session.tick(elapsed_ms);
        self.flush();
    }

    /// Restart/home button mid-round
    pub fn abort(&mut self) {
        self.session.abort();
        self.flush();
    }

    pub fn go_home(&mut self) {
        self.session.go_idle();
        self.flush();
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.cues.set_muted(muted);
    }

    pub fn score(&self) -> f64 {
        self.session.score() as f64
    }

    pub fn best_score(&self) -> f64 {
        self.best.best as f64
    }

    pub fn combo(&self) -> u32 {
        self.session.combo()
    }

    pub fn time_remaining(&self) -> u32 {
        self.session.time_remaining()
    }

    /// Queued events as a JSON array
    pub fn take_events(&mut self) -> String {
        let json = to_json(&self.outbox);
        self.outbox.clear();
        json
    }

    /// Queued sound cues as a JSON array
    pub fn take_cues(&mut self) -> String {
        to_json(&self.cues.drain())
    }

    /// Live items for rendering
    pub fn items_json(&self) -> String {
        to_json(self.session.items())
    }

    /// Retained trail segments for rendering
    pub fn trail_json(&self) -> String {
        let segments: Vec<_> = self.session.trail().segments().collect();
        to_json(&segments)
    }

    fn flush(&mut self) {
        for event in self.session.drain_events() {
            self.best.on_event(&event);
            self.cues.on_event(&event);
            self.outbox.push(event);
        }
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
