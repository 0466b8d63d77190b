//! Slice Rush entry point
//!
//! The browser build is driven from JavaScript through `slice_rush::web`.
//! Natively this runs headless rounds with a simple bot so the simulation can
//! be exercised and profiled without a front-end.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use slice_rush::audio::CueQueue;
    use slice_rush::sim::{
        CutParams, EventSink, GameEvent, GamePhase, PointerSample, Session, TrailSegment,
        check_collision,
    };
    use slice_rush::{BestScore, Tuning};

    const FIELD_WIDTH: f32 = 800.0;
    const FIELD_HEIGHT: f32 = 600.0;
    /// ~60 fps
    const FRAME_MS: f32 = 16.0;
    /// Bot reaction time in frames
    const SWIPE_EVERY: u32 = 6;
    /// Half-length of a bot swipe
    const SWIPE_REACH: f32 = 40.0;

    /// Pick a short horizontal swipe through a visible item that won't clip
    /// the hazard
    fn plan_swipe(session: &Session, cut: &CutParams) -> Option<TrailSegment> {
        let cursor = session.cursor().unwrap_or(Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0));

        session
            .items()
            .iter()
            .filter(|item| !item.kind.is_hazard() && item.pos.y < FIELD_HEIGHT)
            .map(|item| {
                let offset = Vec2::new(SWIPE_REACH, 0.0);
                TrailSegment::new(item.pos - offset, item.pos + offset)
            })
            .filter(|segment| {
                let result = check_collision(segment, session.items(), session.combo(), cut);
                result.is_hit() && !result.hazard_hit
            })
            .min_by(|a, b| {
                a.start
                    .distance(cursor)
                    .partial_cmp(&b.start.distance(cursor))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Everything the demo listens to
    struct Listeners {
        best: BestScore,
        cues: CueQueue,
    }

    impl EventSink for Listeners {
        fn on_event(&mut self, event: &GameEvent) {
            log::trace!("{:?}", event);
            self.best.on_event(event);
            self.cues.on_event(event);
        }
    }

    fn play_round(session: &mut Session, listeners: &mut Listeners) -> u64 {
        if let Err(e) = session.start_round(FIELD_WIDTH, FIELD_HEIGHT) {
            log::error!("Could not start round: {}", e);
            return 0;
        }
        let cut = CutParams::from_tuning(session.tuning());

        let mut frame = 0u32;
        let mut swipes = 0u32;
        while session.phase() == GamePhase::Playing {
            session.tick(FRAME_MS);

            if frame % SWIPE_EVERY == 0 {
                if let Some(segment) = plan_swipe(session, &cut) {
                    session.on_pointer_release();
                    session.on_pointer_sample(PointerSample::touch(segment.start));
                    session.on_pointer_sample(PointerSample::touch(segment.end));
                    swipes += 1;
                }
            }

            session.dispatch(listeners);
            for cue in listeners.cues.drain() {
                log::debug!("cue {:?}", cue);
            }
            frame += 1;
        }

        log::info!(
            "Round over after {} frames ({} swipes): {:?}, score {}",
            frame,
            swipes,
            session.end_reason(),
            session.score()
        );
        session.score()
    }

    pub fn run() {
        let rounds: u32 = std::env::args()
            .nth(1)
            .and_then(|arg| arg.parse().ok())
            .unwrap_or(3);

        let mut session = Session::new(Tuning::load());
        let mut listeners = Listeners {
            best: BestScore::load(),
            cues: CueQueue::new(),
        };

        for round in 1..=rounds {
            let score = play_round(&mut session, &mut listeners);
            println!("round {round}: score {score}");
        }
        println!("best: {}", listeners.best.best);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Slice Rush (native) starting headless bot...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is slice_rush::web::wasm_start, this is just to satisfy the compiler
}
