//! Full rounds driven through the public API

use std::collections::HashSet;

use glam::Vec2;

use slice_rush::sim::{EndReason, GameEvent, GamePhase, ItemKind, PointerSample, Session};
use slice_rush::{BestScore, Tuning};

const HAZARD_ROLL: f32 = 40.0;
const EGG_ROLL: f32 = 90.0;

fn empty_field_session(seed: u64) -> Session {
    let tuning = Tuning {
        initial_items: 0,
        ..Default::default()
    };
    let mut session = Session::with_seed(tuning, seed);
    session.start_round(800.0, 600.0).unwrap();
    session
}

fn swipe_through(session: &mut Session, target: Vec2) {
    session.on_pointer_release();
    session.on_pointer_sample(PointerSample::touch(target - Vec2::new(60.0, 0.0)));
    session.on_pointer_sample(PointerSample::touch(target + Vec2::new(60.0, 0.0)));
}

#[test]
fn test_hazard_swipe_ends_round_with_zero() {
    let mut session = empty_field_session(7);
    let id = session.spawn_with_roll(HAZARD_ROLL).unwrap();
    let hazard = session.items()[0].clone();
    assert_eq!(hazard.id, id);
    assert_eq!(hazard.kind, ItemKind::Hazard);

    swipe_through(&mut session, hazard.pos);

    assert_eq!(session.phase(), GamePhase::Ended);
    let events = session.drain_events();
    assert_eq!(
        events.last(),
        Some(&GameEvent::RoundEnded {
            reason: EndReason::HazardCut,
            final_score: 0
        })
    );
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, GameEvent::ScoreChanged { .. }))
    );
}

#[test]
fn test_untouched_round_times_out() {
    let mut session = Session::with_seed(Tuning::default(), 42);
    session.start_round(800.0, 600.0).unwrap();

    let mut events = Vec::new();
    let mut frames = 0;
    while session.phase() == GamePhase::Playing && frames < 2000 {
        session.tick(16.0);
        session.dispatch(&mut events);
        frames += 1;
    }

    assert_eq!(session.end_reason(), Some(EndReason::TimeExpired));
    assert_eq!(session.time_remaining(), 0);
    assert!(session.items().is_empty());

    let countdown: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::TimeChanged { remaining } => Some(*remaining),
            _ => None,
        })
        .collect();
    assert_eq!(countdown, (0..15).rev().collect::<Vec<_>>());

    // Every spawned item leaves exactly once, and ids are unique
    let mut spawned = HashSet::new();
    let mut removed = HashSet::new();
    for event in &events {
        match event {
            GameEvent::ItemSpawned { id, .. } => assert!(spawned.insert(*id)),
            GameEvent::ItemsRemoved { ids, .. } => {
                for id in ids {
                    assert!(removed.insert(*id));
                }
            }
            _ => {}
        }
    }
    // The three initial items were queued before the first dispatch
    assert!(spawned.len() >= 3);
    assert!(removed.is_subset(&spawned));
    assert!(spawned.difference(&removed).next().is_none());

    assert_eq!(
        events.last(),
        Some(&GameEvent::RoundEnded {
            reason: EndReason::TimeExpired,
            final_score: 0
        })
    );
}

#[test]
fn test_best_score_follows_rounds() {
    let mut best = BestScore::new();
    let mut session = empty_field_session(3);

    session.spawn_with_roll(EGG_ROLL);
    let egg = session.items()[0].clone();
    assert_eq!(egg.kind, ItemKind::Egg);
    swipe_through(&mut session, egg.pos);
    assert_eq!(session.score(), 8);

    // Restarting mid-round aborts the first one
    session.start_round(800.0, 600.0).unwrap();
    session.dispatch(&mut best);
    assert_eq!(best.best, 8);
    assert_eq!(session.score(), 0);

    session.abort();
    session.dispatch(&mut best);
    assert_eq!(best.best, 8);
    assert_eq!(session.end_reason(), Some(EndReason::UserAbort));
}

#[test]
fn test_ids_unique_across_rounds() {
    let mut session = empty_field_session(11);
    let first = session.spawn_with_roll(0.0).unwrap();
    session.start_round(800.0, 600.0).unwrap();
    let second = session.spawn_with_roll(0.0).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_events_serialize_for_front_end() {
    let mut session = empty_field_session(5);
    session.spawn_with_roll(HAZARD_ROLL);
    let hazard = session.items()[0].clone();
    swipe_through(&mut session, hazard.pos);

    let json = serde_json::to_string(&session.drain_events()).unwrap();
    assert!(json.contains(r#""type":"round_started""#));
    assert!(json.contains(r#""kind":"hazard""#));
    assert!(json.contains(r#""reason":"hazard_cut""#));
}
