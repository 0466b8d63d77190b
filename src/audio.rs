//! Sound cue mapping
//!
//! The core plays nothing. This sink turns game events into cues the
//! front-end can hand to whatever audio backend it uses.

use serde::{Deserialize, Serialize};

use crate::sim::{EndReason, EventSink, GameEvent};

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    /// Background loop starts
    Music,
    /// Regular item sliced
    Slice,
    /// Batch included a bonus item
    BonusSlice,
    /// The hazard was cut
    HazardCut,
    /// Time ran out
    GameOver,
    /// Stop everything (player left the round)
    StopAll,
}

/// Cue for one event, if any
pub fn cue_for(event: &GameEvent) -> Option<SoundCue> {
    match event {
        GameEvent::RoundStarted { .. } => Some(SoundCue::Music),
        GameEvent::ScoreChanged { bonus: true, .. } => Some(SoundCue::BonusSlice),
        GameEvent::ScoreChanged { .. } => Some(SoundCue::Slice),
        GameEvent::RoundEnded { reason, .. } => Some(match reason {
            EndReason::HazardCut => SoundCue::HazardCut,
            EndReason::TimeExpired => SoundCue::GameOver,
            EndReason::UserAbort => SoundCue::StopAll,
        }),
        _ => None,
    }
}

/// Pending cues for the current round
#[derive(Debug, Clone, Default)]
pub struct CueQueue {
    pending: Vec<SoundCue>,
    muted: bool,
}

impl CueQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.pending.clear();
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Take pending cues
    pub fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.pending)
    }
}

impl EventSink for CueQueue {
    fn on_event(&mut self, event: &GameEvent) {
        // A new round drops anything left over from the last one
        if matches!(event, GameEvent::RoundStarted { .. }) {
            self.pending.clear();
        }
        if self.muted {
            return;
        }
        if let Some(cue) = cue_for(event) {
            self.pending.push(cue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_mapping() {
        let score = |bonus| GameEvent::ScoreChanged {
            total: 10,
            delta: 10,
            bonus,
        };
        assert_eq!(cue_for(&score(false)), Some(SoundCue::Slice));
        assert_eq!(cue_for(&score(true)), Some(SoundCue::BonusSlice));
        assert_eq!(
            cue_for(&GameEvent::RoundEnded {
                reason: EndReason::HazardCut,
                final_score: 0
            }),
            Some(SoundCue::HazardCut)
        );
        assert_eq!(cue_for(&GameEvent::ComboChanged { combo: 2 }), None);
    }

    #[test]
    fn test_queue_resets_on_round_start() {
        let mut queue = CueQueue::new();
        queue.on_event(&GameEvent::ScoreChanged {
            total: 5,
            delta: 5,
            bonus: false,
        });
        queue.on_event(&GameEvent::RoundStarted {
            width: 800.0,
            height: 600.0,
            seconds: 15,
        });
        assert_eq!(queue.drain(), vec![SoundCue::Music]);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_muted_queue_stays_empty() {
        let mut queue = CueQueue::new();
        queue.set_muted(true);
        queue.on_event(&GameEvent::RoundEnded {
            reason: EndReason::TimeExpired,
            final_score: 3,
        });
        assert!(queue.drain().is_empty());
    }
}
