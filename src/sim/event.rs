//! Events emitted to the presentation layer

use serde::{Deserialize, Serialize};

use super::collision::SliceHit;
use super::item::{ItemId, ItemKind};
use super::state::EndReason;

/// Why items left the live set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalCause {
    Sliced,
    FellOut,
    RoundOver,
}

/// Something the renderer, audio or persistence layer may react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted {
        width: f32,
        height: f32,
        seconds: u32,
    },
    ItemSpawned {
        id: ItemId,
        kind: ItemKind,
        x: f32,
        y: f32,
        radius: f32,
    },
    ItemsRemoved {
        ids: Vec<ItemId>,
        cause: RemovalCause,
    },
    /// One batch of cut effects per trail segment
    SliceEffect {
        hits: Vec<SliceHit>,
    },
    ScoreChanged {
        total: u64,
        delta: u64,
        /// Batch included a bonus kind
        bonus: bool,
    },
    ComboChanged {
        combo: u32,
    },
    TimeChanged {
        remaining: u32,
    },
    RoundEnded {
        reason: EndReason,
        final_score: u64,
    },
}

/// Passive consumer of game events
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_is_tagged() {
        let event = GameEvent::RoundEnded {
            reason: EndReason::HazardCut,
            final_score: 42,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"round_ended","reason":"hazard_cut","final_score":42}"#
        );
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<GameEvent> = Vec::new();
        sink.on_event(&GameEvent::ComboChanged { combo: 3 });
        assert_eq!(sink, vec![GameEvent::ComboChanged { combo: 3 }]);
    }
}
