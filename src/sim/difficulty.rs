//! Score-driven difficulty tiers

use serde::{Deserialize, Serialize};

/// Spawn cadence and crowding limit for a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Time between spawn attempts (ms)
    pub interval_ms: u32,
    /// Spawn attempts are skipped at or above this many live items
    pub max_concurrent: usize,
}

/// `(score upper bound, tier)`, checked in order
const TIERS: [(u64, Difficulty); 4] = [
    (
        100,
        Difficulty {
            interval_ms: 700,
            max_concurrent: 12,
        },
    ),
    (
        300,
        Difficulty {
            interval_ms: 600,
            max_concurrent: 15,
        },
    ),
    (
        600,
        Difficulty {
            interval_ms: 500,
            max_concurrent: 18,
        },
    ),
    (
        1000,
        Difficulty {
            interval_ms: 400,
            max_concurrent: 22,
        },
    ),
];

const TOP_TIER: Difficulty = Difficulty {
    interval_ms: 350,
    max_concurrent: 25,
};

/// Difficulty for a cumulative score
pub fn difficulty_for(score: u64) -> Difficulty {
    TIERS
        .iter()
        .find(|(bound, _)| score < *bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(TOP_TIER)
}
