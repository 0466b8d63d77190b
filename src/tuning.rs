//! Data-driven game balance
//!
//! Every field falls back to its default when missing, so a partial JSON
//! document only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Gameplay tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Round ===
    /// Countdown length in seconds
    pub round_seconds: u32,
    /// Items seeded directly at round start
    pub initial_items: usize,

    // === Physics ===
    /// Downward acceleration (units/step²)
    pub gravity: f32,
    /// Logical physics step (ms)
    pub physics_step_ms: f32,
    /// Maximum physics steps per tick
    pub max_substeps: u32,

    // === Slicing ===
    /// Slice half-thickness
    pub cut_range: f32,
    /// Minimum pointer travel that forms a trail segment
    pub min_segment_length: f32,
    /// Retained trail segments
    pub trail_capacity: usize,
    /// Live item count above which the broad phase tightens
    pub crowded_item_count: usize,
    /// Broad-phase slack when not crowded
    pub broad_phase_slack: f32,

    // === Scoring ===
    /// Combo idle window (ms)
    pub combo_window_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_SECONDS,
            initial_items: INITIAL_ITEMS,

            gravity: GRAVITY,
            physics_step_ms: PHYSICS_STEP_MS,
            max_substeps: MAX_SUBSTEPS,

            cut_range: CUT_RANGE,
            min_segment_length: MIN_SEGMENT_LENGTH,
            trail_capacity: TRAIL_CAPACITY,
            crowded_item_count: CROWDED_ITEM_COUNT,
            broad_phase_slack: BROAD_PHASE_SLACK,

            combo_window_ms: COMBO_WINDOW_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every knob is usable by the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if self.round_seconds == 0 {
            return invalid("round_seconds", "must be at least 1");
        }
        if self.max_substeps == 0 {
            return invalid("max_substeps", "must be at least 1");
        }
        if self.trail_capacity == 0 {
            return invalid("trail_capacity", "must be at least 1");
        }

        let non_negative = [
            ("gravity", self.gravity),
            ("cut_range", self.cut_range),
            ("min_segment_length", self.min_segment_length),
            ("broad_phase_slack", self.broad_phase_slack),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return invalid(field, "must be finite and non-negative");
            }
        }

        let positive = [
            ("physics_step_ms", self.physics_step_ms),
            ("combo_window_ms", self.combo_window_ms),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return invalid(field, "must be finite and positive");
            }
        }

        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "slice_rush_tuning";

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "round_seconds": 30, "cut_range": 20.0 }"#).unwrap();
        assert_eq!(tuning.round_seconds, 30);
        assert_eq!(tuning.cut_range, 20.0);
        assert_eq!(tuning.trail_capacity, TRAIL_CAPACITY);
        assert_eq!(tuning.combo_window_ms, COMBO_WINDOW_MS);
    }

    #[test]
    fn test_rejects_zero_round() {
        let err = Tuning::from_json(r#"{ "round_seconds": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "round_seconds",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_gravity() {
        let tuning = Tuning {
            gravity: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Invalid { field: "gravity", .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }
}
