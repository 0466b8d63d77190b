//! Error types
//!
//! The simulation has no I/O failure modes; these cover rejected inputs only.

use thiserror::Error;

/// Rejected play-field dimensions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("field dimensions must be finite and positive, got {width}x{height}")]
    NonPositive { width: f32, height: f32 },
    #[error("field width {width} leaves no spawn range inside the {margin} unit side margins")]
    TooNarrow { width: f32, margin: f32 },
}

/// Rejected tuning configuration
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
