//! Session-level state types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SIDE_MARGIN;
use crate::error::FieldError;

/// Validated play-field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    /// Reject dimensions that would give a degenerate spawn range
    pub fn new(width: f32, height: f32) -> Result<Self, FieldError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(FieldError::NonPositive { width, height });
        }
        if width <= SIDE_MARGIN * 2.0 {
            return Err(FieldError::TooNarrow {
                width,
                margin: SIDE_MARGIN,
            });
        }
        Ok(Self { width, height })
    }
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No round running
    Idle,
    /// Active gameplay
    Playing,
    /// Round over, waiting for restart or return to idle
    Ended,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    TimeExpired,
    HazardCut,
    UserAbort,
}

/// Pointer device type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerKind {
    /// Every move is a drag
    #[default]
    Touch,
    /// Moves only slice while the button is held
    Mouse,
}

/// One pointer motion sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub pos: Vec2,
    pub kind: PointerKind,
    pub pressed: bool,
}

impl PointerSample {
    pub fn touch(pos: Vec2) -> Self {
        Self {
            pos,
            kind: PointerKind::Touch,
            pressed: true,
        }
    }

    pub fn mouse(pos: Vec2, pressed: bool) -> Self {
        Self {
            pos,
            kind: PointerKind::Mouse,
            pressed,
        }
    }

    /// Whether this sample should extend the trail
    pub fn is_dragging(&self) -> bool {
        match self.kind {
            PointerKind::Touch => true,
            PointerKind::Mouse => self.pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_validation() {
        assert!(Field::new(800.0, 600.0).is_ok());
        assert_eq!(
            Field::new(0.0, 600.0),
            Err(FieldError::NonPositive {
                width: 0.0,
                height: 600.0
            })
        );
        assert!(matches!(
            Field::new(800.0, -1.0),
            Err(FieldError::NonPositive { .. })
        ));
        assert!(matches!(
            Field::new(f32::NAN, 600.0),
            Err(FieldError::NonPositive { .. })
        ));
        assert!(matches!(
            Field::new(100.0, 600.0),
            Err(FieldError::TooNarrow { .. })
        ));
    }

    #[test]
    fn test_mouse_drag_gating() {
        assert!(PointerSample::touch(Vec2::ZERO).is_dragging());
        assert!(PointerSample::mouse(Vec2::ZERO, true).is_dragging());
        assert!(!PointerSample::mouse(Vec2::ZERO, false).is_dragging());
    }
}
