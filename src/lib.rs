//! Slice Rush - simulation core for a timed arcade slicing game
//!
//! Core modules:
//! - `sim`: Simulation (spawning, kinematics, trail collision, scoring, session)
//! - `tuning`: Data-driven game balance
//! - `best_score`: Persisted high-water mark
//! - `audio`: Sound cue mapping (playback belongs to the presentation layer)
//! - `web`: wasm-bindgen facade for the browser front-end

pub mod audio;
pub mod best_score;
pub mod error;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use best_score::BestScore;
pub use error::{FieldError, TuningError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical physics step (ms). Velocities are expressed in units per step.
    pub const PHYSICS_STEP_MS: f32 = 20.0;
    /// Maximum physics steps per `tick` to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;
    /// Downward acceleration (units/step²)
    pub const GRAVITY: f32 = 0.4;

    /// Horizontal spawn margin keeping items off the side edges
    pub const SIDE_MARGIN: f32 = 50.0;
    /// Items spawn this far below the bottom edge
    pub const SPAWN_DEPTH: f32 = 50.0;
    /// Items are culled once this far below the bottom edge
    pub const CULL_MARGIN: f32 = 100.0;

    /// Upward launch speed range (negative is up)
    pub const LAUNCH_VY_MIN: f32 = -45.0;
    pub const LAUNCH_VY_MAX: f32 = -25.0;
    /// Sideways drift range
    pub const LAUNCH_VX_MAX: f32 = 7.0;
    /// Spin range (degrees/step)
    pub const SPIN_RATE_MAX: f32 = 9.0;

    /// Effective slice half-thickness
    pub const CUT_RANGE: f32 = 35.0;
    /// Pointer moves shorter than this are ignored
    pub const MIN_SEGMENT_LENGTH: f32 = 10.0;
    /// Trail segments retained for rendering
    pub const TRAIL_CAPACITY: usize = 20;
    /// Above this many live items the broad phase drops its slack
    pub const CROWDED_ITEM_COUNT: usize = 15;
    /// Extra broad-phase tolerance when the field is not crowded
    pub const BROAD_PHASE_SLACK: f32 = 50.0;

    /// Combo resets after this long without a hit
    pub const COMBO_WINDOW_MS: f32 = 2000.0;
    /// Every N combo grants +1 point per hit
    pub const COMBO_BONUS_DIVISOR: u32 = 3;

    /// Round length
    pub const ROUND_SECONDS: u32 = 15;
    /// Items placed on the field immediately at round start
    pub const INITIAL_ITEMS: usize = 3;
}
