//! Simulation module
//!
//! All gameplay logic lives here:
//! - Virtual time only (driven by `Session::tick`)
//! - Fixed physics step decoupled from frame rate
//! - No rendering, audio or storage dependencies

pub mod collision;
pub mod combo;
pub mod difficulty;
pub mod event;
pub mod item;
pub mod kinematics;
pub mod session;
pub mod spawn;
pub mod state;
pub mod timer;
pub mod trail;

pub use collision::{CollisionResult, CutParams, SliceHit, check_collision};
pub use combo::{ComboState, ScoreBoard};
pub use difficulty::{Difficulty, difficulty_for};
pub use event::{EventSink, GameEvent, RemovalCause};
pub use item::{ItemId, ItemKind, KIND_TABLE, Projectile};
pub use session::Session;
pub use spawn::{Spawner, select_kind};
pub use state::{EndReason, Field, GamePhase, PointerKind, PointerSample};
pub use trail::{TrailSegment, TrailTracker};
