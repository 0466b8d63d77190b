//! Projectile kinds and the projectile entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable projectile identifier (never reused within a session)
pub type ItemId = u32;

/// Projectile categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Stone,
    Cigarette,
    Mud,
    /// The summons - slicing it ends the round
    Hazard,
    Waste,
    Bottle,
    /// Bonus points
    Bomb,
    /// Bonus points
    Cabbage,
    Egg,
}

/// Static per-kind data
#[derive(Debug, Clone, Copy)]
pub struct KindSpec {
    pub kind: ItemKind,
    /// Relative spawn weight
    pub weight: f32,
    /// Size range `[min_size, max_size)`
    pub min_size: f32,
    pub max_size: f32,
    /// Points before combo bonus
    pub base_points: u32,
}

/// Spawn table, walked in order by weighted selection
pub const KIND_TABLE: [KindSpec; 9] = [
    KindSpec {
        kind: ItemKind::Stone,
        weight: 12.0,
        min_size: 60.0,
        max_size: 90.0,
        base_points: 5,
    },
    KindSpec {
        kind: ItemKind::Cigarette,
        weight: 10.0,
        min_size: 70.0,
        max_size: 100.0,
        base_points: 5,
    },
    KindSpec {
        kind: ItemKind::Mud,
        weight: 10.0,
        min_size: 60.0,
        max_size: 80.0,
        base_points: 5,
    },
    KindSpec {
        kind: ItemKind::Hazard,
        weight: 30.0,
        min_size: 80.0,
        max_size: 120.0,
        base_points: 0,
    },
    KindSpec {
        kind: ItemKind::Waste,
        weight: 8.0,
        min_size: 60.0,
        max_size: 90.0,
        base_points: 20,
    },
    KindSpec {
        kind: ItemKind::Bottle,
        weight: 8.0,
        min_size: 70.0,
        max_size: 100.0,
        base_points: 5,
    },
    KindSpec {
        kind: ItemKind::Bomb,
        weight: 4.0,
        min_size: 60.0,
        max_size: 80.0,
        base_points: 15,
    },
    KindSpec {
        kind: ItemKind::Cabbage,
        weight: 5.0,
        min_size: 80.0,
        max_size: 120.0,
        base_points: 12,
    },
    KindSpec {
        kind: ItemKind::Egg,
        weight: 4.0,
        min_size: 50.0,
        max_size: 70.0,
        base_points: 8,
    },
];

impl ItemKind {
    pub fn spec(self) -> &'static KindSpec {
        // Table order matches declaration order
        &KIND_TABLE[self as usize]
    }

    pub fn base_points(self) -> u32 {
        self.spec().base_points
    }

    pub fn is_hazard(self) -> bool {
        self == ItemKind::Hazard
    }

    pub fn is_bonus(self) -> bool {
        matches!(self, ItemKind::Bomb | ItemKind::Cabbage)
    }
}

/// A falling item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ItemId,
    pub kind: ItemKind,
    pub pos: Vec2,
    /// Units per physics step
    pub vel: Vec2,
    /// Cosmetic spin (degrees)
    pub rotation: f32,
    /// Degrees per physics step
    pub rotation_rate: f32,
    size: f32,
    radius: f32,
}

impl Projectile {
    pub fn new(id: ItemId, kind: ItemKind, size: f32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            vel,
            rotation: 0.0,
            rotation_rate: 0.0,
            size,
            radius: size / 2.0,
        }
    }

    pub fn with_spin(mut self, rotation: f32, rotation_rate: f32) -> Self {
        self.rotation = rotation;
        self.rotation_rate = rotation_rate;
        self
    }

    /// Sprite size fixed at spawn
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Hit radius, always `size / 2`
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}
