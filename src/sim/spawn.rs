//! Weighted-random projectile factory

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::item::{ItemId, ItemKind, KIND_TABLE, Projectile};
use super::state::Field;
use crate::consts::*;

/// Sum of all kind weights
pub fn total_weight() -> f32 {
    KIND_TABLE.iter().map(|s| s.weight).sum()
}

/// Pick a kind for a roll in `[0, total_weight())`.
///
/// Walks the table subtracting weights until the roll falls below the
/// current entry. Out-of-range rolls select the first entry.
pub fn select_kind(roll: f32) -> ItemKind {
    let mut remaining = roll;
    for spec in &KIND_TABLE {
        if remaining < spec.weight {
            return spec.kind;
        }
        remaining -= spec.weight;
    }
    KIND_TABLE[0].kind
}

/// Item factory. Owns the RNG and the id counter so ids stay unique across
/// rounds of the same session.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    next_id: ItemId,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    fn next_item_id(&mut self) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one item just below the field with an independent weighted draw
    pub fn spawn(&mut self, field: Field) -> Projectile {
        let roll = self.rng.random_range(0.0..total_weight());
        self.spawn_with_roll(field, roll)
    }

    /// Spawn with a forced kind-selection roll; everything else stays random
    pub fn spawn_with_roll(&mut self, field: Field, roll: f32) -> Projectile {
        let spec = select_kind(roll).spec();
        let rng = &mut self.rng;

        let size = rng.random_range(spec.min_size..spec.max_size).floor();
        let pos = Vec2::new(
            rng.random_range(SIDE_MARGIN..field.width - SIDE_MARGIN),
            field.height + SPAWN_DEPTH,
        );
        let vel = Vec2::new(
            rng.random_range(-LAUNCH_VX_MAX..LAUNCH_VX_MAX),
            rng.random_range(LAUNCH_VY_MIN..LAUNCH_VY_MAX),
        );
        let rotation = rng.random_range(0.0..360.0);
        let rotation_rate = rng.random_range(-SPIN_RATE_MAX..SPIN_RATE_MAX);

        let id = self.next_item_id();
        Projectile::new(id, spec.kind, size, pos, vel).with_spin(rotation, rotation_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn field() -> Field {
        Field::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_select_kind_boundaries() {
        assert_eq!(select_kind(0.0), ItemKind::Stone);
        assert_eq!(select_kind(11.99), ItemKind::Stone);
        assert_eq!(select_kind(12.0), ItemKind::Cigarette);
        assert_eq!(select_kind(32.0), ItemKind::Hazard);
        assert_eq!(select_kind(61.9), ItemKind::Hazard);
        assert_eq!(select_kind(62.0), ItemKind::Waste);
        assert_eq!(select_kind(90.9), ItemKind::Egg);
        // Out of range falls back to the first entry
        assert_eq!(select_kind(91.0), ItemKind::Stone);
    }

    #[test]
    fn test_weighted_distribution() {
        let mut spawner = Spawner::new(7);
        let draws = 10_000;
        let mut counts: HashMap<ItemKind, u32> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(spawner.spawn(field()).kind).or_default() += 1;
        }

        let total = total_weight();
        for spec in &KIND_TABLE {
            let expected = spec.weight / total;
            let observed = counts.get(&spec.kind).copied().unwrap_or(0) as f32 / draws as f32;
            assert!(
                (observed - expected).abs() < 0.03,
                "{:?}: expected {:.3}, observed {:.3}",
                spec.kind,
                expected,
                observed
            );
        }
    }

    #[test]
    fn test_spawn_ranges() {
        let mut spawner = Spawner::new(42);
        let f = field();
        for _ in 0..500 {
            let item = spawner.spawn(f);
            let spec = item.kind.spec();
            assert!(item.size() >= spec.min_size && item.size() < spec.max_size);
            assert!(item.pos.x >= SIDE_MARGIN && item.pos.x < f.width - SIDE_MARGIN);
            assert_eq!(item.pos.y, f.height + SPAWN_DEPTH);
            assert!(item.vel.y >= LAUNCH_VY_MIN && item.vel.y < LAUNCH_VY_MAX);
            assert!(item.vel.x >= -LAUNCH_VX_MAX && item.vel.x < LAUNCH_VX_MAX);
            assert!(item.rotation_rate.abs() <= SPIN_RATE_MAX);
        }
    }

    #[test]
    fn test_ids_unique() {
        let mut spawner = Spawner::new(1);
        let a = spawner.spawn(field());
        let b = spawner.spawn(field());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_forced_roll_selects_hazard() {
        let mut spawner = Spawner::new(3);
        let item = spawner.spawn_with_roll(field(), 40.0);
        assert_eq!(item.kind, ItemKind::Hazard);
    }

    proptest! {
        #[test]
        fn prop_radius_is_half_size(seed in any::<u64>(), roll in 0.0f32..91.0) {
            let mut spawner = Spawner::new(seed);
            let item = spawner.spawn_with_roll(field(), roll);
            prop_assert_eq!(item.radius(), item.size() / 2.0);
        }
    }
}
