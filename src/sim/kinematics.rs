//! Projectile motion and out-of-bounds culling
//!
//! Velocities are in units per logical step. `StepClock` turns variable frame
//! times into a whole number of steps so trajectories don't depend on the
//! display refresh rate.

use super::item::{ItemId, Projectile};
use crate::consts::CULL_MARGIN;

/// Advance every item by one step and drop the ones that fell off the field.
///
/// Returns the ids of culled items.
pub fn advance(items: &mut Vec<Projectile>, field_height: f32, gravity: f32) -> Vec<ItemId> {
    for item in items.iter_mut() {
        item.pos += item.vel;
        item.vel.y += gravity;
        item.rotation += item.rotation_rate;
    }

    let floor = field_height + CULL_MARGIN;
    let mut culled = Vec::new();
    items.retain(|item| {
        if item.pos.y > floor {
            culled.push(item.id);
            false
        } else {
            true
        }
    });
    culled
}

/// Fixed-step accumulator
#[derive(Debug, Clone)]
pub struct StepClock {
    step_ms: f32,
    max_substeps: u32,
    accumulator_ms: f32,
}

impl StepClock {
    pub fn new(step_ms: f32, max_substeps: u32) -> Self {
        Self {
            step_ms,
            max_substeps,
            accumulator_ms: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
    }

    /// Feed elapsed frame time, returning how many steps to run now
    pub fn advance(&mut self, elapsed_ms: f32) -> u32 {
        self.accumulator_ms += elapsed_ms;

        let mut steps = 0;
        while self.accumulator_ms >= self.step_ms && steps < self.max_substeps {
            self.accumulator_ms -= self.step_ms;
            steps += 1;
        }

        // Drop backlog we could not simulate
        if steps == self.max_substeps {
            self.accumulator_ms = self.accumulator_ms.min(self.step_ms);
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::item::ItemKind;
    use glam::Vec2;

    fn item_at(id: ItemId, pos: Vec2, vel: Vec2) -> Projectile {
        Projectile::new(id, ItemKind::Stone, 60.0, pos, vel).with_spin(0.0, 2.0)
    }

    #[test]
    fn test_single_step() {
        let mut items = vec![item_at(1, Vec2::new(100.0, 650.0), Vec2::new(3.0, -30.0))];
        let culled = advance(&mut items, 600.0, 0.4);
        assert!(culled.is_empty());
        assert_eq!(items[0].pos, Vec2::new(103.0, 620.0));
        assert!((items[0].vel.y - -29.6).abs() < 1e-5);
        assert_eq!(items[0].rotation, 2.0);
    }

    #[test]
    fn test_apex_after_75_steps() {
        let mut items = vec![item_at(1, Vec2::new(400.0, 650.0), Vec2::new(0.0, -30.0))];
        for _ in 0..75 {
            advance(&mut items, 600.0, 0.4);
        }
        assert!(items[0].vel.y.abs() < 1e-3, "vy = {}", items[0].vel.y);

        // One more step consumes the residual; from then on it falls
        advance(&mut items, 600.0, 0.4);
        let mut last_y = items[0].pos.y;
        for _ in 0..50 {
            advance(&mut items, 600.0, 0.4);
            assert!(items[0].pos.y > last_y);
            last_y = items[0].pos.y;
        }
    }

    #[test]
    fn test_culls_below_field() {
        let mut items = vec![
            item_at(1, Vec2::new(100.0, 699.0), Vec2::new(0.0, 2.0)),
            item_at(2, Vec2::new(100.0, 300.0), Vec2::new(0.0, 2.0)),
        ];
        let culled = advance(&mut items, 600.0, 0.4);
        assert_eq!(culled, vec![1]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);
    }

    #[test]
    fn test_fresh_spawn_not_culled() {
        // Spawned 50 below the edge, moving up
        let mut items = vec![item_at(1, Vec2::new(100.0, 650.0), Vec2::new(0.0, -25.0))];
        assert!(advance(&mut items, 600.0, 0.4).is_empty());
    }

    #[test]
    fn test_step_clock_decouples_frame_rate() {
        let mut clock = StepClock::new(20.0, 5);
        // 144 Hz frames
        let steps: u32 = (0..144).map(|_| clock.advance(1000.0 / 144.0)).sum();
        assert!((49..=50).contains(&steps));

        let mut clock = StepClock::new(20.0, 5);
        // 30 Hz frames
        let steps: u32 = (0..30).map(|_| clock.advance(1000.0 / 30.0)).sum();
        assert!((49..=50).contains(&steps));
    }

    #[test]
    fn test_step_clock_caps_substeps() {
        let mut clock = StepClock::new(20.0, 5);
        assert_eq!(clock.advance(1000.0), 5);
        // Backlog dropped
        assert!(clock.advance(0.0) <= 1);
    }
}
